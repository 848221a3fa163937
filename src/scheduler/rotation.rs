use super::{types::PlanError, util, PlanOptions};
use crate::calendar::WeekKey;
use crate::model::{DayAssignment, EmployeeSchedule, ShiftLabel, ShiftTemplate};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Affecte à chaque personne un horaire pour chaque jour retenu.
///
/// L'équipe A (première moitié arrondie au-dessus) prend l'horaire de rang
/// `semaine % n`, l'équipe B celui de rang `(semaine + 1) % n`.
pub(super) fn rotate_cohorts(
    employees: &[String],
    weeks: &BTreeMap<WeekKey, Vec<NaiveDate>>,
    opts: &PlanOptions,
) -> Result<Vec<EmployeeSchedule>, PlanError> {
    opts.validate()?;

    let half = employees.len().div_ceil(2);
    let cohorts = [(false, 0..half), (true, half..employees.len())];

    let mut out: Vec<EmployeeSchedule> = employees.iter().map(EmployeeSchedule::new).collect();

    for (week_index, (week, days)) in weeks.iter().enumerate() {
        plan_debug!(%week, week_index, days = days.len(), "rotating cohorts");
        for (offset, members) in cohorts.iter().cloned() {
            let base = pick(&opts.weekday_templates, week_index, offset);
            let friday = (!opts.friday_templates.is_empty())
                .then(|| pick(&opts.friday_templates, week_index, offset));

            for slot in members {
                for &date in days {
                    let label = label_for_day(date, week_index, base, friday, opts);
                    out[slot].days.push(DayAssignment { date, label });
                }
            }
        }
    }

    Ok(out)
}

fn pick(templates: &[ShiftTemplate], week_index: usize, offset: bool) -> &ShiftTemplate {
    &templates[util::rotation_index(week_index, templates.len(), offset)]
}

fn label_for_day(
    date: NaiveDate,
    week_index: usize,
    base: &ShiftTemplate,
    friday: Option<&ShiftTemplate>,
    opts: &PlanOptions,
) -> ShiftLabel {
    if util::is_saturday(date) {
        if !opts.works_saturday {
            // normalement filtré par le partitionnement
            return ShiftLabel::FreeDay;
        }
        if opts.saturday_templates.is_empty() {
            return ShiftLabel::NoTemplateConfigured;
        }
        let idx = week_index % opts.saturday_templates.len();
        return ShiftLabel::Template(opts.saturday_templates[idx].clone());
    }
    if util::is_friday(date) {
        if let Some(friday) = friday {
            return ShiftLabel::Template(friday.clone());
        }
    }
    ShiftLabel::Template(base.clone())
}
