use super::{util, FULL_WEEK_DAYS, MAX_RESTS_PER_DAY};
use crate::model::{EmployeeSchedule, ShiftLabel};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Accorde au plus un jour de repos par personne sur le mois.
///
/// Glouton, sans retour arrière : les personnes sont traitées par ordre
/// alphabétique, les semaines complètes (6 jours) d'abord. Retourne les
/// personnes restées sans repos faute de date disponible.
pub(super) fn allocate_rest_days(employees: &mut [EmployeeSchedule]) -> Vec<String> {
    let mut order: Vec<usize> = (0..employees.len()).collect();
    order.sort_by(|&a, &b| employees[a].employee.cmp(&employees[b].employee));

    let mut counter: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    let mut unmet = Vec::new();

    for idx in order {
        let schedule = &mut employees[idx];
        if schedule.days.iter().any(|d| d.label.is_rest()) {
            continue;
        }

        let by_week = util::worked_days_by_week(&schedule.days);
        let full_weeks: Vec<&Vec<usize>> = by_week
            .values()
            .filter(|days| days.len() == FULL_WEEK_DAYS)
            .collect();
        let candidates = if full_weeks.is_empty() {
            by_week.values().collect()
        } else {
            full_weeks
        };

        let chosen = candidates.into_iter().find_map(|week| {
            let mut slots = week.clone();
            // tri stable : à égalité, l'ordre chronologique est conservé
            slots.sort_by_key(|&i| counter.get(&schedule.days[i].date).copied().unwrap_or(0));
            slots.into_iter().find(|&i| {
                counter.get(&schedule.days[i].date).copied().unwrap_or(0) < MAX_RESTS_PER_DAY
            })
        });

        match chosen {
            Some(day_idx) => {
                let day = &mut schedule.days[day_idx];
                day.label = ShiftLabel::RestDay;
                *counter.entry(day.date).or_insert(0) += 1;
                plan_debug!(employee = %schedule.employee, date = %day.date, "rest day granted");
            }
            None => {
                plan_warn!(employee = %schedule.employee, "no rest day available under the daily cap");
                unmet.push(schedule.employee.clone());
            }
        }
    }

    unmet
}
