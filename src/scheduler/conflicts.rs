use super::{partition::partition_weeks, Conflict, ConflictKind, PlanError, MAX_RESTS_PER_DAY};
use crate::calendar::WorkingDaySource;
use crate::model::Schedule;
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

pub(super) fn detect_conflicts<S: WorkingDaySource>(
    source: &S,
    schedule: &Schedule,
) -> Result<Vec<Conflict>, PlanError> {
    let days = source.month_days(schedule.year, schedule.month)?;
    let expected: BTreeSet<NaiveDate> = partition_weeks(&days, schedule.works_saturday)
        .into_values()
        .flatten()
        .collect();

    let mut out = Vec::new();
    let mut rests_per_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();

    for person in &schedule.employees {
        let conflict = |date: Option<NaiveDate>, kind: ConflictKind| Conflict {
            employee: Some(person.employee.clone()),
            date,
            kind,
        };

        let mut seen = BTreeSet::new();
        for day in &person.days {
            if !seen.insert(day.date) {
                out.push(conflict(Some(day.date), ConflictKind::DuplicateDay));
            }
            if !expected.contains(&day.date) {
                out.push(conflict(Some(day.date), ConflictKind::UnexpectedDay));
            }
        }
        for missing in expected.difference(&seen) {
            out.push(conflict(Some(*missing), ConflictKind::MissingDay));
        }

        let rests = person.rest_days();
        for date in &rests {
            *rests_per_day.entry(*date).or_insert(0) += 1;
        }
        if rests.len() > 1 {
            out.push(conflict(None, ConflictKind::MultipleRestDays { count: rests.len() }));
        }
        if !rests.is_empty() && !schedule.works_saturday {
            out.push(conflict(None, ConflictKind::RestWithoutSaturdayWork));
        }
    }

    for (date, count) in rests_per_day {
        if count > MAX_RESTS_PER_DAY {
            out.push(Conflict {
                employee: None,
                date: Some(date),
                kind: ConflictKind::RestCapExceeded { count },
            });
        }
    }

    Ok(out)
}
