use crate::calendar::WeekKey;
use crate::model::DayAssignment;
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::BTreeMap;

pub(super) fn is_saturday(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Sat
}

pub(super) fn is_friday(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Fri
}

/// Index dans une rotation de `len` horaires, avec décalage d'une semaine pour l'équipe B.
/// Sans décalage possible (un seul horaire), les deux équipes partagent l'index.
pub(super) fn rotation_index(week_index: usize, len: usize, offset: bool) -> usize {
    if offset && len > 1 {
        (week_index + 1) % len
    } else {
        week_index % len
    }
}

/// Index des jours réellement travaillés (hors sentinelles), groupés par semaine ISO.
pub(super) fn worked_days_by_week(days: &[DayAssignment]) -> BTreeMap<WeekKey, Vec<usize>> {
    let mut out: BTreeMap<WeekKey, Vec<usize>> = BTreeMap::new();
    for (idx, day) in days.iter().enumerate() {
        if day.label.is_worked() {
            out.entry(WeekKey::of(day.date)).or_default().push(idx);
        }
    }
    out
}
