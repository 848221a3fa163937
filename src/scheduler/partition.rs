use super::util;
use crate::calendar::WeekKey;
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::BTreeMap;

/// Regroupe les jours du mois par semaine ISO.
///
/// Les dimanches sont toujours exclus, les samedis seulement si le samedi
/// n'est pas travaillé. L'ordre des jours est conservé dans chaque semaine.
pub fn partition_weeks(days: &[NaiveDate], works_saturday: bool) -> BTreeMap<WeekKey, Vec<NaiveDate>> {
    let mut weeks: BTreeMap<WeekKey, Vec<NaiveDate>> = BTreeMap::new();
    for &day in days {
        if day.weekday() == Weekday::Sun {
            continue;
        }
        if util::is_saturday(day) && !works_saturday {
            continue;
        }
        weeks.entry(WeekKey::of(day)).or_default().push(day);
    }
    weeks
}
