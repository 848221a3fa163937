use crate::scheduler::PlanError;
use chrono::{Datelike, NaiveDate, Weekday};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// Source des jours calendaires d'un mois.
///
/// Aucune exclusion n'est faite ici : dimanches et samedis sont filtrés par le
/// partitionnement en semaines.
pub trait WorkingDaySource {
    /// Tous les jours du mois, dans l'ordre croissant.
    fn month_days(&self, year: i32, month: u32) -> Result<Vec<NaiveDate>, PlanError>;
}

/// Calendrier grégorien standard (chrono).
#[derive(Debug, Default, Clone, Copy)]
pub struct CalendarMonth;

impl WorkingDaySource for CalendarMonth {
    fn month_days(&self, year: i32, month: u32) -> Result<Vec<NaiveDate>, PlanError> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(PlanError::InvalidMonth { year, month })?;
        Ok(first
            .iter_days()
            .take_while(|d| d.month() == month)
            .collect())
    }
}

/// Clé de semaine ISO (année ISO, numéro de semaine), ordonnée chronologiquement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeekKey {
    pub year: i32,
    pub week: u32,
}

impl WeekKey {
    pub fn of(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        Self {
            year: iso.year(),
            week: iso.week(),
        }
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{:02}", self.year, self.week)
    }
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
