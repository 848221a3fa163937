//! Surcharges appliquées par l'appelant après génération : jour de la
//! famille, congés, repos manuels. Le cœur du planning n'en a pas connaissance.

use crate::calendar::WeekKey;
use crate::model::{Schedule, ShiftLabel};
use crate::scheduler::PlanError;
use chrono::NaiveDate;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Pauses déduites de chaque journée travaillée (30 min déjeuner + 15 min petit-déjeuner).
pub const BREAK_HOURS: f64 = 0.75;

/// Période de congés, bornes incluses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VacationRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl VacationRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Overrides {
    #[cfg_attr(feature = "serde", serde(default))]
    pub family_days: BTreeMap<String, NaiveDate>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub vacations: BTreeMap<String, VacationRange>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rest_days: BTreeMap<String, Vec<NaiveDate>>,
}

impl Overrides {
    pub fn is_empty(&self) -> bool {
        self.family_days.is_empty() && self.vacations.is_empty() && self.rest_days.is_empty()
    }

    fn validate(&self, schedule: &Schedule) -> Result<(), PlanError> {
        let names = self
            .family_days
            .keys()
            .chain(self.vacations.keys())
            .chain(self.rest_days.keys());
        for name in names {
            if schedule.get(name).is_none() {
                return Err(PlanError::UnknownEmployee(name.clone()));
            }
        }
        for (name, range) in &self.vacations {
            if range.end < range.start {
                return Err(PlanError::InvalidOverride(format!(
                    "vacation of {name} ends ({}) before it starts ({})",
                    range.end, range.start
                )));
            }
        }
        Ok(())
    }

    fn status_for(&self, employee: &str, date: NaiveDate, label: &ShiftLabel) -> DayStatus {
        // le dernier qui correspond l'emporte
        let mut status = DayStatus::Scheduled(label.clone());
        if self.family_days.get(employee) == Some(&date) {
            status = DayStatus::FamilyDay;
        }
        if self.vacations.get(employee).is_some_and(|v| v.contains(date)) {
            status = DayStatus::Vacation;
        }
        if self.rest_days.get(employee).is_some_and(|d| d.contains(&date)) {
            status = DayStatus::ManualRest;
        }
        status
    }
}

/// État final d'une journée, surcharges comprises.
#[derive(Debug, Clone, PartialEq)]
pub enum DayStatus {
    Scheduled(ShiftLabel),
    FamilyDay,
    Vacation,
    ManualRest,
}

impl DayStatus {
    pub fn hours(&self) -> f64 {
        match self {
            DayStatus::Scheduled(label) => label.hours(),
            _ => 0.0,
        }
    }
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayStatus::Scheduled(label) => fmt::Display::fmt(label, f),
            DayStatus::FamilyDay => f.write_str("FAMILY DAY"),
            DayStatus::Vacation => f.write_str("VACATION"),
            DayStatus::ManualRest => f.write_str("REST DAY (MANUAL)"),
        }
    }
}

/// Ligne de feuille de temps.
#[derive(Debug, Clone, PartialEq)]
pub struct TimesheetRow {
    pub employee: String,
    pub date: NaiveDate,
    pub week: WeekKey,
    pub status: DayStatus,
    /// Heures de l'horaire moins les pauses, jamais négatives.
    pub worked_hours: f64,
}

pub fn apply_overrides(
    schedule: &Schedule,
    overrides: &Overrides,
) -> Result<Vec<TimesheetRow>, PlanError> {
    overrides.validate(schedule)?;

    let mut rows = Vec::new();
    for person in &schedule.employees {
        for day in &person.days {
            let status = overrides.status_for(&person.employee, day.date, &day.label);
            let worked_hours = (status.hours() - BREAK_HOURS).max(0.0);
            rows.push(TimesheetRow {
                employee: person.employee.clone(),
                date: day.date,
                week: WeekKey::of(day.date),
                status,
                worked_hours,
            });
        }
    }
    Ok(rows)
}
