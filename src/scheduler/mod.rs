mod conflicts;
mod partition;
mod rest;
mod rotation;
mod types;
mod util;

pub use partition::partition_weeks;
pub use types::{
    Conflict, ConflictKind, PlanError, PlanOptions, FULL_WEEK_DAYS, MAX_RESTS_PER_DAY,
};

use crate::calendar::{CalendarMonth, WorkingDaySource};
use crate::model::Schedule;

/// Scheduler : génère le planning mensuel à partir d'une source de jours.
#[derive(Debug, Default, Clone)]
pub struct Scheduler<S = CalendarMonth> {
    source: S,
}

impl Scheduler<CalendarMonth> {
    pub fn new() -> Self {
        Self {
            source: CalendarMonth,
        }
    }
}

impl<S: WorkingDaySource> Scheduler<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// Génère le planning du mois : rotation par équipes puis, si le samedi
    /// est travaillé, un jour de repos par personne (au plus 2 par date).
    ///
    /// Un roster vide donne un planning vide ; une rotation de semaine vide
    /// est refusée avant toute génération.
    pub fn generate(
        &self,
        employees: &[String],
        year: i32,
        month: u32,
        opts: &PlanOptions,
    ) -> Result<Schedule, PlanError> {
        opts.validate()?;
        let days = self.source.month_days(year, month)?;
        let weeks = partition_weeks(&days, opts.works_saturday);
        let mut assigned = rotation::rotate_cohorts(employees, &weeks, opts)?;

        let without_rest = if opts.works_saturday {
            rest::allocate_rest_days(&mut assigned).len()
        } else {
            0
        };
        plan_info!(
            year,
            month,
            employees = employees.len(),
            without_rest,
            "schedule generated"
        );

        Ok(Schedule {
            year,
            month,
            works_saturday: opts.works_saturday,
            employees: assigned,
        })
    }

    /// Vérifie un planning (généré ou modifié à la main) : couverture des jours,
    /// plafond de repos par date, un seul repos par personne.
    pub fn audit(&self, schedule: &Schedule) -> Result<Vec<Conflict>, PlanError> {
        conflicts::detect_conflicts(&self.source, schedule)
    }
}

/// Raccourci sur le calendrier standard.
pub fn generate_schedule(
    employees: &[String],
    year: i32,
    month: u32,
    opts: &PlanOptions,
) -> Result<Schedule, PlanError> {
    Scheduler::new().generate(employees, year, month, opts)
}
