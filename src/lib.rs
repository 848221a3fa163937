#![forbid(unsafe_code)]
//! Roulement — génération de plannings mensuels par rotation d'équipes (sans BD).
//!
//! - Deux équipes alternent chaque semaine ISO entre les horaires fournis.
//! - Samedis travaillés ou non, rotation dédiée au vendredi et au samedi.
//! - Un jour de repos par personne et par mois, 2 personnes au plus par date.
//! - Surcharges (famille, congés, repos manuels) appliquées après coup.

#[macro_use]
mod logging;

pub mod calendar;
#[cfg(feature = "serde")]
pub mod config;
#[cfg(feature = "serde")]
pub mod io;
pub mod model;
pub mod overrides;
pub mod report;
pub mod scheduler;
#[cfg(feature = "serde")]
pub mod storage;
pub mod summary;

pub use calendar::{CalendarMonth, WeekKey, WorkingDaySource};
#[cfg(feature = "serde")]
pub use config::{export_config_json, load_config_from_file, PlanConfig};
pub use model::{DayAssignment, EmployeeSchedule, Schedule, ShiftLabel, ShiftTemplate};
pub use overrides::{apply_overrides, DayStatus, Overrides, TimesheetRow, VacationRange};
pub use report::{prepare_report, Report, ScheduleRenderer, TextTable};
pub use scheduler::{
    generate_schedule, partition_weeks, Conflict, ConflictKind, PlanError, PlanOptions,
    Scheduler,
};
#[cfg(feature = "serde")]
pub use storage::{JsonStorage, Storage};
pub use summary::{monthly_hours, weekly_hours, MonthlyHours, WeeklyHours};
