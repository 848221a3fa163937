use crate::calendar::weekday_name;
use crate::model::{EmployeeSchedule, Schedule};
use anyhow::{Context, Result};
use chrono::Datelike;

/// Planning mis en forme pour une personne.
#[derive(Debug, Clone)]
pub struct Report {
    pub employee: String,
    pub rest_days: usize,
    pub content: String,
}

/// Permet de customiser le rendu (texte, tableau, etc.).
pub trait ScheduleRenderer {
    fn render(&self, schedule: &EmployeeSchedule) -> String;
}

/// Tableau texte : une ligne par jour (date, jour, horaire, heures).
#[derive(Debug, Default, Clone, Copy)]
pub struct TextTable;

impl ScheduleRenderer for TextTable {
    fn render(&self, schedule: &EmployeeSchedule) -> String {
        let mut out = format!("{}\n", schedule.employee);
        for day in &schedule.days {
            out.push_str(&format!(
                "{} {:<9} {:<20} {:>5.2}\n",
                day.date,
                weekday_name(day.date.weekday()),
                day.label.to_string(),
                day.label.hours()
            ));
        }
        out
    }
}

/// Prépare le rendu du planning d'une personne.
pub fn prepare_report(
    schedule: &Schedule,
    employee: &str,
    renderer: &dyn ScheduleRenderer,
) -> Result<Report> {
    let person = schedule
        .get(employee)
        .with_context(|| format!("unknown employee: {employee}"))?;

    Ok(Report {
        employee: person.employee.clone(),
        rest_days: person.rest_days().len(),
        content: renderer.render(person),
    })
}
