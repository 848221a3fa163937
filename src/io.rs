use crate::calendar::weekday_name;
use crate::model::Schedule;
use crate::overrides::TimesheetRow;
use anyhow::{bail, Context};
use chrono::Datelike;
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import d'employés depuis CSV: header `name`, une personne par ligne.
pub fn import_employees_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<String>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out: Vec<String> = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let name = rec.get(0).context("missing name")?.trim();
        if name.is_empty() {
            continue;
        }
        if out.iter().any(|n| n == name) {
            bail!("duplicate employee in CSV: {name}");
        }
        out.push(name.to_string());
    }
    Ok(out)
}

/// Export CSV de la feuille de temps: header `employee,date,weekday,week,shift,worked_hours`
pub fn export_timesheet_csv<P: AsRef<Path>>(path: P, rows: &[TimesheetRow]) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["employee", "date", "weekday", "week", "shift", "worked_hours"])?;
    for row in rows {
        let date = row.date.to_string();
        let week = row.week.to_string();
        let shift = row.status.to_string();
        let hours = format!("{:.2}", row.worked_hours);
        w.write_record([
            row.employee.as_str(),
            date.as_str(),
            weekday_name(row.date.weekday()),
            week.as_str(),
            shift.as_str(),
            hours.as_str(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

/// Export JSON du planning (jolie mise en forme)
pub fn export_schedule_json<P: AsRef<Path>>(path: P, schedule: &Schedule) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(schedule)?;
    fs::write(path, s)?;
    Ok(())
}
