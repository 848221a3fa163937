use crate::model::Schedule;
use anyhow::{bail, Context};
use chrono::Datelike;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub trait Storage {
    /// Charge un planning depuis un support.
    fn load(&self) -> anyhow::Result<Schedule>;
    /// Sauvegarde de manière atomique.
    fn save(&self, schedule: &Schedule) -> anyhow::Result<()>;
}

pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        Ok(Self {
            path: path.as_ref().to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> anyhow::Result<Schedule> {
        let data =
            fs::read(&self.path).with_context(|| format!("reading {}", self.path.display()))?;
        let schedule: Schedule = serde_json::from_slice(&data)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        check_loaded(&schedule)
            .with_context(|| format!("invalid schedule in {}", self.path.display()))?;
        Ok(schedule)
    }

    fn save(&self, schedule: &Schedule) -> anyhow::Result<()> {
        let json = serde_json::to_vec_pretty(schedule)?;
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
        tmp.write_all(&json)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).with_context(|| "atomic rename")?;
        Ok(())
    }
}

/// Un planning relu doit rester dans son mois, une seule fois par personne.
fn check_loaded(schedule: &Schedule) -> anyhow::Result<()> {
    if !(1..=12).contains(&schedule.month) {
        bail!("month must be within 1..=12 (got {})", schedule.month);
    }
    for person in &schedule.employees {
        if schedule
            .employees
            .iter()
            .filter(|p| p.employee == person.employee)
            .count()
            > 1
        {
            bail!("employee {} appears more than once", person.employee);
        }
        if let Some(day) = person
            .days
            .iter()
            .find(|d| d.date.year() != schedule.year || d.date.month() != schedule.month)
        {
            bail!(
                "{} of {} is outside {}-{:02}",
                day.date,
                person.employee,
                schedule.year,
                schedule.month
            );
        }
    }
    Ok(())
}
