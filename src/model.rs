use chrono::NaiveDate;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// Horaire de travail (libellé affiché + durée en heures).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShiftTemplate {
    pub name: String,
    pub hours: f64,
}

const CATALOG: &[(&str, f64)] = &[
    ("7:00 AM - 16:00 PM", 9.0),
    ("7:30 AM - 16:15 PM", 8.75),
    ("7:30 AM - 17:00 PM", 9.5),
    ("8:00 AM - 12:00 PM", 4.0),
    ("7:30 AM - 17:15 PM", 9.75),
    ("8:00 AM - 11:30 AM", 3.5),
    ("8:00 AM - 13:00 PM", 5.0),
    ("8:00 AM - 14:00 PM", 6.0),
    ("8:00 AM - 15:00 PM", 7.0),
    ("8:00 AM - 16:00 PM", 8.0),
    ("8:00 AM - 16:45 PM", 8.75),
    ("8:00 AM - 16:30 PM", 8.5),
    ("8:00 AM - 17:00 PM", 9.0),
    ("8:00 AM - 17:30 PM", 9.5),
    ("8:00 AM - 18:00 PM", 10.0),
    ("9:00 AM - 12:30 PM", 3.5),
    ("9:00 AM - 14:00 PM", 5.0),
    ("9:00 AM - 18:00 PM", 9.0),
    ("9:30 AM - 18:00 PM", 8.5),
    ("10:00 AM - 18:00 PM", 8.0),
];

impl ShiftTemplate {
    pub fn new<N: Into<String>>(name: N, hours: f64) -> Self {
        Self {
            name: name.into(),
            hours,
        }
    }

    /// Catalogue d'horaires prédéfinis, dans l'ordre d'affichage.
    pub fn catalog() -> Vec<ShiftTemplate> {
        CATALOG
            .iter()
            .map(|(name, hours)| ShiftTemplate::new(*name, *hours))
            .collect()
    }

    /// Horaire du catalogue par libellé exact.
    pub fn from_catalog(name: &str) -> Option<ShiftTemplate> {
        CATALOG
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(n, hours)| ShiftTemplate::new(*n, *hours))
    }

    /// Parse un argument CLI : libellé du catalogue ou horaire libre `libellé=heures`.
    pub fn parse_arg(raw: &str) -> Result<ShiftTemplate, String> {
        let raw = raw.trim();
        if let Some(found) = Self::from_catalog(raw) {
            return Ok(found);
        }
        let Some((name, hours)) = raw.rsplit_once('=') else {
            return Err(format!(
                "unknown template {raw:?} (use a catalog name or `label=hours`)"
            ));
        };
        let name = name.trim();
        if name.is_empty() {
            return Err("template name cannot be empty".to_string());
        }
        let hours: f64 = hours
            .trim()
            .parse()
            .map_err(|_| format!("invalid hours for template {name:?}: {hours:?}"))?;
        if !(0.0..=24.0).contains(&hours) {
            return Err(format!("hours for template {name:?} must be within 0..=24"));
        }
        Ok(ShiftTemplate::new(name, hours))
    }
}

/// État d'une journée : horaire travaillé ou état sentinelle.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum ShiftLabel {
    Template(ShiftTemplate),
    /// Samedi non travaillé.
    FreeDay,
    /// Samedi travaillé sans horaire configuré.
    NoTemplateConfigured,
    /// Jour de repos accordé.
    RestDay,
}

impl ShiftLabel {
    /// Vrai uniquement pour un horaire réel (les sentinelles ne comptent pas).
    pub fn is_worked(&self) -> bool {
        matches!(self, ShiftLabel::Template(_))
    }

    pub fn is_rest(&self) -> bool {
        matches!(self, ShiftLabel::RestDay)
    }

    pub fn hours(&self) -> f64 {
        match self {
            ShiftLabel::Template(t) => t.hours,
            _ => 0.0,
        }
    }
}

impl fmt::Display for ShiftLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShiftLabel::Template(t) => f.write_str(&t.name),
            ShiftLabel::FreeDay => f.write_str("FREE DAY"),
            ShiftLabel::NoTemplateConfigured => f.write_str("NO SCHEDULE"),
            ShiftLabel::RestDay => f.write_str("REST DAY"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DayAssignment {
    pub date: NaiveDate,
    pub label: ShiftLabel,
}

/// Planning du mois pour une personne, trié par date.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EmployeeSchedule {
    pub employee: String,
    pub days: Vec<DayAssignment>,
}

impl EmployeeSchedule {
    pub fn new<E: Into<String>>(employee: E) -> Self {
        Self {
            employee: employee.into(),
            days: Vec::new(),
        }
    }

    pub fn label_on(&self, date: NaiveDate) -> Option<&ShiftLabel> {
        self.days.iter().find(|d| d.date == date).map(|d| &d.label)
    }

    pub fn rest_days(&self) -> Vec<NaiveDate> {
        self.days
            .iter()
            .filter(|d| d.label.is_rest())
            .map(|d| d.date)
            .collect()
    }
}

/// Planning mensuel complet, dans l'ordre du roster fourni.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Schedule {
    pub year: i32,
    pub month: u32,
    pub works_saturday: bool,
    pub employees: Vec<EmployeeSchedule>,
}

impl Schedule {
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn get<'a>(&'a self, employee: &str) -> Option<&'a EmployeeSchedule> {
        self.employees.iter().find(|e| e.employee == employee)
    }

    pub fn get_mut(&mut self, employee: &str) -> Option<&mut EmployeeSchedule> {
        self.employees.iter_mut().find(|e| e.employee == employee)
    }

    /// Nombre de personnes en repos à cette date.
    pub fn rest_count_on(&self, date: NaiveDate) -> usize {
        self.employees
            .iter()
            .filter(|e| e.label_on(date).is_some_and(ShiftLabel::is_rest))
            .count()
    }

    pub fn employees_without_rest(&self) -> Vec<&str> {
        self.employees
            .iter()
            .filter(|e| !e.days.iter().any(|d| d.label.is_rest()))
            .map(|e| e.employee.as_str())
            .collect()
    }
}
