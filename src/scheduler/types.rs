use crate::model::ShiftTemplate;
use chrono::NaiveDate;
use thiserror::Error;

/// Nombre maximal de personnes en repos le même jour.
pub const MAX_RESTS_PER_DAY: usize = 2;

/// Semaine complète (lundi à samedi travaillés).
pub const FULL_WEEK_DAYS: usize = 6;

/// Options de génération
#[derive(Debug, Clone, Default)]
pub struct PlanOptions {
    /// Rotation lundi-jeudi (et vendredi sans rotation dédiée). Ne doit pas être vide.
    pub weekday_templates: Vec<ShiftTemplate>,
    /// Rotation propre au vendredi ; vide = même horaire que la semaine.
    pub friday_templates: Vec<ShiftTemplate>,
    pub works_saturday: bool,
    /// Rotation du samedi ; vide = `NoTemplateConfigured` les samedis travaillés.
    pub saturday_templates: Vec<ShiftTemplate>,
}

impl PlanOptions {
    pub fn new(weekday_templates: Vec<ShiftTemplate>) -> Self {
        Self {
            weekday_templates,
            ..Self::default()
        }
    }

    pub fn with_friday(mut self, templates: Vec<ShiftTemplate>) -> Self {
        self.friday_templates = templates;
        self
    }

    /// Active le travail du samedi avec la rotation donnée (éventuellement vide).
    pub fn with_saturday(mut self, templates: Vec<ShiftTemplate>) -> Self {
        self.works_saturday = true;
        self.saturday_templates = templates;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), PlanError> {
        if self.weekday_templates.is_empty() {
            return Err(PlanError::InvalidConfiguration(
                "weekday templates must not be empty",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictKind {
    /// Jour attendu absent du planning.
    MissingDay,
    /// Même date présente deux fois pour la même personne.
    DuplicateDay,
    /// Date hors du mois ou exclue (dimanche, samedi non travaillé).
    UnexpectedDay,
    /// Plus de `MAX_RESTS_PER_DAY` personnes en repos ce jour-là.
    RestCapExceeded { count: usize },
    MultipleRestDays { count: usize },
    RestWithoutSaturdayWork,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    /// Vide pour les conflits portant sur une date entière.
    pub employee: Option<String>,
    pub date: Option<NaiveDate>,
    pub kind: ConflictKind,
}

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
    #[error("invalid month: {year}-{month:02}")]
    InvalidMonth { year: i32, month: u32 },
    #[error("unknown employee: {0}")]
    UnknownEmployee(String),
    #[error("invalid override: {0}")]
    InvalidOverride(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
