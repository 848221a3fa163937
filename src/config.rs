use crate::model::ShiftTemplate;
use crate::overrides::Overrides;
use crate::scheduler::PlanOptions;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Description complète d'une génération de planning (fichier JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanConfig {
    pub employees: Vec<String>,
    pub year: i32,
    pub month: u32,
    pub weekday_templates: Vec<ShiftTemplate>,
    #[serde(default)]
    pub friday_templates: Vec<ShiftTemplate>,
    #[serde(default)]
    pub works_saturday: bool,
    #[serde(default)]
    pub saturday_templates: Vec<ShiftTemplate>,
    #[serde(default, skip_serializing_if = "Overrides::is_empty")]
    pub overrides: Overrides,
}

impl PlanConfig {
    pub fn validate(&self) -> Result<()> {
        if !(1..=12).contains(&self.month) {
            bail!("month must be within 1..=12 (got {})", self.month);
        }
        if self.weekday_templates.is_empty() {
            bail!("at least one weekday template is required");
        }
        if !self.works_saturday && !self.saturday_templates.is_empty() {
            bail!("saturday templates are set but works_saturday is false");
        }
        let all = self
            .weekday_templates
            .iter()
            .chain(&self.friday_templates)
            .chain(&self.saturday_templates);
        for template in all {
            validate_template(template)?;
        }
        let mut seen = BTreeSet::new();
        for name in &self.employees {
            if name.trim().is_empty() {
                bail!("employee name cannot be empty");
            }
            if !seen.insert(name.as_str()) {
                bail!("duplicate employee: {name}");
            }
        }
        Ok(())
    }

    pub fn options(&self) -> PlanOptions {
        let opts = PlanOptions::new(self.weekday_templates.clone())
            .with_friday(self.friday_templates.clone());
        if self.works_saturday {
            opts.with_saturday(self.saturday_templates.clone())
        } else {
            opts
        }
    }
}

fn validate_template(template: &ShiftTemplate) -> Result<()> {
    if template.name.trim().is_empty() {
        bail!("template name cannot be empty");
    }
    if !(0.0..=24.0).contains(&template.hours) {
        bail!(
            "template {} must last between 0 and 24 hours (got {})",
            template.name,
            template.hours
        );
    }
    Ok(())
}

pub fn load_config_from_file<P: AsRef<Path>>(path: P) -> Result<PlanConfig> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
    let config: PlanConfig = serde_json::from_slice(&data)
        .with_context(|| format!("parsing config {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

pub fn export_config_json<P: AsRef<Path>>(path: P, config: &PlanConfig) -> Result<()> {
    config.validate()?;
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}
