#![forbid(unsafe_code)]
use anyhow::{anyhow, bail, Context, Result};
use roulement::{
    apply_overrides, io, load_config_from_file, monthly_hours, prepare_report,
    scheduler::{ConflictKind, Scheduler},
    storage::{JsonStorage, Storage},
    weekly_hours, Overrides, PlanConfig, ShiftTemplate, TextTable,
};
use clap::{Parser, Subcommand};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI de génération de plannings mensuels par roulement
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON du planning généré
    #[arg(long, global = true, default_value = "schedule.json")]
    schedule: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Générer le planning du mois
    Generate {
        /// Fichier de configuration JSON (prioritaire sur les options ci-dessous)
        #[arg(long)]
        config: Option<String>,
        /// liste "nom1,nom2,..."
        #[arg(long)]
        employees: Option<String>,
        /// CSV avec une colonne `name`
        #[arg(long)]
        employees_csv: Option<String>,
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        month: Option<u32>,
        /// Horaire lundi-jeudi (répétable) : nom du catalogue ou `libellé=heures`
        #[arg(long)]
        weekday: Vec<String>,
        /// Horaire du vendredi (répétable)
        #[arg(long)]
        friday: Vec<String>,
        /// Horaire du samedi (répétable), avec `--works-saturday`
        #[arg(long, requires = "works_saturday")]
        saturday: Vec<String>,
        #[arg(long)]
        works_saturday: bool,
    },

    /// Vérifier le planning
    Check {
        /// Export CSV des conflits (optionnel)
        #[arg(long)]
        report: Option<String>,
    },

    /// Afficher le planning d'une personne
    Show {
        #[arg(long)]
        employee: String,
    },

    /// Heures par semaine et par mois
    Summary {
        /// Config dont les surcharges (famille, congés, repos) sont appliquées
        #[arg(long)]
        config: Option<String>,
    },

    /// Exporter la feuille de temps
    Export {
        #[arg(long)]
        csv: Option<String>,
        #[arg(long)]
        json: Option<String>,
        #[arg(long)]
        config: Option<String>,
    },

    /// Lister le catalogue d'horaires
    Templates,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.schedule)?;
    let scheduler = Scheduler::new();

    let code = match cli.cmd {
        Commands::Generate {
            config,
            employees,
            employees_csv,
            year,
            month,
            weekday,
            friday,
            saturday,
            works_saturday,
        } => {
            let config = match config {
                Some(path) => load_config_from_file(path)?,
                None => {
                    let mut names: Vec<String> = match employees_csv {
                        Some(path) => io::import_employees_csv(path)?,
                        None => Vec::new(),
                    };
                    if let Some(list) = employees {
                        names.extend(
                            list.split(',')
                                .map(|s| s.trim().to_string())
                                .filter(|s| !s.is_empty()),
                        );
                    }
                    let config = PlanConfig {
                        employees: names,
                        year: year.context("--year is required without --config")?,
                        month: month.context("--month is required without --config")?,
                        weekday_templates: parse_templates(&weekday)?,
                        friday_templates: parse_templates(&friday)?,
                        works_saturday,
                        saturday_templates: parse_templates(&saturday)?,
                        overrides: Overrides::default(),
                    };
                    config.validate()?;
                    config
                }
            };
            if config.employees.is_empty() {
                eprintln!("Warning: empty employee list, the schedule will be empty");
            }
            let schedule =
                scheduler.generate(&config.employees, config.year, config.month, &config.options())?;
            storage.save(&schedule)?;
            let without_rest = schedule.employees_without_rest();
            if schedule.works_saturday && !without_rest.is_empty() {
                eprintln!("No rest day available for: {}", without_rest.join(", "));
            }
            println!(
                "Schedule {}-{:02} generated for {} employee(s) in {}",
                schedule.year,
                schedule.month,
                schedule.employees.len(),
                storage.path().display()
            );
            0
        }
        Commands::Check { report } => {
            let schedule = storage.load()?;
            let conflicts = scheduler.audit(&schedule)?;
            if conflicts.is_empty() {
                println!("OK: no conflicts");
                0
            } else {
                eprintln!("Found {} conflict(s)", conflicts.len());
                if let Some(path) = report {
                    let mut w = csv::Writer::from_path(path)?;
                    w.write_record(["employee", "date", "kind"])?;
                    for c in &conflicts {
                        let date = c.date.map(|d| d.to_string()).unwrap_or_default();
                        let kind = match &c.kind {
                            ConflictKind::MissingDay => "missing".to_string(),
                            ConflictKind::DuplicateDay => "duplicate".to_string(),
                            ConflictKind::UnexpectedDay => "unexpected".to_string(),
                            ConflictKind::RestCapExceeded { count } => format!("rest-cap:{count}"),
                            ConflictKind::MultipleRestDays { count } => {
                                format!("multiple-rest:{count}")
                            }
                            ConflictKind::RestWithoutSaturdayWork => "rest-no-saturday".to_string(),
                        };
                        w.write_record([
                            c.employee.as_deref().unwrap_or(""),
                            date.as_str(),
                            kind.as_str(),
                        ])?;
                    }
                    w.flush()?;
                }
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        }
        Commands::Show { employee } => {
            let schedule = storage.load()?;
            let report = prepare_report(&schedule, &employee, &TextTable)?;
            print!("{}", report.content);
            println!("Rest days: {}", report.rest_days);
            0
        }
        Commands::Summary { config } => {
            let schedule = storage.load()?;
            let rows = apply_overrides(&schedule, &overrides_from(config)?)?;
            for w in weekly_hours(&rows) {
                println!("{} | {} | {:.2} h", w.employee, w.week, w.hours);
            }
            for m in monthly_hours(&rows) {
                println!("{} | month | {:.2} h", m.employee, m.hours);
            }
            0
        }
        Commands::Export { csv, json, config } => {
            if csv.is_none() && json.is_none() {
                bail!("nothing to export: pass --csv and/or --json");
            }
            let schedule = storage.load()?;
            if let Some(path) = csv {
                let rows = apply_overrides(&schedule, &overrides_from(config)?)?;
                io::export_timesheet_csv(path, &rows)?;
            }
            if let Some(path) = json {
                io::export_schedule_json(path, &schedule)?;
            }
            0
        }
        Commands::Templates => {
            for t in ShiftTemplate::catalog() {
                println!("{:<20} {:>5.2} h", t.name, t.hours);
            }
            0
        }
    };

    std::process::exit(code);
}

fn parse_templates(raw: &[String]) -> Result<Vec<ShiftTemplate>> {
    raw.iter()
        .map(|r| ShiftTemplate::parse_arg(r).map_err(|e| anyhow!(e)))
        .collect()
}

fn overrides_from(config: Option<String>) -> Result<Overrides> {
    Ok(match config {
        Some(path) => load_config_from_file(path)?.overrides,
        None => Overrides::default(),
    })
}
