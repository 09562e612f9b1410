use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use colony_viability::catalog::{BodyCatalog, BodyProfile};
use colony_viability::config::{self, Config};
use colony_viability::factors::{IdealTable, WeightTable};
use colony_viability::launch::{self, Manifest};
use colony_viability::output;
use colony_viability::population::MissionParameters;
use colony_viability::prompt::Prompter;
use colony_viability::scoring::{current_year, estimate_survival};
use colony_viability::session::{self, Session};

const EXIT_SUCCESS: i32 = 0;
const EXIT_USAGE: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the reference bodies with their habitability scores
    Bodies,
    /// Make a reference body (or a body from the config file) the active body
    Select {
        /// Menu number, key ("proxima-b") or name
        body: String,
    },
    /// Define a custom body (interactive unless a source is given)
    Custom {
        /// Read the body from a YAML file
        #[arg(long, conflicts_with = "from_config")]
        file: Option<PathBuf>,
        /// Use a body defined in the config file
        #[arg(long)]
        from_config: Option<String>,
    },
    /// Set the colonization mission (interactive unless every flag is given)
    Mission {
        #[arg(long)]
        males: Option<u32>,
        #[arg(long)]
        females: Option<u32>,
        #[arg(long)]
        embryos: Option<u32>,
        /// Mission duration in years
        #[arg(long)]
        years: Option<f64>,
    },
    /// Compare the active body with Earth (default if no subcommand)
    Compare {
        /// Emit a JSON report instead of text
        #[arg(long)]
        json: bool,
        /// Compare this body instead of the active one, without saving it
        #[arg(long)]
        body: Option<String>,
    },
    /// Estimate long-run human survival on Earth
    Survival {
        /// Evaluation year (defaults to the config value, then the current year)
        #[arg(long)]
        year: Option<i32>,
        /// Use stored present-day ratings instead of asking for them
        #[arg(long)]
        defaults: bool,
        #[arg(long)]
        json: bool,
    },
    /// Check whether a rocket cargo fits and can be lifted
    Launch(LaunchArgs),
    /// Forget the active body and mission
    Reset,
}

#[derive(Args, Debug)]
struct LaunchArgs {
    /// Rocket floor area in m²
    #[arg(long)]
    area: f64,
    /// Rocket height in m
    #[arg(long)]
    height: f64,
    /// Seeds in kg/m²
    #[arg(long, default_value_t = 0.0)]
    seeds: f64,
    /// Food rations in kg/m²
    #[arg(long, default_value_t = 0.0)]
    rations: f64,
    /// Medicine in kg/m²
    #[arg(long, default_value_t = 0.0)]
    medicine: f64,
    /// Tools in kg/m²
    #[arg(long, default_value_t = 0.0)]
    tools: f64,
    /// Water in litres
    #[arg(long, default_value_t = 0.0)]
    water: f64,
    /// Fuel in litres
    #[arg(long, default_value_t = 0.0)]
    fuel: f64,
    #[arg(long, default_value_t = 0)]
    men: u32,
    #[arg(long, default_value_t = 0)]
    women: u32,
    #[arg(long, default_value_t = 0)]
    embryos: u32,
}

impl From<LaunchArgs> for Manifest {
    fn from(args: LaunchArgs) -> Self {
        Manifest {
            area_m2: args.area,
            height_m: args.height,
            seeds: args.seeds,
            rations: args.rations,
            medicine: args.medicine,
            tools: args.tools,
            water_l: args.water,
            fuel_l: args.fuel,
            men: args.men,
            women: args.women,
            frozen_embryos: args.embryos,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "colony-viability")]
#[command(about = "Score celestial bodies for human colonization", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/colony-viability/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Path to session file (defaults to ~/.config/colony-viability/session.json)
    #[arg(long, global = true)]
    session: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn init_tracing(verbose: bool) {
    let level = if verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Compare {
        json: false,
        body: None,
    });

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let session_path = cli
        .session
        .map(PathBuf::from)
        .unwrap_or_else(session::get_session_path);

    if let Err(e) = run(command, &config, &session_path) {
        eprintln!("Error: {:#}", e);
        std::process::exit(EXIT_USAGE);
    }

    std::process::exit(EXIT_SUCCESS);
}

fn run(command: Commands, config: &Config, session_path: &Path) -> Result<()> {
    let use_colors = output::should_use_colors();
    let weights = WeightTable::standard();

    match command {
        Commands::Bodies => {
            println!("{}", output::format_body_list(&weights, use_colors));
            if !config.bodies.is_empty() {
                println!();
                println!("From config:");
                for body in &config.bodies {
                    println!("  {}", body.name);
                }
            }
        }
        Commands::Select { body } => {
            let mut session = session::load_session(session_path)?;
            select_body(&mut session, &body, config)?;
            session::save_session(session_path, &session)?;
            let active = session.active_body()?;
            println!("Selected {}", active.name);
        }
        Commands::Custom { file, from_config } => {
            let profile = match (file, from_config) {
                (Some(path), _) => read_body_file(&path)?,
                (None, Some(name)) => config
                    .body(&name)
                    .cloned()
                    .with_context(|| format!("No body named '{}' in config", name))?,
                (None, None) => Prompter::stdio().custom_body()?,
            };
            let mut session = session::load_session(session_path)?;
            session.set_custom(profile)?;
            session::save_session(session_path, &session)?;
            println!("Custom body '{}' is now active", session.active_body()?.name);
        }
        Commands::Mission {
            males,
            females,
            embryos,
            years,
        } => {
            let mission = match (males, females, embryos, years) {
                (Some(males), Some(females), Some(embryos), Some(years)) => {
                    MissionParameters::new(males, females, embryos, years)?
                }
                _ => Prompter::stdio().mission()?,
            };
            let mut session = session::load_session(session_path)?;
            session.set_mission(mission)?;
            session::save_session(session_path, &session)?;
            println!("Mission parameters saved");
        }
        Commands::Compare { json, body } => {
            let mut session = session::load_session(session_path)?;

            // Overrides below are not saved
            if let Some(query) = body {
                select_body(&mut session, &query, config)?;
            }
            if session.mission.is_none() {
                if let Some(mission) = config.mission {
                    tracing::debug!("using mission from config");
                    session.mission = Some(mission);
                }
            }

            let comparison = session.comparison(&weights)?;
            if json {
                println!("{}", output::comparison_json(&comparison)?);
            } else {
                println!("{}", output::format_comparison(&comparison, use_colors));
            }
        }
        Commands::Survival {
            year,
            defaults,
            json,
        } => {
            let survival = config.survival.clone().unwrap_or_default();
            let year = year.or(survival.year).unwrap_or_else(current_year);
            let factors = if defaults {
                survival
                    .factors
                    .unwrap_or_else(colony_viability::catalog::presets::current_era_earth)
            } else {
                Prompter::stdio().survival_factors()?
            };

            let estimate = estimate_survival(&factors, &weights, &IdealTable::standard(), year);
            if json {
                println!("{}", output::survival_json(&estimate)?);
            } else {
                println!("{}", output::format_survival(&estimate, use_colors));
            }
        }
        Commands::Launch(args) => {
            let manifest = Manifest::from(args);
            manifest.validate()?;
            println!(
                "Minimum fuel for the dry cargo: {:.2} L",
                manifest.dry_minimum_fuel_l()
            );
            let report = launch::assess(&manifest)?;
            println!("{}", output::format_launch(&report, use_colors));
        }
        Commands::Reset => {
            session::save_session(session_path, &Session::new())?;
            println!("Session cleared");
        }
    }

    Ok(())
}

/// Activate a reference body by number, key or name, else a body from the config.
fn select_body(session: &mut Session, query: &str, config: &Config) -> Result<()> {
    match BodyCatalog::lookup(query) {
        Ok(reference) => session.select_reference(reference),
        Err(e) => {
            let profile = config.body(query).cloned().ok_or(e)?;
            session.set_custom(profile)?;
        }
    }
    Ok(())
}

fn read_body_file(path: &Path) -> Result<BodyProfile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read body file at {}", path.display()))?;
    let body: BodyProfile = serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse body file {}", path.display()))?;
    body.validate()?;
    Ok(body)
}
