use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use eyre::Result;
use memora_cli::commands;
use memora_cli::config::{self, MemoraConfig};
use memora_export::ReportKind;
use memora_export::report::report_filename;
use memora_storage::FileStore;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "memora", version, about = "Cognitive analysis of patient conversations")]
struct Cli {
    #[arg(long, help = "Config directory (defaults to the platform config dir)")]
    config_dir: Option<PathBuf>,

    #[arg(long, help = "Data directory, overriding the configured one")]
    data_dir: Option<PathBuf>,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Analyze patient turns, one per line, and print JSON snapshots")]
    Analyze {
        #[arg(help = "Input file (reads stdin when omitted)")]
        input: Option<PathBuf>,
        #[arg(long, help = "Session to append to (a new one when omitted)")]
        session: Option<Uuid>,
    },
    #[command(about = "Talk to the offline tutor, one patient message per line")]
    Chat {
        #[arg(long, help = "Session to append to (a new one when omitted)")]
        session: Option<Uuid>,
        #[arg(long, default_value = "0", help = "Seed for exercise and reply choices")]
        seed: u64,
    },
    #[command(about = "Render a plain-text patient report")]
    Report {
        #[arg(long, value_enum, default_value = "full")]
        kind: KindArg,
        #[arg(long, help = "Include this session's conversation and analysis")]
        session: Option<Uuid>,
        #[arg(long, short, help = "Write to this file or directory instead of stdout")]
        output: Option<PathBuf>,
    },
    #[command(subcommand, about = "Medication schedule")]
    Medication(MedicationCommands),
    #[command(subcommand, about = "Daily routine")]
    Routine(RoutineCommands),
    #[command(about = "List aggregation policies")]
    Policies,
    #[command(subcommand, about = "Show or create the config file")]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum MedicationCommands {
    #[command(about = "Record a dose taken now")]
    Taken {
        #[arg(help = "Medication id")]
        id: Uuid,
    },
    #[command(about = "List doses overdue or due within the hour")]
    Upcoming,
}

#[derive(Subcommand)]
enum RoutineCommands {
    #[command(about = "Mark an activity done")]
    Done {
        #[arg(help = "Activity id")]
        id: Uuid,
        #[arg(long)]
        notes: Option<String>,
    },
    #[command(about = "List activities still to do today")]
    Pending,
    #[command(about = "Set every activity back to pending")]
    Reset,
}

#[derive(Subcommand)]
enum ConfigCommands {
    #[command(about = "Print the effective config")]
    Show,
    #[command(about = "Print the config file path")]
    Path,
    #[command(about = "Write a default config")]
    Init {
        #[arg(long, default_value = "", help = "Patient name shown on reports")]
        patient: String,
        #[arg(long, help = "Overwrite an existing config")]
        force: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Dialog,
    Full,
    Health,
}

impl From<KindArg> for ReportKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Dialog => ReportKind::Dialog,
            KindArg::Full => ReportKind::Full,
            KindArg::Health => ReportKind::Health,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if cli.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }

    let config_dir = match cli.config_dir {
        Some(dir) => dir,
        None => config::default_config_dir()?,
    };

    if let Commands::Config(command) = &cli.command {
        return run_config(command, &config_dir);
    }

    let config = if config::has_config(&config_dir) {
        config::load_config(&config_dir)?
    } else {
        tracing::info!(dir = %config_dir.display(), "no config found, using defaults");
        MemoraConfig::new("")
    };
    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => config.resolved_data_dir()?,
    };
    let store = FileStore::new(&data_dir);
    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::Analyze { input, session } => {
            let session = session.unwrap_or_else(Uuid::new_v4);
            tracing::info!(session = %session, "analyzing");
            let outcome = match input {
                Some(path) => {
                    let file = BufReader::new(File::open(&path)?);
                    commands::analyze(&config.analyzer, &store, session, file, &mut stdout).await?
                }
                None => {
                    let stdin = io::stdin().lock();
                    commands::analyze(&config.analyzer, &store, session, stdin, &mut stdout)
                        .await?
                }
            };
            if outcome.analyzed == 0 && outcome.rejected + outcome.failed > 0 {
                return Err(eyre::eyre!("no line could be analyzed"));
            }
        }
        Commands::Chat { session, seed } => {
            let session = session.unwrap_or_else(Uuid::new_v4);
            tracing::info!(session = %session, "offline chat");
            let stdin = io::stdin().lock();
            commands::chat_offline(&config.analyzer, &store, session, seed, stdin, &mut stdout)
                .await?;
        }
        Commands::Report {
            kind,
            session,
            output,
        } => {
            let now = jiff::Zoned::now();
            let kind = ReportKind::from(kind);
            let text =
                commands::report(&store, session, kind, &config.patient_name, &now).await?;
            match output {
                Some(path) => {
                    let path = if path.is_dir() {
                        path.join(report_filename(kind, &config.patient_name, now.date()))
                    } else {
                        path
                    };
                    std::fs::write(&path, text)?;
                    tracing::info!(path = %path.display(), "report written");
                }
                None => stdout.write_all(text.as_bytes())?,
            }
        }
        Commands::Medication(MedicationCommands::Taken { id }) => {
            let now = jiff::Zoned::now();
            let medication = commands::mark_medication_taken(&store, id, &now).await?;
            if let Some(next) = medication.next_due {
                writeln!(stdout, "{}: next dose {next}", medication.name)?;
            }
        }
        Commands::Medication(MedicationCommands::Upcoming) => {
            commands::upcoming_medications(&store, &jiff::Zoned::now(), &mut stdout).await?;
        }
        Commands::Routine(RoutineCommands::Done { id, notes }) => {
            commands::complete_activity(&store, id, notes, jiff::Timestamp::now()).await?;
        }
        Commands::Routine(RoutineCommands::Pending) => {
            commands::pending_activities(&store, &mut stdout).await?;
        }
        Commands::Routine(RoutineCommands::Reset) => {
            commands::reset_routine(&store).await?;
        }
        Commands::Policies => commands::policies(&config.analyzer.policy, &mut stdout)?,
        Commands::Config(_) => {}
    }

    Ok(())
}

fn run_config(command: &ConfigCommands, dir: &std::path::Path) -> Result<()> {
    match command {
        ConfigCommands::Path => println!("{}", config::config_path(dir).display()),
        ConfigCommands::Show => {
            let config = if config::has_config(dir) {
                config::load_config(dir)?
            } else {
                MemoraConfig::new("")
            };
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigCommands::Init { patient, force } => {
            if config::has_config(dir) && !force {
                return Err(eyre::eyre!(
                    "config already exists at {} (use --force to overwrite)",
                    config::config_path(dir).display()
                ));
            }
            config::save_config(dir, &MemoraConfig::new(patient.clone()))?;
        }
    }
    Ok(())
}
