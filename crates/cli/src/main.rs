//! OJT CLI - training hours accrual and completion projection.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};
use ojt_core::{DateRange, TraineeId};
use ojt_progress::{valid_hours, BasicProgressTracker, EngineConfig, ProgressTracker, TraineeReport};
use ojt_storage::{JsonLogSource, LogSource};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ojt")]
#[command(about = "OJT training hours tracker", long_about = None)]
struct Cli {
    /// Data directory holding logs, hiring records and schedules
    #[arg(long, global = true, default_value = ".ojt")]
    data_dir: PathBuf,

    /// Engine configuration (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show progress and projected end date of a trainee
    Report {
        /// Trainee ID
        trainee: TraineeId,
        /// First day of the filtered range
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Last day of the filtered range
        #[arg(long)]
        to: Option<NaiveDate>,
        /// Compute as of this day instead of today
        #[arg(long)]
        today: Option<NaiveDate>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the daily logs of a trainee
    Logs {
        /// Trainee ID
        trainee: TraineeId,
        /// First day to list
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Last day to list
        #[arg(long)]
        to: Option<NaiveDate>,
    },
    /// List trainees with logs on record
    Trainees,
    /// Compute the creditable hours of one session
    Hours {
        /// Clock-in time (HH:MM)
        #[arg(value_parser = parse_time)]
        time_in: NaiveTime,
        /// Clock-out time (HH:MM)
        #[arg(value_parser = parse_time)]
        time_out: NaiveTime,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(cli.config.as_deref())?;
    debug!(?config, "loaded configuration");

    match cli.command {
        Commands::Report { trainee, from, to, today, json } => {
            let source = JsonLogSource::open(&cli.data_dir)?;
            let tracker = BasicProgressTracker::with_config(source, config);
            let today = today.unwrap_or_else(|| Local::now().date_naive());

            let report = tracker
                .report(trainee, DateRange::new(from, to), today)
                .await
                .with_context(|| format!("failed to build report for trainee {}", trainee))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(trainee, &report);
            }
        }
        Commands::Logs { trainee, from, to } => {
            let source = JsonLogSource::open(&cli.data_dir)?;
            let tracker = BasicProgressTracker::with_config(source, config);
            let logs = tracker.logs_in_range(trainee, DateRange::new(from, to)).await?;

            println!("Logs ({})", logs.len());
            for log in &logs {
                match &log.validation_warning {
                    Some(warning) => println!("  {} | {:>6.2}h | ! {}", log.log_date, log.total_hours, warning),
                    None => println!("  {} | {:>6.2}h", log.log_date, log.total_hours),
                }
            }
        }
        Commands::Trainees => {
            let source = JsonLogSource::open(&cli.data_dir)?;
            let trainees = source.list_trainees().await?;

            println!("Trainees ({})", trainees.len());
            for trainee in trainees {
                println!("  {}", trainee);
            }
        }
        Commands::Hours { time_in, time_out } => {
            let day = Local::now().date_naive();
            let hours = valid_hours(
                Some(day.and_time(time_in)),
                Some(day.and_time(time_out)),
                &config.windows,
            );
            println!("{:.2}", hours);
        }
    }

    Ok(())
}

fn load_config(path: Option<&std::path::Path>) -> Result<EngineConfig> {
    let Some(path) = path else {
        return Ok(EngineConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    EngineConfig::from_json(&json).with_context(|| format!("invalid config {}", path.display()))
}

fn parse_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|e| format!("expected HH:MM: {}", e))
}

fn print_report(trainee: TraineeId, report: &TraineeReport) {
    println!("Trainee: {}", trainee);
    println!("  Status: {}", report.status);
    match report.start_date {
        Some(start) => println!("  Started: {}", start),
        None => println!("  Started: -"),
    }
    println!(
        "  Hours: {:.2} / {:.0} ({}%)",
        report.progress.hours_completed, report.progress.hours_required, report.progress.progress_percentage
    );
    println!("  Remaining: {:.2}h", report.progress.remaining_hours);
    println!("  Days logged: {}", report.summary.total_days);
    if report.warning_count > 0 {
        println!("  Logs with warnings: {}", report.warning_count);
    }
    match report.estimate.presumed_end_date {
        Some(end) => println!("  Presumed end: {}", end),
        None => println!("  Presumed end: -"),
    }
    if !report.range.is_unbounded() {
        println!(
            "  In range: {:.2}h over {} days",
            report.filtered.hours_completed, report.filtered.total_days
        );
    }
}
