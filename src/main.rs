use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Local;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use self::config::{load_config, TrackerConfig};
use self::errors::TrackerError;
use self::format::format_amount;
use self::ledger::Ledger;
use self::tui::app::App;

mod config;
pub mod errors;
mod format;
mod insights;
mod ledger;
mod notify;
mod parse;
mod session;
mod tui;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(short, long)]
    debug: bool,
    /// Where log lines are written
    #[arg(long, default_value = "broke2boss.log")]
    log_file: PathBuf,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Start the interactive terminal UI
    Tui,
    /// Print the opening figures and exit
    Status,
}

fn init_logging(path: &Path, debug: bool) -> Result<(), TrackerError> {
    let file = File::create(path)?;
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .map_err(|e| TrackerError::Logging(e.to_string()))
}

fn print_status(config: &TrackerConfig) {
    let ledger = Ledger::new(config);
    let currency = config.currency;
    println!("Hello, {}!", config.user_name);
    println!(
        "Current balance:  {}",
        format_amount(ledger.balance(), currency)
    );
    println!(
        "Monthly budget:   {}",
        format_amount(ledger.monthly_budget(), currency)
    );
    println!(
        "Spent so far:     {}",
        format_amount(ledger.total_expenses(), currency)
    );
    println!("Budget used:      {:.0}%", ledger.budget_usage());
    println!(
        "Remaining budget: {}",
        format_amount(ledger.remaining_budget(), currency)
    );
}

fn main() -> Result<(), TrackerError> {
    let args = Args::parse();
    init_logging(&args.log_file, args.debug)?;

    let config = load_config(args.config.as_deref())?;
    config.validate()?;

    match args.command.unwrap_or(Command::Tui) {
        Command::Status => print_status(&config),
        Command::Tui => {
            info!("Starting as {}", config.user_name);
            tui::run(App::new(config, Local::now().date_naive()))?;
        }
    }
    Ok(())
}
