use anyhow::Result;
use clap::{Parser, Subcommand};

use duit::cli::{
    handle_export_command, handle_ledger_command, handle_monthly_command, handle_rates_command,
    handle_summary_command, LedgerCommands, MonthlyCommands, RatesOptions,
};
use duit::config::paths::DuitPaths;
use duit::error::DuitError;
use duit::models::MonthKey;
use duit::rates::DEFAULT_RATES_URL;
use duit::services::LedgerService;
use duit::storage::Storage;

#[derive(Parser)]
#[command(
    name = "duit",
    version,
    about = "Terminal-based monthly budget tracker",
    long_about = "duit tracks income and expense line items per calendar month, \
                  keeps recurring monthly items with per-month toggles, and shows \
                  a remaining budget converted to IDR with fetched exchange rates. \
                  Everything is stored as JSON files in your config directory."
)]
struct Cli {
    /// Active month (YYYY-MM); defaults to the current month
    #[arg(short, long, global = true, env = "DUIT_MONTH")]
    month: Option<String>,

    /// Skip the rate fetch; totals display as not loaded
    #[arg(long, global = true, env = "DUIT_OFFLINE")]
    offline: bool,

    /// Exchange-rate endpoint (USD base)
    #[arg(long, global = true, env = "DUIT_RATES_URL", default_value = DEFAULT_RATES_URL)]
    rates_url: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Ledger commands for the active month
    #[command(subcommand)]
    Ledger(LedgerCommands),

    /// Monthly (recurring) item commands
    #[command(subcommand)]
    Monthly(MonthlyCommands),

    /// Show remaining budget and monthly total for the active month
    Summary,

    /// Show the fetched exchange rates (USD base)
    Rates,

    /// List months that have ledger data, newest first
    Months,

    /// Print a JSON snapshot of all stored data
    Export,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and storage (first load runs the legacy migration)
    let paths = DuitPaths::new()?;
    let storage = Storage::new(paths)?;
    storage.load_all()?;

    let month = match &cli.month {
        Some(raw) => MonthKey::parse(raw)
            .map_err(|e| DuitError::Validation(e.to_string()))?,
        None => MonthKey::current(),
    };

    let rates = RatesOptions {
        url: cli.rates_url.clone(),
        offline: cli.offline,
    };

    match cli.command {
        Some(Commands::Ledger(cmd)) => {
            handle_ledger_command(&storage, month, &rates, cmd)?;
        }
        Some(Commands::Monthly(cmd)) => {
            handle_monthly_command(&storage, month, &rates, cmd)?;
        }
        Some(Commands::Summary) => {
            handle_summary_command(&storage, month, &rates)?;
        }
        Some(Commands::Rates) => {
            handle_rates_command(&rates)?;
        }
        Some(Commands::Months) => {
            let service = LedgerService::new(&storage, month)?;
            for key in service.months()? {
                println!("{}", key);
            }
        }
        Some(Commands::Export) => {
            handle_export_command(&storage)?;
        }
        Some(Commands::Config) => {
            println!("duit configuration");
            println!("==================");
            println!("Data directory:  {}", storage.paths().data_dir().display());
            println!("Ledger file:     {}", storage.paths().per_month_file().display());
            println!("Monthly file:    {}", storage.paths().monthly_file().display());
            println!("Toggles file:    {}", storage.paths().monthly_toggles_file().display());
            println!("Rates endpoint:  {}", rates.url);
        }
        None => {
            println!("duit - terminal monthly budget tracker");
            println!();
            println!("Run 'duit --help' for usage information.");
            println!("Run 'duit summary' to see this month's budget.");
        }
    }

    Ok(())
}
