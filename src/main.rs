use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use perdiem::cli::{
    handle_balance, handle_log, handle_period, handle_record, handle_reset, handle_status,
};
use perdiem::config::{PerdiemPaths, Settings};
use perdiem::services::BudgetController;
use perdiem::storage::BudgetStore;

#[derive(Parser)]
#[command(
    name = "perdiem",
    version,
    about = "Terminal daily-budget tracker",
    long_about = "perdiem tracks a spending balance over a date period and suggests \
                  a daily limit: the remaining balance spread across the remaining \
                  days. Transactions adjust the balance as you go, and the whole \
                  state is kept in a single local JSON snapshot."
)]
struct Cli {
    /// Data directory override (defaults to the platform config dir)
    #[arg(long, env = "PERDIEM_DATA_DIR", global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show balance, period, and the suggested daily limit
    Status,

    /// Set the starting balance
    Balance {
        /// Amount, e.g. "1500" or "1500.00"
        #[arg(allow_negative_numbers = true)]
        amount: String,
    },

    /// Record money added to the balance
    Add {
        /// Amount, e.g. "250" or "250.00" (a negative amount subtracts)
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// Free-text note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Record money spent from the balance
    Spend {
        /// Amount, e.g. "42.50"
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// Free-text note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Show the transaction log, most recent first
    Log {
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Set the budget period, or show it when no dates are given
    Period {
        /// First day (YYYY-MM-DD)
        start: Option<String>,
        /// Last day (YYYY-MM-DD)
        end: Option<String>,
    },

    /// Clear the balance, the transaction log, and the period
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => PerdiemPaths::with_base_dir(dir),
        None => PerdiemPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    let store = BudgetStore::new(&paths)?;
    let mut controller = BudgetController::new(store);
    controller.initialize();

    match cli.command {
        Some(Commands::Status) | None => {
            handle_status(&controller, &settings)?;
        }
        Some(Commands::Balance { amount }) => {
            handle_balance(&mut controller, &settings, &amount)?;
        }
        Some(Commands::Add { amount, note }) => {
            handle_record(&mut controller, &settings, &amount, note, false)?;
        }
        Some(Commands::Spend { amount, note }) => {
            handle_record(&mut controller, &settings, &amount, note, true)?;
        }
        Some(Commands::Log { limit }) => {
            handle_log(&controller, &settings, limit)?;
        }
        Some(Commands::Period { start, end }) => {
            handle_period(&mut controller, start, end)?;
        }
        Some(Commands::Reset { yes }) => {
            handle_reset(&mut controller, yes)?;
        }
        Some(Commands::Config) => {
            println!("perdiem configuration");
            println!("{}", "=".repeat(50));
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Snapshot file:  {}", paths.snapshot_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
        }
    }

    Ok(())
}
