use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use ceditrack::cli::{
    handle_account_command, handle_expense_command, handle_fee_command, handle_income_command,
    handle_split_command, handle_transfer_command, AccountCommands, ExpenseArgs, FeeArgs,
    IncomeArgs, TransferArgs,
};
use ceditrack::config::{Settings, TrackerPaths};
use ceditrack::directory::AccountDirectory;
use ceditrack::session::SessionContext;

#[derive(Parser)]
#[command(
    name = "ceditrack",
    version,
    about = "Personal finance tracker for accounts, transfers, income, and expenses",
    long_about = "CediTrack validates personal-finance entries against the fee and \
                  split rules used by the tracker: provider-aware transfer fees, \
                  75/15/10 income splits, and dependent category selects. Accounts \
                  are read from a JSON directory snapshot supplied by the host."
)]
struct Cli {
    /// Path to the account directory snapshot (JSON array of accounts)
    #[arg(long, global = true, env = "CEDITRACK_ACCOUNTS")]
    directory: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Account directory commands
    #[command(subcommand)]
    Account(AccountCommands),

    /// Validate a transfer and print the request payload
    Transfer(TransferArgs),

    /// Quote the fee for a prospective transfer
    Fee(FeeArgs),

    /// Validate an income entry with its split suggestion
    Income(IncomeArgs),

    /// Validate an expense entry
    Expense(ExpenseArgs),

    /// Show the 75/15/10 split suggestion for an amount
    Split {
        /// Income amount (e.g., "1000.00")
        amount: String,
    },

    /// Show current configuration and paths
    Config,
}

fn load_directory(cli_path: &Option<PathBuf>, paths: &TrackerPaths) -> Result<AccountDirectory> {
    let path = cli_path.clone().unwrap_or_else(|| paths.accounts_file());
    AccountDirectory::load(&path)
        .with_context(|| format!("failed to load account directory from {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let paths = TrackerPaths::new()?;

    match cli.command {
        Commands::Account(cmd) => {
            let directory = load_directory(&cli.directory, &paths)?;
            let session = SessionContext::new();
            handle_account_command(&directory, &session, cmd)?;
        }
        Commands::Transfer(args) => {
            let directory = load_directory(&cli.directory, &paths)?;
            handle_transfer_command(&directory, args)?;
        }
        Commands::Fee(args) => {
            let directory = load_directory(&cli.directory, &paths)?;
            handle_fee_command(&directory, args)?;
        }
        Commands::Income(args) => {
            handle_income_command(args)?;
        }
        Commands::Expense(args) => {
            handle_expense_command(args)?;
        }
        Commands::Split { amount } => {
            handle_split_command(&amount)?;
        }
        Commands::Config => {
            let settings = Settings::load_or_create(&paths)?;
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Accounts file:  {}", paths.accounts_file().display());
            println!("Currency:       {}", settings.currency_symbol);
            println!("Date format:    {}", settings.date_format);
        }
    }

    Ok(())
}
