//! Account CLI commands

use clap::Subcommand;

use crate::directory::AccountDirectory;
use crate::display::{format_account_details, format_account_list};
use crate::error::{TrackerError, TrackerResult};
use crate::forms::AccountForm;
use crate::models::AccountType;
use crate::session::SessionContext;

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// List accounts in the directory snapshot
    List {
        /// Include inactive accounts
        #[arg(short, long)]
        all: bool,
    },
    /// Show account details
    Show {
        /// Account name or id
        account: String,
    },
    /// Build a new-account payload (printed, not persisted)
    Add {
        /// Account name
        name: String,
        /// Account type (bank, wallet, credit, cash)
        #[arg(short = 't', long = "type")]
        account_type: String,
        /// Provider (must match the type's provider list)
        #[arg(short, long)]
        provider: String,
        /// Opening balance (e.g., "1000.00"); defaults to zero
        #[arg(short, long)]
        balance: Option<String>,
        /// Account or wallet number
        #[arg(long)]
        number: Option<String>,
        /// Notes
        #[arg(short, long)]
        description: Option<String>,
    },
}

/// Handle an account command
pub fn handle_account_command(
    directory: &AccountDirectory,
    session: &SessionContext,
    cmd: AccountCommands,
) -> TrackerResult<()> {
    match cmd {
        AccountCommands::List { all } => {
            let accounts: Vec<_> = if all {
                directory.all().iter().collect()
            } else {
                directory.active().collect()
            };
            println!("{}", format_account_list(&accounts));
        }

        AccountCommands::Show { account } => {
            let account = directory.resolve(&account)?;
            print!("{}", format_account_details(account));
        }

        AccountCommands::Add {
            name,
            account_type,
            provider,
            balance,
            number,
            description,
        } => {
            let account_type = AccountType::parse(&account_type).ok_or_else(|| {
                TrackerError::validation(format!(
                    "Invalid account type: '{}'. Valid types: bank, wallet, credit, cash",
                    account_type
                ))
            })?;

            let mut form = AccountForm::new();
            form.set_name(name);
            form.set_account_type(account_type);
            form.set_provider(provider)?;
            if let Some(balance) = balance {
                form.set_balance_text(balance);
            }
            if let Some(number) = number {
                form.set_account_number(number);
            }
            if let Some(description) = description {
                form.set_description(description);
            }

            let payload = form.submit(session)?;

            println!("New account payload:");
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
    }

    Ok(())
}
