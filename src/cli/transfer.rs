//! Transfer CLI commands

use chrono::NaiveDate;
use clap::Args;

use crate::directory::AccountDirectory;
use crate::display::{format_fee_quote, format_transfer_summary};
use crate::error::{TrackerError, TrackerResult};
use crate::forms::TransferForm;
use crate::models::Money;
use crate::rules::quote_transfer_fee;

/// Arguments for validating a transfer end to end
#[derive(Args)]
pub struct TransferArgs {
    /// Source account name or id
    #[arg(long)]
    pub from: String,
    /// Destination account name or id
    #[arg(long)]
    pub to: String,
    /// Transfer amount (e.g., "100.00")
    #[arg(long)]
    pub amount: String,
    /// Transfer date (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub date: Option<String>,
    /// Short reference line
    #[arg(long)]
    pub reference: Option<String>,
    /// Free-form notes
    #[arg(long)]
    pub memo: Option<String>,
}

/// Arguments for a fee quote
#[derive(Args)]
pub struct FeeArgs {
    /// Source account name or id
    #[arg(long)]
    pub from: String,
    /// Destination account name or id
    #[arg(long)]
    pub to: String,
    /// Transfer amount (e.g., "100.00")
    #[arg(long)]
    pub amount: String,
}

fn parse_date(s: &str) -> TrackerResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| TrackerError::validation(format!("Invalid date '{}', expected YYYY-MM-DD", s)))
}

/// Validate a transfer through the form and print the result
pub fn handle_transfer_command(directory: &AccountDirectory, args: TransferArgs) -> TrackerResult<()> {
    let from = directory.resolve(&args.from)?;
    let to = directory.resolve(&args.to)?;

    let mut form = TransferForm::new(directory);
    form.set_from_account(from.id);
    form.set_to_account(to.id);
    form.set_amount_text(&args.amount);
    if let Some(date) = &args.date {
        form.set_date(parse_date(date)?);
    }
    if let Some(reference) = args.reference {
        form.set_reference(reference);
    }
    if let Some(memo) = args.memo {
        form.set_description(memo);
    }

    let request = form.submit()?;
    print!("{}", format_transfer_summary(&request, directory));
    Ok(())
}

/// Quote the fee for a prospective transfer
pub fn handle_fee_command(directory: &AccountDirectory, args: FeeArgs) -> TrackerResult<()> {
    let from = directory.resolve(&args.from)?;
    let to = directory.resolve(&args.to)?;

    let amount = Money::parse(&args.amount)
        .map_err(|e| TrackerError::validation(e.to_string()))?;
    if !amount.is_positive() {
        return Err(TrackerError::validation(
            "Transfer amount must be positive",
        ));
    }

    let quote = quote_transfer_fee(amount, from, to);
    println!("{}", format_fee_quote(amount, &quote));
    Ok(())
}
