//! Expense CLI commands

use chrono::NaiveDate;
use clap::Args;

use crate::error::{TrackerError, TrackerResult};
use crate::forms::ExpenseForm;

/// Arguments for recording an expense entry
#[derive(Args)]
pub struct ExpenseArgs {
    /// Expense amount (e.g., "45.50")
    #[arg(long)]
    pub amount: String,
    /// Category (Needs, Wants, Emergency)
    #[arg(long)]
    pub category: String,
    /// Subcategory within the category
    #[arg(long)]
    pub subcategory: String,
    /// Payment method (Bank Account, Mobile Wallet, Cash, ...)
    #[arg(long)]
    pub method: String,
    /// Expense date (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub date: Option<String>,
    /// Free-form notes
    #[arg(long)]
    pub memo: Option<String>,
    /// Mark as a recurring monthly expense
    #[arg(long)]
    pub recurring: bool,
}

/// Validate an expense entry through the form and print the record
pub fn handle_expense_command(args: ExpenseArgs) -> TrackerResult<()> {
    let mut form = ExpenseForm::new();
    form.set_amount_text(&args.amount);
    form.set_category(args.category)?;
    form.set_subcategory(args.subcategory)?;
    form.set_payment_method(args.method)?;
    if let Some(date) = &args.date {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| {
            TrackerError::validation(format!("Invalid date '{}', expected YYYY-MM-DD", date))
        })?;
        form.set_date(date);
    }
    if let Some(memo) = args.memo {
        form.set_description(memo);
    }
    form.set_recurring(args.recurring);

    let record = form.submit()?;
    println!("Expense record:");
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
