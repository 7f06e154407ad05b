//! Income CLI commands

use chrono::NaiveDate;
use clap::Args;

use crate::display::format_split;
use crate::error::{TrackerError, TrackerResult};
use crate::forms::IncomeForm;
use crate::models::Money;
use crate::rules::suggested_split;

/// Arguments for recording an income entry
#[derive(Args)]
pub struct IncomeArgs {
    /// Income amount (e.g., "2500.00")
    #[arg(long)]
    pub amount: String,
    /// Where the income came from (employer, client, ...)
    #[arg(long)]
    pub source: String,
    /// Income category (Salary, Freelance, Business, ...)
    #[arg(long)]
    pub category: String,
    /// Income date (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub date: Option<String>,
    /// Free-form notes
    #[arg(long)]
    pub memo: Option<String>,
}

/// Validate an income entry through the form and print the record
pub fn handle_income_command(args: IncomeArgs) -> TrackerResult<()> {
    let mut form = IncomeForm::new();
    form.set_amount_text(&args.amount);
    form.set_source(args.source);
    form.set_category(args.category)?;
    if let Some(date) = &args.date {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| {
            TrackerError::validation(format!("Invalid date '{}', expected YYYY-MM-DD", date))
        })?;
        form.set_date(date);
    }
    if let Some(memo) = args.memo {
        form.set_description(memo);
    }

    if let Some(split) = form.split_suggestion() {
        println!("{}", format_split(form.amount().effective(), &split));
        println!();
    }

    let record = form.submit()?;
    println!("Income record:");
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

/// Print the split suggestion for an amount
pub fn handle_split_command(amount: &str) -> TrackerResult<()> {
    let amount =
        Money::parse(amount).map_err(|e| TrackerError::validation(e.to_string()))?;

    match suggested_split(amount) {
        Some(split) => println!("{}", format_split(amount, &split)),
        None => {
            return Err(TrackerError::validation(
                "Income amount must be positive",
            ))
        }
    }
    Ok(())
}
