//! Transfer and income summary formatting

use crate::directory::AccountDirectory;
use crate::models::{IncomeSplit, Money, TransferRequest};
use crate::rules::FeeQuote;

/// Format a fee quote with its rule and resulting total
pub fn format_fee_quote(amount: Money, quote: &FeeQuote) -> String {
    format!(
        "Amount: {}\nFee:    {} ({})\nTotal:  {}",
        amount,
        quote.fee,
        quote.rule,
        amount + quote.fee
    )
}

/// Format a validated transfer request, resolving names from the directory
pub fn format_transfer_summary(request: &TransferRequest, directory: &AccountDirectory) -> String {
    let name_of = |id| {
        directory
            .get(id)
            .map(|a| a.name.clone())
            .unwrap_or_else(|| id.to_string())
    };

    let mut output = String::new();
    output.push_str("Transfer Summary\n");
    output.push_str(&format!("  From:   {}\n", name_of(request.from_account)));
    output.push_str(&format!("  To:     {}\n", name_of(request.to_account)));
    output.push_str(&format!("  Amount: {}\n", request.amount));
    if request.fee.is_positive() {
        output.push_str(&format!("  Fee:    {}\n", request.fee));
    }
    output.push_str(&format!("  Total:  {}\n", request.total()));
    output.push_str(&format!("  Date:   {}\n", request.date));
    if !request.reference.is_empty() {
        output.push_str(&format!("  Ref:    {}\n", request.reference));
    }
    output
}

/// Format an income split suggestion
pub fn format_split(amount: Money, split: &IncomeSplit) -> String {
    format!(
        "Suggested split for {}:\n  Needs & wants (75%): {}\n  Emergency (15%):     {}\n  Investment (10%):    {}",
        amount, split.needs_and_wants, split.emergency, split.investment
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Account, AccountType};
    use crate::rules::quote_transfer_fee;
    use chrono::NaiveDate;

    #[test]
    fn test_fee_quote_format() {
        let from = Account::new("A", AccountType::BankAccount, "Ecobank Ghana");
        let to = Account::new("B", AccountType::BankAccount, "Fidelity Bank");
        let amount = Money::from_cedis(100);
        let quote = quote_transfer_fee(amount, &from, &to);

        let output = format_fee_quote(amount, &quote);
        assert!(output.contains("Fee:    GHS 2.00"));
        assert!(output.contains("Total:  GHS 102.00"));
    }

    #[test]
    fn test_transfer_summary_resolves_names() {
        let from = Account::with_balance(
            "Main Bank",
            AccountType::BankAccount,
            "Ecobank Ghana",
            Money::from_cedis(500),
        );
        let to = Account::new("MoMo", AccountType::MobileWallet, "MTN Mobile Money");
        let request = TransferRequest {
            from_account: from.id,
            to_account: to.id,
            amount: Money::from_cedis(100),
            fee: Money::from_pesewas(150),
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            reference: "Savings".into(),
            description: String::new(),
        };
        let directory = AccountDirectory::new(vec![from, to]);

        let output = format_transfer_summary(&request, &directory);
        assert!(output.contains("From:   Main Bank"));
        assert!(output.contains("To:     MoMo"));
        assert!(output.contains("Fee:    GHS 1.50"));
        assert!(output.contains("Total:  GHS 101.50"));
        assert!(output.contains("Ref:    Savings"));
    }

    #[test]
    fn test_split_format() {
        let amount = Money::from_cedis(1000);
        let split = crate::rules::income_split(amount);
        let output = format_split(amount, &split);
        assert!(output.contains("GHS 750.00"));
        assert!(output.contains("GHS 150.00"));
        assert!(output.contains("GHS 100.00"));
    }
}
