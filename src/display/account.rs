//! Account display formatting
//!
//! Formats the account directory for terminal output.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Account;

#[derive(Tabled)]
struct AccountRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    account_type: String,
    #[tabled(rename = "Provider")]
    provider: String,
    #[tabled(rename = "Balance")]
    balance: String,
    #[tabled(rename = "Status")]
    status: &'static str,
}

impl From<&Account> for AccountRow {
    fn from(account: &Account) -> Self {
        Self {
            name: account.name.clone(),
            account_type: account.account_type.to_string(),
            provider: account.provider.clone(),
            balance: account.balance.to_string(),
            status: if account.is_active { "Active" } else { "Inactive" },
        }
    }
}

/// Format a list of accounts as a table
pub fn format_account_list(accounts: &[&Account]) -> String {
    if accounts.is_empty() {
        return "No accounts found.".to_string();
    }

    let rows: Vec<AccountRow> = accounts.iter().map(|a| AccountRow::from(*a)).collect();
    Table::new(rows).with(Style::sharp()).to_string()
}

/// Format one account in detail view
pub fn format_account_details(account: &Account) -> String {
    let mut output = String::new();
    output.push_str(&format!("Account: {}\n", account.name));
    output.push_str(&format!("  Id:       {}\n", account.id));
    output.push_str(&format!("  Type:     {}\n", account.account_type));
    output.push_str(&format!("  Provider: {}\n", account.provider));
    output.push_str(&format!("  Balance:  {}\n", account.balance));
    if let Some(number) = &account.account_number {
        output.push_str(&format!("  Number:   {}\n", number));
    }
    output.push_str(&format!(
        "  Status:   {}\n",
        if account.is_active { "Active" } else { "Inactive" }
    ));
    if !account.description.is_empty() {
        output.push_str(&format!("  Notes:    {}\n", account.description));
    }
    output
}
