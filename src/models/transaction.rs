//! Ephemeral submission payloads
//!
//! These records are produced by the entry forms and handed to a
//! caller-supplied submission handler. Nothing here is persisted by the core;
//! lifecycle is create-on-input, consume-on-submit, discard-on-close.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::{AccountId, UserId};
use super::money::Money;
use super::split::IncomeSplit;

/// A validated transfer between two accounts
///
/// `fee` is always computed by the fee rules, never user-supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferRequest {
    /// Source account; always distinct from `to_account`
    pub from_account: AccountId,
    /// Destination account
    pub to_account: AccountId,
    /// Transfer amount, strictly positive
    pub amount: Money,
    /// Computed transfer fee
    pub fee: Money,
    /// Transfer date
    pub date: NaiveDate,
    /// Short reference (e.g., "Loan repayment")
    #[serde(default)]
    pub reference: String,
    /// Free-form notes
    #[serde(default)]
    pub description: String,
}

impl TransferRequest {
    /// Total debited from the source account
    pub fn total(&self) -> Money {
        self.amount + self.fee
    }
}

/// A validated income entry with its suggested split
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeRecord {
    pub amount: Money,
    /// Where the income came from (employer, client, ...)
    pub source: String,
    /// Income category (from the income category table)
    pub category: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
    /// 75/15/10 allocation suggestion computed from `amount`
    pub suggested_split: IncomeSplit,
}

/// A validated expense entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub amount: Money,
    /// Top-level category (Needs, Wants, Emergency)
    pub category: String,
    /// Subcategory within the chosen category
    pub subcategory: String,
    /// How the expense was paid
    pub payment_method: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
    /// Recurring expenses repeat monthly
    #[serde(default)]
    pub is_recurring: bool,
}

/// A validated account-creation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAccount {
    /// Owner, stamped from the session context when signed in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    pub name: String,
    #[serde(rename = "type")]
    pub account_type: super::account::AccountType,
    pub provider: String,
    /// Opening balance, never negative
    pub balance: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(default)]
    pub description: String,
}
