//! Account model
//!
//! Represents financial accounts (bank accounts, mobile wallets, credit
//! cards, cash) as supplied by the host application's account directory.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AccountId;
use super::money::Money;

/// Type of financial account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountType {
    /// Bank account (e.g., Ecobank Ghana, GCB)
    #[serde(rename = "Bank Account")]
    BankAccount,
    /// Mobile money wallet (e.g., MTN Mobile Money, Vodafone Cash)
    #[serde(rename = "Mobile Wallet")]
    MobileWallet,
    /// Credit card
    #[serde(rename = "Credit Card")]
    CreditCard,
    /// Physical cash
    Cash,
}

impl AccountType {
    /// Parse account type from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', '_'], " ").as_str() {
            "bank account" | "bank" => Some(Self::BankAccount),
            "mobile wallet" | "wallet" | "momo" => Some(Self::MobileWallet),
            "credit card" | "credit" => Some(Self::CreditCard),
            "cash" => Some(Self::Cash),
            _ => None,
        }
    }

    /// All account types, in display order
    pub const ALL: [AccountType; 4] = [
        Self::BankAccount,
        Self::MobileWallet,
        Self::CreditCard,
        Self::Cash,
    ];
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BankAccount => write!(f, "Bank Account"),
            Self::MobileWallet => write!(f, "Mobile Wallet"),
            Self::CreditCard => write!(f, "Credit Card"),
            Self::Cash => write!(f, "Cash"),
        }
    }
}

fn default_timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// A financial account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier
    pub id: AccountId,

    /// Account name (e.g., "Main Savings")
    pub name: String,

    /// Type of account
    #[serde(rename = "type")]
    pub account_type: AccountType,

    /// Issuing institution or service (e.g., "Ecobank Ghana", "MTN Mobile Money")
    pub provider: String,

    /// Current balance; never negative for this domain
    pub balance: Money,

    /// Account or wallet number at the provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,

    /// Notes about this account
    #[serde(default)]
    pub description: String,

    /// Inactive accounts are excluded from transfer eligibility
    pub is_active: bool,

    /// When the account was created
    #[serde(default = "default_timestamp")]
    pub created_at: DateTime<Utc>,

    /// When the account was last modified
    #[serde(default = "default_timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new active account with a zero balance
    pub fn new(
        name: impl Into<String>,
        account_type: AccountType,
        provider: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: AccountId::new(),
            name: name.into(),
            account_type,
            provider: provider.into(),
            balance: Money::zero(),
            account_number: None,
            description: String::new(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a new account with an opening balance
    pub fn with_balance(
        name: impl Into<String>,
        account_type: AccountType,
        provider: impl Into<String>,
        balance: Money,
    ) -> Self {
        let mut account = Self::new(name, account_type, provider);
        account.balance = balance;
        account
    }

    /// Deactivate this account (excluded from transfers)
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }

    /// Reactivate this account
    pub fn activate(&mut self) {
        self.is_active = true;
        self.updated_at = Utc::now();
    }

    /// Validate the account
    pub fn validate(&self) -> Result<(), AccountValidationError> {
        if self.name.trim().is_empty() {
            return Err(AccountValidationError::EmptyName);
        }

        if self.name.len() > 100 {
            return Err(AccountValidationError::NameTooLong(self.name.len()));
        }

        if self.provider.trim().is_empty() {
            return Err(AccountValidationError::EmptyProvider);
        }

        if self.balance.is_negative() {
            return Err(AccountValidationError::NegativeBalance);
        }

        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.account_type, self.provider)
    }
}

/// Validation errors for accounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountValidationError {
    EmptyName,
    NameTooLong(usize),
    EmptyProvider,
    NegativeBalance,
}

impl fmt::Display for AccountValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Account name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Account name too long ({} chars, max 100)", len)
            }
            Self::EmptyProvider => write!(f, "Account provider cannot be empty"),
            Self::NegativeBalance => write!(f, "Account balance cannot be negative"),
        }
    }
}

impl std::error::Error for AccountValidationError {}
