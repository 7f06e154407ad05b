//! Account creation form
//!
//! Captures a new account's name, type, provider, and opening balance. The
//! provider select depends on the account type: changing the type clears any
//! chosen provider and repopulates the allowed values from the catalog table.
//! The payload is stamped with the session user when one is signed in.

use crate::catalog::{is_valid_provider, providers_for};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{AccountType, Money, NewAccount};
use crate::session::SessionContext;

use super::fields::AmountField;

/// State for the account creation form
#[derive(Debug, Clone, Default)]
pub struct AccountForm {
    name: String,
    account_type: Option<AccountType>,
    provider: Option<String>,
    balance: AmountField,
    account_number: String,
    description: String,
}

impl AccountForm {
    /// Create an empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the account name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Choose an account type, clearing any previously chosen provider
    pub fn set_account_type(&mut self, account_type: AccountType) {
        self.provider = None;
        self.account_type = Some(account_type);
    }

    /// Providers allowed for the currently chosen type
    pub fn available_providers(&self) -> &'static [&'static str] {
        match self.account_type {
            Some(account_type) => providers_for(account_type),
            None => &[],
        }
    }

    /// Choose a provider from the current type's allowed values
    pub fn set_provider(&mut self, provider: impl Into<String>) -> TrackerResult<()> {
        let provider = provider.into();
        let account_type = self
            .account_type
            .ok_or_else(|| TrackerError::validation("Select an account type first"))?;

        if !is_valid_provider(account_type, &provider) {
            return Err(TrackerError::validation(format!(
                "Provider '{}' is not available for {}",
                provider, account_type
            )));
        }
        self.provider = Some(provider);
        Ok(())
    }

    /// Update the opening balance from typed text (blank means zero)
    pub fn set_balance_text(&mut self, text: impl Into<String>) {
        self.balance.set_text(text);
    }

    /// Set the account or wallet number
    pub fn set_account_number(&mut self, number: impl Into<String>) {
        self.account_number = number.into();
    }

    /// Set the optional description
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// The currently chosen account type
    pub fn account_type(&self) -> Option<AccountType> {
        self.account_type
    }

    /// The currently chosen provider
    pub fn provider(&self) -> Option<&str> {
        self.provider.as_deref()
    }

    /// Validate and produce the account payload
    ///
    /// The opening balance may be blank (zero) but never negative. On success
    /// the form resets for the next entry.
    pub fn submit(&mut self, session: &SessionContext) -> TrackerResult<NewAccount> {
        if self.name.trim().is_empty() || self.account_type.is_none() || self.provider.is_none()
        {
            return Err(TrackerError::validation(
                "Please fill in all required fields",
            ));
        }

        let balance = if self.balance.is_empty() {
            Money::zero()
        } else {
            let balance = self
                .balance
                .value()
                .ok_or_else(|| TrackerError::validation("Please enter a valid balance"))?;
            if balance.is_negative() {
                return Err(TrackerError::validation("Balance cannot be negative"));
            }
            balance
        };

        let account_number = self.account_number.trim();
        let payload = NewAccount {
            user_id: session.user_id(),
            name: std::mem::take(&mut self.name).trim().to_string(),
            account_type: self.account_type.take().unwrap_or(AccountType::Cash),
            provider: self.provider.take().unwrap_or_default(),
            balance,
            account_number: (!account_number.is_empty()).then(|| account_number.to_string()),
            description: std::mem::take(&mut self.description),
        };

        self.reset();
        Ok(payload)
    }

    fn reset(&mut self) {
        self.name.clear();
        self.account_type = None;
        self.provider = None;
        self.balance.clear();
        self.account_number.clear();
        self.description.clear();
    }
}
