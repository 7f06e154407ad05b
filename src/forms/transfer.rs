//! Transfer entry form
//!
//! Owns the input state for a funds transfer: source and destination account
//! selection, amount, date, reference, and description. The fee is recomputed
//! on every change to amount or either account; it is never cached across a
//! selection change or a swap.

use chrono::{Local, NaiveDate};

use crate::directory::AccountDirectory;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Account, AccountId, Money, TransferRequest};
use crate::rules::{quote_transfer_fee, FeeQuote};

use super::fields::AmountField;

/// State for the transfer form
#[derive(Debug, Clone)]
pub struct TransferForm<'a> {
    directory: &'a AccountDirectory,
    from_account: Option<AccountId>,
    to_account: Option<AccountId>,
    amount: AmountField,
    date: NaiveDate,
    reference: String,
    description: String,
    quote: FeeQuote,
}

impl<'a> TransferForm<'a> {
    /// Create a fresh form over a directory snapshot, dated today
    pub fn new(directory: &'a AccountDirectory) -> Self {
        Self {
            directory,
            from_account: None,
            to_account: None,
            amount: AmountField::new(),
            date: Local::now().date_naive(),
            reference: String::new(),
            description: String::new(),
            quote: FeeQuote::free(),
        }
    }

    /// Accounts selectable as the source (active only)
    pub fn from_candidates(&self) -> Vec<&Account> {
        self.directory.transfer_candidates(None)
    }

    /// Accounts selectable as the destination (active, excluding the source)
    pub fn to_candidates(&self) -> Vec<&Account> {
        self.directory.transfer_candidates(self.from_account)
    }

    /// Update the amount from typed text and requote the fee
    pub fn set_amount_text(&mut self, text: impl Into<String>) {
        self.amount.set_text(text);
        self.requote();
    }

    /// Select the source account
    ///
    /// Selecting the account currently chosen as the destination clears the
    /// destination; the two sides are never allowed to match.
    pub fn set_from_account(&mut self, id: AccountId) {
        if self.to_account == Some(id) {
            self.to_account = None;
        }
        self.from_account = Some(id);
        self.requote();
    }

    /// Select the destination account, clearing the source on a collision
    pub fn set_to_account(&mut self, id: AccountId) {
        if self.from_account == Some(id) {
            self.from_account = None;
        }
        self.to_account = Some(id);
        self.requote();
    }

    /// Exchange source and destination, requoting for the new pairing
    ///
    /// Only meaningful once both sides are selected; otherwise a no-op.
    pub fn swap_accounts(&mut self) {
        if self.from_account.is_some() && self.to_account.is_some() {
            std::mem::swap(&mut self.from_account, &mut self.to_account);
            self.requote();
        }
    }

    /// Set the transfer date
    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    /// Set the optional reference line
    pub fn set_reference(&mut self, reference: impl Into<String>) {
        self.reference = reference.into();
    }

    /// Set the optional description
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// The currently selected source account id
    pub fn from_account(&self) -> Option<AccountId> {
        self.from_account
    }

    /// The currently selected destination account id
    pub fn to_account(&self) -> Option<AccountId> {
        self.to_account
    }

    /// The amount field (text and parsed value)
    pub fn amount(&self) -> &AmountField {
        &self.amount
    }

    /// The current fee quote (fee plus the rule that produced it)
    pub fn fee_quote(&self) -> FeeQuote {
        self.quote
    }

    /// The current fee
    pub fn fee(&self) -> Money {
        self.quote.fee
    }

    /// Amount plus fee
    pub fn total(&self) -> Money {
        self.amount.effective() + self.fee()
    }

    /// Source balance remaining after the transfer, for the summary display
    pub fn remaining_balance(&self) -> Option<Money> {
        let from = self.directory.get_active(self.from_account?)?;
        Some(from.balance - self.total())
    }

    /// Whether the form has everything a submission needs
    pub fn is_complete(&self) -> bool {
        self.from_account.is_some()
            && self.to_account.is_some()
            && self.amount.positive().is_some()
    }

    // Fee recomputation runs on every amount or account change. Unresolvable
    // or inactive sides quote zero rather than erroring; submission performs
    // the strict checks.
    fn requote(&mut self) {
        let resolved = self
            .from_account
            .and_then(|id| self.directory.get_active(id))
            .zip(self.to_account.and_then(|id| self.directory.get_active(id)));

        self.quote = match resolved {
            Some((from, to)) => quote_transfer_fee(self.amount.effective(), from, to),
            None => FeeQuote::free(),
        };
    }

    /// Validate and produce the transfer request
    ///
    /// On success the form resets for the next entry. On failure nothing
    /// changes; every error is correctable by the user.
    pub fn submit(&mut self) -> TrackerResult<TransferRequest> {
        let (from_id, to_id) = match (self.from_account, self.to_account) {
            (Some(from), Some(to)) => (from, to),
            _ => {
                return Err(TrackerError::validation(
                    "Please fill in all required fields",
                ))
            }
        };

        if self.amount.is_empty() {
            return Err(TrackerError::validation(
                "Please fill in all required fields",
            ));
        }

        let amount = self
            .amount
            .positive()
            .ok_or_else(|| TrackerError::validation("Please enter a valid transfer amount"))?;

        // The setters keep the sides distinct; guard anyway.
        if from_id == to_id {
            return Err(TrackerError::validation(
                "Cannot transfer to the same account",
            ));
        }

        let from = self
            .directory
            .get(from_id)
            .ok_or_else(|| TrackerError::account_not_found(from_id.to_string()))?;
        let to = self
            .directory
            .get(to_id)
            .ok_or_else(|| TrackerError::account_not_found(to_id.to_string()))?;

        if !from.is_active || !to.is_active {
            return Err(TrackerError::validation(
                "Both accounts must be active to transfer",
            ));
        }

        // Quote fresh at submission; never trust a cached fee.
        let fee = quote_transfer_fee(amount, from, to).fee;
        let required = amount + fee;

        if from.balance < required {
            return Err(TrackerError::InsufficientBalance {
                available: from.balance,
                required,
            });
        }

        let request = TransferRequest {
            from_account: from_id,
            to_account: to_id,
            amount,
            fee,
            date: self.date,
            reference: std::mem::take(&mut self.reference),
            description: std::mem::take(&mut self.description),
        };

        self.reset();
        Ok(request)
    }

    fn reset(&mut self) {
        self.from_account = None;
        self.to_account = None;
        self.amount.clear();
        self.date = Local::now().date_naive();
        self.reference.clear();
        self.description.clear();
        self.quote = FeeQuote::free();
    }
}
