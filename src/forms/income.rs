//! Income entry form
//!
//! Captures an income amount with its source and category, and offers the
//! 75/15/10 split suggestion. The suggestion tracks the amount field on every
//! change and is only shown once the amount is positive.

use chrono::{Local, NaiveDate};

use crate::catalog::INCOME_CATEGORIES;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{IncomeRecord, IncomeSplit};
use crate::rules::suggested_split;

use super::fields::AmountField;

/// State for the income form
#[derive(Debug, Clone)]
pub struct IncomeForm {
    amount: AmountField,
    source: String,
    category: Option<String>,
    date: NaiveDate,
    description: String,
}

impl IncomeForm {
    /// Create a fresh form dated today
    pub fn new() -> Self {
        Self {
            amount: AmountField::new(),
            source: String::new(),
            category: None,
            date: Local::now().date_naive(),
            description: String::new(),
        }
    }

    /// Categories offered by the category select
    pub fn categories(&self) -> &'static [&'static str] {
        &INCOME_CATEGORIES
    }

    /// Update the amount from typed text
    pub fn set_amount_text(&mut self, text: impl Into<String>) {
        self.amount.set_text(text);
    }

    /// Set the income source (employer, client, ...)
    pub fn set_source(&mut self, source: impl Into<String>) {
        self.source = source.into();
    }

    /// Choose an income category
    pub fn set_category(&mut self, category: impl Into<String>) -> TrackerResult<()> {
        let category = category.into();
        if !INCOME_CATEGORIES.contains(&category.as_str()) {
            return Err(TrackerError::validation(format!(
                "Unknown income category: {}",
                category
            )));
        }
        self.category = Some(category);
        Ok(())
    }

    /// Set the income date
    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    /// Set the optional description
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// The amount field (text and parsed value)
    pub fn amount(&self) -> &AmountField {
        &self.amount
    }

    /// The split suggestion for the current amount
    ///
    /// `None` until the amount is positive; unparseable text counts as zero
    /// and suppresses the suggestion.
    pub fn split_suggestion(&self) -> Option<IncomeSplit> {
        suggested_split(self.amount.effective())
    }

    /// Validate and produce the income record
    ///
    /// On success the form resets for the next entry.
    pub fn submit(&mut self) -> TrackerResult<IncomeRecord> {
        if self.amount.is_empty() || self.source.trim().is_empty() || self.category.is_none() {
            return Err(TrackerError::validation(
                "Please fill in all required fields",
            ));
        }

        let amount = self
            .amount
            .positive()
            .ok_or_else(|| TrackerError::validation("Please enter a valid income amount"))?;

        let record = IncomeRecord {
            amount,
            source: std::mem::take(&mut self.source),
            category: self.category.take().unwrap_or_default(),
            date: self.date,
            description: std::mem::take(&mut self.description),
            suggested_split: crate::rules::income_split(amount),
        };

        self.reset();
        Ok(record)
    }

    fn reset(&mut self) {
        self.amount.clear();
        self.source.clear();
        self.category = None;
        self.date = Local::now().date_naive();
        self.description.clear();
    }
}

impl Default for IncomeForm {
    fn default() -> Self {
        Self::new()
    }
}
