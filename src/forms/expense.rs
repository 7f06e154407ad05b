//! Expense entry form
//!
//! Captures an expense with a category/subcategory pair and a payment method.
//! The subcategory select depends on the category: changing the category
//! clears any chosen subcategory and repopulates the allowed values from the
//! catalog table.

use chrono::{Local, NaiveDate};

use crate::catalog::{subcategories_for, EXPENSE_CATEGORIES, PAYMENT_METHODS};
use crate::error::{TrackerError, TrackerResult};
use crate::models::ExpenseRecord;

use super::fields::AmountField;

/// State for the expense form
#[derive(Debug, Clone)]
pub struct ExpenseForm {
    amount: AmountField,
    category: Option<String>,
    subcategory: Option<String>,
    payment_method: Option<String>,
    date: NaiveDate,
    description: String,
    is_recurring: bool,
}

impl ExpenseForm {
    /// Create a fresh form dated today
    pub fn new() -> Self {
        Self {
            amount: AmountField::new(),
            category: None,
            subcategory: None,
            payment_method: None,
            date: Local::now().date_naive(),
            description: String::new(),
            is_recurring: false,
        }
    }

    /// Top-level categories offered by the category select
    pub fn categories(&self) -> &'static [&'static str] {
        &EXPENSE_CATEGORIES
    }

    /// Subcategories allowed for the currently chosen category
    pub fn available_subcategories(&self) -> &'static [&'static str] {
        match &self.category {
            Some(category) => subcategories_for(category),
            None => &[],
        }
    }

    /// Payment methods offered
    pub fn payment_methods(&self) -> &'static [&'static str] {
        &PAYMENT_METHODS
    }

    /// Update the amount from typed text
    pub fn set_amount_text(&mut self, text: impl Into<String>) {
        self.amount.set_text(text);
    }

    /// Choose a category, clearing any previously chosen subcategory
    pub fn set_category(&mut self, category: impl Into<String>) -> TrackerResult<()> {
        let category = category.into();
        if !EXPENSE_CATEGORIES.contains(&category.as_str()) {
            return Err(TrackerError::validation(format!(
                "Unknown expense category: {}",
                category
            )));
        }
        self.subcategory = None;
        self.category = Some(category);
        Ok(())
    }

    /// Choose a subcategory from the current category's allowed values
    pub fn set_subcategory(&mut self, subcategory: impl Into<String>) -> TrackerResult<()> {
        let subcategory = subcategory.into();
        if !self
            .available_subcategories()
            .contains(&subcategory.as_str())
        {
            return Err(TrackerError::validation(format!(
                "Subcategory '{}' is not available for the selected category",
                subcategory
            )));
        }
        self.subcategory = Some(subcategory);
        Ok(())
    }

    /// Choose a payment method
    pub fn set_payment_method(&mut self, method: impl Into<String>) -> TrackerResult<()> {
        let method = method.into();
        if !PAYMENT_METHODS.contains(&method.as_str()) {
            return Err(TrackerError::validation(format!(
                "Unknown payment method: {}",
                method
            )));
        }
        self.payment_method = Some(method);
        Ok(())
    }

    /// Set the expense date
    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    /// Set the optional description
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Mark the expense as recurring
    pub fn set_recurring(&mut self, recurring: bool) {
        self.is_recurring = recurring;
    }

    /// The amount field (text and parsed value)
    pub fn amount(&self) -> &AmountField {
        &self.amount
    }

    /// The currently chosen category
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// The currently chosen subcategory
    pub fn subcategory(&self) -> Option<&str> {
        self.subcategory.as_deref()
    }

    /// Validate and produce the expense record
    ///
    /// On success the form resets for the next entry.
    pub fn submit(&mut self) -> TrackerResult<ExpenseRecord> {
        if self.amount.is_empty()
            || self.category.is_none()
            || self.subcategory.is_none()
            || self.payment_method.is_none()
        {
            return Err(TrackerError::validation(
                "Please fill in all required fields",
            ));
        }

        let amount = self
            .amount
            .positive()
            .ok_or_else(|| TrackerError::validation("Please enter a valid amount"))?;

        let record = ExpenseRecord {
            amount,
            category: self.category.take().unwrap_or_default(),
            subcategory: self.subcategory.take().unwrap_or_default(),
            payment_method: self.payment_method.take().unwrap_or_default(),
            date: self.date,
            description: std::mem::take(&mut self.description),
            is_recurring: self.is_recurring,
        };

        self.reset();
        Ok(record)
    }

    fn reset(&mut self) {
        self.amount.clear();
        self.category = None;
        self.subcategory = None;
        self.payment_method = None;
        self.date = Local::now().date_naive();
        self.description.clear();
        self.is_recurring = false;
    }
}

impl Default for ExpenseForm {
    fn default() -> Self {
        Self::new()
    }
}
