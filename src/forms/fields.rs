//! Form field primitives
//!
//! Amounts are parsed at the input boundary: the field keeps the text exactly
//! as typed for display, alongside the validated `Money` value (or `None`
//! when the text does not parse). Downstream computation never re-parses.

use crate::models::Money;

/// A monetary input field
#[derive(Debug, Clone, Default)]
pub struct AmountField {
    text: String,
    value: Option<Money>,
}

impl AmountField {
    /// Create an empty field
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the field from typed text
    ///
    /// Unparseable text leaves `value()` empty; computations then treat the
    /// amount as zero and submission is blocked.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.value = Money::parse(&self.text).ok();
    }

    /// Set a concrete value, formatting the display text from it
    pub fn set_value(&mut self, value: Money) {
        self.text = format!("{}.{:02}", value.cedis(), value.pesewas_part());
        self.value = Some(value);
    }

    /// Clear the field
    pub fn clear(&mut self) {
        self.text.clear();
        self.value = None;
    }

    /// The text as typed
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The parsed value, if the text was valid
    pub fn value(&self) -> Option<Money> {
        self.value
    }

    /// The parsed value when strictly positive
    pub fn positive(&self) -> Option<Money> {
        self.value.filter(|v| v.is_positive())
    }

    /// The amount used for computation: the positive value, else zero
    pub fn effective(&self) -> Money {
        self.positive().unwrap_or_default()
    }

    /// Whether nothing has been typed
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}
