//! Income split suggestion model
//!
//! A three-way allocation of an income amount into needs/wants, emergency
//! fund, and investment buckets.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Suggested allocation of an income amount
///
/// Each bucket is rounded to the pesewa independently, so the parts may not
/// sum exactly to the original amount. `sum()` reports the actual total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeSplit {
    /// Day-to-day spending allocation
    pub needs_and_wants: Money,
    /// Emergency fund allocation
    pub emergency: Money,
    /// Investment allocation
    pub investment: Money,
}

impl IncomeSplit {
    /// Total of the three buckets
    pub fn sum(&self) -> Money {
        self.needs_and_wants + self.emergency + self.investment
    }
}

impl fmt::Display for IncomeSplit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "needs/wants {}, emergency {}, investment {}",
            self.needs_and_wants, self.emergency, self.investment
        )
    }
}
