//! Income split rules
//!
//! Suggests a fixed 75/15/10 allocation of an income amount into needs/wants,
//! emergency fund, and investment buckets.

use crate::models::{IncomeSplit, Money};

/// Needs and wants share: 75%
const NEEDS_AND_WANTS_BPS: i64 = 7_500;
/// Emergency fund share: 15%
const EMERGENCY_BPS: i64 = 1_500;
/// Investment share: 10%
const INVESTMENT_BPS: i64 = 1_000;

/// Compute the suggested split for an income amount
///
/// Each bucket is rounded to the pesewa independently; the parts may differ
/// from the input by a pesewa or two and that discrepancy is left as-is.
pub fn income_split(amount: Money) -> IncomeSplit {
    IncomeSplit {
        needs_and_wants: amount.percent_bps(NEEDS_AND_WANTS_BPS),
        emergency: amount.percent_bps(EMERGENCY_BPS),
        investment: amount.percent_bps(INVESTMENT_BPS),
    }
}

/// Compute the split suggestion, suppressed for non-positive amounts
///
/// Entry forms only offer the suggestion once a positive amount has been
/// entered; zero, negative, and unparseable amounts yield nothing.
pub fn suggested_split(amount: Money) -> Option<IncomeSplit> {
    amount.is_positive().then(|| income_split(amount))
}
