//! Business rules for CediTrack
//!
//! Pure functions over in-memory data: the transfer fee table and the income
//! split suggestion. Both are invoked synchronously from the form layer and
//! have no side effects.

pub mod fees;
pub mod split;

pub use fees::{quote_transfer_fee, transfer_fee, FeeQuote, FeeRule};
pub use split::{income_split, suggested_split};
