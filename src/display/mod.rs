//! Terminal output formatting

pub mod account;
pub mod summary;

pub use account::{format_account_details, format_account_list};
pub use summary::{format_fee_quote, format_split, format_transfer_summary};
