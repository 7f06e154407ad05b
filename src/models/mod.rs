//! Core data models for CediTrack
//!
//! This module contains the data structures that represent the tracking
//! domain: accounts, money, and the ephemeral payloads produced by the entry
//! forms.

pub mod account;
pub mod ids;
pub mod money;
pub mod split;
pub mod transaction;

pub use account::{Account, AccountType, AccountValidationError};
pub use ids::{AccountId, UserId};
pub use money::{Money, MoneyParseError};
pub use split::IncomeSplit;
pub use transaction::{ExpenseRecord, IncomeRecord, NewAccount, TransferRequest};
