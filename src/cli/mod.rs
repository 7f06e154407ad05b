//! CLI command handlers
//!
//! Bridges clap argument parsing with the forms layer. The CLI stands in for
//! the host application: it loads the account directory snapshot, drives the
//! forms, and prints the validated payloads instead of persisting them.

pub mod account;
pub mod expense;
pub mod income;
pub mod transfer;

pub use account::{handle_account_command, AccountCommands};
pub use expense::{handle_expense_command, ExpenseArgs};
pub use income::{handle_income_command, handle_split_command, IncomeArgs};
pub use transfer::{handle_fee_command, handle_transfer_command, FeeArgs, TransferArgs};
