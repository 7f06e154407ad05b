//! Entry form state machines
//!
//! Headless counterparts of the application's entry modals. Each form owns
//! its input state exclusively, runs synchronously on the interaction thread,
//! validates before submission (no partial saves), and hands the validated
//! payload back to the caller. Persistence is the caller's concern.

pub mod account;
pub mod expense;
pub mod fields;
pub mod income;
pub mod transfer;

pub use account::AccountForm;
pub use expense::ExpenseForm;
pub use fields::AmountField;
pub use income::IncomeForm;
pub use transfer::TransferForm;
