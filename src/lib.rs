//! CediTrack - personal finance tracker core
//!
//! This library provides the business-rule core of a personal-finance
//! tracking client: accounts across banks, mobile wallets, credit cards, and
//! cash; transfer entry with a provider/type-aware fee table; income entry
//! with a 75/15/10 split suggestion; and expense entry with dependent
//! category selects.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (accounts, money, submission payloads)
//! - `rules`: Pure business rules (transfer fees, income splits)
//! - `catalog`: Lookup tables backing the dependent selects
//! - `directory`: Read-only account directory snapshot
//! - `session`: Explicit session context for the signed-in user
//! - `forms`: Headless entry-form state machines
//! - `display`: Terminal output formatting
//! - `cli`: Command handlers for the binary
//!
//! Everything in `rules` and `forms` is synchronous and side-effect free;
//! persistence and authentication belong to the host application.
//!
//! # Example
//!
//! ```rust
//! use ceditrack::directory::AccountDirectory;
//! use ceditrack::forms::TransferForm;
//! use ceditrack::models::{Account, AccountType, Money};
//!
//! let directory = AccountDirectory::new(vec![
//!     Account::with_balance("Bank", AccountType::BankAccount, "Ecobank Ghana", Money::from_cedis(500)),
//!     Account::with_balance("MoMo", AccountType::MobileWallet, "MTN Mobile Money", Money::from_cedis(100)),
//! ]);
//!
//! let mut form = TransferForm::new(&directory);
//! form.set_from_account(directory.all()[0].id);
//! form.set_to_account(directory.all()[1].id);
//! form.set_amount_text("100");
//! assert_eq!(form.fee(), Money::from_pesewas(150)); // 1.5% wallet/bank
//! let request = form.submit().unwrap();
//! assert_eq!(request.total(), Money::from_pesewas(10150));
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod directory;
pub mod display;
pub mod error;
pub mod forms;
pub mod models;
pub mod rules;
pub mod session;

pub use error::{TrackerError, TrackerResult};
