//! Account directory snapshot
//!
//! The host application supplies the list of account records; the core treats
//! it as a read-only snapshot at the time of each computation. The directory
//! is never written by this crate.

use std::path::Path;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Account, AccountId};

/// Read-only snapshot of the host application's accounts
#[derive(Debug, Clone, Default)]
pub struct AccountDirectory {
    accounts: Vec<Account>,
}

impl AccountDirectory {
    /// Create a directory from a list of accounts
    pub fn new(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }

    /// Parse a directory from a JSON array of accounts
    pub fn from_json(json: &str) -> TrackerResult<Self> {
        let accounts: Vec<Account> = serde_json::from_str(json)?;
        Ok(Self::new(accounts))
    }

    /// Load a directory snapshot from a JSON file
    pub fn load(path: impl AsRef<Path>) -> TrackerResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            TrackerError::Directory(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json(&json)
    }

    /// All accounts in the snapshot, active or not
    pub fn all(&self) -> &[Account] {
        &self.accounts
    }

    /// Look up an account by id
    pub fn get(&self, id: AccountId) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    /// Look up an account by id, requiring it to be active
    pub fn get_active(&self, id: AccountId) -> Option<&Account> {
        self.get(id).filter(|a| a.is_active)
    }

    /// Active accounts only
    pub fn active(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter().filter(|a| a.is_active)
    }

    /// Active accounts eligible as a transfer side, excluding one id
    ///
    /// Used to populate the destination select once a source is chosen (and
    /// vice versa): an account can never transfer to itself.
    pub fn transfer_candidates(&self, exclude: Option<AccountId>) -> Vec<&Account> {
        self.active()
            .filter(|a| Some(a.id) != exclude)
            .collect()
    }

    /// Look up an account by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
    }

    /// Resolve a CLI argument to an account, by id first, then by name
    pub fn resolve(&self, reference: &str) -> TrackerResult<&Account> {
        if let Ok(id) = reference.parse::<AccountId>() {
            if let Some(account) = self.get(id) {
                return Ok(account);
            }
        }
        self.get_by_name(reference)
            .ok_or_else(|| TrackerError::account_not_found(reference))
    }

    /// Number of accounts in the snapshot
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the snapshot is empty
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
