//! Session context
//!
//! Holds the signed-in user explicitly instead of observing a global
//! authentication listener. The host refreshes the context after sign-in or
//! profile edits and invalidates it on sign-out; components that need the
//! user receive the context as an argument.

use serde::{Deserialize, Serialize};

use crate::models::UserId;

/// Profile of the signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UserProfile {
    /// Create a profile with a fresh id
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            display_name: display_name.into(),
            email: None,
        }
    }
}

/// Explicit session state passed to components that need the user
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    user: Option<UserProfile>,
}

impl SessionContext {
    /// Create an empty (signed-out) session
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session for a signed-in user
    pub fn signed_in(profile: UserProfile) -> Self {
        Self {
            user: Some(profile),
        }
    }

    /// Replace the profile after sign-in or a profile edit
    pub fn refresh(&mut self, profile: UserProfile) {
        self.user = Some(profile);
    }

    /// Clear the session on sign-out
    pub fn invalidate(&mut self) {
        self.user = None;
    }

    /// The signed-in user, if any
    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    /// The signed-in user's id, if any
    pub fn user_id(&self) -> Option<UserId> {
        self.user.as_ref().map(|u| u.id)
    }

    /// Whether a user is signed in
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}
