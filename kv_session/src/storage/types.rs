use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The mutable attribute bag carried by a session.
///
/// `user_id` and `is_admin` are the fields the auth flows read; anything else
/// a deployment wants to stash rides in `extra` and round-trips untouched.
/// `is_admin` is tri-state on purpose: absent means "not an admin" without
/// claiming the flag was ever set.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct SessionData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
    #[serde(default, flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl SessionData {
    /// Admin gate value: an absent flag reads as false.
    pub fn admin(&self) -> bool {
        self.is_admin.unwrap_or(false)
    }
}

/// What a [`SessionStore`](super::SessionStore) persists per session id: the
/// data bag plus the current anti-forgery token, read and written as one unit
/// so a commit replaces the whole record.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct SessionRecord {
    #[serde(default)]
    pub data: SessionData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub csrf: Option<String>,
}
