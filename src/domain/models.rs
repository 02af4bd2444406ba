use crate::domain::constants::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Closed role set. Anything else in a user document is a data-integrity
/// error, never silently coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Owner,
    Admin,
    Member,
}

impl Role {
    pub fn from_raw(raw: &str) -> Option<Role> {
        match raw.trim() {
            "owner" => Some(Role::Owner),
            "admin" => Some(Role::Admin),
            "member" => Some(Role::Member),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Owner => "owner",
            Role::Admin => "admin",
            Role::Member => "member",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    pub identity: String,
    pub role: Role,
}

/// Point-in-time projection of every user document. Not transactionally
/// consistent with the policy fetch; see `run_verification`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RoleSnapshot {
    pub records: Vec<UserRecord>,
}

/// Intended admin allowlist. `configured = false` means the policy document
/// does not exist yet, which is a representable state, not an error.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Policy {
    pub configured: bool,
    pub allowlist: BTreeSet<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationReport {
    pub owner_count: usize,
    pub owner_identity: Option<String>,
    pub designated_owner: String,
    pub owner_matches_designated: bool,
    pub policy_configured: bool,
    pub admin_count: usize,
    pub allowlist_count: usize,
    pub unexpected_admins: Vec<String>,
    pub missing_admins: Vec<String>,
    pub duplicate_identities: Vec<String>,
    pub policy_matches_admin_role_assignment: bool,
    pub secure: bool,
}

fn default_store_source() -> String {
    DEFAULT_STORE_SOURCE.to_string()
}

fn default_users_collection() -> String {
    DEFAULT_USERS_COLLECTION.to_string()
}

fn default_identity_field() -> String {
    DEFAULT_IDENTITY_FIELD.to_string()
}

fn default_role_field() -> String {
    DEFAULT_ROLE_FIELD.to_string()
}

fn default_policy_collection() -> String {
    DEFAULT_POLICY_COLLECTION.to_string()
}

fn default_policy_document() -> String {
    DEFAULT_POLICY_DOCUMENT.to_string()
}

fn default_allowlist_field() -> String {
    DEFAULT_ALLOWLIST_FIELD.to_string()
}

/// Explicit configuration for a verification run. Nothing here is derived
/// from the data being checked.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifierConfig {
    #[serde(default)]
    pub designated_owner: Option<String>,
    #[serde(default = "default_store_source")]
    pub store_source: String,
    #[serde(default = "default_users_collection")]
    pub users_collection: String,
    #[serde(default = "default_identity_field")]
    pub identity_field: String,
    #[serde(default = "default_role_field")]
    pub role_field: String,
    #[serde(default = "default_policy_collection")]
    pub policy_collection: String,
    #[serde(default = "default_policy_document")]
    pub policy_document: String,
    #[serde(default = "default_allowlist_field")]
    pub allowlist_field: String,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            designated_owner: None,
            store_source: default_store_source(),
            users_collection: default_users_collection(),
            identity_field: default_identity_field(),
            role_field: default_role_field(),
            policy_collection: default_policy_collection(),
            policy_document: default_policy_document(),
            allowlist_field: default_allowlist_field(),
        }
    }
}

#[derive(Serialize)]
pub struct CheckItem {
    pub name: String,
    pub status: String,
}

#[derive(Serialize)]
pub struct DoctorReport {
    pub overall: String,
    pub checks: Vec<CheckItem>,
}
