//! Canonical store layout. Every value is overridable via the config file;
//! these are only the defaults a fresh deployment starts from.

pub const DEFAULT_STORE_SOURCE: &str = "./store";
pub const DEFAULT_USERS_COLLECTION: &str = "users";
pub const DEFAULT_IDENTITY_FIELD: &str = "email";
pub const DEFAULT_ROLE_FIELD: &str = "role";
pub const DEFAULT_POLICY_COLLECTION: &str = "config";
pub const DEFAULT_POLICY_DOCUMENT: &str = "admin";
pub const DEFAULT_ALLOWLIST_FIELD: &str = "emails";
