use crate::domain::models::{Policy, VerifierConfig};
use crate::services::verify::VerifyError;
use crate::store::DocumentStore;
use std::collections::BTreeSet;

/// Identities are compared case-insensitively (emails in the current
/// deployment).
pub fn normalize_identity(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Fetches the allowlist document and normalizes it into a `Policy`.
///
/// An absent document is "not yet configured": an empty policy, not an
/// error. A document that exists but whose allowlist field is missing, not a
/// list, or contains non-string or blank entries is `MalformedPolicy` —
/// configuration garbage must not be silently dropped.
pub fn load_policy(store: &dyn DocumentStore, cfg: &VerifierConfig) -> Result<Policy, VerifyError> {
    let Some(doc) = store.get_document(&cfg.policy_collection, &cfg.policy_document)? else {
        return Ok(Policy {
            configured: false,
            allowlist: BTreeSet::new(),
        });
    };

    let entries = doc
        .fields
        .get(&cfg.allowlist_field)
        .and_then(|v| v.as_array())
        .ok_or_else(|| VerifyError::MalformedPolicy {
            document_id: doc.id.clone(),
        })?;

    let mut allowlist = BTreeSet::new();
    for entry in entries {
        let identity = entry
            .as_str()
            .map(normalize_identity)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| VerifyError::MalformedPolicy {
                document_id: doc.id.clone(),
            })?;
        allowlist.insert(identity);
    }

    Ok(Policy {
        configured: true,
        allowlist,
    })
}
