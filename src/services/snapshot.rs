use crate::domain::models::{Role, RoleSnapshot, UserRecord, VerifierConfig};
use crate::services::policy::normalize_identity;
use crate::services::verify::VerifyError;
use crate::store::DocumentStore;

/// Lists every user document and projects it into `(identity, role)`.
///
/// The projection is strict: a missing identity, a missing role, or a role
/// outside the closed set aborts the whole run. A corrupt role assignment
/// silently dropped here could mask an elevation. Cross-record validation
/// (owner count, duplicate identities) belongs to the evaluator, not here.
pub fn build_snapshot(
    store: &dyn DocumentStore,
    cfg: &VerifierConfig,
) -> Result<RoleSnapshot, VerifyError> {
    let docs = store.list_documents(&cfg.users_collection)?;
    let mut records = Vec::with_capacity(docs.len());

    for doc in docs {
        let identity = doc
            .fields
            .get(&cfg.identity_field)
            .and_then(|v| v.as_str())
            .map(normalize_identity)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| VerifyError::MissingIdentity {
                document_id: doc.id.clone(),
            })?;

        let raw_role = doc
            .fields
            .get(&cfg.role_field)
            .and_then(|v| v.as_str())
            .ok_or_else(|| VerifyError::MissingRole {
                document_id: doc.id.clone(),
            })?;

        let role = Role::from_raw(raw_role).ok_or_else(|| VerifyError::UnknownRole {
            identity: identity.clone(),
            raw: raw_role.trim().to_string(),
        })?;

        records.push(UserRecord { identity, role });
    }

    Ok(RoleSnapshot { records })
}
