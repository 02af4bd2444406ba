use crate::domain::models::{VerificationReport, VerifierConfig};
use crate::services::evaluator::evaluate;
use crate::services::policy::load_policy;
use crate::services::snapshot::build_snapshot;
use crate::store::{DocumentStore, StoreError};

/// Everything that can abort a verification run. All variants are fatal:
/// a partial security report is worse than an explicit failure.
#[derive(thiserror::Error, Debug)]
pub enum VerifyError {
    #[error("malformed policy document '{document_id}': allowlist is missing or not a list of identities")]
    MalformedPolicy { document_id: String },
    #[error("unknown role '{raw}' for {identity}")]
    UnknownRole { identity: String, raw: String },
    #[error("user document '{document_id}' has no role assignment")]
    MissingRole { document_id: String },
    #[error("user document '{document_id}' has no identity")]
    MissingIdentity { document_id: String },
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One verification run: load the policy, build the snapshot, evaluate.
///
/// The two reads are independent and NOT transactionally consistent: the
/// users collection can change between them, so the report may reflect a
/// state that never existed atomically in the store. Accepted trade-off —
/// this is a diagnostic tool, not a guard. No retries; the caller decides
/// whether to re-run.
pub fn run_verification(
    store: &dyn DocumentStore,
    cfg: &VerifierConfig,
    designated_owner: &str,
) -> Result<VerificationReport, VerifyError> {
    let policy = load_policy(store, cfg)?;
    let snapshot = build_snapshot(store, cfg)?;
    Ok(evaluate(&policy, &snapshot, designated_owner))
}
