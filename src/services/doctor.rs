use crate::domain::models::{CheckItem, DoctorReport, VerifierConfig};
use crate::store::DocumentStore;
use std::path::Path;

/// Readiness checks for a verification run: config present, owner
/// configured, store reachable, policy document in place. Diagnoses the
/// environment only; it draws no conclusion about the privilege state.
pub fn run_doctor(
    cfg: &VerifierConfig,
    store: &dyn DocumentStore,
    config_file: &Path,
) -> DoctorReport {
    let mut checks = vec![
        CheckItem {
            name: "config_file".to_string(),
            status: if config_file.exists() { "ok" } else { "missing" }.to_string(),
        },
        CheckItem {
            name: "designated_owner".to_string(),
            status: if cfg.designated_owner.is_some() {
                "ok"
            } else {
                "missing"
            }
            .to_string(),
        },
    ];

    checks.push(CheckItem {
        name: "users_collection".to_string(),
        status: match store.list_documents(&cfg.users_collection) {
            Ok(docs) if !docs.is_empty() => "ok",
            Ok(_) => "empty",
            Err(_) => "unreachable",
        }
        .to_string(),
    });

    checks.push(CheckItem {
        name: "policy_document".to_string(),
        status: match store.get_document(&cfg.policy_collection, &cfg.policy_document) {
            Ok(Some(_)) => "ok",
            Ok(None) => "missing",
            Err(_) => "unreachable",
        }
        .to_string(),
    });

    let overall = if checks.iter().all(|c| c.status == "ok") {
        "ok"
    } else {
        "needs_attention"
    }
    .to_string();

    DoctorReport { overall, checks }
}
