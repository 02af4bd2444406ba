use crate::domain::models::{Policy, Role, RoleSnapshot, VerificationReport};
use crate::services::policy::normalize_identity;
use std::collections::BTreeSet;

/// Evaluates the privilege invariants over one policy + snapshot pair.
///
/// Pure and total: no I/O, deterministic, order-independent over the input
/// records, and it never short-circuits — every report field is computed
/// even once the state is known to be insecure, so a failing report is a
/// complete diagnosis.
pub fn evaluate(
    policy: &Policy,
    snapshot: &RoleSnapshot,
    designated_owner: &str,
) -> VerificationReport {
    let mut owners: Vec<String> = Vec::new();
    let mut admins: BTreeSet<String> = BTreeSet::new();
    let mut admin_count = 0usize;
    let mut seen: BTreeSet<String> = BTreeSet::new();
    let mut duplicates: BTreeSet<String> = BTreeSet::new();

    for record in &snapshot.records {
        if !seen.insert(record.identity.clone()) {
            duplicates.insert(record.identity.clone());
        }
        match record.role {
            Role::Owner => owners.push(record.identity.clone()),
            Role::Admin => {
                admin_count += 1;
                admins.insert(record.identity.clone());
            }
            Role::Member => {}
        }
    }

    let owner_count = owners.len();
    let owner_identity = if owner_count == 1 {
        Some(owners[0].clone())
    } else {
        None
    };

    let designated = normalize_identity(designated_owner);
    let owner_matches_designated = owner_identity.as_deref() == Some(designated.as_str());

    let unexpected_admins: Vec<String> = admins.difference(&policy.allowlist).cloned().collect();
    let missing_admins: Vec<String> = policy.allowlist.difference(&admins).cloned().collect();
    let policy_matches_admin_role_assignment =
        unexpected_admins.is_empty() && missing_admins.is_empty();

    // Redundant with the set comparison above, kept as a cross-check:
    // duplicate-identity corruption collapses in set semantics but not in
    // the record count.
    let counts_agree = admin_count == policy.allowlist.len();

    let secure = owner_count == 1
        && owner_matches_designated
        && policy_matches_admin_role_assignment
        && counts_agree
        && duplicates.is_empty();

    VerificationReport {
        owner_count,
        owner_identity,
        designated_owner: designated,
        owner_matches_designated,
        policy_configured: policy.configured,
        admin_count,
        allowlist_count: policy.allowlist.len(),
        unexpected_admins,
        missing_admins,
        duplicate_identities: duplicates.into_iter().collect(),
        policy_matches_admin_role_assignment,
        secure,
    }
}
