use crate::*;

pub fn handle_audit_commands(
    cli: &Cli,
    cfg: &VerifierConfig,
    store: &dyn DocumentStore,
) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Verify { owner } => {
            let designated = owner
                .clone()
                .or_else(|| cfg.designated_owner.clone())
                .ok_or_else(|| {
                    anyhow::anyhow!(
                        "no designated owner configured; set `designated_owner` in the config file or pass --owner"
                    )
                })?;

            let report = run_verification(store, cfg, &designated)?;
            audit(
                "verify",
                serde_json::json!({
                    "secure": report.secure,
                    "owner_count": report.owner_count,
                    "unexpected_admins": report.unexpected_admins.len(),
                    "missing_admins": report.missing_admins.len(),
                }),
            );

            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: report.secure,
                        data: &report
                    })?
                );
            } else {
                println!("secure: {}", report.secure);
                println!("owner_count: {}", report.owner_count);
                if let Some(owner) = &report.owner_identity {
                    println!("owner: {}", owner);
                }
                println!("designated_owner: {}", report.designated_owner);
                println!("policy_configured: {}", report.policy_configured);
                println!(
                    "policy_match: {} (admins={} allowlist={})",
                    report.policy_matches_admin_role_assignment,
                    report.admin_count,
                    report.allowlist_count
                );
                for a in &report.unexpected_admins {
                    println!("unexpected_admin\t{}", a);
                }
                for a in &report.missing_admins {
                    println!("missing_admin\t{}", a);
                }
                for d in &report.duplicate_identities {
                    println!("duplicate_identity\t{}", d);
                }
            }
            if !report.secure {
                std::process::exit(1);
            }
        }
        Commands::Doctor => {
            let config_file = match &cli.config {
                Some(p) => p.clone(),
                None => config_path()?,
            };
            let report = run_doctor(cfg, store, &config_file);
            audit(
                "doctor",
                serde_json::json!({"overall": report.overall}),
            );
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: report.overall == "ok",
                        data: report
                    })?
                );
            } else {
                println!("overall: {}", report.overall);
                for c in report.checks {
                    println!("{}\t{}", c.name, c.status);
                }
            }
        }
        _ => return Ok(false),
    }

    Ok(true)
}
