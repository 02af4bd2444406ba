use crate::*;

pub fn handle_inspect_commands(
    cli: &Cli,
    cfg: &VerifierConfig,
    store: &dyn DocumentStore,
) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Policy { command } => match command {
            PolicyCommands::Show => {
                let policy = load_policy(store, cfg)?;
                print_one(cli.json, &policy, |p| {
                    format!(
                        "configured={} allowlist=[{}]",
                        p.configured,
                        p.allowlist
                            .iter()
                            .map(|s| s.as_str())
                            .collect::<Vec<_>>()
                            .join(", ")
                    )
                })?;
            }
        },
        Commands::Snapshot { command } => match command {
            SnapshotCommands::List { role } => {
                let snapshot = build_snapshot(store, cfg)?;
                let records: Vec<UserRecord> = snapshot
                    .records
                    .into_iter()
                    .filter(|r| {
                        role.as_ref()
                            .map(|want| r.role == want.as_role())
                            .unwrap_or(true)
                    })
                    .collect();
                print_out(cli.json, &records, |r| {
                    format!("{}\t{}", r.identity, r.role.as_str())
                })?;
            }
        },
        _ => return Ok(false),
    }

    Ok(true)
}
