use clap::Parser;
use roleaudit::*;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = load_config(cli.config.as_deref())?;

    let source = cli
        .store
        .clone()
        .unwrap_or_else(|| cfg.store_source.clone());
    let store = resolve_store(&source)?;

    if handle_audit_commands(&cli, &cfg, store.as_ref())? {
        return Ok(());
    }
    if handle_inspect_commands(&cli, &cfg, store.as_ref())? {
        return Ok(());
    }

    unreachable!("command dispatch is exhaustive")
}
