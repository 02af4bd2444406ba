use crate::domain::models::Role;
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "roleaudit",
    version,
    about = "Role and policy consistency audit for a document store"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Store source (directory or http(s) base url); overrides the config file"
    )]
    pub store: Option<String>,
    #[arg(long, global = true, help = "Path to the verifier config file")]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Verify {
        #[arg(long, help = "Designated owner identity; overrides the config file")]
        owner: Option<String>,
    },
    Policy {
        #[command(subcommand)]
        command: PolicyCommands,
    },
    Snapshot {
        #[command(subcommand)]
        command: SnapshotCommands,
    },
    Doctor,
}

#[derive(Subcommand, Debug)]
pub enum PolicyCommands {
    Show,
}

#[derive(Subcommand, Debug)]
pub enum SnapshotCommands {
    List {
        #[arg(long, value_enum, help = "Only show records with this role")]
        role: Option<RoleArg>,
    },
}

#[derive(Clone, Debug, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RoleArg {
    Owner,
    Admin,
    Member,
}

impl RoleArg {
    pub fn as_role(&self) -> Role {
        match self {
            RoleArg::Owner => Role::Owner,
            RoleArg::Admin => Role::Admin,
            RoleArg::Member => Role::Member,
        }
    }
}
