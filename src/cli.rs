//! CLI definitions and command routing.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::converge::{self, Mode, TrustRequest, DEFAULT_STOREPASS};
use crate::runner::ProcessRunner;

#[derive(Parser)]
#[command(name = "keytrust")]
#[command(about = "Idempotent installer for CA certificates in Java trust stores")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ensure a certificate is present in the Java trust store under an alias
    Ensure {
        /// Path to the public certificate file
        cert_file: PathBuf,

        /// Alias to store the certificate under
        #[arg(long)]
        alias: String,

        /// Identifier echoed back in the outcome (defaults to the alias)
        #[arg(long)]
        name: Option<String>,

        /// Trust store password
        #[arg(long, default_value = DEFAULT_STOREPASS)]
        storepass: String,

        /// Explicit Java installation root (skips discovery)
        #[arg(long)]
        java_home: Option<PathBuf>,

        /// Report what would change without touching the trust store
        #[arg(long)]
        dry_run: bool,

        /// Print the full outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Report what discovery finds: Java root, trust store, keytool
    Doctor {
        /// Explicit Java installation root (skips discovery)
        #[arg(long)]
        java_home: Option<PathBuf>,
    },
}

/// Run CLI and dispatch to handlers. Returns the process exit code.
pub fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ensure {
            cert_file,
            alias,
            name,
            storepass,
            java_home,
            dry_run,
            json,
        } => {
            let req = TrustRequest {
                name: name.unwrap_or_else(|| alias.clone()),
                cert_file,
                alias,
                storepass,
                java_home,
            };
            let mode = if dry_run { Mode::DryRun } else { Mode::Live };
            cmd_ensure(&req, mode, json)
        }
        Commands::Doctor { java_home } => cmd_doctor(java_home),
    }
}

fn cmd_ensure(req: &TrustRequest, mode: Mode, json: bool) -> Result<i32> {
    let outcome = converge::ensure_trusted(req, mode);
    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("{}", outcome.comment);
    }
    Ok(if outcome.is_failure() { 1 } else { 0 })
}

fn cmd_doctor(java_home: Option<PathBuf>) -> Result<i32> {
    let results = crate::doctor::run_checks(java_home.as_deref(), &ProcessRunner);
    let mut all_ok = true;
    for r in &results {
        let mark = if r.ok { "ok" } else { "!!" };
        println!("[{mark}] {}", r.message);
        all_ok &= r.ok;
    }
    Ok(if all_ok { 0 } else { 1 })
}
