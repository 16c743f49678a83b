//! Developer/debug surface for the Squadlink onboarding gate.
//!
//! Inspects and mutates the persisted completion flag against a device store
//! file. `reset` exists for development only; production code never clears
//! the flag.

mod bootstrap_helpers;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use squad_onboarding::OnboardingGate;
use squad_storage::{default_store_path, FileKeyValueStore};

#[derive(Debug, Parser)]
#[command(
    name = "squad-cli",
    about = "Inspect and mutate the Squadlink onboarding gate"
)]
struct Cli {
    /// Device store file. Defaults to .squadlink/device-store.json under the
    /// working directory.
    #[arg(long, env = "SQUADLINK_STORE_PATH")]
    store_path: Option<PathBuf>,

    #[command(subcommand)]
    command: GateCommand,
}

#[derive(Debug, Subcommand, Clone, Copy, PartialEq, Eq)]
enum GateCommand {
    /// Print the gate state: completed or not-completed.
    Status,
    /// Persist the completion marker, as finishing or skipping onboarding would.
    Complete,
    /// Clear the flag back to its fresh-install state.
    Reset,
}

async fn run(cli: Cli) -> Result<()> {
    let store_path = match cli.store_path {
        Some(path) => path,
        None => default_store_path()?,
    };
    let store = Arc::new(FileKeyValueStore::new(store_path));
    let gate = OnboardingGate::new(store);

    match cli.command {
        GateCommand::Status => {
            let label = if gate.status().await {
                "completed"
            } else {
                "not-completed"
            };
            println!("{label}");
        }
        GateCommand::Complete => {
            gate.complete().await?;
            println!("onboarding marked complete");
        }
        GateCommand::Reset => {
            gate.reset().await?;
            println!("onboarding flag cleared");
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    bootstrap_helpers::init_tracing();
    let cli = Cli::parse();
    run(cli).await
}
