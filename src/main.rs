// src/main.rs
use anyhow::{Result, Context};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use busroute::file::{snapshot_file_name, SnapshotFileHandler};
use busroute::input::command::{Command, SaveSnapshotCommand};
use busroute::{DataStore, Settings, StoreAction};

/// Replay a list of store actions into a fresh session and print the result.
#[derive(Debug, Parser)]
#[command(name = "busroute", version, about)]
struct Cli {
    /// JSON file holding an array of actions, e.g. `[{"type": "set_selected_cluster", "value": 2}]`
    actions: PathBuf,

    /// Settings file (toml, json, yaml or ron)
    #[arg(long, env = "BUSROUTE_CONFIG")]
    config: Option<PathBuf>,

    /// Write a snapshot of the final state
    #[arg(long)]
    snapshot: bool,

    /// Directory for snapshots, overrides the settings value
    #[arg(long)]
    snapshot_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(dir) = cli.snapshot_dir {
        settings.snapshot_dir = dir;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let content = fs::read_to_string(&cli.actions)
        .with_context(|| format!("Failed to read actions from {}", cli.actions.display()))?;
    let actions: Vec<StoreAction> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse actions in {}", cli.actions.display()))?;

    let mut store = DataStore::new();
    store.subscribe(|field, state| {
        info!(field = %field, step = state.side_panel_step, cluster = state.selected_cluster, "state changed");
    });

    let count = actions.len();
    for action in actions {
        store.dispatch(action);
    }
    info!(count, "applied actions");

    println!("{}", SnapshotFileHandler::new().to_ron(&store.snapshot())?);

    if cli.snapshot {
        let path = settings.snapshot_dir.join(snapshot_file_name(store.session_id()));
        SaveSnapshotCommand(path.clone()).execute(&mut store)?;
        println!("Snapshot written to {}", path.display());
    }

    Ok(())
}
