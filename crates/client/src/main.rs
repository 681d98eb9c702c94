//! Scout command-line client.
//!
//! Composition root: resolves configuration, installs logging, wires the
//! JSON file adapters into a session and hands it to the chosen command.
//!
//! ```bash
//! scout add --external-id 10 --name Ali --team Red --age 20 --value 1000000
//! scout list --transfers --snapshot-file live.json
//! scout list --sort value_increase --max-age 25 --format json
//! ```

mod commands;
mod config;
mod dirs;
mod logging;
mod render;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use commands::{Add, List, Remove, Teams};
use config::ClientConfig;
use scout_runtime::{
    FileRecordStore, FileSnapshotCache, InMemorySnapshotCache, Session, SnapshotService,
};

/// Player scouting view over a local record store
#[derive(Parser)]
#[command(name = "scout")]
#[command(about = "Browse stored players against live data", long_about = None)]
#[command(version)]
struct Cli {
    /// Record store file (overrides SCOUT_DATA_FILE)
    #[arg(long, global = true, value_name = "FILE")]
    data_file: Option<PathBuf>,

    /// Live snapshot file (overrides SCOUT_SNAPSHOT_FILE)
    #[arg(long, global = true, value_name = "FILE")]
    snapshot_file: Option<PathBuf>,

    /// Directory for scout.log (overrides SCOUT_LOG_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    List(List),
    Add(Add),
    Remove(Remove),
    Teams(Teams),
}

impl Cli {
    fn apply_overrides(&self, config: &mut ClientConfig) {
        if let Some(path) = &self.data_file {
            config.records_file = path.clone();
        }
        if let Some(path) = &self.snapshot_file {
            config.snapshot_file = Some(path.clone());
        }
        if let Some(dir) = &self.log_dir {
            config.log_dir = Some(dir.clone());
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let mut config = ClientConfig::from_env();
    cli.apply_overrides(&mut config);

    let _guard = logging::setup_logging(config.log_dir.as_deref())?;
    tracing::debug!("Records: {}", config.records_file.display());

    let mut session = build_session(&config)?;

    match cli.command {
        Command::List(cmd) => cmd.execute(&mut session).await,
        Command::Add(cmd) => cmd.execute(&mut session).await,
        Command::Remove(cmd) => cmd.execute(&mut session).await,
        Command::Teams(cmd) => cmd.execute(&mut session).await,
    }
}

fn build_session(config: &ClientConfig) -> Result<Session> {
    let snapshots: Arc<dyn SnapshotService> = match &config.snapshot_file {
        Some(path) => {
            tracing::debug!("Live snapshots: {}", path.display());
            Arc::new(FileSnapshotCache::new(path))
        }
        None => Arc::new(InMemorySnapshotCache::new()),
    };

    let session = Session::builder()
        .config(config.session_config())
        .record_store(FileRecordStore::new(&config.records_file))
        .shared_snapshot_service(snapshots)
        .build()?;
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scout_core::{ExternalId, PlayerDraft, ViewAction};
    use tempfile::TempDir;

    #[tokio::test]
    async fn file_backed_session_shows_live_transfers() {
        let dir = TempDir::new().expect("temp dir");
        let snapshot_file = dir.path().join("live.json");
        std::fs::write(
            &snapshot_file,
            r#"{"10":{"team":"Blue","age":21,"market_value":1500000}}"#,
        )
        .expect("write fixture");
        let config = ClientConfig {
            records_file: dir.path().join("players.json"),
            snapshot_file: Some(snapshot_file),
            ..ClientConfig::default()
        };

        let mut session = build_session(&config).expect("session should build");
        session.refresh().await.expect("initial load");
        session
            .add_player(PlayerDraft {
                external_id: ExternalId(10),
                name: "Ali".into(),
                team: "Red".into(),
                age: 20,
                market_value: 1_000_000,
            })
            .await
            .expect("create succeeds");
        session.fetch_snapshots().await.expect("lookup");
        session.dispatch(ViewAction::SetOnlyChangedTeam(true));

        let view = session.view();
        assert_eq!(view.filtered_count, 1);
        assert_eq!(view.rows[0].live.map(|live| live.team.as_str()), Some("Blue"));
        assert!(config.records_file.exists());
    }

    #[test]
    fn no_snapshot_file_uses_empty_cache() {
        let dir = TempDir::new().expect("temp dir");
        let config = ClientConfig {
            records_file: dir.path().join("players.json"),
            ..ClientConfig::default()
        };

        assert!(build_session(&config).is_ok());
    }
}
