//! Remove a player from the record store.

use anyhow::{Context, Result};
use clap::Parser;
use scout_core::RecordId;
use scout_runtime::Session;

/// Remove a player by record id
#[derive(Parser, Debug)]
pub struct Remove {
    #[arg(value_name = "RECORD_ID")]
    record_id: u64,
}

impl Remove {
    pub async fn execute(self, session: &mut Session) -> Result<()> {
        session.refresh().await?;

        let record_id = RecordId(self.record_id);
        session
            .remove_player(record_id)
            .await
            .with_context(|| format!("Failed to remove record {record_id}"))?;

        tracing::info!(
            "Removed record {} ({} players)",
            record_id,
            session.collection().len()
        );
        println!("removed {record_id}");
        Ok(())
    }
}
