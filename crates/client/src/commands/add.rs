//! Add a player to the record store.

use anyhow::{Context, Result};
use clap::Parser;
use scout_core::{ExternalId, PlayerDraft};
use scout_runtime::Session;

/// Add a player
#[derive(Parser, Debug)]
pub struct Add {
    /// Upstream id used to look up live data
    #[arg(long, value_name = "ID")]
    external_id: u64,

    #[arg(long)]
    name: String,

    #[arg(long)]
    team: String,

    #[arg(long)]
    age: u32,

    /// Market value at the time of adding
    #[arg(long, value_name = "VALUE")]
    value: u64,
}

impl Add {
    pub async fn execute(self, session: &mut Session) -> Result<()> {
        session.refresh().await?;

        let draft = PlayerDraft {
            external_id: ExternalId(self.external_id),
            name: self.name,
            team: self.team,
            age: self.age,
            market_value: self.value,
        };
        let name = draft.name.trim().to_string();

        session
            .add_player(draft)
            .await
            .with_context(|| format!("Failed to add {name}"))?;

        tracing::info!("Added {} ({} players)", name, session.collection().len());
        println!("added {name}");
        Ok(())
    }
}
