//! List teams for the team filter.

use anyhow::Result;
use clap::Parser;
use scout_runtime::Session;

use crate::render::OutputFormat;

/// List distinct teams in the collection
#[derive(Parser, Debug)]
pub struct Teams {
    #[arg(short, long, value_enum, default_value = "table")]
    format: OutputFormat,
}

impl Teams {
    pub async fn execute(self, session: &mut Session) -> Result<()> {
        session.refresh().await?;

        let teams = session.teams();
        match self.format {
            OutputFormat::Table => {
                for team in &teams {
                    println!("{team}");
                }
            }
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&teams)?),
        }
        Ok(())
    }
}
