use chrono::{DateTime, NaiveDateTime};

use crate::config::ViewConfig;
use crate::error::DraftError;

/// Primary identity of a stored record, assigned by the record store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct RecordId(pub u64);

impl core::fmt::Display for RecordId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of the athlete in the upstream sports catalog.
///
/// Used to look up live snapshots. Unrelated to [`RecordId`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ExternalId(pub u64);

impl core::fmt::Display for ExternalId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored player.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerRecord {
    pub record_id: RecordId,
    pub external_id: ExternalId,
    pub name: String,
    pub team: String,
    pub age: u32,
    pub market_value: u64,
    /// Insertion timestamp as stored (RFC 3339), if the store provided one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub created_at: Option<String>,
}

impl PlayerRecord {
    /// Insertion time in epoch milliseconds; 0 when absent or unparseable.
    pub fn created_at_millis(&self) -> i64 {
        self.created_at
            .as_deref()
            .and_then(parse_timestamp_millis)
            .unwrap_or(0)
    }
}

/// Accepts RFC 3339 as well as the space-separated form databases often emit.
fn parse_timestamp_millis(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.timestamp_millis());
    }
    if let Ok(parsed) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%#z") {
        return Some(parsed.timestamp_millis());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc().timestamp_millis())
}

/// Fields submitted when adding a player. The store assigns the record id.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerDraft {
    pub external_id: ExternalId,
    pub name: String,
    pub team: String,
    pub age: u32,
    pub market_value: u64,
}

impl PlayerDraft {
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.name.trim().is_empty() {
            return Err(DraftError::EmptyName);
        }
        if self.team.trim().is_empty() {
            return Err(DraftError::EmptyTeam);
        }
        if !(ViewConfig::MIN_AGE..=ViewConfig::MAX_AGE).contains(&self.age) {
            return Err(DraftError::AgeOutOfDomain {
                age: self.age,
                min: ViewConfig::MIN_AGE,
                max: ViewConfig::MAX_AGE,
            });
        }
        Ok(())
    }

    /// Materializes the draft as a stored record.
    pub fn into_record(self, record_id: RecordId, created_at: Option<String>) -> PlayerRecord {
        PlayerRecord {
            record_id,
            external_id: self.external_id,
            name: self.name.trim().to_string(),
            team: self.team.trim().to_string(),
            age: self.age,
            market_value: self.market_value,
            created_at,
        }
    }
}
