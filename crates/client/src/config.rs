//! Client configuration.
use std::env;
use std::path::PathBuf;

use scout_core::ViewConfig;
use scout_runtime::SessionConfig;

use crate::dirs;

/// Settings resolved from the environment, then overridden by CLI flags.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub records_file: PathBuf,
    /// Live snapshot file. Without one every row shows stored values only.
    pub snapshot_file: Option<PathBuf>,
    pub page_size: usize,
    /// Enables the file log layer.
    pub log_dir: Option<PathBuf>,
    pub event_capacity: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            records_file: dirs::default_records_file(),
            snapshot_file: None,
            page_size: ViewConfig::DEFAULT_PAGE_SIZE,
            log_dir: None,
            event_capacity: SessionConfig::default().event_capacity,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SCOUT_DATA_FILE` - record store JSON file (default: platform data dir)
    /// - `SCOUT_SNAPSHOT_FILE` - live snapshot JSON file
    /// - `SCOUT_PAGE_SIZE` - default page size (default: 12)
    /// - `SCOUT_LOG_DIR` - directory for `scout.log`
    /// - `SCOUT_EVENT_CAPACITY` - event channel capacity (default: 64)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(path) = read_env::<PathBuf>("SCOUT_DATA_FILE") {
            config.records_file = path;
        }
        config.snapshot_file = read_env::<PathBuf>("SCOUT_SNAPSHOT_FILE");
        if let Some(size) = read_env::<usize>("SCOUT_PAGE_SIZE") {
            config.page_size = size.max(1);
        }
        config.log_dir = read_env::<PathBuf>("SCOUT_LOG_DIR");
        if let Some(capacity) = read_env::<usize>("SCOUT_EVENT_CAPACITY") {
            config.event_capacity = capacity.max(1);
        }

        config
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            view: ViewConfig::with_page_size(self.page_size),
            event_capacity: self.event_capacity,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok().filter(|value| !value.is_empty())?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_config_carries_page_size() {
        let config = ClientConfig {
            page_size: 24,
            event_capacity: 8,
            ..ClientConfig::default()
        };

        let session = config.session_config();
        assert_eq!(session.view.default_page_size, 24);
        assert_eq!(session.event_capacity, 8);
    }

    #[test]
    fn defaults_point_at_platform_data_dir() {
        let config = ClientConfig::default();
        assert!(config.records_file.ends_with("players.json"));
        assert!(config.snapshot_file.is_none());
        assert_eq!(config.page_size, ViewConfig::DEFAULT_PAGE_SIZE);
    }
}
