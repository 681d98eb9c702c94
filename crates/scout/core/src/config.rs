/// View configuration constants and tunable defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewConfig {
    /// Page size used when a session starts.
    pub default_page_size: usize,
}

impl ViewConfig {
    // ===== record domain =====
    pub const MIN_AGE: u32 = 15;
    pub const MAX_AGE: u32 = 50;
    /// Upper bound of the default market value range. Acts as "no upper limit".
    pub const MARKET_VALUE_SENTINEL: u64 = u64::MAX;

    // ===== pagination =====
    /// Page sizes offered to the user.
    pub const PAGE_SIZE_OPTIONS: [usize; 4] = [12, 24, 48, 96];
    pub const DEFAULT_PAGE_SIZE: usize = 12;

    /// Value of the team filter that means "no restriction".
    pub const ALL_TEAMS: &'static str = "all";

    pub fn new() -> Self {
        Self {
            default_page_size: Self::DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(default_page_size: usize) -> Self {
        Self {
            default_page_size: default_page_size.max(1),
        }
    }

    /// Returns true if `page_size` is one of the sizes offered to the user.
    pub fn is_offered_page_size(page_size: usize) -> bool {
        Self::PAGE_SIZE_OPTIONS.contains(&page_size)
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self::new()
    }
}
