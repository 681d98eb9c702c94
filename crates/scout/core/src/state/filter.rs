use crate::config::ViewConfig;

/// Closed interval `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClosedRange<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> ClosedRange<T> {
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Key the filtered rows are ordered by.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SortKey {
    /// Record id, i.e. the order records were added in.
    #[default]
    Insertion,
    Name,
    Age,
    Team,
    MarketValue,
    CreatedAt,
    /// Relative market value change between the stored record and its live snapshot.
    ValueIncrease,
}

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    /// Orients an ascending comparison result.
    pub fn apply(self, ordering: core::cmp::Ordering) -> core::cmp::Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Working filter configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterState {
    /// Case-insensitive substring matched against name and team.
    pub search_query: String,
    /// Empty or `"all"` means no restriction.
    pub team_filter: String,
    pub age_range: ClosedRange<u32>,
    pub market_value_range: ClosedRange<u64>,
    /// Transfer view: overrides every other filter when set.
    pub only_changed_team: bool,
    pub sort_key: SortKey,
    pub sort_direction: SortDirection,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            team_filter: String::new(),
            age_range: ClosedRange::new(ViewConfig::MIN_AGE, ViewConfig::MAX_AGE),
            market_value_range: ClosedRange::new(0, ViewConfig::MARKET_VALUE_SENTINEL),
            only_changed_team: false,
            sort_key: SortKey::default(),
            sort_direction: SortDirection::default(),
        }
    }
}

impl FilterState {
    /// Team the view is restricted to, if any.
    pub fn team_restriction(&self) -> Option<&str> {
        let team = self.team_filter.trim();
        if team.is_empty() || team.eq_ignore_ascii_case(ViewConfig::ALL_TEAMS) {
            None
        } else {
            Some(team)
        }
    }

    /// Returns true if the two states select the same rows, ignoring ordering.
    pub fn same_selection(&self, other: &Self) -> bool {
        self.search_query == other.search_query
            && self.team_filter == other.team_filter
            && self.age_range == other.age_range
            && self.market_value_range == other.market_value_range
            && self.only_changed_team == other.only_changed_team
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_key_string_forms() {
        assert_eq!(SortKey::ValueIncrease.as_ref(), "value_increase");
        assert_eq!("market_value".parse::<SortKey>(), Ok(SortKey::MarketValue));
        assert_eq!("Created_At".parse::<SortKey>(), Ok(SortKey::CreatedAt));
        assert!("salary".parse::<SortKey>().is_err());
        assert_eq!("desc".parse::<SortDirection>(), Ok(SortDirection::Desc));
    }

    #[test]
    fn team_restriction_treats_all_as_none() {
        let mut filter = FilterState::default();
        assert_eq!(filter.team_restriction(), None);
        filter.team_filter = "All".into();
        assert_eq!(filter.team_restriction(), None);
        filter.team_filter = " Red ".into();
        assert_eq!(filter.team_restriction(), Some("Red"));
    }

    #[test]
    fn default_ranges_cover_the_domain() {
        let filter = FilterState::default();
        assert!(filter.age_range.contains(15));
        assert!(filter.age_range.contains(50));
        assert!(!filter.age_range.contains(51));
        assert!(filter.market_value_range.contains(u64::MAX));
        assert_eq!(filter.sort_key, SortKey::Insertion);
        assert_eq!(filter.sort_direction, SortDirection::Desc);
    }
}
