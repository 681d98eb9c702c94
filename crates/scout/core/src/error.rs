//! Common error infrastructure for scout-core.
//!
//! Two families of errors live here:
//!
//! - [`FilterInputError`]: a view state edit that could not be applied. These
//!   never escape as `Err`; the reducer keeps the prior value and reports the
//!   rejected edit next to the new state.
//! - [`DraftError`]: a player draft that must not reach the record store.

/// Severity level of an error, used for logging and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The prior value was kept and the view keeps working.
    ///
    /// Examples: non-numeric range edge, zero page size
    Recoverable,

    /// Invalid input that should be rejected without retry.
    ///
    /// Examples: empty player name, age outside the record domain
    Validation,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all scout-core errors.
pub trait ScoutError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str;
}

/// Which numeric range of the filter an edit targeted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum RangeField {
    Age,
    MarketValue,
}

/// Lower or upper edge of a closed range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum RangeEdge {
    Min,
    Max,
}

/// A view state edit that was ignored.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FilterInputError {
    #[error("{field} range {edge} is not a number; keeping the previous bound")]
    NonNumericEdge { field: RangeField, edge: RangeEdge },

    #[error("page size must be at least 1; keeping the previous page size")]
    ZeroPageSize,

    #[error("page number must be at least 1; keeping the previous page")]
    ZeroPageNumber,
}

impl ScoutError for FilterInputError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NonNumericEdge { .. } => "FILTER_NON_NUMERIC_EDGE",
            Self::ZeroPageSize => "FILTER_ZERO_PAGE_SIZE",
            Self::ZeroPageNumber => "FILTER_ZERO_PAGE_NUMBER",
        }
    }
}

/// A player draft rejected before it reaches the record store.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DraftError {
    #[error("player name must not be empty")]
    EmptyName,

    #[error("team must not be empty")]
    EmptyTeam,

    #[error("age {age} is outside {min}..={max}")]
    AgeOutOfDomain { age: u32, min: u32, max: u32 },
}

impl ScoutError for DraftError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyName => "DRAFT_EMPTY_NAME",
            Self::EmptyTeam => "DRAFT_EMPTY_TEAM",
            Self::AgeOutOfDomain { .. } => "DRAFT_AGE_OUT_OF_DOMAIN",
        }
    }
}
