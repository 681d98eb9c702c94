//! Show one page of the player view.

use anyhow::Result;
use clap::Parser;
use scout_core::{
    ClosedRange, FilterState, SortDirection, SortKey, ViewAction, ViewConfig, parse_range_edge,
};
use scout_runtime::Session;

use crate::render::{self, OutputFormat};

/// Show one page of players with live changes highlighted
#[derive(Parser, Debug)]
pub struct List {
    /// Case-insensitive search in name and team
    #[arg(short, long)]
    query: Option<String>,

    /// Restrict to one team ("all" for every team)
    #[arg(short, long)]
    team: Option<String>,

    /// Minimum age; unparsable values are ignored
    #[arg(long, value_name = "AGE", allow_hyphen_values = true)]
    min_age: Option<String>,

    #[arg(long, value_name = "AGE", allow_hyphen_values = true)]
    max_age: Option<String>,

    /// Minimum market value; `_` and `,` separators are accepted
    #[arg(long, value_name = "VALUE", allow_hyphen_values = true)]
    min_value: Option<String>,

    /// Maximum market value; `inf` for no limit
    #[arg(long, value_name = "VALUE", allow_hyphen_values = true)]
    max_value: Option<String>,

    /// Only players whose live team differs from the stored one
    #[arg(long)]
    transfers: bool,

    #[arg(short, long, default_value_t = SortKey::Insertion)]
    sort: SortKey,

    #[arg(short, long, default_value_t = SortDirection::Desc)]
    direction: SortDirection,

    #[arg(short, long, default_value_t = 1)]
    page: usize,

    /// Rows per page (default: SCOUT_PAGE_SIZE or 12)
    #[arg(long)]
    page_size: Option<usize>,

    /// Skip the live snapshot lookup
    #[arg(long)]
    offline: bool,

    #[arg(short, long, value_enum, default_value = "table")]
    format: OutputFormat,
}

impl List {
    pub async fn execute(self, session: &mut Session) -> Result<()> {
        session.refresh().await?;

        if !self.offline
            && let Err(err) = session.fetch_snapshots().await
        {
            tracing::warn!("Showing stored values only: {}", err);
        }

        if let Some(size) = self.page_size
            && !ViewConfig::is_offered_page_size(size)
        {
            tracing::info!(
                "Page size {} is not one of {:?}",
                size,
                ViewConfig::PAGE_SIZE_OPTIONS
            );
        }

        let actions = self.actions(&session.view_state().filter);
        let rejected: usize = actions
            .into_iter()
            .map(|action| session.dispatch(action).len())
            .sum();
        if rejected > 0 {
            tracing::warn!("{} filter input(s) ignored", rejected);
        }

        let view = session.view();
        match self.format {
            OutputFormat::Table => print!("{}", render::table(&view)),
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&render::json(&view))?)
            }
        }
        Ok(())
    }

    /// View edits for these flags, in an order where the page request is
    /// applied after every edit that resets it.
    fn actions(&self, current: &FilterState) -> Vec<ViewAction> {
        let mut actions = Vec::new();

        if let Some(query) = &self.query {
            actions.push(ViewAction::SetSearchQuery(query.clone()));
        }
        if let Some(team) = &self.team {
            actions.push(ViewAction::SetTeamFilter(team.clone()));
        }
        if let Some((min, max)) =
            range_edges(&self.min_age, &self.max_age, age_bounds(current.age_range))
        {
            actions.push(ViewAction::SetAgeRange { min, max });
        }
        if let Some((min, max)) =
            range_edges(
                &self.min_value,
                &self.max_value,
                value_bounds(current.market_value_range),
            )
        {
            actions.push(ViewAction::SetMarketValueRange { min, max });
        }
        actions.push(ViewAction::SetOnlyChangedTeam(self.transfers));
        actions.push(ViewAction::SetSortKey(self.sort));
        actions.push(ViewAction::SetSortDirection(self.direction));
        if let Some(size) = self.page_size {
            actions.push(ViewAction::SetPageSize(size));
        }
        actions.push(ViewAction::SetPage(self.page));

        actions
    }
}

/// Edges for a range edit, or `None` when neither flag was given.
///
/// A missing edge keeps the current bound.
fn range_edges(
    min: &Option<String>,
    max: &Option<String>,
    current: (f64, f64),
) -> Option<(f64, f64)> {
    if min.is_none() && max.is_none() {
        return None;
    }
    let edge = |text: &Option<String>, fallback: f64| {
        text.as_deref().map_or(fallback, parse_range_edge)
    };
    Some((edge(min, current.0), edge(max, current.1)))
}

fn age_bounds(range: ClosedRange<u32>) -> (f64, f64) {
    (f64::from(range.min), f64::from(range.max))
}

/// The sentinel upper bound maps back to an open edge.
fn value_bounds(range: ClosedRange<u64>) -> (f64, f64) {
    let max = if range.max == ViewConfig::MARKET_VALUE_SENTINEL {
        f64::INFINITY
    } else {
        range.max as f64
    };
    (range.min as f64, max)
}
