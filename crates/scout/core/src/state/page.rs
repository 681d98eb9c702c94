use core::ops::Range;

use crate::config::ViewConfig;

/// Page window over the filtered rows.
///
/// Invariant: `1 <= page_number <= total_pages(n)` once [`PageState::clamped`]
/// has been applied for the current filtered count `n`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageState {
    /// 1-based page index.
    pub page_number: usize,
    pub page_size: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            page_number: 1,
            page_size: ViewConfig::DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageState {
    pub fn new(page_number: usize, page_size: usize) -> Self {
        Self {
            page_number: page_number.max(1),
            page_size: page_size.max(1),
        }
    }

    /// `max(1, ceil(filtered_count / page_size))`.
    pub fn total_pages(&self, filtered_count: usize) -> usize {
        filtered_count.div_ceil(self.page_size.max(1)).max(1)
    }

    /// Same page size, page number pulled back into `[1, total_pages]`.
    pub fn clamped(&self, filtered_count: usize) -> Self {
        let total = self.total_pages(filtered_count);
        Self {
            page_number: self.page_number.clamp(1, total),
            page_size: self.page_size.max(1),
        }
    }

    /// First page, same size.
    pub fn first(&self) -> Self {
        Self {
            page_number: 1,
            page_size: self.page_size,
        }
    }

    /// Index range of this page within `filtered_count` rows.
    ///
    /// Assumes the page has been clamped; an out-of-range page yields an
    /// empty range rather than panicking.
    pub fn window(&self, filtered_count: usize) -> Range<usize> {
        let size = self.page_size.max(1);
        let start = self
            .page_number
            .saturating_sub(1)
            .saturating_mul(size)
            .min(filtered_count);
        let end = start.saturating_add(size).min(filtered_count);
        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_is_at_least_one() {
        let page = PageState::new(1, 12);
        assert_eq!(page.total_pages(0), 1);
        assert_eq!(page.total_pages(12), 1);
        assert_eq!(page.total_pages(13), 2);
        assert_eq!(page.total_pages(25), 3);
    }

    #[test]
    fn clamp_pulls_stale_page_back() {
        let page = PageState::new(9, 12);
        assert_eq!(page.clamped(25).page_number, 3);
        assert_eq!(page.clamped(0).page_number, 1);
        assert_eq!(PageState::new(2, 12).clamped(25).page_number, 2);
    }

    #[test]
    fn window_bounds() {
        assert_eq!(PageState::new(1, 12).window(25), 0..12);
        assert_eq!(PageState::new(3, 12).window(25), 24..25);
        assert_eq!(PageState::new(1, 12).window(0), 0..0);
        assert_eq!(PageState::new(5, 12).window(25), 25..25);
    }

    #[test]
    fn constructor_rejects_zero() {
        let page = PageState::new(0, 0);
        assert_eq!(page.page_number, 1);
        assert_eq!(page.page_size, 1);
    }
}
