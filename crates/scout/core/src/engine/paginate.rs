use crate::state::PageState;

/// One page of an ordered sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct PageSlice<'a, T> {
    /// Page state after clamping. Differs from the requested one when the
    /// requested page was past the end.
    pub page: PageState,
    pub total_pages: usize,
    pub total_items: usize,
    pub items: &'a [T],
}

impl<T> PageSlice<'_, T> {
    /// Returns true if the requested page number had to be pulled back.
    pub fn was_clamped(&self, requested: &PageState) -> bool {
        self.page.page_number != requested.page_number
    }
}

/// Slices `items` to the page window, clamping a stale page number.
pub fn paginate<'a, T>(items: &'a [T], page: &PageState) -> PageSlice<'a, T> {
    let total_items = items.len();
    let page = page.clamped(total_items);
    PageSlice {
        total_pages: page.total_pages(total_items),
        total_items,
        items: &items[page.window(total_items)],
        page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_lengths_follow_the_window() {
        let items: Vec<u32> = (0..25).collect();
        let page = PageState::new(1, 12);

        for number in 1..=3 {
            let slice = paginate(&items, &PageState::new(number, 12));
            let expected = 12.min(25 - (number - 1) * 12);
            assert_eq!(slice.items.len(), expected);
            assert_eq!(slice.total_pages, 3);
        }
        assert_eq!(paginate(&items, &page).items[0], 0);
    }

    #[test]
    fn empty_input_is_one_empty_page() {
        let items: Vec<u32> = Vec::new();
        let slice = paginate(&items, &PageState::new(4, 24));
        assert_eq!(slice.total_pages, 1);
        assert_eq!(slice.page.page_number, 1);
        assert!(slice.items.is_empty());
    }

    #[test]
    fn stale_page_is_clamped_to_last() {
        let items: Vec<u32> = (0..13).collect();
        let requested = PageState::new(7, 12);
        let slice = paginate(&items, &requested);
        assert!(slice.was_clamped(&requested));
        assert_eq!(slice.page.page_number, 2);
        assert_eq!(slice.items, &[12]);
    }
}
