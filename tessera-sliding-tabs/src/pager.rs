//! Paged content the tab strip is bound to.
use tracing::debug;

use crate::px::Px;

/// An ordered collection of titled pages with a current page.
///
/// The page count is assumed fixed for the lifetime of one binding; rebind
/// with [`SlidingTabLayout::set_view_pager`](crate::layout::SlidingTabLayout::set_view_pager)
/// when it changes.
pub trait PageSource {
    /// Number of pages.
    fn page_count(&self) -> usize;

    /// Title of the page at `index`.
    fn page_title(&self, index: usize) -> String;

    /// Zero-based index of the current page.
    fn current_page(&self) -> usize;

    /// Navigates to the page at `index`.
    fn set_current_page(&mut self, index: usize);
}

/// Scroll phase reported by the pager.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PageScrollState {
    /// Fully settled on a page.
    #[default]
    Idle,
    /// Being dragged by the user.
    Dragging,
    /// Animating to a final position after a drag or programmatic change.
    Settling,
}

/// Receiver of pager notifications.
///
/// The host forwards every pager event, on the UI thread and in order.
pub trait PageChangeListener {
    /// Continuous scroll tick: `position` is the page under the left edge of
    /// the viewport and `position_offset` the fraction in `[0, 1)` scrolled
    /// toward `position + 1`.
    fn on_page_scrolled(&mut self, position: usize, position_offset: f32, position_offset_pixels: Px);

    /// The pager settled on a newly selected page.
    fn on_page_selected(&mut self, position: usize);

    /// The pager's scroll phase changed.
    fn on_page_scroll_state_changed(&mut self, state: PageScrollState);
}

/// A fixed list of titled pages.
///
/// # Examples
///
/// ```
/// use tessera_sliding_tabs::pager::{PageSource, StaticPages};
///
/// let mut pages = StaticPages::new(["Green", "Red", "Blue"]);
/// pages.set_current_page(7);
/// assert_eq!(pages.current_page(), 2);
/// assert_eq!(pages.page_title(1), "Red");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticPages {
    titles: Vec<String>,
    current: usize,
}

impl StaticPages {
    /// Creates pages from their titles, starting on the first page.
    pub fn new<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            titles: titles.into_iter().map(Into::into).collect(),
            current: 0,
        }
    }

    /// Starts on `page` instead of the first page.
    pub fn with_current_page(mut self, page: usize) -> Self {
        self.set_current_page(page);
        self
    }
}

impl PageSource for StaticPages {
    fn page_count(&self) -> usize {
        self.titles.len()
    }

    fn page_title(&self, index: usize) -> String {
        self.titles.get(index).cloned().unwrap_or_default()
    }

    fn current_page(&self) -> usize {
        self.current
    }

    fn set_current_page(&mut self, index: usize) {
        let index = index.min(self.titles.len().saturating_sub(1));
        if index != self.current {
            debug!(from = self.current, to = index, "pager navigating");
        }
        self.current = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_page_is_clamped() {
        let mut pages = StaticPages::new(["a", "b"]);
        assert_eq!(pages.current_page(), 0);
        pages.set_current_page(1);
        assert_eq!(pages.current_page(), 1);
        pages.set_current_page(5);
        assert_eq!(pages.current_page(), 1);
    }

    #[test]
    fn empty_pages_stay_on_zero() {
        let mut pages = StaticPages::new(Vec::<String>::new());
        pages.set_current_page(3);
        assert_eq!(pages.page_count(), 0);
        assert_eq!(pages.current_page(), 0);
        assert_eq!(pages.page_title(0), "");
    }

    #[test]
    fn with_current_page_starts_elsewhere() {
        let pages = StaticPages::new(["a", "b", "c"]).with_current_page(2);
        assert_eq!(pages.current_page(), 2);
        assert_eq!(pages.page_title(2), "c");
    }
}
