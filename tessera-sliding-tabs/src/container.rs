//! The row of tab slots hosting the tab labels.
//!
//! [`TabContainer`] is what the strip needs from the host view system: an
//! ordered list of rectangular slots, selection flags, a horizontal scroll
//! command and an invalidation request. [`TabRow`] is a headless
//! implementation that lays slots out left to right.
use std::{fmt, sync::Arc};

use tracing::trace;

use crate::{color::Color, px::Px};

/// Horizontal extent of one slot, in strip content coordinates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotBounds {
    /// Left edge.
    pub left: Px,
    /// Width.
    pub width: Px,
}

impl SlotBounds {
    /// Creates bounds from a left edge and a width.
    pub const fn new(left: Px, width: Px) -> Self {
        Self { left, width }
    }

    /// Right edge, exclusive.
    pub fn right(&self) -> Px {
        self.left + self.width
    }

    /// Whether `x` falls inside `[left, right)`.
    pub fn contains(&self, x: Px) -> bool {
        x >= self.left && x < self.right()
    }
}

/// A tab label as handed to the container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabView {
    /// Page title shown in the tab.
    pub title: String,
    /// Label color, taken from the colorizer for the tab's page.
    pub text_color: Color,
    /// Share the leftover row width evenly with the other filling tabs instead
    /// of using the measured width.
    pub fill_evenly: bool,
}

/// One position in the strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabSlot {
    /// Synthetic spacer letting the first and last tabs reach the center.
    Padding {
        /// Fixed width of the spacer.
        width: Px,
    },
    /// A real tab.
    Tab(TabView),
}

/// Host-side container of tab slots.
///
/// Index lookups beyond [`child_count`](Self::child_count) return `None` or
/// `false`; callers treat that as "skip".
pub trait TabContainer {
    /// Number of slots, padding included.
    fn child_count(&self) -> usize;

    /// Laid-out bounds of the slot at `index`.
    fn child_bounds(&self, index: usize) -> Option<SlotBounds>;

    /// Whether the slot at `index` is a real tab (and so clickable).
    fn is_tab(&self, index: usize) -> bool;

    /// Inserts `slot` at `index`, shifting later slots right. An index past
    /// the end appends.
    fn insert_slot(&mut self, index: usize, slot: TabSlot);

    /// Appends `slot`.
    fn push_slot(&mut self, slot: TabSlot) {
        let index = self.child_count();
        self.insert_slot(index, slot);
    }

    /// Removes every slot.
    fn remove_all(&mut self);

    /// Sets the selection flag of the slot at `index`.
    fn set_selected(&mut self, index: usize, selected: bool);

    /// Selection flag of the slot at `index`.
    fn is_selected(&self, index: usize) -> bool;

    /// Width of the visible window onto the strip.
    fn viewport_width(&self) -> Px;

    /// Current horizontal scroll of the visible window.
    fn scroll_x(&self) -> Px;

    /// Scrolls the visible window so its left edge sits at `x`.
    fn scroll_to(&mut self, x: Px);

    /// Requests one paint pass on the host's next frame.
    fn invalidate(&mut self);

    /// Index of the slot under content coordinate `x`.
    fn slot_at(&self, x: Px) -> Option<usize> {
        (0..self.child_count()).find(|&index| {
            self.child_bounds(index)
                .is_some_and(|bounds| bounds.contains(x))
        })
    }
}

/// Measures the natural width of a tab label.
pub type MeasureFn = Arc<dyn Fn(&TabView) -> Px + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq)]
struct RowSlot {
    slot: TabSlot,
    selected: bool,
    bounds: SlotBounds,
}

/// Headless [`TabContainer`] laying slots out left to right.
///
/// Scroll commands are clamped to `[0, content_width - viewport_width]`, the
/// way a horizontal scroll view does.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use tessera_sliding_tabs::{
///     color::Color,
///     container::{SlotBounds, TabContainer, TabRow, TabSlot, TabView},
///     px::Px,
/// };
///
/// let mut row = TabRow::new(Px(300), Arc::new(|tab: &TabView| Px(tab.title.len() as i32 * 10)));
/// row.push_slot(TabSlot::Tab(TabView {
///     title: "Inbox".into(),
///     text_color: Color::BLACK,
///     fill_evenly: false,
/// }));
/// row.push_slot(TabSlot::Padding { width: Px(400) });
/// assert_eq!(row.child_bounds(1), Some(SlotBounds::new(Px(50), Px(400))));
///
/// row.scroll_to(Px(10_000));
/// assert_eq!(row.scroll_x(), Px(150));
/// ```
#[derive(Clone)]
pub struct TabRow {
    slots: Vec<RowSlot>,
    measure: MeasureFn,
    viewport_width: Px,
    scroll_x: Px,
    redraw_requested: bool,
    invalidations: usize,
}

impl TabRow {
    /// Creates an empty row with the given viewport width and label measurer.
    pub fn new(viewport_width: Px, measure: MeasureFn) -> Self {
        Self {
            slots: Vec::new(),
            measure,
            viewport_width: viewport_width.max(Px::ZERO),
            scroll_x: Px::ZERO,
            redraw_requested: false,
            invalidations: 0,
        }
    }

    /// Resizes the viewport, relaying out filling tabs and re-clamping the
    /// scroll.
    pub fn set_viewport_width(&mut self, width: Px) {
        self.viewport_width = width.max(Px::ZERO);
        self.relayout();
        self.scroll_x = self.clamp_scroll(self.scroll_x);
    }

    /// Total width of all slots.
    pub fn content_width(&self) -> Px {
        self.slots
            .last()
            .map_or(Px::ZERO, |slot| slot.bounds.right())
    }

    /// Largest valid scroll offset.
    pub fn max_scroll(&self) -> Px {
        (self.content_width() - self.viewport_width).max(Px::ZERO)
    }

    /// The slot at `index`.
    pub fn slot(&self, index: usize) -> Option<&TabSlot> {
        self.slots.get(index).map(|slot| &slot.slot)
    }

    /// Number of invalidations requested since creation.
    pub fn invalidation_count(&self) -> usize {
        self.invalidations
    }

    /// Returns whether a redraw is pending and clears the request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    fn clamp_scroll(&self, x: Px) -> Px {
        x.max(Px::ZERO).min(self.max_scroll())
    }

    fn relayout(&mut self) {
        let mut fixed_width = Px::ZERO;
        let mut filling: i32 = 0;
        for row_slot in &self.slots {
            match &row_slot.slot {
                TabSlot::Padding { width } => fixed_width += *width,
                TabSlot::Tab(view) if view.fill_evenly => filling += 1,
                TabSlot::Tab(view) => fixed_width += (self.measure)(view),
            }
        }
        let fill_width = if filling == 0 {
            Px::ZERO
        } else {
            (self.viewport_width - fixed_width).max(Px::ZERO) / filling
        };

        let mut left = Px::ZERO;
        for row_slot in &mut self.slots {
            let width = match &row_slot.slot {
                TabSlot::Padding { width } => *width,
                TabSlot::Tab(view) if view.fill_evenly => fill_width,
                TabSlot::Tab(view) => (self.measure)(view),
            };
            row_slot.bounds = SlotBounds::new(left, width.max(Px::ZERO));
            left += row_slot.bounds.width;
        }
    }
}

impl fmt::Debug for TabRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabRow")
            .field("slots", &self.slots)
            .field("viewport_width", &self.viewport_width)
            .field("scroll_x", &self.scroll_x)
            .field("invalidations", &self.invalidations)
            .finish_non_exhaustive()
    }
}

impl TabContainer for TabRow {
    fn child_count(&self) -> usize {
        self.slots.len()
    }

    fn child_bounds(&self, index: usize) -> Option<SlotBounds> {
        self.slots.get(index).map(|slot| slot.bounds)
    }

    fn is_tab(&self, index: usize) -> bool {
        matches!(self.slot(index), Some(TabSlot::Tab(_)))
    }

    fn insert_slot(&mut self, index: usize, slot: TabSlot) {
        let index = index.min(self.slots.len());
        self.slots.insert(
            index,
            RowSlot {
                slot,
                selected: false,
                bounds: SlotBounds::default(),
            },
        );
        self.relayout();
    }

    fn remove_all(&mut self) {
        self.slots.clear();
        self.scroll_x = Px::ZERO;
    }

    fn set_selected(&mut self, index: usize, selected: bool) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.selected = selected;
        }
    }

    fn is_selected(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(|slot| slot.selected)
    }

    fn viewport_width(&self) -> Px {
        self.viewport_width
    }

    fn scroll_x(&self) -> Px {
        self.scroll_x
    }

    fn scroll_to(&mut self, x: Px) {
        let clamped = self.clamp_scroll(x);
        trace!(requested = x.0, clamped = clamped.0, "tab row scroll");
        self.scroll_x = clamped;
    }

    fn invalidate(&mut self) {
        self.redraw_requested = true;
        self.invalidations += 1;
    }
}
