//! Directional scroll state derived from pager scroll ticks.
//!
//! ## Slot space
//!
//! Positions carried by [`ScrollState`] are tab *slot* indices, not page
//! indices. Slot 0 is the leading centering padding, so page `p` lives in slot
//! `p + 1`.
use std::fmt;

/// Progress of a drag: the slot it started from and how far it has moved.
///
/// Only built by [`ScrollState::dragging_to_left`] and
/// [`ScrollState::dragging_to_right`], which never produce a zero offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragProgress {
    current_position: usize,
    offset: f32,
}

impl DragProgress {
    /// Slot index closest to fully selected.
    pub fn current_position(&self) -> usize {
        self.current_position
    }

    /// Progress toward `current_position + 1`, never zero.
    pub fn offset(&self) -> f32 {
        self.offset
    }
}

/// Where the strip is relative to its tabs, and which way it is travelling.
///
/// `offset` is the fraction in `[0, 1)` travelled from `current_position`
/// toward the next slot. It is zero if and only if the state is
/// [`ScrollState::Idle`]: dragging states carry a [`DragProgress`], which
/// cannot hold a zero offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollState {
    /// Settled on a slot.
    Idle {
        /// Slot index closest to fully selected.
        current_position: usize,
    },
    /// Content moving toward higher-indexed tabs.
    DraggingToLeft(DragProgress),
    /// Content moving toward lower-indexed tabs.
    DraggingToRight(DragProgress),
}

impl ScrollState {
    /// Settled on `current_position`.
    pub const fn idle(current_position: usize) -> Self {
        Self::Idle { current_position }
    }

    /// Dragging toward higher-indexed tabs; collapses to [`Self::Idle`] for a
    /// zero offset.
    pub fn dragging_to_left(current_position: usize, offset: f32) -> Self {
        if offset == 0.0 {
            Self::idle(current_position)
        } else {
            Self::DraggingToLeft(DragProgress {
                current_position,
                offset,
            })
        }
    }

    /// Dragging toward lower-indexed tabs; collapses to [`Self::Idle`] for a
    /// zero offset.
    pub fn dragging_to_right(current_position: usize, offset: f32) -> Self {
        if offset == 0.0 {
            Self::idle(current_position)
        } else {
            Self::DraggingToRight(DragProgress {
                current_position,
                offset,
            })
        }
    }

    /// Slot index closest to fully selected.
    pub fn current_position(&self) -> usize {
        match self {
            Self::Idle { current_position } => *current_position,
            Self::DraggingToLeft(drag) | Self::DraggingToRight(drag) => drag.current_position,
        }
    }

    /// Fraction travelled toward the next slot.
    pub fn offset(&self) -> f32 {
        match self {
            Self::Idle { .. } => 0.0,
            Self::DraggingToLeft(drag) | Self::DraggingToRight(drag) => drag.offset,
        }
    }

    /// Whether the strip is settled.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle { .. })
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::idle(0)
    }
}

impl fmt::Display for ScrollState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle { .. } => "Idle",
            Self::DraggingToLeft(_) => "DraggingToLeft",
            Self::DraggingToRight(_) => "DraggingToRight",
        };
        write!(
            f,
            "{name}(current_position={}, offset={})",
            self.current_position(),
            self.offset()
        )
    }
}

/// Turns continuous `(position, position_offset)` pager ticks into
/// [`ScrollState`] values.
///
/// The machine remembers the combined progress (`position + position_offset`)
/// of the previous tick to tell direction. That memory lives for one pager
/// binding; call [`reset`](Self::reset) when rebinding.
///
/// # Examples
///
/// ```
/// use tessera_sliding_tabs::scroll_state::{ScrollState, ScrollStateMachine};
///
/// let mut machine = ScrollStateMachine::new();
/// assert_eq!(
///     machine.on_page_scrolled(0, 0.4),
///     ScrollState::dragging_to_left(1, 0.4)
/// );
/// assert_eq!(
///     machine.on_page_scrolled(0, 0.1),
///     ScrollState::dragging_to_right(1, 0.1)
/// );
/// assert_eq!(machine.on_page_scrolled(1, 0.0), ScrollState::idle(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollStateMachine {
    last_progress: f32,
}

impl ScrollStateMachine {
    /// Creates a machine with zero remembered progress.
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps one scroll tick to a new state.
    ///
    /// `position` is the zero-based page under the left edge of the viewport
    /// and `position_offset` the fraction scrolled toward `position + 1`.
    /// Rules apply in priority order:
    ///
    /// 1. a zero offset is always [`ScrollState::Idle`];
    /// 2. progress strictly greater than last tick's is
    ///    [`ScrollState::DraggingToLeft`];
    /// 3. anything else is [`ScrollState::DraggingToRight`].
    pub fn on_page_scrolled(&mut self, position: usize, position_offset: f32) -> ScrollState {
        let slot = position.saturating_add(1);
        let progress = position as f32 + position_offset;
        let state = if position_offset == 0.0 {
            ScrollState::idle(slot)
        } else if progress > self.last_progress {
            ScrollState::dragging_to_left(slot, position_offset)
        } else {
            ScrollState::dragging_to_right(slot, position_offset)
        };
        self.last_progress = progress;
        state
    }

    /// Combined progress remembered from the previous tick.
    pub fn last_progress(&self) -> f32 {
        self.last_progress
    }

    /// Forgets the remembered progress.
    pub fn reset(&mut self) {
        self.last_progress = 0.0;
    }
}
