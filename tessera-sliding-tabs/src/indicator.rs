//! Position, color and shape of the selection indicator.
//!
//! ## Color
//!
//! The base color is the colorizer's color for the page left of the current
//! slot (`current_position - 1`). While dragging, it is blended toward the
//! next page's color with `blend_colors(next, base, offset)`: at offset 0 the
//! base color wins, and the next color takes over as the offset grows. When
//! settled no blending happens at all.
//!
//! ## Position
//!
//! The indicator is anchored between the current slot's left edge and the
//! target slot's left edge, weighted by the offset, then shifted by half the
//! target slot's width. The target is the current slot when settled and the
//! slot after it while dragging.
use smallvec::SmallVec;

use crate::{
    color::{Color, blend_colors},
    colorizer::TabColorizer,
    container::{SlotBounds, TabContainer},
    px::{Px, PxPosition},
    scroll_state::ScrollState,
};

/// The resolved indicator for one paint pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    /// Horizontal center, in strip content coordinates.
    pub center: Px,
    /// Fill color.
    pub color: Color,
}

/// Indicator fill color for `state`.
///
/// Returns `None` while the state points at the leading padding slot, which
/// has no page.
pub fn indicator_color(state: &ScrollState, colorizer: &dyn TabColorizer) -> Option<Color> {
    let page = state.current_position().checked_sub(1)?;
    let base = colorizer.indicator_color(page);
    if state.is_idle() {
        return Some(base);
    }
    let next = colorizer.indicator_color(page + 1);
    if next == base {
        Some(base)
    } else {
        Some(blend_colors(next, base, state.offset()))
    }
}

/// Horizontal indicator center.
///
/// `current` is the slot at `state.current_position()` (its left edge counts
/// as zero when missing) and `target` the slot the indicator moves toward.
pub fn indicator_center(state: &ScrollState, current: Option<SlotBounds>, target: SlotBounds) -> Px {
    let offset = state.offset();
    let left = current.map_or(Px::ZERO, |bounds| bounds.left);
    let anchor = offset * target.left.to_f32() + (1.0 - offset) * left.to_f32();
    Px::saturating_from_f32(anchor) + target.width / 2
}

/// Resolves the indicator against the live slots of `container`.
///
/// Returns `None`, meaning "draw nothing", when the container is empty, the
/// state points at the leading padding, or the target slot does not exist.
pub fn resolve_indicator(
    state: &ScrollState,
    colorizer: &dyn TabColorizer,
    container: &impl TabContainer,
) -> Option<Indicator> {
    if container.child_count() == 0 {
        return None;
    }
    let current_position = state.current_position();
    let target_position = if state.is_idle() {
        current_position
    } else {
        current_position.saturating_add(1)
    };
    let target = container.child_bounds(target_position)?;
    let current = container.child_bounds(current_position);
    let color = indicator_color(state, colorizer)?;
    Some(Indicator {
        center: indicator_center(state, current, target),
        color,
    })
}

/// Closed outline of the indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorPath {
    points: SmallVec<[PxPosition; 4]>,
}

impl IndicatorPath {
    /// Triangle pointing up from the bottom edge of a strip of
    /// `strip_height`, with its apex `size` above the bottom at `center` and
    /// a base `2 * size` wide.
    ///
    /// # Examples
    ///
    /// ```
    /// use tessera_sliding_tabs::{indicator::IndicatorPath, px::{Px, PxPosition}};
    ///
    /// let path = IndicatorPath::chevron(Px(100), Px(60), Px(20));
    /// assert_eq!(
    ///     path.points(),
    ///     &[
    ///         PxPosition::new(Px(100), Px(40)),
    ///         PxPosition::new(Px(120), Px(60)),
    ///         PxPosition::new(Px(80), Px(60)),
    ///     ]
    /// );
    /// ```
    pub fn chevron(center: Px, strip_height: Px, size: Px) -> Self {
        let points = [
            PxPosition::new(center, strip_height - size),
            PxPosition::new(center + size, strip_height),
            PxPosition::new(center - size, strip_height),
        ];
        Self {
            points: SmallVec::from_iter(points),
        }
    }

    /// Vertices in drawing order; the outline closes back to the first one.
    pub fn points(&self) -> &[PxPosition] {
        &self.points
    }
}

/// Paint target for the indicator.
pub trait IndicatorCanvas {
    /// Fills the closed `path` with `color`.
    fn fill_path(&mut self, path: &IndicatorPath, color: Color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{colorizer::SimpleTabColorizer, container::TabSlot};

    struct Slots(Vec<SlotBounds>);

    impl TabContainer for Slots {
        fn child_count(&self) -> usize {
            self.0.len()
        }
        fn child_bounds(&self, index: usize) -> Option<SlotBounds> {
            self.0.get(index).copied()
        }
        fn is_tab(&self, index: usize) -> bool {
            index > 0 && index + 1 < self.0.len()
        }
        fn insert_slot(&mut self, _index: usize, _slot: TabSlot) {}
        fn remove_all(&mut self) {
            self.0.clear();
        }
        fn set_selected(&mut self, _index: usize, _selected: bool) {}
        fn is_selected(&self, _index: usize) -> bool {
            false
        }
        fn viewport_width(&self) -> Px {
            Px(300)
        }
        fn scroll_x(&self) -> Px {
            Px::ZERO
        }
        fn scroll_to(&mut self, _x: Px) {}
        fn invalidate(&mut self) {}
    }

    fn rgb_colorizer() -> SimpleTabColorizer {
        SimpleTabColorizer::new(vec![Color::GREEN, Color::RED, Color::BLUE]).unwrap()
    }

    // padding | 3 tabs | padding
    fn three_tabs() -> Slots {
        Slots(vec![
            SlotBounds::new(Px(0), Px(120)),
            SlotBounds::new(Px(120), Px(60)),
            SlotBounds::new(Px(180), Px(80)),
            SlotBounds::new(Px(260), Px(100)),
            SlotBounds::new(Px(360), Px(100)),
        ])
    }

    #[test]
    fn idle_color_is_the_page_color_without_blending() {
        let colorizer = rgb_colorizer();
        assert_eq!(
            indicator_color(&ScrollState::idle(1), &colorizer),
            Some(Color::GREEN)
        );
        assert_eq!(
            indicator_color(&ScrollState::idle(3), &colorizer),
            Some(Color::BLUE)
        );
    }

    #[test]
    fn dragging_blends_next_over_base_by_offset() {
        let colorizer = rgb_colorizer();
        let state = ScrollState::dragging_to_left(1, 0.4);
        assert_eq!(
            indicator_color(&state, &colorizer),
            Some(blend_colors(Color::RED, Color::GREEN, 0.4))
        );
        let state = ScrollState::dragging_to_right(2, 0.25);
        assert_eq!(
            indicator_color(&state, &colorizer),
            Some(blend_colors(Color::BLUE, Color::RED, 0.25))
        );
    }

    #[test]
    fn dragging_between_equal_colors_keeps_base() {
        let colorizer = SimpleTabColorizer::single(Color::WHITE);
        let state = ScrollState::dragging_to_left(2, 0.9);
        assert_eq!(indicator_color(&state, &colorizer), Some(Color::WHITE));
    }

    #[test]
    fn dragging_off_the_last_page_wraps_the_next_color() {
        let colorizer = rgb_colorizer();
        let state = ScrollState::dragging_to_left(3, 0.5);
        assert_eq!(
            indicator_color(&state, &colorizer),
            Some(blend_colors(Color::GREEN, Color::BLUE, 0.5))
        );
    }

    #[test]
    fn leading_padding_has_no_color() {
        let colorizer = rgb_colorizer();
        assert_eq!(indicator_color(&ScrollState::idle(0), &colorizer), None);
    }

    #[test]
    fn idle_center_is_middle_of_current_slot() {
        let slots = three_tabs();
        let state = ScrollState::idle(2);
        let center = indicator_center(&state, slots.child_bounds(2), slots.0[2]);
        assert_eq!(center, Px(220));
    }

    #[test]
    fn dragging_center_interpolates_left_edges() {
        let state = ScrollState::dragging_to_left(1, 0.5);
        let current = SlotBounds::new(Px(120), Px(60));
        let target = SlotBounds::new(Px(180), Px(80));
        // 0.5 * 180 + 0.5 * 120 + 80 / 2
        assert_eq!(indicator_center(&state, Some(current), target), Px(190));
    }

    #[test]
    fn missing_current_slot_counts_as_zero() {
        let state = ScrollState::dragging_to_right(1, 0.5);
        let target = SlotBounds::new(Px(100), Px(50));
        assert_eq!(indicator_center(&state, None, target), Px(75));
    }

    #[test]
    fn resolve_uses_current_and_next_slots() {
        let slots = three_tabs();
        let colorizer = rgb_colorizer();

        let idle = resolve_indicator(&ScrollState::idle(1), &colorizer, &slots);
        assert_eq!(
            idle,
            Some(Indicator {
                center: Px(150),
                color: Color::GREEN,
            })
        );

        let dragging = ScrollState::dragging_to_left(1, 0.25);
        let indicator = resolve_indicator(&dragging, &colorizer, &slots).unwrap();
        // 0.25 * 180 + 0.75 * 120 + 40
        assert_eq!(indicator.center, Px(175));
        assert_eq!(
            indicator.color,
            blend_colors(Color::RED, Color::GREEN, 0.25)
        );
    }

    #[test]
    fn resolve_skips_missing_slots() {
        let colorizer = rgb_colorizer();
        let empty = Slots(Vec::new());
        assert_eq!(
            resolve_indicator(&ScrollState::idle(1), &colorizer, &empty),
            None
        );

        let slots = three_tabs();
        assert_eq!(
            resolve_indicator(&ScrollState::idle(0), &colorizer, &slots),
            None
        );
        assert_eq!(
            resolve_indicator(&ScrollState::idle(5), &colorizer, &slots),
            None
        );
        assert_eq!(
            resolve_indicator(&ScrollState::dragging_to_left(4, 0.5), &colorizer, &slots),
            None
        );
    }
}
