//! The strip under the tab labels: holds the scroll state and paints the
//! indicator.
use std::fmt;

use tracing::{debug, trace};

use crate::{
    color::Color,
    colorizer::{ColorizerError, SimpleTabColorizer, TabColorizer},
    container::TabContainer,
    indicator::{Indicator, IndicatorCanvas, IndicatorPath, resolve_indicator},
    px::Px,
    scroll_state::ScrollState,
};

/// Indicator state and painting for one tab row.
///
/// Every mutation that changes what would be painted requests a redraw
/// through [`TabContainer::invalidate`].
pub struct SlidingTabStrip {
    scroll_state: ScrollState,
    footer_indicator_height: Px,
    default_colorizer: SimpleTabColorizer,
    custom_colorizer: Option<Box<dyn TabColorizer>>,
}

impl SlidingTabStrip {
    /// Creates a strip in the `Idle(0)` state.
    pub fn new(footer_indicator_height: Px, default_colorizer: SimpleTabColorizer) -> Self {
        Self {
            scroll_state: ScrollState::default(),
            footer_indicator_height,
            default_colorizer,
            custom_colorizer: None,
        }
    }

    /// The state the next paint pass draws.
    pub fn scroll_state(&self) -> ScrollState {
        self.scroll_state
    }

    /// Replaces the scroll state and requests a redraw.
    pub fn set_scroll_state(&mut self, state: ScrollState, container: &mut impl TabContainer) {
        debug!(%state, "scroll state changed");
        self.scroll_state = state;
        container.invalidate();
    }

    /// Height of the indicator triangle.
    pub fn footer_indicator_height(&self) -> Px {
        self.footer_indicator_height
    }

    /// The colorizer in effect: the custom one if installed, else the default.
    pub fn colorizer(&self) -> &dyn TabColorizer {
        match &self.custom_colorizer {
            Some(custom) => &**custom,
            None => &self.default_colorizer,
        }
    }

    /// Installs a colorizer overriding the default colors.
    pub fn set_custom_tab_colorizer(
        &mut self,
        colorizer: Box<dyn TabColorizer>,
        container: &mut impl TabContainer,
    ) {
        self.custom_colorizer = Some(colorizer);
        container.invalidate();
    }

    /// Whether a custom colorizer is installed.
    pub fn has_custom_tab_colorizer(&self) -> bool {
        self.custom_colorizer.is_some()
    }

    /// Drops any custom colorizer and makes `colors` the circular default.
    ///
    /// An empty list is rejected and leaves the strip untouched.
    pub fn set_selected_indicator_colors(
        &mut self,
        colors: Vec<Color>,
        container: &mut impl TabContainer,
    ) -> Result<(), ColorizerError> {
        self.default_colorizer.set_colors(colors)?;
        self.custom_colorizer = None;
        container.invalidate();
        Ok(())
    }

    /// Height to report for the strip given the height of its labels, leaving
    /// room for the indicator below them.
    pub fn measured_height(&self, content_height: Px) -> Px {
        content_height + self.footer_indicator_height
    }

    /// Resolves the indicator for the current state without painting.
    pub fn indicator(&self, container: &impl TabContainer) -> Option<Indicator> {
        resolve_indicator(&self.scroll_state, self.colorizer(), container)
    }

    /// One paint pass: fills the indicator triangle at the bottom of a strip
    /// `height` tall. Paints nothing and returns `None` when the referenced
    /// slots do not exist.
    pub fn draw(
        &self,
        container: &impl TabContainer,
        canvas: &mut impl IndicatorCanvas,
        height: Px,
    ) -> Option<Indicator> {
        let Some(indicator) = self.indicator(container) else {
            trace!(state = %self.scroll_state, "no indicator to draw");
            return None;
        };
        let path = IndicatorPath::chevron(indicator.center, height, self.footer_indicator_height);
        canvas.fill_path(&path, indicator.color);
        Some(indicator)
    }
}

impl fmt::Debug for SlidingTabStrip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlidingTabStrip")
            .field("scroll_state", &self.scroll_state)
            .field("footer_indicator_height", &self.footer_indicator_height)
            .field("default_colorizer", &self.default_colorizer)
            .field("custom_colorizer", &self.custom_colorizer.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        color::blend_colors,
        container::{TabRow, TabSlot, TabView},
        px::PxPosition,
    };

    #[derive(Default)]
    struct RecordingCanvas {
        fills: Vec<(Vec<PxPosition>, Color)>,
    }

    impl IndicatorCanvas for RecordingCanvas {
        fn fill_path(&mut self, path: &IndicatorPath, color: Color) {
            self.fills.push((path.points().to_vec(), color));
        }
    }

    fn padded_row(tab_widths: &[i32]) -> TabRow {
        let mut row = TabRow::new(Px(200), Arc::new(|view: &TabView| Px(view.title.len() as i32)));
        row.push_slot(TabSlot::Padding { width: Px(50) });
        for width in tab_widths {
            row.push_slot(TabSlot::Tab(TabView {
                title: "x".repeat(*width as usize),
                text_color: Color::BLACK,
                fill_evenly: false,
            }));
        }
        row.push_slot(TabSlot::Padding { width: Px(50) });
        row
    }

    fn strip() -> SlidingTabStrip {
        SlidingTabStrip::new(
            Px(20),
            SimpleTabColorizer::new(vec![Color::GREEN, Color::RED, Color::BLUE]).unwrap(),
        )
    }

    #[test]
    fn set_scroll_state_invalidates_once() {
        let mut row = padded_row(&[100, 100]);
        let mut strip = strip();
        assert_eq!(strip.scroll_state(), ScrollState::idle(0));

        strip.set_scroll_state(ScrollState::dragging_to_left(1, 0.5), &mut row);
        assert_eq!(strip.scroll_state(), ScrollState::dragging_to_left(1, 0.5));
        assert_eq!(row.invalidation_count(), 1);
    }

    #[test]
    fn draw_paints_triangle_at_bottom_edge() {
        let mut row = padded_row(&[100, 60, 80]);
        let mut strip = strip();
        strip.set_scroll_state(ScrollState::idle(2), &mut row);

        let mut canvas = RecordingCanvas::default();
        let drawn = strip.draw(&row, &mut canvas, Px(68));

        // slot 2 spans [150, 210)
        assert_eq!(
            drawn,
            Some(Indicator {
                center: Px(180),
                color: Color::RED,
            })
        );
        assert_eq!(
            canvas.fills,
            vec![(
                vec![
                    PxPosition::new(Px(180), Px(48)),
                    PxPosition::new(Px(200), Px(68)),
                    PxPosition::new(Px(160), Px(68)),
                ],
                Color::RED
            )]
        );
    }

    #[test]
    fn draw_skips_when_slots_are_missing() {
        let mut row = TabRow::new(Px(200), Arc::new(|_: &TabView| Px(10)));
        let mut strip = strip();
        let mut canvas = RecordingCanvas::default();

        assert_eq!(strip.draw(&row, &mut canvas, Px(40)), None);

        row.push_slot(TabSlot::Padding { width: Px(10) });
        strip.set_scroll_state(ScrollState::idle(3), &mut row);
        assert_eq!(strip.draw(&row, &mut canvas, Px(40)), None);
        assert!(canvas.fills.is_empty());
    }

    #[test]
    fn custom_colorizer_overrides_until_colors_are_set() {
        let mut row = padded_row(&[100, 100]);
        let mut strip = strip();
        strip.set_scroll_state(ScrollState::dragging_to_left(1, 0.5), &mut row);

        strip.set_custom_tab_colorizer(Box::new(|_: usize| Color::WHITE), &mut row);
        assert!(strip.has_custom_tab_colorizer());
        assert_eq!(strip.indicator(&row).map(|i| i.color), Some(Color::WHITE));

        strip
            .set_selected_indicator_colors(vec![Color::BLACK, Color::BLUE], &mut row)
            .unwrap();
        assert!(!strip.has_custom_tab_colorizer());
        assert_eq!(
            strip.indicator(&row).map(|i| i.color),
            Some(blend_colors(Color::BLUE, Color::BLACK, 0.5))
        );
        assert_eq!(row.invalidation_count(), 3);
    }

    #[test]
    fn empty_indicator_colors_are_rejected() {
        let mut row = padded_row(&[100]);
        let mut strip = strip();
        strip.set_custom_tab_colorizer(Box::new(|_: usize| Color::WHITE), &mut row);

        assert_eq!(
            strip.set_selected_indicator_colors(Vec::new(), &mut row),
            Err(ColorizerError::NoColors)
        );
        assert!(strip.has_custom_tab_colorizer());
        assert_eq!(row.invalidation_count(), 1);
    }

    #[test]
    fn measured_height_leaves_room_for_indicator() {
        assert_eq!(strip().measured_height(Px(48)), Px(68));
    }
}
