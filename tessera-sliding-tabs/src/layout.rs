//! A horizontally scrolling tab row kept in sync with a pager.
//!
//! ## Usage
//!
//! Bind a [`PageSource`] with [`SlidingTabLayout::set_view_pager`], forward
//! the pager's events through [`PageChangeListener`], forward layout,
//! attach and click events from the host view, and call
//! [`SlidingTabLayout::draw`] once per requested redraw.
//!
//! ## Slot indices
//!
//! Page `p` is shown in slot `p + 1`; slots `0` and `page_count + 1` are
//! centering padding added on the first layout after binding.
use derive_setters::Setters;
use tracing::{debug, trace};

use crate::{
    color::Color,
    colorizer::{ColorizerError, SimpleTabColorizer, TabColorizer},
    container::{TabContainer, TabSlot, TabView},
    indicator::{Indicator, IndicatorCanvas},
    pager::{PageChangeListener, PageScrollState, PageSource},
    px::{Dp, Px},
    scroll_state::{ScrollState, ScrollStateMachine},
    tab_strip::SlidingTabStrip,
};

/// Defaults for [`SlidingTabLayout`].
pub struct SlidingTabsDefaults;

impl SlidingTabsDefaults {
    /// Height of the indicator triangle, and the extra height it adds below
    /// the labels.
    pub const FOOTER_INDICATOR_HEIGHT: Dp = Dp(20.0);
    /// Indicator color used until colors or a colorizer are installed.
    pub const INDICATOR_COLOR: Color = Color::from_argb(0xFF33B5E5);
}

/// Configuration arguments for [`SlidingTabLayout`].
///
/// Values are physical pixels; use [`SlidingTabLayoutArgs::for_density`] to
/// resolve the dp defaults for a display.
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct SlidingTabLayoutArgs {
    /// Height of the indicator triangle.
    pub footer_indicator_height: Px,
    /// Give every tab an equal share of the row instead of its measured width.
    pub distribute_evenly: bool,
    /// Circular indicator colors, indexed by page. Must not be empty.
    #[setters(into)]
    pub indicator_colors: Vec<Color>,
}

impl SlidingTabLayoutArgs {
    /// Defaults resolved for a display with the given scale factor.
    pub fn for_density(scale_factor: f64) -> Self {
        Self {
            footer_indicator_height: SlidingTabsDefaults::FOOTER_INDICATOR_HEIGHT
                .to_px(scale_factor),
            distribute_evenly: false,
            indicator_colors: vec![SlidingTabsDefaults::INDICATOR_COLOR],
        }
    }
}

impl Default for SlidingTabLayoutArgs {
    fn default() -> Self {
        Self::for_density(1.0)
    }
}

/// Tab row driven by a pager.
///
/// Owns the bound page source, the host's tab container and the indicator
/// strip. All methods run on the UI thread, one event at a time.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use tessera_sliding_tabs::{
///     container::{TabContainer, TabRow, TabView},
///     layout::{SlidingTabLayout, SlidingTabLayoutArgs},
///     pager::{PageChangeListener, StaticPages},
///     px::Px,
///     scroll_state::ScrollState,
/// };
///
/// let row = TabRow::new(Px(360), Arc::new(|tab: &TabView| Px(tab.title.len() as i32 * 12)));
/// let mut layout = SlidingTabLayout::new(row, SlidingTabLayoutArgs::default()).unwrap();
/// layout.set_view_pager(Some(StaticPages::new(["Home", "Feed", "Profile"])));
/// layout.on_global_layout();
/// assert_eq!(layout.container().child_count(), 5);
///
/// layout.on_page_scrolled(0, 0.5, Px(180));
/// assert_eq!(layout.scroll_state(), ScrollState::dragging_to_left(1, 0.5));
/// ```
pub struct SlidingTabLayout<P, C> {
    args: SlidingTabLayoutArgs,
    container: C,
    strip: SlidingTabStrip,
    view_pager: Option<P>,
    scroll_machine: ScrollStateMachine,
    page_scroll_state: PageScrollState,
    padding_pending: bool,
}

impl<P, C> SlidingTabLayout<P, C>
where
    P: PageSource,
    C: TabContainer,
{
    /// Creates an unbound layout over `container`.
    ///
    /// Fails when `args.indicator_colors` is empty.
    pub fn new(container: C, args: SlidingTabLayoutArgs) -> Result<Self, ColorizerError> {
        let colorizer = SimpleTabColorizer::new(args.indicator_colors.clone())?;
        let strip = SlidingTabStrip::new(args.footer_indicator_height, colorizer);
        Ok(Self {
            args,
            container,
            strip,
            view_pager: None,
            scroll_machine: ScrollStateMachine::new(),
            page_scroll_state: PageScrollState::Idle,
            padding_pending: false,
        })
    }

    /// The configuration in effect.
    pub fn args(&self) -> &SlidingTabLayoutArgs {
        &self.args
    }

    /// The host container.
    pub fn container(&self) -> &C {
        &self.container
    }

    /// Mutable access to the host container, e.g. to resize its viewport.
    pub fn container_mut(&mut self) -> &mut C {
        &mut self.container
    }

    /// The indicator strip.
    pub fn strip(&self) -> &SlidingTabStrip {
        &self.strip
    }

    /// The bound page source.
    pub fn view_pager(&self) -> Option<&P> {
        self.view_pager.as_ref()
    }

    /// Mutable access to the bound page source.
    pub fn view_pager_mut(&mut self) -> Option<&mut P> {
        self.view_pager.as_mut()
    }

    /// The state the next paint pass draws.
    pub fn scroll_state(&self) -> ScrollState {
        self.strip.scroll_state()
    }

    /// Last scroll phase reported by the pager.
    pub fn page_scroll_state(&self) -> PageScrollState {
        self.page_scroll_state
    }

    /// Whether tabs share the row evenly. Takes effect on the next binding.
    pub fn set_distribute_evenly(&mut self, distribute_evenly: bool) {
        self.args.distribute_evenly = distribute_evenly;
    }

    /// Installs a colorizer with full control over per-page colors.
    pub fn set_custom_tab_colorizer(&mut self, colorizer: impl TabColorizer + 'static) {
        self.strip
            .set_custom_tab_colorizer(Box::new(colorizer), &mut self.container);
    }

    /// Sets circular indicator colors, removing any custom colorizer.
    pub fn set_selected_indicator_colors(
        &mut self,
        colors: impl Into<Vec<Color>>,
    ) -> Result<(), ColorizerError> {
        let colors = colors.into();
        self.strip
            .set_selected_indicator_colors(colors.clone(), &mut self.container)?;
        self.args.indicator_colors = colors;
        Ok(())
    }

    /// Binds `view_pager`, returning the previously bound one.
    ///
    /// The strip is rebuilt from scratch and direction tracking starts over.
    /// The page count is assumed not to change while bound.
    pub fn set_view_pager(&mut self, view_pager: Option<P>) -> Option<P> {
        self.container.remove_all();
        self.padding_pending = false;
        self.scroll_machine.reset();

        let previous = std::mem::replace(&mut self.view_pager, view_pager);
        if self.view_pager.is_some() {
            self.populate_tab_strip();
        }
        previous
    }

    fn populate_tab_strip(&mut self) {
        let Some(pager) = self.view_pager.as_ref() else {
            return;
        };
        let count = pager.page_count();
        if count == 0 {
            debug!("bound pager has no pages");
            return;
        }

        let current = pager.current_page();
        let colorizer = self.strip.colorizer();
        for position in 0..count {
            self.container.push_slot(TabSlot::Tab(TabView {
                title: pager.page_title(position),
                text_color: colorizer.indicator_color(position),
                fill_evenly: self.args.distribute_evenly,
            }));
            if position == current {
                self.container.set_selected(position, true);
            }
        }
        self.padding_pending = true;
        debug!(count, current, "populated tab strip");
    }

    /// Layout-pass notification from the host.
    ///
    /// The first call after binding wraps the tabs in centering padding so
    /// the first and last tabs can reach the middle of the viewport. Later
    /// calls do nothing.
    pub fn on_global_layout(&mut self) {
        if !std::mem::take(&mut self.padding_pending) {
            return;
        }
        let count = self.container.child_count();
        let (Some(first), Some(last)) = (
            self.container.child_bounds(0),
            count
                .checked_sub(1)
                .and_then(|index| self.container.child_bounds(index)),
        ) else {
            return;
        };

        let viewport = self.container.viewport_width();
        let leading = ((viewport - first.width) / 2).max(Px::ZERO);
        let trailing = ((viewport - last.width) / 2).max(Px::ZERO);
        self.container
            .insert_slot(0, TabSlot::Padding { width: leading });
        self.container
            .push_slot(TabSlot::Padding { width: trailing });
        debug!(
            leading = leading.0,
            trailing = trailing.0,
            "inserted centering padding"
        );
    }

    /// The host view was attached to a window: center the current tab.
    pub fn on_attached_to_window(&mut self) {
        if let Some(current) = self.view_pager.as_ref().map(PageSource::current_page) {
            self.scroll_to_tab(current.saturating_add(1), Px::ZERO);
        }
    }

    /// Scrolls so slot `tab_index` sits in the middle of the viewport, moved
    /// further by `position_offset`.
    ///
    /// Returns the commanded scroll, or `None` when `tab_index` is outside
    /// `[1, child_count - 1]` or the strip holds a single slot.
    pub fn scroll_to_tab(&mut self, tab_index: usize, position_offset: Px) -> Option<Px> {
        let child_count = self.container.child_count();
        if child_count == 1 || tab_index < 1 || tab_index >= child_count {
            trace!(tab_index, child_count, "scroll to tab skipped");
            return None;
        }

        let selected = self.container.child_bounds(tab_index)?;
        let center = self.container.viewport_width() / 2;
        let target = selected.left - center + selected.width / 2 + position_offset;
        self.container.scroll_to(target);
        Some(target)
    }

    /// Slot showing `page`. Until the first layout inserts the leading
    /// padding, page `p` sits in slot `p`.
    fn slot_of_page(&self, page: usize) -> usize {
        if self.padding_pending {
            page
        } else {
            page.saturating_add(1)
        }
    }

    fn page_of_slot(&self, index: usize) -> Option<usize> {
        if self.padding_pending {
            Some(index)
        } else {
            index.checked_sub(1)
        }
    }

    /// A click on slot `index`: navigates the pager to the tab's page.
    ///
    /// Returns the requested page, or `None` for padding slots and
    /// out-of-range indices.
    pub fn on_tab_click(&mut self, index: usize) -> Option<usize> {
        let page = self
            .page_of_slot(index)
            .filter(|_| self.container.is_tab(index));
        let Some(page) = page else {
            trace!(index, "click outside any tab");
            return None;
        };
        let pager = self.view_pager.as_mut()?;
        pager.set_current_page(page);
        Some(page)
    }

    /// A click at viewport coordinate `x`, routed to the slot under it.
    pub fn on_click_at(&mut self, x: Px) -> Option<usize> {
        let index = self.container.slot_at(x + self.container.scroll_x())?;
        self.on_tab_click(index)
    }

    /// Height to report for the layout given the height of its labels.
    pub fn measured_height(&self, content_height: Px) -> Px {
        self.strip.measured_height(content_height)
    }

    /// One paint pass over a strip `height` tall.
    pub fn draw(&self, canvas: &mut impl IndicatorCanvas, height: Px) -> Option<Indicator> {
        self.strip.draw(&self.container, canvas, height)
    }
}

impl<P, C> PageChangeListener for SlidingTabLayout<P, C>
where
    P: PageSource,
    C: TabContainer,
{
    fn on_page_scrolled(&mut self, position: usize, position_offset: f32, _: Px) {
        let state = self
            .scroll_machine
            .on_page_scrolled(position, position_offset);
        self.strip.set_scroll_state(state, &mut self.container);

        let tab_index = position.saturating_add(1);
        let extra_offset = self
            .container
            .child_bounds(tab_index)
            .map_or(Px::ZERO, |bounds| bounds.width.mul_f32(position_offset));
        self.scroll_to_tab(tab_index, extra_offset);
    }

    fn on_page_selected(&mut self, position: usize) {
        let selected = self.slot_of_page(position);
        for index in 0..self.container.child_count() {
            self.container.set_selected(index, index == selected);
        }
    }

    fn on_page_scroll_state_changed(&mut self, state: PageScrollState) {
        trace!(?state, "pager scroll phase");
        self.page_scroll_state = state;
    }
}
