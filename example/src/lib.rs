//! Headless showcase: binds a few pages, replays a drag across them and logs
//! every indicator the strip paints.
use std::sync::Arc;

use tessera_sliding_tabs::{
    color::Color,
    colorizer::ColorizerError,
    container::{TabContainer, TabRow, TabView},
    indicator::{Indicator, IndicatorCanvas, IndicatorPath},
    layout::{SlidingTabLayout, SlidingTabLayoutArgs},
    pager::{PageChangeListener, PageScrollState, PageSource, StaticPages},
    px::Px,
};
use tracing::{info, warn};

const SCALE_FACTOR: f64 = 2.0;
const VIEWPORT_WIDTH: Px = Px(720);
const LABEL_HEIGHT: Px = Px(96);
const CHAR_WIDTH: i32 = 18;
const LABEL_PADDING: i32 = 64;

/// Sets up `tracing` for the showcase. `RUST_LOG` overrides the default
/// filter.
pub fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(
            "error,tessera_sliding_tabs=debug,example=info",
        ) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init();
}

/// Canvas that logs fills instead of rasterizing them.
#[derive(Debug, Default)]
pub struct LogCanvas {
    fills: usize,
}

impl LogCanvas {
    /// Number of paths filled so far.
    pub fn fills(&self) -> usize {
        self.fills
    }
}

impl IndicatorCanvas for LogCanvas {
    fn fill_path(&mut self, path: &IndicatorPath, color: Color) {
        self.fills += 1;
        info!(
            points = ?path.points(),
            ?color,
            "fill indicator"
        );
    }
}

fn label_width(tab: &TabView) -> Px {
    Px(tab.title.chars().count() as i32 * CHAR_WIDTH + LABEL_PADDING)
}

/// Builds a layout bound to the showcase pages.
pub fn build_layout() -> Result<SlidingTabLayout<StaticPages, TabRow>, ColorizerError> {
    let row = TabRow::new(VIEWPORT_WIDTH, Arc::new(label_width));
    let args = SlidingTabLayoutArgs::for_density(SCALE_FACTOR).indicator_colors(vec![
        Color::from_argb(0xFF33B5E5),
        Color::from_argb(0xFFAA66CC),
        Color::from_argb(0xFF99CC00),
        Color::from_argb(0xFFFFBB33),
    ]);
    let mut layout = SlidingTabLayout::new(row, args)?;
    layout.set_view_pager(Some(StaticPages::new([
        "Overview",
        "Inbox",
        "Archive",
        "Settings",
        "About",
    ])));
    layout.on_global_layout();
    layout.on_attached_to_window();
    Ok(layout)
}

/// Drags from `from` to the next page in `steps` ticks and settles, painting
/// after every tick.
pub fn replay_drag(
    layout: &mut SlidingTabLayout<StaticPages, TabRow>,
    canvas: &mut LogCanvas,
    from: usize,
    steps: u16,
) -> Vec<Indicator> {
    let height = layout.measured_height(LABEL_HEIGHT);
    let page_width = layout.container().viewport_width();
    let mut painted = Vec::new();

    layout.on_page_scroll_state_changed(PageScrollState::Dragging);
    for step in 0..steps {
        let offset = f32::from(step) / f32::from(steps);
        layout.on_page_scrolled(from, offset, page_width.mul_f32(offset));
        painted.extend(paint(layout, canvas, height));
    }

    layout.on_page_scroll_state_changed(PageScrollState::Settling);
    layout.on_page_scrolled(from + 1, 0.0, Px::ZERO);
    layout.on_page_selected(from + 1);
    if let Some(pager) = layout.view_pager_mut() {
        pager.set_current_page(from + 1);
    }
    layout.on_page_scroll_state_changed(PageScrollState::Idle);
    painted.extend(paint(layout, canvas, height));
    painted
}

fn paint(
    layout: &mut SlidingTabLayout<StaticPages, TabRow>,
    canvas: &mut LogCanvas,
    height: Px,
) -> Option<Indicator> {
    if !layout.container_mut().take_redraw_request() {
        return None;
    }
    let indicator = layout.draw(canvas, height);
    info!(
        state = %layout.scroll_state(),
        scroll_x = layout.container().scroll_x().raw(),
        "frame"
    );
    indicator
}

/// Runs the showcase.
pub fn run() -> Result<(), ColorizerError> {
    let mut layout = build_layout()?;
    let mut canvas = LogCanvas::default();

    replay_drag(&mut layout, &mut canvas, 0, 4);
    replay_drag(&mut layout, &mut canvas, 1, 4);

    let click_x = VIEWPORT_WIDTH / 2;
    match layout.on_click_at(click_x) {
        Some(page) => info!(page, "clicked tab under the viewport center"),
        None => warn!(x = click_x.raw(), "click missed every tab"),
    }
    info!(
        current_page = ?layout.view_pager().map(PageSource::current_page),
        fills = canvas.fills(),
        "showcase finished"
    );
    Ok(())
}
