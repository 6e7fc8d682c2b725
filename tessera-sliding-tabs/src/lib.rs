//! A horizontally scrolling tab strip kept in sync with a pager.
//!
//! Tabs are laid out in a row, one per page. While the pager is dragged the
//! row scrolls so the active tab stays centered, and a triangular indicator
//! slides between tabs, blending from one page's color into the next.
//!
//! # Usage
//!
//! The host owns the actual views. It hands the layout a [`container::TabContainer`]
//! (or uses the headless [`container::TabRow`]), binds a [`pager::PageSource`],
//! and forwards pager, layout and click events.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use tessera_sliding_tabs::{
//!     color::Color,
//!     container::{TabRow, TabView},
//!     indicator::{IndicatorCanvas, IndicatorPath},
//!     layout::{SlidingTabLayout, SlidingTabLayoutArgs},
//!     pager::{PageChangeListener, StaticPages},
//!     px::Px,
//! };
//!
//! struct Fills(Vec<Color>);
//!
//! impl IndicatorCanvas for Fills {
//!     fn fill_path(&mut self, _path: &IndicatorPath, color: Color) {
//!         self.0.push(color);
//!     }
//! }
//!
//! let row = TabRow::new(Px(320), Arc::new(|_: &TabView| Px(100)));
//! let args = SlidingTabLayoutArgs::default().indicator_colors(vec![Color::GREEN, Color::RED]);
//! let mut layout = SlidingTabLayout::new(row, args).unwrap();
//! layout.set_view_pager(Some(StaticPages::new(["Green", "Red"])));
//! layout.on_global_layout();
//!
//! layout.on_page_scrolled(0, 0.0, Px(0));
//! let mut fills = Fills(Vec::new());
//! layout.draw(&mut fills, Px(68));
//! assert_eq!(fills.0, vec![Color::GREEN]);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod color;
pub mod colorizer;
pub mod container;
pub mod indicator;
pub mod layout;
pub mod pager;
pub mod px;
pub mod scroll_state;
pub mod tab_strip;

pub use color::Color;
pub use layout::{SlidingTabLayout, SlidingTabLayoutArgs, SlidingTabsDefaults};
pub use px::{Dp, Px};
pub use scroll_state::{ScrollState, ScrollStateMachine};
