//! Page-to-color assignment for the indicator and tab labels.
use thiserror::Error;

use crate::color::Color;

/// Errors raised while installing indicator colors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorizerError {
    /// A circular colorizer needs at least one color to wrap around.
    #[error("indicator color list must contain at least one color")]
    NoColors,
}

/// Maps a zero-based page index to the color used when that page is selected.
///
/// Implemented for any `Fn(usize) -> Color`, so a closure can be installed
/// directly with
/// [`SlidingTabLayout::set_custom_tab_colorizer`](crate::layout::SlidingTabLayout::set_custom_tab_colorizer).
pub trait TabColorizer {
    /// Returns the indicator color for `position`.
    fn indicator_color(&self, position: usize) -> Color;
}

impl<F> TabColorizer for F
where
    F: Fn(usize) -> Color,
{
    fn indicator_color(&self, position: usize) -> Color {
        self(position)
    }
}

/// Colorizer treating its colors as a circular array.
///
/// Providing one color means every tab is indicated with the same color.
///
/// # Examples
///
/// ```
/// use tessera_sliding_tabs::{
///     color::Color,
///     colorizer::{SimpleTabColorizer, TabColorizer},
/// };
///
/// let colorizer = SimpleTabColorizer::new(vec![Color::GREEN, Color::RED]).unwrap();
/// assert_eq!(colorizer.indicator_color(3), Color::RED);
/// assert!(SimpleTabColorizer::new(Vec::<Color>::new()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleTabColorizer {
    colors: Vec<Color>,
}

impl SimpleTabColorizer {
    /// Creates a colorizer over `colors`, rejecting an empty list.
    pub fn new(colors: impl Into<Vec<Color>>) -> Result<Self, ColorizerError> {
        let colors = colors.into();
        if colors.is_empty() {
            return Err(ColorizerError::NoColors);
        }
        Ok(Self { colors })
    }

    /// Creates a colorizer that always returns `color`.
    pub fn single(color: Color) -> Self {
        Self {
            colors: vec![color],
        }
    }

    /// Replaces the colors, rejecting an empty list and keeping the old
    /// colors in that case.
    pub fn set_colors(&mut self, colors: impl Into<Vec<Color>>) -> Result<(), ColorizerError> {
        *self = Self::new(colors)?;
        Ok(())
    }

    /// Returns the configured colors.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

impl TabColorizer for SimpleTabColorizer {
    fn indicator_color(&self, position: usize) -> Color {
        self.colors[position % self.colors.len()]
    }
}
