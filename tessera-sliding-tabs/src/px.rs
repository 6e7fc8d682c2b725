//! Physical and density-independent pixel units used by the tab strip.
//!
//! The tab strip never resolves screen density on its own. Hosts convert
//! their [`Dp`] values once with the density they know about and hand the
//! resulting [`Px`] values to the strip.
//!
//! # Coordinate System
//!
//! - Origin (0, 0) at the top-left corner of the strip
//! - X-axis increases to the right
//! - Y-axis increases downward
//! - Negative coordinates are supported for scrolled-out slots
//!
//! # Example
//!
//! ```
//! use tessera_sliding_tabs::px::{Dp, Px};
//!
//! let footer = Dp(20.0).to_px(2.0);
//! assert_eq!(footer, Px(40));
//! assert_eq!(Px(96) + footer, Px(136));
//! ```

use std::ops::{Add, AddAssign, Div, Sub};

/// A single coordinate value in physical pixel space.
///
/// Supports negative values for scrolling and off-screen positioning.
///
/// # Examples
///
/// ```
/// use tessera_sliding_tabs::px::Px;
///
/// let left = Px(100);
/// let width = Px(-50);
/// assert_eq!(left + width, Px(50));
/// assert_eq!(left / 2, Px(50));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Px(pub i32);

impl Px {
    /// Zero pixels.
    pub const ZERO: Self = Self(0);

    /// Returns the raw i32 value.
    pub fn raw(self) -> i32 {
        self.0
    }

    /// Converts the pixel value to f32.
    pub fn to_f32(self) -> f32 {
        self.0 as f32
    }

    /// Creates a `Px` from an f32 value, truncating toward zero and saturating
    /// at the numeric bounds instead of overflowing.
    ///
    /// # Examples
    ///
    /// ```
    /// use tessera_sliding_tabs::px::Px;
    ///
    /// assert_eq!(Px::saturating_from_f32(42.7), Px(42));
    /// assert_eq!(Px::saturating_from_f32(-42.7), Px(-42));
    /// assert_eq!(Px::saturating_from_f32(f32::MAX), Px(i32::MAX));
    /// ```
    pub fn saturating_from_f32(value: f32) -> Self {
        let clamped_value = value.clamp(i32::MIN as f32, i32::MAX as f32);
        Px(clamped_value as i32)
    }

    /// Multiplies the pixel value by a scalar and truncates the result.
    pub fn mul_f32(self, rhs: f32) -> Self {
        Px::saturating_from_f32(self.to_f32() * rhs)
    }
}

/// A 2D position in physical pixel space.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PxPosition {
    /// The x-coordinate.
    pub x: Px,
    /// The y-coordinate.
    pub y: Px,
}

impl PxPosition {
    /// Creates a new position.
    pub const fn new(x: Px, y: Px) -> Self {
        Self { x, y }
    }
}

/// Density-independent pixels.
///
/// Conversion always takes the density explicitly: the host owns display
/// metrics.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Dp(pub f64);

impl Dp {
    /// Resolves this value to physical pixels for the given scale factor,
    /// truncating toward zero.
    pub fn to_px(self, scale_factor: f64) -> Px {
        let value = (self.0 * scale_factor).clamp(i32::MIN as f64, i32::MAX as f64);
        Px(value as i32)
    }
}

impl Add for Px {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Px(self.0 + rhs.0)
    }
}

impl Sub for Px {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Px(self.0 - rhs.0)
    }
}

impl Div<i32> for Px {
    type Output = Self;

    fn div(self, rhs: i32) -> Self::Output {
        Px(self.0 / rhs)
    }
}

impl AddAssign for Px {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}
