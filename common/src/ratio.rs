//! [`Ratio`]-related definitions.

use derive_more::Display;

/// Floating-point ratio in the `[0, 1]` range.
#[derive(Clone, Copy, Debug, Default, Display, PartialEq, PartialOrd)]
pub struct Ratio(f64);

impl Ratio {
    /// Lowest possible [`Ratio`].
    pub const ZERO: Self = Self(0.0);

    /// Highest possible [`Ratio`].
    pub const ONE: Self = Self(1.0);

    /// Creates a new [`Ratio`] clamping the provided value into the `[0, 1]`
    /// range.
    ///
    /// `NaN` is treated as [`Ratio::ZERO`].
    #[must_use]
    pub fn saturating(val: f64) -> Self {
        if val.is_nan() {
            Self::ZERO
        } else {
            Self(val.clamp(0.0, 1.0))
        }
    }

    /// Returns the inner value of this [`Ratio`].
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}
