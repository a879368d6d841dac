//! [`Bounds`]-related definitions.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::Ratio;

/// Closed `[min, max]` range of values.
///
/// Always normalized: `min <= max` holds for every constructed [`Bounds`],
/// whatever order the ends were provided in.
#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize,
)]
#[display("[{min}, {max}]")]
#[serde(
    bound(
        deserialize = "T: Deserialize<'de> + Copy + PartialOrd",
        serialize = "T: Serialize + Clone",
    ),
    from = "(T, T)",
    into = "(T, T)"
)]
pub struct Bounds<T> {
    /// Lower end of these [`Bounds`] (inclusive).
    min: T,

    /// Upper end of these [`Bounds`] (inclusive).
    max: T,
}

impl<T: Copy + PartialOrd> Bounds<T> {
    /// Creates new [`Bounds`] out of the provided ends, swapping them if they
    /// come in the reversed order.
    #[must_use]
    pub fn new(a: T, b: T) -> Self {
        if b < a {
            Self { min: b, max: a }
        } else {
            Self { min: a, max: b }
        }
    }

    /// Returns the lower end of these [`Bounds`].
    #[must_use]
    pub fn min(&self) -> T {
        self.min
    }

    /// Returns the upper end of these [`Bounds`].
    #[must_use]
    pub fn max(&self) -> T {
        self.max
    }

    /// Checks whether the provided `value` lies within these [`Bounds`].
    #[must_use]
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    /// Clamps both ends of these [`Bounds`] into the `outer` ones.
    #[must_use]
    pub fn clamp_into(self, outer: Self) -> Self {
        let clamp = |v: T| {
            if v < outer.min {
                outer.min
            } else if outer.max < v {
                outer.max
            } else {
                v
            }
        };
        Self::new(clamp(self.min), clamp(self.max))
    }
}

impl Bounds<f64> {
    /// Linearly interpolates between the ends of these [`Bounds`].
    #[must_use]
    pub fn lerp(&self, ratio: Ratio) -> f64 {
        self.min + (self.max - self.min) * ratio.get()
    }
}

impl<T: Copy + PartialOrd> From<(T, T)> for Bounds<T> {
    fn from((a, b): (T, T)) -> Self {
        Self::new(a, b)
    }
}

impl<T> From<Bounds<T>> for (T, T) {
    fn from(Bounds { min, max }: Bounds<T>) -> Self {
        (min, max)
    }
}

#[cfg(test)]
mod spec {
    use rust_decimal::Decimal;

    use crate::Ratio;

    use super::Bounds;

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn normalizes_reversed_ends() {
        let bounds = Bounds::new(decimal("10"), decimal("2.5"));

        assert_eq!(bounds.min(), decimal("2.5"));
        assert_eq!(bounds.max(), decimal("10"));
        assert_eq!(bounds, Bounds::new(decimal("2.5"), decimal("10")));
    }

    #[test]
    fn contains_is_inclusive() {
        let bounds = Bounds::new(3_u16, 7);

        assert!(bounds.contains(3));
        assert!(bounds.contains(5));
        assert!(bounds.contains(7));
        assert!(!bounds.contains(2));
        assert!(!bounds.contains(8));
    }

    #[test]
    fn clamps_into_outer() {
        let outer = Bounds::new(0_u16, 100);

        assert_eq!(Bounds::new(5, 500).clamp_into(outer), Bounds::new(5, 100));
        assert_eq!(
            Bounds::new(200, 500).clamp_into(outer),
            Bounds::new(100, 100),
        );
    }

    #[test]
    fn lerp() {
        let bounds = Bounds::new(0.9, 1.0);

        assert!((bounds.lerp(Ratio::ZERO) - 0.9).abs() < f64::EPSILON);
        assert!((bounds.lerp(Ratio::ONE) - 1.0).abs() < f64::EPSILON);
        assert!((bounds.lerp(Ratio::saturating(0.5)) - 0.95).abs() < 1e-9);
    }

    #[test]
    fn to_string() {
        assert_eq!(Bounds::new(7_u16, 3).to_string(), "[3, 7]");
    }
}
