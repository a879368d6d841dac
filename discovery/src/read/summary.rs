//! [`Summary`] definitions.

use common::Bounds;
use itertools::{Itertools as _, MinMaxResult};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{
    listing::{Price, PricePerArea},
    Listing,
};

/// Aggregate metrics of a result set, shown in list and map headers.
///
/// Every metric is [`None`] for an empty result set.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Summary {
    /// Number of [`Listing`]s.
    pub count: usize,

    /// Average [`Price`].
    pub average_price: Option<Price>,

    /// Lowest and highest [`Price`].
    pub price_range: Option<Bounds<Price>>,

    /// Average [`PricePerArea`].
    pub average_price_per_area: Option<PricePerArea>,
}

impl Summary {
    /// Computes a [`Summary`] of the provided [`Listing`]s.
    pub fn of<'a, I>(listings: I) -> Self
    where
        I: IntoIterator<Item = &'a Listing>,
        I::IntoIter: Clone,
    {
        let listings = listings.into_iter();

        let price_range = match listings.clone().map(|l| l.price).minmax() {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(p) => Some(Bounds::new(p, p)),
            MinMaxResult::MinMax(min, max) => Some(Bounds::new(min, max)),
        };

        Self {
            count: listings.clone().count(),
            average_price: average(listings.clone().map(|l| l.price)),
            price_range,
            average_price_per_area: average(
                listings.map(|l| l.price_per_area),
            ),
        }
    }
}

/// Computes the arithmetic mean of the provided `values`.
///
/// [`None`] if there are no `values` or their sum overflows.
fn average(values: impl Iterator<Item = Decimal>) -> Option<Decimal> {
    let (sum, n) = values.fold((Some(Decimal::ZERO), 0_u64), |(sum, n), v| {
        (sum.and_then(|s| s.checked_add(v)), n + 1)
    });
    if n == 0 {
        return None;
    }
    sum?.checked_div(Decimal::from(n))
}
