//! [`Query`] definition.

pub mod card;
pub mod result;

/// [`Query`] of the [`Discovery`].
///
/// [`Discovery`]: crate::Discovery
pub use common::Handler as Query;

pub use self::{
    card::CurrentCard,
    result::{
        ActiveFilterCount, AvailableSortKeys, ResultSummary, VisibleResult,
    },
};
