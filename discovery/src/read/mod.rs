//! Read entities definitions.

pub mod card;
pub mod catalog;
pub mod snapshot;
pub mod summary;

pub use self::{
    card::Card, catalog::Listings, snapshot::Snapshot, summary::Summary,
};
