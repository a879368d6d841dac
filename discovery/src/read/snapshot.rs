//! [`Snapshot`] definitions.

use std::sync::Arc;

use crate::{
    domain::{listing, Listing},
    read::{catalog::Version, Listings, Summary},
};

/// Filtered and sorted view over catalog [`Listings`].
///
/// Read-only and cheap to clone: every filter change produces a fresh
/// [`Snapshot`] instead of mutating the previous one.
#[derive(Clone, Debug, Default)]
pub struct Snapshot {
    /// [`Listings`] this [`Snapshot`] is taken of.
    listings: Listings,

    /// Indices of the visible [`Listing`]s in the display order.
    order: Arc<[usize]>,
}

impl Snapshot {
    /// Creates a new [`Snapshot`] out of the provided display `order`.
    ///
    /// Every index in `order` must point into `listings`.
    pub(crate) fn new(
        listings: Listings,
        order: impl Into<Arc<[usize]>>,
    ) -> Self {
        let order = order.into();
        debug_assert!(order.iter().all(|&i| i < listings.len()));
        Self { listings, order }
    }

    /// Returns number of visible [`Listing`]s.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Indicates whether nothing is visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns [`Listing`] at the provided display `position`.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Listing> {
        self.order.get(position).map(|&i| &self.listings[i])
    }

    /// Iterates over the visible [`Listing`]s in the display order.
    pub fn iter(
        &self,
    ) -> impl ExactSizeIterator<Item = &Listing> + Clone + '_ {
        self.order.iter().map(|&i| &self.listings[i])
    }

    /// Returns IDs of the visible [`Listing`]s in the display order.
    #[must_use]
    pub fn ids(&self) -> Vec<listing::Id> {
        self.iter().map(|l| l.id.clone()).collect()
    }

    /// Returns [`Listings`] this [`Snapshot`] is taken of.
    #[must_use]
    pub fn listings(&self) -> &Listings {
        &self.listings
    }

    /// Checks whether both [`Snapshot`]s are the same evaluation.
    #[cfg(test)]
    pub(crate) fn shares_order(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.order, &other.order)
    }

    /// Returns [`Version`] of the [`Listings`] this [`Snapshot`] is taken of.
    #[must_use]
    pub fn version(&self) -> Version {
        self.listings.version()
    }

    /// Computes [`Summary`] of the visible [`Listing`]s.
    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary::of(self.iter())
    }
}
