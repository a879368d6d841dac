//! Catalog read definitions.

use std::{ops::Deref, sync::Arc};

use derive_more::Display;

use crate::domain::Listing;

/// Immutable catalog contents supplied by a [`Catalog`].
///
/// [`Catalog`]: crate::infra::Catalog
#[derive(Clone, Debug)]
pub struct Listings {
    /// [`Listing`]s in the catalog order.
    items: Arc<[Listing]>,

    /// [`Version`] of these [`Listings`].
    version: Version,
}

impl Listings {
    /// Creates new [`Listings`] of the provided [`Version`].
    #[must_use]
    pub fn new(items: impl Into<Arc<[Listing]>>, version: Version) -> Self {
        Self {
            items: items.into(),
            version,
        }
    }

    /// Returns [`Version`] of these [`Listings`].
    #[must_use]
    pub fn version(&self) -> Version {
        self.version
    }

    /// Checks whether both [`Listings`] share the same contents.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }
}

impl Default for Listings {
    fn default() -> Self {
        Self::new(Vec::new(), Version::default())
    }
}

impl Deref for Listings {
    type Target = [Listing];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

/// Version of catalog [`Listings`], bumped on every contents change.
#[derive(
    Clone, Copy, Debug, Default, Display, Eq, Hash, Ord, PartialEq, PartialOrd,
)]
pub struct Version(u64);

impl Version {
    /// Returns the [`Version`] following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}
