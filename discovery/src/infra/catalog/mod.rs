//! [`Catalog`]-related implementations.

#[cfg(feature = "json")]
pub mod json;

use std::{io, sync::Arc};

use common::operations::{By, Select};
use derive_more::{Display, Error as StdError, From};
use tracerr::Traced;

use crate::{
    domain::Listing,
    read::{catalog::Version, Listings},
};

#[cfg(feature = "json")]
pub use self::json::JsonFile;

/// Source of catalog [`Listings`].
pub use common::Handler as Catalog;

/// [`Catalog`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Catalog storage is unreadable.
    #[display("Failed to read catalog: {_0}")]
    Io(io::Error),

    /// Catalog contents are malformed.
    #[cfg(feature = "json")]
    #[display("Failed to parse catalog: {_0}")]
    Json(serde_json::Error),
}

/// [`Catalog`] kept in memory.
#[derive(Clone, Debug, Default)]
pub struct InMemory {
    /// Current [`Listings`].
    listings: Listings,
}

impl InMemory {
    /// Creates a new [`InMemory`] [`Catalog`] of the provided [`Listing`]s.
    #[must_use]
    pub fn new(items: impl Into<Arc<[Listing]>>) -> Self {
        Self {
            listings: Listings::new(items, Version::default()),
        }
    }

    /// Replaces the contents of this [`InMemory`] [`Catalog`], returning
    /// their new [`Version`].
    pub fn replace(&mut self, items: impl Into<Arc<[Listing]>>) -> Version {
        let version = self.listings.version().next();
        self.listings = Listings::new(items, version);
        version
    }
}

impl Catalog<Select<By<Listings, ()>>> for InMemory {
    type Ok = Listings;
    type Err = Traced<Error>;

    fn execute(
        &mut self,
        _: Select<By<Listings, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.listings.clone())
    }
}

#[cfg(test)]
mod spec {
    use common::operations::{By, Select};

    use crate::{domain::test_listing, read::catalog::Version};

    use super::{Catalog as _, InMemory};

    #[test]
    fn replace_bumps_version() {
        let mut catalog = InMemory::new(vec![test_listing("1", "5")]);

        let before = catalog.execute(Select(By::all())).unwrap();
        let version = catalog
            .replace(vec![test_listing("1", "5"), test_listing("2", "6")]);
        let after = catalog.execute(Select(By::all())).unwrap();

        assert_eq!(before.version(), Version::default());
        assert_eq!(after.version(), version);
        assert!(before.version() < after.version());
        assert_eq!(before.len(), 1);
        assert_eq!(after.len(), 2);
    }

    #[test]
    fn selecting_twice_shares_contents() {
        let mut catalog = InMemory::new(vec![test_listing("1", "5")]);

        let first = catalog.execute(Select(By::all())).unwrap();
        let second = catalog.execute(Select(By::all())).unwrap();

        assert!(first.ptr_eq(&second));
    }
}
