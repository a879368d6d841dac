//! JSON file [`Catalog`] implementation.

use std::{fs, path::PathBuf};

use common::operations::{By, Select};
use tracerr::Traced;
use tracing as log;
use xxhash_rust::xxh3;

use crate::{
    domain::Listing,
    infra::catalog::{Catalog, Error, InMemory},
    read::Listings,
};

/// [`Catalog`] stored in a JSON file as an array of [`Listing`]s.
///
/// The file is re-read on every selection, while the [`Listings`] version is
/// bumped only when its contents actually change.
#[derive(Clone, Debug)]
pub struct JsonFile {
    /// Path to the JSON file.
    path: PathBuf,

    /// Digest of the last loaded file contents.
    digest: Option<u64>,

    /// Last loaded [`Listings`].
    loaded: InMemory,
}

impl JsonFile {
    /// Creates a new [`JsonFile`] [`Catalog`] reading the provided `path`.
    ///
    /// Nothing is read until the first selection.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            digest: None,
            loaded: InMemory::default(),
        }
    }

    /// Parses [`Listing`]s out of the provided JSON `bytes`.
    ///
    /// # Errors
    ///
    /// If the `bytes` don't represent an array of [`Listing`]s.
    pub fn parse(bytes: &[u8]) -> Result<Vec<Listing>, Traced<Error>> {
        let listings: Vec<Listing> = serde_json::from_slice(bytes)
            .map_err(tracerr::from_and_wrap!(=> Error))?;

        for l in listings.iter().filter(|l| !l.is_consistent()) {
            log::warn!("`Listing(id: {})` is inconsistent", l.id);
        }

        Ok(listings)
    }

    /// Loads the file, if it has changed since the last time.
    fn load(&mut self) -> Result<(), Traced<Error>> {
        let bytes = fs::read(&self.path)
            .map_err(tracerr::from_and_wrap!(=> Error))?;

        let digest = xxh3::xxh3_64(&bytes);
        if self.digest == Some(digest) {
            return Ok(());
        }

        let listings = Self::parse(&bytes)?;
        let count = listings.len();
        let version = self.loaded.replace(listings);
        self.digest = Some(digest);

        log::debug!(
            "{count} `Listing`s loaded from `{}`, version {version}",
            self.path.display(),
        );
        Ok(())
    }
}

impl Catalog<Select<By<Listings, ()>>> for JsonFile {
    type Ok = Listings;
    type Err = Traced<Error>;

    fn execute(
        &mut self,
        select: Select<By<Listings, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.load()?;
        self.loaded.execute(select).map_err(tracerr::wrap!())
    }
}
