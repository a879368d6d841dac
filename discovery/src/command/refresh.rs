//! [`Command`] for refreshing the catalog [`Listings`].

use common::operations::{By, Select};
use tracerr::Traced;
use tracing as log;

use crate::{
    infra::{catalog, Catalog},
    read::{Listings, Snapshot},
    Discovery,
};

use super::Command;

/// [`Command`] for re-reading the [`Listings`] from the [`Catalog`].
///
/// Nothing is re-evaluated if the [`Catalog`] hasn't changed.
#[derive(Clone, Copy, Debug)]
pub struct Refresh;

impl<C, L> Command<Refresh> for Discovery<C, L>
where
    C: Catalog<
        Select<By<Listings, ()>>,
        Ok = Listings,
        Err = Traced<catalog::Error>,
    >,
{
    /// New visible result.
    type Ok = Snapshot;
    type Err = Traced<catalog::Error>;

    fn execute(&mut self, _: Refresh) -> Result<Self::Ok, Self::Err> {
        let listings = self
            .catalog
            .execute(Select(By::all()))
            .map_err(tracerr::wrap!())?;

        if listings.ptr_eq(&self.listings)
            && listings.version() == self.listings.version()
        {
            return Ok(self.snapshot().clone());
        }

        log::debug!(
            "catalog refreshed: version {} -> {}",
            self.listings.version(),
            listings.version(),
        );
        self.listings = listings;
        Ok(self.reevaluate())
    }
}
