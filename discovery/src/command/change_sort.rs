//! [`Command`] for changing the [`SortKey`].

use derive_more::{Display, Error};
use tracerr::Traced;
use tracing as log;

use crate::{domain::SortKey, read::Snapshot, Discovery};
#[cfg(doc)]
use crate::domain::Grants;

use super::Command;

/// [`Command`] for changing the [`SortKey`].
///
/// A gesture in progress is cancelled if the order changes.
#[derive(Clone, Copy, Debug)]
pub struct ChangeSort(pub SortKey);

impl<C, L> Command<ChangeSort> for Discovery<C, L> {
    /// New visible result.
    type Ok = Snapshot;
    type Err = Traced<ExecutionError>;

    fn execute(
        &mut self,
        ChangeSort(sort): ChangeSort,
    ) -> Result<Self::Ok, Self::Err> {
        if !sort.is_available(&self.grants) {
            log::warn!("`SortKey::{sort:?}` rejected: not granted");
            return Err(tracerr::new!(ExecutionError::Unavailable(sort)));
        }
        if sort == self.sort {
            return Ok(self.snapshot().clone());
        }

        log::debug!("`SortKey` changed: {} -> {sort}", self.sort);
        self.sort = sort;
        Ok(self.reevaluate())
    }
}

/// Error of [`ChangeSort`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum ExecutionError {
    /// [`SortKey`] isn't allowed by the [`Grants`] of the consumer.
    #[display("`SortKey::{_0:?}` is unavailable")]
    Unavailable(#[error(not(source))] SortKey),
}

#[cfg(test)]
mod spec {
    use crate::{
        command::{ChangeSort, Command as _},
        domain::{test_listing, Grants, Role, SortKey},
        infra::InMemory,
        Config, Discovery,
    };

    use super::ExecutionError;

    fn discovery(role: Role) -> Discovery<InMemory> {
        let mut popular = test_listing("b", "5");
        popular.stats.popularity = 90;
        let catalog = InMemory::new(vec![
            test_listing("a", "8"),
            popular,
            test_listing("c", "3"),
        ]);
        Discovery::new(Config::default(), catalog, (), Grants::of(role))
            .unwrap()
    }

    fn ids(d: &Discovery<InMemory>) -> Vec<String> {
        d.snapshot().iter().map(|l| l.id.to_string()).collect()
    }

    #[test]
    fn sorts_result() {
        let mut d = discovery(Role::Buyer);

        _ = d.execute(ChangeSort(SortKey::PriceAsc)).unwrap();
        assert_eq!(ids(&d), ["c", "b", "a"]);

        _ = d.execute(ChangeSort(SortKey::PriceDesc)).unwrap();
        assert_eq!(ids(&d), ["a", "b", "c"]);
        assert_eq!(d.sort(), SortKey::PriceDesc);
    }

    #[test]
    fn rejects_gated_key() {
        let mut d = discovery(Role::Buyer);
        _ = d.execute(ChangeSort(SortKey::AreaAsc)).unwrap();

        let err = d.execute(ChangeSort(SortKey::PopularityDesc)).unwrap_err();

        assert!(matches!(
            err.into_inner(),
            ExecutionError::Unavailable(SortKey::PopularityDesc),
        ));
        assert_eq!(d.sort(), SortKey::AreaAsc);
        assert_eq!(ids(&d), ["a", "b", "c"]);
    }

    #[test]
    fn grants_gated_key() {
        let mut d = discovery(Role::Lister);

        _ = d.execute(ChangeSort(SortKey::PopularityDesc)).unwrap();

        assert_eq!(ids(&d), ["b", "a", "c"]);
    }
}
