//! Filter/sort [`Engine`] definitions.

use tracing as log;
use xxhash_rust::xxh3;

use crate::{
    domain::{FilterState, SortKey},
    read::{catalog::Version, Listings, Snapshot},
};

/// Narrows the provided [`Listings`] down to the ones passing the provided
/// [`FilterState`], ordered by the provided [`SortKey`].
///
/// The sort is stable: [`Listing`]s equal by the [`SortKey`] keep their
/// catalog order.
///
/// [`Listing`]: crate::domain::Listing
#[must_use]
pub fn evaluate(
    listings: &Listings,
    filter: &FilterState,
    sort: SortKey,
) -> Snapshot {
    let predicates = filter.predicates();

    let mut order: Vec<_> = listings
        .iter()
        .enumerate()
        .filter(|(_, l)| predicates.iter().all(|p| p.matches(l)))
        .map(|(i, _)| i)
        .collect();
    order.sort_by(|&a, &b| sort.compare(&listings[a], &listings[b]));

    Snapshot::new(listings.clone(), order)
}

/// Filter/sort engine remembering its last evaluation.
#[derive(Clone, Debug, Default)]
pub struct Engine {
    /// Last evaluation.
    memo: Option<Memo>,
}

/// Remembered evaluation of an [`Engine`].
#[derive(Clone, Debug)]
struct Memo {
    /// [`Fingerprint`] of the evaluation inputs.
    ///
    /// Only a quick pre-check: the inputs themselves are compared as well.
    fingerprint: Fingerprint,

    /// [`FilterState`] the [`Snapshot`] was evaluated with.
    filter: FilterState,

    /// [`SortKey`] the [`Snapshot`] was evaluated with.
    sort: SortKey,

    /// [`Version`] of the evaluated [`Listings`].
    version: Version,

    /// Evaluated [`Snapshot`].
    snapshot: Snapshot,
}

impl Engine {
    /// Evaluates the provided [`Listings`], reusing the last [`Snapshot`] if
    /// nothing has changed since.
    pub fn evaluate(
        &mut self,
        listings: &Listings,
        filter: &FilterState,
        sort: SortKey,
    ) -> Snapshot {
        let version = listings.version();
        let fingerprint = Fingerprint::new(filter, sort, version);

        if let Some(memo) = &self.memo {
            if memo.fingerprint == fingerprint
                && memo.sort == sort
                && memo.version == version
                && memo.filter == *filter
                && memo.snapshot.listings().ptr_eq(listings)
            {
                log::trace!("`Snapshot` reused");
                return memo.snapshot.clone();
            }
        }

        let snapshot = evaluate(listings, filter, sort);
        log::debug!(
            "`Snapshot` evaluated: {} of {} `Listing`s visible, sorted by {sort}",
            snapshot.len(),
            listings.len(),
        );

        self.memo = Some(Memo {
            fingerprint,
            filter: filter.clone(),
            sort,
            version,
            snapshot: snapshot.clone(),
        });
        snapshot
    }
}

/// Fingerprint of the [`Engine`] evaluation inputs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Fingerprint(u64);

impl Fingerprint {
    /// Computes a new [`Fingerprint`] of the provided inputs.
    fn new(filter: &FilterState, sort: SortKey, version: Version) -> Self {
        use std::hash::Hash as _;

        let mut hasher = xxh3::Xxh3Builder::new().build();
        filter.hash(&mut hasher);
        sort.hash(&mut hasher);
        version.hash(&mut hasher);

        Self(hasher.digest())
    }
}
