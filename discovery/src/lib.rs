//! Property discovery engine: narrows a catalog of [`Listing`]s down with
//! filters and sorting, and turns card swipes into decisions upon them.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod infra;
pub mod query;
pub mod read;

#[cfg(test)]
use proptest as _;

use common::operations::{By, Select};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        swipe, CardStack, Engine, FilterState, Grants, Sentinels, SortKey,
    },
    infra::{catalog, Catalog},
    read::{Listings, Snapshot},
};
#[cfg(doc)]
use crate::domain::{Listener, Listing};

pub use self::{command::Command, query::Query};

/// [`Discovery`] configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Config {
    /// [`swipe::Config`] of the card stack.
    pub swipe: swipe::Config,

    /// [`Sentinels`] of the [`FilterState`].
    pub sentinels: Sentinels,
}

/// Property discovery service.
///
/// Wires the catalog through the filter/sort [`Engine`] into the visible
/// result and the [`CardStack`], whose cards are decided upon with a
/// [`swipe::Swipe`] and reported to a [`Listener`].
#[derive(Debug)]
pub struct Discovery<C, L = ()> {
    /// [`Config`] of this [`Discovery`].
    config: Config,

    /// [`Catalog`] of this [`Discovery`].
    catalog: C,

    /// [`Listener`] of the decisions.
    listener: L,

    /// [`Grants`] of the consumer.
    grants: Grants,

    /// Current [`FilterState`].
    filter: FilterState,

    /// Current [`SortKey`].
    sort: SortKey,

    /// Filter/sort [`Engine`].
    engine: Engine,

    /// Last [`Listings`] received from the [`Catalog`].
    listings: Listings,

    /// [`CardStack`] over the current [`Snapshot`].
    stack: CardStack,

    /// [`swipe::Swipe`] of the current card.
    swipe: swipe::Swipe,
}

impl<C, L> Discovery<C, L> {
    /// Creates a new [`Discovery`] loading the [`Listings`] from the provided
    /// [`Catalog`].
    ///
    /// # Errors
    ///
    /// If the [`Catalog`] fails to provide its [`Listings`].
    pub fn new(
        config: Config,
        mut catalog: C,
        listener: L,
        grants: Grants,
    ) -> Result<Self, Traced<catalog::Error>>
    where
        C: Catalog<
            Select<By<Listings, ()>>,
            Ok = Listings,
            Err = Traced<catalog::Error>,
        >,
    {
        let listings = catalog
            .execute(Select(By::all()))
            .map_err(tracerr::wrap!())?;

        let mut this = Self {
            config,
            catalog,
            listener,
            grants,
            filter: FilterState::new(config.sentinels),
            sort: SortKey::default(),
            engine: Engine::default(),
            listings,
            stack: CardStack::default(),
            swipe: swipe::Swipe::new(config.swipe),
        };
        _ = this.reevaluate();

        Ok(this)
    }

    /// Returns [`Config`] of this [`Discovery`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns [`Catalog`] of this [`Discovery`].
    #[must_use]
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Returns [`Listener`] of this [`Discovery`].
    #[must_use]
    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// Returns [`Grants`] of the consumer.
    #[must_use]
    pub fn grants(&self) -> &Grants {
        &self.grants
    }

    /// Returns the current [`FilterState`].
    #[must_use]
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Returns the current [`SortKey`].
    #[must_use]
    pub fn sort(&self) -> SortKey {
        self.sort
    }

    /// Returns the current [`Snapshot`].
    #[must_use]
    pub fn snapshot(&self) -> &Snapshot {
        self.stack.snapshot()
    }

    /// Returns [`CardStack`] of this [`Discovery`].
    #[must_use]
    pub fn stack(&self) -> &CardStack {
        &self.stack
    }

    /// Returns [`swipe::Swipe`] of the current card.
    #[must_use]
    pub fn swipe(&self) -> &swipe::Swipe {
        &self.swipe
    }

    /// Re-evaluates the current [`Snapshot`] and hands it to the
    /// [`CardStack`].
    ///
    /// A gesture in progress is cancelled, since its card may disappear.
    fn reevaluate(&mut self) -> Snapshot {
        if self.swipe.is_dragging() {
            _ = self.swipe.cancel();
            log::debug!("gesture cancelled by re-evaluation");
        }

        let snapshot =
            self.engine.evaluate(&self.listings, &self.filter, self.sort);

        let current = self.stack.current().map(|l| l.id.clone());
        self.stack.replace(snapshot.clone());
        if self.stack.current().map(|l| &l.id) != current.as_ref() {
            self.swipe.reset();
        }

        snapshot
    }
}
