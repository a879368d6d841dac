//! [`Command`] for resetting the [`FilterState`].

use std::convert::Infallible;

use crate::{domain::FilterState, read::Snapshot, Discovery};

use super::{ApplyFilter, Command};

/// [`Command`] for restoring the unconstrained [`FilterState`].
#[derive(Clone, Copy, Debug)]
pub struct ResetFilter;

impl<C, L> Command<ResetFilter> for Discovery<C, L> {
    /// New visible result.
    type Ok = Snapshot;
    type Err = Infallible;

    fn execute(&mut self, _: ResetFilter) -> Result<Self::Ok, Self::Err> {
        self.execute(ApplyFilter(FilterState::new(self.config.sentinels)))
    }
}

#[cfg(test)]
mod spec {
    use crate::{
        command::{ApplyFilter, Command as _, ResetFilter},
        domain::{test_listing, Grants},
        infra::InMemory,
        Config, Discovery,
    };

    #[test]
    fn is_idempotent() {
        let catalog =
            InMemory::new(vec![test_listing("a", "1"), test_listing("b", "2")]);
        let mut d =
            Discovery::new(Config::default(), catalog, (), Grants::none())
                .unwrap();
        let initial = d.filter().clone();
        let mut filter = initial.clone();
        _ = filter.exclude_top_floor(true).set_floor(5, 7);
        _ = d.execute(ApplyFilter(filter)).unwrap();
        assert!(d.snapshot().is_empty());

        let once = d.execute(ResetFilter).unwrap();
        let after_once = d.filter().clone();
        let twice = d.execute(ResetFilter).unwrap();

        assert_eq!(d.filter(), &initial);
        assert_eq!(after_once, initial);
        assert_eq!(once.len(), 2);
        assert_eq!(once.ids(), twice.ids());
    }
}
