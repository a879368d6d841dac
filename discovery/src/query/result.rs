//! [`Query`] collection related to the visible result.

use std::convert::Infallible;

use crate::{
    domain::SortKey,
    read::{Snapshot, Summary},
    Discovery,
};
#[cfg(doc)]
use crate::domain::{FilterState, Grants, Listing};

use super::Query;

/// Queries the visible [`Listing`]s in the display order.
#[derive(Clone, Copy, Debug)]
pub struct VisibleResult;

impl<C, L> Query<VisibleResult> for Discovery<C, L> {
    type Ok = Snapshot;
    type Err = Infallible;

    fn execute(&mut self, _: VisibleResult) -> Result<Self::Ok, Self::Err> {
        Ok(self.snapshot().clone())
    }
}

/// Queries number of [`FilterState`] constraints deviating from the
/// defaults.
#[derive(Clone, Copy, Debug)]
pub struct ActiveFilterCount;

impl<C, L> Query<ActiveFilterCount> for Discovery<C, L> {
    type Ok = usize;
    type Err = Infallible;

    fn execute(
        &mut self,
        _: ActiveFilterCount,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.filter.active_count())
    }
}

/// Queries [`Summary`] of the visible [`Listing`]s.
#[derive(Clone, Copy, Debug)]
pub struct ResultSummary;

impl<C, L> Query<ResultSummary> for Discovery<C, L> {
    type Ok = Summary;
    type Err = Infallible;

    fn execute(&mut self, _: ResultSummary) -> Result<Self::Ok, Self::Err> {
        Ok(self.snapshot().summary())
    }
}

/// Queries [`SortKey`]s selectable with the [`Grants`] of the consumer.
#[derive(Clone, Copy, Debug)]
pub struct AvailableSortKeys;

impl<C, L> Query<AvailableSortKeys> for Discovery<C, L> {
    type Ok = Vec<SortKey>;
    type Err = Infallible;

    fn execute(
        &mut self,
        _: AvailableSortKeys,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(SortKey::available(&self.grants).collect())
    }
}

#[cfg(test)]
mod spec {
    use rust_decimal::Decimal;

    use crate::{
        command::{ApplyFilter, ChangeSort, Command as _},
        domain::{test_listing, Grants, Role, SortKey},
        infra::InMemory,
        Config, Discovery,
    };

    use super::{
        ActiveFilterCount, AvailableSortKeys, Query as _, ResultSummary,
        VisibleResult,
    };

    fn discovery(role: Role) -> Discovery<InMemory> {
        let catalog = InMemory::new(vec![
            test_listing("1", "8.5"),
            test_listing("2", "5.2"),
            test_listing("3", "12.3"),
            test_listing("4", "15.8"),
        ]);
        Discovery::new(Config::default(), catalog, (), Grants::of(role))
            .unwrap()
    }

    #[test]
    fn price_filter_and_sort() {
        let mut d = discovery(Role::Buyer);
        let mut filter = d.filter().clone();
        _ = filter.set_price_max(Decimal::from(10));
        _ = d.execute(ApplyFilter(filter)).unwrap();
        _ = d.execute(ChangeSort(SortKey::PriceAsc)).unwrap();

        let visible = d.execute(VisibleResult).unwrap();
        let summary = d.execute(ResultSummary).unwrap();

        assert_eq!(
            visible.iter().map(|l| l.id.to_string()).collect::<Vec<_>>(),
            ["2", "1"],
        );
        assert_eq!(d.execute(ActiveFilterCount).unwrap(), 1);
        assert_eq!(summary.count, 2);
        assert_eq!(summary.average_price, Some("6.85".parse().unwrap()));
    }

    #[test]
    fn sort_keys_follow_grants() {
        let buyer = discovery(Role::Buyer).execute(AvailableSortKeys);
        let lister = discovery(Role::Lister).execute(AvailableSortKeys);
        let (buyer, lister) = (buyer.unwrap(), lister.unwrap());

        assert!(!buyer.contains(&SortKey::SoldDesc));
        assert!(lister.contains(&SortKey::SoldDesc));
        assert_eq!(lister.len(), SortKey::ALL.len());
    }
}
