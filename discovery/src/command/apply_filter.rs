//! [`Command`] for applying a [`FilterState`].

use std::convert::Infallible;

use tracing as log;

use crate::{domain::FilterState, read::Snapshot, Discovery};

use super::Command;

/// [`Command`] for applying a [`FilterState`].
///
/// A gesture in progress is cancelled if the result changes.
#[derive(Clone, Debug)]
pub struct ApplyFilter(pub FilterState);

impl<C, L> Command<ApplyFilter> for Discovery<C, L> {
    /// New visible result.
    type Ok = Snapshot;
    type Err = Infallible;

    fn execute(
        &mut self,
        ApplyFilter(filter): ApplyFilter,
    ) -> Result<Self::Ok, Self::Err> {
        if filter == self.filter {
            return Ok(self.snapshot().clone());
        }

        log::debug!(
            "`FilterState` applied: {} active constraints",
            filter.active_count(),
        );
        self.filter = filter;
        Ok(self.reevaluate())
    }
}

#[cfg(test)]
mod spec {
    use rust_decimal::Decimal;

    use crate::{
        command::{ApplyFilter, Command as _, MoveGesture, StartGesture},
        domain::{
            listing::ConstructionStatus, swipe::Point, test_listing, Grants,
        },
        infra::InMemory,
        Config, Discovery,
    };

    fn discovery() -> Discovery<InMemory> {
        let mut building = test_listing("c", "9");
        building.status = ConstructionStatus::Construction;
        let catalog = InMemory::new(vec![
            test_listing("a", "8.5"),
            test_listing("b", "5.2"),
            building,
            test_listing("d", "15.8"),
        ]);
        Discovery::new(Config::default(), catalog, (), Grants::none()).unwrap()
    }

    fn ids(d: &Discovery<InMemory>) -> Vec<String> {
        d.snapshot().iter().map(|l| l.id.to_string()).collect()
    }

    #[test]
    fn narrows_result() {
        let mut d = discovery();
        let mut filter = d.filter().clone();
        _ = filter
            .set_price_max(Decimal::from(10))
            .set_status(ConstructionStatus::Ready);

        let snapshot = d.execute(ApplyFilter(filter)).unwrap();

        assert_eq!(snapshot.len(), 2);
        assert_eq!(ids(&d), ["a", "b"]);
        assert_eq!(d.filter().active_count(), 2);
    }

    #[test]
    fn cancels_gesture_on_change() {
        let mut d = discovery();
        assert!(d.execute(StartGesture(Point::new(0.0, 0.0))).unwrap());
        _ = d.execute(MoveGesture(Point::new(150.0, 0.0))).unwrap();

        let mut filter = d.filter().clone();
        _ = filter.set_price_min(Decimal::from(6));
        _ = d.execute(ApplyFilter(filter)).unwrap();

        assert!(!d.swipe().is_dragging());
        assert_eq!(ids(&d), ["a", "c", "d"]);
    }

    #[test]
    fn same_filter_keeps_gesture() {
        let mut d = discovery();
        assert!(d.execute(StartGesture(Point::new(0.0, 0.0))).unwrap());

        let filter = d.filter().clone();
        _ = d.execute(ApplyFilter(filter)).unwrap();

        assert!(d.swipe().is_dragging());
    }
}
