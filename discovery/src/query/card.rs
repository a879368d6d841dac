//! [`Query`] of the current card.

use std::convert::Infallible;

use crate::{read::Card, Discovery};

use super::Query;

/// Queries the current [`Card`], if the stack isn't exhausted.
#[derive(Clone, Copy, Debug)]
pub struct CurrentCard;

impl<C, L> Query<CurrentCard> for Discovery<C, L> {
    type Ok = Option<Card>;
    type Err = Infallible;

    fn execute(&mut self, _: CurrentCard) -> Result<Self::Ok, Self::Err> {
        Ok(self.stack.current().map(|listing| Card {
            listing: listing.clone(),
            position: self.stack.cursor(),
            total: self.stack.len(),
            image: self.swipe.carousel().index(),
            frame: self.swipe.frame(),
            upcoming: self.stack.upcoming().cloned(),
        }))
    }
}

#[cfg(test)]
mod spec {
    use crate::{
        command::{
            Command as _, EndGesture, MoveGesture, ShowImage, StartGesture,
        },
        domain::{
            swipe::{Point, Step},
            test_listing, Grants,
        },
        infra::InMemory,
        Config, Discovery,
    };

    use super::{CurrentCard, Query as _};

    #[test]
    fn describes_current_card() {
        let catalog =
            InMemory::new(vec![test_listing("a", "1"), test_listing("b", "2")]);
        let mut d =
            Discovery::new(Config::default(), catalog, (), Grants::none())
                .unwrap();
        _ = d.execute(ShowImage(Step::Next)).unwrap();
        assert!(d.execute(StartGesture(Point::new(0.0, 0.0))).unwrap());
        _ = d.execute(MoveGesture(Point::new(50.0, 0.0))).unwrap();

        let card = d.execute(CurrentCard).unwrap().unwrap();

        assert_eq!(card.listing.id.to_string(), "a");
        assert_eq!((card.position, card.total, card.image), (0, 2, 1));
        assert!((card.frame.next_card_scale - 0.95).abs() < 1e-9);
        assert_eq!(
            card.upcoming.map(|l| l.id.to_string()),
            Some("b".to_owned()),
        );
    }

    #[test]
    fn none_when_exhausted() {
        let catalog = InMemory::new(vec![test_listing("a", "1")]);
        let mut d =
            Discovery::new(Config::default(), catalog, (), Grants::none())
                .unwrap();
        assert!(d.execute(StartGesture(Point::new(0.0, 0.0))).unwrap());
        _ = d.execute(MoveGesture(Point::new(150.0, 0.0))).unwrap();
        _ = d.execute(EndGesture).unwrap();

        assert!(d.execute(CurrentCard).unwrap().is_none());
    }
}
