//! Properties of the filter/sort evaluation and the swipe decisions.

use std::collections::BTreeSet;

use discovery::{
    command::{Command as _, EndGesture, MoveGesture, StartGesture},
    domain::{
        engine::evaluate,
        listing::{
            Amenities, Amenity, ConstructionStatus, Developer, District, Id,
            Media, Proximity, RoomClass, Stats,
        },
        swipe::{Point, Release, Swipe},
        Choice, Decision, FilterState, Grants, Listing, SortKey,
    },
    infra::InMemory,
    read::{catalog::Version, Listings},
    Config, Discovery,
};
use proptest::{prelude::*, sample::select};
use rust_decimal::Decimal;

const DISTRICTS: &[&str] = &["Central", "Riverside", "Harbor"];

const DEVELOPERS: &[&str] = &["Northstar", "Granite"];

const AMENITIES: &[&str] = &["parking", "balcony", "gym"];

prop_compose! {
    fn listing()(
        price in 0_i64..2000,
        area in 15_i64..250,
        (floor, max_floor) in (1_u16..30).prop_flat_map(|f| (Just(f), f..40)),
        rooms in select(RoomClass::ALL),
        status in select(ConstructionStatus::ALL),
        district in select(DISTRICTS),
        developer in select(DEVELOPERS),
        amenities in prop::collection::btree_set(select(AMENITIES), 0..=3),
        (transport, school, shops) in any::<(bool, bool, bool)>(),
        popularity in 0_u32..100,
        sold in 0_u32..50,
    ) -> Listing {
        let price = Decimal::new(price, 1);
        let area = Decimal::from(area);
        Listing {
            id: Id::from(""),
            price,
            price_per_area: (price * Decimal::from(1000) / area).round_dp(1),
            area,
            floor,
            max_floor,
            rooms,
            status,
            district: District::new(district).unwrap(),
            developer: Developer::new(developer).unwrap(),
            amenities: amenities
                .into_iter()
                .map(|a| Amenity::new(a).unwrap())
                .collect::<Amenities>(),
            proximity: Proximity { transport, school, shops },
            stats: Stats { popularity, sold },
            media: Media::default(),
        }
    }
}

fn catalog() -> impl Strategy<Value = Vec<Listing>> {
    prop::collection::vec(listing(), 0..40).prop_map(|mut items| {
        for (i, l) in items.iter_mut().enumerate() {
            l.id = Id::from(i.to_string());
        }
        items
    })
}

prop_compose! {
    fn filter_state()(
        price in prop::option::of((0_i64..2000, 0_i64..2000)),
        area in prop::option::of((0_i64..300, 0_i64..300)),
        floor in prop::option::of((0_u16..40, 0_u16..40)),
        rooms in prop::option::of(select(RoomClass::ALL)),
        status in prop::option::of(select(ConstructionStatus::ALL)),
        district in prop::option::of(select(DISTRICTS)),
        developer in prop::option::of(select(DEVELOPERS)),
        amenities in prop::collection::btree_set(select(AMENITIES), 0..=2),
        (transport, school, shops) in any::<(bool, bool, bool)>(),
        (first, top) in any::<(bool, bool)>(),
    ) -> FilterState {
        let mut filter = FilterState::default();
        if let Some((min, max)) = price {
            _ = filter.set_price(Decimal::new(min, 1), Decimal::new(max, 1));
        }
        if let Some((min, max)) = area {
            _ = filter.set_area(Decimal::from(min), Decimal::from(max));
        }
        if let Some((min, max)) = floor {
            _ = filter.set_floor(min, max);
        }
        for a in amenities {
            _ = filter.require_amenity(Amenity::new(a).unwrap());
        }
        _ = filter
            .set_rooms(rooms)
            .set_status(status)
            .set_district(district.map(|d| District::new(d).unwrap()))
            .set_developer(developer.map(|d| Developer::new(d).unwrap()))
            .set_proximity(Proximity { transport, school, shops })
            .exclude_first_floor(first)
            .exclude_top_floor(top);
        filter
    }
}

/// Checks the provided [`Listing`] against the provided [`FilterState`] by
/// reading its fields directly.
///
/// Generated [`Listing`]s always lie within the default sentinels, so a plain
/// range check agrees with an unconstrained one.
fn admits(filter: &FilterState, l: &Listing) -> bool {
    fn chosen<T: PartialEq>(choice: &Choice<T>, value: &T) -> bool {
        match choice {
            Choice::Any => true,
            Choice::Exactly(v) => v == value,
        }
    }

    let (price, area, floor) = (filter.price(), filter.area(), filter.floor());
    let proximity = filter.proximity();

    price.min() <= l.price
        && l.price <= price.max()
        && area.min() <= l.area
        && l.area <= area.max()
        && floor.min() <= l.floor
        && l.floor <= floor.max()
        && chosen(filter.rooms(), &l.rooms)
        && chosen(filter.status(), &l.status)
        && chosen(filter.district(), &l.district)
        && chosen(filter.developer(), &l.developer)
        && filter.amenities().iter().all(|a| l.amenities.contains(a))
        && (!proximity.transport || l.proximity.transport)
        && (!proximity.school || l.proximity.school)
        && (!proximity.shops || l.proximity.shops)
        && !(filter.excludes_first_floor() && l.floor == 1)
        && !(filter.excludes_top_floor() && l.floor == l.max_floor)
}

fn versioned(items: Vec<Listing>) -> Listings {
    Listings::new(items, Version::default())
}

fn ids<'a>(items: impl Iterator<Item = &'a Listing>) -> Vec<String> {
    items.map(|l| l.id.to_string()).collect()
}

fn position(l: &Listing) -> usize {
    l.id.to_string().parse().unwrap()
}

/// Gesture event fed to a [`Swipe`].
#[derive(Clone, Copy, Debug)]
enum Event {
    Start(f64, f64),
    Move(f64, f64),
    End,
    Cancel,
}

fn event() -> impl Strategy<Value = Event> {
    prop_oneof![
        (-300.0..300.0, -300.0..300.0).prop_map(|(x, y)| Event::Start(x, y)),
        (-300.0..300.0, -300.0..300.0).prop_map(|(x, y)| Event::Move(x, y)),
        Just(Event::End),
        Just(Event::Cancel),
    ]
}

proptest! {
    /// A listing is visible if and only if every one of its fields satisfies
    /// the filter.
    #[test]
    fn filtering_is_conjunctive(items in catalog(), filter in filter_state()) {
        let listings = versioned(items);

        let snapshot = evaluate(&listings, &filter, SortKey::Catalog);

        let expected = listings.iter().filter(|l| admits(&filter, l));
        prop_assert_eq!(ids(snapshot.iter()), ids(expected));
    }

    /// Requiring one more proximity flag can only narrow the result.
    #[test]
    fn proximity_flags_are_monotonic(
        items in catalog(),
        filter in filter_state(),
        flag in 0_usize..3,
    ) {
        let listings = versioned(items);
        let mut narrower = filter.clone();
        let mut proximity = filter.proximity();
        match flag {
            0 => proximity.transport = true,
            1 => proximity.school = true,
            _ => proximity.shops = true,
        }
        _ = narrower.set_proximity(proximity);

        let wide: BTreeSet<_> =
            ids(evaluate(&listings, &filter, SortKey::Catalog).iter())
                .into_iter()
                .collect();
        let narrow: BTreeSet<_> =
            ids(evaluate(&listings, &narrower, SortKey::Catalog).iter())
                .into_iter()
                .collect();

        prop_assert!(narrow.is_subset(&wide));
        prop_assert!(narrower.active_count() >= filter.active_count());
    }

    /// Listings equal by the sort key keep their catalog order.
    #[test]
    fn sort_is_stable(
        items in catalog(),
        filter in filter_state(),
        sort in select(SortKey::ALL),
    ) {
        let listings = versioned(items);

        let snapshot = evaluate(&listings, &filter, sort);
        let sorted: Vec<_> = snapshot.iter().collect();

        for pair in sorted.windows(2) {
            let order = sort.compare(pair[0], pair[1]);
            prop_assert!(order.is_le());
            if order.is_eq() {
                prop_assert!(position(pair[0]) < position(pair[1]));
            }
        }
    }

    /// Resetting twice is the same as resetting once.
    #[test]
    fn reset_is_idempotent(items in catalog(), filter in filter_state()) {
        let listings = versioned(items);
        let mut once = filter.clone();
        once.reset();
        let mut twice = once.clone();
        twice.reset();

        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(&once, &FilterState::default());
        prop_assert_eq!(once.active_count(), 0);
        prop_assert_eq!(
            ids(evaluate(&listings, &once, SortKey::Catalog).iter()),
            ids(listings.iter()),
        );
    }

    /// Every gesture yields at most one decision, and only a release beyond
    /// the threshold yields one.
    #[test]
    fn decisions_are_exclusive(
        events in prop::collection::vec(event(), 0..60),
    ) {
        let mut swipe = Swipe::default();
        let threshold = swipe.config().threshold;
        let mut started = 0_usize;
        let mut decided = 0_usize;

        for event in events {
            match event {
                Event::Start(x, y) => {
                    if swipe.start(Point::new(x, y), Id::from("card")) {
                        started += 1;
                    }
                }
                Event::Move(x, y) => {
                    _ = swipe.drag(Point::new(x, y));
                }
                Event::End => {
                    let offset = swipe.offset();
                    let dragging = swipe.is_dragging();
                    match swipe.end() {
                        Release::Decided(verdict, _) => {
                            decided += 1;
                            prop_assert!(dragging);
                            prop_assert!(offset.dx.abs() > threshold);
                            prop_assert_eq!(
                                verdict.decision(),
                                if offset.dx > 0.0 {
                                    Decision::Accept
                                } else {
                                    Decision::Reject
                                },
                            );
                        }
                        Release::SnapBack(_) => {
                            prop_assert!(dragging);
                            prop_assert!(offset.dx.abs() <= threshold);
                        }
                        Release::Ignored => {
                            prop_assert!(!dragging);
                        }
                    }
                }
                Event::Cancel => {
                    prop_assert!(swipe.cancel().verdict().is_none());
                }
            }
            prop_assert!(decided <= started);
        }
    }

    /// The cursor advances by exactly one per decision and never passes the
    /// end of the stack.
    #[test]
    fn cursor_advances_monotonically(
        items in catalog(),
        swipes in prop::collection::vec(-250.0_f64..250.0, 0..60),
    ) {
        let len = items.len();
        let mut d = Discovery::new(
            Config::default(),
            InMemory::new(items),
            Vec::<(Decision, Id)>::new(),
            Grants::none(),
        )
        .unwrap();

        for dx in swipes {
            let before = d.stack().cursor();
            let started =
                d.execute(StartGesture(Point::new(0.0, 0.0))).unwrap();
            _ = d.execute(MoveGesture(Point::new(dx, 0.0))).unwrap();
            let release = d.execute(EndGesture).unwrap();
            let after = d.stack().cursor();

            if release.verdict().is_some() {
                prop_assert!(started);
                prop_assert_eq!(after, before + 1);
            } else {
                prop_assert_eq!(after, before);
            }
            prop_assert!(after <= len);
            prop_assert_eq!(d.listener().len(), after);
        }
    }
}
