//! [`FilterState`] definitions.

pub mod predicate;

use common::Bounds;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;

use crate::domain::listing::{
    Amenities, Amenity, Area, ConstructionStatus, Developer, District, Floor,
    Listing, Price, Proximity, RoomClass,
};

pub use self::predicate::Predicate;

/// Sentinel [`Bounds`] of the ranged attributes, meaning "unconstrained".
///
/// Defaults are wide enough to include every legal value of the domain:
/// - price: `[0, 100000]` millions;
/// - area: `[0, 100000]` square meters;
/// - floor: `[0, 500]`.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    SmartDefault,
)]
#[serde(default)]
pub struct Sentinels {
    /// Sentinel price [`Bounds`].
    #[default(Bounds::new(Decimal::ZERO, Decimal::from(100_000)))]
    pub price: Bounds<Price>,

    /// Sentinel area [`Bounds`].
    #[default(Bounds::new(Decimal::ZERO, Decimal::from(100_000)))]
    pub area: Bounds<Area>,

    /// Sentinel floor [`Bounds`].
    #[default(Bounds::new(0, 500))]
    pub floor: Bounds<Floor>,
}

/// Categorical constraint.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(
    bound(
        deserialize = "T: Deserialize<'de>",
        serialize = "T: Serialize + Clone",
    ),
    from = "Option<T>",
    into = "Option<T>"
)]
pub enum Choice<T> {
    /// Any value matches.
    Any,

    /// Only the exact value matches.
    Exactly(T),
}

impl<T> Default for Choice<T> {
    fn default() -> Self {
        Self::Any
    }
}

impl<T> From<T> for Choice<T> {
    fn from(value: T) -> Self {
        Self::Exactly(value)
    }
}

impl<T> From<Option<T>> for Choice<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Any, Self::Exactly)
    }
}

impl<T> From<Choice<T>> for Option<T> {
    fn from(choice: Choice<T>) -> Self {
        match choice {
            Choice::Any => None,
            Choice::Exactly(v) => Some(v),
        }
    }
}

/// Filter state describing which [`Listing`]s are visible.
///
/// Every field always has a well-defined value: setters normalize their input
/// (reversed ranges are swapped, out-of-sentinel ends are clamped) instead of
/// failing.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct FilterState {
    /// [`Sentinels`] this [`FilterState`] was created with.
    sentinels: Sentinels,

    /// Requested price [`Bounds`].
    price: Bounds<Price>,

    /// Requested area [`Bounds`].
    area: Bounds<Area>,

    /// Requested floor [`Bounds`].
    floor: Bounds<Floor>,

    /// Requested [`RoomClass`].
    rooms: Choice<RoomClass>,

    /// Requested [`ConstructionStatus`].
    status: Choice<ConstructionStatus>,

    /// Requested [`District`].
    district: Choice<District>,

    /// Requested [`Developer`].
    developer: Choice<Developer>,

    /// Required [`Amenities`].
    amenities: Amenities,

    /// Required [`Proximity`].
    proximity: Proximity,

    /// Indicator whether first floor [`Listing`]s are hidden.
    exclude_first_floor: bool,

    /// Indicator whether top floor [`Listing`]s are hidden.
    exclude_top_floor: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(Sentinels::default())
    }
}

impl FilterState {
    /// Creates a new unconstrained [`FilterState`].
    #[must_use]
    pub fn new(sentinels: Sentinels) -> Self {
        Self {
            sentinels,
            price: sentinels.price,
            area: sentinels.area,
            floor: sentinels.floor,
            rooms: Choice::Any,
            status: Choice::Any,
            district: Choice::Any,
            developer: Choice::Any,
            amenities: Amenities::new(),
            proximity: Proximity::default(),
            exclude_first_floor: false,
            exclude_top_floor: false,
        }
    }

    /// Restores the unconstrained defaults of this [`FilterState`].
    pub fn reset(&mut self) {
        *self = Self::new(self.sentinels);
    }

    /// Returns [`Sentinels`] of this [`FilterState`].
    #[must_use]
    pub fn sentinels(&self) -> &Sentinels {
        &self.sentinels
    }

    /// Returns the requested price [`Bounds`].
    #[must_use]
    pub fn price(&self) -> Bounds<Price> {
        self.price
    }

    /// Requests the price to lie within the provided range.
    pub fn set_price(&mut self, min: Price, max: Price) -> &mut Self {
        self.price = Bounds::new(min, max).clamp_into(self.sentinels.price);
        self
    }

    /// Requests the price to be not lower than the provided one.
    pub fn set_price_min(&mut self, min: Price) -> &mut Self {
        self.set_price(min, self.price.max())
    }

    /// Requests the price to be not higher than the provided one.
    pub fn set_price_max(&mut self, max: Price) -> &mut Self {
        self.set_price(self.price.min(), max)
    }

    /// Returns the requested area [`Bounds`].
    #[must_use]
    pub fn area(&self) -> Bounds<Area> {
        self.area
    }

    /// Requests the area to lie within the provided range.
    pub fn set_area(&mut self, min: Area, max: Area) -> &mut Self {
        self.area = Bounds::new(min, max).clamp_into(self.sentinels.area);
        self
    }

    /// Returns the requested floor [`Bounds`].
    #[must_use]
    pub fn floor(&self) -> Bounds<Floor> {
        self.floor
    }

    /// Requests the floor to lie within the provided range.
    pub fn set_floor(&mut self, min: Floor, max: Floor) -> &mut Self {
        self.floor = Bounds::new(min, max).clamp_into(self.sentinels.floor);
        self
    }

    /// Returns the requested [`RoomClass`].
    #[must_use]
    pub fn rooms(&self) -> &Choice<RoomClass> {
        &self.rooms
    }

    /// Requests the provided [`RoomClass`].
    pub fn set_rooms(
        &mut self,
        rooms: impl Into<Choice<RoomClass>>,
    ) -> &mut Self {
        self.rooms = rooms.into();
        self
    }

    /// Returns the requested [`ConstructionStatus`].
    #[must_use]
    pub fn status(&self) -> &Choice<ConstructionStatus> {
        &self.status
    }

    /// Requests the provided [`ConstructionStatus`].
    pub fn set_status(
        &mut self,
        status: impl Into<Choice<ConstructionStatus>>,
    ) -> &mut Self {
        self.status = status.into();
        self
    }

    /// Returns the requested [`District`].
    #[must_use]
    pub fn district(&self) -> &Choice<District> {
        &self.district
    }

    /// Requests the provided [`District`].
    pub fn set_district(
        &mut self,
        district: impl Into<Choice<District>>,
    ) -> &mut Self {
        self.district = district.into();
        self
    }

    /// Returns the requested [`Developer`].
    #[must_use]
    pub fn developer(&self) -> &Choice<Developer> {
        &self.developer
    }

    /// Requests the provided [`Developer`].
    pub fn set_developer(
        &mut self,
        developer: impl Into<Choice<Developer>>,
    ) -> &mut Self {
        self.developer = developer.into();
        self
    }

    /// Returns the required [`Amenities`].
    #[must_use]
    pub fn amenities(&self) -> &Amenities {
        &self.amenities
    }

    /// Adds the provided [`Amenity`] to the required ones.
    pub fn require_amenity(&mut self, amenity: Amenity) -> &mut Self {
        _ = self.amenities.insert(amenity);
        self
    }

    /// Removes the provided [`Amenity`] from the required ones.
    pub fn drop_amenity(&mut self, amenity: &Amenity) -> &mut Self {
        _ = self.amenities.remove(amenity);
        self
    }

    /// Returns the required [`Proximity`].
    #[must_use]
    pub fn proximity(&self) -> Proximity {
        self.proximity
    }

    /// Requires the provided [`Proximity`] flags.
    pub fn set_proximity(&mut self, proximity: Proximity) -> &mut Self {
        self.proximity = proximity;
        self
    }

    /// Indicates whether first floor [`Listing`]s are hidden.
    #[must_use]
    pub fn excludes_first_floor(&self) -> bool {
        self.exclude_first_floor
    }

    /// Hides or shows first floor [`Listing`]s.
    pub fn exclude_first_floor(&mut self, exclude: bool) -> &mut Self {
        self.exclude_first_floor = exclude;
        self
    }

    /// Indicates whether top floor [`Listing`]s are hidden.
    #[must_use]
    pub fn excludes_top_floor(&self) -> bool {
        self.exclude_top_floor
    }

    /// Hides or shows top floor [`Listing`]s.
    pub fn exclude_top_floor(&mut self, exclude: bool) -> &mut Self {
        self.exclude_top_floor = exclude;
        self
    }

    /// Returns all the [`Predicate`]s of this [`FilterState`].
    #[must_use]
    pub fn predicates(&self) -> Vec<Box<dyn Predicate + '_>> {
        use predicate::{Exact, Flag, Range, Subset};

        vec![
            Box::new(Range {
                bounds: self.price,
                sentinel: self.sentinels.price,
                value: |l| l.price,
            }),
            Box::new(Range {
                bounds: self.area,
                sentinel: self.sentinels.area,
                value: |l| l.area,
            }),
            Box::new(Range {
                bounds: self.floor,
                sentinel: self.sentinels.floor,
                value: |l| l.floor,
            }),
            Box::new(Exact {
                choice: &self.rooms,
                value: |l| &l.rooms,
            }),
            Box::new(Exact {
                choice: &self.status,
                value: |l| &l.status,
            }),
            Box::new(Exact {
                choice: &self.district,
                value: |l| &l.district,
            }),
            Box::new(Exact {
                choice: &self.developer,
                value: |l| &l.developer,
            }),
            Box::new(Subset {
                required: &self.amenities,
            }),
            Box::new(Flag {
                required: self.proximity.transport,
                value: |l| l.proximity.transport,
            }),
            Box::new(Flag {
                required: self.proximity.school,
                value: |l| l.proximity.school,
            }),
            Box::new(Flag {
                required: self.proximity.shops,
                value: |l| l.proximity.shops,
            }),
            Box::new(Flag {
                required: self.exclude_first_floor,
                value: |l| !l.is_first_floor(),
            }),
            Box::new(Flag {
                required: self.exclude_top_floor,
                value: |l| !l.is_top_floor(),
            }),
        ]
    }

    /// Checks whether the provided [`Listing`] passes every [`Predicate`] of
    /// this [`FilterState`].
    #[must_use]
    pub fn matches(&self, listing: &Listing) -> bool {
        self.predicates().iter().all(|p| p.matches(listing))
    }

    /// Returns number of constraints deviating from the defaults.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.predicates().iter().filter(|p| p.is_active()).count()
    }
}
