//! [`Listing`] definitions.

use std::{collections::BTreeSet, str::FromStr};

use common::define_kind;
use derive_more::{AsRef, Display};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Property unit listed in a catalog.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Listing {
    /// ID of this [`Listing`].
    pub id: Id,

    /// [`Price`] of this [`Listing`].
    pub price: Price,

    /// [`Price`] of a single square meter of this [`Listing`].
    pub price_per_area: PricePerArea,

    /// Total [`Area`] of this [`Listing`].
    pub area: Area,

    /// [`Floor`] this [`Listing`] is located on.
    pub floor: Floor,

    /// Number of floors in the building of this [`Listing`].
    pub max_floor: Floor,

    /// [`RoomClass`] of this [`Listing`].
    pub rooms: RoomClass,

    /// [`ConstructionStatus`] of the building of this [`Listing`].
    pub status: ConstructionStatus,

    /// [`District`] this [`Listing`] is located in.
    pub district: District,

    /// [`Developer`] of the building of this [`Listing`].
    pub developer: Developer,

    /// [`Amenities`] of this [`Listing`].
    #[serde(default)]
    pub amenities: Amenities,

    /// [`Proximity`] flags of this [`Listing`].
    #[serde(flatten)]
    pub proximity: Proximity,

    /// Sales [`Stats`] of this [`Listing`].
    #[serde(default)]
    pub stats: Stats,

    /// Presentation data of this [`Listing`].
    #[serde(flatten)]
    pub media: Media,
}

impl Listing {
    /// Checks whether this [`Listing`] respects the catalog invariants.
    ///
    /// Catalogs are validated before reaching the engine, so this is used for
    /// diagnostics only.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.floor <= self.max_floor
            && !self.price.is_sign_negative()
            && !self.price_per_area.is_sign_negative()
            && !self.area.is_sign_negative()
    }

    /// Checks whether this [`Listing`] is located on the first floor.
    #[must_use]
    pub fn is_first_floor(&self) -> bool {
        self.floor == 1
    }

    /// Checks whether this [`Listing`] is located on the top floor of its
    /// building.
    #[must_use]
    pub fn is_top_floor(&self) -> bool {
        self.floor == self.max_floor
    }
}

/// ID of a [`Listing`].
///
/// Opaque to the engine, unique within a catalog snapshot.
#[derive(
    AsRef,
    Clone,
    Debug,
    Deserialize,
    Display,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[as_ref(forward)]
#[serde(transparent)]
pub struct Id(String);

impl From<String> for Id {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for Id {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Price of a [`Listing`] in millions of the catalog currency.
pub type Price = Decimal;

/// Price of a square meter of a [`Listing`] in thousands of the catalog
/// currency.
pub type PricePerArea = Decimal;

/// Area of a [`Listing`] in square meters.
pub type Area = Decimal;

/// Floor number in a building.
pub type Floor = u16;

define_kind! {
    #[doc = "Room class of a [`Listing`]."]
    enum RoomClass {
        #[doc = "Studio without separate rooms."]
        Studio = 1,

        #[doc = "A single room."]
        One = 2,

        #[doc = "Two rooms."]
        Two = 3,

        #[doc = "Three rooms."]
        Three = 4,

        #[doc = "Four rooms or more."]
        FourPlus = 5,
    }
}

define_kind! {
    #[doc = "Construction status of a [`Listing`] building."]
    enum ConstructionStatus {
        #[doc = "The building is being planned."]
        Planning = 1,

        #[doc = "The building is under construction."]
        Construction = 2,

        #[doc = "The building is being finished."]
        Finishing = 3,

        #[doc = "The building is ready to move in."]
        Ready = 4,
    }
}

/// District a [`Listing`] is located in.
#[derive(
    AsRef,
    Clone,
    Debug,
    Deserialize,
    Display,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[as_ref(forward)]
#[serde(try_from = "String", into = "String")]
pub struct District(String);

impl District {
    /// Creates a new [`District`] if the given `district` is valid.
    #[must_use]
    pub fn new(district: impl Into<String>) -> Option<Self> {
        let district = district.into();
        check_name(&district).then_some(Self(district))
    }
}

impl FromStr for District {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `District`")
    }
}

impl TryFrom<String> for District {
    type Error = &'static str;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s).ok_or("invalid `District`")
    }
}

impl From<District> for String {
    fn from(District(s): District) -> Self {
        s
    }
}

/// Developer of a [`Listing`] building.
#[derive(
    AsRef,
    Clone,
    Debug,
    Deserialize,
    Display,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[as_ref(forward)]
#[serde(try_from = "String", into = "String")]
pub struct Developer(String);

impl Developer {
    /// Creates a new [`Developer`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        check_name(&name).then_some(Self(name))
    }
}

impl FromStr for Developer {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Developer`")
    }
}

impl TryFrom<String> for Developer {
    type Error = &'static str;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s).ok_or("invalid `Developer`")
    }
}

impl From<Developer> for String {
    fn from(Developer(s): Developer) -> Self {
        s
    }
}

/// Amenity tag of a [`Listing`] (e.g. `parking`, `balcony`).
#[derive(
    AsRef,
    Clone,
    Debug,
    Deserialize,
    Display,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[as_ref(forward)]
#[serde(try_from = "String", into = "String")]
pub struct Amenity(String);

impl Amenity {
    /// Creates a new [`Amenity`] if the given `tag` is valid.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Option<Self> {
        let tag = tag.into();
        check_name(&tag).then_some(Self(tag))
    }
}

impl FromStr for Amenity {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Amenity`")
    }
}

impl TryFrom<String> for Amenity {
    type Error = &'static str;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s).ok_or("invalid `Amenity`")
    }
}

impl From<Amenity> for String {
    fn from(Amenity(s): Amenity) -> Self {
        s
    }
}

/// Set of [`Amenity`] tags.
pub type Amenities = BTreeSet<Amenity>;

/// Checks whether the given `name` is a valid categorical name.
fn check_name(name: impl AsRef<str>) -> bool {
    let name = name.as_ref();
    name.trim() == name && !name.is_empty() && name.len() <= 256
}

/// Proximity flags of a [`Listing`].
///
/// Also used by a [`FilterState`] to describe the required proximity, where
/// `false` means "don't care".
///
/// [`FilterState`]: crate::domain::FilterState
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize,
)]
pub struct Proximity {
    /// Public transport is within walking distance.
    #[serde(default, rename = "near_transport")]
    pub transport: bool,

    /// A school is within walking distance.
    #[serde(default, rename = "near_school")]
    pub school: bool,

    /// Shops are within walking distance.
    #[serde(default, rename = "near_shops")]
    pub shops: bool,
}

/// Sales statistics of a [`Listing`].
///
/// Visible to the [`Capability::SalesInsights`] holders only.
///
/// [`Capability::SalesInsights`]: crate::domain::sort::Capability::SalesInsights
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize,
)]
pub struct Stats {
    /// Number of views of a [`Listing`].
    #[serde(default)]
    pub popularity: u32,

    /// Number of units sold in the same building.
    #[serde(default)]
    pub sold: u32,
}

/// Presentation data of a [`Listing`].
///
/// Passed through to the views as is.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Media {
    /// Title of a [`Listing`].
    #[serde(default)]
    pub title: String,

    /// Human-readable address of a [`Listing`].
    #[serde(default)]
    pub address: String,

    /// Description of a [`Listing`].
    #[serde(default)]
    pub description: String,

    /// Image URLs of a [`Listing`].
    #[serde(default)]
    pub images: Vec<String>,

    /// Map position of a [`Listing`], if known.
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
}

/// Geographic coordinates of a map marker.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct Coordinates {
    /// Latitude in degrees.
    pub lat: f64,

    /// Longitude in degrees.
    pub lon: f64,
}
