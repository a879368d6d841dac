//! Domain definitions.

pub mod decision;
pub mod engine;
pub mod filter;
pub mod listing;
pub mod sort;
pub mod stack;
pub mod swipe;

pub use self::{
    decision::{Decision, Listener, Verdict},
    engine::Engine,
    filter::{Choice, FilterState, Sentinels},
    listing::Listing,
    sort::{Capability, Grants, Role, SortKey},
    stack::CardStack,
    swipe::Swipe,
};

/// Creates a consistent two-room [`Listing`] with the provided `id` and
/// `price` for tests.
#[cfg(test)]
pub(crate) fn test_listing(id: &str, price: &str) -> Listing {
    use self::listing::{
        Amenities, Amenity, ConstructionStatus, Developer, District, Media,
        Proximity, RoomClass, Stats,
    };

    Listing {
        id: id.into(),
        price: price.parse().unwrap(),
        price_per_area: "150".parse().unwrap(),
        area: "56.5".parse().unwrap(),
        floor: 3,
        max_floor: 9,
        rooms: RoomClass::Two,
        status: ConstructionStatus::Ready,
        district: District::new("Central").unwrap(),
        developer: Developer::new("Northstar").unwrap(),
        amenities: Amenities::from([
            Amenity::new("parking").unwrap(),
            Amenity::new("balcony").unwrap(),
        ]),
        proximity: Proximity {
            transport: true,
            school: true,
            shops: false,
        },
        stats: Stats::default(),
        media: Media {
            title: format!("Listing {id}"),
            images: vec![
                format!("https://img.example/{id}/1.jpg"),
                format!("https://img.example/{id}/2.jpg"),
                format!("https://img.example/{id}/3.jpg"),
            ],
            ..Media::default()
        },
    }
}
