//! Application runs the [`Discovery`] over a catalog file from the command
//! line.

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

pub mod args;
pub mod config;
pub mod error;
mod reactions;
pub mod report;
pub mod script;

use std::{io::Write, path::Path};

use discovery::{
    command::ChangeSort,
    domain::SortKey,
    infra::JsonFile,
    query::ActiveFilterCount,
    Command as _, Query as _,
};
use tracerr::Traced;
// Used in binary.
use tracing_subscriber as _;

pub use self::{
    args::{Args, Mode},
    config::Config,
    error::Error,
    reactions::Reactions,
};

/// [`discovery::Discovery`] reporting its decisions to the [`Reactions`].
pub type Discovery<C = JsonFile> = discovery::Discovery<C, Reactions>;

/// Writes the visible result sorted by the provided [`SortKey`] into the
/// provided `out`put, listing at most `limit` listings.
///
/// # Errors
///
/// If the [`SortKey`] isn't granted or writing to the `out`put fails.
pub fn browse<C>(
    discovery: &mut Discovery<C>,
    sort: SortKey,
    limit: Option<usize>,
    out: &mut impl Write,
) -> Result<(), Traced<Error>> {
    let snapshot = discovery
        .execute(ChangeSort(sort))
        .map_err(tracerr::map_from_and_wrap!(=> Error))?;
    let active = match discovery.execute(ActiveFilterCount) {
        Ok(n) => n,
        Err(e) => match e {},
    };

    report::result(out, &snapshot, active, limit)
        .map_err(tracerr::from_and_wrap!(=> Error))
}

/// Replays the gesture script at the provided `path` against the card stack,
/// writing the outcome into the provided `out`put.
///
/// # Errors
///
/// If the script is malformed, the catalog fails on refresh or writing to the
/// `out`put fails.
pub fn swipe(
    discovery: &mut Discovery,
    path: impl AsRef<Path>,
    out: &mut impl Write,
) -> Result<(), Traced<Error>> {
    let actions = script::load(path).map_err(tracerr::wrap!())?;
    script::run(discovery, &actions, out).map_err(tracerr::wrap!())
}

/// Creates an in-memory catalog of three listings for tests.
#[cfg(test)]
fn test_catalog() -> discovery::infra::InMemory {
    let listings = JsonFile::parse(
        br#"[
            {
                "id": "a-1",
                "price": "8.5",
                "price_per_area": "150",
                "area": "56.5",
                "floor": 3,
                "max_floor": 9,
                "rooms": "two",
                "status": "ready",
                "district": "Central",
                "developer": "Northstar",
                "amenities": ["parking"],
                "near_transport": true,
                "title": "Two rooms by the park",
                "images": ["a/1.jpg", "a/2.jpg"]
            },
            {
                "id": "b-2",
                "price": "5.2",
                "price_per_area": "130",
                "area": "40",
                "floor": 1,
                "max_floor": 5,
                "rooms": "studio",
                "status": "construction",
                "district": "Riverside",
                "developer": "Northstar",
                "title": "Studio by the river"
            },
            {
                "id": "c-3",
                "price": "11.8",
                "price_per_area": "140",
                "area": "84.3",
                "floor": 12,
                "max_floor": 12,
                "rooms": "three",
                "status": "finishing",
                "district": "Central",
                "developer": "Skyline",
                "near_school": true,
                "title": "Penthouse",
                "stats": {"popularity": 90, "sold": 12}
            }
        ]"#,
    )
    .unwrap();

    discovery::infra::InMemory::new(listings)
}
