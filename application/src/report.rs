//! Plain text rendering of the discovery state.

use std::io::{self, Write};

use discovery::{
    domain::{
        swipe::{Frame, Release, Transition},
        Listing,
    },
    read::{Card, Snapshot, Summary},
};
use itertools::Itertools as _;

use crate::Reactions;

/// Writes the header of a result set with the provided number of `active`
/// filters.
///
/// # Errors
///
/// If writing to the provided `out`put fails.
pub fn header(
    out: &mut impl Write,
    summary: &Summary,
    active: usize,
) -> io::Result<()> {
    writeln!(out, "{} listings, {active} filters active", summary.count)?;
    match (
        summary.average_price,
        summary.price_range,
        summary.average_price_per_area,
    ) {
        (Some(price), Some(range), Some(per_area)) => writeln!(
            out,
            "average price {}M within {range}, {}K per m2",
            price.round_dp(2).normalize(),
            per_area.round_dp(2).normalize(),
        ),
        _ => writeln!(out, "nothing found"),
    }
}

/// Writes the provided [`Snapshot`] with at most `limit` listings.
///
/// # Errors
///
/// If writing to the provided `out`put fails.
pub fn result(
    out: &mut impl Write,
    snapshot: &Snapshot,
    active: usize,
    limit: Option<usize>,
) -> io::Result<()> {
    header(out, &snapshot.summary(), active)?;

    let limit = limit.unwrap_or(usize::MAX);
    for (n, l) in snapshot.iter().take(limit).enumerate() {
        listing(out, n, l)?;
    }
    if let Some(rest) = snapshot.len().checked_sub(limit).filter(|r| *r > 0) {
        writeln!(out, "... and {rest} more")?;
    }
    Ok(())
}

/// Writes a single line describing the provided [`Listing`].
///
/// # Errors
///
/// If writing to the provided `out`put fails.
pub fn listing(
    out: &mut impl Write,
    position: usize,
    l: &Listing,
) -> io::Result<()> {
    writeln!(
        out,
        "{:>3}. {} | {}M | {}m2 | {} | floor {}/{} | {} | {}",
        position + 1,
        l.id,
        l.price,
        l.area,
        l.rooms,
        l.floor,
        l.max_floor,
        l.district,
        l.media.title,
    )
}

/// Writes the provided current [`Card`], if any.
///
/// # Errors
///
/// If writing to the provided `out`put fails.
pub fn card(out: &mut impl Write, card: Option<&Card>) -> io::Result<()> {
    let Some(card) = card else {
        return writeln!(out, "no more cards");
    };

    write!(out, "card {}/{}: ", card.position + 1, card.total)?;
    listing(out, card.position, &card.listing)?;
    let images = card.listing.media.images.len();
    if images > 0 {
        writeln!(out, "     image {}/{images}", card.image + 1)?;
    }
    if let Some(next) = &card.upcoming {
        writeln!(out, "     next: {}", next.id)?;
    }
    Ok(())
}

/// Writes the provided [`Frame`] of a dragged card.
///
/// # Errors
///
/// If writing to the provided `out`put fails.
pub fn frame(out: &mut impl Write, frame: &Frame) -> io::Result<()> {
    writeln!(
        out,
        "drag {:.0},{:.0} rotation {:.1} tilt {:.1} \
         accept {:.2} reject {:.2}",
        frame.offset.dx,
        frame.offset.dy,
        frame.rotation,
        frame.tilt,
        frame.accept_opacity.get(),
        frame.reject_opacity.get(),
    )
}

/// Writes the provided [`Release`] of a card.
///
/// # Errors
///
/// If writing to the provided `out`put fails.
pub fn release(out: &mut impl Write, release: &Release) -> io::Result<()> {
    match release {
        Release::Ignored => writeln!(out, "release ignored"),
        Release::SnapBack(t) => {
            writeln!(out, "snap back in {}ms", millis(t))
        }
        Release::Decided(v, t) => writeln!(
            out,
            "{} {} in {}ms",
            v.decision(),
            v.listing(),
            millis(t),
        ),
    }
}

/// Writes the decisions remembered by the provided [`Reactions`].
///
/// # Errors
///
/// If writing to the provided `out`put fails.
pub fn reactions(
    out: &mut impl Write,
    reactions: &Reactions,
) -> io::Result<()> {
    writeln!(out, "accepted: [{}]", reactions.accepted().iter().join(", "))?;
    writeln!(out, "rejected: [{}]", reactions.rejected().iter().join(", "))
}

/// Returns duration of the provided [`Transition`] in milliseconds.
fn millis(transition: &Transition) -> u128 {
    match transition {
        Transition::SnapBack { duration, .. }
        | Transition::FlyOut { duration, .. } => duration.as_millis(),
    }
}
