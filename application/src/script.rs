//! Gesture script definitions.

use std::{fs, io::Write, path::Path};

use common::operations::{By, Select};
use discovery::{
    command::{
        CancelGesture, ChangeSort, EndGesture, GoBack, MoveGesture, Refresh,
        ResetFilter, Restart, ShowImage, StartGesture,
    },
    domain::{
        swipe::{Point, Release, Step},
        SortKey,
    },
    infra::{catalog, Catalog},
    query::{ActiveFilterCount, CurrentCard},
    read::{Listings, Snapshot},
    Command as _, Query as _,
};
use serde::Deserialize;
use tracerr::Traced;
use tracing as log;

use crate::{report, Discovery, Error};

/// Single step of a gesture script.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Puts the pointer down on the current card.
    Start(Point),

    /// Moves the pointer.
    Move(Point),

    /// Lifts the pointer.
    End,

    /// Interrupts the gesture.
    Cancel,

    /// Drags the current card horizontally by the provided distance and
    /// releases it.
    Swipe(f64),

    /// Returns to the previous card.
    GoBack,

    /// Returns to the first card.
    Restart,

    /// Switches the shown image of the current card.
    Image(Step),

    /// Changes the sort key.
    Sort(SortKey),

    /// Re-reads the catalog.
    Refresh,

    /// Drops every filter constraint.
    ResetFilter,
}

/// Parses a gesture script out of the provided JSON `bytes`.
///
/// # Errors
///
/// If the `bytes` don't represent a list of [`Action`]s.
pub fn parse(bytes: &[u8]) -> Result<Vec<Action>, Traced<Error>> {
    serde_json::from_slice(bytes).map_err(tracerr::from_and_wrap!(=> Error))
}

/// Loads a gesture script from the provided `path`.
///
/// # Errors
///
/// If the file can't be read or contains a malformed script.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Action>, Traced<Error>> {
    let bytes = fs::read(path).map_err(tracerr::from_and_wrap!(=> Error))?;
    parse(&bytes).map_err(tracerr::wrap!())
}

/// Replays the provided [`Action`]s, writing the outcome of each into the
/// provided `out`put.
///
/// The current card is written whenever it changes.
///
/// # Errors
///
/// If the catalog fails on refresh or writing to the `out`put fails.
pub fn run<C>(
    discovery: &mut Discovery<C>,
    actions: &[Action],
    out: &mut impl Write,
) -> Result<(), Traced<Error>>
where
    C: Catalog<
        Select<By<Listings, ()>>,
        Ok = Listings,
        Err = Traced<catalog::Error>,
    >,
{
    report::card(out, current(discovery).as_ref())
        .map_err(tracerr::from_and_wrap!(=> Error))?;
    for (n, action) in actions.iter().enumerate() {
        log::debug!("step {n}: {action:?}");

        let before = discovery.stack().current().map(|l| l.id.clone());
        step(discovery, *action, out)?;
        if discovery.stack().current().map(|l| &l.id) != before.as_ref() {
            report::card(out, current(discovery).as_ref())
                .map_err(tracerr::from_and_wrap!(=> Error))?;
        }
    }
    report::reactions(out, discovery.listener())
        .map_err(tracerr::from_and_wrap!(=> Error))
}

/// Performs a single [`Action`].
fn step<C>(
    discovery: &mut Discovery<C>,
    action: Action,
    out: &mut impl Write,
) -> Result<(), Traced<Error>>
where
    C: Catalog<
        Select<By<Listings, ()>>,
        Ok = Listings,
        Err = Traced<catalog::Error>,
    >,
{
    match action {
        Action::Start(at) => {
            if !infallible(discovery.execute(StartGesture(at))) {
                writeln!(out, "start ignored")
                    .map_err(tracerr::from_and_wrap!(=> Error))?;
            }
        }
        Action::Move(to) => {
            if let Some(frame) = infallible(discovery.execute(MoveGesture(to)))
            {
                report::frame(out, &frame)
                    .map_err(tracerr::from_and_wrap!(=> Error))?;
            }
        }
        Action::End => {
            let release = infallible(discovery.execute(EndGesture));
            report::release(out, &release)
                .map_err(tracerr::from_and_wrap!(=> Error))?;
        }
        Action::Cancel => {
            let release = infallible(discovery.execute(CancelGesture));
            report::release(out, &release)
                .map_err(tracerr::from_and_wrap!(=> Error))?;
        }
        Action::Swipe(dx) => {
            let release = swipe(discovery, dx);
            report::release(out, &release)
                .map_err(tracerr::from_and_wrap!(=> Error))?;
        }
        Action::GoBack => {
            if !infallible(discovery.execute(GoBack)) {
                writeln!(out, "go back ignored")
                    .map_err(tracerr::from_and_wrap!(=> Error))?;
            }
        }
        Action::Restart => infallible(discovery.execute(Restart)),
        Action::Image(s) => {
            let image = infallible(discovery.execute(ShowImage(s)));
            writeln!(out, "image {}", image + 1)
                .map_err(tracerr::from_and_wrap!(=> Error))?;
        }
        Action::Sort(key) => match discovery.execute(ChangeSort(key)) {
            Ok(snapshot) => header(discovery, &snapshot, out)?,
            Err(e) => {
                log::warn!("sort not changed: {e}");
                writeln!(out, "sort {key} unavailable")
                    .map_err(tracerr::from_and_wrap!(=> Error))?;
            }
        },
        Action::Refresh => {
            let snapshot = discovery
                .execute(Refresh)
                .map_err(tracerr::map_from_and_wrap!(=> Error))?;
            header(discovery, &snapshot, out)?;
        }
        Action::ResetFilter => {
            let snapshot = infallible(discovery.execute(ResetFilter));
            header(discovery, &snapshot, out)?;
        }
    }
    Ok(())
}

/// Drags the current card horizontally by the provided distance and releases
/// it.
fn swipe<C>(discovery: &mut Discovery<C>, dx: f64) -> Release {
    let origin = Point::new(0.0, 0.0);
    if !infallible(discovery.execute(StartGesture(origin))) {
        return Release::Ignored;
    }
    _ = infallible(discovery.execute(MoveGesture(Point::new(dx, 0.0))));
    infallible(discovery.execute(EndGesture))
}

/// Writes the header of the provided [`Snapshot`].
fn header<C>(
    discovery: &mut Discovery<C>,
    snapshot: &Snapshot,
    out: &mut impl Write,
) -> Result<(), Traced<Error>> {
    let active = infallible(discovery.execute(ActiveFilterCount));
    report::header(out, &snapshot.summary(), active)
        .map_err(tracerr::from_and_wrap!(=> Error))
}

/// Returns the current card of the provided [`Discovery`].
fn current<C>(
    discovery: &mut Discovery<C>,
) -> Option<discovery::read::Card> {
    infallible(discovery.execute(CurrentCard))
}

/// Unwraps the provided infallible [`Result`].
fn infallible<T>(res: Result<T, std::convert::Infallible>) -> T {
    match res {
        Ok(v) => v,
        Err(e) => match e {},
    }
}
