//! [`Command`]s driving a swipe gesture.

use std::convert::Infallible;

use tracing as log;

use crate::{
    domain::{
        swipe::{Frame, Point, Release},
        Listener,
    },
    Discovery,
};
#[cfg(doc)]
use crate::domain::Decision;

use super::Command;

/// [`Command`] for starting to drag the current card.
#[derive(Clone, Copy, Debug)]
pub struct StartGesture(pub Point);

impl<C, L> Command<StartGesture> for Discovery<C, L> {
    /// Indicator whether the gesture has started.
    type Ok = bool;
    type Err = Infallible;

    fn execute(
        &mut self,
        StartGesture(at): StartGesture,
    ) -> Result<Self::Ok, Self::Err> {
        let Some(card) = self.stack.current() else {
            log::trace!("gesture start ignored: `CardStack` is exhausted");
            return Ok(false);
        };
        Ok(self.swipe.start(at, card.id.clone()))
    }
}

/// [`Command`] for moving the dragged card.
#[derive(Clone, Copy, Debug)]
pub struct MoveGesture(pub Point);

impl<C, L> Command<MoveGesture> for Discovery<C, L> {
    /// New [`Frame`] of the dragged card, if any is dragged.
    type Ok = Option<Frame>;
    type Err = Infallible;

    fn execute(
        &mut self,
        MoveGesture(to): MoveGesture,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.swipe.drag(to).then(|| self.swipe.frame()))
    }
}

/// [`Command`] for releasing the dragged card.
///
/// If the card is dragged beyond the threshold, the [`Listener`] is notified
/// about the [`Decision`] and the next card is shown.
#[derive(Clone, Copy, Debug)]
pub struct EndGesture;

impl<C, L: Listener> Command<EndGesture> for Discovery<C, L> {
    type Ok = Release;
    type Err = Infallible;

    fn execute(&mut self, _: EndGesture) -> Result<Self::Ok, Self::Err> {
        let release = self.swipe.end();

        if let Some(verdict) = release.verdict() {
            verdict.notify(&mut self.listener);
            if !self.stack.advance(verdict) {
                log::warn!(
                    "`CardStack` not advanced: `Listing(id: {})` is not current",
                    verdict.listing(),
                );
            }
        }

        Ok(release)
    }
}

/// [`Command`] for cancelling the gesture in progress.
///
/// Behaves exactly as releasing the card below the threshold.
#[derive(Clone, Copy, Debug)]
pub struct CancelGesture;

impl<C, L> Command<CancelGesture> for Discovery<C, L> {
    type Ok = Release;
    type Err = Infallible;

    fn execute(&mut self, _: CancelGesture) -> Result<Self::Ok, Self::Err> {
        Ok(self.swipe.cancel())
    }
}
