//! [`Command`] for returning to the previous card.

use std::convert::Infallible;

use crate::Discovery;

use super::Command;

/// [`Command`] for returning to the previous card.
///
/// Navigation only: the [`Decision`] already made upon the card stays as is.
///
/// [`Decision`]: crate::domain::Decision
#[derive(Clone, Copy, Debug)]
pub struct GoBack;

impl<C, L> Command<GoBack> for Discovery<C, L> {
    /// Indicator whether the previous card is shown.
    type Ok = bool;
    type Err = Infallible;

    fn execute(&mut self, _: GoBack) -> Result<Self::Ok, Self::Err> {
        if !self.stack.go_back() {
            return Ok(false);
        }
        self.swipe.reset();
        Ok(true)
    }
}
