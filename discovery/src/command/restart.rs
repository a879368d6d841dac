//! [`Command`] for restarting the card stack.

use std::convert::Infallible;

use crate::Discovery;

use super::Command;

/// [`Command`] for showing the first card again.
///
/// [`Decision`]s already made stay as they are.
///
/// [`Decision`]: crate::domain::Decision
#[derive(Clone, Copy, Debug)]
pub struct Restart;

impl<C, L> Command<Restart> for Discovery<C, L> {
    type Ok = ();
    type Err = Infallible;

    fn execute(&mut self, _: Restart) -> Result<Self::Ok, Self::Err> {
        self.stack.reset();
        self.swipe.reset();
        Ok(())
    }
}
