//! [`Reactions`] definitions.

use discovery::domain::{listing, Listener};
use tracing as log;

/// [`Listener`] remembering the decided listings in the decision order.
///
/// Going back doesn't retract anything, so a listing decided twice is
/// remembered twice.
#[derive(Clone, Debug, Default)]
pub struct Reactions {
    /// Accepted listings.
    accepted: Vec<listing::Id>,

    /// Rejected listings.
    rejected: Vec<listing::Id>,
}

impl Reactions {
    /// Returns the accepted listings.
    #[must_use]
    pub fn accepted(&self) -> &[listing::Id] {
        &self.accepted
    }

    /// Returns the rejected listings.
    #[must_use]
    pub fn rejected(&self) -> &[listing::Id] {
        &self.rejected
    }
}

impl Listener for Reactions {
    fn on_accept(&mut self, id: &listing::Id) {
        log::info!("`Listing(id: {id})` accepted");
        self.accepted.push(id.clone());
    }

    fn on_reject(&mut self, id: &listing::Id) {
        log::info!("`Listing(id: {id})` rejected");
        self.rejected.push(id.clone());
    }
}
