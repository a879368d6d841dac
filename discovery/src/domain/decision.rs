//! [`Decision`] definitions.

use common::define_kind;

use crate::domain::listing;

define_kind! {
    #[doc = "Discrete outcome of a resolved swipe."]
    enum Decision {
        #[doc = "The card was swiped right."]
        Accept = 1,

        #[doc = "The card was swiped left."]
        Reject = 2,
    }
}

/// Proof of a [`Decision`] made upon a [`Listing`].
///
/// Produced only by a [`Swipe`] resolving a gesture, so holding one means the
/// gesture crossed the release threshold exactly once.
///
/// [`Listing`]: crate::domain::Listing
/// [`Swipe`]: crate::domain::Swipe
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Verdict {
    /// Made [`Decision`].
    decision: Decision,

    /// ID of the decided [`Listing`].
    ///
    /// [`Listing`]: crate::domain::Listing
    listing: listing::Id,
}

impl Verdict {
    /// Creates a new [`Verdict`].
    pub(crate) fn new(decision: Decision, listing: listing::Id) -> Self {
        Self { decision, listing }
    }

    /// Returns the made [`Decision`].
    #[must_use]
    pub fn decision(&self) -> Decision {
        self.decision
    }

    /// Returns ID of the decided [`Listing`].
    ///
    /// [`Listing`]: crate::domain::Listing
    #[must_use]
    pub fn listing(&self) -> &listing::Id {
        &self.listing
    }

    /// Notifies the provided [`Listener`] about this [`Verdict`].
    pub fn notify<L: Listener + ?Sized>(&self, listener: &mut L) {
        match self.decision {
            Decision::Accept => listener.on_accept(&self.listing),
            Decision::Reject => listener.on_reject(&self.listing),
        }
    }
}

/// Consumer of the [`Decision`]s.
///
/// Each callback fires at most once per gesture.
pub trait Listener {
    /// Called when the [`Listing`] is accepted.
    ///
    /// [`Listing`]: crate::domain::Listing
    fn on_accept(&mut self, id: &listing::Id);

    /// Called when the [`Listing`] is rejected.
    ///
    /// [`Listing`]: crate::domain::Listing
    fn on_reject(&mut self, id: &listing::Id);
}

impl<T: Listener + ?Sized> Listener for &mut T {
    fn on_accept(&mut self, id: &listing::Id) {
        (**self).on_accept(id);
    }

    fn on_reject(&mut self, id: &listing::Id) {
        (**self).on_reject(id);
    }
}

impl Listener for Vec<(Decision, listing::Id)> {
    fn on_accept(&mut self, id: &listing::Id) {
        self.push((Decision::Accept, id.clone()));
    }

    fn on_reject(&mut self, id: &listing::Id) {
        self.push((Decision::Reject, id.clone()));
    }
}

/// [`Listener`] ignoring every [`Decision`].
impl Listener for () {
    fn on_accept(&mut self, _: &listing::Id) {}

    fn on_reject(&mut self, _: &listing::Id) {}
}
