//! [`CardStack`] definitions.

use tracing as log;

use crate::{
    domain::{Listing, Verdict},
    read::Snapshot,
};

/// Cursor over a [`Snapshot`] presenting its [`Listing`]s one card at a time.
///
/// Exhausted once the cursor passes the last card, and stays so until
/// [`CardStack::reset()`] or [`CardStack::go_back()`].
#[derive(Clone, Debug, Default)]
pub struct CardStack {
    /// [`Snapshot`] the cards are taken from.
    snapshot: Snapshot,

    /// Position of the current card in the [`Snapshot`].
    cursor: usize,
}

impl CardStack {
    /// Creates a new [`CardStack`] positioned at the first card of the
    /// provided [`Snapshot`].
    #[must_use]
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            cursor: 0,
        }
    }

    /// Returns the [`Snapshot`] of this [`CardStack`].
    #[must_use]
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Returns the position of the current card.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns number of cards in this [`CardStack`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshot.len()
    }

    /// Indicates whether this [`CardStack`] has no cards at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }

    /// Indicates whether every card has been decided upon.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.snapshot.len()
    }

    /// Returns the current card, unless exhausted.
    #[must_use]
    pub fn current(&self) -> Option<&Listing> {
        self.snapshot.get(self.cursor)
    }

    /// Returns the card lying beneath the current one, if any.
    #[must_use]
    pub fn upcoming(&self) -> Option<&Listing> {
        self.snapshot.get(self.cursor.checked_add(1)?)
    }

    /// Moves to the next card after the current one is decided upon.
    ///
    /// Returns `false` if the [`Verdict`] isn't about the current card.
    pub fn advance(&mut self, verdict: &Verdict) -> bool {
        if self.current().map(|l| &l.id) != Some(verdict.listing()) {
            log::trace!(
                "`CardStack` advance ignored: `Listing(id: {})` is not current",
                verdict.listing(),
            );
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Moves back to the previous card, leaving the exhausted state if
    /// needed.
    ///
    /// Navigation only: decisions already made stay as they are.
    pub fn go_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Moves to the first card.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Replaces the [`Snapshot`] of this [`CardStack`].
    ///
    /// The cursor is kept if it still points into the new [`Snapshot`],
    /// otherwise this [`CardStack`] becomes exhausted.
    pub fn replace(&mut self, snapshot: Snapshot) {
        self.snapshot = snapshot;
        if self.cursor > self.snapshot.len() {
            self.cursor = self.snapshot.len();
        }
    }
}

#[cfg(test)]
mod spec {
    use crate::{
        domain::{test_listing, Decision, Verdict},
        read::{catalog::Version, Listings, Snapshot},
    };

    use super::CardStack;

    fn snapshot(ids: &[&str]) -> Snapshot {
        let items: Vec<_> =
            ids.iter().map(|id| test_listing(id, "10")).collect();
        let order: Vec<_> = (0..items.len()).collect();
        Snapshot::new(Listings::new(items, Version::default()), order)
    }

    fn accept(id: &str) -> Verdict {
        Verdict::new(Decision::Accept, id.into())
    }

    fn current(stack: &CardStack) -> Option<&str> {
        stack.current().map(|l| l.id.as_ref())
    }

    #[test]
    fn advances_to_exhaustion() {
        let mut stack = CardStack::new(snapshot(&["a", "b", "c"]));
        assert_eq!(current(&stack), Some("a"));
        assert_eq!(
            stack.upcoming().map(|l| l.id.to_string()),
            Some("b".to_owned()),
        );

        for id in ["a", "b", "c"] {
            assert!(!stack.is_exhausted());
            assert!(stack.advance(&accept(id)));
        }

        assert!(stack.is_exhausted());
        assert_eq!(stack.cursor(), 3);
        assert_eq!(current(&stack), None);
        assert!(!stack.advance(&accept("c")));
        assert_eq!(stack.cursor(), 3);
    }

    #[test]
    fn advance_requires_current_card() {
        let mut stack = CardStack::new(snapshot(&["a", "b"]));

        assert!(!stack.advance(&accept("b")));
        assert_eq!(stack.cursor(), 0);
    }

    #[test]
    fn go_back_leaves_exhaustion() {
        let mut stack = CardStack::new(snapshot(&["a", "b"]));
        assert!(!stack.go_back());

        assert!(stack.advance(&accept("a")));
        assert!(stack.advance(&accept("b")));
        assert!(stack.is_exhausted());

        assert!(stack.go_back());
        assert_eq!(current(&stack), Some("b"));
        assert!(stack.go_back());
        assert_eq!(current(&stack), Some("a"));
        assert!(!stack.go_back());
    }

    #[test]
    fn reset_returns_to_first() {
        let mut stack = CardStack::new(snapshot(&["a", "b"]));
        assert!(stack.advance(&accept("a")));
        assert!(stack.advance(&accept("b")));

        stack.reset();

        assert_eq!(current(&stack), Some("a"));
    }

    #[test]
    fn shrunk_snapshot_exhausts() {
        let mut stack = CardStack::new(snapshot(&["a", "b", "c", "d"]));
        for id in ["a", "b", "c"] {
            assert!(stack.advance(&accept(id)));
        }

        stack.replace(snapshot(&["x", "y"]));

        assert!(stack.is_exhausted());
        assert_eq!(stack.cursor(), 2);
        assert!(stack.go_back());
        assert_eq!(current(&stack), Some("y"));
    }

    #[test]
    fn cursor_in_range_is_kept() {
        let mut stack = CardStack::new(snapshot(&["a", "b", "c"]));
        assert!(stack.advance(&accept("a")));

        stack.replace(snapshot(&["x", "y", "z"]));

        assert_eq!(current(&stack), Some("y"));
    }

    #[test]
    fn empty_is_exhausted() {
        let stack = CardStack::new(snapshot(&[]));

        assert!(stack.is_empty());
        assert!(stack.is_exhausted());
        assert_eq!(current(&stack), None);
    }
}
