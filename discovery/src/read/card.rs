//! [`Card`] read definitions.

use crate::domain::{swipe::Frame, Listing};

/// Current card of the [`CardStack`] as seen by the presentation layer.
///
/// [`CardStack`]: crate::domain::CardStack
#[derive(Clone, Debug)]
pub struct Card {
    /// [`Listing`] shown on this [`Card`].
    pub listing: Listing,

    /// Position of this [`Card`] in the result.
    pub position: usize,

    /// Total number of cards in the result.
    pub total: usize,

    /// Index of the shown image.
    pub image: usize,

    /// Current [`Frame`] of this [`Card`].
    ///
    /// Also describes the scale and opacity of the [`upcoming`] card.
    ///
    /// [`upcoming`]: Card::upcoming
    pub frame: Frame,

    /// [`Listing`] lying beneath this [`Card`], if any.
    pub upcoming: Option<Listing>,
}
