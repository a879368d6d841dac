//! [`Command`] for flipping images of the current card.

use std::convert::Infallible;

use crate::{domain::swipe::Step, Discovery};

use super::Command;

/// [`Command`] for flipping images of the current card.
#[derive(Clone, Copy, Debug)]
pub struct ShowImage(pub Step);

impl<C, L> Command<ShowImage> for Discovery<C, L> {
    /// Index of the shown image.
    type Ok = usize;
    type Err = Infallible;

    fn execute(
        &mut self,
        ShowImage(step): ShowImage,
    ) -> Result<Self::Ok, Self::Err> {
        let count = self.stack.current().map_or(0, |l| l.media.images.len());
        Ok(self.swipe.show_image(step, count))
    }
}
