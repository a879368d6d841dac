//! [`Carousel`] definitions.

use serde::{Deserialize, Serialize};

/// Image carousel of the current card.
///
/// Independent of the drag: flipping images never moves the card and vice
/// versa.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Carousel {
    /// Index of the shown image.
    index: usize,
}

/// Step of a [`Carousel`].
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Show the next image.
    Next,

    /// Show the previous image.
    Previous,

    /// Show the image at the provided index.
    At(usize),
}

impl Carousel {
    /// Returns index of the shown image.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Performs the provided [`Step`] over `count` images.
    ///
    /// The index is clamped into `[0, count - 1]`, never wrapped.
    pub fn step(&mut self, step: Step, count: usize) -> usize {
        let last = count.saturating_sub(1);
        self.index = match step {
            Step::Next => self.index.saturating_add(1),
            Step::Previous => self.index.saturating_sub(1),
            Step::At(i) => i,
        }
        .min(last);
        self.index
    }

    /// Shows the first image.
    pub fn reset(&mut self) {
        self.index = 0;
    }
}
