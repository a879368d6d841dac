//! [`Swipe`] gesture definitions.

pub mod carousel;
pub mod visual;

use std::{mem, ops::Sub, time::Duration};

use common::Bounds;
use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use tracing as log;

use crate::domain::{listing, Decision, Verdict};

pub use self::{
    carousel::{Carousel, Step},
    visual::Frame,
};

/// [`Swipe`] configuration.
#[derive(Clone, Copy, Debug, PartialEq, SmartDefault)]
pub struct Config {
    /// Horizontal distance in pixels a card must be dragged beyond to be
    /// decided upon release.
    #[default(100.0)]
    pub threshold: f64,

    /// Rotation in degrees of a card dragged exactly by the [`threshold`].
    ///
    /// [`threshold`]: Config::threshold
    #[default(10.0)]
    pub rotation: f64,

    /// Maximum rotation in degrees of a card.
    #[default(15.0)]
    pub max_rotation: f64,

    /// Maximum vertical tilt in degrees of a card.
    #[default(5.0)]
    pub max_tilt: f64,

    /// Scale [`Bounds`] of the card lying beneath the dragged one.
    #[default(Bounds::new(0.9, 1.0))]
    pub next_card_scale: Bounds<f64>,

    /// Opacity [`Bounds`] of the card lying beneath the dragged one.
    #[default(Bounds::new(0.6, 1.0))]
    pub next_card_opacity: Bounds<f64>,

    /// [`Animation`] durations.
    pub animation: Animation,
}

impl Config {
    /// Normalizes this [`Config`], so that a release without any motion is
    /// never decided upon.
    ///
    /// Negative distances and angles are taken by their magnitude, and a `NaN`
    /// one falls back to its default.
    #[must_use]
    pub fn normalized(self) -> Self {
        let default = Self::default();
        let magnitude = |v: f64, default: f64| {
            if v.is_nan() {
                default
            } else {
                v.abs()
            }
        };

        Self {
            threshold: magnitude(self.threshold, default.threshold),
            rotation: magnitude(self.rotation, default.rotation),
            max_rotation: magnitude(self.max_rotation, default.max_rotation),
            max_tilt: magnitude(self.max_tilt, default.max_tilt),
            ..self
        }
    }
}

/// Durations of the [`Transition`]s.
#[derive(Clone, Copy, Debug, Eq, PartialEq, SmartDefault)]
pub struct Animation {
    /// Duration of returning a card to rest.
    #[default(Duration::from_millis(300))]
    pub snap_back: Duration,

    /// Duration of throwing a decided card away.
    #[default(Duration::from_millis(250))]
    pub fly_out: Duration,
}

/// Pointer position in pixels.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Point {
    /// Horizontal coordinate, growing to the right.
    pub x: f64,

    /// Vertical coordinate, growing downwards.
    pub y: f64,
}

impl Point {
    /// Creates a new [`Point`].
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Sub for Point {
    type Output = Offset;

    fn sub(self, origin: Self) -> Offset {
        Offset {
            dx: self.x - origin.x,
            dy: self.y - origin.y,
        }
    }
}

/// Displacement of a card from its rest position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Offset {
    /// Horizontal displacement, positive to the right.
    pub dx: f64,

    /// Vertical displacement, positive downwards.
    pub dy: f64,
}

impl Offset {
    /// Rest position.
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };
}

/// Phase of a [`Swipe`].
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Phase {
    /// No gesture is in progress.
    #[default]
    Idle,

    /// The card follows the pointer.
    Dragging(Drag),

    /// The gesture is released and is being decided upon.
    Resolving,

    /// The last gesture produced a [`Decision`].
    Settled,
}

/// Gesture in progress.
#[derive(Clone, Debug, PartialEq)]
pub struct Drag {
    /// [`Point`] the gesture started at.
    pub origin: Point,

    /// Current [`Offset`] of the card.
    pub offset: Offset,

    /// ID of the dragged [`Listing`].
    ///
    /// [`Listing`]: crate::domain::Listing
    pub listing: listing::Id,
}

/// Animation hint for the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transition {
    /// Card returns to rest.
    SnapBack {
        /// [`Offset`] the card returns from.
        from: Offset,

        /// Duration of the animation.
        duration: Duration,
    },

    /// Card leaves the screen.
    FlyOut {
        /// [`Offset`] the card leaves from.
        from: Offset,

        /// Side the card leaves to.
        direction: Decision,

        /// Duration of the animation.
        duration: Duration,
    },
}

/// Outcome of releasing a [`Swipe`].
#[derive(Clone, Debug, PartialEq)]
pub enum Release {
    /// No gesture was in progress.
    Ignored,

    /// The card returns to rest without any [`Decision`].
    SnapBack(Transition),

    /// The card is decided upon.
    Decided(Verdict, Transition),
}

impl Release {
    /// Returns the [`Verdict`] of this [`Release`], if any.
    #[must_use]
    pub fn verdict(&self) -> Option<&Verdict> {
        match self {
            Self::Decided(v, _) => Some(v),
            Self::Ignored | Self::SnapBack(_) => None,
        }
    }

    /// Returns the [`Transition`] of this [`Release`], if any.
    #[must_use]
    pub fn transition(&self) -> Option<Transition> {
        match self {
            Self::Decided(_, t) | Self::SnapBack(t) => Some(*t),
            Self::Ignored => None,
        }
    }
}

/// Swipe decision engine turning pointer motion into [`Decision`]s.
///
/// Once dragging, every move and release belongs to the same gesture no matter
/// where the pointer is, until it is released or cancelled.
#[derive(Clone, Debug, Default)]
pub struct Swipe {
    /// [`Config`] of this [`Swipe`].
    config: Config,

    /// Current [`Phase`].
    phase: Phase,

    /// [`Carousel`] of the current card.
    carousel: Carousel,
}

impl Swipe {
    /// Creates a new idle [`Swipe`] with the [`Config::normalized()`] version
    /// of the provided [`Config`].
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config: config.normalized(),
            phase: Phase::Idle,
            carousel: Carousel::default(),
        }
    }

    /// Returns [`Config`] of this [`Swipe`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the current [`Phase`].
    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Indicates whether a gesture is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging(_))
    }

    /// Returns the current [`Offset`] of the card.
    #[must_use]
    pub fn offset(&self) -> Offset {
        match &self.phase {
            Phase::Dragging(drag) => drag.offset,
            Phase::Idle | Phase::Resolving | Phase::Settled => Offset::ZERO,
        }
    }

    /// Derives the current [`Frame`] of the card.
    #[must_use]
    pub fn frame(&self) -> Frame {
        Frame::of(self.offset(), &self.config)
    }

    /// Returns [`Carousel`] of the current card.
    #[must_use]
    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    /// Performs the provided [`Step`] of the [`Carousel`] over `count` images.
    pub fn show_image(&mut self, step: Step, count: usize) -> usize {
        self.carousel.step(step, count)
    }

    /// Starts dragging the card of the provided [`Listing`] at the provided
    /// [`Point`].
    ///
    /// Returns `false` if a gesture is already in progress, leaving it intact.
    ///
    /// [`Listing`]: crate::domain::Listing
    pub fn start(&mut self, at: Point, listing: listing::Id) -> bool {
        if self.is_dragging() {
            log::trace!("`Swipe` start ignored: gesture in progress");
            return false;
        }
        self.phase = Phase::Dragging(Drag {
            origin: at,
            offset: Offset::ZERO,
            listing,
        });
        true
    }

    /// Moves the dragged card to follow the pointer at the provided [`Point`].
    ///
    /// Returns `false` if no gesture is in progress.
    pub fn drag(&mut self, to: Point) -> bool {
        match &mut self.phase {
            Phase::Dragging(drag) => {
                drag.offset = to - drag.origin;
                true
            }
            Phase::Idle | Phase::Resolving | Phase::Settled => {
                log::trace!("`Swipe` move ignored: no gesture in progress");
                false
            }
        }
    }

    /// Releases the dragged card, deciding upon it if it was dragged beyond
    /// the threshold.
    pub fn end(&mut self) -> Release {
        let drag = match mem::replace(&mut self.phase, Phase::Resolving) {
            Phase::Dragging(drag) => drag,
            phase @ (Phase::Idle | Phase::Resolving | Phase::Settled) => {
                self.phase = phase;
                log::trace!("`Swipe` release ignored: no gesture in progress");
                return Release::Ignored;
            }
        };

        let Some(decision) = self.decide(drag.offset) else {
            self.phase = Phase::Idle;
            return Release::SnapBack(self.snap_back(drag.offset));
        };

        self.phase = Phase::Settled;
        self.carousel.reset();
        log::debug!("`Listing(id: {})` swiped: {decision}", drag.listing);

        Release::Decided(
            Verdict::new(decision, drag.listing),
            Transition::FlyOut {
                from: drag.offset,
                direction: decision,
                duration: self.config.animation.fly_out,
            },
        )
    }

    /// Cancels the gesture in progress, returning the card to rest without
    /// any [`Decision`].
    pub fn cancel(&mut self) -> Release {
        match mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Dragging(drag) => {
                Release::SnapBack(self.snap_back(drag.offset))
            }
            phase @ (Phase::Idle | Phase::Resolving | Phase::Settled) => {
                self.phase = phase;
                log::trace!("`Swipe` cancel ignored: no gesture in progress");
                Release::Ignored
            }
        }
    }

    /// Resets this [`Swipe`] for a different card.
    ///
    /// Any gesture in progress is dropped without a [`Decision`].
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.carousel.reset();
    }

    /// Decides upon a card released at the provided [`Offset`].
    ///
    /// Vertical displacement never affects the [`Decision`].
    fn decide(&self, offset: Offset) -> Option<Decision> {
        (offset.dx.abs() > self.config.threshold).then_some(
            if offset.dx > 0.0 {
                Decision::Accept
            } else {
                Decision::Reject
            },
        )
    }

    /// Creates a [`Transition::SnapBack`] from the provided [`Offset`].
    fn snap_back(&self, from: Offset) -> Transition {
        Transition::SnapBack {
            from,
            duration: self.config.animation.snap_back,
        }
    }
}
