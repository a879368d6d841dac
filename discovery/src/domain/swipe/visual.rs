//! [`Frame`] definitions.

use common::Ratio;

use super::{Config, Offset};

/// Visual state of a card derived from its [`Offset`].
///
/// Never stored: recomputed on every move out of the [`Offset`] alone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// [`Offset`] of the card.
    pub offset: Offset,

    /// Rotation of the card in degrees, positive is clockwise.
    pub rotation: f64,

    /// Vertical tilt of the card in degrees.
    pub tilt: f64,

    /// Opacity of the "accept" overlay.
    pub accept_opacity: Ratio,

    /// Opacity of the "reject" overlay.
    pub reject_opacity: Ratio,

    /// Scale of the card lying beneath.
    pub next_card_scale: f64,

    /// Opacity of the card lying beneath.
    pub next_card_opacity: f64,
}

impl Frame {
    /// Derives a [`Frame`] of a card displaced by the provided [`Offset`].
    #[must_use]
    pub fn of(offset: Offset, config: &Config) -> Self {
        let Offset { dx, dy } = offset;
        let ratio = Ratio::saturating(dx.abs() / config.threshold);

        let (accept_opacity, reject_opacity) = if dx > 0.0 {
            (ratio, Ratio::ZERO)
        } else if dx < 0.0 {
            (Ratio::ZERO, ratio)
        } else {
            (Ratio::ZERO, Ratio::ZERO)
        };

        Self {
            offset,
            rotation: clamp_abs(
                dx / config.threshold * config.rotation,
                config.max_rotation,
            ),
            tilt: clamp_abs(dy / config.threshold, 1.0) * config.max_tilt,
            accept_opacity,
            reject_opacity,
            next_card_scale: config.next_card_scale.lerp(ratio),
            next_card_opacity: config.next_card_opacity.lerp(ratio),
        }
    }
}

/// Clamps the provided `value` into `[-limit, limit]`.
///
/// `NaN` is treated as zero.
fn clamp_abs(value: f64, limit: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    let limit = limit.abs();
    value.max(-limit).min(limit)
}

#[cfg(test)]
mod spec {
    use common::Ratio;

    use super::{super::Config, Frame, Offset};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn at_rest() {
        let frame = Frame::of(Offset::ZERO, &Config::default());

        assert!(approx(frame.rotation, 0.0));
        assert!(approx(frame.tilt, 0.0));
        assert_eq!(frame.accept_opacity, Ratio::ZERO);
        assert_eq!(frame.reject_opacity, Ratio::ZERO);
        assert!(approx(frame.next_card_scale, 0.9));
        assert!(approx(frame.next_card_opacity, 0.6));
    }

    #[test]
    fn halfway_right() {
        let frame = Frame::of(Offset { dx: 50.0, dy: 0.0 }, &Config::default());

        assert!(approx(frame.rotation, 5.0));
        assert!(approx(frame.accept_opacity.get(), 0.5));
        assert_eq!(frame.reject_opacity, Ratio::ZERO);
        assert!(approx(frame.next_card_scale, 0.95));
        assert!(approx(frame.next_card_opacity, 0.8));
    }

    #[test]
    fn far_left_is_clamped() {
        let frame =
            Frame::of(Offset { dx: -300.0, dy: 0.0 }, &Config::default());

        assert!(approx(frame.rotation, -15.0));
        assert_eq!(frame.accept_opacity, Ratio::ZERO);
        assert_eq!(frame.reject_opacity, Ratio::ONE);
        assert!(approx(frame.next_card_scale, 1.0));
        assert!(approx(frame.next_card_opacity, 1.0));
    }

    #[test]
    fn vertical_tilt_is_clamped() {
        let config = Config::default();

        let down = Frame::of(Offset { dx: 0.0, dy: 200.0 }, &config);
        let up = Frame::of(Offset { dx: 0.0, dy: -50.0 }, &config);

        assert!(approx(down.tilt, 5.0));
        assert!(approx(up.tilt, -2.5));
        assert_eq!(down.accept_opacity, Ratio::ZERO);
        assert_eq!(down.reject_opacity, Ratio::ZERO);
    }

    #[test]
    fn nan_offset_is_at_rest() {
        let frame = Frame::of(
            Offset {
                dx: f64::NAN,
                dy: f64::NAN,
            },
            &Config::default(),
        );

        assert!(approx(frame.rotation, 0.0));
        assert!(approx(frame.tilt, 0.0));
        assert_eq!(frame.accept_opacity, Ratio::ZERO);
    }
}
