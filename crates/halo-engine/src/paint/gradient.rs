use crate::coords::{Angle, Vec2};

use super::Color;

/// A single gradient stop.
///
/// For conic gradients `t` is a fraction of one full turn, expected in
/// [0, 1] and non-decreasing across the stop list.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Angular (conic) gradient definition in logical pixel space.
///
/// The gradient sweeps around `center` starting at `angle`, covering one full
/// turn; there is no out-of-range region to spread into. Stop blending is
/// defined in extended linear sRGB, exactly as [`Color::lerp`] blends — hosts
/// whose native conic primitive interpolates in a different space must
/// pre-sample with [`ConicGradient::sample`] instead.
#[derive(Debug, Clone, PartialEq)]
pub struct ConicGradient {
    pub center: Vec2,
    pub angle: Angle,
    pub stops: Vec<ColorStop>,
}

impl ConicGradient {
    pub fn new(center: Vec2, angle: Angle, stops: Vec<ColorStop>) -> Self {
        Self { center, angle, stops }
    }

    /// Two-stop sweep from `from` at the gradient start to `to` a full turn
    /// later.
    pub fn sweep(center: Vec2, from: Color, to: Color) -> Self {
        Self::new(
            center,
            Angle::ZERO,
            vec![ColorStop::new(0.0, from), ColorStop::new(1.0, to)],
        )
    }

    /// Structural usability: finite fields, at least two ordered stops.
    pub fn is_valid(&self) -> bool {
        self.center.is_finite()
            && self.angle.is_finite()
            && self.stops.len() >= 2
            && self
                .stops
                .iter()
                .all(|s| s.t.is_finite() && s.color.is_finite())
            && self.stops.windows(2).all(|w| w[0].t <= w[1].t)
    }

    /// Color at fraction `t` of the turn, blending the surrounding stops in
    /// extended linear sRGB. `t` outside the stop range clamps to the
    /// nearest stop.
    pub fn sample(&self, t: f32) -> Color {
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return Color::default();
        };

        if t <= first.t {
            return first.color;
        }
        if t >= last.t {
            return last.color;
        }

        for w in self.stops.windows(2) {
            let (a, b) = (w[0], w[1]);
            if t <= b.t {
                let span = b.t - a.t;
                if span <= 0.0 {
                    return b.color;
                }
                let u = (t - a.t) / span;
                // Workspace lerp convention: value toward `from`, so the
                // later stop is the `from` side as u grows.
                return Color::lerp(b.color, a.color, u);
            }
        }
        last.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FROM: Color = Color::new(0.0, 0.0, 1.0, 1.0);
    const TO: Color = Color::new(1.0, 0.0, 0.0, 1.0);

    fn sweep() -> ConicGradient {
        ConicGradient::sweep(Vec2::zero(), FROM, TO)
    }

    #[test]
    fn sample_at_stops_is_exact() {
        assert_eq!(sweep().sample(0.0), FROM);
        assert_eq!(sweep().sample(1.0), TO);
    }

    #[test]
    fn sample_clamps_outside_range() {
        assert_eq!(sweep().sample(-0.5), FROM);
        assert_eq!(sweep().sample(1.5), TO);
    }

    #[test]
    fn sample_agrees_with_color_lerp() {
        // A fraction f of the way around must equal lerp with value 1 - f;
        // this keeps manually computed cap colors on the gradient.
        let f = 0.3;
        assert_eq!(sweep().sample(f), Color::lerp(FROM, TO, 1.0 - f));
    }

    #[test]
    fn validity_requires_ordered_stops() {
        let mut g = sweep();
        assert!(g.is_valid());
        g.stops.reverse();
        assert!(!g.is_valid());
    }
}
