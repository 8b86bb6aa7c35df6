use halo_engine::coords::{Angle, Rect, Transform2, Vec2};
use halo_engine::paint::{Color, ConicGradient, Shadow, blend};
use halo_engine::scene::{ArcStrokeClip, ClipShape, DrawList, StrokeStyle};

use crate::error::RingError;
use crate::painter::RingPainter;
use crate::ring::Ring;

/// Angular overlap added so the gradient arc tucks under both caps, hiding
/// the anti-aliasing seam where adjoining primitives meet.
pub const SEAM_BIAS: Angle = Angle::degrees(0.006 * (180.0 / std::f32::consts::PI));

/// Fraction of the ring thickness an icon occupies.
const ICON_SIZE_RATIO: f32 = 0.75;

/// Track alpha relative to the start color.
const TRACK_OPACITY: f32 = 0.25;

/// Completion range over which the end-cap shadow fades in.
const SHADOW_RAMP: (f32, f32) = (0.9, 1.0);

/// Geometry and colors derived from one ring snapshot.
///
/// Ephemeral by design: recomputed from `(completion, colors, thickness,
/// bounds)` on every render, so a mid-animation update re-derives every
/// field from the current driving value instead of blending two stale
/// renders. Nothing here may be cached across frames.
#[derive(Debug, Clone, PartialEq)]
pub struct RingGeometry {
    pub center: Vec2,
    /// Stroke centerline radius.
    pub radius: f32,
    pub thickness: f32,
    /// Clamped completion plus the seam bias, as a fraction of a turn.
    pub completion: f32,
    pub start_angle: Angle,
    /// Biased sweep end; exceeds one turn for overfilled rings.
    pub end_angle: Angle,
    /// `end_angle` folded into [0°, 360°).
    pub wrapped_end_angle: Angle,
    pub start_point: Vec2,
    pub end_point: Vec2,
    /// Start-side color of the base gradient. Snaps — never blends — to the
    /// end color once the sweep has wrapped a full extra turn (720°).
    pub base_gradient_start: Color,
    /// Tracks how far around the first lap the sweep has gone; holds the end
    /// color from one full lap onward.
    pub end_cap_color: Color,
    /// End-cap shadow strength in [0, 1].
    pub shadow_opacity: f32,
    /// Whether the current partial lap past the first gets drawn.
    pub overflow: bool,
}

impl RingGeometry {
    /// Derives all per-frame quantities for `ring` rendered at `thickness`
    /// into square `bounds`.
    ///
    /// `thickness` defaults to an eighth of the bounds width. Negative
    /// completion clamps to zero here; the raw value on the ring is left to
    /// keep animating.
    pub fn derive(ring: &Ring, thickness: Option<f32>, bounds: Rect) -> Result<Self, RingError> {
        if !bounds.is_square() {
            return Err(RingError::NonSquareBounds {
                width: bounds.width(),
                height: bounds.height(),
            });
        }

        let thickness = thickness.unwrap_or(bounds.width() / 8.0);
        if !thickness.is_finite() || thickness <= 0.0 {
            return Err(RingError::InvalidThickness { thickness });
        }

        let radius = bounds.width() / 2.0 - thickness / 2.0;
        if radius <= 0.0 {
            return Err(RingError::DegenerateRadius { radius });
        }

        let completion = ring.completion.max(0.0) + SEAM_BIAS.to_turns();
        let start_angle = Angle::ZERO;
        let end_angle = Angle::turns(completion);
        let wrapped_end_angle = end_angle.wrapped();

        let center = bounds.center();
        let start_point = Vec2::on_circle(center, radius, start_angle);
        let end_point = Vec2::on_circle(center, radius, end_angle - SEAM_BIAS);

        let base_gradient_start = if end_angle.deg < 720.0 {
            ring.start_color()
        } else {
            ring.end_color()
        };
        let end_cap_color = Color::lerp(
            ring.start_color(),
            ring.end_color(),
            1.0 - end_angle.deg / 360.0,
        );
        let shadow_opacity = blend::smooth_step(SHADOW_RAMP.0, SHADOW_RAMP.1, completion);

        Ok(Self {
            center,
            radius,
            thickness,
            completion,
            start_angle,
            end_angle,
            wrapped_end_angle,
            start_point,
            end_point,
            base_gradient_start,
            end_cap_color,
            shadow_opacity,
            overflow: ring.completion > 1.0,
        })
    }

    #[inline]
    pub fn half_thickness(&self) -> f32 {
        self.thickness / 2.0
    }

    /// Side length of the icon's aspect-fit box.
    #[inline]
    pub fn icon_size(&self) -> f32 {
        self.thickness * ICON_SIZE_RATIO
    }

    /// End-cap shadow blur radius.
    #[inline]
    pub fn shadow_blur(&self) -> f32 {
        self.half_thickness() / 4.0
    }
}

/// Records one ring into `painter`, back to front: track, start cap, base
/// gradient arc, overflow arc, shadowed end cap, end cap, icon — all inside
/// one rasterized layer rotated 270° about the center, so the sweep starts
/// at 12 o'clock and runs clockwise.
pub fn paint_ring(
    ring: &Ring,
    thickness: Option<f32>,
    bounds: Rect,
    painter: &mut RingPainter<'_>,
) -> Result<(), RingError> {
    let geom = RingGeometry::derive(ring, thickness, bounds)?;
    let half = geom.half_thickness();

    painter.begin_layer(Transform2::rotation_about(Angle::degrees(270.0), geom.center));

    // Track.
    painter.stroke_circle(
        geom.center,
        geom.radius,
        geom.thickness,
        ring.start_color().opacity(TRACK_OPACITY),
    );

    // Start cap, bulging against the sweep so it covers the seam behind
    // angle 0.
    painter.fill_cap(geom.start_point, half, geom.start_angle, ring.start_color(), None);

    // Base gradient, first lap only. The start-side stop snaps once the
    // sweep wraps a second full turn; the snap must stay discrete, which is
    // why the gradient is rebuilt from the geometry every frame.
    painter.stroke_arc(
        geom.center,
        geom.radius,
        geom.start_angle + SEAM_BIAS,
        geom.end_angle,
        StrokeStyle::butt(geom.thickness),
        ConicGradient::sweep(geom.center, geom.base_gradient_start, ring.end_color()),
    );

    // Current partial lap past the first, solid in the end color.
    if geom.overflow {
        painter.stroke_arc(
            geom.center,
            geom.radius,
            geom.start_angle - SEAM_BIAS,
            geom.wrapped_end_angle,
            StrokeStyle::butt(geom.thickness),
            ring.end_color(),
        );
    }

    let cap_rotation = geom.end_angle + Angle::degrees(180.0);

    // End-cap shadow. A separate half-disc slightly smaller than the cap so
    // the blur never opens a seam, clipped to the clockwise side of the arc
    // so the swept stroke cannot shadow itself.
    if geom.shadow_opacity > 0.0 {
        painter.push_clip(ClipShape::ArcStroke(ArcStrokeClip {
            center: geom.center,
            radius: geom.radius,
            start: geom.end_angle,
            end: geom.end_angle + Angle::degrees(180.0),
            width: geom.thickness,
        }));
        painter.fill_cap(
            geom.end_point,
            half - 0.1,
            cap_rotation,
            geom.end_cap_color,
            Some(Shadow::new(
                Color::black().with_alpha(geom.shadow_opacity),
                geom.shadow_blur(),
            )),
        );
        painter.pop_clip();
    }

    // End cap.
    painter.fill_cap(geom.end_point, half, cap_rotation, geom.end_cap_color, None);

    // Icon, counter-rotated a quarter turn so it reads upright under the
    // layer rotation.
    if let Some(icon) = ring.icon() {
        painter.draw_image(
            icon.image().clone(),
            geom.start_point,
            geom.icon_size(),
            Angle::degrees(90.0),
        );
    }

    painter.end_layer();
    Ok(())
}

/// Renders one ring into a fresh draw list.
pub fn render_ring(ring: &Ring, thickness: Option<f32>, bounds: Rect) -> Result<DrawList, RingError> {
    let mut list = DrawList::new();
    let mut painter = RingPainter::new(&mut list);
    paint_ring(ring, thickness, bounds, &mut painter)?;
    log::trace!("ring {:?}: {} draw ops", ring.id(), list.items().len());
    Ok(list)
}
