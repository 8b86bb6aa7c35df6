use std::sync::Arc;

use halo_engine::coords::{Angle, Transform2, Vec2};
use halo_engine::paint::{Color, Paint, Shadow};
use halo_engine::scene::{ClipShape, DrawList, LayerId, StrokeStyle, ZIndex};
use image::RgbaImage;

/// Recording surface for ring primitives.
///
/// Wraps the engine [`DrawList`], allocating one z-layer per primitive so
/// back-to-front draw order matches push order. A painter can record several
/// rings into one list; each call site scopes its ring in its own
/// rasterized layer.
pub struct RingPainter<'a> {
    draw_list: &'a mut DrawList,
    z: i32,
}

impl<'a> RingPainter<'a> {
    pub fn new(draw_list: &'a mut DrawList) -> Self {
        Self { draw_list, z: 0 }
    }

    // ── layers & clipping ─────────────────────────────────────────────────

    /// Begin a rasterization scope. Must be paired with
    /// [`end_layer`](Self::end_layer).
    pub fn begin_layer(&mut self, transform: Transform2) -> LayerId {
        self.draw_list.begin_layer(transform)
    }

    /// End the most recent rasterization scope.
    pub fn end_layer(&mut self) {
        self.draw_list.end_layer();
    }

    /// Begin a clip scope. Must be paired with [`pop_clip`](Self::pop_clip).
    pub fn push_clip(&mut self, clip: ClipShape) {
        self.draw_list.push_clip(clip);
    }

    /// End the most recent clip scope.
    pub fn pop_clip(&mut self) {
        self.draw_list.pop_clip();
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Full circle stroked at `width` along its centerline.
    pub fn stroke_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        width: f32,
        paint: impl Into<Paint>,
    ) {
        let z = self.next_z();
        self.draw_list.push_stroked_circle(z, center, radius, width, paint.into());
    }

    /// Arc from `start` to `end` with the given stroke style.
    pub fn stroke_arc(
        &mut self,
        center: Vec2,
        radius: f32,
        start: Angle,
        end: Angle,
        stroke: StrokeStyle,
        paint: impl Into<Paint>,
    ) {
        let z = self.next_z();
        self.draw_list.push_arc(z, center, radius, start, end, paint.into(), stroke);
    }

    /// Filled half-disc cap; see `CapCmd` for the rotation convention.
    pub fn fill_cap(
        &mut self,
        center: Vec2,
        radius: f32,
        rotation: Angle,
        color: Color,
        shadow: Option<Shadow>,
    ) {
        let z = self.next_z();
        self.draw_list.push_cap(z, center, radius, rotation, color, shadow);
    }

    /// Aspect-fit image placement.
    pub fn draw_image(&mut self, image: Arc<RgbaImage>, center: Vec2, size: f32, rotation: Angle) {
        let z = self.next_z();
        self.draw_list.push_image(z, image, center, size, rotation);
    }

    // ── internal ──────────────────────────────────────────────────────────

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}
