use crate::coords::{Angle, Vec2};
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::StrokeStyle;

/// Circular-arc draw payload.
///
/// Angles follow the scene convention (0° = +X, increasing toward +Y); the
/// sweep runs from `start` to `end` in that direction. `end` may exceed one
/// full turn past `start`; the host draws the arc as given without wrapping.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcCmd {
    pub center: Vec2,
    pub radius: f32,
    pub start: Angle,
    pub end: Angle,
    pub paint: Paint,
    pub stroke: StrokeStyle,
}

impl ArcCmd {
    #[inline]
    pub fn new(
        center: Vec2,
        radius: f32,
        start: Angle,
        end: Angle,
        paint: Paint,
        stroke: StrokeStyle,
    ) -> Self {
        Self { center, radius, start, end, paint, stroke }
    }

    /// Sweep length.
    #[inline]
    pub fn sweep(&self) -> Angle {
        self.end - self.start
    }
}

impl DrawList {
    /// Records a stroked arc.
    #[inline]
    pub fn push_arc(
        &mut self,
        z: ZIndex,
        center: Vec2,
        radius: f32,
        start: Angle,
        end: Angle,
        paint: Paint,
        stroke: StrokeStyle,
    ) {
        self.push(z, DrawCmd::Arc(ArcCmd::new(center, radius, start, end, paint, stroke)));
    }
}
