use crate::coords::Vec2;
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::StrokeStyle;

/// Full-circle draw payload.
///
/// `stroke: None` fills the disc; `Some` strokes the circumference along its
/// centerline.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub paint: Paint,
    pub stroke: Option<StrokeStyle>,
}

impl CircleCmd {
    #[inline]
    pub fn new(center: Vec2, radius: f32, paint: Paint, stroke: Option<StrokeStyle>) -> Self {
        Self { center, radius, paint, stroke }
    }
}

impl DrawList {
    /// Records a circle draw command.
    #[inline]
    pub fn push_circle(
        &mut self,
        z: ZIndex,
        center: Vec2,
        radius: f32,
        paint: Paint,
        stroke: Option<StrokeStyle>,
    ) {
        self.push(z, DrawCmd::Circle(CircleCmd::new(center, radius, paint, stroke)));
    }

    /// Records a stroked circle of the given stroke width.
    #[inline]
    pub fn push_stroked_circle(
        &mut self,
        z: ZIndex,
        center: Vec2,
        radius: f32,
        width: f32,
        paint: Paint,
    ) {
        self.push_circle(z, center, radius, paint, Some(StrokeStyle::butt(width)));
    }
}
