use crate::coords::{Angle, Vec2};
use crate::paint::{Color, Shadow};
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Half-disc cap draw payload.
///
/// The half-disc covers local angles [0°, 180°] of the disc of `radius`
/// around `center`, then rotates by `rotation` about `center`. A cap rotated
/// to `arc_angle + 180°` bulges forward along the sweep direction at
/// `arc_angle`; a rotation of `arc_angle` alone bulges backward.
///
/// Caps are separate filled shapes (rather than stroke line-caps) so a cap
/// can carry its own color and shadow independently of the arc it terminates.
#[derive(Debug, Clone, PartialEq)]
pub struct CapCmd {
    pub center: Vec2,
    pub radius: f32,
    pub rotation: Angle,
    pub color: Color,
    pub shadow: Option<Shadow>,
}

impl CapCmd {
    #[inline]
    pub fn new(
        center: Vec2,
        radius: f32,
        rotation: Angle,
        color: Color,
        shadow: Option<Shadow>,
    ) -> Self {
        Self { center, radius, rotation, color, shadow }
    }
}

impl DrawList {
    /// Records a filled half-disc cap.
    #[inline]
    pub fn push_cap(
        &mut self,
        z: ZIndex,
        center: Vec2,
        radius: f32,
        rotation: Angle,
        color: Color,
        shadow: Option<Shadow>,
    ) {
        self.push(z, DrawCmd::Cap(CapCmd::new(center, radius, rotation, color, shadow)));
    }
}
