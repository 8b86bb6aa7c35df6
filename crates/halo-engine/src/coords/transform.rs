use super::{Angle, Vec2};

/// 2D affine transform.
///
/// Maps `p` to `(m00·p.x + m01·p.y + t.x, m10·p.x + m11·p.y + t.y)`.
/// Rotation is positive toward +Y, so in the top-left-origin space a positive
/// angle turns clockwise on screen.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform2 {
    pub m00: f32,
    pub m01: f32,
    pub m10: f32,
    pub m11: f32,
    pub t: Vec2,
}

impl Transform2 {
    pub const IDENTITY: Self = Self {
        m00: 1.0,
        m01: 0.0,
        m10: 0.0,
        m11: 1.0,
        t: Vec2::zero(),
    };

    /// Rotation by `angle` about `pivot` (translate · rotate · translate).
    pub fn rotation_about(angle: Angle, pivot: Vec2) -> Self {
        let rad = angle.to_radians();
        let (s, c) = rad.sin_cos();
        Self {
            m00: c,
            m01: -s,
            m10: s,
            m11: c,
            t: Vec2::new(
                pivot.x - c * pivot.x + s * pivot.y,
                pivot.y - s * pivot.x - c * pivot.y,
            ),
        }
    }

    #[inline]
    pub fn apply(self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.m00 * p.x + self.m01 * p.y + self.t.x,
            self.m10 * p.x + self.m11 * p.y + self.t.y,
        )
    }

    #[inline]
    pub fn is_identity(self) -> bool {
        self == Self::IDENTITY
    }
}
