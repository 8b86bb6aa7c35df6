use crate::coords::{Angle, Rect, Vec2};

/// The stroked band of a circular arc: every point within `width / 2` of the
/// centerline arc of `radius` around `center`, between `start` and `end`.
///
/// Used to confine a shape (e.g. a cap's drop shadow) to one side of a swept
/// ring stroke.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ArcStrokeClip {
    pub center: Vec2,
    pub radius: f32,
    pub start: Angle,
    pub end: Angle,
    pub width: f32,
}

/// Clip region applied to a draw item.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ClipShape {
    /// Axis-aligned scissor rect.
    Rect(Rect),
    /// Stroked-arc band.
    ArcStroke(ArcStrokeClip),
}
