mod arc;
mod cap;
mod circle;
mod image;

pub use arc::ArcCmd;
pub use cap::CapCmd;
pub use circle::CircleCmd;
pub use image::ImageCmd;

/// Line cap drawn at stroke endpoints.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum LineCap {
    /// Flush ends exactly at the endpoint.
    #[default]
    Butt,
    /// Semicircular ends extending half the stroke width.
    Round,
}

/// Stroke applied along a path.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StrokeStyle {
    pub width: f32,
    pub cap: LineCap,
}

impl StrokeStyle {
    #[inline]
    pub const fn new(width: f32, cap: LineCap) -> Self {
        Self { width, cap }
    }

    #[inline]
    pub const fn butt(width: f32) -> Self {
        Self::new(width, LineCap::Butt)
    }

    #[inline]
    pub const fn round(width: f32) -> Self {
        Self::new(width, LineCap::Round)
    }
}
