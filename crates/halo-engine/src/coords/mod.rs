//! Coordinate and geometry types shared across scene recording and components.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Angle 0° points along +X and increases toward +Y. Components that want a
//! different visual origin (e.g. a gauge starting at 12 o'clock) apply a
//! layer transform rather than bending this convention.

mod angle;
mod rect;
mod transform;
mod vec2;

pub use angle::Angle;
pub use rect::Rect;
pub use transform::Transform2;
pub use vec2::Vec2;
