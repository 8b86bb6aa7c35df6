//! Halo rings — concentric completion-ring gauges recorded as draw streams.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use halo_rings::prelude::*;
//!
//! let stack = RingStack::new(25.0, 3.0)
//!     .ring(Ring::new(
//!         0.5,
//!         Color::from_srgb_u8(0, 120, 221, 255),
//!         Color::from_srgb_u8(239, 72, 120, 255),
//!     ));
//! let draw_list = stack.render(Rect::square(0.0, 0.0, 200.0))?;
//! // Replay draw_list against your 2D backend.
//! ```
//!
//! # Animation
//!
//! `Ring::completion` is the only animatable field. Overwrite it once per
//! frame — typically from a [`CompletionTimeline`] stepped by a
//! [`FrameClock`] — and re-render. Every derived quantity (gradient snap,
//! cap colors, shadow ramp, overflow arc) is recomputed from that single
//! scalar each frame, so discrete changes never cross-fade and dropped
//! frames stutter without desyncing.

pub mod animation;
pub mod error;
pub mod keyed;
pub mod painter;
pub mod renderer;
pub mod ring;
pub mod stack;

pub use animation::{CompletionTimeline, Easing, FrameClock, Repeat};
pub use error::RingError;
pub use keyed::{Keyed, keyed_by};
pub use painter::RingPainter;
pub use renderer::{RingGeometry, SEAM_BIAS, paint_ring, render_ring};
pub use ring::{Icon, Ring, RingId};
pub use stack::RingStack;

/// Everything needed to build and drive ring gauges.
pub mod prelude {
    pub use crate::animation::{CompletionTimeline, Easing, FrameClock, Repeat};
    pub use crate::error::RingError;
    pub use crate::painter::RingPainter;
    pub use crate::renderer::{RingGeometry, paint_ring, render_ring};
    pub use crate::ring::{Icon, Ring, RingId};
    pub use crate::stack::RingStack;

    // Re-export the engine primitives callers need.
    pub use halo_engine::coords::{Angle, Rect, Transform2, Vec2};
    pub use halo_engine::paint::{Color, ColorStop, ConicGradient, Paint, Shadow};
    pub use halo_engine::scene::{DrawCmd, DrawList};
}
