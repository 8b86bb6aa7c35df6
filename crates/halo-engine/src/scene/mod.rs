//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands
//! - provide deterministic ordering (z-index + insertion order)
//! - scope commands under clip shapes and rasterized layers
//! - keep shape-specific payloads isolated per shape file under
//!   `scene::shapes`
//!
//! Extending the scene: add a shape module under `scene::shapes`, a variant
//! on [`DrawCmd`], push helpers inside that shape module, and teach the host
//! renderer the new payload.

mod clip;
mod cmd;
mod key;
mod layer;
mod list;

pub mod shapes;

pub use clip::{ArcStrokeClip, ClipShape};
pub use cmd::DrawCmd;
pub use key::{SortKey, ZIndex};
pub use layer::{Layer, LayerId};
pub use list::{DrawItem, DrawList};
pub use shapes::{ArcCmd, CapCmd, CircleCmd, ImageCmd, LineCap, StrokeStyle};
