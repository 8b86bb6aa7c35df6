//! Halo engine crate.
//!
//! Renderer-agnostic drawing primitives shared by the components built on
//! this workspace: geometry types, a paint model, and a recorded draw stream
//! that hosts replay against their own 2D backend.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod scene;
