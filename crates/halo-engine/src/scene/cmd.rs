use crate::scene::shapes::{ArcCmd, CapCmd, CircleCmd, ImageCmd};

/// Renderer-agnostic draw command stream.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Circle(CircleCmd),
    Arc(ArcCmd),
    Cap(CapCmd),
    Image(ImageCmd),
}
