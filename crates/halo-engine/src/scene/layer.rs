use crate::coords::Transform2;

/// Identifies a rasterization group within a
/// [`DrawList`](super::DrawList).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct LayerId(pub u32);

impl LayerId {
    /// The implicit top-level layer every list starts with.
    pub const ROOT: Self = Self(0);
}

/// A rasterization group.
///
/// The host must render a non-root layer's items into an offscreen surface
/// and composite that surface once, with `transform` applied, at the
/// position the layer's items occupy in paint order. Rasterizing the group
/// as a unit keeps anti-aliasing and shadow compositing consistent across
/// its primitives instead of blending each primitive into the scene
/// independently.
///
/// Items belonging to one layer are always contiguous in paint order: layers
/// are recorded as balanced begin/end scopes and never interleave.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Layer {
    pub id: LayerId,
    pub transform: Transform2,
}
