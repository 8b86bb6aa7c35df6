use crate::coords::{Rect, Transform2};

use super::{ClipShape, DrawCmd, Layer, LayerId, SortKey, ZIndex};

/// A single draw item: sort key + command + recording scopes.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
    /// Effective clip at push time. `None` = no clipping (draw everywhere).
    pub clip: Option<ClipShape>,
    /// Rasterization group this item belongs to.
    pub layer: LayerId,
}

/// Recorded draw stream for a frame.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame
///   allocation once warmed
///
/// # Clipping
///
/// Use [`push_clip`](Self::push_clip) / [`pop_clip`](Self::pop_clip) to scope
/// commands to a clip shape. Rect clips intersect with a parent rect clip;
/// other shape combinations do not compose, and the innermost shape wins.
///
/// # Layers
///
/// Use [`begin_layer`](Self::begin_layer) / [`end_layer`](Self::end_layer) to
/// group commands into a rasterization unit with its own transform; see
/// [`Layer`] for the host contract. Items pushed outside any scope belong to
/// [`LayerId::ROOT`], which carries the identity transform.
#[derive(Debug)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,

    /// Stack of active clip shapes; the top is the current effective clip.
    clip_stack: Vec<ClipShape>,

    /// All layers recorded so far; index 0 is always the root layer.
    layers: Vec<Layer>,
    /// Stack of open layer scopes.
    layer_stack: Vec<LayerId>,
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_order: 0,
            sorted_indices: Vec::new(),
            sorted_dirty: true,
            clip_stack: Vec::new(),
            layers: vec![Layer { id: LayerId::ROOT, transform: Transform2::IDENTITY }],
            layer_stack: Vec::new(),
        }
    }

    /// Clears recorded items and scopes. Keeps allocated capacity for reuse.
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
        self.clip_stack.clear();
        self.layers.truncate(1);
        self.layer_stack.clear();
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    /// All layers recorded so far, root first.
    #[inline]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Layer that newly pushed items will belong to.
    #[inline]
    pub fn current_layer(&self) -> LayerId {
        self.layer_stack.last().copied().unwrap_or(LayerId::ROOT)
    }

    /// Pushes a draw command with the given z-index.
    ///
    /// The item inherits the current clip and layer scopes.
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
            clip: self.clip_stack.last().copied(),
            layer: self.current_layer(),
        });

        self.sorted_dirty = true;
    }

    /// Begins a clip scope. Commands pushed until [`pop_clip`](Self::pop_clip)
    /// are clipped to `clip`.
    ///
    /// Calls must be balanced with `pop_clip`.
    pub fn push_clip(&mut self, clip: ClipShape) {
        let effective = match (self.clip_stack.last(), clip) {
            // Rect-in-rect intersects; no overlap yields a zero-area rect so
            // the host skips those draw calls.
            (Some(&ClipShape::Rect(parent)), ClipShape::Rect(rect)) => ClipShape::Rect(
                parent
                    .intersect(rect)
                    .unwrap_or(Rect::new(0.0, 0.0, 0.0, 0.0)),
            ),
            // Arbitrary shapes do not compose; the innermost shape wins.
            _ => clip,
        };
        self.clip_stack.push(effective);
    }

    /// Ends the most recent clip scope.
    ///
    /// # Panics
    /// Panics (debug only) if called without a matching `push_clip`.
    pub fn pop_clip(&mut self) {
        debug_assert!(!self.clip_stack.is_empty(), "pop_clip without matching push_clip");
        self.clip_stack.pop();
    }

    /// Begins a rasterization scope with `transform` applied at composite
    /// time. Calls must be balanced with [`end_layer`](Self::end_layer).
    pub fn begin_layer(&mut self, transform: Transform2) -> LayerId {
        let id = LayerId(self.layers.len() as u32);
        self.layers.push(Layer { id, transform });
        self.layer_stack.push(id);
        id
    }

    /// Ends the most recent layer scope.
    ///
    /// # Panics
    /// Panics (debug only) if called without a matching `begin_layer`.
    pub fn end_layer(&mut self) {
        debug_assert!(!self.layer_stack.is_empty(), "end_layer without matching begin_layer");
        self.layer_stack.pop();
    }

    /// Returns indices into `items` in paint order (back-to-front).
    ///
    /// This buffer is owned by the list and reused across frames.
    pub fn indices_in_paint_order(&mut self) -> &[usize] {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }
        &self.sorted_indices
    }

    /// Iterates items in paint order without cloning draw commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Stable ordering is ensured by SortKey including insertion order.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Angle, Vec2};
    use crate::paint::{Color, Paint};

    fn dot(list: &mut DrawList, z: i32) {
        list.push_circle(
            ZIndex::new(z),
            Vec2::zero(),
            1.0,
            Paint::Solid(Color::white()),
            None,
        );
    }

    // ── ordering ──────────────────────────────────────────────────────────

    #[test]
    fn paint_order_sorts_by_z_then_insertion() {
        let mut list = DrawList::new();
        dot(&mut list, 5);
        dot(&mut list, 1);
        dot(&mut list, 5);
        assert_eq!(list.indices_in_paint_order(), &[1, 0, 2]);
    }

    // ── clip scopes ───────────────────────────────────────────────────────

    #[test]
    fn rect_clips_intersect() {
        let mut list = DrawList::new();
        list.push_clip(ClipShape::Rect(Rect::new(0.0, 0.0, 10.0, 10.0)));
        list.push_clip(ClipShape::Rect(Rect::new(5.0, 5.0, 10.0, 10.0)));
        dot(&mut list, 0);
        list.pop_clip();
        list.pop_clip();

        assert_eq!(
            list.items()[0].clip,
            Some(ClipShape::Rect(Rect::new(5.0, 5.0, 5.0, 5.0)))
        );
    }

    #[test]
    fn innermost_non_rect_clip_wins() {
        let arc = ClipShape::ArcStroke(crate::scene::ArcStrokeClip {
            center: Vec2::zero(),
            radius: 10.0,
            start: Angle::ZERO,
            end: Angle::degrees(180.0),
            width: 4.0,
        });

        let mut list = DrawList::new();
        list.push_clip(ClipShape::Rect(Rect::new(0.0, 0.0, 10.0, 10.0)));
        list.push_clip(arc);
        dot(&mut list, 0);
        list.pop_clip();
        dot(&mut list, 0);
        list.pop_clip();

        assert_eq!(list.items()[0].clip, Some(arc));
        assert_eq!(
            list.items()[1].clip,
            Some(ClipShape::Rect(Rect::new(0.0, 0.0, 10.0, 10.0)))
        );
    }

    // ── layer scopes ──────────────────────────────────────────────────────

    #[test]
    fn items_inherit_open_layer() {
        let mut list = DrawList::new();
        dot(&mut list, 0);
        let id = list.begin_layer(Transform2::IDENTITY);
        dot(&mut list, 1);
        list.end_layer();
        dot(&mut list, 2);

        assert_eq!(list.items()[0].layer, LayerId::ROOT);
        assert_eq!(list.items()[1].layer, id);
        assert_eq!(list.items()[2].layer, LayerId::ROOT);
        assert_eq!(list.layers().len(), 2);
    }

    #[test]
    fn clear_resets_to_root_layer() {
        let mut list = DrawList::new();
        list.begin_layer(Transform2::IDENTITY);
        dot(&mut list, 0);
        list.end_layer();
        list.clear();

        assert!(list.items().is_empty());
        assert_eq!(list.layers().len(), 1);
        assert_eq!(list.current_layer(), LayerId::ROOT);
    }
}
