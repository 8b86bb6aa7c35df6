use halo_engine::coords::Rect;
use halo_engine::scene::DrawList;

use crate::error::RingError;
use crate::keyed::keyed_by;
use crate::painter::RingPainter;
use crate::renderer::paint_ring;
use crate::ring::Ring;

/// Concentric stack of completion rings.
///
/// Rings are listed innermost first; ring `i` renders into the stack bounds
/// inset by `i * (thickness + spacing)` on every side, so all rings share
/// one stroke thickness separated by a fixed gap. The caller chooses
/// `spacing >= 0`; no overlap avoidance is applied.
///
/// # Example
/// ```rust,ignore
/// RingStack::new(50.0, 3.0)
///     .ring(Ring::new(0.5, red, pink))
///     .ring(Ring::new(0.8, green, lime))
/// ```
pub struct RingStack {
    rings: Vec<Ring>,
    thickness: f32,
    spacing: f32,
}

impl RingStack {
    pub fn new(thickness: f32, spacing: f32) -> Self {
        Self { rings: Vec::new(), thickness, spacing }
    }

    /// Appends a ring outside the ones already added.
    pub fn ring(mut self, ring: Ring) -> Self {
        self.rings.push(ring);
        self
    }

    /// Appends several rings, innermost first.
    pub fn rings(mut self, rings: impl IntoIterator<Item = Ring>) -> Self {
        self.rings.extend(rings);
        self
    }

    #[inline]
    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    #[inline]
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    #[inline]
    pub fn ring_count(&self) -> usize {
        self.rings.len()
    }

    /// Mutable access for the driving scheduler to overwrite each ring's
    /// `completion` between frames.
    #[inline]
    pub fn rings_mut(&mut self) -> &mut [Ring] {
        &mut self.rings
    }

    /// Records every ring into `painter`. List order is paint order: each
    /// ring is its own rasterized layer, later rings compositing on top.
    pub fn paint(&self, bounds: Rect, painter: &mut RingPainter<'_>) -> Result<(), RingError> {
        for entry in keyed_by(&self.rings, Ring::id) {
            let inset = entry.index as f32 * (self.thickness + self.spacing);
            log::trace!("ring {:?} at stack index {}", entry.id, entry.index);
            paint_ring(entry.item, Some(self.thickness), bounds.inset(inset), painter)?;
        }
        Ok(())
    }

    /// Renders the whole stack into a fresh draw list.
    pub fn render(&self, bounds: Rect) -> Result<DrawList, RingError> {
        let mut list = DrawList::new();
        let mut painter = RingPainter::new(&mut list);
        self.paint(bounds, &mut painter)?;
        log::debug!(
            "stack: {} rings, {} draw ops",
            self.rings.len(),
            list.items().len()
        );
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use halo_engine::paint::Color;
    use halo_engine::scene::{CircleCmd, DrawCmd};

    fn ring(completion: f32) -> Ring {
        Ring::new(completion, Color::black(), Color::white())
    }

    fn tracks(list: &DrawList) -> Vec<CircleCmd> {
        list.items()
            .iter()
            .filter_map(|i| match &i.cmd {
                DrawCmd::Circle(c) => Some(c.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn empty_stack_renders_nothing() {
        let list = RingStack::new(20.0, 5.0)
            .render(Rect::square(0.0, 0.0, 300.0))
            .unwrap();
        assert!(list.items().is_empty());
    }

    #[test]
    fn each_ring_outer_edge_steps_in_by_thickness_plus_spacing() {
        let stack = RingStack::new(20.0, 5.0).rings([ring(0.3), ring(0.6), ring(0.9)]);
        let list = stack.render(Rect::square(0.0, 0.0, 300.0)).unwrap();

        let tracks = tracks(&list);
        assert_eq!(tracks.len(), 3);
        for (i, track) in tracks.iter().enumerate() {
            // Outer edge = centerline radius + half thickness.
            let outer = track.radius + 10.0;
            let expected = 150.0 - i as f32 * 25.0;
            assert!(
                (outer - expected).abs() < 1e-4,
                "ring {i}: outer edge {outer}, expected {expected}"
            );
        }
    }

    #[test]
    fn rings_share_the_stack_center() {
        let stack = RingStack::new(20.0, 5.0).rings([ring(0.3), ring(0.6)]);
        let list = stack.render(Rect::square(10.0, 10.0, 280.0)).unwrap();

        for track in tracks(&list) {
            assert_eq!(track.center, Rect::square(10.0, 10.0, 280.0).center());
        }
    }

    #[test]
    fn each_ring_gets_its_own_layer() {
        let stack = RingStack::new(20.0, 5.0).rings([ring(0.3), ring(0.6), ring(0.9)]);
        let list = stack.render(Rect::square(0.0, 0.0, 300.0)).unwrap();
        // Root plus one per ring.
        assert_eq!(list.layers().len(), 4);
    }

    #[test]
    fn non_square_bounds_propagate_the_error() {
        let stack = RingStack::new(20.0, 5.0).ring(ring(0.3));
        let err = stack.render(Rect::new(0.0, 0.0, 300.0, 200.0));
        assert!(matches!(err, Err(RingError::NonSquareBounds { .. })));
    }

    #[test]
    fn later_rings_draw_on_top() {
        let stack = RingStack::new(20.0, 5.0).rings([ring(0.3), ring(0.6)]);
        let mut list = stack.render(Rect::square(0.0, 0.0, 300.0)).unwrap();

        // Paint order matches insertion order: one ascending z per primitive
        // across the whole stack.
        let order: Vec<_> = list.indices_in_paint_order().to_vec();
        let expected: Vec<_> = (0..order.len()).collect();
        assert_eq!(order, expected);
    }
}
