use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use halo_engine::paint::Color;
use image::RgbaImage;

/// Opaque, stable identity for a [`Ring`].
///
/// Assigned at construction from a process-wide counter and copied by
/// `Clone`, so a ring keeps its identity across list reorders and
/// re-renders. Never examined by the renderer; exists for list keying only.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct RingId(u64);

impl RingId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// An icon drawn at a ring's start point.
///
/// Wraps a shared pixel buffer; cloning an icon shares the buffer. Drawn
/// aspect-fit into a box 75% of the ring thickness.
#[derive(Debug, Clone)]
pub struct Icon {
    image: Arc<RgbaImage>,
}

impl Icon {
    pub fn new(image: RgbaImage) -> Self {
        Self { image: Arc::new(image) }
    }

    #[inline]
    pub fn image(&self) -> &Arc<RgbaImage> {
        &self.image
    }
}

/// Buffer identity: two icons are equal when they share pixels.
impl PartialEq for Icon {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.image, &other.image)
    }
}

/// One ring's visual state.
///
/// `completion` is the sole animatable field: 1.0 is a full lap, larger
/// values keep sweeping extra laps, and negatives render as zero. The color
/// endpoints and icon are fixed for the ring's lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    /// Fraction of the sweep. Overwritten by the driving scheduler once per
    /// frame; everything else derives from it at render time.
    pub completion: f32,
    start_color: Color,
    end_color: Color,
    icon: Option<Icon>,
    id: RingId,
}

impl Ring {
    pub fn new(completion: f32, start_color: Color, end_color: Color) -> Self {
        Self {
            completion,
            start_color,
            end_color,
            icon: None,
            id: RingId::next(),
        }
    }

    /// Attaches an icon shown at the ring's start point.
    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    #[inline]
    pub fn start_color(&self) -> Color {
        self.start_color
    }

    #[inline]
    pub fn end_color(&self) -> Color {
        self.end_color
    }

    #[inline]
    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    #[inline]
    pub fn id(&self) -> RingId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring() -> Ring {
        Ring::new(0.5, Color::black(), Color::white())
    }

    #[test]
    fn each_ring_gets_a_fresh_id() {
        assert_ne!(ring().id(), ring().id());
    }

    #[test]
    fn clone_preserves_identity() {
        let a = ring();
        let b = a.clone();
        assert_eq!(a.id(), b.id());
    }

    #[test]
    fn icons_compare_by_shared_buffer() {
        let icon = Icon::new(RgbaImage::new(4, 4));
        assert_eq!(icon, icon.clone());
        assert_ne!(icon, Icon::new(RgbaImage::new(4, 4)));
    }
}
