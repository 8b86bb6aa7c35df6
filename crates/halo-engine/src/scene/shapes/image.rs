use std::sync::Arc;

use image::RgbaImage;

use crate::coords::{Angle, Vec2};
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Image placement payload.
///
/// The image scales to fit inside a `size × size` box around `center`
/// preserving aspect ratio, then rotates by `rotation` about `center`.
#[derive(Debug, Clone)]
pub struct ImageCmd {
    pub image: Arc<RgbaImage>,
    pub center: Vec2,
    pub size: f32,
    pub rotation: Angle,
}

impl ImageCmd {
    #[inline]
    pub fn new(image: Arc<RgbaImage>, center: Vec2, size: f32, rotation: Angle) -> Self {
        Self { image, center, size, rotation }
    }

    /// Aspect-fit dimensions inside the `size × size` box.
    pub fn fitted_size(&self) -> Vec2 {
        let (w, h) = self.image.dimensions();
        if w == 0 || h == 0 {
            return Vec2::zero();
        }
        let scale = (self.size / w as f32).min(self.size / h as f32);
        Vec2::new(w as f32 * scale, h as f32 * scale)
    }
}

/// Buffer identity, not pixel equality: two commands are equal when they
/// place the same shared image.
impl PartialEq for ImageCmd {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.image, &other.image)
            && self.center == other.center
            && self.size == other.size
            && self.rotation == other.rotation
    }
}

impl DrawList {
    /// Records an aspect-fit image placement.
    #[inline]
    pub fn push_image(
        &mut self,
        z: ZIndex,
        image: Arc<RgbaImage>,
        center: Vec2,
        size: f32,
        rotation: Angle,
    ) {
        self.push(z, DrawCmd::Image(ImageCmd::new(image, center, size, rotation)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fitted_size_preserves_aspect_ratio() {
        let img = Arc::new(RgbaImage::new(40, 20));
        let cmd = ImageCmd::new(img, Vec2::zero(), 10.0, Angle::ZERO);
        assert_eq!(cmd.fitted_size(), Vec2::new(10.0, 5.0));
    }

    #[test]
    fn fitted_size_of_empty_image_is_zero() {
        let img = Arc::new(RgbaImage::new(0, 0));
        let cmd = ImageCmd::new(img, Vec2::zero(), 10.0, Angle::ZERO);
        assert_eq!(cmd.fitted_size(), Vec2::zero());
    }
}
