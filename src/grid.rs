//! Pixel-grid to complex-plane mapping.

use crate::pixel::Complex;

/// Maps linear pixel indices of a `width × height` image to grid positions
/// and on to complex-plane points.
///
/// Row 0 is the top of the image and carries the highest imaginary part;
/// the imaginary axis runs opposite to the row index. The two base offsets
/// are precomputed so each pixel costs one multiply-add per axis.
#[derive(Clone, Copy, Debug)]
pub struct Grid {
    width: u32,
    height: u32,
    base_x: f64,
    base_y: f64,
    pixel_size: f64,
}

impl Grid {
    /// `centre` is the plane point under the midpoint of the image;
    /// `pixel_size` is plane units per pixel, uniform in both axes.
    /// `width` and `height` must be at least 1.
    pub fn new(centre: Complex, width: u32, height: u32, pixel_size: f64) -> Self {
        debug_assert!(width > 0 && height > 0);
        let half = pixel_size * 0.5;
        Grid {
            width,
            height,
            base_x: centre.real - (width - 1) as f64 * half,
            base_y: centre.imaginary + (height - 1) as f64 * half,
            pixel_size,
        }
    }

    /// Grid position of a linear index, row-major from the top-left.
    ///
    /// `index` must lie inside the image; the returned coordinates are
    /// 16-bit, so rows past 65535 cannot be represented anyway.
    pub fn locate(&self, index: u32) -> (u16, u16) {
        debug_assert!(
            u64::from(index) < u64::from(self.width) * u64::from(self.height),
            "index {index} outside the image"
        );
        ((index % self.width) as u16, (index / self.width) as u16)
    }

    /// Plane point under pixel `(px, py)`.
    pub fn point(&self, px: u16, py: u16) -> Complex {
        Complex {
            real: self.base_x + f64::from(px) * self.pixel_size,
            imaginary: self.base_y - f64::from(py) * self.pixel_size,
        }
    }
}
