//! Colouring algorithms.

use once_cell::sync::Lazy;

use crate::escape::Escape;

/// Every bounded point is painted this, fully opaque.
pub const BLACK: [u8; 4] = [0, 0, 0, 255];

/// Upper asymptote shared by all three channel curves. Slightly under 256 so
/// the floor in [`Curve::value`] can reach 255 but never 256.
const CEILING: f64 = 255.99;

/// One logistic channel curve, `value(x) = ⌊a + (255.99 − a) / (1 + e^(m(b − x)))⌋`.
///
/// `a` is not chosen directly: it is derived so the curve passes through a
/// reference point `(x0, floor)`, pinning the channel's value for the
/// fastest escapers.
#[derive(Clone, Copy, Debug)]
pub struct Curve {
    a: f64,
    m: f64,
    b: f64,
}

impl Curve {
    fn new(m: f64, b: f64, x0: f64, floor: f64) -> Self {
        let a = (floor - CEILING) * (1.0 + (m * (x0 - b)).exp()) + CEILING;
        Curve { a, m, b }
    }

    /// Channel byte for a smoothed iteration count.
    ///
    /// Total over all of f64: the raw curve value is clamped into `[0, 255]`
    /// after flooring, and a NaN input clamps to 0.
    pub fn value(&self, x: f64) -> u8 {
        let raw = self.a + (CEILING - self.a) / (1.0 + (self.m * (self.b - x)).exp());
        raw.floor().clamp(0.0, 255.0) as u8
    }
}

/// The red, green, and blue curves, in channel order. Built once on first
/// use; the parameters are fixed for the life of the process.
static CURVES: Lazy<[Curve; 3]> = Lazy::new(|| {
    [
        Curve::new(0.02, 41.0, 16.0, 0.0),
        Curve::new(0.022, 71.0, 16.0, 8.0),
        Curve::new(0.022, 71.0, 16.0, 55.0),
    ]
});

pub fn curves() -> &'static [Curve; 3] {
    &CURVES
}

/// RGBA for an orbit classification: black for bounded points, the three
/// channel curves applied to the smoothed count otherwise.
pub fn rgba(escape: Escape) -> [u8; 4] {
    match escape {
        Escape::Bounded => BLACK,
        Escape::Escaped(smooth) => {
            let [r, g, b] = [
                CURVES[0].value(smooth),
                CURVES[1].value(smooth),
                CURVES[2].value(smooth),
            ];
            [r, g, b, 255]
        }
    }
}
