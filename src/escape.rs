//! Escape-time evaluation of points under z ← z² + c.

/// Squared orbit magnitude beyond which a point counts as escaped.
///
/// Far above the standard radius of 2: letting the orbit run on for a few
/// extra doublings makes the smoothed count in [`evaluate`] continuous
/// without a per-iteration correction.
pub const ESCAPE_THRESHOLD: f64 = 4e30;

const FIRST_CHECKPOINT: u32 = 10;

/// Classification of one point's orbit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Escape {
    /// The orbit left the escape circle; the payload is the smoothed
    /// fractional iteration count, never negative and always below the
    /// iteration budget.
    Escaped(f64),
    /// The orbit is treated as never escaping: the budget ran out, a cycle
    /// was detected, or the magnitude left the finite range.
    Bounded,
}

impl Escape {
    pub fn is_bounded(&self) -> bool {
        matches!(self, Escape::Bounded)
    }
}

/// Iterates z ← z² + c from z = c and classifies the orbit within
/// `max_iters` iterations.
///
/// A checkpoint of the orbit is kept and compared against every new point;
/// landing exactly on the checkpoint proves a cycle, so the point is bounded
/// and the remaining budget can be skipped. The checkpoint is refreshed on a
/// growing schedule (iterations 10, 21, 33, …) to catch cycles of any period
/// entered at any depth. Equality is exact: only orbits that are truly
/// periodic in f64 short-circuit, a tolerance would misclassify slow
/// escapers near the boundary.
pub fn evaluate(cx: f64, cy: f64, max_iters: u32) -> Escape {
    if max_iters == 0 {
        return Escape::Bounded;
    }

    let (mut x, mut y) = (cx, cy);
    let (mut lx, mut ly) = (cx, cy);
    let mut x2 = x * x;
    let mut y2 = y * y;
    let mut it = 0u32;
    let mut mark = FIRST_CHECKPOINT.min(max_iters);
    let mut mark_inc = FIRST_CHECKPOINT;

    while x2 + y2 < ESCAPE_THRESHOLD && it < max_iters {
        y = 2.0 * x * y + cy;
        x = x2 - y2 + cx;
        if x == lx && y == ly {
            return Escape::Bounded;
        }
        x2 = x * x;
        y2 = y * y;
        it += 1;
        if it >= mark {
            mark_inc += 1;
            mark = mark.saturating_add(mark_inc).min(max_iters);
            lx = x;
            ly = y;
        }
    }

    let magnitude = x2 + y2;
    if it >= max_iters || !magnitude.is_finite() {
        // Overflow and NaN land here too, so every smoothed count downstream
        // is a finite float.
        return Escape::Bounded;
    }
    Escape::Escaped((it as f64 - magnitude.log2().log2() + 1.5).max(0.0))
}
