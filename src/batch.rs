//! The batch evaluation protocol.
//!
//! A dispatcher hands over a [`BatchRequest`] naming any subset of an
//! image's pixels and gets back one packed [`Pixel`] record per coordinate.
//! Evaluation is stateless: nothing is shared between calls, so any number
//! of batches may run concurrently on different threads without
//! coordination. Splitting images into batches, sizing them, and dropping
//! stale responses are all the dispatcher's business.

use std::time::Instant;

use log::{debug, trace};

use crate::colour;
use crate::escape;
use crate::grid::Grid;
use crate::pixel::{Complex, Pixel};

/// One batch of pixels to evaluate.
#[derive(Clone, Debug)]
pub struct BatchRequest {
    /// Opaque tag echoed on the response, so the dispatcher can discard
    /// results that belong to an abandoned view.
    pub draw_id: u64,
    /// Plane point under the midpoint of the full image.
    pub centre: Complex,
    /// Full image width in pixels.
    pub width: u32,
    /// Full image height in pixels.
    pub height: u32,
    /// Plane units per pixel, uniform in both axes.
    pub pixel_size: f64,
    /// Iteration budget per point.
    pub max_iters: u32,
    /// Linear pixel indices, row-major from the top-left. Any subset of the
    /// image in any order.
    pub coords: Vec<u32>,
}

/// Results for one batch, one record per requested coordinate in request
/// order.
#[derive(Clone, Debug)]
pub struct BatchResponse {
    pub draw_id: u64,
    /// Throughput over this batch, the dispatcher's batch-sizing signal.
    /// Zero when the batch was empty or the clock did not advance.
    pub evals_per_ms: f64,
    pub points: Vec<Pixel>,
}

/// Evaluates and colours every coordinate of `request`.
///
/// The request is consumed and the response buffer freshly allocated, so
/// handing both across threads moves them without copying. A width or
/// height of zero yields an empty response whatever the coordinate list
/// says, as no index can be placed on such a grid.
pub fn evaluate_batch(request: BatchRequest) -> BatchResponse {
    trace!("begin batch {}", request.draw_id);
    let start = Instant::now();

    let mut points = Vec::with_capacity(request.coords.len());
    if request.width > 0 && request.height > 0 {
        let grid = Grid::new(
            request.centre,
            request.width,
            request.height,
            request.pixel_size,
        );
        for &index in &request.coords {
            let (px, py) = grid.locate(index);
            let point = grid.point(px, py);
            let escape = escape::evaluate(point.real, point.imaginary, request.max_iters);
            points.push(Pixel {
                x: px,
                y: py,
                rgba: colour::rgba(escape),
            });
        }
    }

    let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;
    let evals_per_ms = if elapsed_ms > 0.0 {
        points.len() as f64 / elapsed_ms
    } else {
        0.0
    };
    debug!(
        "batch {}: {} points in {elapsed_ms:.3}ms ({evals_per_ms:.0} evals/ms)",
        request.draw_id,
        points.len(),
    );

    trace!("end batch {}", request.draw_id);
    BatchResponse {
        draw_id: request.draw_id,
        evals_per_ms,
        points,
    }
}
