//! Batch colouring backend for a Mandelbrot-set viewer.
//!
//! The pieces: an escape-time evaluator with amortised cycle detection
//! ([`escape`]), a logistic-curve colour mapper ([`colour`]), pixel-grid to
//! complex-plane mapping ([`grid`]), and the protocol gluing them together
//! ([`batch`]). A dispatcher sends a [`BatchRequest`] naming any subset of
//! an image's pixels and receives packed [`Pixel`] records it can blit by
//! position, plus a throughput figure for sizing the next batch.
//!
//! Batches are stateless and independent, so any number can run
//! concurrently without locks. Partitioning images into batches and
//! compositing the records back into a canvas both live outside this crate.

pub mod batch;
pub mod colour;
pub mod distance;
pub mod escape;
pub mod grid;
pub mod pixel;

pub use batch::{evaluate_batch, BatchRequest, BatchResponse};
pub use escape::Escape;
pub use pixel::{Complex, Pixel};
