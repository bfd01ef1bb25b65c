// THEORY:
// This file is the main entry point for the `pixel_filters` library crate.
// It follows the standard Rust convention of using `lib.rs` to define the public
// API that will be exposed to external consumers (a host application feeding
// frame buffers through the filters).
//
// The primary goal is to export the `FilterPipeline` / `ParallelFilterPipeline`
// and their associated data structures as the clean, high-level interface for
// whole-image filtering, while the per-pixel kernels and pixel/image containers
// live in `core_modules` for callers that drive the dispatch loop themselves.

pub mod core_modules;
pub mod parallel_pipeline;
pub mod pipeline;

// Re-export key data structures for the public API.
pub use crate::core_modules::blur::blur::GaussianBlur;
pub use crate::core_modules::grayscale::grayscale::grayscale;
pub use crate::core_modules::image::image::{ImageBuffer, PixelSource};
pub use crate::core_modules::pixel::pixel::Pixel;
pub use crate::core_modules::sobel::sobel::sobel;
pub use crate::parallel_pipeline::ParallelFilterPipeline;
pub use crate::pipeline::{FilterPipeline, PipelineConfig};
