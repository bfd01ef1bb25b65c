// THEORY:
// The `pipeline` module is the top-level API for whole-image filtering. The
// kernels themselves are per-pixel functions; this module owns the dispatch
// loop that iterates the output grid and invokes one kernel per pixel, which
// is exactly the role the host runtime played for the original GPU scripts.
// It accepts the same flat RGBA8 frame buffers a host application holds and
// returns new buffers of the same shape, so callers never touch the internal
// pixel grid unless they want to.
//
// Iteration order is an implementation detail: every kernel invocation is
// independent and writes only its own output pixel, so the sequential loop
// here and the banded loop in `parallel_pipeline` produce identical bytes.

use crate::core_modules::blur::blur::GaussianBlur;
use crate::core_modules::grayscale::grayscale::grayscale;
use crate::core_modules::image::image::{ImageBuffer, PixelSource};
use crate::core_modules::pixel::pixel::Bytes;
use crate::core_modules::sobel::sobel::sobel;

/// Configuration for a `FilterPipeline`, fixing the frame geometry.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub image_width: u32,
    pub image_height: u32,
}

/// Sequential whole-image filter passes over flat RGBA8 frame buffers.
pub struct FilterPipeline {
    config: PipelineConfig,
}

impl FilterPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Converts a frame to grayscale. Panics if the buffer length does not
    /// match the configured geometry.
    pub fn grayscale(&self, frame_buffer: &[u8]) -> Bytes {
        let input = self.decode(frame_buffer);
        grayscale_pass(&input).to_rgba_buffer()
    }

    /// Produces the Sobel edge map of a frame.
    pub fn sobel(&self, frame_buffer: &[u8]) -> Bytes {
        let input = self.decode(frame_buffer);
        sobel_pass(&input).to_rgba_buffer()
    }

    /// Gaussian-blurs a frame with the given radius and sigma.
    pub fn blur(&self, frame_buffer: &[u8], radius: u32, sigma: f32) -> Bytes {
        let input = self.decode(frame_buffer);
        GaussianBlur::new(radius, sigma)
            .apply(&input)
            .to_rgba_buffer()
    }

    fn decode(&self, frame_buffer: &[u8]) -> ImageBuffer {
        ImageBuffer::from_rgba_buffer(
            self.config.image_width,
            self.config.image_height,
            frame_buffer,
        )
    }
}

/// Applies the grayscale kernel to every pixel of an image.
pub fn grayscale_pass(input: &ImageBuffer) -> ImageBuffer {
    let mut output = ImageBuffer::new(input.width(), input.height());
    for y in 0..input.height() {
        for x in 0..input.width() {
            output.set(x, y, grayscale(input.pixel(x, y)));
        }
    }
    output
}

/// Applies the Sobel kernel to every pixel of an image.
pub fn sobel_pass(input: &ImageBuffer) -> ImageBuffer {
    let mut output = ImageBuffer::new(input.width(), input.height());
    for y in 0..input.height() {
        for x in 0..input.width() {
            output.set(x, y, sobel(input, x, y));
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_modules::pixel::pixel::Pixel;

    fn flat_frame(width: u32, height: u32, pixel: Pixel) -> Vec<u8> {
        ImageBuffer::from_pixels(width, height, vec![pixel; (width * height) as usize])
            .to_rgba_buffer()
    }

    #[test]
    fn flat_gray_frame() {
        // 3x3 image, all pixels (100,100,100,255): grayscale returns the
        // same bytes, Sobel returns all (0,0,0,255).
        let pipeline = FilterPipeline::new(PipelineConfig {
            image_width: 3,
            image_height: 3,
        });
        let frame = flat_frame(3, 3, Pixel::new(100, 100, 100, 255));

        assert_eq!(pipeline.grayscale(&frame), frame);

        let edges = pipeline.sobel(&frame);
        let expected = flat_frame(3, 3, Pixel::new(0, 0, 0, 255));
        assert_eq!(edges, expected);
    }

    #[test]
    fn output_buffer_matches_input_length() {
        let pipeline = FilterPipeline::new(PipelineConfig {
            image_width: 8,
            image_height: 5,
        });
        let frame = flat_frame(8, 5, Pixel::new(10, 200, 30, 77));

        assert_eq!(pipeline.grayscale(&frame).len(), frame.len());
        assert_eq!(pipeline.sobel(&frame).len(), frame.len());
        assert_eq!(pipeline.blur(&frame, 2, 1.0).len(), frame.len());
    }

    #[test]
    fn grayscale_preserves_alpha_sobel_forces_opaque() {
        let pipeline = FilterPipeline::new(PipelineConfig {
            image_width: 4,
            image_height: 4,
        });
        let frame = flat_frame(4, 4, Pixel::new(200, 40, 90, 13));

        let gray = pipeline.grayscale(&frame);
        let edges = pipeline.sobel(&frame);
        for chunk in gray.chunks_exact(4) {
            assert_eq!(chunk[3], 13);
        }
        for chunk in edges.chunks_exact(4) {
            assert_eq!(chunk[3], 255);
        }
    }

    #[test]
    #[should_panic(expected = "does not match")]
    fn wrong_buffer_length_panics() {
        let pipeline = FilterPipeline::new(PipelineConfig {
            image_width: 4,
            image_height: 4,
        });
        let frame = vec![0u8; 17];
        let _ = pipeline.grayscale(&frame);
    }

    #[test]
    fn sobel_pass_highlights_vertical_edge() {
        let mut img = ImageBuffer::new(6, 4);
        for y in 0..4 {
            for x in 0..6 {
                let level = if x < 3 { 0 } else { 200 };
                img.set(x, y, Pixel::new(level, level, level, 255));
            }
        }

        let edges = sobel_pass(&img);
        // Strong response on the columns flanking the edge, none far away.
        assert_eq!(edges.pixel(2, 1).red, 255);
        assert_eq!(edges.pixel(3, 1).red, 255);
        assert_eq!(edges.pixel(0, 1).red, 0);
        assert_eq!(edges.pixel(5, 1).red, 0);
    }
}
