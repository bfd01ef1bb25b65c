// THEORY:
// The Sobel kernel maps a 3x3 neighborhood of the input to one output pixel.
// Each of the nine taps is sampled through the accessor's clamp-to-border
// fetch, converted to raw-scale (0..255) luminance, and accumulated against
// the fixed horizontal and vertical operator weights. The gradient magnitude
// sqrt(gx^2 + gy^2) is clamped to [0, 255] and truncated to a byte; that
// byte becomes all three color channels of the output.
//
// Two deliberate contrasts with the grayscale kernel:
// - Luminance stays on the raw 0..255 scale until the final magnitude, so
//   gradients are accumulated at full scale.
// - Output alpha is always 255, regardless of input alpha. An edge map is
//   fully opaque.
//
// Border pixels are not special-cased: the clamped fetch replicates edge
// pixels, so a uniform image produces zero gradient everywhere including the
// borders and corners.

pub mod sobel {
    use crate::core_modules::image::image::PixelSource;
    use crate::core_modules::pixel::pixel::{Channel, Luminance, Pixel};

    /// Horizontal Sobel operator, flattened row-major:
    /// index = (dy + 1) * 3 + (dx + 1).
    pub const SOBEL_X: [Luminance; 9] = [
        -1.0, 0.0, 1.0, //
        -2.0, 0.0, 2.0, //
        -1.0, 0.0, 1.0,
    ];

    /// Vertical Sobel operator, same flattening.
    pub const SOBEL_Y: [Luminance; 9] = [
        -1.0, -2.0, -1.0, //
        0.0, 0.0, 0.0, //
        1.0, 2.0, 1.0,
    ];

    /// Computes the edge-intensity pixel at (x, y) from the input accessor.
    pub fn sobel<S: PixelSource>(source: &S, x: u32, y: u32) -> Pixel {
        let mut gx: Luminance = 0.0;
        let mut gy: Luminance = 0.0;

        for dy in -1i64..=1 {
            for dx in -1i64..=1 {
                let sample = source.pixel_clamped(x as i64 + dx, y as i64 + dy);
                let gray = sample.luminance();

                let kernel_index = ((dy + 1) * 3 + (dx + 1)) as usize;
                gx += SOBEL_X[kernel_index] * gray;
                gy += SOBEL_Y[kernel_index] * gray;
            }
        }

        let magnitude = (gx * gx + gy * gy).sqrt();
        let edge = magnitude.clamp(0.0, 255.0) as Channel;

        Pixel::new(edge, edge, edge, 255)
    }
}
