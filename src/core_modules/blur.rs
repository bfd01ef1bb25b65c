// THEORY:
// Gaussian blur is the one kernel here that is not a fixed-constant operator:
// its 1-D kernel is derived from a radius and a sigma, normalized to sum to 1,
// and precomputed once at construction so repeated `apply` calls (a video
// stream, say) pay no per-frame setup cost. The 2-D blur is separable, so it
// runs as two 1-D passes: horizontal into an intermediate grid, then vertical
// into the output.
//
// Boundary policy differs from the Sobel kernel: taps that fall outside the
// image are skipped rather than clamped, so border pixels average over fewer
// neighbors. Channel sums are clamped to [0, 255] and truncated. Output alpha
// is always 255.

pub mod blur {
    use crate::core_modules::image::image::{ImageBuffer, PixelSource};
    use crate::core_modules::pixel::pixel::{Channel, Pixel};

    /// A separable Gaussian blur with a precomputed, normalized 1-D kernel.
    pub struct GaussianBlur {
        radius: i64,
        kernel: Vec<f32>,
    }

    impl GaussianBlur {
        /// Precomputes the kernel for the given radius and sigma.
        /// Panics if `sigma` is not strictly positive.
        pub fn new(radius: u32, sigma: f32) -> Self {
            assert!(sigma > 0.0, "Gaussian sigma must be positive, got {sigma}.");
            Self {
                radius: radius as i64,
                kernel: Self::create_kernel(radius as i64, sigma),
            }
        }

        /// The normalized kernel weights, length `2 * radius + 1`.
        pub fn kernel(&self) -> &[f32] {
            &self.kernel
        }

        /// Blurs the image in two separable passes.
        pub fn apply(&self, source: &ImageBuffer) -> ImageBuffer {
            let width = source.width();
            let height = source.height();

            // First pass: horizontal blur into an intermediate grid.
            let mut horizontal = ImageBuffer::new(width, height);
            for y in 0..height {
                for x in 0..width {
                    let mut red = 0.0f32;
                    let mut green = 0.0f32;
                    let mut blue = 0.0f32;

                    for i in -self.radius..=self.radius {
                        let neighbor_x = x as i64 + i;
                        if neighbor_x >= 0 && neighbor_x < width as i64 {
                            let pixel = source.pixel(neighbor_x as u32, y);
                            let weight = self.kernel[(i + self.radius) as usize];
                            red += pixel.red as f32 * weight;
                            green += pixel.green as f32 * weight;
                            blue += pixel.blue as f32 * weight;
                        }
                    }

                    horizontal.set(x, y, Self::to_pixel(red, green, blue));
                }
            }

            // Second pass: vertical blur over the intermediate grid.
            let mut output = ImageBuffer::new(width, height);
            for x in 0..width {
                for y in 0..height {
                    let mut red = 0.0f32;
                    let mut green = 0.0f32;
                    let mut blue = 0.0f32;

                    for j in -self.radius..=self.radius {
                        let neighbor_y = y as i64 + j;
                        if neighbor_y >= 0 && neighbor_y < height as i64 {
                            let pixel = horizontal.pixel(x, neighbor_y as u32);
                            let weight = self.kernel[(j + self.radius) as usize];
                            red += pixel.red as f32 * weight;
                            green += pixel.green as f32 * weight;
                            blue += pixel.blue as f32 * weight;
                        }
                    }

                    output.set(x, y, Self::to_pixel(red, green, blue));
                }
            }

            output
        }

        fn to_pixel(red: f32, green: f32, blue: f32) -> Pixel {
            Pixel::new(
                red.clamp(0.0, 255.0) as Channel,
                green.clamp(0.0, 255.0) as Channel,
                blue.clamp(0.0, 255.0) as Channel,
                255,
            )
        }

        fn create_kernel(radius: i64, sigma: f32) -> Vec<f32> {
            let size = (radius * 2 + 1) as usize;
            let mut kernel = Vec::with_capacity(size);
            let mut sum = 0.0f32;

            for i in -radius..=radius {
                let value = (-((i * i) as f32) / (2.0 * sigma * sigma)).exp();
                kernel.push(value);
                sum += value;
            }

            for value in &mut kernel {
                *value /= sum;
            }

            kernel
        }
    }
}
