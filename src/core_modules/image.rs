// THEORY:
// The `Image` module owns the bridge between the host's flat RGBA8 frame
// buffers and the pixel grid the kernels operate on. Two pieces live here:
//
// 1.  **`PixelSource`**: the read-only accessor the neighborhood kernels are
//     handed. It exposes exactly what a kernel needs — a bounds query and a
//     coordinate-indexed fetch — plus `pixel_clamped`, the clamp-to-border
//     fetch that makes every lookup total. Out-of-range coordinates snap to
//     the nearest valid edge coordinate on each axis independently; they are
//     never wrapped, zero-filled, or reported as errors. Because the trait is
//     read-only, a kernel can safely sample the neighborhood of the very
//     image it is producing output for without aliasing concerns.
// 2.  **`ImageBuffer`**: an owned width × height grid of `Pixel` in row-major
//     order, constructible from (and convertible back to) the flat byte
//     buffers the host actually hands us.
//
// Buffer-shape violations (wrong length, zero dimensions) are programming
// errors of the caller and panic; they are not runtime failure modes.

pub mod image {
    use crate::core_modules::pixel::pixel::{Bytes, Pixel, CHANNELS};

    /// Read-only accessor over a 2D pixel grid.
    pub trait PixelSource {
        /// Image width in pixels.
        fn width(&self) -> u32;
        /// Image height in pixels.
        fn height(&self) -> u32;
        /// Fetch the pixel at (x, y). Coordinates must be in bounds.
        fn pixel(&self, x: u32, y: u32) -> Pixel;

        /// Clamp-to-border fetch: each axis is clamped independently to
        /// [0, w-1] and [0, h-1], so a lookup never fails and border
        /// neighborhoods replicate the edge pixels.
        fn pixel_clamped(&self, x: i64, y: i64) -> Pixel {
            let cx = x.clamp(0, self.width() as i64 - 1) as u32;
            let cy = y.clamp(0, self.height() as i64 - 1) as u32;
            self.pixel(cx, cy)
        }
    }

    /// An owned, row-major RGBA image.
    #[derive(Debug, Clone, PartialEq)]
    pub struct ImageBuffer {
        width: u32,
        height: u32,
        pixels: Vec<Pixel>,
    }

    impl ImageBuffer {
        /// Creates a zero-filled image. Panics if either dimension is zero.
        pub fn new(width: u32, height: u32) -> Self {
            assert!(
                width > 0 && height > 0,
                "Image dimensions must be non-zero, got {}x{}.",
                width,
                height
            );
            Self {
                width,
                height,
                pixels: vec![Pixel::default(); (width * height) as usize],
            }
        }

        /// Wraps an existing pixel grid.
        /// Panics if `pixels.len() != width * height` or a dimension is zero.
        pub fn from_pixels(width: u32, height: u32, pixels: Vec<Pixel>) -> Self {
            assert!(
                width > 0 && height > 0,
                "Image dimensions must be non-zero, got {}x{}.",
                width,
                height
            );
            assert_eq!(
                pixels.len(),
                (width * height) as usize,
                "Pixel count {} does not match {}x{} image.",
                pixels.len(),
                width,
                height
            );
            Self {
                width,
                height,
                pixels,
            }
        }

        /// Decodes a flat RGBA8 frame buffer (4 bytes per pixel, row-major).
        /// Panics if the buffer length does not match the dimensions.
        pub fn from_rgba_buffer(width: u32, height: u32, frame_buffer: &[u8]) -> Self {
            assert_eq!(
                frame_buffer.len(),
                (width * height) as usize * CHANNELS,
                "Frame buffer length {} does not match {}x{} RGBA image.",
                frame_buffer.len(),
                width,
                height
            );
            let pixels = frame_buffer
                .chunks_exact(CHANNELS)
                .map(Pixel::from)
                .collect();
            Self::from_pixels(width, height, pixels)
        }

        /// Re-encodes the grid as a flat RGBA8 buffer, row-major.
        pub fn to_rgba_buffer(&self) -> Bytes {
            let mut buffer = Vec::with_capacity(self.pixels.len() * CHANNELS);
            for pixel in &self.pixels {
                buffer.extend_from_slice(&[pixel.red, pixel.green, pixel.blue, pixel.alpha]);
            }
            buffer
        }

        pub fn set(&mut self, x: u32, y: u32, pixel: Pixel) {
            self.bounds_check(x, y);
            let index = (y * self.width + x) as usize;
            self.pixels[index] = pixel;
        }

        pub fn pixels(&self) -> &[Pixel] {
            &self.pixels
        }

        fn bounds_check(&self, x: u32, y: u32) {
            assert!(
                x < self.width && y < self.height,
                "Pixel ({},{}) out of bounds for {}x{} image.",
                x,
                y,
                self.width,
                self.height
            );
        }
    }

    impl PixelSource for ImageBuffer {
        fn width(&self) -> u32 {
            self.width
        }

        fn height(&self) -> u32 {
            self.height
        }

        fn pixel(&self, x: u32, y: u32) -> Pixel {
            self.bounds_check(x, y);
            self.pixels[(y * self.width + x) as usize]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::image::*;
    use crate::core_modules::pixel::pixel::Pixel;

    #[test]
    fn rgba_buffer_roundtrip() {
        let buffer: Vec<u8> = (0..24).collect();
        let img = ImageBuffer::from_rgba_buffer(3, 2, &buffer);
        assert_eq!(img.width(), 3);
        assert_eq!(img.height(), 2);
        assert_eq!(img.pixel(0, 0), Pixel::new(0, 1, 2, 3));
        assert_eq!(img.pixel(2, 1), Pixel::new(20, 21, 22, 23));
        assert_eq!(img.to_rgba_buffer(), buffer);
    }

    #[test]
    #[should_panic(expected = "does not match")]
    fn mismatched_buffer_length() {
        let buffer = vec![0u8; 10];
        let _ = ImageBuffer::from_rgba_buffer(3, 2, &buffer);
    }

    #[test]
    #[should_panic(expected = "non-zero")]
    fn zero_dimension() {
        let _ = ImageBuffer::new(0, 4);
    }

    #[test]
    fn set_then_get() {
        let mut img = ImageBuffer::new(4, 4);
        img.set(1, 2, Pixel::new(9, 8, 7, 6));
        assert_eq!(img.pixel(1, 2), Pixel::new(9, 8, 7, 6));
        assert_eq!(img.pixel(0, 0), Pixel::default());
    }

    #[test]
    fn clamped_fetch_replicates_corners() {
        let mut img = ImageBuffer::new(3, 3);
        img.set(0, 0, Pixel::new(1, 1, 1, 255));
        img.set(2, 2, Pixel::new(2, 2, 2, 255));

        // The (-1,-1) neighbor of (0,0) resolves to (0,0) itself — no wrap
        // to the opposite corner and no zero fill.
        assert_eq!(img.pixel_clamped(-1, -1), img.pixel(0, 0));
        // Past the bottom-right corner resolves to the corner.
        assert_eq!(img.pixel_clamped(3, 3), img.pixel(2, 2));
        // Axes clamp independently.
        assert_eq!(img.pixel_clamped(-5, 2), img.pixel(0, 2));
        assert_eq!(img.pixel_clamped(1, 99), img.pixel(1, 2));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn unclamped_fetch_out_of_bounds() {
        let img = ImageBuffer::new(2, 2);
        let _ = img.pixel(2, 0);
    }
}
