// THEORY:
// The `Pixel` module is the most fundamental unit of the filter library. It is a
// "dumb" data container for a single RGBA pixel plus the handful of single-pixel
// transforms the kernels need — metrics that can be computed from this pixel
// alone, with no knowledge of neighbors. Anything that reads another pixel
// (gradients, blurs) belongs in the kernel modules.
//
// Two luminance scales live here on purpose:
// - `luminance()` works on the raw 0..255 channel range. The Sobel kernel
//   accumulates gradients on this scale and only renormalizes the final
//   magnitude.
// - `luminance_normalized()` divides channels by 255.0 before weighting, so the
//   result lands in [0, 1]. The grayscale kernel weights on this scale and
//   expands the result back to a byte.
// Both use the Rec. 601 weights (0.299, 0.587, 0.114).

pub mod pixel {
    pub type Byte = u8;
    pub type Bytes = Vec<Byte>;
    pub type Channel = Byte;
    pub type Luminance = f64;
    pub type PackedWord = u32;

    pub const CHANNELS: usize = 4;

    /// Rec. 601 luminance weights for (red, green, blue).
    pub const LUMA_WEIGHTS: [Luminance; 3] = [0.299, 0.587, 0.114];

    /// A "dumb" data container representing a single RGBA pixel.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Pixel {
        /// The red channel value (0-255).
        pub red: Channel,
        /// The green channel value (0-255).
        pub green: Channel,
        /// The blue channel value (0-255).
        pub blue: Channel,
        /// The alpha (transparency) channel value (0-255).
        pub alpha: Channel,
    }

    impl Pixel {
        pub fn new(red: Channel, green: Channel, blue: Channel, alpha: Channel) -> Self {
            Pixel {
                red,
                green,
                blue,
                alpha,
            }
        }

        /// Rec. 601 luminance on the raw 0..255 channel scale.
        pub fn luminance(&self) -> Luminance {
            LUMA_WEIGHTS[0] * self.red as Luminance
                + LUMA_WEIGHTS[1] * self.green as Luminance
                + LUMA_WEIGHTS[2] * self.blue as Luminance
        }

        /// Rec. 601 luminance with channels normalized to [0, 1] before weighting.
        pub fn luminance_normalized(&self) -> Luminance {
            LUMA_WEIGHTS[0] * (self.red as Luminance / 255.0)
                + LUMA_WEIGHTS[1] * (self.green as Luminance / 255.0)
                + LUMA_WEIGHTS[2] * (self.blue as Luminance / 255.0)
        }

        /// Unpack from a 32-bit RGBA word (red in the low byte).
        pub fn from_word(word: PackedWord) -> Self {
            Pixel::new(
                (word & 0xFF) as Channel,
                ((word >> 8) & 0xFF) as Channel,
                ((word >> 16) & 0xFF) as Channel,
                ((word >> 24) & 0xFF) as Channel,
            )
        }

        /// Pack into a 32-bit RGBA word (red in the low byte).
        pub fn to_word(&self) -> PackedWord {
            self.red as PackedWord
                | (self.green as PackedWord) << 8
                | (self.blue as PackedWord) << 16
                | (self.alpha as PackedWord) << 24
        }
    }

    impl From<&[Byte]> for Pixel {
        fn from(bytes: &[Byte]) -> Self {
            if bytes.len() != CHANNELS {
                panic!("Cannot convert {} bytes into pixel.", bytes.len());
            }
            Pixel::new(bytes[0], bytes[1], bytes[2], bytes[3])
        }
    }

    impl From<Pixel> for Bytes {
        fn from(pixel: Pixel) -> Self {
            vec![pixel.red, pixel.green, pixel.blue, pixel.alpha]
        }
    }
}
