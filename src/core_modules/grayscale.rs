// THEORY:
// The grayscale kernel is a pure point transform: one input pixel, one output
// pixel, no neighbors, no state. Channels are normalized to [0, 1], weighted
// by the Rec. 601 coefficients, and the resulting luminance is expanded back
// to a byte and written to all three color channels. Alpha passes through
// unchanged — a transparent pixel stays exactly as transparent after
// conversion. Because the output already has R=G=B, converting twice yields
// the same pixel as converting once.

pub mod grayscale {
    use crate::core_modules::pixel::pixel::{Channel, Pixel};

    /// Converts a single pixel to grayscale. Alpha is copied from the input.
    pub fn grayscale(input: Pixel) -> Pixel {
        let mono = input.luminance_normalized();
        let level = (mono * 255.0).round() as Channel;
        Pixel::new(level, level, level, input.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::grayscale::grayscale;
    use crate::core_modules::pixel::pixel::Pixel;

    #[test]
    fn weighted_levels() {
        // 0.299 * 255 = 76.245 -> 76
        assert_eq!(grayscale(Pixel::new(255, 0, 0, 255)).red, 76);
        // 0.587 * 255 = 149.685 -> 150
        assert_eq!(grayscale(Pixel::new(0, 255, 0, 255)).red, 150);
        // 0.114 * 255 = 29.07 -> 29
        assert_eq!(grayscale(Pixel::new(0, 0, 255, 255)).red, 29);
        // White stays white, black stays black.
        assert_eq!(grayscale(Pixel::new(255, 255, 255, 255)).red, 255);
        assert_eq!(grayscale(Pixel::new(0, 0, 0, 255)).red, 0);
    }

    #[test]
    fn output_channels_are_equal() {
        let out = grayscale(Pixel::new(12, 200, 77, 255));
        assert_eq!(out.red, out.green);
        assert_eq!(out.green, out.blue);
    }

    #[test]
    fn alpha_is_preserved() {
        assert_eq!(grayscale(Pixel::new(50, 60, 70, 0)).alpha, 0);
        assert_eq!(grayscale(Pixel::new(50, 60, 70, 128)).alpha, 128);
        assert_eq!(grayscale(Pixel::new(50, 60, 70, 255)).alpha, 255);
    }

    #[test]
    fn idempotent() {
        for pixel in [
            Pixel::new(13, 37, 251, 9),
            Pixel::new(255, 0, 128, 200),
            Pixel::new(100, 100, 100, 255),
        ] {
            let once = grayscale(pixel);
            assert_eq!(grayscale(once), once);
        }
    }

    #[test]
    fn flat_gray_maps_to_itself() {
        // Weights sum to 1, so an already-gray pixel keeps its level.
        let out = grayscale(Pixel::new(100, 100, 100, 255));
        assert_eq!(out, Pixel::new(100, 100, 100, 255));
    }
}
