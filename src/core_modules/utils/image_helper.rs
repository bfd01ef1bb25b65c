pub mod image_helper {
    use crate::core_modules::image::image::{ImageBuffer, PixelSource};
    use image::ImageEncoder;
    use std::path::Path;

    /// Encodes an `ImageBuffer` as a PNG file.
    pub fn save<P: AsRef<Path>>(
        path: P,
        image_buffer: &ImageBuffer,
    ) -> Result<(), image::error::ImageError> {
        let output = std::fs::File::create(path)?;
        let encoder = image::codecs::png::PngEncoder::new(output);

        encoder.write_image(
            &image_buffer.to_rgba_buffer(),
            image_buffer.width(),
            image_buffer.height(),
            image::ExtendedColorType::Rgba8,
        )?;

        Ok(())
    }

    /// Decodes an image file into an RGBA `ImageBuffer`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<ImageBuffer, image::error::ImageError> {
        let decoded = image::open(path)?.to_rgba8();
        let (width, height) = decoded.dimensions();
        Ok(ImageBuffer::from_rgba_buffer(
            width,
            height,
            decoded.as_raw(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::image_helper::*;
    use crate::core_modules::image::image::ImageBuffer;
    use crate::core_modules::pixel::pixel::Pixel;

    #[test]
    fn png_roundtrip() {
        let mut img = ImageBuffer::new(16, 8);
        for y in 0..8 {
            for x in 0..16 {
                img.set(x, y, Pixel::new((x * 16) as u8, (y * 32) as u8, 7, 255));
            }
        }

        let path = std::env::temp_dir().join("pixel_filters_roundtrip.png");
        save(&path, &img).expect("Error Saving File.");
        let loaded = load(&path).expect("Error Loading File.");
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, img);
    }

    #[test]
    fn save_white_file() {
        let img = ImageBuffer::from_pixels(50, 50, vec![Pixel::new(255, 255, 255, 255); 2500]);
        let path = std::env::temp_dir().join("pixel_filters_white.png");
        save(&path, &img).expect("Error Saving File.");
        let _ = std::fs::remove_file(&path);
    }
}
