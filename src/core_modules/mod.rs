pub mod blur;
pub mod grayscale;
pub mod image;
pub mod pixel;
pub mod sobel;
pub mod utils;
