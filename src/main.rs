// A small example runner for the `pixel_filters` library: applies one of the
// filters to a PNG file and writes the result next to it.

use pixel_filters::core_modules::blur::blur::GaussianBlur;
use pixel_filters::core_modules::utils::image_helper::image_helper;
use pixel_filters::pipeline::{grayscale_pass, sobel_pass};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 4 {
        println!("Usage: pixel_filters <grayscale|sobel|blur> <input.png> <output.png>");
        return;
    }
    let filter = args[1].as_str();
    let input_path = &args[2];
    let output_path = &args[3];

    let input = match image_helper::load(input_path) {
        Ok(image) => image,
        Err(error) => {
            eprintln!("Failed to load {input_path}: {error}");
            std::process::exit(1);
        }
    };

    let output = match filter {
        "grayscale" => grayscale_pass(&input),
        "sobel" => sobel_pass(&input),
        "blur" => GaussianBlur::new(3, 1.5).apply(&input),
        other => {
            eprintln!("Unknown filter: {other}");
            std::process::exit(1);
        }
    };

    if let Err(error) = image_helper::save(output_path, &output) {
        eprintln!("Failed to save {output_path}: {error}");
        std::process::exit(1);
    }
}
