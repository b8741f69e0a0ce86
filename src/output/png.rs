//! PNG chart writer.

use super::prepare_path;
use crate::chart::ChartImage;
use crate::utils::error::OutputError;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Encode a chart as an 8-bit RGBA PNG
pub fn encode_png(image: &ChartImage) -> Result<Vec<u8>, OutputError> {
    let mut buffer = Vec::new();
    encode_into(image, &mut buffer)?;
    Ok(buffer)
}

/// Write a chart to a PNG file
///
/// **Public** - main entry point for chart output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::EncodingFailed` - PNG encoder error
/// * `OutputError::InvalidPath` - Path is invalid
pub fn write_png(image: &ChartImage, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing chart to: {}", output_path.display());

    prepare_path(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    encode_into(image, &mut writer)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    info!(
        "Chart written successfully ({}x{} px)",
        image.width(),
        image.height()
    );

    Ok(())
}

fn encode_into<W: Write>(image: &ChartImage, sink: W) -> Result<(), OutputError> {
    let mut encoder = ::png::Encoder::new(sink, image.width(), image.height());
    encoder.set_color(::png::ColorType::Rgba);
    encoder.set_depth(::png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(image.pixels())?;
    writer.finish()?;

    Ok(())
}
