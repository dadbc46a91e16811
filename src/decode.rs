use std::path::Path;

use image::{ImageReader, ImageResult};
use tracing::debug;

use crate::{error::ImposeError, im_err, image::Image};

/// Opens the file and guesses the format based on file contents.
pub fn decode(file: &Path) -> Result<Image, ImposeError> {
    decode_inner(file)
        .map_err(|error| im_err!("failed to open image '{}': {error}", file.display()))
}

fn decode_inner(file: &Path) -> ImageResult<Image> {
    let decoder = ImageReader::open(file)?.with_guessed_format()?;
    let format = decoder.format();
    let pixels = decoder.decode()?;
    debug!(
        path = %file.display(),
        width = pixels.width(),
        height = pixels.height(),
        ?format,
        "decoded image"
    );
    Ok(Image { format, pixels })
}
