use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use image::ImageFormat;
use tracing::debug;

use crate::{
    error::ImposeError, im_err, im_try, image::Image, settings::Settings,
    utils::filename::extension_for_display,
};

/// Writes `image` to `path`, picking the format from the file extension
/// and falling back to the format the image was decoded from.
pub fn encode(image: &Image, path: &Path, settings: &Settings) -> Result<(), ImposeError> {
    let format = choose_encoding_format(image, path)?;
    debug!(path = %path.display(), ?format, "encoding image");

    // `File::create` automatically truncates (overwrites) the file if it exists.
    let file = File::create(path)
        .map_err(|error| im_err!("failed to save image '{}': {error}", path.display()))?;
    // Wrap in BufWriter for performance
    let mut writer = BufWriter::new(file);

    match format {
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => encode_jpeg(image, &mut writer, settings)?,
        _ => im_try!(image.pixels.write_to(&mut writer, format)),
    }

    // Flush the buffers to write everything to disk.
    // The buffers will be flushed automatically when the writer goes out of scope,
    // but that will not report any errors. This handles errors.
    writer
        .flush()
        .map_err(|error| im_err!("failed to save image '{}': {error}", path.display()))?;

    Ok(())
}

#[cfg(feature = "jpeg")]
fn encode_jpeg<W: Write>(
    image: &Image,
    writer: &mut W,
    settings: &Settings,
) -> Result<(), ImposeError> {
    use image::{codecs::jpeg::JpegEncoder, DynamicImage};

    // JPEG has no alpha channel, so the composited RGBA has to be flattened first
    let rgb = image.pixels.to_rgb8();
    let encoder = JpegEncoder::new_with_quality(writer, settings.jpeg_quality);
    Ok(im_try!(DynamicImage::ImageRgb8(rgb).write_with_encoder(encoder)))
}

fn choose_encoding_format(image: &Image, path: &Path) -> Result<ImageFormat, ImposeError> {
    // guess based on the output path
    if let Ok(format) = ImageFormat::from_path(path) {
        return Ok(format);
    }
    // if that fails, use the input format
    if let Some(format) = image.format {
        return Ok(format);
    }
    Err(im_err!(
        "no encode delegate for this image format `{}'",
        extension_for_display(path).display()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, RgbaImage};

    fn tiny(format: Option<ImageFormat>) -> Image {
        Image {
            format,
            pixels: DynamicImage::ImageRgba8(RgbaImage::new(4, 3)),
        }
    }

    #[test]
    fn format_from_extension_wins() {
        let image = tiny(Some(ImageFormat::Gif));
        let format = choose_encoding_format(&image, Path::new("data/out.png")).unwrap();
        assert_eq!(format, ImageFormat::Png);
    }

    #[test]
    fn falls_back_to_input_format() {
        let image = tiny(Some(ImageFormat::Png));
        let format = choose_encoding_format(&image, Path::new("data/no-extension")).unwrap();
        assert_eq!(format, ImageFormat::Png);
    }

    #[test]
    fn unknown_format_is_an_error() {
        let image = tiny(None);
        let err = choose_encoding_format(&image, Path::new("data/out.xyz")).unwrap_err();
        assert!(err
            .to_string()
            .contains("no encode delegate for this image format `XYZ'"));
    }

    #[cfg(feature = "png")]
    #[test]
    fn writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        encode(&tiny(None), &path, &Settings::default()).unwrap();
        let decoded = image::open(&path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (4, 3));
    }

    #[cfg(feature = "jpeg")]
    #[test]
    fn writes_jpeg_from_rgba() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jpg");
        encode(&tiny(None), &path, &Settings::default()).unwrap();
        let decoded = image::open(&path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (4, 3));
    }

    #[test]
    fn missing_directory_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("out.png");
        let err = encode(&tiny(None), &path, &Settings::default()).unwrap_err();
        assert!(err.to_string().contains("failed to save image"));
    }
}
