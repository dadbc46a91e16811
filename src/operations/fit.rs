use image::{DynamicImage, GenericImageView, RgbaImage};
use pic_scale_safe::{ImageSize, ResamplingFunction};
use tracing::debug;

use crate::{arg_parsers::Point, error::ImposeError, im_err, image::Image};

/// Shrinks the image to fit inside `bounds`, preserving the aspect ratio.
///
/// Images that already fit are left alone; they are never enlarged.
/// A box with a non-positive side leaves an empty image, which pastes as a no-op.
pub fn fit(
    image: &mut Image,
    bounds: Point,
    filter: ResamplingFunction,
) -> Result<(), ImposeError> {
    let Some((dst_width, dst_height)) = fit_dimensions(image.pixels.dimensions(), bounds) else {
        image.pixels = DynamicImage::ImageRgba8(RgbaImage::new(0, 0));
        return Ok(());
    };
    debug!(
        from = ?image.pixels.dimensions(),
        to = ?(dst_width, dst_height),
        %bounds,
        "fitting image"
    );
    resize_impl(image, dst_width, dst_height, filter)
}

fn resize_impl(
    image: &mut Image,
    dst_width: u32,
    dst_height: u32,
    filter: ResamplingFunction,
) -> Result<(), ImposeError> {
    let src = image.pixels.to_rgba8();
    if src.width() == dst_width && src.height() == dst_height {
        image.pixels = DynamicImage::ImageRgba8(src);
        return Ok(());
    }
    let src_size = ImageSize::new(src.width() as usize, src.height() as usize);
    let dst_size = ImageSize::new(dst_width as usize, dst_height as usize);
    // resample with premultiplied alpha so transparent pixels don't bleed their color
    let has_alpha = pic_scale_safe::has_non_constant_alpha_rgba8(src.as_raw(), src_size.width);
    let mut src = src.into_raw();
    if has_alpha {
        pic_scale_safe::premultiply_rgba8(&mut src);
    }
    let mut resized = pic_scale_safe::resize_rgba8(&src, src_size, dst_size, filter)
        .map_err(|error| im_err!("failed to resize image: {error}"))?;
    if has_alpha {
        pic_scale_safe::unpremultiply_rgba8(&mut resized);
    }
    let buffer = RgbaImage::from_raw(dst_width, dst_height, resized)
        .ok_or_else(|| im_err!("resized buffer does not match {dst_width}x{dst_height}"))?;
    image.pixels = DynamicImage::ImageRgba8(buffer);
    Ok(())
}

/// Target size for fitting `src` into `bounds`, or `None` when the result would be empty.
fn fit_dimensions(src: (u32, u32), bounds: Point) -> Option<(u32, u32)> {
    let (src_width, src_height) = src;
    if bounds.x <= 0 || bounds.y <= 0 || src_width == 0 || src_height == 0 {
        return None;
    }
    let max_width = u32::try_from(bounds.x).unwrap_or(u32::MAX);
    let max_height = u32::try_from(bounds.y).unwrap_or(u32::MAX);
    if src_width <= max_width && src_height <= max_height {
        return Some(src);
    }

    let src_aspect = f64::from(src_width) / f64::from(src_height);
    let max_aspect = f64::from(max_width) / f64::from(max_height);
    let (width, height) = if src_aspect > max_aspect {
        (max_width, (f64::from(max_width) / src_aspect) as u32)
    } else {
        ((f64::from(max_height) * src_aspect) as u32, max_height)
    };
    Some((width.max(1), height.max(1)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::arbitrary;
    use quickcheck::{Arbitrary, Gen};
    use quickcheck_macros::quickcheck;

    #[test]
    fn wide_image_is_limited_by_width() {
        assert_eq!(fit_dimensions((400, 200), Point::new(200, 200)), Some((200, 100)));
    }

    #[test]
    fn tall_image_is_limited_by_height() {
        assert_eq!(fit_dimensions((300, 600), Point::new(200, 200)), Some((100, 200)));
    }

    #[test]
    fn small_image_is_not_enlarged() {
        assert_eq!(fit_dimensions((50, 20), Point::new(200, 200)), Some((50, 20)));
    }

    #[test]
    fn extreme_aspect_keeps_one_pixel() {
        assert_eq!(fit_dimensions((10_000, 1), Point::new(100, 100)), Some((100, 1)));
    }

    #[test]
    fn non_positive_box_is_empty() {
        assert_eq!(fit_dimensions((50, 20), Point::new(0, 200)), None);
        assert_eq!(fit_dimensions((50, 20), Point::new(200, -5)), None);
    }

    #[test]
    fn fit_resamples_pixels() {
        let mut image = Image {
            format: None,
            pixels: DynamicImage::ImageRgba8(RgbaImage::from_pixel(
                40,
                20,
                image::Rgba([10, 200, 30, 255]),
            )),
        };
        fit(&mut image, Point::new(10, 10), ResamplingFunction::Lanczos3).unwrap();
        assert_eq!(image.pixels.dimensions(), (10, 5));
        // a flat color stays flat through any reasonable filter
        let pixel = image.pixels.to_rgba8().get_pixel(5, 2).0;
        assert!(pixel[1] > 190 && pixel[3] > 250, "{pixel:?}");
    }

    #[test]
    fn transparent_border_does_not_darken_edges() {
        // opaque white square inside a fully transparent black frame
        let pixels = RgbaImage::from_fn(100, 100, |x, y| {
            if (20..80).contains(&x) && (20..80).contains(&y) {
                image::Rgba([255, 255, 255, 255])
            } else {
                image::Rgba([0, 0, 0, 0])
            }
        });
        let mut image = Image {
            format: None,
            pixels: DynamicImage::ImageRgba8(pixels),
        };
        fit(&mut image, Point::new(30, 30), ResamplingFunction::Lanczos3).unwrap();
        assert_eq!(image.pixels.dimensions(), (30, 30));
        for pixel in image.pixels.to_rgba8().pixels() {
            if pixel[3] >= 64 {
                assert!(pixel.0[..3].iter().all(|&c| c >= 200), "{pixel:?}");
            }
        }
    }

    #[derive(Clone, Debug)]
    struct Case {
        src: (u32, u32),
        bounds: Point,
    }

    impl Arbitrary for Case {
        fn arbitrary(g: &mut Gen) -> Self {
            Self {
                src: (arbitrary::dimension(g), arbitrary::dimension(g)),
                bounds: Point::new(
                    i64::from(arbitrary::dimension(g)),
                    i64::from(arbitrary::dimension(g)),
                ),
            }
        }
    }

    #[quickcheck]
    fn never_exceeds_box_or_source(case: Case) -> bool {
        let (width, height) = fit_dimensions(case.src, case.bounds).unwrap();
        i64::from(width) <= case.bounds.x
            && i64::from(height) <= case.bounds.y
            && width <= case.src.0
            && height <= case.src.1
    }
}
