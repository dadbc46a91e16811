use image::{imageops::replace, DynamicImage};

use crate::{arg_parsers::Point, image::Image};

/// Pastes `mark` onto `background` with its top-left corner at `location`.
/// Covered pixels are overwritten, not blended. Anything outside the background is clipped.
pub fn paste(background: &mut Image, mark: &Image, location: Point) {
    let mut canvas = background.pixels.to_rgba8();
    let top = mark.pixels.to_rgba8();
    replace(&mut canvas, &top, location.x, location.y);
    background.pixels = DynamicImage::ImageRgba8(canvas);
}
