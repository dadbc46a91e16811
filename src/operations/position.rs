use tracing::debug;

use crate::arg_parsers::Point;

/// `width / height` rounded to the nearest integer, halves away from zero.
/// A zero height yields 0 rather than infinity.
pub fn rounded_aspect_ratio(width: u32, height: u32) -> f64 {
    if height == 0 {
        return 0.0;
    }
    (f64::from(width) / f64::from(height)).round()
}

/// Top-left offset that puts `mark` in the bottom-right corner of `background`,
/// inset on both axes by `padding_unit` times the rounded aspect ratio.
///
/// The result goes negative when the mark plus padding is larger than the background;
/// that is passed through as is and the paste clips it.
pub fn compute_position(
    background: Point,
    mark: Point,
    aspect_ratio: f64,
    padding_unit: i64,
) -> Point {
    let padding = padding_unit * aspect_ratio as i64;
    let position = Point::new(
        background.x - mark.x - padding,
        background.y - mark.y - padding,
    );
    debug!(%background, %mark, aspect_ratio, padding, %position, "watermark position");
    position
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::PADDING_UNIT;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_landscape_background() {
        let aspect = rounded_aspect_ratio(1000, 500);
        assert_eq!(aspect, 2.0);
        let position = compute_position(
            Point::new(1000, 500),
            Point::new(200, 100),
            aspect,
            PADDING_UNIT,
        );
        assert_eq!(position, Point::new(760, 360));
    }

    #[test]
    fn test_near_square_background() {
        // 1280/1024 = 1.25 rounds down to 1
        let aspect = rounded_aspect_ratio(1280, 1024);
        assert_eq!(aspect, 1.0);
        let position = compute_position(
            Point::new(1280, 1024),
            Point::new(200, 160),
            aspect,
            PADDING_UNIT,
        );
        assert_eq!(position, Point::new(1060, 844));
    }

    #[test]
    fn test_rounding() {
        assert_eq!(rounded_aspect_ratio(1920, 1080), 2.0); // 1.78
        assert_eq!(rounded_aspect_ratio(150, 100), 2.0); // exactly 1.5 rounds up
        assert_eq!(rounded_aspect_ratio(100, 300), 0.0); // portrait loses its padding
        assert_eq!(rounded_aspect_ratio(100, 0), 0.0);
    }

    #[test]
    fn test_mark_larger_than_background() {
        let position = compute_position(
            Point::new(150, 100),
            Point::new(200, 133),
            rounded_aspect_ratio(150, 100),
            PADDING_UNIT,
        );
        assert_eq!(position, Point::new(-90, -73));
    }

    #[quickcheck]
    fn padding_is_twenty_per_aspect_unit(bg: Point, mark: Point, aspect: u8) -> bool {
        let aspect = f64::from(aspect);
        let position = compute_position(bg, mark, aspect, PADDING_UNIT);
        let padding = 20 * aspect as i64;
        position == Point::new(bg.x - mark.x - padding, bg.y - mark.y - padding)
            && position == compute_position(bg, mark, aspect, PADDING_UNIT)
    }
}
