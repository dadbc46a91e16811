//! Process-wide configuration. Built once at startup and never mutated.

use std::path::PathBuf;

use pic_scale_safe::ResamplingFunction;

use crate::arg_parsers::Point;

/// Directory all outputs are written to, relative to the working directory
pub const OUTPUT_DIR: &str = "data";
/// Box the watermark is fitted into before placement
pub const WATERMARK_BOX: Point = Point::new(200, 200);
/// Padding per unit of rounded aspect ratio between the watermark and the image edges
pub const PADDING_UNIT: i64 = 20;
/// Output name of the `watermark` command is this prefix followed by the mark's file name
pub const WATERMARK_PREFIX: &str = "watermark-new-";

#[derive(Debug, Clone)]
pub struct Settings {
    pub output_dir: PathBuf,
    pub create_output_dir: bool,
    pub watermark_box: Point,
    pub padding_unit: i64,
    pub watermark_prefix: String,
    pub filter: ResamplingFunction,
    pub jpeg_quality: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(OUTPUT_DIR),
            create_output_dir: true,
            watermark_box: WATERMARK_BOX,
            padding_unit: PADDING_UNIT,
            watermark_prefix: WATERMARK_PREFIX.to_owned(),
            filter: ResamplingFunction::Lanczos3,
            jpeg_quality: 95,
        }
    }
}

impl Settings {
    /// Same as the defaults, but writing into `output_dir`
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Default::default()
        }
    }
}
