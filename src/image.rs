use image::{DynamicImage, ImageFormat};

#[derive(Debug, Clone)]
pub struct Image {
    /// Format detected while decoding, used when the output path says nothing about the format
    pub format: Option<ImageFormat>,
    pub pixels: DynamicImage,
}
