//! Image operations used by the compositing workflows

pub mod fit;
pub mod paste;
pub mod position;

pub use fit::fit;
pub use paste::paste;
pub use position::{compute_position, rounded_aspect_ratio};
