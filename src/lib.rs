//! Convert a single image to WebP and report how much smaller it got.
//!
//! The conversion itself lives in [`app::image_processing`] and has no UI
//! dependency; [`app::App`] wraps it with native file dialogs and message
//! boxes.

pub mod app;
pub mod error;
pub mod utils;

pub use app::image_processing::{
    convert, convert_image_to_webp, ConversionRequest, ConversionResult, DEFAULT_METHOD,
    DEFAULT_QUALITY,
};
pub use error::ConvertError;
