// notifications.rs
use rfd::{MessageButtons, MessageDialog, MessageLevel};
use std::path::Path;

use crate::app::image_processing::ConversionResult;
use crate::error::ConvertError;

pub const SUCCESS_TITLE: &str = "Conversion Complete";
pub const CONVERSION_ERROR_TITLE: &str = "Conversion Error";
pub const UNEXPECTED_ERROR_TITLE: &str = "Error";

pub fn success_message(output_path: &Path, stats: &ConversionResult) -> String {
    format!(
        "Successfully converted to WebP!\n\n\
         Saved to: {}\n\n\
         Original size: {:.1} KB\n\
         WebP size: {:.1} KB\n\
         Size reduction: {:.1}%",
        output_path.display(),
        stats.original_size_bytes as f64 / 1024.0,
        stats.webp_size_bytes as f64 / 1024.0,
        stats.reduction_percent
    )
}

/// Title and body for a failed conversion. File problems and encoder problems
/// are shown under different titles.
pub fn error_message(error: &ConvertError) -> (&'static str, String) {
    if error.is_io_related() {
        (CONVERSION_ERROR_TITLE, format!("Error converting image: {}", error))
    } else {
        (UNEXPECTED_ERROR_TITLE, format!("Unexpected error: {}", error))
    }
}

pub fn show_info(title: &str, message: &str) {
    show(MessageLevel::Info, title, message);
}

pub fn show_error(title: &str, message: &str) {
    show(MessageLevel::Error, title, message);
}

fn show(level: MessageLevel, title: &str, message: &str) {
    let _ = MessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}
