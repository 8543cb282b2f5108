// file_dialogs.rs
use rfd::FileDialog;
use std::path::{Path, PathBuf};

/// Extensions offered by the "Image files" filter.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "tiff", "tif", "webp"];

pub fn select_image() -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Select an image to convert to WebP")
        .add_filter("Image files", IMAGE_EXTENSIONS)
        .add_filter("PNG files", &["png"])
        .add_filter("JPEG files", &["jpg", "jpeg"])
        .add_filter("GIF files", &["gif"])
        .add_filter("BMP files", &["bmp"])
        .add_filter("TIFF files", &["tiff", "tif"])
        .add_filter("All files", &["*"])
        .pick_file()
}

pub fn select_save_path(input_path: &Path) -> Option<PathBuf> {
    let default_path = default_output_path(input_path);
    let mut dialog = FileDialog::new()
        .set_title("Save WebP file as")
        .add_filter("WebP files", &["webp"]);
    if let Some(name) = default_path.file_name() {
        let name = name.to_string_lossy().into_owned();
        dialog = dialog.set_file_name(&name);
    }
    if let Some(dir) = input_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        dialog = dialog.set_directory(dir);
    }
    dialog.save_file()
}

/// Input path with its extension replaced by `.webp`, in the same directory.
pub fn default_output_path(input_path: &Path) -> PathBuf {
    input_path.with_extension("webp")
}
