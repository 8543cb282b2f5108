// image_processing.rs
use std::fs;
use std::path::{Path, PathBuf};

use image::io::Reader as ImageReader;
use image::DynamicImage;
use webp::{Encoder, WebPConfig};

use crate::error::ConvertError;

/// Default lossy quality handed to the encoder (0-100).
pub const DEFAULT_QUALITY: u32 = 85;

/// Default encoder effort (0 = fastest, 6 = smallest output).
pub const DEFAULT_METHOD: u32 = 6;

/// One conversion: where to read, where to write and how hard to compress.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversionRequest {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub quality: u32,
    pub method: u32,
}

impl ConversionRequest {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            quality: DEFAULT_QUALITY,
            method: DEFAULT_METHOD,
        }
    }

    pub fn with_quality(mut self, quality: u32) -> Self {
        self.quality = quality;
        self
    }

    pub fn with_method(mut self, method: u32) -> Self {
        self.method = method;
        self
    }
}

/// Byte counts of the source and the written WebP file.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConversionResult {
    pub original_size_bytes: u64,
    pub webp_size_bytes: u64,
    /// Negative when the WebP file is larger than the source.
    pub reduction_percent: f64,
}

impl ConversionResult {
    pub fn new(original_size_bytes: u64, webp_size_bytes: u64) -> Self {
        let original = original_size_bytes as f64;
        let reduction_percent = (original - webp_size_bytes as f64) / original * 100.0;
        Self {
            original_size_bytes,
            webp_size_bytes,
            reduction_percent,
        }
    }
}

/// Decode `request.input_path`, re-encode it as WebP and write it to
/// `request.output_path`, overwriting whatever is there.
///
/// Encoding happens in memory, so decode and encoder errors never touch the
/// destination. A failed write removes the partial destination file.
pub fn convert(request: &ConversionRequest) -> Result<ConversionResult, ConvertError> {
    let img = load_image(&request.input_path)?;
    let img = normalize_color(img);
    let webp_data = encode_to_webp(&img, request.quality, request.method)?;
    save_webp(&webp_data, &request.output_path)?;

    let original_size = file_size(&request.input_path)?;
    let webp_size = file_size(&request.output_path)?;
    Ok(ConversionResult::new(original_size, webp_size))
}

/// Positional shorthand for [`convert`].
pub fn convert_image_to_webp(
    input_path: impl Into<PathBuf>,
    output_path: impl Into<PathBuf>,
    quality: u32,
    method: u32,
) -> Result<ConversionResult, ConvertError> {
    let request = ConversionRequest::new(input_path, output_path)
        .with_quality(quality)
        .with_method(method);
    convert(&request)
}

// The reader owns the file handle; it is closed when decode returns, on
// success or error.
fn load_image(path: &Path) -> Result<DynamicImage, ConvertError> {
    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| ConvertError::io(path, e))?;
    reader.decode().map_err(|e| ConvertError::decode(path, e))
}

/// Collapse every pixel layout into RGBA8 (anything with alpha) or RGB8.
///
/// Indexed images are expanded by the decoders themselves: a palette with a
/// transparency table arrives as RGBA, a plain palette as RGB.
pub fn normalize_color(img: DynamicImage) -> DynamicImage {
    if img.color().has_alpha() {
        match img {
            DynamicImage::ImageRgba8(_) => img,
            other => DynamicImage::ImageRgba8(other.to_rgba8()),
        }
    } else {
        match img {
            DynamicImage::ImageRgb8(_) => img,
            other => DynamicImage::ImageRgb8(other.to_rgb8()),
        }
    }
}

fn encode_to_webp(img: &DynamicImage, quality: u32, method: u32) -> Result<Vec<u8>, ConvertError> {
    let encoder = Encoder::from_image(img).map_err(|e| ConvertError::Encode(e.to_string()))?;

    let mut config = WebPConfig::new()
        .map_err(|_| ConvertError::Encode("failed to initialise encoder config".to_string()))?;
    config.quality = quality as f32;
    config.method = i32::try_from(method).unwrap_or(i32::MAX);

    // libwebp validates the config here, so out-of-range values surface as
    // VP8_ENC_ERROR_INVALID_CONFIGURATION.
    let webp = encoder
        .encode_advanced(&config)
        .map_err(|e| ConvertError::Encode(format!("{:?} (quality {}, method {})", e, quality, method)))?;
    Ok(webp.to_vec())
}

fn save_webp(webp_data: &[u8], output_path: &Path) -> Result<(), ConvertError> {
    if let Err(e) = fs::write(output_path, webp_data) {
        let _ = fs::remove_file(output_path);
        return Err(ConvertError::io(output_path, e));
    }
    Ok(())
}

fn file_size(path: &Path) -> Result<u64, ConvertError> {
    fs::metadata(path)
        .map(|m| m.len())
        .map_err(|e| ConvertError::io(path, e))
}
