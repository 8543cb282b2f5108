//! Test utilities for integration tests.
//!
//! Fixture images are generated on the fly with the `image` crate and written
//! into a scratch directory that is removed when the test finishes.

use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use webp_converter::app::{FileSelector, Notifier};

// =============================================================================
// Scratch Directory
// =============================================================================

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A temporary directory unique to one test, deleted on drop.
pub struct TestDir {
    path: PathBuf,
}

impl TestDir {
    pub fn new(name: &str) -> Self {
        let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
        let path = std::env::temp_dir().join(format!(
            "webp-converter-{}-{}-{}",
            name,
            std::process::id(),
            id
        ));
        let _ = std::fs::remove_dir_all(&path);
        std::fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    pub fn join(&self, file: &str) -> PathBuf {
        self.path.join(file)
    }
}

impl Drop for TestDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

// =============================================================================
// Fixtures
// =============================================================================

/// Opaque RGB gradient saved as PNG.
pub fn write_opaque_png(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 255 / width.max(1)) as u8, (y * 255 / height.max(1)) as u8, 128])
    });
    img.save_with_format(path, ImageFormat::Png).unwrap();
}

/// RGBA image whose left half is fully transparent.
pub fn write_transparent_png(path: &Path, width: u32, height: u32) {
    let img = transparent_rgba(width, height);
    img.save_with_format(path, ImageFormat::Png).unwrap();
}

/// Same transparent pattern stored as an indexed GIF.
pub fn write_transparent_gif(path: &Path, width: u32, height: u32) {
    let img = transparent_rgba(width, height);
    img.save_with_format(path, ImageFormat::Gif).unwrap();
}

fn transparent_rgba(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, _y| {
        if x < width / 2 {
            Rgba([0, 0, 0, 0])
        } else {
            Rgba([30, 160, 90, 255])
        }
    })
}

/// Smooth gradients with deterministic grain, roughly like a photograph.
pub fn write_photo_like_png(path: &Path, width: u32, height: u32) {
    let mut seed: u32 = 0x1234_5678;
    let img = RgbImage::from_fn(width, height, |x, y| {
        seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        let grain = (seed >> 24) as i32 % 24 - 12;
        let r = (x * 200 / width) as i32 + grain;
        let g = ((x + y) * 120 / (width + height)) as i32 + 60 + grain;
        let b = (y * 180 / height) as i32 + 40 - grain;
        Rgb([clamp(r), clamp(g), clamp(b)])
    });
    img.save_with_format(path, ImageFormat::Png).unwrap();
}

fn clamp(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

// =============================================================================
// WebP Inspection
// =============================================================================

/// Decoded facts about a WebP file on disk.
pub struct WebpInfo {
    pub width: u32,
    pub height: u32,
    pub has_alpha: bool,
}

pub fn read_webp(path: &Path) -> WebpInfo {
    let data = std::fs::read(path).unwrap();
    assert_eq!(&data[0..4], b"RIFF", "missing RIFF header");
    assert_eq!(&data[8..12], b"WEBP", "missing WEBP fourcc");
    let decoded = webp::Decoder::new(&data)
        .decode()
        .expect("output should decode as WebP");
    WebpInfo {
        width: decoded.width(),
        height: decoded.height(),
        has_alpha: decoded.is_alpha(),
    }
}

// =============================================================================
// Scripted Dialogs
// =============================================================================

/// Dialog stand-in that returns preset paths and records notifications.
#[derive(Default)]
pub struct ScriptedDialogs {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub output_requested_for: Option<PathBuf>,
    pub infos: Vec<(String, String)>,
    pub errors: Vec<(String, String)>,
}

impl ScriptedDialogs {
    pub fn new(input: Option<PathBuf>, output: Option<PathBuf>) -> Self {
        Self {
            input,
            output,
            ..Default::default()
        }
    }
}

impl FileSelector for ScriptedDialogs {
    fn select_input(&mut self) -> Option<PathBuf> {
        self.input.clone()
    }

    fn select_output(&mut self, input_path: &Path) -> Option<PathBuf> {
        self.output_requested_for = Some(input_path.to_path_buf());
        self.output.clone()
    }
}

impl Notifier for ScriptedDialogs {
    fn info(&mut self, title: &str, message: &str) {
        self.infos.push((title.to_string(), message.to_string()));
    }

    fn error(&mut self, title: &str, message: &str) {
        self.errors.push((title.to_string(), message.to_string()));
    }
}
