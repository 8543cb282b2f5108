// app.rs
pub mod file_dialogs;
pub mod image_processing;
pub mod notifications;

use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::ConvertError;
use crate::utils::{get_memory_usage, measure_time, Logger};
use image_processing::{ConversionRequest, ConversionResult, DEFAULT_METHOD, DEFAULT_QUALITY};

/// Supplies the paths for one conversion. `None` means the user cancelled.
pub trait FileSelector {
    fn select_input(&mut self) -> Option<PathBuf>;
    fn select_output(&mut self, input_path: &Path) -> Option<PathBuf>;
}

/// Displays the result of a conversion to the user.
pub trait Notifier {
    fn info(&mut self, title: &str, message: &str);
    fn error(&mut self, title: &str, message: &str);
}

/// Native open/save dialogs and message boxes.
#[derive(Debug, Default)]
pub struct DesktopDialogs;

impl FileSelector for DesktopDialogs {
    fn select_input(&mut self) -> Option<PathBuf> {
        file_dialogs::select_image()
    }

    fn select_output(&mut self, input_path: &Path) -> Option<PathBuf> {
        file_dialogs::select_save_path(input_path)
    }
}

impl Notifier for DesktopDialogs {
    fn info(&mut self, title: &str, message: &str) {
        notifications::show_info(title, message);
    }

    fn error(&mut self, title: &str, message: &str) {
        notifications::show_error(title, message);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CancelStage {
    Input,
    Output,
}

/// How one run of [`App::select_and_convert`] ended.
#[derive(Debug)]
pub enum Outcome {
    Cancelled(CancelStage),
    Converted {
        output_path: PathBuf,
        stats: ConversionResult,
    },
    Failed(ConvertError),
}

pub struct App {
    pub quality: u32,
    pub method: u32,
    pub log_messages: Arc<Mutex<Vec<String>>>,
    logger: Logger,
}

impl Default for App {
    fn default() -> Self {
        let log_messages = Arc::new(Mutex::new(Vec::new()));
        Self {
            quality: DEFAULT_QUALITY,
            method: DEFAULT_METHOD,
            logger: Logger::new(log_messages.clone()),
            log_messages,
        }
    }
}

impl App {
    /// Same as `default`, but the diagnostic log is not echoed to stderr.
    pub fn quiet() -> Self {
        let log_messages = Arc::new(Mutex::new(Vec::new()));
        Self {
            quality: DEFAULT_QUALITY,
            method: DEFAULT_METHOD,
            logger: Logger::quiet(log_messages.clone()),
            log_messages,
        }
    }

    /// Ask for an input image and a destination, convert, and report the
    /// result. Conversion failures are shown to the user and returned, never
    /// propagated.
    pub fn select_and_convert<D>(&self, dialogs: &mut D) -> Outcome
    where
        D: FileSelector + Notifier,
    {
        let input_path = match dialogs.select_input() {
            Some(path) => path,
            None => {
                println!("No file selected. Exiting.");
                self.logger.log("Input selection cancelled");
                return Outcome::Cancelled(CancelStage::Input);
            }
        };
        println!("Selected: {}", input_path.display());

        let output_path = match dialogs.select_output(&input_path) {
            Some(path) => path,
            None => {
                println!("No save location selected. Exiting.");
                self.logger.log("Save location selection cancelled");
                return Outcome::Cancelled(CancelStage::Output);
            }
        };

        let request = ConversionRequest::new(input_path, output_path)
            .with_quality(self.quality)
            .with_method(self.method);
        self.run_conversion(request, dialogs)
    }

    fn run_conversion<N: Notifier>(&self, request: ConversionRequest, notifier: &mut N) -> Outcome {
        self.logger.log(format!(
            "Converting {} -> {} (quality {}, method {})",
            request.input_path.display(),
            request.output_path.display(),
            request.quality,
            request.method
        ));
        self.logger.log(get_memory_usage());

        let (result, duration) = measure_time(|| image_processing::convert(&request));
        self.logger.log(format!("Conversion took {:?}", duration));
        self.logger.log(get_memory_usage());

        match result {
            Ok(stats) => {
                let message = notifications::success_message(&request.output_path, &stats);
                println!("{}", message);
                self.logger.log(format!(
                    "Wrote {} bytes (source {} bytes)",
                    stats.webp_size_bytes, stats.original_size_bytes
                ));
                notifier.info(notifications::SUCCESS_TITLE, &message);
                Outcome::Converted {
                    output_path: request.output_path,
                    stats,
                }
            }
            Err(e) => {
                let (title, message) = notifications::error_message(&e);
                println!("{}", message);
                self.logger.log(format!("Conversion failed: {}", e));
                notifier.error(title, &message);
                Outcome::Failed(e)
            }
        }
    }
}
