use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// Timestamped diagnostic log. Every line is kept in the shared buffer and,
/// when `echo` is set, mirrored to stderr.
#[derive(Clone)]
pub struct Logger {
    log_messages: Arc<Mutex<Vec<String>>>,
    echo: bool,
}

impl Logger {
    pub fn new(log_messages: Arc<Mutex<Vec<String>>>) -> Self {
        Logger {
            log_messages,
            echo: true,
        }
    }

    /// A logger that only records into the buffer.
    pub fn quiet(log_messages: Arc<Mutex<Vec<String>>>) -> Self {
        Logger {
            log_messages,
            echo: false,
        }
    }

    pub fn log(&self, message: impl AsRef<str>) {
        let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
        let log_message = format!("[{}] {}", timestamp, message.as_ref());
        if self.echo {
            eprintln!("{}", log_message);
        }
        self.log_messages.lock().push(log_message);
    }
}

pub fn measure_time<F, T>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let result = f();
    let duration = start.elapsed();
    (result, duration)
}

pub fn get_memory_usage() -> String {
    if let Ok(mem_info) = sys_info::mem_info() {
        format!(
            "Memory: Total: {} MB, Free: {} MB, Used: {} MB",
            mem_info.total / 1024,
            mem_info.free / 1024,
            mem_info.total.saturating_sub(mem_info.free) / 1024
        )
    } else {
        "Unable to get memory info".to_string()
    }
}
