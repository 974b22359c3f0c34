use std::io::Write;
use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Diagnostic line logger. Writes to stderr so the game transcript on stdout
/// stays clean.
pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    fn format_line(&self, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}] {}", timestamp, prefix, message),
            None => format!("[{}] {}", timestamp, message),
        }
    }

    pub fn log(&self, message: &str) {
        let line = self.format_line(message);
        let _ = writeln!(std::io::stderr().lock(), "{}", line);
    }
}

/// Enables logging for the rest of the process. Later calls are ignored.
pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

pub fn is_enabled() -> bool {
    LOGGER.get().is_some()
}

/// Logs `message` if the logger was initialized, otherwise drops it.
pub fn log(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        if $crate::logger::is_enabled() {
            $crate::logger::log(&format!($($arg)*))
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_without_prefix() {
        let line = Logger::new(None).format_line("hello");
        assert!(line.starts_with('['));
        assert!(line.ends_with("] hello"));
    }

    #[test]
    fn test_line_with_prefix() {
        let line = Logger::new(Some("Console".to_string())).format_line("searching");
        assert!(line.ends_with("][Console] searching"), "{}", line);
    }
}
