use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Info,
    Debug,
}

impl LogLevel {
    fn tag(self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }
}

/// Writes to stderr so log lines never interleave with the board on stdout.
pub struct Logger {
    prefix: Option<String>,
    max_level: LogLevel,
}

impl Logger {
    fn new(prefix: Option<String>, max_level: LogLevel) -> Self {
        Self { prefix, max_level }
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level <= self.max_level
    }

    fn format_line(&self, level: LogLevel, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => format!(
                "[{}][{}][{}][{}:{}] {}",
                timestamp,
                prefix,
                level.tag(),
                file_name,
                line,
                message
            ),
            None => format!("[{}][{}][{}:{}] {}", timestamp, level.tag(), file_name, line, message),
        }
    }

    pub fn log(&self, level: LogLevel, file: &str, line: u32, message: &str) {
        if self.enabled(level) {
            eprintln!("{}", self.format_line(level, file, line, message));
        }
    }
}

/// First call wins; later calls are ignored.
pub fn init_logger(prefix: Option<String>, max_level: LogLevel) {
    LOGGER.get_or_init(|| Logger::new(prefix, max_level));
}

pub fn enabled(level: LogLevel) -> bool {
    LOGGER.get().is_some_and(|logger| logger.enabled(level))
}

/// Lines logged before `init_logger` are dropped.
pub fn log(level: LogLevel, file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(level, file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(
            $crate::logger::LogLevel::Info,
            file!(),
            line!(),
            &format!($($arg)*),
        )
    };
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if $crate::logger::enabled($crate::logger::LogLevel::Debug) {
            $crate::logger::log(
                $crate::logger::LogLevel::Debug,
                file!(),
                line!(),
                &format!($($arg)*),
            )
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_filter() {
        let logger = Logger::new(None, LogLevel::Info);
        assert!(logger.enabled(LogLevel::Info));
        assert!(!logger.enabled(LogLevel::Debug));

        let logger = Logger::new(None, LogLevel::Debug);
        assert!(logger.enabled(LogLevel::Debug));
    }

    #[test]
    fn test_format_line_with_prefix() {
        let logger = Logger::new(Some("Client".to_string()), LogLevel::Info);
        let line = logger.format_line(LogLevel::Info, "src/tictactoe/board.rs", 12, "hello");
        assert!(line.ends_with("[Client][INFO][board.rs:12] hello"));
    }

    #[test]
    fn test_format_line_strips_windows_paths() {
        let logger = Logger::new(None, LogLevel::Debug);
        let line = logger.format_line(LogLevel::Debug, "src\\main.rs", 3, "x");
        assert!(line.ends_with("[DEBUG][main.rs:3] x"));
    }
}
