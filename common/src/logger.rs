use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

use chrono::Local;
use serde::{Deserialize, Serialize};

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Where log lines go. A file keeps them off the terminal the game is drawn on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogTarget {
    Stdout,
    Stderr,
    File(PathBuf),
}

enum Sink {
    Stdout,
    Stderr,
    File(Mutex<File>),
}

pub struct Logger {
    prefix: Option<String>,
    sink: Sink,
}

impl Logger {
    fn open(target: &LogTarget, prefix: Option<String>) -> io::Result<Self> {
        let sink = match target {
            LogTarget::Stdout => Sink::Stdout,
            LogTarget::Stderr => Sink::Stderr,
            LogTarget::File(path) => {
                let file = OpenOptions::new().create(true).append(true).open(path)?;
                Sink::File(Mutex::new(file))
            }
        };
        Ok(Self { prefix, sink })
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let entry = format_entry(&timestamp, self.prefix.as_deref(), file, line, message);
        match &self.sink {
            Sink::Stdout => println!("{}", entry),
            Sink::Stderr => eprintln!("{}", entry),
            Sink::File(file) => {
                if let Ok(mut file) = file.lock() {
                    let _ = writeln!(file, "{}", entry);
                }
            }
        }
    }
}

fn format_entry(
    timestamp: &str,
    prefix: Option<&str>,
    file: &str,
    line: u32,
    message: &str,
) -> String {
    let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
    match prefix {
        Some(prefix) => format!("[{timestamp}][{prefix}][{file_name}:{line}] {message}"),
        None => format!("[{timestamp}][{file_name}:{line}] {message}"),
    }
}

/// Installs the process logger once; later calls keep the first one.
pub fn init_logger(target: &LogTarget, prefix: Option<String>) -> io::Result<()> {
    if LOGGER.get().is_some() {
        return Ok(());
    }
    let logger = Logger::open(target, prefix)?;
    let _ = LOGGER.set(logger);
    Ok(())
}

/// Dropped silently until `init_logger` runs, so library code can log from tests.
pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_strips_directories_from_file() {
        let entry = format_entry("10:00:00", None, "src/games/board.rs", 12, "hello");
        assert_eq!(entry, "[10:00:00][board.rs:12] hello");

        let entry = format_entry("t", None, "C:\\src\\main.rs", 3, "x");
        assert_eq!(entry, "[t][main.rs:3] x");
    }

    #[test]
    fn test_entry_includes_prefix() {
        let entry = format_entry("t", Some("Console"), "main.rs", 7, "started");
        assert_eq!(entry, "[t][Console][main.rs:7] started");
    }

    #[test]
    fn test_file_target_appends_lines() {
        let mut path = std::env::temp_dir();
        let file_name = format!("tictactoe_logger_test_{}.log", rand::random::<u32>());
        path.push(file_name);

        let logger = Logger::open(&LogTarget::File(path.clone()), None).unwrap();
        logger.log("a.rs", 1, "first");
        logger.log("a.rs", 2, "second");

        let content = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("[a.rs:1] first"));
        assert!(lines[1].ends_with("[a.rs:2] second"));
    }
}
