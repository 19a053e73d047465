use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tictactoe_common::config::Validate;
use tictactoe_common::logger::LogTarget;

const DEFAULT_LOG_FILE: &str = "tictactoe.log";

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct LogConfig {
    pub target: LogTarget,
    #[serde(default)]
    pub prefix: Option<String>,
}

impl Validate for LogConfig {
    fn validate(&self) -> Result<(), String> {
        if let LogTarget::File(path) = &self.target
            && path.as_os_str().is_empty()
        {
            return Err("Log file path must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            target: LogTarget::File(PathBuf::from(DEFAULT_LOG_FILE)),
            prefix: None,
        }
    }
}
