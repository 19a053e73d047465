use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_common::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};
use tictactoe_common::games::tictactoe::GameMode;

use super::LogConfig;

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";
const DEFAULT_BOT_MOVE_DELAY_MS: u64 = 500;
const MAX_BOT_MOVE_DELAY_MS: u64 = 5000;

type ConfigFileManager = ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(path_override: Option<&Path>) -> ConfigFileManager {
    let path = path_override.map_or_else(get_config_path, Path::to_path_buf);
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Skips the mode-selection screen when set.
    #[serde(default)]
    pub mode: Option<GameMode>,
    pub bot_move_delay_ms: u64,
    #[serde(default)]
    pub log: LogConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.bot_move_delay_ms > MAX_BOT_MOVE_DELAY_MS {
            return Err(format!(
                "bot_move_delay_ms must not exceed {}, got {}",
                MAX_BOT_MOVE_DELAY_MS, self.bot_move_delay_ms
            ));
        }
        self.log.validate()?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: None,
            bot_move_delay_ms: DEFAULT_BOT_MOVE_DELAY_MS,
            log: LogConfig::default(),
        }
    }
}
