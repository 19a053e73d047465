use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::ConfigError;

pub trait ConfigContentProvider {
    /// `Ok(None)` when there is nothing stored yet.
    fn get_config_content(&self) -> Result<Option<String>, ConfigError>;
    fn set_config_content(&self, content: &str) -> Result<(), ConfigError>;
}

pub struct FileContentConfigProvider {
    file_path: PathBuf,
}

impl FileContentConfigProvider {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, ConfigError> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(ConfigError::Read {
                reason: format!("{}: {}", self.file_path.display(), err),
            }),
        }
    }

    fn set_config_content(&self, content: &str) -> Result<(), ConfigError> {
        std::fs::write(&self.file_path, content).map_err(|err| ConfigError::Write {
            reason: format!("{}: {}", self.file_path.display(), err),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path() -> PathBuf {
        let mut path = std::env::temp_dir();
        let file_name = format!("tictactoe_provider_test_{}.yaml", rand::random::<u32>());
        path.push(file_name);
        path
    }

    #[test]
    fn test_missing_file_reads_as_none() {
        let provider = FileContentConfigProvider::new(temp_path());
        assert_eq!(provider.get_config_content(), Ok(None));
    }

    #[test]
    fn test_written_content_reads_back() {
        let path = temp_path();
        let provider = FileContentConfigProvider::new(path.clone());
        provider.set_config_content("bot_move_delay_ms: 10\n").unwrap();
        let read = provider.get_config_content();
        let _ = std::fs::remove_file(&path);
        assert_eq!(read, Ok(Some("bot_move_delay_ms: 10\n".to_string())));
    }
}
