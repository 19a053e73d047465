use derive_more::{Display, Error};

#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    #[display("Failed to read config file: {reason}")]
    Read { reason: String },

    #[display("Failed to write config file: {reason}")]
    Write { reason: String },

    #[display("Failed to serialize config: {reason}")]
    Serialize { reason: String },

    #[display("Failed to deserialize config: {reason}")]
    Deserialize { reason: String },

    #[display("Config validation error: {reason}")]
    Validation { reason: String },

    #[display("Config cache lock poisoned")]
    Poisoned,
}
