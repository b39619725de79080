use thiserror::Error;

#[derive(Error, Debug)]
pub enum BaziError {
    #[error("Unknown heavenly stem: {symbol}")]
    InvalidStem { symbol: String },

    #[error("Unknown earthly branch: {symbol}")]
    InvalidBranch { symbol: String },

    #[error("Invalid chart: {message}")]
    InvalidChart { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration field: {field}")]
    MissingConfig { field: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Date parse error: {0}")]
    DateParse(#[from] chrono::ParseError),
}

pub type Result<T> = std::result::Result<T, BaziError>;
