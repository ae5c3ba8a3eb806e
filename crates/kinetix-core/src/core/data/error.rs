use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("No {kind} record found for '{key}'")]
    NotFound { kind: &'static str, key: String },

    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },

    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },

    #[error("Invalid {kind} record '{key}': {reason}")]
    InvalidRecord {
        kind: &'static str,
        key: String,
        reason: String,
    },
}
