//! Error types.
//!
//! [`SetupError`] covers everything that must stop a run before the first row
//! is touched. [`FetchError`] is per row: it is logged and the row is skipped.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("input table not found: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("lexicon directory not found: {}", .0.display())]
    MissingLexiconDir(PathBuf),

    #[error("lexicon file not found: {}", .0.display())]
    MissingLexiconFile(PathBuf),

    #[error("failed to read table {}: {source}", path.display())]
    Table {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to load config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("unsupported url scheme: {0}")]
    UnsupportedScheme(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_error_messages_name_the_path() {
        let e = SetupError::MissingInput(PathBuf::from("Input.csv"));
        assert_eq!(e.to_string(), "input table not found: Input.csv");

        let e = SetupError::MissingLexiconDir(PathBuf::from("StopWords"));
        assert!(e.to_string().contains("StopWords"));
    }

    #[test]
    fn test_fetch_error_from_parse_error() {
        let parse_err = url::Url::parse("not a url").unwrap_err();
        let e: FetchError = parse_err.into();
        assert!(matches!(e, FetchError::InvalidUrl(_)));
        assert!(e.to_string().starts_with("invalid url"));
    }
}
