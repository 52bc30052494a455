//! Small helpers for logging and file system checks.

use crate::error::SetupError;
use std::path::Path;
use tokio::fs;
use tracing::{debug, instrument, warn};

/// Truncate a string for logging purposes.
///
/// Strings longer than `max` characters are cut at a char boundary and get
/// `"…(+N bytes)"` appended.
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}…(+{} bytes)", &s[..cut], s.len() - cut),
    }
}

/// Marker written into the articles directory to confirm it accepts files.
const WRITE_CHECK_FILE: &str = ".article_metrics_write_check";

/// Create `path` (and parents) and fail early if article files could not be
/// written there.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn ensure_writable_dir(path: &Path) -> Result<(), SetupError> {
    fs::create_dir_all(path).await?;
    let marker = path.join(WRITE_CHECK_FILE);
    fs::write(&marker, b"").await?;
    if let Err(e) = fs::remove_file(&marker).await {
        warn!(marker = %marker.display(), error = %e, "Could not remove write-check file");
    }
    debug!("Articles directory is writable");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_for_log_short_string() {
        let s = "Hello, world!";
        assert_eq!(truncate_for_log(s, 100), "Hello, world!");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.contains("…(+400 bytes)"));
    }

    #[test]
    fn test_truncate_for_log_multibyte() {
        let result = truncate_for_log("éééé", 2);
        assert_eq!(result, "éé…(+4 bytes)");
    }

    #[tokio::test]
    async fn test_ensure_writable_dir_creates_nested() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("a/b/Extracted_Data");
        ensure_writable_dir(&target).await.unwrap();
        assert!(target.is_dir());
        assert_eq!(std::fs::read_dir(&target).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_ensure_writable_dir_keeps_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("A1.txt"), "kept").unwrap();
        ensure_writable_dir(dir.path()).await.unwrap();
        assert_eq!(std::fs::read_to_string(dir.path().join("A1.txt")).unwrap(), "kept");
        assert!(!dir.path().join(WRITE_CHECK_FILE).exists());
    }

    #[tokio::test]
    async fn test_ensure_writable_dir_rejects_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = ensure_writable_dir(file.path()).await.unwrap_err();
        assert!(matches!(err, SetupError::Io(_)));
    }
}
