//! Article store: one UTF-8 text file per identifier.

use crate::models::ArticleText;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, instrument};

/// `<dir>/<url_id>.txt`
pub fn article_path(dir: &Path, url_id: &str) -> PathBuf {
    dir.join(format!("{url_id}.txt"))
}

/// Write the article, replacing any earlier copy.
///
/// The text goes to a sibling temp file first and is renamed into place, so a
/// failed write never leaves a truncated article behind.
#[instrument(level = "debug", skip_all, fields(url_id = %article.url_id))]
pub async fn save_article(dir: &Path, article: &ArticleText) -> io::Result<PathBuf> {
    let path = article_path(dir, &article.url_id);
    let tmp = dir.join(format!(".{}.txt.partial", article.url_id));

    fs::write(&tmp, article.to_file_contents()).await?;
    if let Err(e) = fs::rename(&tmp, &path).await {
        let _ = fs::remove_file(&tmp).await;
        return Err(e);
    }

    debug!(path = %path.display(), "Stored article");
    Ok(path)
}

/// Read a stored article back as text.
pub async fn load_article(dir: &Path, url_id: &str) -> io::Result<String> {
    fs::read_to_string(article_path(dir, url_id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(id: &str, body: &str) -> ArticleText {
        ArticleText {
            url_id: id.to_string(),
            title: "Hello".to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_article_path() {
        let p = article_path(Path::new("Extracted_Data"), "Netclan20241034");
        assert_eq!(p, PathBuf::from("Extracted_Data/Netclan20241034.txt"));
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_article(dir.path(), &article("A1", "World test sentence."))
            .await
            .unwrap();
        assert!(path.ends_with("A1.txt"));

        let text = load_article(dir.path(), "A1").await.unwrap();
        assert_eq!(text, "Hello\n\nWorld test sentence.");
        assert!(!dir.path().join(".A1.txt.partial").exists());
    }

    #[tokio::test]
    async fn test_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        save_article(dir.path(), &article("A1", "old")).await.unwrap();
        save_article(dir.path(), &article("A1", "new")).await.unwrap();
        let text = load_article(dir.path(), "A1").await.unwrap();
        assert!(text.ends_with("new"));
    }

    #[tokio::test]
    async fn test_load_missing_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_article(dir.path(), "nope").await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
