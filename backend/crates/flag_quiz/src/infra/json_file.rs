//! JSON File Catalog Source

use crate::domain::repository::CatalogSource;
use crate::error::{QuizError, QuizResult};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Reads the catalog from a JSON object of `code → name`
#[derive(Debug, Clone)]
pub struct JsonFileCatalogSource {
    path: PathBuf,
}

impl JsonFileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for JsonFileCatalogSource {
    async fn load(&self) -> QuizResult<BTreeMap<String, String>> {
        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            QuizError::DataUnavailable(format!("cannot read {}: {}", self.path.display(), e))
        })?;

        let codes: BTreeMap<String, String> = serde_json::from_str(&contents).map_err(|e| {
            QuizError::DataUnavailable(format!("cannot parse {}: {}", self.path.display(), e))
        })?;

        tracing::debug!(
            path = %self.path.display(),
            entries = codes.len(),
            "Read flag dataset"
        );

        Ok(codes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "flag_quiz_{}_{}.json",
            std::process::id(),
            name
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[tokio::test]
    async fn test_reads_code_name_object() {
        let path = temp_file("valid", r#"{"fr": "France", "de": "Germany"}"#);
        let codes = JsonFileCatalogSource::new(&path).load().await.unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(codes.len(), 2);
        assert_eq!(codes["fr"], "France");
    }

    #[tokio::test]
    async fn test_empty_object_is_not_an_error() {
        let path = temp_file("empty", "{}");
        let codes = JsonFileCatalogSource::new(&path).load().await.unwrap();
        std::fs::remove_file(&path).ok();

        assert!(codes.is_empty());
    }

    #[tokio::test]
    async fn test_missing_file() {
        let source = JsonFileCatalogSource::new("/nonexistent/flag_data.json");
        let err = source.load().await.unwrap_err();
        assert!(matches!(err, QuizError::DataUnavailable(_)));
    }

    #[tokio::test]
    async fn test_malformed_json() {
        for (name, contents) in [
            ("syntax", "{not json"),
            ("array", r#"["fr", "de"]"#),
            ("numbers", r#"{"fr": 1}"#),
        ] {
            let path = temp_file(name, contents);
            let err = JsonFileCatalogSource::new(&path).load().await.unwrap_err();
            std::fs::remove_file(&path).ok();

            assert!(matches!(err, QuizError::DataUnavailable(_)), "{name}");
        }
    }
}
