//! Reading command input: JSON documents and key=value parameters.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use askboard_types::query::QueryParams;

/// Read and parse a JSON document from a file, or stdin when the path is `-`.
pub async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        buf
    } else {
        tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?
    };

    serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON in {}", path.display()))
}

/// Turn repeated `key=value` arguments into query parameters.
pub fn parse_params(raw: &[String]) -> QueryParams {
    raw.iter().map(|p| QueryParams::parse_pair(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use askboard_types::question::Question;

    #[test]
    fn test_parse_params_keeps_order() {
        let params = parse_params(&["b=2".to_string(), "a=1".to_string()]);
        assert_eq!(
            params.pairs(),
            &[
                ("b".to_string(), "2".to_string()),
                ("a".to_string(), "1".to_string())
            ]
        );
    }

    #[tokio::test]
    async fn test_read_json_from_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("q.json");
        tokio::fs::write(&path, r#"{"_id": "q1", "title": "Hi"}"#)
            .await
            .unwrap();

        let question: Question = read_json(&path).await.unwrap();
        assert_eq!(question.title(), Some("Hi"));
    }

    #[tokio::test]
    async fn test_read_json_reports_bad_input() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("bad.json");
        tokio::fs::write(&path, "{").await.unwrap();

        let err = read_json::<Question>(&path).await.unwrap_err();
        assert!(err.to_string().contains("Invalid JSON"));
    }
}
