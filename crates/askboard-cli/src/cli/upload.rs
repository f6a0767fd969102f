//! Multipart file upload.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use askboard_types::http::FilePart;

use crate::output::print_outcome;
use crate::state::AppState;

pub async fn upload(state: &AppState, path: &str, file: &Path, json: bool) -> Result<()> {
    let bytes = tokio::fs::read(file)
        .await
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let file_name = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());

    tracing::debug!(path, file_name = %file_name, size = bytes.len(), "Uploading file");

    let reply: Value = state
        .api
        .client()
        .post_form(path, FilePart::new(file_name.clone(), bytes))
        .await?;

    print_outcome(&format!("Uploaded {file_name}"), &reply, json)
}
