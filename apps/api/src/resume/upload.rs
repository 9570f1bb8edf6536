//! Résumé file upload — turns an uploaded file into a title and plain text
//! the client can review before analysis.

use axum::extract::Multipart;
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;

const FILE_FIELD: &str = "file";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UploadedResume {
    pub title: String,
    pub content: String,
}

/// Reads the `file` field of a multipart body. Other fields are ignored.
pub async fn read_upload(mut multipart: Multipart) -> Result<UploadedResume, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or("resume").to_string();
        let content_type = field.content_type().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read file: {e}")))?;

        if data.is_empty() {
            return Err(AppError::Validation("Uploaded file is empty".to_string()));
        }

        let size = data.len();
        let content = extract_text(&file_name, content_type.as_deref(), data).await?;
        info!("Read uploaded resume '{file_name}' ({size} bytes)");

        return Ok(UploadedResume {
            title: title_from_file_name(&file_name),
            content,
        });
    }

    Err(AppError::Validation(format!(
        "Multipart field '{FILE_FIELD}' is required"
    )))
}

async fn extract_text(
    file_name: &str,
    content_type: Option<&str>,
    data: Bytes,
) -> Result<String, AppError> {
    if is_pdf(file_name, content_type) {
        let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data))
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("PDF extraction task failed: {e}")))?
            .map_err(|e| AppError::UnprocessableEntity(format!("Could not read PDF: {e}")))?;
        return Ok(text);
    }

    String::from_utf8(data.to_vec()).map_err(|_| {
        AppError::UnprocessableEntity("Uploaded file is not UTF-8 text or PDF".to_string())
    })
}

fn is_pdf(file_name: &str, content_type: Option<&str>) -> bool {
    content_type == Some("application/pdf")
        || extension(file_name).is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

fn extension(file_name: &str) -> Option<&str> {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty() && !ext.contains('/'))
}

/// File name without its last extension.
pub fn title_from_file_name(file_name: &str) -> String {
    match (extension(file_name), file_name.rsplit_once('.')) {
        (Some(_), Some((stem, _))) if !stem.is_empty() => stem.to_string(),
        _ => file_name.to_string(),
    }
}
