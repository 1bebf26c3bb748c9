use axum::extract::Multipart;
use axum::Json;
use contracts::refactor::RefactorResponse;

use crate::api::error::ApiError;
use crate::shared::llm;

/// POST /refactor
///
/// Accepts one multipart field `file`, runs it through the refactoring
/// engine and returns the improved source together with a suggested
/// filename.
pub async fn refactor_file(mut multipart: Multipart) -> Result<Json<RefactorResponse>, ApiError> {
    let (filename, bytes) = read_file_field(&mut multipart).await?;

    let source = String::from_utf8(bytes)
        .map_err(|_| ApiError::bad_request("uploaded file is not valid UTF-8 text"))?;

    tracing::info!("refactoring {} ({} bytes)", filename, source.len());

    let improved = llm::engine().refactor(&filename, &source).await?;

    Ok(Json(RefactorResponse {
        filename: improved_filename(&filename),
        original_code: source,
        improved_code: improved,
    }))
}

fn improved_filename(original: &str) -> String {
    format!("improved_{}", original)
}

async fn read_file_field(multipart: &mut Multipart) -> Result<(String, Vec<u8>), ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("malformed multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field
            .file_name()
            .map(str::to_owned)
            .unwrap_or_else(|| "input.txt".to_string());
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(format!("failed to read upload: {e}")))?;
        return Ok((filename, bytes.to_vec()));
    }

    Err(ApiError::bad_request("missing multipart field 'file'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_improved_filename_keeps_extension() {
        assert_eq!(improved_filename("messy.py"), "improved_messy.py");
        assert_eq!(improved_filename("Main.java"), "improved_Main.java");
    }
}
