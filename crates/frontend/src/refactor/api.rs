//! API client for the refactoring service.

use contracts::refactor::{ErrorDetail, RefactorResponse};
use gloo_net::http::Request;
use web_sys::FormData;

use super::model::UploadError;
use crate::shared::api_utils::api_url;

/// Post the picked file to `POST /refactor` as the single multipart field
/// `file`, name and bytes preserved.
///
/// No Content-Type header is set here; the browser attaches the multipart
/// boundary itself.
pub async fn refactor_file(file: &web_sys::File) -> Result<RefactorResponse, UploadError> {
    let form = FormData::new().map_err(|_| UploadError::Transport)?;
    form.append_with_blob("file", file)
        .map_err(|_| UploadError::Transport)?;

    let response = Request::post(&api_url("/refactor"))
        .body(form)
        .map_err(|_| UploadError::Transport)?
        .send()
        .await
        .map_err(|_| UploadError::Transport)?;

    if response.ok() {
        return response
            .json::<RefactorResponse>()
            .await
            .map_err(|_| UploadError::Transport);
    }

    // Error replies carry a structured { detail } body when the service
    // itself rejected the file; anything else counts as a transport failure.
    match response.json::<ErrorDetail>().await {
        Ok(body) => Err(UploadError::Service(body.detail)),
        Err(_) => Err(UploadError::Transport),
    }
}
