use crate::{UploadError, UploadResponse};

/// One request/response exchange with the report backend.
///
/// Implementations send `file` and decode the body; they never retry.
#[allow(async_fn_in_trait)]
pub trait ReportTransport {
    type File;

    async fn upload(&self, file: &Self::File) -> Result<UploadResponse, UploadError>;
}

/// Browser transport: multipart `POST` via `fetch` (gloo-net).
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct HttpTransport {
    endpoint: String,
    field_name: String,
}

#[cfg(target_arch = "wasm32")]
impl HttpTransport {
    pub fn new(endpoint: impl Into<String>, field_name: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            field_name: field_name.into(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(crate::UPLOAD_ENDPOINT, crate::UPLOAD_FIELD)
    }
}

#[cfg(target_arch = "wasm32")]
impl ReportTransport for HttpTransport {
    type File = web_sys::File;

    async fn upload(&self, file: &web_sys::File) -> Result<UploadResponse, UploadError> {
        use gloo_net::http::Request;

        let form = web_sys::FormData::new()
            .map_err(|err| UploadError::Network(format!("FormData unavailable: {err:?}")))?;
        form.append_with_blob_and_filename(&self.field_name, file, &file.name())
            .map_err(|err| UploadError::Network(format!("Unable to attach file: {err:?}")))?;

        let response = Request::post(&self.endpoint)
            .body(form)
            .map_err(|err| UploadError::Network(err.to_string()))?
            .send()
            .await
            .map_err(|err| UploadError::Network(err.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|err| UploadError::Network(err.to_string()))?;

        UploadResponse::from_body(&body)
    }
}
