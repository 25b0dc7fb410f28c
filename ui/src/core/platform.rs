//! Platform seams: which file handle and transport the controller runs with.

use api::{ReportTransport, UploadError, UploadResponse};

use crate::upload::ControllerConfig;

/// File handle carried by a selection.
#[cfg(target_arch = "wasm32")]
pub type PlatformFile = web_sys::File;

/// Native builds (tests, tooling) have no browser file objects.
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformFile = std::path::PathBuf;

#[cfg(target_arch = "wasm32")]
pub type PlatformTransport = api::HttpTransport;

#[cfg(not(target_arch = "wasm32"))]
pub type PlatformTransport = OfflineTransport;

#[cfg(target_arch = "wasm32")]
pub fn transport(config: &ControllerConfig) -> PlatformTransport {
    api::HttpTransport::new(config.endpoint.clone(), config.field_name.clone())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn transport(config: &ControllerConfig) -> PlatformTransport {
    OfflineTransport {
        endpoint: config.endpoint.clone(),
    }
}

/// Stand-in used outside the browser; every upload fails as a network error.
#[derive(Debug, Clone)]
pub struct OfflineTransport {
    endpoint: String,
}

impl ReportTransport for OfflineTransport {
    type File = std::path::PathBuf;

    async fn upload(&self, file: &Self::File) -> Result<UploadResponse, UploadError> {
        Err(UploadError::Network(format!(
            "cannot post {} to {}: uploads need a browser",
            file.display(),
            self.endpoint
        )))
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn offline_transport_reports_network_error() {
        let transport = transport(&ControllerConfig::default());
        let outcome =
            futures::executor::block_on(transport.upload(&std::path::PathBuf::from("trades.csv")));
        assert!(matches!(outcome, Err(UploadError::Network(msg)) if msg.contains("/upload")));
    }
}
