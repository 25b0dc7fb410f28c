//! Upload-and-report controller: file selection, dispatch, response handling.

mod selection;
pub use selection::{validate, CandidateFile, SelectedFile, SelectionError, CSV_MIME};

mod controller;
pub use controller::{Effect, UploadController};

mod view;
pub use view::UploadPanel;

/// What the submit button does after the backend reports an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendErrorPolicy {
    /// Same as a transport failure: the user can retry with the same file.
    #[default]
    ReenableSubmit,
    /// Leave submit disabled until a new file is selected.
    KeepSubmitDisabled,
}

/// Controller settings, provided to components through context.
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerConfig {
    pub endpoint: String,
    pub field_name: String,
    pub backend_error_policy: BackendErrorPolicy,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            endpoint: api::UPLOAD_ENDPOINT.to_string(),
            field_name: api::UPLOAD_FIELD.to_string(),
            backend_error_policy: BackendErrorPolicy::default(),
        }
    }
}
