//! State machine behind the upload panel.
//!
//! The controller owns the selection slot and everything the page shows about
//! an upload cycle. It never touches the DOM: operations return [`Effect`]s
//! (alerts, chart draws) that the view performs. One cycle is
//! `begin_upload` → one awaited request → `finish_upload`.

use api::{ChartPayload, UploadError, UploadResponse};
use tracing::{debug, error, info, warn};

use super::selection::{validate, CandidateFile, SelectedFile, SelectionError};
use super::{BackendErrorPolicy, ControllerConfig};
use crate::i18n;
use crate::report::{render_metrics, MetricCell};

/// Side effect requested from the view layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Blocking user-facing message.
    Alert(String),
    /// Replace the chart with this payload.
    DrawChart(ChartPayload),
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadController<H> {
    config: ControllerConfig,
    selected: Option<SelectedFile<H>>,
    /// Bumped on every accepted selection.
    selection_seq: u64,
    /// Selection the in-flight request was started with.
    uploading_seq: Option<u64>,
    /// Selection consumed by the last successful report, until its chart is drawn.
    last_uploaded: Option<SelectedFile<H>>,
    file_name: String,
    drag_active: bool,
    loading: bool,
    submit_enabled: bool,
    results_visible: bool,
    metrics: Vec<MetricCell>,
}

impl<H: Clone> UploadController<H> {
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            config,
            selected: None,
            selection_seq: 0,
            uploading_seq: None,
            last_uploaded: None,
            file_name: String::new(),
            drag_active: false,
            loading: false,
            submit_enabled: false,
            results_visible: false,
            metrics: Vec::new(),
        }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Name shown next to the drop area; empty after a rejected selection.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn has_selection(&self) -> bool {
        self.selected.is_some()
    }

    pub fn drag_active(&self) -> bool {
        self.drag_active
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled && !self.loading
    }

    pub fn results_visible(&self) -> bool {
        self.results_visible
    }

    pub fn metrics(&self) -> &[MetricCell] {
        &self.metrics
    }

    pub fn set_drag_active(&mut self, active: bool) {
        self.drag_active = active;
    }

    /// A drop always ends the drag; an empty drop counts as a rejected file.
    pub fn drop_file(&mut self, candidate: Option<CandidateFile<H>>) -> Vec<Effect> {
        self.drag_active = false;
        self.select(candidate)
    }

    /// Picker changes with an empty file list are ignored.
    pub fn pick_file(&mut self, candidate: Option<CandidateFile<H>>) -> Vec<Effect> {
        match candidate {
            Some(candidate) => self.select(Some(candidate)),
            None => Vec::new(),
        }
    }

    fn select(&mut self, candidate: Option<CandidateFile<H>>) -> Vec<Effect> {
        match validate(candidate) {
            Ok(file) => {
                info!(file = %file.name(), "CSV selected");
                self.file_name = file.name().to_string();
                self.selected = Some(file);
                self.last_uploaded = None;
                self.selection_seq += 1;
                self.submit_enabled = true;
                Vec::new()
            }
            Err(err) => {
                match &err {
                    SelectionError::NoFile => warn!("drop carried no file"),
                    SelectionError::NotCsv { mime } => warn!(%mime, "rejected non-CSV file"),
                }
                self.selected = None;
                self.file_name.clear();
                self.submit_enabled = false;
                vec![Effect::Alert(i18n::tr("alert-not-csv"))]
            }
        }
    }

    /// Enter the loading state and hand out the file to send.
    ///
    /// Returns `None` when there is nothing to send or a request is already
    /// in flight.
    pub fn begin_upload(&mut self) -> Option<H> {
        if self.loading || !self.submit_enabled {
            debug!(
                loading = self.loading,
                "submit ignored: not enabled or request in flight"
            );
            return None;
        }
        let file = self.selected.as_ref()?;
        let handle = file.handle().clone();
        info!(file = %file.name(), endpoint = %self.config.endpoint, "uploading");

        self.loading = true;
        self.uploading_seq = Some(self.selection_seq);
        self.last_uploaded = None;
        self.results_visible = false;
        self.submit_enabled = false;
        Some(handle)
    }

    /// Apply the outcome of the request started by [`Self::begin_upload`].
    pub fn finish_upload(&mut self, outcome: Result<UploadResponse, UploadError>) -> Vec<Effect> {
        if !self.loading {
            warn!("upload outcome arrived with no request in flight; dropped");
            return Vec::new();
        }
        self.loading = false;
        let uploaded_seq = self.uploading_seq.take();

        match outcome {
            Ok(UploadResponse::Failed { error }) => {
                warn!(%error, "backend rejected the upload");
                self.results_visible = false;
                self.submit_enabled = match self.config.backend_error_policy {
                    BackendErrorPolicy::ReenableSubmit => self.selected.is_some(),
                    BackendErrorPolicy::KeepSubmitDisabled => false,
                };
                vec![Effect::Alert(error)]
            }
            Ok(UploadResponse::Report { results, chart }) => match ChartPayload::decode(&chart) {
                Ok(payload) => {
                    self.metrics = render_metrics(&results);
                    self.results_visible = true;
                    if uploaded_seq == Some(self.selection_seq) {
                        // The uploaded file is done; a newer pick stays armed.
                        self.last_uploaded = self.selected.take();
                    }
                    self.submit_enabled = self.selected.is_some();
                    info!(metrics = results.len(), "report rendered");
                    vec![Effect::DrawChart(payload)]
                }
                Err(err) => self.fail(err),
            },
            Err(err) => self.fail(err),
        }
    }

    /// The report's chart could not be drawn. Same outcome as a failed
    /// upload: results hidden and the uploaded file armed again for a retry.
    pub fn chart_failed(&mut self, reason: &str) -> Vec<Effect> {
        if self.selected.is_none() {
            self.selected = self.last_uploaded.take();
        }
        self.last_uploaded = None;
        self.fail(UploadError::Chart(reason.to_string()))
    }

    fn fail(&mut self, err: UploadError) -> Vec<Effect> {
        error!(%err, "upload failed");
        self.results_visible = false;
        self.submit_enabled = self.selected.is_some();
        vec![Effect::Alert(i18n::tr("alert-upload-failed"))]
    }
}
