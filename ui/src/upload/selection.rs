//! File selection policy: only `text/csv` files may be uploaded.

/// The only MIME type accepted for upload.
pub const CSV_MIME: &str = "text/csv";

/// A file offered by a drop or a picker change, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateFile<H> {
    pub name: String,
    pub mime: String,
    pub handle: H,
}

impl<H> CandidateFile<H> {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, handle: H) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            handle,
        }
    }
}

/// A candidate that passed [`validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile<H> {
    name: String,
    handle: H,
}

impl<H> SelectedFile<H> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn handle(&self) -> &H {
        &self.handle
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("no file was provided")]
    NoFile,
    #[error("unsupported file type `{mime}`")]
    NotCsv { mime: String },
}

/// Accept iff the declared MIME type is exactly [`CSV_MIME`].
pub fn validate<H>(candidate: Option<CandidateFile<H>>) -> Result<SelectedFile<H>, SelectionError> {
    let candidate = candidate.ok_or(SelectionError::NoFile)?;
    if candidate.mime != CSV_MIME {
        return Err(SelectionError::NotCsv {
            mime: candidate.mime,
        });
    }
    Ok(SelectedFile {
        name: candidate.name,
        handle: candidate.handle,
    })
}
