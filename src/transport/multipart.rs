//! multipart/form-data bodies for file uploads.

use crate::errors::{WatsonError, WatsonResult};
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use tokio::io::AsyncRead;
use tokio_util::io::ReaderStream;

/// Content type used for file parts that do not declare one.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Source of a file part's bytes.
pub enum PartData {
    /// Fully buffered data; can be sent any number of times
    Bytes(Bytes),
    /// Streamed data; read once while the request is sent
    Reader(Box<dyn AsyncRead + Send + Sync + Unpin>),
}

impl PartData {
    fn try_clone(&self) -> Option<Self> {
        match self {
            PartData::Bytes(bytes) => Some(PartData::Bytes(bytes.clone())),
            PartData::Reader(_) => None,
        }
    }
}

impl std::fmt::Debug for PartData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PartData::Bytes(bytes) => write!(f, "Bytes({} bytes)", bytes.len()),
            PartData::Reader(_) => f.write_str("Reader"),
        }
    }
}

/// A file to upload, with an optional filename and content type.
#[derive(Debug)]
pub struct FileData {
    data: PartData,
    filename: Option<String>,
    content_type: Option<String>,
}

impl FileData {
    /// In-memory file contents
    pub fn from_bytes(data: impl Into<Bytes>) -> Self {
        Self {
            data: PartData::Bytes(data.into()),
            filename: None,
            content_type: None,
        }
    }

    /// File contents streamed from a reader, e.g. a `tokio::fs::File`.
    ///
    /// Requests carrying a streamed part are never retried.
    pub fn from_reader<R>(reader: R) -> Self
    where
        R: AsyncRead + Send + Sync + Unpin + 'static,
    {
        Self {
            data: PartData::Reader(Box::new(reader)),
            filename: None,
            content_type: None,
        }
    }

    /// Set the filename sent in the part's Content-Disposition
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Set the part's content type
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Set the content type unless one was already chosen
    pub fn or_content_type(mut self, content_type: &str) -> Self {
        if self.content_type.is_none() {
            self.content_type = Some(content_type.to_string());
        }
        self
    }

    /// Set the filename unless one was already chosen
    pub fn or_filename(mut self, filename: impl Into<String>) -> Self {
        if self.filename.is_none() {
            self.filename = Some(filename.into());
        }
        self
    }

    /// The filename, if one was set
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// The content type, if one was set
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Whether the data can be sent more than once
    pub fn is_replayable(&self) -> bool {
        matches!(self.data, PartData::Bytes(_))
    }

    /// Copy the file if its data is buffered
    pub fn try_clone(&self) -> Option<Self> {
        Some(Self {
            data: self.data.try_clone()?,
            filename: self.filename.clone(),
            content_type: self.content_type.clone(),
        })
    }
}

/// One part of a [`MultipartForm`].
#[derive(Debug)]
pub enum FormPart {
    /// Plain text field
    Text {
        /// Field name
        name: String,
        /// Field value
        value: String,
    },
    /// File field
    File {
        /// Field name
        name: String,
        /// Filename in the Content-Disposition header
        filename: String,
        /// Part content type
        content_type: String,
        /// Part contents
        data: PartData,
    },
}

impl FormPart {
    /// Field name of this part
    pub fn name(&self) -> &str {
        match self {
            FormPart::Text { name, .. } | FormPart::File { name, .. } => name,
        }
    }

    fn try_clone(&self) -> Option<Self> {
        match self {
            FormPart::Text { name, value } => Some(FormPart::Text {
                name: name.clone(),
                value: value.clone(),
            }),
            FormPart::File {
                name,
                filename,
                content_type,
                data,
            } => Some(FormPart::File {
                name: name.clone(),
                filename: filename.clone(),
                content_type: content_type.clone(),
                data: data.try_clone()?,
            }),
        }
    }
}

/// Ordered multipart/form-data body. Field names may repeat.
#[derive(Debug, Default)]
pub struct MultipartForm {
    parts: Vec<FormPart>,
}

impl MultipartForm {
    /// Creates an empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a text field to the form
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(FormPart::Text {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Adds a file field. `default_filename` is used when the file has none;
    /// the content type falls back to `application/octet-stream`.
    pub fn file(mut self, name: impl Into<String>, file: FileData, default_filename: &str) -> Self {
        let FileData {
            data,
            filename,
            content_type,
        } = file;
        self.parts.push(FormPart::File {
            name: name.into(),
            filename: filename.unwrap_or_else(|| default_filename.to_string()),
            content_type: content_type.unwrap_or_else(|| OCTET_STREAM.to_string()),
            data,
        });
        self
    }

    /// The parts in insertion order
    pub fn parts(&self) -> &[FormPart] {
        &self.parts
    }

    /// Field names in insertion order
    pub fn field_names(&self) -> Vec<&str> {
        self.parts.iter().map(FormPart::name).collect()
    }

    /// Returns true if no parts were added
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Whether every part can be sent more than once
    pub fn is_replayable(&self) -> bool {
        self.parts.iter().all(|part| match part {
            FormPart::Text { .. } => true,
            FormPart::File { data, .. } => matches!(data, PartData::Bytes(_)),
        })
    }

    /// Copy the form if none of its parts are streamed
    pub fn try_clone(&self) -> Option<Self> {
        let parts = self
            .parts
            .iter()
            .map(FormPart::try_clone)
            .collect::<Option<Vec<_>>>()?;
        Some(Self { parts })
    }

    /// Convert into a reqwest form, consuming any streamed parts
    pub fn into_reqwest_form(self) -> WatsonResult<Form> {
        let mut form = Form::new();
        for part in self.parts {
            form = match part {
                FormPart::Text { name, value } => form.text(name, value),
                FormPart::File {
                    name,
                    filename,
                    content_type,
                    data,
                } => {
                    let part = match data {
                        PartData::Bytes(bytes) => Part::bytes(bytes.to_vec()),
                        PartData::Reader(reader) => {
                            Part::stream(reqwest::Body::wrap_stream(ReaderStream::new(reader)))
                        }
                    };
                    let part = part.file_name(filename).mime_str(&content_type).map_err(|e| {
                        WatsonError::Validation {
                            message: format!("Invalid content type '{}' for part '{}': {}", content_type, name, e),
                            details: vec![],
                        }
                    })?;
                    form.part(name, part)
                }
            };
        }
        Ok(form)
    }
}
