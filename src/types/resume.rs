//! Resume upload input and the skills it yields.

use crate::{Error, ErrorContext, Result};
use bytes::Bytes;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::path::Path;
use tracing::warn;

/// Multipart field name the backend reads the resume from.
pub const FILE_FIELD: &str = "file";

const PDF_MIME: &str = "application/pdf";
const OCTET_STREAM_MIME: &str = "application/octet-stream";

/// A single selected resume file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    pub file_name: String,
    pub mime_type: String,
    pub content: Bytes,
}

impl ResumeFile {
    /// Build from in-memory bytes; the MIME type is inferred from the file name.
    pub fn new(file_name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        let file_name = file_name.into();
        let mime_type = guess_mime_type(&file_name).to_string();
        Self {
            file_name,
            mime_type,
            content: content.into(),
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }

    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("resume.pdf")
            .to_string();
        Ok(Self::new(file_name, content))
    }

    /// The backend accepts a resume by file name alone, so only the extension counts.
    pub fn is_pdf(&self) -> bool {
        self.file_name.to_lowercase().ends_with(".pdf")
    }

    /// Multipart form with exactly one field, [`FILE_FIELD`].
    pub fn into_form(self) -> Result<reqwest::multipart::Form> {
        if self.content.is_empty() {
            return Err(Error::validation_with_context(
                format!("resume '{}' is empty", self.file_name),
                ErrorContext::new()
                    .with_field_path(FILE_FIELD)
                    .with_source("upload"),
            ));
        }
        let part = reqwest::multipart::Part::bytes(self.content.to_vec())
            .file_name(self.file_name)
            .mime_str(&self.mime_type)
            .map_err(|e| {
                Error::validation_with_context(
                    format!("invalid mime type '{}': {}", self.mime_type, e),
                    ErrorContext::new().with_field_path("mime_type"),
                )
            })?;
        Ok(reqwest::multipart::Form::new().part(FILE_FIELD, part))
    }
}

fn guess_mime_type(file_name: &str) -> &'static str {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();
    match ext.as_str() {
        "pdf" => PDF_MIME,
        _ => OCTET_STREAM_MIME,
    }
}

/// Response of the upload endpoint. A missing `skills` field means no skills.
///
/// Entries that are not strings are skipped; the rest keep their order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillsResponse {
    #[serde(
        default,
        deserialize_with = "string_entries",
        skip_serializing_if = "Option::is_none"
    )]
    pub skills: Option<Vec<String>>,
}

fn string_entries<'de, D>(deserializer: D) -> std::result::Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items,
        None | Some(Value::Null) => return Ok(None),
        Some(other) => {
            warn!(value = %other, "skills is not a list, ignoring it");
            return Ok(None);
        }
    };

    let total = items.len();
    let skills: Vec<String> = items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(s),
            _ => None,
        })
        .collect();
    if skills.len() < total {
        warn!(dropped = total - skills.len(), "skipping non-string skills");
    }
    Ok(Some(skills))
}

impl SkillsResponse {
    pub fn skills(&self) -> &[String] {
        self.skills.as_deref().unwrap_or(&[])
    }

    pub fn into_skills(self) -> Vec<String> {
        self.skills.unwrap_or_default()
    }
}
