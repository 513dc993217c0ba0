//! File-level checks run before any row is parsed.

use crate::domain::model::EXPECTED_HEADER;
use crate::utils::error::{EtlError, Result};

pub const ACCEPTED_CONTENT_TYPES: [&str; 2] = ["text/csv", "application/vnd.ms-excel"];

/// An uploaded file as handed over by the calling shell.
#[derive(Debug, Clone, Default)]
pub struct UploadSource {
    pub bytes: Vec<u8>,
    pub filename: Option<String>,
    pub content_type: Option<String>,
}

impl UploadSource {
    pub fn new(bytes: impl Into<Vec<u8>>, filename: Option<&str>, content_type: Option<&str>) -> Self {
        Self {
            bytes: bytes.into(),
            filename: filename.map(str::to_string),
            content_type: content_type.map(str::to_string),
        }
    }
}

/// A source that passed every file-level check.
#[derive(Debug, Clone)]
pub struct ValidatedFile {
    text: String,
    body_offset: usize,
}

impl ValidatedFile {
    /// Everything after the header line.
    pub fn body(&self) -> &str {
        &self.text[self.body_offset..]
    }
}

/// Splits text into physical lines; `\r\n`, `\r` and `\n` all end a line.
/// A trailing terminator does not produce an extra empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let (line, next) = next_line(rest);
        lines.push(line);
        rest = next;
    }
    lines
}

fn next_line(text: &str) -> (&str, &str) {
    match text.find(['\r', '\n']) {
        Some(pos) => {
            let skip = if text[pos..].starts_with("\r\n") { 2 } else { 1 };
            (&text[..pos], &text[pos + skip..])
        }
        None => (text, ""),
    }
}

/// Keeps printable ASCII, then drops whitespace and quotes and lowercases.
pub fn normalize_header(line: &str) -> String {
    line.chars()
        .filter(|c| matches!(*c, ' '..='~'))
        .filter(|c| !c.is_whitespace() && *c != '"')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

pub fn validate(source: &UploadSource) -> Result<ValidatedFile> {
    if source.bytes.is_empty() {
        tracing::warn!("Rejected upload: file is empty");
        return Err(EtlError::invalid_format("The uploaded file is empty."));
    }

    let has_csv_extension = source
        .filename
        .as_deref()
        .map(|name| name.to_lowercase().ends_with(".csv"))
        .unwrap_or(false);
    if !has_csv_extension {
        tracing::warn!("Rejected upload: bad filename {:?}", source.filename);
        return Err(EtlError::invalid_format("The file must have the .csv extension."));
    }

    let has_csv_type = source
        .content_type
        .as_deref()
        .map(|ct| ACCEPTED_CONTENT_TYPES.contains(&ct))
        .unwrap_or(false);
    if !has_csv_type {
        tracing::warn!("Rejected upload: bad content type {:?}", source.content_type);
        return Err(EtlError::invalid_format("The file must be of type CSV (text/csv)."));
    }

    let text = String::from_utf8_lossy(&source.bytes).into_owned();
    let (header, body) = next_line(&text);
    let body_offset = text.len() - body.len();

    if normalize_header(header) != normalize_header(EXPECTED_HEADER) {
        tracing::warn!("Rejected upload: header '{}' does not match '{}'", header, EXPECTED_HEADER);
        return Err(EtlError::invalid_format(format!(
            "Invalid CSV format. The expected header is '{}'.",
            EXPECTED_HEADER
        )));
    }

    Ok(ValidatedFile { text, body_offset })
}
