//! Shared types used across facesheet.
//! Includes the `Severity` of per-image notices, the structured `Diagnostic`
//! record handed to UI layers, and `SourceImage`, the undecoded input unit.
use serde::{Deserialize, Serialize};

/// One raw input image as supplied by the caller: a display name for
/// diagnostics plus the undecoded bytes.
#[derive(Clone)]
pub struct SourceImage {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl SourceImage {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

impl std::fmt::Debug for SourceImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceImage")
            .field("name", &self.name)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

/// Severity of a per-image notice. All three are non-fatal to the batch.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{}", s)
    }
}

/// Structured per-image notice: severity tag, offending image name, message
/// text, and the image dimensions where relevant. Kept structured rather than
/// pre-formatted so UI layers can localize or filter.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub image: String,
    pub message: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl Diagnostic {
    pub fn info(image: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, image, message)
    }

    pub fn warning(image: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, image, message)
    }

    pub fn error(image: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, image, message)
    }

    fn new(severity: Severity, image: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            image: image.into(),
            message: message.into(),
            width: None,
            height: None,
        }
    }

    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] '{}': {}", self.severity, self.image, self.message)
    }
}
