//! CLI argument validation, checked before an engine is constructed.
//!
//! A `Validate`/`ValidationError` pair for library callers that want to
//! reject a zero-width or zero-window run before any allocation
//! happens, rather than silently falling back to an empty run the way
//! the CLI binaries do for unparseable arguments — a parsed zero is
//! worth surfacing distinctly in the library API.

use serde::{Deserialize, Serialize};
use std::fmt;

pub type ValidationResult = Result<(), Vec<ValidationError>>;

pub trait Validate {
    fn validate(&self) -> ValidationResult;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: Option<String>,
    pub message: String,
    pub code: Option<String>,
}

impl ValidationError {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            field: None,
            message: message.into(),
            code: None,
        }
    }

    pub fn field<S: Into<String>, M: Into<String>>(field: S, message: M) -> Self {
        Self {
            field: Some(field.into()),
            message: message.into(),
            code: None,
        }
    }

    pub fn with_code<S: Into<String>>(mut self, code: S) -> Self {
        self.code = Some(code.into());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref field) = self.field {
            write!(f, "[{}] {}", field, self.message)?;
        } else {
            write!(f, "{}", self.message)?;
        }
        if let Some(ref code) = self.code {
            write!(f, " (code: {})", code)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// The two positional arguments every `rss-*` binary validates before
/// constructing an engine.
pub struct EngineArgs {
    pub dimensionality: usize,
    pub window: f64,
}

impl Validate for EngineArgs {
    fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();
        if self.dimensionality == 0 {
            errors.push(ValidationError::field(
                "dimensionality",
                "must be at least 1",
            ));
        }
        if self.window <= 0.0 {
            errors.push(ValidationError::field("window", "must be positive"));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
