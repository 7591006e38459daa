//! Structured error types shared across the SM crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`SmError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code, e.g. `invalid-charge`.
    pub code: String,
    /// Message shown to users.
    pub message: String,
    /// Contextual key value pairs (charges, indices, particle names).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Suggested fix, when one is known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Payload with a stable `code` and a message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Attaches a `key=value` detail.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets the suggested fix.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

/// Canonical error type for the particle toolkit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum SmError {
    /// Electric charge outside the allowed discrete set.
    #[error("charge error: {0}")]
    Charge(ErrorInfo),
    /// Index into a fixed-size attribute out of bounds.
    #[error("range error: {0}")]
    Range(ErrorInfo),
    /// Decay products violate charge conservation.
    #[error("conservation error: {0}")]
    Conservation(ErrorInfo),
    /// Decay requested on a particle that cannot (or can no longer) decay.
    #[error("decay error: {0}")]
    Decay(ErrorInfo),
    /// Kind-specific operation applied to the wrong particle kind.
    #[error("kind error: {0}")]
    Kind(ErrorInfo),
    /// Invalid tolerance or run configuration.
    #[error("config error: {0}")]
    Config(ErrorInfo),
}

impl SmError {
    /// Payload shared by every family.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            SmError::Charge(info)
            | SmError::Range(info)
            | SmError::Conservation(info)
            | SmError::Decay(info)
            | SmError::Kind(info)
            | SmError::Config(info) => info,
        }
    }

    /// Shorthand for the stable error code.
    pub fn code(&self) -> &str {
        &self.info().code
    }
}
