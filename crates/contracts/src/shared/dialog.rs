use serde::{Deserialize, Serialize};

/// Severity of a blocking result dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Success => "Operación correcta",
            Self::Error => "Error",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Modal message shown after a write operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dialog {
    pub severity: Severity,
    pub message: String,
}

impl Dialog {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    pub fn title(&self) -> &'static str {
        self.severity.title()
    }

    pub fn is_success(&self) -> bool {
        self.severity == Severity::Success
    }
}
