//! Transient user-facing acknowledgements.

/// Severity of a [`Notice`], driving how the display layer colors it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Error,
}

/// A fire-and-forget acknowledgement of an operation's outcome.
///
/// Notices are handed to the display layer once and then forgotten: no
/// history is kept, nothing is retried, and delivery beyond the display
/// widget's own behavior is not guaranteed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    severity: Severity,
    message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
