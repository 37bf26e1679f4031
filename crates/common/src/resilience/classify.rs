//! Failure classification by message inspection

use std::fmt;

/// Substrings that mark a failure as transient.
///
/// Matching is case-sensitive: `"Connection refused"` is terminal while
/// `"connection refused"` is transient.
pub const TRANSIENT_MARKERS: [&str; 3] = ["network", "timeout", "connection"];

/// Outcome of classifying a failed attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureClass {
    /// Likely to succeed if attempted again
    Transient,
    /// Retrying will not help; propagate immediately
    Terminal,
}

impl FailureClass {
    /// Whether the failure is eligible for another attempt
    pub fn is_transient(self) -> bool {
        matches!(self, Self::Transient)
    }

    /// Stable label for logging
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Transient => "transient",
            Self::Terminal => "terminal",
        }
    }
}

impl fmt::Display for FailureClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a raw error message.
pub fn classify_message(message: &str) -> FailureClass {
    if TRANSIENT_MARKERS.iter().any(|marker| message.contains(marker)) {
        FailureClass::Transient
    } else {
        FailureClass::Terminal
    }
}

/// Classify an error by its `Display` output.
pub fn classify<E>(error: &E) -> FailureClass
where
    E: fmt::Display + ?Sized,
{
    classify_message(&error.to_string())
}
