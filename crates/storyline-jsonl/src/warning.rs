//! Non-fatal problems found while reading JSONL data.
//!
//! # Examples
//!
//! ```
//! use storyline_jsonl::Warning;
//!
//! let warning = Warning::MalformedJson {
//!     line_number: 5,
//!     error: "unexpected end of input".to_string(),
//! };
//! assert_eq!(warning.line_number(), 5);
//! assert_eq!(warning.kind(), "malformed_json");
//! ```

/// A line that was skipped during resilient reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// The line is not valid JSON.
    MalformedJson {
        /// The 1-based line number.
        line_number: usize,
        /// The parser's error message.
        error: String,
    },

    /// The line is valid JSON but does not describe a record of the
    /// expected shape (missing field, wrong type, unknown enum value).
    InvalidRecord {
        /// The 1-based line number.
        line_number: usize,
        /// The deserializer's error message.
        error: String,
    },
}

impl Warning {
    /// Returns the 1-based line number the warning refers to.
    #[must_use]
    pub fn line_number(&self) -> usize {
        match self {
            Self::MalformedJson { line_number, .. } | Self::InvalidRecord { line_number, .. } => {
                *line_number
            }
        }
    }

    /// Returns a static string identifying the warning kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedJson { .. } => "malformed_json",
            Self::InvalidRecord { .. } => "invalid_record",
        }
    }

    /// Classifies a per-line deserialization failure.
    pub(crate) fn from_serde(line_number: usize, err: &serde_json::Error) -> Self {
        let error = err.to_string();
        if err.is_data() {
            Self::InvalidRecord { line_number, error }
        } else {
            Self::MalformedJson { line_number, error }
        }
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedJson { line_number, error } => {
                write!(f, "line {line_number}: malformed JSON: {error}")
            }
            Self::InvalidRecord { line_number, error } => {
                write!(f, "line {line_number}: invalid record: {error}")
            }
        }
    }
}

impl std::error::Error for Warning {}
