//! Resilient JSONL (JSON Lines) record loading.
//!
//! Story exports are read one JSON object per line. A bad line never aborts
//! the load: it is skipped and reported as a [`Warning`] carrying its 1-based
//! line number, so callers can surface data problems without losing the rest
//! of the file.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod reader;
pub mod warning;

pub use error::{Error, Result};
pub use reader::{JsonlReader, read_jsonl_resilient};
pub use warning::Warning;
