//! Line-oriented JSONL reading with line number tracking.

use std::path::Path;

use serde::de::DeserializeOwned;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

use crate::error::Result;
use crate::warning::Warning;

/// Async reader for JSONL data.
///
/// Wraps any [`AsyncRead`] in a [`BufReader`] and counts lines so that
/// skipped records can be reported with their position in the source.
///
/// # Examples
///
/// ```
/// use storyline_jsonl::JsonlReader;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> storyline_jsonl::Result<()> {
/// #[derive(serde::Deserialize)]
/// struct Row { id: u32 }
///
/// let data: &[u8] = b"{\"id\":1}\nnot json\n{\"id\":2}\n";
/// let (rows, warnings) = JsonlReader::new(data).read_resilient::<Row>().await?;
/// assert_eq!(rows.len(), 2);
/// assert_eq!(warnings[0].line_number(), 2);
/// # Ok(())
/// # }
/// ```
pub struct JsonlReader<R> {
    reader: BufReader<R>,
    /// 1-based number of the last line read, 0 before the first read.
    line_number: usize,
    buf: Vec<u8>,
}

impl<R: AsyncRead + Unpin> JsonlReader<R> {
    /// Creates a new `JsonlReader` wrapping the given async reader.
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            line_number: 0,
            buf: Vec::new(),
        }
    }

    /// Returns the number of the last line read.
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Reads the next non-blank line.
    ///
    /// Returns the line's number together with its trimmed raw bytes, or
    /// `None` at end of input. Lines are not required to be valid UTF-8;
    /// that is left to the JSON parser so a bad line costs only itself.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying reader fails.
    pub async fn next_line(&mut self) -> Result<Option<(usize, &[u8])>> {
        loop {
            self.buf.clear();
            let read = self.reader.read_until(b'\n', &mut self.buf).await?;
            if read == 0 {
                return Ok(None);
            }
            self.line_number += 1;
            if !self.buf.trim_ascii().is_empty() {
                break;
            }
        }
        Ok(Some((self.line_number, self.buf.trim_ascii())))
    }

    /// Reads every record, skipping lines that fail to deserialize.
    ///
    /// Blank lines are ignored silently. Every other line that cannot be
    /// parsed as `T` produces a [`Warning`] and reading continues.
    ///
    /// # Errors
    ///
    /// Only I/O failures abort the read.
    pub async fn read_resilient<T: DeserializeOwned>(mut self) -> Result<(Vec<T>, Vec<Warning>)> {
        let mut records = Vec::new();
        let mut warnings = Vec::new();

        while let Some((line_number, line)) = self.next_line().await? {
            match serde_json::from_slice::<T>(line) {
                Ok(record) => records.push(record),
                Err(e) => {
                    let warning = Warning::from_serde(line_number, &e);
                    tracing::warn!(line = line_number, kind = warning.kind(), error = %e, "Skipping JSONL line");
                    warnings.push(warning);
                }
            }
        }

        tracing::debug!(
            records = records.len(),
            skipped = warnings.len(),
            lines = self.line_number,
            "Finished reading JSONL"
        );
        Ok((records, warnings))
    }
}

/// Reads a JSONL file, collecting warnings for every line that is skipped.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub async fn read_jsonl_resilient<T, P>(path: P) -> Result<(Vec<T>, Vec<Warning>)>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let file = File::open(path.as_ref()).await?;
    JsonlReader::new(file).read_resilient().await
}
