//! CLI input validation functions.
//!
//! These validators are used by clap's `value_parser` attribute to validate
//! user input at parse time, providing immediate feedback for invalid values.

/// Validate a story ID given on the command line.
///
/// Story IDs are free-form but must be non-empty and contain no whitespace.
pub fn validate_story_id(s: &str) -> Result<String, String> {
    let s = s.trim();

    if s.is_empty() {
        return Err("Story ID cannot be empty".to_string());
    }

    if s.chars().any(char::is_whitespace) {
        return Err(format!("Story ID cannot contain whitespace: '{s}'"));
    }

    Ok(s.to_string())
}

/// Validate a tree depth limit (at least 1).
pub fn validate_depth(s: &str) -> Result<usize, String> {
    let depth: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("Depth must be a positive integer, got '{s}'"))?;
    if depth == 0 {
        return Err("Depth must be at least 1".to_string());
    }
    Ok(depth)
}
