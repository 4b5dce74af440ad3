//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

/// Sample backlog used by the CLI tests.
///
/// `A` is done, `B` and `C` hang off it, `D` waits on both, and `X`/`Y`
/// depend on each other.
pub const SAMPLE_STORIES: &str = r#"{"id":"A","title":"Login form","status":"done","storyPoints":3,"priority":"high"}
{"id":"B","title":"Session cookie","status":"todo","dependencies":["A"],"storyPoints":2,"priority":"high"}
{"id":"C","title":"Password reset","status":"in-progress","dependencies":["A"],"storyPoints":5}
{"id":"D","title":"Account page","status":"backlog","dependencies":["B","C"],"storyPoints":8,"priority":"low"}
{"id":"X","title":"Export","dependencies":["Y"]}
{"id":"Y","title":"Import","dependencies":["X"]}
"#;

/// Write `content` as the story file inside `dir`.
pub fn write_stories(dir: &Path, content: &str) {
    std::fs::write(dir.join("stories.jsonl"), content).expect("Failed to write stories");
}

/// Run the storyline binary in the specified directory
pub fn run_storyline_in_dir(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_storyline"))
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute storyline")
}

/// Run storyline with `--json` and parse stdout
pub fn run_json(dir: &Path, args: &[&str]) -> serde_json::Value {
    let mut full = vec!["--json"];
    full.extend_from_slice(args);
    let output = run_storyline_in_dir(dir, &full);
    assert!(
        output.status.success(),
        "storyline {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("Output is not valid JSON")
}
