//! Output formatting for CLI commands.
//!
//! Every command prints either human-readable text or JSON for programmatic
//! use. Text printers take any [`Write`] so they can be tested against a
//! buffer; the public `print_*` functions write to stdout.
//!
//! Submodules:
//! - [`color`]: Color and styling helpers (semantic colors, icons)
//! - `json`: JSON shapes for programmatic output
//! - [`tree`]: Dependency tree rendering with ASCII/Unicode connectors

pub mod color;
mod json;
pub mod tree;

use crate::analysis::{Analysis, CriticalPath, Cycle, DependencyGraph, TreeNode};
use crate::domain::Story;
use crate::source::LoadWarning;
use serde::Serialize;
use std::env;
use std::io::{self, Write};

pub use color::{error, success, warning};
pub use tree::print_tree_text;

use color::{
    bold, colored_status_icon, colorize_id, colorize_priority, colorize_status, dimmed,
};

// ============================================================================
// Output Configuration
// ============================================================================

/// Configuration for output formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Whether to use ASCII-only icons instead of Unicode.
    pub use_ascii: bool,
    /// Whether to use colors in output.
    pub use_colors: bool,
}

impl OutputConfig {
    /// Create a new `OutputConfig` with explicit values.
    pub fn new(use_ascii: bool, use_colors: bool) -> Self {
        Self {
            use_ascii,
            use_colors,
        }
    }

    /// Create an `OutputConfig` by reading from environment variables.
    ///
    /// Reads:
    /// - `STORYLINE_ASCII`: Set to "1" or "true" for ASCII-only icons (default: false)
    /// - `NO_COLOR`: Standard env var to disable colors (any value disables colors)
    /// - `STORYLINE_COLOR`: Set to "0" or "false" to disable colors (default: true)
    pub fn from_env() -> Self {
        let use_ascii = match env::var("STORYLINE_ASCII") {
            Ok(v) if v == "1" || v.eq_ignore_ascii_case("true") => true,
            Ok(v) if v == "0" || v.eq_ignore_ascii_case("false") || v.is_empty() => false,
            Ok(v) => {
                tracing::warn!(
                    env_var = "STORYLINE_ASCII",
                    value = %v,
                    "Invalid value (expected '1', 'true', '0', or 'false'), using default"
                );
                false
            }
            Err(_) => false,
        };

        // Respect NO_COLOR (https://no-color.org/), STORYLINE_COLOR for explicit control
        let use_colors = env::var("NO_COLOR").is_err()
            && env::var("STORYLINE_COLOR")
                .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
                .unwrap_or(true);

        Self {
            use_ascii,
            use_colors,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_ascii: false,
            use_colors: true,
        }
    }
}

/// Output format mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text format
    Text,
    /// JSON format for programmatic use
    Json,
}

// ============================================================================
// Public Dispatch Functions
// ============================================================================

fn emit<F>(mode: OutputMode, json: impl FnOnce() -> serde_json::Value, text: F) -> io::Result<()>
where
    F: FnOnce(&mut io::StdoutLock<'static>, &OutputConfig) -> io::Result<()>,
{
    match mode {
        OutputMode::Text => {
            let mut handle = io::stdout().lock();
            text(&mut handle, &OutputConfig::from_env())
        }
        OutputMode::Json => print_json(&json()),
    }
}

/// Print the full analysis summary.
pub fn print_summary(analysis: &Analysis, source: &str, mode: OutputMode) -> io::Result<()> {
    emit(
        mode,
        || json::summary_json(analysis, source),
        |w, config| print_summary_text(w, analysis, source, config),
    )
}

/// Print every story of the view with its level.
pub fn print_levels(graph: &DependencyGraph, mode: OutputMode) -> io::Result<()> {
    emit(
        mode,
        || json::levels_json(graph),
        |w, config| print_levels_text(w, graph, config),
    )
}

/// Print the critical path.
pub fn print_critical_path(path: &CriticalPath, mode: OutputMode) -> io::Result<()> {
    emit(
        mode,
        || json::critical_path_json(path),
        |w, config| print_critical_path_text(w, path, config),
    )
}

/// Print blocked stories with their blockers.
pub fn print_blocked(blocked: &[(Story, Vec<&Story>)], mode: OutputMode) -> io::Result<()> {
    emit(
        mode,
        || json::blocked_json(blocked),
        |w, config| print_blocked_text(w, blocked, config),
    )
}

/// Print stories ready to be picked up.
pub fn print_ready(stories: &[Story], mode: OutputMode) -> io::Result<()> {
    emit(
        mode,
        || json::stories_json(stories),
        |w, config| print_ready_text(w, stories, config),
    )
}

/// Print dependency cycles.
pub fn print_cycles(cycles: &[Cycle], mode: OutputMode) -> io::Result<()> {
    emit(
        mode,
        || json::cycles_json(cycles),
        |w, config| print_cycles_text(w, cycles, config),
    )
}

/// Print a dependency tree.
pub fn print_tree(root: &TreeNode, mode: OutputMode) -> io::Result<()> {
    emit(
        mode,
        || serde_json::to_value(root).unwrap_or_default(),
        |w, config| print_tree_text(w, root, config),
    )
}

/// Report load warnings on stderr.
pub fn print_load_warnings(warnings: &[LoadWarning]) -> io::Result<()> {
    if warnings.is_empty() {
        return Ok(());
    }
    let mut handle = io::stderr().lock();
    print_load_warnings_text(&mut handle, warnings, &OutputConfig::from_env())
}

/// Print a JSON-formatted result for any serializable value
pub fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
    let mut handle = io::stdout().lock();
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(handle, "{json}")
}

// ============================================================================
// Text Formatting
// ============================================================================

fn story_line(story: &Story, config: &OutputConfig) -> String {
    let mut line = format!(
        "{} {} {}",
        colored_status_icon(story.status, config),
        colorize_id(story.id.as_str(), config),
        colorize_priority(story.priority, config)
    );
    if !story.title.is_empty() {
        line.push(' ');
        line.push_str(&story.title);
    }
    if let Some(points) = story.story_points {
        line.push(' ');
        line.push_str(&dimmed(&format!("({points} pts)"), config));
    }
    line
}

fn print_summary_text<W: Write>(
    w: &mut W,
    analysis: &Analysis,
    source: &str,
    config: &OutputConfig,
) -> io::Result<()> {
    writeln!(w, "{}", bold("Story Dependency Analysis", config))?;
    writeln!(w, "{} {}", dimmed("Source:", config), source)?;
    writeln!(
        w,
        "{} {} in view ({} total)",
        dimmed("Stories:", config),
        analysis.graph.len(),
        analysis.total_stories
    )?;

    let Some(max_level) = analysis.max_level() else {
        writeln!(w)?;
        writeln!(w, "No stories in view.")?;
        return Ok(());
    };
    writeln!(w, "{} {}", dimmed("Max level:", config), max_level)?;

    writeln!(w)?;
    writeln!(w, "{}", bold("Levels", config))?;
    for (level, count) in analysis.level_histogram() {
        writeln!(w, "  {level:>3}: {count}")?;
    }

    writeln!(w)?;
    let path = &analysis.critical_path;
    writeln!(
        w,
        "{} {} stories, {} points, {} remaining",
        bold("Critical path:", config),
        path.len(),
        path.total_points,
        path.remaining
    )?;
    let arrow = if config.use_ascii { " -> " } else { " → " };
    let chain: Vec<String> = path
        .stories
        .iter()
        .map(|s| colorize_id(s.id.as_str(), config))
        .collect();
    writeln!(w, "  {}", chain.join(&dimmed(arrow, config)))?;

    writeln!(w)?;
    writeln!(
        w,
        "{} {}    {} {}",
        bold("Blocked:", config),
        analysis.blocked.len(),
        bold("Ready:", config),
        analysis.ready.len()
    )?;

    let cycles = if analysis.cycles.is_empty() {
        success("none", config)
    } else {
        error(&analysis.cycles.len().to_string(), config)
    };
    writeln!(w, "{} {}", bold("Cycles:", config), cycles)
}

fn print_levels_text<W: Write>(
    w: &mut W,
    graph: &DependencyGraph,
    config: &OutputConfig,
) -> io::Result<()> {
    if graph.is_empty() {
        return writeln!(w, "No stories in view.");
    }

    let mut nodes: Vec<_> = graph.nodes().iter().collect();
    nodes.sort_by(|a, b| a.level.cmp(&b.level).then_with(|| a.id().cmp(b.id())));

    for node in nodes {
        let mut line = format!(
            "{} {}",
            dimmed(&format!("L{:<3}", node.level), config),
            story_line(&node.story, config)
        );
        if node.has_circular {
            line.push(' ');
            line.push_str(&error("(cycle)", config));
        }
        writeln!(w, "{line}")?;
    }
    Ok(())
}

fn print_critical_path_text<W: Write>(
    w: &mut W,
    path: &CriticalPath,
    config: &OutputConfig,
) -> io::Result<()> {
    if path.is_empty() {
        return writeln!(w, "No stories in view.");
    }

    writeln!(
        w,
        "Critical path: {} stories, {} points, {} remaining",
        path.len(),
        path.total_points,
        path.remaining
    )?;
    writeln!(w)?;
    for (i, story) in path.stories.iter().enumerate() {
        writeln!(w, "{:>3}. {}", i + 1, story_line(story, config))?;
    }
    Ok(())
}

fn print_blocked_text<W: Write>(
    w: &mut W,
    blocked: &[(Story, Vec<&Story>)],
    config: &OutputConfig,
) -> io::Result<()> {
    if blocked.is_empty() {
        return writeln!(w, "{}", success("No blocked stories.", config));
    }

    writeln!(w, "Found {} blocked story(ies):", blocked.len())?;
    writeln!(w)?;
    for (story, blockers) in blocked {
        writeln!(w, "{}", story_line(story, config))?;
        for blocker in blockers {
            writeln!(
                w,
                "    {} {} {}",
                dimmed("waiting on", config),
                colorize_id(blocker.id.as_str(), config),
                format!("({})", colorize_status(blocker.status, config))
            )?;
        }
    }
    Ok(())
}

fn print_ready_text<W: Write>(
    w: &mut W,
    stories: &[Story],
    config: &OutputConfig,
) -> io::Result<()> {
    if stories.is_empty() {
        return writeln!(w, "No ready stories.");
    }

    writeln!(w, "Found {} ready story(ies):", stories.len())?;
    writeln!(w)?;
    for story in stories {
        writeln!(w, "{}", story_line(story, config))?;
    }
    Ok(())
}

fn print_cycles_text<W: Write>(
    w: &mut W,
    cycles: &[Cycle],
    config: &OutputConfig,
) -> io::Result<()> {
    if cycles.is_empty() {
        return writeln!(w, "{}", success("No circular dependencies detected.", config));
    }

    writeln!(
        w,
        "Found {} circular dependenc{}:",
        error(&cycles.len().to_string(), config),
        if cycles.len() == 1 { "y" } else { "ies" }
    )?;
    writeln!(w)?;

    let arrow = if config.use_ascii { " -> " } else { " → " };
    for (i, cycle) in cycles.iter().enumerate() {
        writeln!(w, "  {} {}:", warning("Cycle", config), i + 1)?;
        let mut chain: Vec<&str> = cycle.members.iter().map(|id| id.as_str()).collect();
        if let Some(first) = chain.first().copied() {
            chain.push(first);
        }
        writeln!(w, "    {}", dimmed(&chain.join(arrow), config))?;
    }
    Ok(())
}

fn print_load_warnings_text<W: Write>(
    w: &mut W,
    warnings: &[LoadWarning],
    config: &OutputConfig,
) -> io::Result<()> {
    writeln!(
        w,
        "{} {} record(s) skipped while loading stories:",
        warning("warning:", config),
        warnings.len()
    )?;
    for item in warnings {
        writeln!(w, "  {item}")?;
    }
    Ok(())
}
