//! Command execution logic.

use anyhow::Result;
use std::collections::HashSet;

use super::args::TreeArgs;
use crate::analysis::{TreeDirection, TreeOptions, blockers_of, dependency_tree};
use crate::app::App;
use crate::domain::{StoryFilter, StoryId};
use crate::error::Error;
use crate::output::{self, OutputMode};

/// Execute the analyze command
pub fn execute_analyze(app: &App, filter: &StoryFilter, output_mode: OutputMode) -> Result<()> {
    let analysis = app.analyze(filter);
    output::print_summary(&analysis, app.source(), output_mode)?;
    Ok(())
}

/// Execute the levels command
pub fn execute_levels(app: &App, filter: &StoryFilter, output_mode: OutputMode) -> Result<()> {
    let analysis = app.analyze(filter);
    output::print_levels(&analysis.graph, output_mode)?;
    Ok(())
}

/// Execute the critical-path command
pub fn execute_critical_path(
    app: &App,
    filter: &StoryFilter,
    output_mode: OutputMode,
) -> Result<()> {
    let analysis = app.analyze(filter);
    output::print_critical_path(&analysis.critical_path, output_mode)?;
    Ok(())
}

/// Execute the blocked command
pub fn execute_blocked(app: &App, filter: &StoryFilter, output_mode: OutputMode) -> Result<()> {
    let analysis = app.analyze(filter);
    let blocked: Vec<_> = analysis
        .blocked
        .into_iter()
        .map(|story| {
            let blockers = blockers_of(&story, app.stories());
            (story, blockers)
        })
        .collect();
    output::print_blocked(&blocked, output_mode)?;
    Ok(())
}

/// Execute the ready command
pub fn execute_ready(app: &App, filter: &StoryFilter, output_mode: OutputMode) -> Result<()> {
    let analysis = app.analyze(filter);
    output::print_ready(&analysis.ready, output_mode)?;
    Ok(())
}

/// Execute the cycles command
pub fn execute_cycles(app: &App, filter: &StoryFilter, output_mode: OutputMode) -> Result<()> {
    let analysis = app.analyze(filter);
    output::print_cycles(&analysis.cycles, output_mode)?;
    Ok(())
}

/// Execute the tree command
pub fn execute_tree(
    app: &App,
    args: &TreeArgs,
    filter: &StoryFilter,
    output_mode: OutputMode,
) -> Result<()> {
    let analysis = app.analyze(filter);
    let options = TreeOptions {
        direction: if args.dependents {
            TreeDirection::Dependents
        } else {
            TreeDirection::Dependencies
        },
        max_depth: args.depth.or(app.config().max_tree_depth),
        collapsed: args
            .collapse
            .iter()
            .map(|id| StoryId::new(id.as_str()))
            .collect::<HashSet<_>>(),
    };

    let root = args.root();
    let tree = dependency_tree(&analysis.graph, &root, &options)
        .ok_or(Error::StoryNotFound(root))?;
    output::print_tree(&tree, output_mode)?;
    Ok(())
}
