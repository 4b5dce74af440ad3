//! Dependency tree rendering for `storyline tree` output.

use std::io::{self, Write};

use colored::Colorize;

use super::OutputConfig;
use super::color::{colored_status_icon, colorize_id, colorize_priority, dimmed, error};
use crate::analysis::TreeNode;

/// Render a dependency tree with ASCII/Unicode connectors.
///
/// Renders a tree like:
/// ```text
/// ◆ S-7 [high] Checkout flow  (level 2)
/// ├── ○ S-4 Payment API  (level 1)
/// │   └── ✓ S-1 Data model  (level 0)
/// └── ✓ S-1 Data model  (level 0)
/// ```
pub fn print_tree_text<W: Write>(
    w: &mut W,
    root: &TreeNode,
    config: &OutputConfig,
) -> io::Result<()> {
    let root_icon = if config.use_ascii { "*" } else { "◆" };
    let root_icon_str = if config.use_colors {
        root_icon.cyan().bold().to_string()
    } else {
        root_icon.to_string()
    };

    let title_str = if root.title.is_empty() {
        String::new()
    } else {
        format!(" {}", root.title)
    };

    writeln!(
        w,
        "{} {} {}{}{}",
        root_icon_str,
        colorize_id(root.id.as_str(), config),
        colorize_priority(root.priority, config),
        title_str,
        node_suffix(root, config)
    )?;

    print_children(w, &root.children, &[], config)
}

/// Recursively render tree children with proper connector lines.
///
/// `prefix_segments` tracks which ancestor levels still have siblings below,
/// used to draw the vertical continuation lines (`│`).
fn print_children<W: Write>(
    w: &mut W,
    children: &[TreeNode],
    prefix_segments: &[bool],
    config: &OutputConfig,
) -> io::Result<()> {
    let (branch, corner, pipe, space) = if config.use_ascii {
        ("|-- ", "`-- ", "|   ", "    ")
    } else {
        ("├── ", "└── ", "│   ", "    ")
    };

    for (i, child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;

        let mut prefix = String::new();
        for &has_more in prefix_segments {
            prefix.push_str(&dimmed(if has_more { pipe } else { space }, config));
        }
        let connector = dimmed(if is_last { corner } else { branch }, config);

        let title_str = if child.title.is_empty() {
            String::new()
        } else {
            format!(" {}", child.title)
        };

        writeln!(
            w,
            "{}{}{} {}{}{}",
            prefix,
            connector,
            colored_status_icon(child.status, config),
            colorize_id(child.id.as_str(), config),
            title_str,
            node_suffix(child, config)
        )?;

        if !child.children.is_empty() {
            let mut next_segments = prefix_segments.to_vec();
            next_segments.push(!is_last);
            print_children(w, &child.children, &next_segments, config)?;
        }
    }

    Ok(())
}

/// Level annotation plus cycle / truncation markers.
fn node_suffix(node: &TreeNode, config: &OutputConfig) -> String {
    let mut suffix = format!("  {}", dimmed(&format!("(level {})", node.level), config));
    if node.cycle {
        suffix.push(' ');
        suffix.push_str(&error("(cycle)", config));
    }
    if node.seen {
        suffix.push(' ');
        suffix.push_str(&dimmed("(see above)", config));
    }
    if node.truncated {
        suffix.push(' ');
        suffix.push_str(&dimmed("[+]", config));
    }
    suffix
}
