//! Storyline - dependency analysis for user stories.
//!
//! This crate provides both a CLI application and a library that turns a
//! flat list of stories into a dependency graph and reports dependency
//! levels, the critical path, blocked work and circular dependencies.
//!
//! # Example
//!
//! ```
//! use storyline::analysis::{TieBreak, analyze_graph, critical_path};
//! use storyline::domain::Story;
//!
//! let stories = vec![
//!     Story::new("A", Vec::<&str>::new()),
//!     Story::new("B", ["A"]),
//!     Story::new("C", ["B"]),
//! ];
//! let graph = analyze_graph(&stories);
//! let path = critical_path(&graph, TieBreak::Lexicographic);
//! let ids: Vec<_> = path.iter().map(|s| s.id.as_str()).collect();
//! assert_eq!(ids, ["A", "B", "C"]);
//! ```

#![forbid(unsafe_code)]

// Public modules for library usage
pub mod analysis;
pub mod config;
pub mod domain;
pub mod error;
pub mod source;

// Application context and CLI (needed by binary)
pub mod app;
pub mod cli;
pub mod output;
