//! Integration tests for dependency analysis.
//!
//! Worked examples first, then property tests over generated story sets
//! (with cycles, self-dependencies and dangling references).

use proptest::prelude::*;
use proptest::sample::Index;
use rstest::rstest;
use std::collections::{HashMap, HashSet};
use storyline::analysis::{
    Analysis, TieBreak, TreeOptions, analyze_graph, blocked_stories, critical_path,
    dependency_tree, find_cycles,
};
use storyline::config::AnalysisConfig;
use storyline::domain::{Story, StoryFilter, StoryId, StoryStatus};

fn ids(stories: &[Story]) -> Vec<&str> {
    stories.iter().map(|s| s.id.as_str()).collect()
}

fn level_of(graph: &storyline::analysis::DependencyGraph, id: &str) -> usize {
    graph.get(&StoryId::new(id)).map(|n| n.level).unwrap()
}

// ============================================================================
// Worked Examples
// ============================================================================

#[test]
fn linear_chain_levels_and_path() {
    let stories = vec![
        Story::new("A", Vec::<&str>::new()),
        Story::new("B", ["A"]),
        Story::new("C", ["B"]),
    ];
    let graph = analyze_graph(&stories);

    assert_eq!(level_of(&graph, "A"), 0);
    assert_eq!(level_of(&graph, "B"), 1);
    assert_eq!(level_of(&graph, "C"), 2);
    assert_eq!(
        ids(&critical_path(&graph, TieBreak::Lexicographic)),
        ["A", "B", "C"]
    );
}

#[test]
fn cycle_members_reached_through_finished_stories_are_flagged() {
    let stories = vec![
        Story::new("v", ["u", "w"]),
        Story::new("u", ["v"]),
        Story::new("w", ["u"]),
    ];
    let graph = analyze_graph(&stories);

    assert!(graph.nodes().iter().all(|n| n.has_circular));
    let cycles = find_cycles(&graph);
    assert_eq!(cycles.len(), 1);
    assert_eq!(cycles[0].members.len(), 3);
}

#[test]
fn mutual_dependency_is_flagged_and_terminates() {
    let stories = vec![Story::new("A", ["B"]), Story::new("B", ["A"])];
    let graph = analyze_graph(&stories);

    assert!(graph.nodes().iter().all(|n| n.has_circular));
    let path = critical_path(&graph, TieBreak::Lexicographic);
    assert!(!path.is_empty() && path.len() <= 2);
}

#[test]
fn self_dependency_is_flagged() {
    let stories = vec![Story::new("A", ["A"])];
    let graph = analyze_graph(&stories);

    let node = graph.get(&StoryId::new("A")).unwrap();
    assert!(node.has_circular);
    assert_eq!(node.level, 0);
    assert_eq!(ids(&critical_path(&graph, TieBreak::Lexicographic)), ["A"]);
}

#[test]
fn todo_dependency_blocks_dependent() {
    let stories = vec![
        Story::new("A", Vec::<&str>::new()).with_status(StoryStatus::Todo),
        Story::new("B", ["A"]),
    ];
    assert_eq!(ids(&blocked_stories(&stories)), ["B"]);
}

#[test]
fn dangling_dependency_is_dropped() {
    let stories = vec![Story::new("A", ["ghost"])];
    let graph = analyze_graph(&stories);

    let node = graph.get(&StoryId::new("A")).unwrap();
    assert!(node.dependencies.is_empty());
    assert_eq!(node.level, 0);
    assert!(blocked_stories(&stories).is_empty());
}

#[rstest]
#[case(TieBreak::Lexicographic, "B")]
#[case(TieBreak::InputOrder, "C")]
fn tie_break_selects_deepest_start(#[case] tie_break: TieBreak, #[case] expected_end: &str) {
    let stories = vec![
        Story::new("A", Vec::<&str>::new()),
        Story::new("C", ["A"]),
        Story::new("B", ["A"]),
    ];
    let graph = analyze_graph(&stories);
    let path = critical_path(&graph, tie_break);
    assert_eq!(ids(&path), ["A", expected_end]);
}

#[test]
fn filtered_view_judges_blockers_against_full_list() {
    let stories = vec![
        Story::new("A", Vec::<&str>::new()).with_status(StoryStatus::InProgress),
        Story::new("B", ["A"]).with_status(StoryStatus::Todo),
    ];
    let filter = StoryFilter {
        statuses: vec![StoryStatus::Todo],
        ..StoryFilter::default()
    };
    let analysis = Analysis::run(&stories, &filter, &AnalysisConfig::default());

    assert_eq!(analysis.graph.len(), 1);
    assert_eq!(ids(&analysis.blocked), ["B"]);
    assert!(analysis.ready.is_empty());
    assert_eq!(analysis.total_stories, 2);
}

// ============================================================================
// Property Tests
// ============================================================================

/// Arbitrary story sets: dependencies may point anywhere, including to the
/// story itself or to a missing id.
fn arb_stories() -> impl Strategy<Value = Vec<Story>> {
    (1usize..14)
        .prop_flat_map(|n| {
            prop::collection::vec(
                (prop::collection::vec(0..=n, 0..4), any::<bool>()),
                n,
            )
        })
        .prop_map(|specs| {
            let n = specs.len();
            specs
                .into_iter()
                .enumerate()
                .map(|(i, (deps, done))| {
                    let deps = deps.into_iter().map(|d| {
                        if d == n {
                            "ghost".to_string()
                        } else {
                            format!("S{d:02}")
                        }
                    });
                    let status = if done {
                        StoryStatus::Done
                    } else {
                        StoryStatus::Todo
                    };
                    Story::new(format!("S{i:02}"), deps).with_status(status)
                })
                .collect()
        })
}

/// Acyclic story sets: dependencies only point to earlier stories.
fn arb_acyclic_stories() -> impl Strategy<Value = Vec<Story>> {
    prop::collection::vec(prop::collection::vec(any::<Index>(), 0..3), 1..14).prop_map(
        |specs| {
            specs
                .into_iter()
                .enumerate()
                .map(|(i, picks)| {
                    let deps: Vec<String> = if i == 0 {
                        Vec::new()
                    } else {
                        picks.iter().map(|p| format!("S{:02}", p.index(i))).collect()
                    };
                    Story::new(format!("S{i:02}"), deps)
                })
                .collect()
        },
    )
}

proptest! {
    #[test]
    fn critical_path_length_is_one_plus_max_level(stories in arb_stories()) {
        let graph = analyze_graph(&stories);
        let max_level = graph.nodes().iter().map(|n| n.level).max().unwrap();

        for tie_break in [TieBreak::Lexicographic, TieBreak::InputOrder] {
            let path = critical_path(&graph, tie_break);
            prop_assert_eq!(path.len(), max_level + 1);
        }
    }

    #[test]
    fn critical_path_follows_direct_dependencies(stories in arb_stories()) {
        let graph = analyze_graph(&stories);
        let path = critical_path(&graph, TieBreak::Lexicographic);

        for pair in path.windows(2) {
            let dependent = graph.get(&pair[1].id).unwrap();
            prop_assert!(dependent.dependencies.contains(&pair[0].id));
        }
    }

    #[test]
    fn dangling_ids_never_reach_the_graph(stories in arb_stories()) {
        let graph = analyze_graph(&stories);
        for node in graph.nodes() {
            prop_assert!(node.dependencies.iter().all(|d| graph.contains(d)));
            prop_assert!(node.dependents.iter().all(|d| graph.contains(d)));
        }
    }

    #[test]
    fn stories_without_dependencies_are_level_zero(stories in arb_stories()) {
        let graph = analyze_graph(&stories);
        for node in graph.nodes() {
            if node.dependencies.is_empty() {
                prop_assert_eq!(node.level, 0);
            }
        }
    }

    #[test]
    fn circular_flags_match_cycle_report(stories in arb_stories()) {
        let graph = analyze_graph(&stories);
        let members: HashSet<StoryId> = find_cycles(&graph)
            .into_iter()
            .flat_map(|c| c.members)
            .collect();

        for node in graph.nodes() {
            prop_assert_eq!(node.has_circular, members.contains(node.id()));
            if node.dependencies.contains(node.id()) {
                prop_assert!(node.has_circular);
            }
        }
    }

    #[test]
    fn acyclic_levels_are_longest_chains(stories in arb_acyclic_stories()) {
        let graph = analyze_graph(&stories);
        for node in graph.nodes() {
            prop_assert!(!node.has_circular);
            let expected = node
                .dependencies
                .iter()
                .map(|d| graph.get(d).unwrap().level + 1)
                .max()
                .unwrap_or(0);
            prop_assert_eq!(node.level, expected);
        }
        prop_assert!(find_cycles(&graph).is_empty());
    }

    #[test]
    fn blocked_set_matches_definition(stories in arb_stories()) {
        let status: HashMap<&str, StoryStatus> =
            stories.iter().map(|s| (s.id.as_str(), s.status)).collect();
        let expected: Vec<&str> = stories
            .iter()
            .filter(|s| {
                s.dependencies.iter().any(|d| {
                    status.get(d.as_str()).is_some_and(|st| !st.is_done())
                })
            })
            .map(|s| s.id.as_str())
            .collect();

        let blocked = blocked_stories(&stories);
        prop_assert_eq!(ids(&blocked), expected);
    }

    #[test]
    fn trees_stop_at_cycles(stories in arb_stories()) {
        let graph = analyze_graph(&stories);
        let options = TreeOptions {
            max_depth: None,
            ..TreeOptions::default()
        };
        for node in graph.nodes() {
            let tree = dependency_tree(&graph, node.id(), &options).unwrap();
            prop_assert_eq!(&tree.id, node.id());
            prop_assert!(tree.size() <= 1 + graph.edge_count());
            if node.dependencies.contains(node.id()) {
                prop_assert!(tree.children.iter().any(|c| c.cycle && &c.id == node.id()));
            }
        }
    }
}
