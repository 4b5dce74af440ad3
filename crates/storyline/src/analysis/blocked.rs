//! Blocked and ready story detection.
//!
//! A story is blocked when at least one of its declared dependencies resolves
//! to a story that is not done. Dependency statuses are always looked up in
//! the complete story list, so a filter that hides a dependency never
//! unblocks the stories waiting on it. Dependencies that resolve nowhere do
//! not block.
//!
//! None of this needs the dependency graph.

use crate::domain::{Story, StoryId, StoryStatus};
use std::collections::{HashMap, HashSet};

/// Status lookup over the complete story list; first occurrence wins.
fn status_index(all: &[Story]) -> HashMap<&StoryId, StoryStatus> {
    let mut index = HashMap::with_capacity(all.len());
    for story in all {
        index.entry(&story.id).or_insert(story.status);
    }
    index
}

fn is_blocked(story: &Story, statuses: &HashMap<&StoryId, StoryStatus>) -> bool {
    story
        .dependencies
        .iter()
        .any(|dep| statuses.get(dep).is_some_and(|status| !status.is_done()))
}

/// Stories in `stories` blocked by a not-done dependency within the same list.
pub fn blocked_stories(stories: &[Story]) -> Vec<Story> {
    blocked_in_view(stories, stories)
}

/// Stories of `view` blocked by a not-done dependency, resolved against `all`.
pub fn blocked_in_view(view: &[Story], all: &[Story]) -> Vec<Story> {
    let statuses = status_index(all);
    view.iter()
        .filter(|story| is_blocked(story, &statuses))
        .cloned()
        .collect()
}

/// The not-done dependencies holding `story` back, in declaration order,
/// each listed once.
pub fn blockers_of<'a>(story: &Story, all: &'a [Story]) -> Vec<&'a Story> {
    let by_id: HashMap<&StoryId, &Story> = all.iter().rev().map(|s| (&s.id, s)).collect();
    let mut seen = HashSet::new();
    story
        .dependencies
        .iter()
        .filter(|dep| seen.insert(*dep))
        .filter_map(|dep| by_id.get(dep).copied())
        .filter(|dep| !dep.status.is_done())
        .collect()
}

/// Stories of `view` that can be picked up now.
///
/// Ready means not done, not flagged `blocked` on the board, and not blocked
/// by any dependency.
pub fn ready_stories(view: &[Story], all: &[Story]) -> Vec<Story> {
    let statuses = status_index(all);
    view.iter()
        .filter(|story| !story.status.is_done() && story.status != StoryStatus::Blocked)
        .filter(|story| !is_blocked(story, &statuses))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ids(stories: &[Story]) -> Vec<&str> {
        stories.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn todo_dependency_blocks() {
        let stories = vec![
            Story::new("A", Vec::<&str>::new()).with_status(StoryStatus::Todo),
            Story::new("B", ["A"]),
        ];
        assert_eq!(ids(&blocked_stories(&stories)), vec!["B"]);
    }

    #[rstest]
    #[case::backlog(StoryStatus::Backlog, true)]
    #[case::todo(StoryStatus::Todo, true)]
    #[case::in_progress(StoryStatus::InProgress, true)]
    #[case::blocked(StoryStatus::Blocked, true)]
    #[case::done(StoryStatus::Done, false)]
    fn dependency_status_decides(#[case] dep_status: StoryStatus, #[case] blocked: bool) {
        let stories = vec![
            Story::new("A", Vec::<&str>::new()).with_status(dep_status),
            Story::new("B", ["A"]),
        ];
        assert_eq!(!blocked_stories(&stories).is_empty(), blocked);
    }

    #[test]
    fn one_open_dependency_is_enough() {
        let stories = vec![
            Story::new("A", Vec::<&str>::new()).with_status(StoryStatus::Done),
            Story::new("B", Vec::<&str>::new()).with_status(StoryStatus::InProgress),
            Story::new("C", ["A", "B"]),
        ];
        assert_eq!(ids(&blocked_stories(&stories)), vec!["C"]);
    }

    #[test]
    fn no_dependencies_never_blocked() {
        let stories = vec![Story::new("A", Vec::<&str>::new())];
        assert!(blocked_stories(&stories).is_empty());
    }

    #[test]
    fn dangling_dependency_does_not_block() {
        let stories = vec![Story::new("A", ["ghost"])];
        assert!(blocked_stories(&stories).is_empty());
    }

    #[test]
    fn hidden_dependency_still_blocks_view() {
        let all = vec![
            Story::new("A", Vec::<&str>::new()).with_status(StoryStatus::Todo),
            Story::new("B", ["A"]),
        ];
        let view = vec![all[1].clone()];

        assert_eq!(ids(&blocked_in_view(&view, &all)), vec!["B"]);
        // Against the view alone the dependency would be invisible
        assert!(blocked_stories(&view).is_empty());
    }

    #[test]
    fn blockers_lists_open_dependencies_in_order() {
        let all = vec![
            Story::new("A", Vec::<&str>::new()).with_status(StoryStatus::Todo),
            Story::new("B", Vec::<&str>::new()).with_status(StoryStatus::Done),
            Story::new("C", Vec::<&str>::new()),
            Story::new("D", ["C", "B", "missing", "A"]),
        ];
        let blockers: Vec<&str> = blockers_of(&all[3], &all).iter().map(|s| s.id.as_str()).collect();
        assert_eq!(blockers, vec!["C", "A"]);
    }

    #[test]
    fn ready_excludes_done_flagged_and_blocked() {
        let all = vec![
            Story::new("done", Vec::<&str>::new()).with_status(StoryStatus::Done),
            Story::new("flagged", Vec::<&str>::new()).with_status(StoryStatus::Blocked),
            Story::new("free", ["done"]).with_status(StoryStatus::Todo),
            Story::new("waiting", ["free"]),
        ];
        assert_eq!(ids(&ready_stories(&all, &all)), vec!["free"]);
    }
}
