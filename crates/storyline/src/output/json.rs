//! JSON shapes for programmatic output.

use serde_json::{Value, json};

use crate::analysis::{Analysis, CriticalPath, Cycle, DependencyGraph, DependencyNode};
use crate::domain::Story;

fn story_json(story: &Story) -> Value {
    json!({
        "id": story.id,
        "title": story.title,
        "status": story.status,
        "priority": story.priority,
        "storyPoints": story.story_points,
    })
}

fn node_json(node: &DependencyNode) -> Value {
    json!({
        "id": node.story.id,
        "title": node.story.title,
        "status": node.story.status,
        "level": node.level,
        "hasCircular": node.has_circular,
        "dependencies": node.dependencies,
        "dependents": node.dependents,
    })
}

pub(super) fn critical_path_json(path: &CriticalPath) -> Value {
    json!({
        "length": path.len(),
        "totalPoints": path.total_points,
        "remaining": path.remaining,
        "stories": path.stories.iter().map(story_json).collect::<Vec<_>>(),
    })
}

pub(super) fn levels_json(graph: &DependencyGraph) -> Value {
    json!(graph.nodes().iter().map(node_json).collect::<Vec<_>>())
}

pub(super) fn stories_json(stories: &[Story]) -> Value {
    json!(stories.iter().map(story_json).collect::<Vec<_>>())
}

pub(super) fn blocked_json(blocked: &[(Story, Vec<&Story>)]) -> Value {
    json!(
        blocked
            .iter()
            .map(|(story, blockers)| {
                let mut value = story_json(story);
                value["blockedBy"] = json!(blockers.iter().map(|b| &b.id).collect::<Vec<_>>());
                value
            })
            .collect::<Vec<_>>()
    )
}

pub(super) fn cycles_json(cycles: &[Cycle]) -> Value {
    json!(cycles.iter().map(|c| &c.members).collect::<Vec<_>>())
}

pub(super) fn summary_json(analysis: &Analysis, source: &str) -> Value {
    let histogram: serde_json::Map<String, Value> = analysis
        .level_histogram()
        .into_iter()
        .map(|(level, count)| (level.to_string(), json!(count)))
        .collect();

    json!({
        "source": source,
        "stories": {
            "total": analysis.total_stories,
            "inView": analysis.graph.len(),
        },
        "maxLevel": analysis.max_level(),
        "levels": histogram,
        "criticalPath": critical_path_json(&analysis.critical_path),
        "blocked": analysis.blocked.iter().map(|s| &s.id).collect::<Vec<_>>(),
        "ready": analysis.ready.iter().map(|s| &s.id).collect::<Vec<_>>(),
        "cycles": cycles_json(&analysis.cycles),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze_graph;
    use crate::domain::StoryStatus;

    #[test]
    fn levels_json_uses_camel_case_keys() {
        let graph = analyze_graph(&[Story::new("A", ["A"])]);
        let value = levels_json(&graph);
        assert_eq!(value[0]["id"], "A");
        assert_eq!(value[0]["hasCircular"], true);
        assert_eq!(value[0]["level"], 0);
        assert_eq!(value[0]["dependencies"][0], "A");
    }

    #[test]
    fn blocked_json_lists_blockers() {
        let dep = Story::new("A", Vec::<&str>::new()).with_status(StoryStatus::Todo);
        let story = Story::new("B", ["A"]);
        let value = blocked_json(&[(story, vec![&dep])]);
        assert_eq!(value[0]["id"], "B");
        assert_eq!(value[0]["blockedBy"][0], "A");
        assert_eq!(value[0]["status"], "backlog");
    }
}
