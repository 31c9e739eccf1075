//! Client-side filtering over fetched record lists.
//!
//! Filters are plain strings so they can bind directly to pick-list
//! options; `"all"` (or an empty search) means inactive. Active filters
//! AND together, matching is case-insensitive, and the original relative
//! order of the source list is preserved. Absent optional fields are
//! compared through the records' defaulted accessors, so filtering never
//! fails on sparse data.

use crate::{Asset, Process, Task};

/// Sentinel value meaning "filter inactive".
pub const FILTER_ALL: &str = "all";

/// Record shape the resource filter operates on.
pub trait FilterableResource {
    fn effective_status(&self) -> &str;
    fn folder_or_default(&self) -> &str;
    fn search_name(&self) -> &str;
    fn search_description(&self) -> Option<&str>;
}

impl FilterableResource for Process {
    fn effective_status(&self) -> &str {
        Process::effective_status(self)
    }

    fn folder_or_default(&self) -> &str {
        Process::folder_or_default(self)
    }

    fn search_name(&self) -> &str {
        &self.name
    }

    fn search_description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl FilterableResource for Asset {
    fn effective_status(&self) -> &str {
        Asset::effective_status(self)
    }

    fn folder_or_default(&self) -> &str {
        Asset::folder_or_default(self)
    }

    fn search_name(&self) -> &str {
        &self.name
    }

    fn search_description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Filter state for process and asset lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceFilter {
    pub status: String,
    pub folder: String,
    pub search: String,
}

impl Default for ResourceFilter {
    fn default() -> Self {
        Self {
            status: FILTER_ALL.to_string(),
            folder: FILTER_ALL.to_string(),
            search: String::new(),
        }
    }
}

impl ResourceFilter {
    pub fn is_default(&self) -> bool {
        self.status == FILTER_ALL && self.folder == FILTER_ALL && self.search.is_empty()
    }

    pub fn matches<R: FilterableResource>(&self, item: &R) -> bool {
        if self.status != FILTER_ALL
            && !item.effective_status().eq_ignore_ascii_case(&self.status)
        {
            return false;
        }

        if self.folder != FILTER_ALL
            && !item.folder_or_default().eq_ignore_ascii_case(&self.folder)
        {
            return false;
        }

        if !self.search.is_empty() {
            let fields = [Some(item.search_name()), item.search_description()];
            if !any_field_contains(&fields, &self.search) {
                return false;
            }
        }

        true
    }

    /// Order-preserving projection of `items` to those matching all
    /// active filters.
    pub fn apply<'a, R: FilterableResource>(&self, items: &'a [R]) -> Vec<&'a R> {
        items.iter().filter(|item| self.matches(*item)).collect()
    }
}

/// Filter state for task lists. Tasks have no folder concept here; the
/// third dimension is assignment instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFilter {
    pub status: String,
    pub priority: String,
    pub assignment: String,
    pub search: String,
}

impl Default for TaskFilter {
    fn default() -> Self {
        Self {
            status: FILTER_ALL.to_string(),
            priority: FILTER_ALL.to_string(),
            assignment: FILTER_ALL.to_string(),
            search: String::new(),
        }
    }
}

impl TaskFilter {
    pub fn is_default(&self) -> bool {
        self.status == FILTER_ALL
            && self.priority == FILTER_ALL
            && self.assignment == FILTER_ALL
            && self.search.is_empty()
    }

    pub fn matches(&self, task: &Task) -> bool {
        if self.status != FILTER_ALL
            && !task.effective_status().eq_ignore_ascii_case(&self.status)
        {
            return false;
        }

        if self.priority != FILTER_ALL
            && !task
                .effective_priority()
                .eq_ignore_ascii_case(&self.priority)
        {
            return false;
        }

        if self.assignment != FILTER_ALL {
            // "assigned"/"unassigned" partition the list; any other value
            // is accepted without matching.
            match self.assignment.as_str() {
                "assigned" if !task.is_assigned() => return false,
                "unassigned" if task.is_assigned() => return false,
                _ => {}
            }
        }

        if !self.search.is_empty() {
            let title = task.display_title();
            let fields = [
                Some(title.as_str()),
                task.description.as_deref(),
                Some(task.effective_assignee()),
            ];
            if !any_field_contains(&fields, &self.search) {
                return false;
            }
        }

        true
    }

    pub fn apply<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        tasks.iter().filter(|task| self.matches(task)).collect()
    }
}

/// Case-insensitive substring match over any present field.
fn any_field_contains(fields: &[Option<&str>], term: &str) -> bool {
    let term = term.to_lowercase();
    fields
        .iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&term))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn task(body: serde_json::Value) -> Task {
        serde_json::from_value(body).unwrap()
    }

    fn process(body: serde_json::Value) -> Process {
        serde_json::from_value(body).unwrap()
    }

    fn sample_tasks() -> Vec<Task> {
        vec![
            task(json!({"id": "1", "title": "Invoice Review", "status": "Pending",
                        "priority": "High", "assignee": "ana@x.com"})),
            task(json!({"id": "2", "title": "Expense Approval", "status": "InProgress"})),
            task(json!({"id": "3", "title": "Quarter Close", "status": "Completed",
                        "priority": "Low", "assignedTo": "bo@x.com"})),
        ]
    }

    #[test]
    fn default_filter_is_identity_in_order() {
        let tasks = sample_tasks();
        let filter = TaskFilter::default();
        assert!(filter.is_default());

        let ids: Vec<&str> = filter.apply(&tasks).iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn status_filter_is_case_insensitive() {
        let tasks = sample_tasks();
        let filter = TaskFilter {
            status: "inprogress".into(),
            ..Default::default()
        };

        let matched = filter.apply(&tasks);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "2");
    }

    #[test]
    fn status_filter_uses_pending_default() {
        let tasks = vec![task(json!({"id": "7", "title": "Untracked"}))];
        let filter = TaskFilter {
            status: "Pending".into(),
            ..Default::default()
        };
        assert_eq!(filter.apply(&tasks).len(), 1);

        let filter = TaskFilter {
            status: "Completed".into(),
            ..Default::default()
        };
        assert!(filter.apply(&tasks).is_empty());
    }

    #[test]
    fn assignment_filters_partition_the_list() {
        let tasks = sample_tasks();

        let assigned = TaskFilter {
            assignment: "assigned".into(),
            ..Default::default()
        };
        let unassigned = TaskFilter {
            assignment: "unassigned".into(),
            ..Default::default()
        };

        let assigned_ids: Vec<&str> = assigned
            .apply(&tasks)
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        let unassigned_ids: Vec<&str> = unassigned
            .apply(&tasks)
            .iter()
            .map(|t| t.id.as_str())
            .collect();

        assert_eq!(assigned_ids, ["1", "3"]);
        assert_eq!(unassigned_ids, ["2"]);
        assert_eq!(assigned_ids.len() + unassigned_ids.len(), tasks.len());
    }

    #[test]
    fn unknown_assignment_value_keeps_everything() {
        let tasks = sample_tasks();
        let filter = TaskFilter {
            assignment: "production".into(),
            ..Default::default()
        };
        assert_eq!(filter.apply(&tasks).len(), tasks.len());
    }

    #[test]
    fn search_matches_substrings_case_insensitively() {
        let tasks = sample_tasks();
        let filter = TaskFilter {
            search: "voice".into(),
            ..Default::default()
        };

        let matched = filter.apply(&tasks);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].display_title(), "Invoice Review");
    }

    #[test]
    fn search_covers_assignee_for_tasks() {
        let tasks = sample_tasks();
        let filter = TaskFilter {
            search: "BO@X".into(),
            ..Default::default()
        };

        let matched = filter.apply(&tasks);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "3");
    }

    #[test]
    fn active_filters_are_conjunctive() {
        let tasks = sample_tasks();
        let filter = TaskFilter {
            status: "Pending".into(),
            priority: "high".into(),
            assignment: "assigned".into(),
            search: "invoice".into(),
        };
        assert_eq!(filter.apply(&tasks).len(), 1);

        let contradicting = TaskFilter {
            priority: "low".into(),
            ..filter
        };
        assert!(contradicting.apply(&tasks).is_empty());
    }

    #[test]
    fn priority_filter_uses_medium_default() {
        let tasks = sample_tasks();
        let filter = TaskFilter {
            priority: "medium".into(),
            ..Default::default()
        };

        // Task 2 carries no priority and therefore counts as Medium.
        let matched = filter.apply(&tasks);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "2");
    }

    #[test]
    fn empty_source_filters_to_empty() {
        let filter = TaskFilter::default();
        assert!(filter.apply(&[]).is_empty());
    }

    #[test]
    fn resource_filter_defaults_folder_and_status() {
        let processes = vec![
            process(json!({"id": "1", "key": "a", "name": "Loader"})),
            process(json!({"id": "2", "key": "b", "name": "Mailer",
                           "status": "Failed", "folderName": "Production"})),
        ];

        let available = ResourceFilter {
            status: "available".into(),
            ..Default::default()
        };
        assert_eq!(available.apply(&processes).len(), 1);

        let in_default = ResourceFilter {
            folder: "Default".into(),
            ..Default::default()
        };
        let matched = in_default.apply(&processes);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "1");
    }

    #[test]
    fn resource_search_covers_description() {
        let processes = vec![process(json!({
            "id": "1", "key": "a", "name": "Loader",
            "description": "Nightly reconciliation run"
        }))];

        let filter = ResourceFilter {
            search: "reconcil".into(),
            ..Default::default()
        };
        assert_eq!(filter.apply(&processes).len(), 1);

        let filter = ResourceFilter {
            search: "unrelated".into(),
            ..Default::default()
        };
        assert!(filter.apply(&processes).is_empty());
    }

    #[test]
    fn end_to_end_status_scenario() {
        let tasks = vec![
            task(json!({"id": "1", "title": "A", "status": "Pending"})),
            task(json!({"id": "2", "title": "B", "status": "InProgress"})),
            task(json!({"id": "3", "title": "C", "status": "Completed"})),
        ];
        let filter = TaskFilter {
            status: "InProgress".into(),
            ..Default::default()
        };

        let matched = filter.apply(&tasks);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "2");
    }
}
