//! # Task Stack
//!
//! Accumulates the outcome of every rule's match attempt for one
//! provisioning run. Entries are grouped by rule label; both the label order
//! and the entry order within a label follow insertion order, so a run's
//! report is deterministic and mirrors the configuration. A stack lives for
//! exactly one run: it is populated by the handlers, read once by the
//! execution phase, and then discarded.

/// The recorded outcome of a single rule's match attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskEntry {
    /// Normalized path of the first existing candidate, or empty when no
    /// candidate matched.
    pub source: String,
    /// Normalized, fully-substituted target path. Computed even when the
    /// match failed, so reporting can show where the file would have gone.
    pub target: String,
    /// Whether any candidate path existed on disk.
    pub matched: bool,
}

/// All entries recorded under one rule label.
#[derive(Debug, Clone)]
pub struct TaskGroup {
    /// The owning rule's label (several rules may share one).
    pub label: String,
    /// Entries in insertion order.
    pub entries: Vec<TaskEntry>,
}

/// Ordered, append-only record of match attempts, grouped by label.
#[derive(Debug, Default)]
pub struct TaskStack {
    groups: Vec<TaskGroup>,
}

impl TaskStack {
    /// Create an empty stack for a new provisioning run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry under `label`, creating the group on first use.
    ///
    /// Group creation preserves first-seen label order.
    pub fn add(&mut self, label: &str, entry: TaskEntry) {
        if let Some(group) = self.groups.iter_mut().find(|g| g.label == label) {
            group.entries.push(entry);
        } else {
            self.groups.push(TaskGroup {
                label: label.to_string(),
                entries: vec![entry],
            });
        }
    }

    /// All groups, for read-only iteration.
    pub fn items(&self) -> &[TaskGroup] {
        &self.groups
    }

    /// Number of distinct labels (not the number of entries).
    pub fn count(&self) -> usize {
        self.groups.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(source: &str, matched: bool) -> TaskEntry {
        TaskEntry {
            source: source.to_string(),
            target: "target/file.txt".to_string(),
            matched,
        }
    }

    #[test]
    fn test_new_stack_is_empty() {
        let stack = TaskStack::new();
        assert_eq!(stack.count(), 0);
        assert!(stack.items().is_empty());
    }

    #[test]
    fn test_shared_label_groups_entries_in_order() {
        let mut stack = TaskStack::new();
        stack.add("shared", entry("first", true));
        stack.add("shared", entry("second", false));

        // Two entries, one distinct label
        assert_eq!(stack.count(), 1);
        let groups = stack.items();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].label, "shared");
        assert_eq!(groups[0].entries.len(), 2);
        assert_eq!(groups[0].entries[0].source, "first");
        assert_eq!(groups[0].entries[1].source, "second");
    }

    #[test]
    fn test_label_order_follows_first_insertion() {
        let mut stack = TaskStack::new();
        stack.add("zeta", entry("a", true));
        stack.add("alpha", entry("b", true));
        stack.add("zeta", entry("c", true));

        let labels: Vec<&str> = stack.items().iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["zeta", "alpha"]);
        assert_eq!(stack.count(), 2);
    }

    #[test]
    fn test_unmatched_entry_keeps_target() {
        let mut stack = TaskStack::new();
        stack.add(
            "missing",
            TaskEntry {
                source: String::new(),
                target: "somewhere/file.txt".to_string(),
                matched: false,
            },
        );
        let group = &stack.items()[0];
        assert!(!group.entries[0].matched);
        assert_eq!(group.entries[0].source, "");
        assert_eq!(group.entries[0].target, "somewhere/file.txt");
    }
}
