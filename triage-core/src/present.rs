//! Presentation helpers: tier filtering, truncation, and summary statistics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::badge::BadgeSource;
use crate::generate::GeneratedTask;
use crate::rice::Priority;

/// Keep tasks at or above `min`. Order is preserved.
pub fn filter_by_priority(mut tasks: Vec<GeneratedTask>, min: Priority) -> Vec<GeneratedTask> {
    tasks.retain(|t| t.priority >= min);
    tasks
}

/// Truncate an already-ranked list to its first `n` tasks.
pub fn limit_tasks(mut tasks: Vec<GeneratedTask>, n: usize) -> Vec<GeneratedTask> {
    tasks.truncate(n);
    tasks
}

/// Aggregate counts over a generated set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TaskSummary {
    pub total: usize,
    pub by_category: BTreeMap<BadgeSource, usize>,
    pub by_priority: BTreeMap<Priority, usize>,
    pub total_score: f64,
}

/// Summarize the full generated set.
///
/// Must be called before `filter_by_priority`/`limit_tasks`: totals cover
/// everything generated, not just what ends up displayed.
pub fn summarize(tasks: &[GeneratedTask]) -> TaskSummary {
    let mut summary = TaskSummary {
        total: tasks.len(),
        ..TaskSummary::default()
    };

    for t in tasks {
        *summary.by_category.entry(t.category).or_insert(0) += 1;
        *summary.by_priority.entry(t.priority).or_insert(0) += 1;
        summary.total_score += t.rice.score;
    }

    summary
}
