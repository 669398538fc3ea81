//! Task generator: match a badge snapshot against the catalog, instantiate
//! suggestions, dedup per rule, and rank by RICE score.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::badge::{BadgeCount, BadgeSource};
use crate::catalog::RuleCatalog;
use crate::rice::{Priority, RiceScore};
use crate::rule::TaskRule;

/// A suggested action item derived from one (rule, badge) match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedTask {
    /// Equal to the triggering rule's id: stable across recomputation.
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: BadgeSource,
    pub action_target: String,
    pub action_label: String,
    pub rice: RiceScore,
    pub priority: Priority,
    /// The badge that fired the rule, kept for traceability.
    pub source_badge: BadgeCount,
}

/// Generate ranked suggestions for a badge snapshot.
///
/// Total and pure: an empty or unmatched snapshot yields an empty vec, and
/// identical inputs always produce identical output. At most one task per
/// rule survives; when several badges fire the same rule, the highest-scoring
/// instance wins. Sorted by score descending, ties broken by rule id.
pub fn generate(badges: &[BadgeCount], catalog: &RuleCatalog) -> Vec<GeneratedTask> {
    let mut best: HashMap<&str, GeneratedTask> = HashMap::new();

    for rule in catalog.rules() {
        for badge in badges {
            if !rule.trigger.matches(badge) {
                continue;
            }
            let task = instantiate(rule, badge);
            match best.get(rule.id.as_str()) {
                Some(existing) if existing.rice.score >= task.rice.score => {}
                _ => {
                    best.insert(rule.id.as_str(), task);
                }
            }
        }
    }

    let mut tasks: Vec<GeneratedTask> = best.into_values().collect();
    tasks.sort_by(|a, b| {
        b.rice
            .score
            .partial_cmp(&a.rice.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.id.cmp(&b.id))
    });
    tasks
}

fn instantiate(rule: &TaskRule, badge: &BadgeCount) -> GeneratedTask {
    let rice = RiceScore::compute(
        badge.count,
        rule.template.impact,
        rule.template.confidence,
        rule.template.effort_hours,
    );
    let priority = rice.priority();

    GeneratedTask {
        id: rule.id.clone(),
        title: interpolate(&rule.template.title, badge),
        description: interpolate(&rule.template.description, badge),
        category: badge.source,
        action_target: rule.template.action_target.clone(),
        action_label: rule.template.action_label.clone(),
        rice,
        priority,
        source_badge: badge.clone(),
    }
}

fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{\{(\w+)\}\}").expect("valid placeholder pattern"))
}

/// Fill `{{count}}` and named `details` fields into template text.
/// A placeholder with no matching detail renders as an empty string.
fn interpolate(template: &str, badge: &BadgeCount) -> String {
    placeholder_re()
        .replace_all(template, |caps: &regex::Captures<'_>| match &caps[1] {
            "count" => badge.count.to_string(),
            key => badge.details.get(key).cloned().unwrap_or_default(),
        })
        .into_owned()
}
