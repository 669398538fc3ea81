//! triage-core: rule-driven action suggestions for back-office dashboards.
//!
//! Given a snapshot of badge counts (outstanding items per business category),
//! the generator matches a static rule catalog, scores each match with a RICE
//! formula, and returns a ranked, deduplicated list of suggested tasks.
//! Everything here is synchronous and pure; obtaining the badge counts is the
//! caller's problem.

pub mod badge;
pub mod catalog;
pub mod generate;
pub mod present;
pub mod rice;
pub mod rule;

pub use badge::{BadgeCount, BadgeSource, Severity};
pub use catalog::RuleCatalog;
pub use generate::{generate, GeneratedTask};
pub use present::{filter_by_priority, limit_tasks, summarize, TaskSummary};
pub use rice::{
    score, Priority, RiceScore, CRITICAL_SCORE, HIGH_SCORE, MEDIUM_SCORE, MIN_EFFORT_HOURS,
};
pub use rule::{Impact, TaskRule, TaskTemplate, Trigger};
