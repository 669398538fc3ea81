//! Trigger predicates and task templates: the shape of a catalog entry.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::badge::{BadgeCount, BadgeSource, Severity};

/// Expected impact on a 3-point ordinal scale.
///
/// A closed enum rather than a raw integer: out-of-range impact values are
/// unrepresentable in a catalog.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Impact {
    #[serde(rename = "low")]
    Low,
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "high")]
    High,
}

impl Impact {
    /// Multiplier used by the RICE scorer (1/2/3).
    pub fn weight(&self) -> f64 {
        match self {
            Impact::Low => 1.0,
            Impact::Medium => 2.0,
            Impact::High => 3.0,
        }
    }
}

/// Condition a badge must meet for a rule to fire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trigger {
    pub source: BadgeSource,
    pub min_count: u64,
    /// When set, the badge severity must be a member.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Vec<Severity>>,
}

impl Trigger {
    pub fn matches(&self, badge: &BadgeCount) -> bool {
        if badge.source != self.source {
            return false;
        }
        if badge.count < self.min_count {
            return false;
        }
        match &self.severity {
            Some(allowed) => allowed.contains(&badge.severity),
            None => true,
        }
    }
}

/// Text and RICE constants used to instantiate a task when a rule fires.
///
/// Title and description may contain `{{count}}` and `{{<detail-key>}}`
/// placeholders, filled from the triggering badge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskTemplate {
    pub title: String,
    pub description: String,
    pub action_target: String,
    pub action_label: String,
    pub impact: Impact,
    /// 0.0 - 1.0.
    pub confidence: f64,
    /// Estimated hours, may be fractional.
    pub effort_hours: f64,
}

/// One catalog entry: trigger + template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskRule {
    pub id: String,
    pub trigger: Trigger,
    pub template: TaskTemplate,
}

impl TaskRule {
    /// Check the configuration constraints the scorer relies on.
    ///
    /// Out-of-range values are rejected, never clamped.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            bail!("rule id must not be empty");
        }
        if !self.template.confidence.is_finite()
            || !(0.0..=1.0).contains(&self.template.confidence)
        {
            bail!(
                "confidence must be within 0.0..=1.0, got {}",
                self.template.confidence
            );
        }
        if !self.template.effort_hours.is_finite() || self.template.effort_hours < 0.0 {
            bail!(
                "effort_hours must be a non-negative finite number, got {}",
                self.template.effort_hours
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template() -> TaskTemplate {
        TaskTemplate {
            title: "Restock {{count}} products".to_string(),
            description: "Products below threshold".to_string(),
            action_target: "/stock/alerts".to_string(),
            action_label: "Open stock alerts".to_string(),
            impact: Impact::High,
            confidence: 0.9,
            effort_hours: 2.0,
        }
    }

    #[test]
    fn test_trigger_source_and_count() {
        let trigger = Trigger {
            source: BadgeSource::Stock,
            min_count: 3,
            severity: None,
        };

        let hit = BadgeCount::new(BadgeSource::Stock, 3, Severity::Info);
        let below = BadgeCount::new(BadgeSource::Stock, 2, Severity::Urgent);
        let wrong_source = BadgeCount::new(BadgeSource::PendingOrders, 10, Severity::Urgent);

        assert!(trigger.matches(&hit));
        assert!(!trigger.matches(&below));
        assert!(!trigger.matches(&wrong_source));
    }

    #[test]
    fn test_trigger_severity_filter() {
        let trigger = Trigger {
            source: BadgeSource::Stock,
            min_count: 1,
            severity: Some(vec![Severity::Urgent, Severity::Warning]),
        };

        assert!(trigger.matches(&BadgeCount::new(BadgeSource::Stock, 1, Severity::Urgent)));
        assert!(trigger.matches(&BadgeCount::new(BadgeSource::Stock, 1, Severity::Warning)));
        assert!(!trigger.matches(&BadgeCount::new(BadgeSource::Stock, 1, Severity::Info)));
    }

    #[test]
    fn test_validate_rejects_bad_confidence() {
        let mut t = template();
        t.confidence = 1.2;
        let rule = TaskRule {
            id: "stock-restock".to_string(),
            trigger: Trigger {
                source: BadgeSource::Stock,
                min_count: 1,
                severity: None,
            },
            template: t,
        };
        assert!(rule.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_nan_effort() {
        let mut t = template();
        t.effort_hours = f64::NAN;
        let rule = TaskRule {
            id: "stock-restock".to_string(),
            trigger: Trigger {
                source: BadgeSource::Stock,
                min_count: 1,
                severity: None,
            },
            template: t,
        };
        assert!(rule.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_id() {
        let rule = TaskRule {
            id: String::new(),
            trigger: Trigger {
                source: BadgeSource::Stock,
                min_count: 1,
                severity: None,
            },
            template: template(),
        };
        assert!(rule.validate().is_err());
    }

    #[test]
    fn test_impact_weights() {
        assert_eq!(Impact::Low.weight(), 1.0);
        assert_eq!(Impact::Medium.weight(), 2.0);
        assert_eq!(Impact::High.weight(), 3.0);
    }
}
