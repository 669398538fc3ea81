//! Immutable rule catalog: validated once at startup, iterated linearly.
//!
//! The set stays small (a few dozen entries at most), so the generator scans
//! the whole list on every call and no indexing is kept. Adding a rule is a
//! configuration change, not a generator change.

use std::collections::HashSet;

use anyhow::{bail, Context, Result};

use crate::badge::{BadgeSource, Severity};
use crate::rule::{Impact, TaskRule, TaskTemplate, Trigger};

/// Frozen, validated set of task rules.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleCatalog {
    rules: Vec<TaskRule>,
}

impl RuleCatalog {
    /// Validate and freeze a rule set.
    ///
    /// Duplicate ids and out-of-range RICE constants are configuration
    /// defects and are rejected here, never clamped downstream.
    pub fn new(rules: Vec<TaskRule>) -> Result<Self> {
        let mut seen: HashSet<&str> = HashSet::new();
        for rule in &rules {
            rule.validate().with_context(|| format!("rule '{}'", rule.id))?;
            if !seen.insert(rule.id.as_str()) {
                bail!("duplicate rule id: {}", rule.id);
            }
        }
        Ok(Self { rules })
    }

    /// Default catalog covering the back-office dashboard modules.
    pub fn builtin() -> Result<Self> {
        Self::new(builtin_rules())
    }

    pub fn rules(&self) -> &[TaskRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn builtin_rules() -> Vec<TaskRule> {
    vec![
        TaskRule {
            id: "stock-restock".to_string(),
            trigger: Trigger {
                source: BadgeSource::Stock,
                min_count: 1,
                severity: Some(vec![Severity::Urgent, Severity::Warning]),
            },
            template: TaskTemplate {
                title: "Restock {{count}} products below alert threshold".to_string(),
                description: "{{count}} products sit at or under their minimum stock level. \
                              Review supplier availability and raise purchase orders."
                    .to_string(),
                action_target: "/stock/alerts".to_string(),
                action_label: "Open stock alerts".to_string(),
                impact: Impact::High,
                confidence: 0.9,
                effort_hours: 2.0,
            },
        },
        TaskRule {
            id: "stock-threshold-audit".to_string(),
            trigger: Trigger {
                source: BadgeSource::Stock,
                min_count: 20,
                severity: None,
            },
            template: TaskTemplate {
                title: "Audit stock alert thresholds".to_string(),
                description: "{{count}} simultaneous stock alerts usually means thresholds \
                              drifted from real sell-through. Re-check the worst offenders."
                    .to_string(),
                action_target: "/stock/settings".to_string(),
                action_label: "Review thresholds".to_string(),
                impact: Impact::Medium,
                confidence: 0.6,
                effort_hours: 4.0,
            },
        },
        TaskRule {
            id: "orders-confirm".to_string(),
            trigger: Trigger {
                source: BadgeSource::PendingOrders,
                min_count: 1,
                severity: None,
            },
            template: TaskTemplate {
                title: "Confirm {{count}} pending orders".to_string(),
                description: "Orders are waiting for confirmation before picking can start. \
                              Oldest first."
                    .to_string(),
                action_target: "/orders?status=pending".to_string(),
                action_label: "Open order pipeline".to_string(),
                impact: Impact::High,
                confidence: 0.85,
                effort_hours: 1.5,
            },
        },
        TaskRule {
            id: "invoices-chase".to_string(),
            trigger: Trigger {
                source: BadgeSource::OverdueInvoices,
                min_count: 1,
                severity: Some(vec![Severity::Urgent]),
            },
            template: TaskTemplate {
                title: "Chase {{count}} overdue invoices".to_string(),
                description: "Outstanding receivables total {{total_amount}}. Send payment \
                              reminders and flag disputes."
                    .to_string(),
                action_target: "/finance/invoices?filter=overdue".to_string(),
                action_label: "Open overdue invoices".to_string(),
                impact: Impact::High,
                confidence: 0.95,
                effort_hours: 1.0,
            },
        },
        TaskRule {
            id: "transactions-classify".to_string(),
            trigger: Trigger {
                source: BadgeSource::UnclassifiedTransactions,
                min_count: 5,
                severity: None,
            },
            template: TaskTemplate {
                title: "Classify {{count}} bank transactions".to_string(),
                description: "Auto-classification left {{count}} transactions unmatched. \
                              Assign categories or add matching rules."
                    .to_string(),
                action_target: "/finance/transactions?filter=unclassified".to_string(),
                action_label: "Open classification".to_string(),
                impact: Impact::Medium,
                confidence: 0.8,
                effort_hours: 0.5,
            },
        },
        TaskRule {
            id: "products-complete".to_string(),
            trigger: Trigger {
                source: BadgeSource::DraftProducts,
                min_count: 3,
                severity: None,
            },
            template: TaskTemplate {
                title: "Finish {{count}} draft product sheets".to_string(),
                description: "Draft products stay invisible to the sales channels until \
                              published. Complete variants, pricing and images."
                    .to_string(),
                action_target: "/products?status=draft".to_string(),
                action_label: "Open drafts".to_string(),
                impact: Impact::Medium,
                confidence: 0.7,
                effort_hours: 3.0,
            },
        },
        TaskRule {
            id: "consultations-reply".to_string(),
            trigger: Trigger {
                source: BadgeSource::OpenConsultations,
                min_count: 1,
                severity: Some(vec![Severity::Urgent, Severity::Warning]),
            },
            template: TaskTemplate {
                title: "Reply to {{count}} open consultations".to_string(),
                description: "Clients are waiting on an answer. Response time drives \
                              conversion."
                    .to_string(),
                action_target: "/consultations".to_string(),
                action_label: "Open consultations".to_string(),
                impact: Impact::High,
                confidence: 0.75,
                effort_hours: 1.0,
            },
        },
        TaskRule {
            id: "shipments-book".to_string(),
            trigger: Trigger {
                source: BadgeSource::PendingShipments,
                min_count: 1,
                severity: None,
            },
            template: TaskTemplate {
                title: "Book carriers for {{count}} shipments".to_string(),
                description: "Packed orders are waiting for a pickup slot.".to_string(),
                action_target: "/logistics/shipments".to_string(),
                action_label: "Open shipments".to_string(),
                impact: Impact::Medium,
                confidence: 0.8,
                effort_hours: 1.0,
            },
        },
        TaskRule {
            id: "quotes-follow-up".to_string(),
            trigger: Trigger {
                source: BadgeSource::ExpiringQuotes,
                min_count: 1,
                severity: None,
            },
            template: TaskTemplate {
                title: "Follow up {{count}} quotes expiring soon".to_string(),
                description: "Quotes expire within seven days. A follow-up call before \
                              expiry keeps the deal alive."
                    .to_string(),
                action_target: "/finance/quotes?filter=expiring".to_string(),
                action_label: "Open quotes".to_string(),
                impact: Impact::Medium,
                confidence: 0.65,
                effort_hours: 0.75,
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = RuleCatalog::builtin().unwrap();
        assert!(catalog.len() >= 8);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_builtin_ids_are_unique() {
        let catalog = RuleCatalog::builtin().unwrap();
        let mut ids: Vec<&str> = catalog.rules().iter().map(|r| r.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut rules = builtin_rules();
        let dup = rules[0].clone();
        rules.push(dup);
        assert!(RuleCatalog::new(rules).is_err());
    }

    #[test]
    fn test_bad_confidence_rejected() {
        let mut rules = builtin_rules();
        rules[0].template.confidence = -0.2;
        let err = RuleCatalog::new(rules).unwrap_err();
        assert!(err.to_string().contains("stock-restock"));
    }

    #[test]
    fn test_empty_catalog_is_fine() {
        let catalog = RuleCatalog::new(vec![]).unwrap();
        assert!(catalog.is_empty());
    }
}
