//! Badge snapshot types: per-category counts of outstanding back-office items.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Business category a badge count is sourced from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BadgeSource {
    #[serde(rename = "stock")]
    Stock,
    #[serde(rename = "pending-orders")]
    PendingOrders,
    #[serde(rename = "overdue-invoices")]
    OverdueInvoices,
    #[serde(rename = "unclassified-transactions")]
    UnclassifiedTransactions,
    #[serde(rename = "draft-products")]
    DraftProducts,
    #[serde(rename = "open-consultations")]
    OpenConsultations,
    #[serde(rename = "pending-shipments")]
    PendingShipments,
    #[serde(rename = "expiring-quotes")]
    ExpiringQuotes,
}

impl BadgeSource {
    /// Display label for dashboards and CLI output.
    pub fn label(&self) -> &'static str {
        match self {
            BadgeSource::Stock => "Stock alerts",
            BadgeSource::PendingOrders => "Pending orders",
            BadgeSource::OverdueInvoices => "Overdue invoices",
            BadgeSource::UnclassifiedTransactions => "Unclassified transactions",
            BadgeSource::DraftProducts => "Draft products",
            BadgeSource::OpenConsultations => "Open consultations",
            BadgeSource::PendingShipments => "Pending shipments",
            BadgeSource::ExpiringQuotes => "Expiring quotes",
        }
    }
}

/// How alarming a badge is, as reported by the upstream counter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Severity {
    #[serde(rename = "urgent")]
    Urgent,
    #[serde(rename = "warning")]
    Warning,
    #[serde(rename = "info")]
    Info,
}

/// Count of outstanding items in one category, produced by an external
/// counter on each refresh. Ephemeral: a new snapshot replaces the old one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BadgeCount {
    pub source: BadgeSource,
    pub count: u64,
    pub severity: Severity,
    /// Extra named values available for message interpolation.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub details: BTreeMap<String, String>,
}

impl BadgeCount {
    pub fn new(source: BadgeSource, count: u64, severity: Severity) -> Self {
        Self {
            source,
            count,
            severity,
            details: BTreeMap::new(),
        }
    }

    /// Attach a named detail for template interpolation.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_builder() {
        let badge = BadgeCount::new(BadgeSource::OverdueInvoices, 3, Severity::Urgent)
            .with_detail("total_amount", "EUR 4,210.00");

        assert_eq!(badge.count, 3);
        assert_eq!(
            badge.details.get("total_amount"),
            Some(&"EUR 4,210.00".to_string())
        );
    }

    #[test]
    fn test_source_serde_renames() {
        let json = serde_json::to_string(&BadgeSource::PendingOrders).unwrap();
        assert_eq!(json, "\"pending-orders\"");

        let back: BadgeSource = serde_json::from_str("\"unclassified-transactions\"").unwrap();
        assert_eq!(back, BadgeSource::UnclassifiedTransactions);
    }

    #[test]
    fn test_snapshot_deserializes_without_details() {
        let raw = r#"{"source": "stock", "count": 7, "severity": "warning"}"#;
        let badge: BadgeCount = serde_json::from_str(raw).unwrap();
        assert_eq!(badge.source, BadgeSource::Stock);
        assert!(badge.details.is_empty());
    }
}
