//! Badge snapshot loading.
//!
//! Snapshots are JSON arrays of badge counts, written by whatever upstream
//! job polls the per-module counters.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use triage_core::BadgeCount;

pub fn load_badges(path: &Path) -> Result<Vec<BadgeCount>> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let badges: Vec<BadgeCount> =
        serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(badges)
}

#[cfg(test)]
mod tests {
    use triage_core::{BadgeCount, BadgeSource, Severity};

    #[test]
    fn test_snapshot_json_shape() {
        let raw = r#"[
            {"source": "stock", "count": 4, "severity": "urgent"},
            {"source": "overdue-invoices", "count": 2, "severity": "urgent",
             "details": {"total_amount": "EUR 3,420.00"}}
        ]"#;

        let badges: Vec<BadgeCount> = serde_json::from_str(raw).unwrap();
        assert_eq!(badges.len(), 2);
        assert_eq!(badges[0].source, BadgeSource::Stock);
        assert_eq!(badges[1].severity, Severity::Urgent);
        assert_eq!(
            badges[1].details.get("total_amount").map(String::as_str),
            Some("EUR 3,420.00")
        );
    }
}
