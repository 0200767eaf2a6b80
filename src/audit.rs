//! Append-only audit trail for demo drivers
//!
//! An owned value passed into whatever driver needs it, never a process-wide
//! singleton.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct AuditEntry {
    pub action: String,
    pub detail: String,
    /// Unix milliseconds.
    pub timestamp: i64,
}

impl AuditEntry {
    /// `[RFC 3339 time] action: detail`
    pub fn render(&self) -> String {
        let when = DateTime::<Utc>::from_timestamp_millis(self.timestamp)
            .unwrap_or_else(|| Utc::now())
            .to_rfc3339();
        format!("[{}] {}: {}", when, self.action, self.detail)
    }
}

#[derive(Debug, Clone, Default)]
pub struct AuditLog {
    entries: Vec<AuditEntry>,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, action: &str, detail: &str) {
        self.entries.push(AuditEntry {
            action: action.to_string(),
            detail: detail.to_string(),
            timestamp: Utc::now().timestamp_millis(),
        });
    }

    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_kept_in_order() {
        let mut audit = AuditLog::new();
        audit.record("Block sealed", "Block #1 by Alice");
        audit.record("Contract deployed", "NftRegistry by Bob");

        assert_eq!(audit.entries().len(), 2);
        assert_eq!(audit.entries()[0].action, "Block sealed");
        assert_eq!(audit.entries()[1].action, "Contract deployed");
    }

    #[test]
    fn test_render_includes_action_and_detail() {
        let mut audit = AuditLog::new();
        audit.record("Vote cast", "bob voted");
        let line = audit.entries()[0].render();
        assert!(line.contains("Vote cast: bob voted"));
        assert!(line.starts_with('['));
    }
}
