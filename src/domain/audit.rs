// Audit log entries and the raw login records behind the reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::normalize::trim;

/// One audit log entry: who did what, when.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuditLog {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_instant: Option<DateTime<Utc>>,
    pub insert_user: Option<String>,
    pub message: Option<String>,
}

impl AuditLog {
    pub fn new(insert_user: impl Into<String>, message: impl Into<String>) -> Self {
        AuditLog {
            insert_instant: None,
            insert_user: Some(insert_user.into()),
            message: Some(message.into()),
        }
    }

    pub fn normalize(&mut self) {
        trim(&mut self.insert_user);
        trim(&mut self.message);
    }
}

/// One recorded login: which user hit which application from where.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawLogin {
    pub application_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instant: Option<DateTime<Utc>>,
    pub ip_address: Option<String>,
    pub user_id: Option<Uuid>,
}

/// An aggregated count for one reporting interval.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IntervalCount {
    pub application_id: Option<Uuid>,
    pub count: i64,
    /// Interval index: days or months since the epoch depending on the
    /// report that produced it.
    pub interval: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_log_normalize() {
        let mut log = AuditLog::new(" admin@example.com ", "  Deleted user  ");
        log.normalize();
        assert_eq!(log.insert_user.as_deref(), Some("admin@example.com"));
        assert_eq!(log.message.as_deref(), Some("Deleted user"));
    }
}
