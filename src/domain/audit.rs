use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{AdminName, AuditAction, AuditEntryId, AuditReason, CategoryLevel};

/// Immutable record of one administrative mutation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub id: AuditEntryId,
    pub admin_name: AdminName,
    pub created_at: DateTime<Utc>,
    pub reason: AuditReason,
    pub action: AuditAction,
    pub level: CategoryLevel,
    /// Dash-joined code of the affected node.
    pub category_code: String,
    /// Names of the affected node's chain joined with ` > `.
    pub category_path: String,
    pub summary: String,
}

/// Data required to append a new [`AuditEntry`]; the store assigns the id and
/// the timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAuditEntry {
    pub admin_name: AdminName,
    pub reason: AuditReason,
    pub action: AuditAction,
    pub summary: String,
}

impl NewAuditEntry {
    /// Stamps the entry with the store-assigned id, commit time and the
    /// affected node.
    pub fn into_entry(
        self,
        id: AuditEntryId,
        created_at: DateTime<Utc>,
        level: CategoryLevel,
        category_code: String,
        category_path: String,
    ) -> AuditEntry {
        AuditEntry {
            id,
            admin_name: self.admin_name,
            created_at,
            reason: self.reason,
            action: self.action,
            level,
            category_code,
            category_path,
            summary: self.summary,
        }
    }
}

/// Orders entries newest first; equal timestamps fall back to the id.
pub fn sort_newest_first(entries: &mut [AuditEntry]) {
    entries.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(id: AuditEntryId, seconds: i64) -> AuditEntry {
        NewAuditEntry {
            admin_name: AdminName::new("Admin").unwrap(),
            reason: AuditReason::new("test").unwrap(),
            action: AuditAction::CategoryStatusUpdated,
            summary: "Category disabled".to_string(),
        }
        .into_entry(
            id,
            Utc.timestamp_opt(seconds, 0).unwrap(),
            CategoryLevel::Main,
            "GL-MOB".to_string(),
            "Mobiles".to_string(),
        )
    }

    #[test]
    fn sorts_by_timestamp_then_id_descending() {
        let first = AuditEntryId::FIRST;
        let second = first.next();
        let third = second.next();
        let mut entries = vec![entry(first, 10), entry(second, 20), entry(third, 20)];

        sort_newest_first(&mut entries);

        let ids: Vec<AuditEntryId> = entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![third, second, first]);
    }
}
