//! Notification domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::macros::closed_enum;

closed_enum! {
    /// Business area a notification originates from.
    pub enum NotificationType as "notification type" {
        System => "system",
        Membership => "membership",
        Course => "course",
        Event => "event",
        Invoice => "invoice",
        Contract => "contract",
        Task => "task",
        BcIntegration => "bc_integration",
        MyAccount => "myaccount",
        SmartCon => "smartcon",
    }
}

closed_enum! {
    /// System that produced a notification.
    pub enum NotificationSource as "source" {
        Crm => "crm",
        Bc => "bc",
        MyAccount => "myaccount",
        SmartCon => "smartcon",
        Manual => "manual",
    }
}

closed_enum! {
    /// Department responsible for handling a notification.
    pub enum Department as "department" {
        Sales => "sales",
        Finance => "finance",
        Education => "education",
        Events => "events",
        Support => "support",
        It => "it",
        Management => "management",
    }
}

closed_enum! {
    /// Workflow status of a notification.
    pub enum NotificationStatus as "status" {
        New => "new",
        Assigned => "assigned",
        Snoozed => "snoozed",
        Resolved => "resolved",
        Archived => "archived",
    }
}

closed_enum! {
    /// Notification priority, ordered from lowest to highest.
    pub enum Priority as "priority" {
        Low => "low",
        Medium => "medium",
        High => "high",
        Urgent => "urgent",
    }
}

closed_enum! {
    /// Action recorded in an audit entry.
    pub enum AuditAction as "audit action" {
        Created => "created",
        Read => "read",
        Assigned => "assigned",
        Snoozed => "snoozed",
        Resolved => "resolved",
        Archived => "archived",
        Escalated => "escalated",
    }
}

closed_enum! {
    /// Kind of entity a notification refers to.
    pub enum EntityKind as "entity kind" {
        Company => "company",
        Contact => "contact",
        Course => "course",
        Contract => "contract",
        Invoice => "invoice",
    }
}

impl NotificationStatus {
    /// Check whether moving to `to` is a legal workflow step.
    ///
    /// Only consulted under the strict transition policy.
    pub fn can_transition_to(&self, to: &Self) -> bool {
        match (self, to) {
            // Open notifications can go anywhere except back to new
            (Self::New | Self::Assigned | Self::Snoozed, Self::Assigned) => true,
            (Self::New | Self::Assigned | Self::Snoozed, Self::Snoozed) => true,
            (Self::New | Self::Assigned | Self::Snoozed, Self::Resolved) => true,
            (Self::New | Self::Assigned | Self::Snoozed, Self::Archived) => true,
            // Resolved can only be filed away
            (Self::Resolved, Self::Archived) => true,
            _ => false,
        }
    }
}

/// Non-owning reference to a CRM entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedEntity {
    #[serde(rename = "type")]
    pub kind: EntityKind,
    pub id: String,
    pub name: String,
}

/// One entry of a notification's append-only history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub action: AuditAction,
    pub user: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl AuditEntry {
    pub fn new(
        timestamp: DateTime<Utc>,
        action: AuditAction,
        user: &str,
        details: Option<String>,
    ) -> Self {
        Self {
            timestamp,
            action,
            user: user.to_string(),
            details,
        }
    }
}

/// A notification shown in the notification center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub title: String,
    pub message: String,
    pub source: NotificationSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<Department>,
    pub status: NotificationStatus,
    pub priority: Priority,
    #[serde(default)]
    pub read: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escalation_level: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_by: Option<String>,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snooze_until: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_by: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_entity: Option<RelatedEntity>,
    #[serde(default)]
    pub audit_trail: Vec<AuditEntry>,
}

impl Notification {
    /// Case-insensitive search over title, message and tags.
    ///
    /// `needle` must already be lowercased. An empty needle matches everything.
    pub fn matches_query(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }

        self.title.to_lowercase().contains(needle)
            || self.message.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }

    /// Most recent audit entry, if any.
    pub fn last_audit(&self) -> Option<&AuditEntry> {
        self.audit_trail.last()
    }

    /// Current escalation level, treating an absent value as zero.
    pub fn escalation(&self) -> u32 {
        self.escalation_level.unwrap_or(0)
    }
}

impl AsRef<Notification> for Notification {
    fn as_ref(&self) -> &Notification {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotifyError;

    #[test]
    fn test_enum_parse_round_trip() {
        for name in NotificationType::all_variants() {
            let parsed: NotificationType = name.parse().unwrap();
            assert_eq!(parsed.as_str(), *name);
        }
        assert_eq!(" Urgent ".parse::<Priority>().unwrap(), Priority::Urgent);
    }

    #[test]
    fn test_enum_parse_rejects_unknown() {
        let err = "critical".parse::<Priority>().unwrap_err();
        assert!(matches!(err, NotifyError::InvalidValue { field: "priority", .. }));
    }

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::Low < Priority::Medium);
        assert!(Priority::High < Priority::Urgent);
    }

    #[test]
    fn test_strict_transitions() {
        use NotificationStatus::*;
        assert!(New.can_transition_to(&Assigned));
        assert!(Assigned.can_transition_to(&Assigned));
        assert!(Snoozed.can_transition_to(&Resolved));
        assert!(Resolved.can_transition_to(&Archived));
        assert!(!Resolved.can_transition_to(&Assigned));
        assert!(!Archived.can_transition_to(&Archived));
        assert!(!Assigned.can_transition_to(&New));
    }

    #[test]
    fn test_serde_shape() {
        let json = r#"{
            "id": "x",
            "type": "bc_integration",
            "title": "Sync failed",
            "message": "Business Central sync failed",
            "source": "bc",
            "status": "new",
            "priority": "high",
            "timestamp": "2024-01-15T10:30:00Z",
            "assignedTo": "Anna",
            "tags": ["Sync"],
            "relatedEntity": { "type": "company", "id": "c1", "name": "Acme" },
            "auditTrail": [
                { "timestamp": "2024-01-15T10:30:00Z", "action": "created", "user": "System" }
            ]
        }"#;
        let n: Notification = serde_json::from_str(json).unwrap();
        assert_eq!(n.kind, NotificationType::BcIntegration);
        assert_eq!(n.assigned_to.as_deref(), Some("Anna"));
        assert!(!n.read);
        assert_eq!(n.related_entity.as_ref().map(|e| e.kind), Some(EntityKind::Company));

        let back = serde_json::to_value(&n).unwrap();
        assert_eq!(back["type"], "bc_integration");
        assert_eq!(back["assignedTo"], "Anna");
        assert!(back.get("escalationLevel").is_none());
    }

    #[test]
    fn test_matches_query_checks_tags() {
        let json = r#"{
            "id": "x", "type": "task", "title": "Call back", "message": "Customer asked",
            "source": "manual", "status": "new", "priority": "low",
            "timestamp": "2024-01-15T10:30:00Z", "tags": ["VIP-Customer"]
        }"#;
        let n: Notification = serde_json::from_str(json).unwrap();
        assert!(n.matches_query("vip"));
        assert!(n.matches_query("call"));
        assert!(n.matches_query(""));
        assert!(!n.matches_query("invoice"));
    }
}
