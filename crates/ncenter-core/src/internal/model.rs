//! Header quick-access notification models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::macros::closed_enum;

closed_enum! {
    /// Visual kind of an internal notification.
    pub enum InternalKind as "internal notification type" {
        Warning => "warning",
        Info => "info",
        Success => "success",
        Task => "task",
        System => "system",
    }
}

closed_enum! {
    pub enum InternalPriority as "internal priority" {
        Low => "low",
        Medium => "medium",
        High => "high",
    }
}

/// An entry of the header notification dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalNotification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: InternalKind,
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_read: bool,
    pub priority: InternalPriority,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_url: Option<String>,
}
