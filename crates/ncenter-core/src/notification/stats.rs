//! Aggregate counts over the notification list.

use serde::{Deserialize, Serialize};

use super::model::{Notification, NotificationStatus, Priority};

/// Counts shown in the notification center header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationStats {
    pub total: usize,
    pub unread: usize,
    pub urgent: usize,
    pub assigned: usize,
    pub snoozed: usize,
    pub resolved: usize,
}

impl NotificationStats {
    /// Recount everything in one pass. Nothing is cached.
    pub fn compute<'a, I, N>(notifications: I) -> Self
    where
        I: IntoIterator<Item = &'a N>,
        N: AsRef<Notification> + 'a,
    {
        notifications
            .into_iter()
            .fold(Self::default(), |mut stats, n| {
                let n = n.as_ref();
                stats.total += 1;
                if !n.read {
                    stats.unread += 1;
                }
                if n.priority == Priority::Urgent {
                    stats.urgent += 1;
                }
                match n.status {
                    NotificationStatus::Assigned => stats.assigned += 1,
                    NotificationStatus::Snoozed => stats.snoozed += 1,
                    NotificationStatus::Resolved => stats.resolved += 1,
                    NotificationStatus::New | NotificationStatus::Archived => {}
                }
                stats
            })
    }
}
