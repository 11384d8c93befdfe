//! Header notification list.
//!
//! Independent of the main notification center: no audit trail and no
//! workflow status, just read flags and removal.

pub mod model;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::NotifyResult;
use model::InternalNotification;

/// A request against the header list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum InboxAction {
    MarkRead { id: String },
    MarkAllRead,
    Delete { id: String },
    ClearAll,
}

impl std::fmt::Display for InboxAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MarkRead { id } => write!(f, "mark {} as read", id),
            Self::MarkAllRead => f.write_str("mark all as read"),
            Self::Delete { id } => write!(f, "delete {}", id),
            Self::ClearAll => f.write_str("clear all"),
        }
    }
}

/// Owned list of header notifications.
#[derive(Debug, Clone, Default)]
pub struct InternalInbox {
    items: Vec<InternalNotification>,
}

impl InternalInbox {
    pub fn new(items: Vec<InternalNotification>) -> Self {
        Self { items }
    }

    /// Build an inbox from the bundled fixtures.
    pub fn from_seed() -> NotifyResult<Self> {
        Ok(Self::new(crate::seed::internal_notifications()?))
    }

    pub fn items(&self) -> &[InternalNotification] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&InternalNotification> {
        self.items.iter().find(|n| n.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.is_read).count()
    }

    /// Returns true when an unread entry was marked.
    pub fn mark_read(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(item) if !item.is_read => {
                item.is_read = true;
                debug!(id = %id, "Internal notification marked as read");
                true
            }
            _ => false,
        }
    }

    /// Returns how many entries changed.
    pub fn mark_all_read(&mut self) -> usize {
        let mut changed = 0;
        for item in self.items.iter_mut().filter(|n| !n.is_read) {
            item.is_read = true;
            changed += 1;
        }
        debug!(changed, "Internal notifications marked as read");
        changed
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        let removed = self.items.len() != before;
        if removed {
            debug!(id = %id, "Internal notification deleted");
        }
        removed
    }

    /// Returns how many entries were removed.
    pub fn clear_all(&mut self) -> usize {
        let removed = self.items.len();
        self.items.clear();
        debug!(removed, "Internal notifications cleared");
        removed
    }

    /// Dispatch an action. Returns the number of entries affected.
    pub fn apply(&mut self, action: &InboxAction) -> usize {
        match action {
            InboxAction::MarkRead { id } => usize::from(self.mark_read(id)),
            InboxAction::MarkAllRead => self.mark_all_read(),
            InboxAction::Delete { id } => usize::from(self.delete(id)),
            InboxAction::ClearAll => self.clear_all(),
        }
    }
}
