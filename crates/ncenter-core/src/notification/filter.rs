//! Filter and sort criteria for notification views.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::model::{Department, Notification, NotificationStatus, NotificationType, Priority};
use crate::error::{NotifyError, NotifyResult};

/// A categorical filter value: either everything or exactly one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: PartialEq> Selection<T> {
    /// Check a required field against the selection.
    pub fn accepts(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == value,
        }
    }

    /// Check an optional field. A concrete selection never matches an absent value.
    pub fn accepts_opt(&self, value: Option<&T>) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => value == Some(expected),
        }
    }
}

impl<T> Selection<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl<T: FromStr<Err = NotifyError>> FromStr for Selection<T> {
    type Err = NotifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(value) => value.fmt(f),
        }
    }
}

/// Combined search and filter criteria. All criteria are joined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationFilter {
    pub query: String,
    #[serde(rename = "type")]
    pub kind: Selection<NotificationType>,
    pub department: Selection<Department>,
    pub status: Selection<NotificationStatus>,
    pub priority: Selection<Priority>,
    pub assignee: Selection<String>,
}

impl NotificationFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_type(mut self, kind: NotificationType) -> Self {
        self.kind = Selection::Only(kind);
        self
    }

    pub fn with_department(mut self, department: Department) -> Self {
        self.department = Selection::Only(department);
        self
    }

    pub fn with_status(mut self, status: NotificationStatus) -> Self {
        self.status = Selection::Only(status);
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Selection::Only(priority);
        self
    }

    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Selection::Only(assignee.into());
        self
    }

    /// True when no criterion narrows the result.
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
            && self.kind.is_all()
            && self.department.is_all()
            && self.status.is_all()
            && self.priority.is_all()
            && self.assignee.is_all()
    }

    /// Evaluate the predicate for a single record.
    pub fn matches(&self, notification: &Notification) -> bool {
        let needle = self.query.to_lowercase();
        self.matches_with_needle(notification, &needle)
    }

    fn matches_with_needle(&self, n: &Notification, needle: &str) -> bool {
        n.matches_query(needle)
            && self.kind.accepts(&n.kind)
            && self.department.accepts_opt(n.department.as_ref())
            && self.status.accepts(&n.status)
            && self.priority.accepts(&n.priority)
            && self.assignee.accepts_opt(n.assigned_to.as_ref())
    }
}

/// Apply a filter, preserving source order.
pub fn filter_notifications<I, N>(notifications: I, filter: &NotificationFilter) -> Vec<N>
where
    I: IntoIterator<Item = N>,
    N: AsRef<Notification>,
{
    let needle = filter.query.to_lowercase();
    notifications
        .into_iter()
        .filter(|n| filter.matches_with_needle(n.as_ref(), &needle))
        .collect()
}

/// Ordering applied to a filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Keep the source order.
    #[default]
    Original,
    NewestFirst,
    OldestFirst,
    /// Highest priority first, newest first within a priority.
    PriorityDesc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::NewestFirst => "newest",
            Self::OldestFirst => "oldest",
            Self::PriorityDesc => "priority",
        }
    }
}

impl FromStr for SortOrder {
    type Err = NotifyError;

    fn from_str(s: &str) -> NotifyResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "original" => Ok(Self::Original),
            "newest" => Ok(Self::NewestFirst),
            "oldest" => Ok(Self::OldestFirst),
            "priority" => Ok(Self::PriorityDesc),
            _ => Err(NotifyError::invalid_value("sort order", s)),
        }
    }
}

/// Stable in-place sort of a view.
pub fn sort_notifications<N: AsRef<Notification>>(view: &mut [N], order: SortOrder) {
    match order {
        SortOrder::Original => {}
        SortOrder::NewestFirst => {
            view.sort_by(|a, b| b.as_ref().timestamp.cmp(&a.as_ref().timestamp));
        }
        SortOrder::OldestFirst => {
            view.sort_by(|a, b| a.as_ref().timestamp.cmp(&b.as_ref().timestamp));
        }
        SortOrder::PriorityDesc => {
            view.sort_by(|a, b| {
                let (a, b) = (a.as_ref(), b.as_ref());
                b.priority
                    .cmp(&a.priority)
                    .then_with(|| b.timestamp.cmp(&a.timestamp))
            });
        }
    }
}
