//! Notification center state and its audited operations.

pub mod filter;
pub mod model;
pub mod stats;

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::{CenterConfig, TransitionPolicy};
use crate::error::{NotifyError, NotifyResult};
use filter::{filter_notifications, sort_notifications, NotificationFilter, SortOrder};
use model::{AuditAction, AuditEntry, Notification, NotificationStatus, Priority};
use stats::NotificationStats;

/// Operations that can be applied to a whole selection at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulkAction {
    MarkRead,
    Resolve,
    Archive,
}

impl BulkAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MarkRead => "mark_read",
            Self::Resolve => "resolve",
            Self::Archive => "archive",
        }
    }

    fn change(&self) -> Change<'static> {
        match self {
            Self::MarkRead => Change::MarkRead,
            Self::Resolve => Change::Resolve,
            Self::Archive => Change::Archive,
        }
    }
}

impl FromStr for BulkAction {
    type Err = NotifyError;

    fn from_str(s: &str) -> NotifyResult<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "mark_read" | "read" => Ok(Self::MarkRead),
            "resolve" => Ok(Self::Resolve),
            "archive" => Ok(Self::Archive),
            _ => Err(NotifyError::invalid_value("bulk action", s)),
        }
    }
}

/// A single request against the notification center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum NotificationAction {
    MarkRead { id: String },
    Assign { id: String, assignee: String },
    Escalate { id: String },
    Snooze { id: String, until: DateTime<Utc> },
    Resolve { id: String },
    Archive { id: String },
    Bulk { operation: BulkAction, ids: Vec<String> },
}

impl fmt::Display for NotificationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MarkRead { id } => write!(f, "mark {} as read", id),
            Self::Assign { id, assignee } => write!(f, "assign {} to {}", id, assignee),
            Self::Escalate { id } => write!(f, "escalate {}", id),
            Self::Snooze { id, until } => {
                write!(f, "snooze {} until {}", id, until.format("%Y-%m-%d %H:%M"))
            }
            Self::Resolve { id } => write!(f, "resolve {}", id),
            Self::Archive { id } => write!(f, "archive {}", id),
            Self::Bulk { operation, ids } => {
                write!(f, "bulk {} [{}]", operation.as_str(), ids.join(", "))
            }
        }
    }
}

/// Field changes of one operation, before they are applied.
#[derive(Debug, Clone, Copy)]
enum Change<'a> {
    MarkRead,
    Assign(&'a str),
    Escalate,
    Snooze(DateTime<Utc>),
    Resolve,
    Archive,
}

impl Change<'_> {
    fn label(&self) -> &'static str {
        match self {
            Self::MarkRead => "mark_read",
            Self::Assign(_) => "assign",
            Self::Escalate => "escalate",
            Self::Snooze(_) => "snooze",
            Self::Resolve => "resolve",
            Self::Archive => "archive",
        }
    }

    fn target_status(&self) -> Option<NotificationStatus> {
        match self {
            Self::Assign(_) => Some(NotificationStatus::Assigned),
            Self::Snooze(_) => Some(NotificationStatus::Snoozed),
            Self::Resolve => Some(NotificationStatus::Resolved),
            Self::Archive => Some(NotificationStatus::Archived),
            Self::MarkRead | Self::Escalate => None,
        }
    }
}

/// In-memory notification list plus the operations that change it.
///
/// Records are immutable once stored: an operation replaces the targeted
/// `Arc` with a new record and leaves every other slot untouched, so
/// snapshots taken earlier keep observing the old values.
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    notifications: Vec<Arc<Notification>>,
    config: CenterConfig,
}

impl NotificationCenter {
    /// Build a center over `notifications`.
    ///
    /// Fails when ids repeat or a record's history does not start with a
    /// `created` entry.
    pub fn new(notifications: Vec<Notification>, config: CenterConfig) -> NotifyResult<Self> {
        crate::seed::validate_notifications(&notifications)?;
        Ok(Self {
            notifications: notifications.into_iter().map(Arc::new).collect(),
            config,
        })
    }

    /// Build a center from the bundled fixtures.
    pub fn from_seed(config: CenterConfig) -> NotifyResult<Self> {
        Self::new(crate::seed::notifications()?, config)
    }

    pub fn config(&self) -> &CenterConfig {
        &self.config
    }

    pub fn notifications(&self) -> &[Arc<Notification>] {
        &self.notifications
    }

    /// Cheap copy of the current list.
    pub fn snapshot(&self) -> Vec<Arc<Notification>> {
        self.notifications.clone()
    }

    pub fn get(&self, id: &str) -> Option<&Notification> {
        self.notifications
            .iter()
            .find(|n| n.id == id)
            .map(|n| &**n)
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    /// Records matching `filter`, in list order.
    pub fn filtered(&self, filter: &NotificationFilter) -> Vec<Arc<Notification>> {
        filter_notifications(self.notifications.iter().cloned(), filter)
    }

    /// Filtered records in the requested order.
    pub fn view(&self, filter: &NotificationFilter, order: SortOrder) -> Vec<Arc<Notification>> {
        let mut view = self.filtered(filter);
        sort_notifications(&mut view, order);
        view
    }

    pub fn stats(&self) -> NotificationStats {
        NotificationStats::compute(&self.notifications)
    }

    /// Distinct assignees in first-seen order.
    pub fn assignees(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.notifications
            .iter()
            .filter_map(|n| n.assigned_to.as_deref())
            .filter(|a| !a.trim().is_empty() && seen.insert(*a))
            .map(str::to_string)
            .collect()
    }

    /// Mark a notification as read. Already-read records are left alone.
    pub fn mark_read(&mut self, id: &str) -> NotifyResult<bool> {
        self.update_one(id, Change::MarkRead)
    }

    /// Assign a notification, overwriting any previous assignment.
    pub fn assign(&mut self, id: &str, assignee: &str) -> NotifyResult<bool> {
        self.update_one(id, Change::Assign(assignee))
    }

    /// Raise the escalation level by one and force urgent priority.
    pub fn escalate(&mut self, id: &str) -> NotifyResult<bool> {
        self.update_one(id, Change::Escalate)
    }

    pub fn snooze(&mut self, id: &str, until: DateTime<Utc>) -> NotifyResult<bool> {
        self.update_one(id, Change::Snooze(until))
    }

    pub fn resolve(&mut self, id: &str) -> NotifyResult<bool> {
        self.update_one(id, Change::Resolve)
    }

    pub fn archive(&mut self, id: &str) -> NotifyResult<bool> {
        self.update_one(id, Change::Archive)
    }

    /// Apply one operation to every selected notification.
    ///
    /// Returns how many records changed. Under the strict policy, records
    /// whose transition is not allowed are skipped.
    pub fn bulk<S: AsRef<str>>(&mut self, action: BulkAction, ids: &[S]) -> NotifyResult<usize> {
        let selected: HashSet<&str> = ids.iter().map(|id| id.as_ref()).collect();
        if selected.is_empty() {
            return Ok(0);
        }

        let change = action.change();
        let now = Utc::now();
        let mut applied = 0;

        for slot in self.notifications.iter_mut() {
            if !selected.contains(slot.id.as_str()) {
                continue;
            }
            if let Err(e) = check_transition(self.config.transition_policy, slot, &change) {
                warn!(
                    id = %slot.id,
                    action = change.label(),
                    error = %e,
                    "Skipping notification in bulk action"
                );
                continue;
            }
            match apply_change(&self.config, slot, &change, now) {
                Ok(Some(updated)) => {
                    *slot = Arc::new(updated);
                    applied += 1;
                }
                Ok(None) => {}
                Err(e) => {
                    warn!(id = %slot.id, error = %e, "Skipping notification in bulk action");
                }
            }
        }

        debug!(action = action.as_str(), selected = selected.len(), applied, "Bulk action applied");
        Ok(applied)
    }

    /// Dispatch an action. Returns the number of records that changed.
    pub fn apply(&mut self, action: &NotificationAction) -> NotifyResult<usize> {
        let changed = match action {
            NotificationAction::MarkRead { id } => self.mark_read(id)?,
            NotificationAction::Assign { id, assignee } => self.assign(id, assignee)?,
            NotificationAction::Escalate { id } => self.escalate(id)?,
            NotificationAction::Snooze { id, until } => self.snooze(id, *until)?,
            NotificationAction::Resolve { id } => self.resolve(id)?,
            NotificationAction::Archive { id } => self.archive(id)?,
            NotificationAction::Bulk { operation, ids } => return self.bulk(*operation, ids),
        };
        Ok(usize::from(changed))
    }

    fn update_one(&mut self, id: &str, change: Change<'_>) -> NotifyResult<bool> {
        let Some(slot) = self.notifications.iter_mut().find(|n| n.id == id) else {
            debug!(id = %id, action = change.label(), "No notification with this id");
            return Ok(false);
        };

        check_transition(self.config.transition_policy, slot, &change)?;

        match apply_change(&self.config, slot, &change, Utc::now())? {
            Some(updated) => {
                *slot = Arc::new(updated);
                debug!(id = %id, action = change.label(), "Notification updated");
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

fn check_transition(
    policy: TransitionPolicy,
    current: &Notification,
    change: &Change<'_>,
) -> NotifyResult<()> {
    if policy == TransitionPolicy::Permissive {
        return Ok(());
    }

    match change.target_status() {
        Some(to) if !current.status.can_transition_to(&to) => {
            Err(NotifyError::InvalidStateTransition {
                id: current.id.clone(),
                from: current.status.to_string(),
                to: to.to_string(),
            })
        }
        _ => Ok(()),
    }
}

/// Produce the replacement record, or `None` when the change is a no-op.
fn apply_change(
    config: &CenterConfig,
    current: &Notification,
    change: &Change<'_>,
    now: DateTime<Utc>,
) -> NotifyResult<Option<Notification>> {
    let actor = config.actor.as_str();
    let mut next = current.clone();

    let (action, details) = match *change {
        Change::MarkRead => {
            if current.read {
                return Ok(None);
            }
            next.read = true;
            (AuditAction::Read, "Marked as read".to_string())
        }
        Change::Assign(assignee) => {
            next.status = NotificationStatus::Assigned;
            next.assigned_to = Some(assignee.to_string());
            next.assigned_by = Some(actor.to_string());
            (AuditAction::Assigned, format!("Assigned to {}", assignee))
        }
        Change::Escalate => {
            let level = current.escalation().checked_add(1).ok_or_else(|| {
                NotifyError::validation(format!(
                    "notification '{}' is already at the highest escalation level",
                    current.id
                ))
            })?;
            next.priority = Priority::Urgent;
            next.escalation_level = Some(level);
            (
                config.escalation_action.action(),
                format!("Escalated to level {}", level),
            )
        }
        Change::Snooze(until) => {
            next.status = NotificationStatus::Snoozed;
            next.snooze_until = Some(until);
            (
                AuditAction::Snoozed,
                format!("Snoozed until {}", until.format("%Y-%m-%d %H:%M")),
            )
        }
        Change::Resolve => {
            next.status = NotificationStatus::Resolved;
            next.resolved_at = Some(now);
            next.resolved_by = Some(actor.to_string());
            (AuditAction::Resolved, "Marked as resolved".to_string())
        }
        Change::Archive => {
            next.status = NotificationStatus::Archived;
            (AuditAction::Archived, "Archived".to_string())
        }
    };

    next.audit_trail.push(AuditEntry::new(now, action, actor, Some(details)));
    Ok(Some(next))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EscalationAudit;
    use crate::seed;
    use chrono::Duration;

    fn center() -> NotificationCenter {
        NotificationCenter::from_seed(CenterConfig::default()).unwrap()
    }

    fn strict_center() -> NotificationCenter {
        let config = CenterConfig::default().with_policy(TransitionPolicy::Strict);
        NotificationCenter::from_seed(config).unwrap()
    }

    fn assert_untouched_except(
        before: &[Arc<Notification>],
        after: &[Arc<Notification>],
        changed: &[&str],
    ) {
        assert_eq!(before.len(), after.len());
        for (old, new) in before.iter().zip(after) {
            if changed.contains(&old.id.as_str()) {
                continue;
            }
            assert!(Arc::ptr_eq(old, new), "record {} was replaced", old.id);
            assert_eq!(old, new);
        }
    }

    fn assert_appended_one(before: &Notification, after: &Notification, action: AuditAction) {
        assert_eq!(after.audit_trail.len(), before.audit_trail.len() + 1);
        assert_eq!(&after.audit_trail[..before.audit_trail.len()], &before.audit_trail[..]);
        let last = after.last_audit().unwrap();
        assert_eq!(last.action, action);
        assert_eq!(last.user, "Current User");
    }

    #[test]
    fn test_every_operation_appends_exactly_one_entry() {
        let until = Utc::now() + Duration::hours(4);
        let cases: Vec<(NotificationAction, AuditAction)> = vec![
            (NotificationAction::MarkRead { id: "2".into() }, AuditAction::Read),
            (
                NotificationAction::Assign { id: "2".into(), assignee: "Anna Schmidt".into() },
                AuditAction::Assigned,
            ),
            (NotificationAction::Escalate { id: "2".into() }, AuditAction::Created),
            (NotificationAction::Snooze { id: "2".into(), until }, AuditAction::Snoozed),
            (NotificationAction::Resolve { id: "2".into() }, AuditAction::Resolved),
            (NotificationAction::Archive { id: "2".into() }, AuditAction::Archived),
        ];

        for (action, expected) in cases {
            let mut c = center();
            let before = c.snapshot();
            assert_eq!(c.apply(&action).unwrap(), 1, "{}", action);
            let after = c.snapshot();

            let old = before.iter().find(|n| n.id == "2").unwrap();
            let new = after.iter().find(|n| n.id == "2").unwrap();
            assert_appended_one(old, new, expected);
            assert_untouched_except(&before, &after, &["2"]);
        }
    }

    #[test]
    fn test_assign_then_resolve() {
        let mut c = center();
        let seed = c.get("1").unwrap().clone();
        assert_eq!(seed.status, NotificationStatus::New);
        assert!(seed.assigned_to.is_none());
        assert_eq!(seed.audit_trail.len(), 2);

        assert!(c.assign("1", "Sarah Johnson").unwrap());
        let n = c.get("1").unwrap();
        assert_eq!(n.status, NotificationStatus::Assigned);
        assert_eq!(n.assigned_to.as_deref(), Some("Sarah Johnson"));
        assert_eq!(n.assigned_by.as_deref(), Some("Current User"));
        assert_eq!(n.audit_trail.len(), 3);
        assert_eq!(
            n.last_audit().unwrap().details.as_deref(),
            Some("Assigned to Sarah Johnson")
        );

        assert!(c.resolve("1").unwrap());
        let n = c.get("1").unwrap();
        assert_eq!(n.status, NotificationStatus::Resolved);
        assert!(n.resolved_at.is_some());
        assert_eq!(n.resolved_by.as_deref(), Some("Current User"));
        assert_eq!(n.audit_trail.len(), 4);
        assert_eq!(n.resolved_at, Some(n.last_audit().unwrap().timestamp));
    }

    #[test]
    fn test_bulk_archive() {
        let mut c = center();
        let before = c.snapshot();

        assert_eq!(c.bulk(BulkAction::Archive, &["7", "8"]).unwrap(), 2);
        let after = c.snapshot();

        for id in ["7", "8"] {
            let old = before.iter().find(|n| n.id == id).unwrap();
            let new = after.iter().find(|n| n.id == id).unwrap();
            assert_eq!(new.status, NotificationStatus::Archived);
            assert_appended_one(old, new, AuditAction::Archived);
        }
        assert_untouched_except(&before, &after, &["7", "8"]);
    }

    #[test]
    fn test_bulk_empty_selection_is_noop() {
        let mut c = center();
        let before = c.snapshot();
        let none: [&str; 0] = [];
        assert_eq!(c.bulk(BulkAction::Resolve, &none).unwrap(), 0);
        assert_untouched_except(&before, &c.snapshot(), &[]);
    }

    #[test]
    fn test_bulk_duplicate_ids_apply_once() {
        let mut c = center();
        let before_len = c.get("2").unwrap().audit_trail.len();
        assert_eq!(c.bulk(BulkAction::Resolve, &["2", "2", "missing"]).unwrap(), 1);
        assert_eq!(c.get("2").unwrap().audit_trail.len(), before_len + 1);
    }

    #[test]
    fn test_bulk_mark_read_skips_read_records() {
        let mut c = center();
        let unread_before = c.stats().unread;
        let all_ids: Vec<String> = c.notifications().iter().map(|n| n.id.clone()).collect();

        let applied = c.bulk(BulkAction::MarkRead, &all_ids).unwrap();
        assert_eq!(applied, unread_before);
        assert_eq!(c.stats().unread, 0);
    }

    #[test]
    fn test_escalation_is_monotonic() {
        let mut c = center();
        let start = c.get("4").unwrap().escalation();
        assert_ne!(c.get("4").unwrap().priority, Priority::Urgent);

        for step in 1..=3 {
            assert!(c.escalate("4").unwrap());
            let n = c.get("4").unwrap();
            assert_eq!(n.escalation_level, Some(start + step));
            assert_eq!(n.priority, Priority::Urgent);
            assert_eq!(n.last_audit().unwrap().action, AuditAction::Created);
        }
    }

    #[test]
    fn test_escalation_stops_at_highest_level() {
        let mut records = seed::notifications().unwrap();
        records[0].escalation_level = Some(u32::MAX);
        let mut c = NotificationCenter::new(records, CenterConfig::default()).unwrap();
        let before = c.get("1").unwrap().clone();

        let err = c.escalate("1").unwrap_err();
        assert!(matches!(err, NotifyError::ValidationError(_)));
        assert_eq!(c.get("1").unwrap(), &before);
    }

    #[test]
    fn test_new_rejects_record_without_history() {
        let mut records = seed::notifications().unwrap();
        records[3].audit_trail.clear();
        let err = NotificationCenter::new(records, CenterConfig::default()).unwrap_err();
        assert!(matches!(err, NotifyError::ValidationError(_)));
    }

    #[test]
    fn test_escalation_can_use_dedicated_tag() {
        let config = CenterConfig::default().with_escalation_action(EscalationAudit::Escalated);
        let mut c = NotificationCenter::from_seed(config).unwrap();
        c.escalate("1").unwrap();
        let last = c.get("1").unwrap().last_audit().unwrap().clone();
        assert_eq!(last.action, AuditAction::Escalated);
        assert_eq!(last.details.as_deref(), Some("Escalated to level 2"));
    }

    #[test]
    fn test_mark_read_twice_records_once() {
        let mut c = center();
        assert!(!c.get("1").unwrap().read);
        assert!(c.mark_read("1").unwrap());
        let len = c.get("1").unwrap().audit_trail.len();

        let before = c.snapshot();
        assert!(!c.mark_read("1").unwrap());
        assert_eq!(c.get("1").unwrap().audit_trail.len(), len);
        assert_untouched_except(&before, &c.snapshot(), &[]);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut c = center();
        let before = c.snapshot();
        assert!(!c.assign("404", "Nobody").unwrap());
        assert!(!c.archive("404").unwrap());
        assert_untouched_except(&before, &c.snapshot(), &[]);
    }

    #[test]
    fn test_permissive_allows_rearchiving() {
        let mut c = center();
        assert_eq!(c.get("7").unwrap().status, NotificationStatus::Archived);
        let len = c.get("7").unwrap().audit_trail.len();
        assert!(c.archive("7").unwrap());
        assert_eq!(c.get("7").unwrap().audit_trail.len(), len + 1);
        assert!(c.assign("7", "Sarah Johnson").unwrap());
    }

    #[test]
    fn test_strict_rejects_illegal_transition() {
        let mut c = strict_center();
        let before = c.snapshot();

        let err = c.assign("8", "Sarah Johnson").unwrap_err();
        assert!(matches!(
            err,
            NotifyError::InvalidStateTransition { ref from, ref to, .. }
                if from == "resolved" && to == "assigned"
        ));
        assert!(c.archive("7").is_err());
        assert_untouched_except(&before, &c.snapshot(), &[]);

        // Non-status operations are always allowed
        assert!(c.escalate("7").unwrap());
        assert!(c.archive("8").unwrap());
    }

    #[test]
    fn test_strict_bulk_skips_rejected() {
        let mut c = strict_center();
        assert_eq!(c.bulk(BulkAction::Archive, &["7", "8"]).unwrap(), 1);
        assert_eq!(c.get("8").unwrap().status, NotificationStatus::Archived);
        assert_eq!(c.get("7").unwrap().audit_trail.len(), 3);
    }

    #[test]
    fn test_snooze_sets_deadline() {
        let mut c = center();
        let until = Utc::now() + Duration::days(1);
        assert!(c.snooze("3", until).unwrap());
        let n = c.get("3").unwrap();
        assert_eq!(n.status, NotificationStatus::Snoozed);
        assert_eq!(n.snooze_until, Some(until));
    }

    #[test]
    fn test_stats_track_mutations() {
        let mut c = center();
        let check = |c: &NotificationCenter| {
            let stats = c.stats();
            let all = c.notifications();
            assert_eq!(stats.total, all.len());
            assert_eq!(stats.unread, all.iter().filter(|n| !n.read).count());
            assert_eq!(stats.urgent, all.iter().filter(|n| n.priority == Priority::Urgent).count());
            assert_eq!(
                stats.assigned,
                all.iter().filter(|n| n.status == NotificationStatus::Assigned).count()
            );
            assert_eq!(
                stats.snoozed,
                all.iter().filter(|n| n.status == NotificationStatus::Snoozed).count()
            );
            assert_eq!(
                stats.resolved,
                all.iter().filter(|n| n.status == NotificationStatus::Resolved).count()
            );
        };

        check(&c);
        let assigned = c.stats().assigned;
        c.assign("1", "Sarah Johnson").unwrap();
        check(&c);
        assert_eq!(c.stats().assigned, assigned + 1);
        c.resolve("1").unwrap();
        check(&c);
        c.bulk(BulkAction::Archive, &["7", "8"]).unwrap();
        check(&c);
        c.escalate("10").unwrap();
        check(&c);
    }

    #[test]
    fn test_view_filters_then_sorts() {
        let c = center();
        let filter = NotificationFilter::new().with_query("invoice");
        let view = c.view(&filter, SortOrder::PriorityDesc);
        assert!(!view.is_empty());
        assert!(view.iter().all(|n| filter.matches(n)));
        for pair in view.windows(2) {
            assert!(pair[0].priority >= pair[1].priority);
        }
    }

    #[test]
    fn test_assignees_are_distinct() {
        let c = center();
        let assignees = c.assignees();
        let unique: HashSet<&String> = assignees.iter().collect();
        assert_eq!(unique.len(), assignees.len());
        assert!(assignees.contains(&"Sarah Johnson".to_string()));
    }

    #[test]
    fn test_action_json_shape() {
        let json = r#"[
            {"action": "assign", "id": "1", "assignee": "Sarah Johnson"},
            {"action": "bulk", "operation": "archive", "ids": ["7", "8"]},
            {"action": "snooze", "id": "3", "until": "2030-01-01T09:00:00Z"}
        ]"#;
        let actions: Vec<NotificationAction> = serde_json::from_str(json).unwrap();
        assert_eq!(
            actions[0],
            NotificationAction::Assign { id: "1".into(), assignee: "Sarah Johnson".into() }
        );
        assert!(matches!(
            actions[1],
            NotificationAction::Bulk { operation: BulkAction::Archive, .. }
        ));
        assert_eq!(actions[2].to_string(), "snooze 3 until 2030-01-01 09:00");
    }

    #[test]
    fn test_bulk_action_parse() {
        assert_eq!("mark-read".parse::<BulkAction>().unwrap(), BulkAction::MarkRead);
        assert_eq!("Archive".parse::<BulkAction>().unwrap(), BulkAction::Archive);
        assert!("delete".parse::<BulkAction>().is_err());
    }
}
