//! Bundled fixture data and fixture loading.

use std::collections::HashSet;
use std::path::Path;

use tracing::info;

use crate::error::{NotifyError, NotifyResult};
use crate::internal::model::InternalNotification;
use crate::notification::model::{AuditAction, Notification};

const NOTIFICATIONS_JSON: &str = include_str!("notifications.json");
const INTERNAL_JSON: &str = include_str!("internal.json");

/// The bundled notification center fixture.
pub fn notifications() -> NotifyResult<Vec<Notification>> {
    parse_notifications(NOTIFICATIONS_JSON)
}

/// The bundled header notification fixture.
pub fn internal_notifications() -> NotifyResult<Vec<InternalNotification>> {
    parse_internal(INTERNAL_JSON)
}

/// Load notifications from a JSON file.
pub fn load_notifications(path: &Path) -> NotifyResult<Vec<Notification>> {
    let content = std::fs::read_to_string(path)?;
    let notifications = parse_notifications(&content)?;
    info!(path = %path.display(), count = notifications.len(), "Loaded notification fixture");
    Ok(notifications)
}

/// Load header notifications from a JSON file.
pub fn load_internal_notifications(path: &Path) -> NotifyResult<Vec<InternalNotification>> {
    let content = std::fs::read_to_string(path)?;
    let items = parse_internal(&content)?;
    info!(path = %path.display(), count = items.len(), "Loaded internal notification fixture");
    Ok(items)
}

/// Parse and validate a notification fixture.
///
/// Every record needs a unique id and a history that starts with a
/// `created` entry.
pub fn parse_notifications(json: &str) -> NotifyResult<Vec<Notification>> {
    let notifications: Vec<Notification> = serde_json::from_str(json)?;
    validate_notifications(&notifications)?;
    Ok(notifications)
}

/// Check the id and history invariants of a notification list.
pub fn validate_notifications(notifications: &[Notification]) -> NotifyResult<()> {
    let mut seen = HashSet::new();
    for n in notifications {
        if !seen.insert(n.id.as_str()) {
            return Err(NotifyError::validation(format!(
                "duplicate notification id '{}'",
                n.id
            )));
        }
        match n.audit_trail.first() {
            Some(entry) if entry.action == AuditAction::Created => {}
            Some(_) => {
                return Err(NotifyError::validation(format!(
                    "notification '{}' history must start with a created entry",
                    n.id
                )))
            }
            None => {
                return Err(NotifyError::validation(format!(
                    "notification '{}' has an empty audit trail",
                    n.id
                )))
            }
        }
    }

    Ok(())
}

/// Parse and validate a header notification fixture.
pub fn parse_internal(json: &str) -> NotifyResult<Vec<InternalNotification>> {
    let items: Vec<InternalNotification> = serde_json::from_str(json)?;

    let mut seen = HashSet::new();
    if let Some(dup) = items.iter().find(|n| !seen.insert(n.id.as_str())) {
        return Err(NotifyError::validation(format!(
            "duplicate internal notification id '{}'",
            dup.id
        )));
    }

    Ok(items)
}
