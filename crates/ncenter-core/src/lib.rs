//! Notification Center Core
//!
//! Domain models and view-state logic for the CRM notification center:
//! filtering, audited workflow operations, header statistics and the
//! quick-access internal notification list.

mod macros;

pub mod config;
pub mod error;
pub mod internal;
pub mod notification;
pub mod seed;

pub use config::{CenterConfig, EscalationAudit, TransitionPolicy};
pub use error::{NotifyError, NotifyResult};
pub use internal::{InboxAction, InternalInbox};
pub use notification::filter::{NotificationFilter, Selection, SortOrder};
pub use notification::stats::NotificationStats;
pub use notification::{BulkAction, NotificationAction, NotificationCenter};
