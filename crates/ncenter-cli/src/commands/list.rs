//! Filtered notification listing.

use anyhow::Result;
use clap::Args;
use ncenter_core::notification::model::{
    Department, Notification, NotificationStatus, NotificationType, Priority,
};
use ncenter_core::{NotificationFilter, Selection, SortOrder};
use tracing::debug;

use super::Session;
use crate::output;

#[derive(Args)]
pub struct ListArgs {
    /// Search title, message and tags (case-insensitive)
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Notification type (system, membership, course, event, invoice, contract, task,
    /// bc_integration, myaccount, smartcon)
    #[arg(long = "type", default_value = "all")]
    pub kind: Selection<NotificationType>,

    /// Department (sales, finance, education, events, support, it, management)
    #[arg(long, default_value = "all")]
    pub department: Selection<Department>,

    /// Status (new, assigned, snoozed, resolved, archived)
    #[arg(long, default_value = "all")]
    pub status: Selection<NotificationStatus>,

    /// Priority (low, medium, high, urgent)
    #[arg(long, default_value = "all")]
    pub priority: Selection<Priority>,

    /// Assignee name
    #[arg(long, default_value = "all")]
    pub assignee: String,

    /// Sort order (original, newest, oldest, priority)
    #[arg(long, default_value = "original")]
    pub sort: SortOrder,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    fn filter(&self) -> NotificationFilter {
        NotificationFilter {
            query: self.query.clone(),
            kind: self.kind.clone(),
            department: self.department.clone(),
            status: self.status.clone(),
            priority: self.priority.clone(),
            assignee: if self.assignee.trim().eq_ignore_ascii_case("all") {
                Selection::All
            } else {
                Selection::Only(self.assignee.clone())
            },
        }
    }
}

pub fn execute(args: ListArgs, session: &Session) -> Result<()> {
    let center = session.center()?;
    let filter = args.filter();
    let view = center.view(&filter, args.sort);
    debug!(?filter, sort = args.sort.as_str(), matched = view.len(), "Filtered view");

    if args.json {
        let records: Vec<&Notification> = view.iter().map(|n| &**n).collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        output::print_notifications_table(&view);
    }

    Ok(())
}
