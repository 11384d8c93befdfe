//! Single notification detail.

use anyhow::Result;
use clap::Args;
use ncenter_core::NotifyError;

use super::Session;
use crate::output;

#[derive(Args)]
pub struct ShowArgs {
    /// Notification ID
    pub id: String,
}

pub fn execute(args: ShowArgs, session: &Session) -> Result<()> {
    let center = session.center()?;
    let notification = center
        .get(&args.id)
        .ok_or_else(|| NotifyError::NotificationNotFound(args.id.clone()))?;

    output::print_notification(notification);
    Ok(())
}
