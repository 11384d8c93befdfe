//! Header notification list commands.

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use super::Session;
use crate::output;
use ncenter_core::InboxAction;

#[derive(Subcommand)]
pub enum InboxCommands {
    /// Show the header notifications
    List,

    /// Mark one notification as read
    Read {
        /// Notification ID
        id: String,
    },

    /// Mark every notification as read
    ReadAll,

    /// Delete one notification
    Delete {
        /// Notification ID
        id: String,
    },

    /// Remove all notifications
    Clear,
}

impl InboxCommands {
    fn action(self) -> Option<InboxAction> {
        match self {
            Self::List => None,
            Self::Read { id } => Some(InboxAction::MarkRead { id }),
            Self::ReadAll => Some(InboxAction::MarkAllRead),
            Self::Delete { id } => Some(InboxAction::Delete { id }),
            Self::Clear => Some(InboxAction::ClearAll),
        }
    }
}

pub fn execute(cmd: InboxCommands, session: &Session) -> Result<()> {
    let mut inbox = session.inbox()?;

    if let Some(action) = cmd.action() {
        let changed = inbox.apply(&action);
        if changed > 0 {
            println!("{} {} ({} changed)", "✓".green().bold(), action, changed);
        } else {
            println!("{} {} (nothing to do)", "·".dimmed(), action);
        }
        println!();
    }

    output::print_inbox(inbox.items());
    Ok(())
}
