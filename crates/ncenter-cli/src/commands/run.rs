//! Scripted actions against a fresh in-memory session.
//!
//! A script is a JSON array of steps, each addressed to one of the two lists:
//!
//! ```json
//! [
//!   { "notifications": { "action": "assign", "id": "1", "assignee": "Sarah Johnson" } },
//!   { "notifications": { "action": "bulk", "operation": "archive", "ids": ["7", "8"] } },
//!   { "inbox": { "action": "clear_all" } }
//! ]
//! ```
//!
//! Nothing is written back; the final state is printed and discarded.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use ncenter_core::notification::model::Notification;
use ncenter_core::internal::model::InternalNotification;
use ncenter_core::{
    InboxAction, InternalInbox, NotificationAction, NotificationCenter, NotificationStats,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::info;

use super::Session;
use crate::output;

#[derive(Args)]
pub struct RunArgs {
    /// Path to the JSON script
    pub script: PathBuf,

    /// Print the final state as JSON instead of a summary
    #[arg(long)]
    pub export: bool,
}

/// One scripted step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptStep {
    Notifications(NotificationAction),
    Inbox(InboxAction),
}

impl fmt::Display for ScriptStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Notifications(action) => write!(f, "{}", action),
            Self::Inbox(action) => write!(f, "inbox: {}", action),
        }
    }
}

/// Final state printed by `--export`.
#[derive(Serialize)]
struct Export<'a> {
    stats: NotificationStats,
    notifications: Vec<&'a Notification>,
    inbox: &'a [InternalNotification],
}

pub fn parse_script(json: &str) -> Result<Vec<ScriptStep>> {
    serde_json::from_str(json).context("Invalid script")
}

fn load_script(path: &Path) -> Result<Vec<ScriptStep>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    parse_script(&content)
}

/// Apply steps in order. Stops at the first failing step.
///
/// Returns the number of records each step changed.
pub fn apply_steps(
    steps: &[ScriptStep],
    center: &mut NotificationCenter,
    inbox: &mut InternalInbox,
) -> Result<Vec<usize>> {
    let mut changed = Vec::with_capacity(steps.len());

    for (i, step) in steps.iter().enumerate() {
        let count = match step {
            ScriptStep::Notifications(action) => center
                .apply(action)
                .with_context(|| format!("Step {} ({}) failed", i + 1, step))?,
            ScriptStep::Inbox(action) => inbox.apply(action),
        };
        info!(step = i + 1, changed = count, "{}", step);
        changed.push(count);
    }

    Ok(changed)
}

pub fn execute(args: RunArgs, session: &Session) -> Result<()> {
    let steps = load_script(&args.script)?;
    let mut center = session.center()?;
    let mut inbox = session.inbox()?;

    let changed = apply_steps(&steps, &mut center, &mut inbox)?;

    if args.export {
        let export = Export {
            stats: center.stats(),
            notifications: center.notifications().iter().map(|n| &**n).collect(),
            inbox: inbox.items(),
        };
        println!("{}", serde_json::to_string_pretty(&export)?);
        return Ok(());
    }

    for (step, count) in steps.iter().zip(&changed) {
        let mark = if *count > 0 { "✓".green().bold() } else { "·".dimmed() };
        println!("{} {} {}", mark, step, format!("({} changed)", count).dimmed());
    }
    println!();
    output::print_stats(&center.stats());
    println!();
    println!(
        "{} header notification(s), {} unread",
        inbox.len(),
        inbox.unread_count()
    );

    Ok(())
}
