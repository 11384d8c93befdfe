//! CLI command definitions and handlers.

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use ncenter_core::{seed, CenterConfig, InternalInbox, NotificationCenter};
use std::path::PathBuf;
use tracing::debug;

pub mod inbox;
pub mod list;
pub mod run;
pub mod show;
pub mod stats;

/// Notification Center - browse and triage CRM notifications
#[derive(Parser)]
#[command(name = "ncenter")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true, env = "NCENTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Notification fixture (JSON) to load instead of the bundled one
    #[arg(long, global = true)]
    pub seed: Option<PathBuf>,

    /// Header notification fixture (JSON) to load instead of the bundled one
    #[arg(long, global = true)]
    pub inbox_seed: Option<PathBuf>,

    /// Also append logs to this file
    #[arg(long, global = true)]
    pub log: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List notifications matching the given filters
    List(list::ListArgs),

    /// Show one notification with its audit trail
    Show(show::ShowArgs),

    /// Show notification counts
    Stats(stats::StatsArgs),

    /// Apply a script of actions and report the resulting state
    Run(run::RunArgs),

    /// Header notification list
    #[command(subcommand)]
    Inbox(inbox::InboxCommands),
}

/// Everything a command needs to build its in-memory state.
pub struct Session {
    pub config: CenterConfig,
    seed: Option<PathBuf>,
    inbox_seed: Option<PathBuf>,
}

impl Session {
    /// Load the notification center from the configured fixture.
    pub fn center(&self) -> Result<NotificationCenter> {
        let notifications = match &self.seed {
            Some(path) => seed::load_notifications(path)
                .with_context(|| format!("Failed to load notifications from {}", path.display()))?,
            None => seed::notifications()?,
        };
        debug!(count = notifications.len(), "Notification center ready");
        Ok(NotificationCenter::new(notifications, self.config.clone())?)
    }

    /// Load the header list from the configured fixture.
    pub fn inbox(&self) -> Result<InternalInbox> {
        let items = match &self.inbox_seed {
            Some(path) => seed::load_internal_notifications(path).with_context(|| {
                format!("Failed to load internal notifications from {}", path.display())
            })?,
            None => seed::internal_notifications()?,
        };
        Ok(InternalInbox::new(items))
    }
}

impl Cli {
    pub fn execute(self) -> Result<()> {
        let config = CenterConfig::resolve(self.config.as_deref())?;
        debug!(?config, "Configuration resolved");

        let session = Session {
            config,
            seed: self.seed,
            inbox_seed: self.inbox_seed,
        };

        match self.command {
            Commands::List(args) => list::execute(args, &session),
            Commands::Show(args) => show::execute(args, &session),
            Commands::Stats(args) => stats::execute(args, &session),
            Commands::Run(args) => run::execute(args, &session),
            Commands::Inbox(cmd) => inbox::execute(cmd, &session),
        }
    }
}
