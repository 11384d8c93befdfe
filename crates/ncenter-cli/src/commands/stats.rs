//! Notification counts.

use anyhow::Result;
use clap::Args;

use super::Session;
use crate::output;

#[derive(Args)]
pub struct StatsArgs {
    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: StatsArgs, session: &Session) -> Result<()> {
    let stats = session.center()?.stats();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        output::print_stats(&stats);
    }

    Ok(())
}
