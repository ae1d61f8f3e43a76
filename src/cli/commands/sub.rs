use crate::cli::commands::{open_tracker, print_status};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;

/// Decrease today's total by one increment, stopping at zero.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Sub) {
        let mut tracker = open_tracker(cfg)?;
        tracker.decrement();
        print_status(&tracker);
    }
    Ok(())
}
