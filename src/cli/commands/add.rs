use crate::cli::commands::{open_tracker, print_status};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;

/// Increase today's total by one increment.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Add) {
        let mut tracker = open_tracker(cfg)?;
        tracker.increment();
        print_status(&tracker);
    }
    Ok(())
}
