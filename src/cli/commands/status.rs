use crate::cli::commands::{open_tracker, print_status};
use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::formatting::bar;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let tracker = open_tracker(cfg)?;
    print_status(&tracker);
    println!("   {}", bar(tracker.fill_fraction(), 30));
    Ok(())
}
