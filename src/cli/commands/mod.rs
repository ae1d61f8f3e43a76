pub mod add;
pub mod config;
pub mod history;
pub mod init;
pub mod log;
pub mod settings;
pub mod stats;
pub mod status;
pub mod sub;
pub mod watch;
pub mod wave;

use crate::config::Config;
use crate::core::rollover::{RolloverOutcome, rollover_on_load};
use crate::core::tracker::Tracker;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::utils::colors::{color_for_percent, paint};
use crate::utils::date;
use std::fs;

/// Open the configured store, load the tracker and run the startup
/// rollover check. Every tracker command goes through here.
pub fn open_tracker(cfg: &Config) -> AppResult<Tracker<SqliteStore>> {
    let path = cfg.database_path();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let store = SqliteStore::open(&path.to_string_lossy())?;
    let mut tracker = Tracker::load(store);

    if let RolloverOutcome::Archived(rec) = rollover_on_load(&mut tracker, date::today()) {
        audit(
            &tracker,
            "rollover",
            &date::date_key(rec.date),
            &format!("archived {} ml on load", rec.total_ml),
        );
    }

    Ok(tracker)
}

/// Write to the internal log table; failures are not fatal.
pub fn audit(tracker: &Tracker<SqliteStore>, operation: &str, target: &str, message: &str) {
    if let Err(e) = crate::db::log::ttlog(&tracker.store().pool().conn, operation, target, message)
    {
        ::log::warn!("failed to write internal log: {}", e);
    }
}

/// Amount and goal progress, colored by progress.
pub fn print_status(tracker: &Tracker<SqliteStore>) {
    let pct = tracker.percent();
    let color = color_for_percent(pct);
    println!("💧 {}", paint(&tracker.summary_line(), color));
    println!("   {}", tracker.progress_line());
}
