use crate::cli::commands::open_tracker;
use crate::config::Config;
use crate::core::units::format_ml;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::date::with_weekday;
use crate::utils::table::{Column, Table};

/// Print the archived log in the order it was written.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let tracker = open_tracker(cfg)?;
    let unit = tracker.settings().unit;

    if tracker.history().is_empty() {
        info("No archived days yet.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::left("Day", 14),
        Column::right(unit.label(), 6),
        Column::right("ml", 6),
    ]);
    for rec in tracker.history().records() {
        table.add_row(vec![
            with_weekday(rec.date),
            format_ml(rec.total_ml, unit),
            rec.total_ml.to_string(),
        ]);
    }
    print!("{}", table.render());
    Ok(())
}
