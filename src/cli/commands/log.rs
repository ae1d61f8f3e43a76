use crate::cli::commands::open_tracker;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::read_all;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let tracker = open_tracker(cfg)?;
        let entries = read_all(&tracker.store().pool().conn)?;

        if entries.is_empty() {
            info("Internal log is empty.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::right("#", 2),
            Column::left("When", 19),
            Column::left("Operation", 10),
            Column::left("Message", 0),
        ]);
        for e in entries {
            let when = chrono::DateTime::parse_from_rfc3339(&e.date)
                .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or(e.date);
            let op = if e.target.is_empty() {
                e.operation
            } else {
                format!("{} ({})", e.operation, e.target)
            };
            table.add_row(vec![e.id.to_string(), when, op, e.message]);
        }
        println!("📜 Internal log:\n");
        print!("{}", table.render());
    }

    Ok(())
}
