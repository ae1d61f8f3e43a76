use crate::cli::commands::open_tracker;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::chart::{ChartRenderer, project};
use crate::errors::AppResult;
use crate::ui::chart::{JsonChart, TerminalBarChart};
use crate::utils::date;

/// A fresh renderer for every refresh.
pub fn renderer_for(json: bool) -> Box<dyn ChartRenderer> {
    if json {
        Box::new(JsonChart)
    } else {
        Box::new(TerminalBarChart::default())
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { json, days } = cmd {
        let tracker = open_tracker(cfg)?;
        let n = days.unwrap_or(cfg.chart_days).max(1);

        let data = project(date::today(), n, tracker.settings(), tracker.history());
        println!("{}", renderer_for(*json).render(&data));
    }

    Ok(())
}
