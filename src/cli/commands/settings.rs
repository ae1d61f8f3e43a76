use crate::cli::commands::{audit, open_tracker, print_status};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::units::{parse_amount, to_display_unit};
use crate::errors::AppResult;
use crate::models::Unit;
use crate::ui::messages::{header, success, warning};
use crate::utils::formatting::pad_right;

/// Without options: show the settings form. With any option: save it.
///
/// Options left out keep their current amount, re-expressed in the selected
/// unit.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Settings {
        unit,
        goal,
        increment,
    } = cmd
    {
        let mut tracker = open_tracker(cfg)?;

        if unit.is_none() && goal.is_none() && increment.is_none() {
            let view = tracker.settings_view();
            header("Settings");
            println!("{} {}", pad_right("Unit:", 11), view.unit);
            println!("{} {} {}", pad_right("Goal:", 11), view.goal, view.unit);
            println!("{} {} {}", pad_right("Increment:", 11), view.increment, view.unit);
            return Ok(());
        }

        let current = *tracker.settings();
        let new_unit = match unit {
            Some(u) => u.parse::<Unit>()?,
            None => current.unit,
        };

        let goal_value = goal
            .as_deref()
            .map(parse_amount)
            .unwrap_or_else(|| to_display_unit(current.goal_ml, new_unit));
        let increment_value = increment
            .as_deref()
            .map(parse_amount)
            .unwrap_or_else(|| to_display_unit(current.increment_ml, new_unit));

        let reset = tracker.apply_settings(new_unit, goal_value, increment_value);

        let saved = *tracker.settings();
        audit(
            &tracker,
            "settings",
            new_unit.label(),
            &format!(
                "goal {} ml, increment {} ml{}",
                saved.goal_ml,
                saved.increment_ml,
                if reset { ", total reset" } else { "" }
            ),
        );

        success("Settings saved");
        if reset {
            warning("Unit changed: today's total was reset to 0");
        }
        print_status(&tracker);
    }

    Ok(())
}
