use crate::cli::commands::open_tracker;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::wave::{WaveAnimator, WaveClock};
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::ui::svg;
use std::fs;

/// Geometry of animation frame N for the current fill level.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Wave { frame, svg: out } = cmd {
        let tracker = open_tracker(cfg)?;
        let fraction = tracker.fill_fraction();

        let animator = WaveAnimator {
            clock: WaveClock::at_frame(*frame),
            ..WaveAnimator::default()
        };
        let wave = animator.frame(fraction);

        match out {
            Some(path) => {
                fs::write(path, svg::document(&wave, &animator.viewbox))?;
                success(format!("Wave frame {} written to {}", frame, path));
            }
            None => {
                println!("wave1: {}", wave.primary.to_svg_d());
                println!("wave2: {}", wave.secondary.to_svg_d());
            }
        }
    }

    Ok(())
}
