use crate::cli::commands::{audit, open_tracker};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::chart::{ChartRenderer, project};
use crate::core::clock::{Clock, SystemClock};
use crate::core::tracker::Tracker;
use crate::core::watch::WatchLoop;
use crate::core::wave::WaveAnimator;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::ui::tank::Tank;
use crate::utils::colors::{color_for_percent, paint};
use crate::utils::date;
use std::io::{self, Write};
use std::ops::ControlFlow;
use std::time::Duration;

use super::stats::renderer_for;

const CLEAR: &str = "\x1b[2J\x1b[H";

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Watch { frames, fps } = cmd {
        let mut tracker = open_tracker(cfg)?;
        let frame_ms = match fps {
            Some(f) if *f > 0 => (1000 / u64::from(*f)).max(1),
            _ => cfg.frame_ms.max(1),
        };

        let clock = SystemClock;
        let watch = WatchLoop {
            clock: &clock,
            frame_interval: Duration::from_millis(frame_ms),
            max_frames: *frames,
        };
        let tank = Tank::new(cfg.tank_width, cfg.tank_height);
        let days = cfg.chart_days.max(1);

        let stdout = io::stdout();
        let mut out = stdout.lock();
        match draw_frames(&watch, &mut tracker, &tank, days, &mut out) {
            Ok(n) => log::debug!("watch stopped after {} frames", n),
            // reader went away (e.g. piped into head)
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                log::debug!("output closed, watch stopped");
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}

/// Draw one full screen per frame into `out`. Stops at the first write error.
fn draw_frames<C: Clock, W: Write>(
    watch: &WatchLoop<'_, C>,
    tracker: &mut Tracker<SqliteStore>,
    tank: &Tank,
    days: usize,
    out: &mut W,
) -> io::Result<u64> {
    let mut animator = WaveAnimator::default();
    let viewbox = animator.viewbox;
    let mut failure = None;

    let frames = watch.run(tracker, &mut animator, |ev| {
        if let Some(rec) = ev.rollover {
            audit(
                ev.tracker,
                "rollover",
                &date::date_key(rec.date),
                &format!("archived {} ml at midnight", rec.total_ml),
            );
        }

        let today = watch.clock.now().date();
        let data = project(today, days, ev.tracker.settings(), ev.tracker.history());

        let mut screen = String::from(CLEAR);
        for line in tank.raster(ev.wave, &viewbox) {
            screen.push_str(&line);
            screen.push('\n');
        }
        let color = color_for_percent(ev.tracker.percent());
        screen.push_str(&format!(
            "\n💧 {}   {}\n\n",
            paint(&ev.tracker.summary_line(), color),
            ev.tracker.progress_line()
        ));
        screen.push_str(&renderer_for(false).render(&data));

        match out.write_all(screen.as_bytes()).and_then(|_| out.flush()) {
            Ok(()) => ControlFlow::Continue(()),
            Err(e) => {
                failure = Some(e);
                ControlFlow::Break(())
            }
        }
    });

    match failure {
        Some(e) => Err(e),
        None => Ok(frames),
    }
}
