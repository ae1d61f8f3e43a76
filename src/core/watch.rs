//! Cooperative frame loop: wave animation plus the midnight rollover timer.
//!
//! Everything runs on the calling thread. Each iteration re-reads the store,
//! polls the timer, advances the wave clock once, hands the frame to the
//! caller and then sleeps for one frame interval. Re-arming after a rollover
//! is just the next iteration, so a long-running watch keeps constant stack
//! depth.
//!
//! The store is shared with short-lived `add`/`sub` processes, so the loop
//! never trusts its in-memory copy across frames. A midnight that another
//! process already rolled over (its last-seen date is today) is not archived
//! a second time.

use crate::core::clock::Clock;
use crate::core::rollover::{MidnightTimer, rollover_at_midnight};
use crate::core::tracker::Tracker;
use crate::core::wave::{WaveAnimator, WaveFrame};
use crate::db::store::KvStore;
use crate::models::HistoryRecord;
use std::ops::ControlFlow;
use std::time::Duration;

pub struct FrameEvent<'a, S: KvStore> {
    pub index: u64,
    pub tracker: &'a Tracker<S>,
    pub wave: &'a WaveFrame,
    /// Set on the frame right after a midnight rollover.
    pub rollover: Option<HistoryRecord>,
}

pub struct WatchLoop<'c, C: Clock> {
    pub clock: &'c C,
    pub frame_interval: Duration,
    /// Stop after this many frames; `None` runs until the process exits.
    pub max_frames: Option<u64>,
}

impl<C: Clock> WatchLoop<'_, C> {
    /// Run the loop until `max_frames` is reached or the callback breaks.
    /// Returns the number of frames drawn.
    pub fn run<S, F>(&self, tracker: &mut Tracker<S>, animator: &mut WaveAnimator, mut on_frame: F) -> u64
    where
        S: KvStore,
        F: FnMut(FrameEvent<'_, S>) -> ControlFlow<()>,
    {
        let mut timer = MidnightTimer::arm(self.clock.now());
        log::debug!("midnight timer armed for {}", timer.deadline());

        let mut index = 0u64;
        loop {
            if self.max_frames.is_some_and(|max| index >= max) {
                break;
            }

            tracker.reload();

            let now = self.clock.now();
            let rollover = if timer.is_due(now) {
                timer = MidnightTimer::arm(now);
                log::debug!("midnight timer re-armed for {}", timer.deadline());
                if tracker.last_seen() == Some(now.date()) {
                    log::debug!("{} already rolled over by another process", now.date());
                    None
                } else {
                    Some(rollover_at_midnight(tracker, now.date()))
                }
            } else {
                None
            };

            let wave = animator.tick(tracker.fill_fraction());
            let flow = on_frame(FrameEvent {
                index,
                tracker,
                wave: &wave,
                rollover,
            });

            index += 1;
            if flow.is_break() {
                break;
            }
            self.clock.sleep(self.frame_interval);
        }

        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::ManualClock;
    use crate::db::persist;
    use crate::db::store::MemoryStore;
    use crate::models::Settings;
    use chrono::NaiveDate;

    fn tracker(current_ml: u32) -> Tracker<MemoryStore> {
        let mut store = MemoryStore::new();
        persist::save_settings(
            &mut store,
            &Settings {
                current_ml,
                ..Settings::default()
            },
        )
        .unwrap();
        Tracker::load(store)
    }

    #[test]
    fn rollover_fires_once_per_midnight() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        let clock = ManualClock::new(start);
        let mut t = tracker(1200);
        let mut anim = WaveAnimator::default();

        let watch = WatchLoop {
            clock: &clock,
            frame_interval: Duration::from_millis(250),
            max_frames: Some(12),
        };

        let mut rollovers = Vec::new();
        let mut levels = Vec::new();
        let frames = watch.run(&mut t, &mut anim, |ev| {
            if let Some(rec) = ev.rollover {
                rollovers.push((ev.index, rec));
            }
            levels.push(ev.tracker.settings().current_ml);
            ControlFlow::Continue(())
        });

        assert_eq!(frames, 12);
        assert_eq!(rollovers.len(), 1);
        let (index, rec) = rollovers[0];
        // frames at 23:59:59.000/.250/.500/.750 then 00:00:00.000
        assert_eq!(index, 4);
        assert_eq!(rec.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(rec.total_ml, 1200);
        assert_eq!(levels[3], 1200);
        assert_eq!(levels[4], 0);
        assert_eq!(
            persist::load_last_seen(t.store()),
            NaiveDate::from_ymd_opt(2024, 1, 2)
        );
    }

    #[test]
    fn sleeping_past_several_midnights_archives_one_day() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(23, 0, 0)
            .unwrap();
        let clock = ManualClock::new(start);
        let mut t = tracker(800);
        let mut anim = WaveAnimator::default();

        let watch = WatchLoop {
            clock: &clock,
            frame_interval: Duration::from_secs(3 * 24 * 3600),
            max_frames: Some(2),
        };
        watch.run(&mut t, &mut anim, |_| ControlFlow::Continue(()));

        assert_eq!(t.history().len(), 1);
        assert_eq!(
            t.history().records()[0].date,
            NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()
        );
    }

    #[test]
    fn callback_break_stops_unbounded_loop() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let clock = ManualClock::new(start);
        let mut t = tracker(0);
        let mut anim = WaveAnimator::default();

        let watch = WatchLoop {
            clock: &clock,
            frame_interval: Duration::from_millis(16),
            max_frames: None,
        };
        let frames = watch.run(&mut t, &mut anim, |ev| {
            if ev.index == 2 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });

        assert_eq!(frames, 3);
        // no sleep after the breaking frame
        assert_eq!(clock.now(), start + chrono::TimeDelta::milliseconds(32));
    }

    #[test]
    fn midnight_already_rolled_elsewhere_is_not_archived_again() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        let clock = ManualClock::new(start);
        let mut store = MemoryStore::new();
        persist::save_last_seen(&mut store, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()).unwrap();
        persist::save_settings(
            &mut store,
            &Settings {
                current_ml: 250,
                ..Settings::default()
            },
        )
        .unwrap();
        let mut t = Tracker::load(store);
        let mut anim = WaveAnimator::default();

        let watch = WatchLoop {
            clock: &clock,
            frame_interval: Duration::from_secs(1),
            max_frames: Some(3),
        };
        let mut rollovers = 0;
        watch.run(&mut t, &mut anim, |ev| {
            if ev.rollover.is_some() {
                rollovers += 1;
            }
            ControlFlow::Continue(())
        });

        assert_eq!(rollovers, 0);
        assert!(t.history().is_empty());
        assert_eq!(t.settings().current_ml, 250);
    }
}
