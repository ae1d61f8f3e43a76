//! Day-boundary handling: archive today's total into the history and reset.
//!
//! Two triggers exist. On startup the stored last-seen date is compared with
//! today; while running, a [`MidnightTimer`] fires at the next local midnight
//! and is re-armed by the caller's loop after each rollover.
//!
//! Only one day is archived per trigger. If several midnights pass while the
//! process is suspended (or between two runs), the days in between get no
//! record.

use crate::core::tracker::Tracker;
use crate::db::store::KvStore;
use crate::models::HistoryRecord;
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RolloverOutcome {
    /// No last-seen date stored yet.
    FirstRun,
    SameDay,
    Archived(HistoryRecord),
}

/// Startup check against the stored last-seen date.
pub fn rollover_on_load<S: KvStore>(tracker: &mut Tracker<S>, today: NaiveDate) -> RolloverOutcome {
    let outcome = match tracker.last_seen() {
        Some(last) if last != today => {
            let record = tracker.archive(last);
            log::info!(
                "rollover on load: archived {} ml under {}",
                record.total_ml,
                record.date
            );
            RolloverOutcome::Archived(record)
        }
        Some(_) => RolloverOutcome::SameDay,
        None => RolloverOutcome::FirstRun,
    };

    tracker.mark_seen(today);
    outcome
}

/// Timer-driven rollover: archive under the day before `today`.
pub fn rollover_at_midnight<S: KvStore>(
    tracker: &mut Tracker<S>,
    today: NaiveDate,
) -> HistoryRecord {
    let yesterday = today.pred_opt().unwrap_or(today);
    let record = tracker.archive(yesterday);
    tracker.mark_seen(today);
    log::info!(
        "midnight rollover: archived {} ml under {}",
        record.total_ml,
        record.date
    );
    record
}

/// Milliseconds from `now` to the next local midnight. Exactly at midnight
/// this is a full day, never zero.
pub fn ms_until_next_midnight(now: NaiveDateTime) -> u64 {
    let next = now
        .date()
        .succ_opt()
        .and_then(|d| d.and_hms_opt(0, 0, 0));

    match next {
        Some(midnight) => (midnight - now).num_milliseconds().max(1) as u64,
        None => 24 * 60 * 60 * 1000,
    }
}

/// One-shot deadline at the next local midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MidnightTimer {
    deadline: NaiveDateTime,
}

impl MidnightTimer {
    pub fn arm(now: NaiveDateTime) -> Self {
        let delay = TimeDelta::milliseconds(ms_until_next_midnight(now) as i64);
        Self {
            deadline: now + delay,
        }
    }

    pub fn deadline(&self) -> NaiveDateTime {
        self.deadline
    }

    pub fn remaining_ms(&self, now: NaiveDateTime) -> u64 {
        (self.deadline - now).num_milliseconds().max(0) as u64
    }

    pub fn is_due(&self, now: NaiveDateTime) -> bool {
        now >= self.deadline
    }
}
