//! Intake state holder.
//!
//! `Tracker` owns the settings and the history log together with the store
//! they are mirrored into. Every mutation persists explicitly; the save
//! results are dropped on purpose (see [`crate::db::persist`]).

use crate::core::units;
use crate::db::persist;
use crate::db::store::KvStore;
use crate::models::{History, HistoryRecord, Settings, SettingsView, Unit};
use chrono::NaiveDate;

pub struct Tracker<S: KvStore> {
    settings: Settings,
    history: History,
    store: S,
}

impl<S: KvStore> Tracker<S> {
    /// Load settings (merged over defaults) and history from `store`.
    pub fn load(store: S) -> Self {
        let settings = persist::load_settings(&store, Settings::default());
        let history = History::from_records(persist::load_history(&store));
        Self {
            settings,
            history,
            store,
        }
    }

    /// Re-read settings and history. Other processes write to the same
    /// store, so long-running callers refresh before acting on the state.
    pub fn reload(&mut self) {
        self.settings = persist::load_settings(&self.store, Settings::default());
        self.history = History::from_records(persist::load_history(&self.store));
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Add one increment to today's total.
    pub fn increment(&mut self) -> u32 {
        self.settings.current_ml = self
            .settings
            .current_ml
            .saturating_add(self.settings.increment_ml);
        self.persist_settings();
        self.settings.current_ml
    }

    /// Remove one increment from today's total, stopping at zero.
    pub fn decrement(&mut self) -> u32 {
        self.settings.current_ml = self
            .settings
            .current_ml
            .saturating_sub(self.settings.increment_ml);
        self.persist_settings();
        self.settings.current_ml
    }

    /// Save the settings form. Values are in `unit`.
    ///
    /// Switching to a different unit starts a fresh tracking context: today's
    /// total is reset to 0 rather than converted. Returns true when that
    /// reset happened.
    pub fn apply_settings(&mut self, unit: Unit, goal: f64, increment: f64) -> bool {
        let unit_changed = unit != self.settings.unit;

        self.settings.unit = unit;
        self.settings.goal_ml = units::to_milliliters(goal, unit);
        self.settings.increment_ml = units::to_milliliters(increment, unit).max(1);
        if unit_changed {
            self.settings.current_ml = 0;
        }

        self.persist_settings();
        unit_changed
    }

    /// Move today's total into the history under `date` and start over at 0.
    pub(crate) fn archive(&mut self, date: NaiveDate) -> HistoryRecord {
        let record = HistoryRecord {
            date,
            total_ml: self.settings.current_ml,
        };
        self.history.append(record);
        self.persist_history();

        self.settings.current_ml = 0;
        self.persist_settings();
        record
    }

    pub(crate) fn mark_seen(&mut self, date: NaiveDate) {
        if let Err(e) = persist::save_last_seen(&mut self.store, date) {
            log::debug!("last-seen date not saved: {}", e);
        }
    }

    pub(crate) fn last_seen(&self) -> Option<NaiveDate> {
        persist::load_last_seen(&self.store)
    }

    fn persist_settings(&mut self) {
        if let Err(e) = persist::save_settings(&mut self.store, &self.settings) {
            log::debug!("settings not saved: {}", e);
        }
    }

    fn persist_history(&mut self) {
        if let Err(e) = persist::save_history(&mut self.store, self.history.records()) {
            log::debug!("history not saved: {}", e);
        }
    }

    /// Share of the goal reached, in [0, 1]. A zero goal counts as empty.
    pub fn fill_fraction(&self) -> f64 {
        fill_fraction(self.settings.current_ml, self.settings.goal_ml)
    }

    pub fn percent(&self) -> u32 {
        percent(self.settings.current_ml, self.settings.goal_ml)
    }

    /// e.g. `1.5 liters`
    pub fn summary_line(&self) -> String {
        format!(
            "{} {}",
            units::format_ml(self.settings.current_ml, self.settings.unit),
            self.settings.unit
        )
    }

    /// e.g. `75% of your goal`
    pub fn progress_line(&self) -> String {
        format!("{}% of your goal", self.percent())
    }

    pub fn settings_view(&self) -> SettingsView {
        let unit = self.settings.unit;
        SettingsView {
            unit,
            goal: units::format_ml(self.settings.goal_ml, unit),
            increment: units::format_ml(self.settings.increment_ml, unit),
        }
    }
}

pub fn fill_fraction(total_ml: u32, goal_ml: u32) -> f64 {
    if goal_ml == 0 {
        return 0.0;
    }
    (f64::from(total_ml) / f64::from(goal_ml)).clamp(0.0, 1.0)
}

pub fn percent(total_ml: u32, goal_ml: u32) -> u32 {
    (fill_fraction(total_ml, goal_ml) * 100.0).round() as u32
}
