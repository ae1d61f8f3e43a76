//! Persistence adapter: settings, history and last-seen date on top of a
//! [`KvStore`].
//!
//! Reads never fail: a missing key or a malformed payload degrades to the
//! defaults. Writes return a result, but the tracker discards it on purpose;
//! losing a write (e.g. disk full) is accepted and only logged at debug level.

use crate::db::store::KvStore;
use crate::errors::AppResult;
use crate::models::{HistoryRecord, Settings, Unit};
use crate::utils::date::{date_key, parse_date};
use chrono::NaiveDate;
use serde_json::Value;

pub const SETTINGS_KEY: &str = "water_tracker_v3";
pub const HISTORY_KEY: &str = "water_history_ml_v1";
pub const LAST_DATE_KEY: &str = "water_last_date";

/// Round a JSON number into `[min, u32::MAX]`.
fn json_to_ml(v: &Value, min: u32) -> Option<u32> {
    let n = v.as_f64()?.round();
    if !n.is_finite() {
        return None;
    }
    if n >= f64::from(u32::MAX) {
        return Some(u32::MAX);
    }
    Some((n.max(0.0) as u32).max(min))
}

/// Load settings, merging stored fields over `defaults`.
///
/// Only fields that are present and valid overwrite the defaults.
pub fn load_settings<S: KvStore + ?Sized>(store: &S, defaults: Settings) -> Settings {
    let raw = match store.get(SETTINGS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return defaults,
        Err(e) => {
            log::debug!("settings read failed, using defaults: {}", e);
            return defaults;
        }
    };

    let obj = match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Object(map)) => map,
        Ok(_) | Err(_) => {
            log::debug!("settings payload is not an object, using defaults");
            return defaults;
        }
    };

    let mut out = defaults;

    if let Some(unit) = obj.get("unit").and_then(Value::as_str).and_then(Unit::from_label) {
        out.unit = unit;
    }
    if let Some(goal) = obj.get("goalMl").and_then(|v| json_to_ml(v, 0)) {
        out.goal_ml = goal;
    }
    if let Some(inc) = obj.get("incrementMl").and_then(|v| json_to_ml(v, 1)) {
        out.increment_ml = inc;
    }
    if let Some(cur) = obj.get("currentMl").and_then(|v| json_to_ml(v, 0)) {
        out.current_ml = cur;
    }

    out
}

pub fn save_settings<S: KvStore + ?Sized>(store: &mut S, settings: &Settings) -> AppResult<()> {
    let json = serde_json::to_string(settings)?;
    store.set(SETTINGS_KEY, &json)
}

/// Load the history log. Non-array payloads give an empty log; malformed
/// entries are skipped.
pub fn load_history<S: KvStore + ?Sized>(store: &S) -> Vec<HistoryRecord> {
    let raw = match store.get(HISTORY_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            log::debug!("history read failed: {}", e);
            return Vec::new();
        }
    };

    let items = match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Array(items)) => items,
        _ => {
            log::debug!("history payload is not an array, starting empty");
            return Vec::new();
        }
    };

    items
        .iter()
        .filter_map(|item| {
            let date = item
                .get("date")
                .and_then(Value::as_str)
                .and_then(parse_date)?;
            let total_ml = item.get("totalMl").and_then(|v| json_to_ml(v, 0))?;
            Some(HistoryRecord { date, total_ml })
        })
        .collect()
}

pub fn save_history<S: KvStore + ?Sized>(store: &mut S, records: &[HistoryRecord]) -> AppResult<()> {
    let json = serde_json::to_string(records)?;
    store.set(HISTORY_KEY, &json)
}

/// Last day the tracker was known to run. Stored as a bare `YYYY-MM-DD`.
pub fn load_last_seen<S: KvStore + ?Sized>(store: &S) -> Option<NaiveDate> {
    let raw = store.get(LAST_DATE_KEY).ok().flatten()?;
    parse_date(raw.trim().trim_matches('"'))
}

pub fn save_last_seen<S: KvStore + ?Sized>(store: &mut S, date: NaiveDate) -> AppResult<()> {
    store.set(LAST_DATE_KEY, &date_key(date))
}
