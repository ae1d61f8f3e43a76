//! 7-day chart projection.
//!
//! Produces the labelled series and y-axis bounds handed to a
//! [`ChartRenderer`]. Renderers are rebuilt for every refresh.

use crate::core::units;
use crate::models::{History, Settings};
use chrono::{NaiveDate, TimeDelta};
use serde::Serialize;

pub const DEFAULT_DAYS: usize = 7;

/// Number of gridline divisions on the y axis.
const AXIS_DIVISIONS: f64 = 4.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub dataset_name: String,
    pub y_axis: AxisBounds,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

/// External chart surface.
pub trait ChartRenderer {
    fn render(&self, data: &ChartData) -> String;
}

/// The `n` days ending with `today`, oldest first.
pub fn trailing_days(today: NaiveDate, n: usize) -> Vec<NaiveDate> {
    (0..n)
        .rev()
        .filter_map(|back| today.checked_sub_signed(TimeDelta::days(back as i64)))
        .collect()
}

/// Short weekday labels (`Mon`, `Tue`, ...).
pub fn last_n_labels(today: NaiveDate, n: usize) -> Vec<String> {
    trailing_days(today, n)
        .into_iter()
        .map(|d| d.format("%a").to_string())
        .collect()
}

/// Daily totals in the active display unit. Today uses the live total,
/// other days the archived one (0 when missing).
pub fn last_n_values(
    today: NaiveDate,
    n: usize,
    settings: &Settings,
    history: &History,
) -> Vec<f64> {
    let by_date = history.by_date();
    trailing_days(today, n)
        .into_iter()
        .map(|day| {
            let ml = if day == today {
                settings.current_ml
            } else {
                by_date.get(&day).copied().unwrap_or(0)
            };
            units::to_display_unit(ml, settings.unit)
        })
        .collect()
}

/// Axis maximum rounded up so that four gridlines land on round numbers and
/// both the goal and every value stay visible.
pub fn nice_axis_max(goal: f64, values: &[f64]) -> f64 {
    let data_max = values.iter().copied().fold(0.0_f64, f64::max);
    let raw_max = goal.max(data_max).max(1.0);

    let step = raw_max / AXIS_DIVISIONS;
    let pow10 = 10_f64.powi(step.log10().floor() as i32);
    // tolerate float noise such as 5.000000000000001
    let nice_step = ((step / pow10) - 1e-9).ceil() * pow10;

    nice_step * AXIS_DIVISIONS
}

pub fn project(today: NaiveDate, n: usize, settings: &Settings, history: &History) -> ChartData {
    let labels = last_n_labels(today, n);
    let values = last_n_values(today, n, settings, history);
    let goal = units::to_display_unit(settings.goal_ml, settings.unit);
    let max = nice_axis_max(goal, &values);

    ChartData {
        labels,
        values,
        dataset_name: settings.unit.label().to_string(),
        y_axis: AxisBounds {
            min: 0.0,
            max,
            step: max / AXIS_DIVISIONS,
        },
    }
}
