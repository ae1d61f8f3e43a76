//! Chart surfaces for [`ChartData`].

use crate::core::chart::{ChartData, ChartRenderer};
use crate::core::units;
use crate::models::Unit;
use crate::utils::formatting::{bar, pad_left};

/// Horizontal bars, one per day, scaled to the axis maximum.
pub struct TerminalBarChart {
    pub width: usize,
}

impl Default for TerminalBarChart {
    fn default() -> Self {
        Self { width: 32 }
    }
}

impl TerminalBarChart {
    fn fmt_value(&self, v: f64, unit_label: &str) -> String {
        let unit = Unit::from_label(unit_label).unwrap_or_default();
        units::format(v, unit)
    }
}

impl ChartRenderer for TerminalBarChart {
    fn render(&self, data: &ChartData) -> String {
        let max = if data.y_axis.max > 0.0 { data.y_axis.max } else { 1.0 };
        let label_w = data.labels.iter().map(|l| l.chars().count()).max().unwrap_or(3);

        let mut out = format!(
            "Last {} days ({})\n",
            data.labels.len(),
            data.dataset_name
        );

        for (label, value) in data.labels.iter().zip(&data.values) {
            out.push_str(&format!(
                "{} │{} {}\n",
                pad_left(label, label_w),
                bar(value / max, self.width),
                self.fmt_value(*value, &data.dataset_name)
            ));
        }

        // gridline ticks at every axis step
        let mut ruler: Vec<char> = "─".repeat(self.width + 1).chars().collect();
        let mut scale = String::new();
        let divisions = if data.y_axis.step > 0.0 {
            (max / data.y_axis.step).round() as usize
        } else {
            1
        };
        for i in 0..=divisions {
            let col = (i * self.width) / divisions.max(1);
            if let Some(c) = ruler.get_mut(col) {
                *c = '┼';
            }
            let tick = self.fmt_value(data.y_axis.step * i as f64, &data.dataset_name);
            while scale.chars().count() < col {
                scale.push(' ');
            }
            if !scale.is_empty() && !scale.ends_with(' ') {
                scale.push(' ');
            }
            scale.push_str(&tick);
        }
        out.push_str(&format!(
            "{} └{}\n",
            " ".repeat(label_w),
            ruler.into_iter().skip(1).collect::<String>()
        ));
        out.push_str(&format!("{}  {}\n", " ".repeat(label_w), scale));
        out
    }
}

/// The renderer contract as pretty JSON.
#[derive(Default)]
pub struct JsonChart;

impl ChartRenderer for JsonChart {
    fn render(&self, data: &ChartData) -> String {
        serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string())
    }
}
