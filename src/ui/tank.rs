//! Terminal raster of a wave frame.
//!
//! Each cell samples the frame at its center: below the front surface it is
//! water, between the back and front surfaces it is the lighter back layer.

use crate::core::wave::{Viewbox, WaveFrame};

const FRONT: char = '█';
const BACK: char = '▓';
const AIR: char = ' ';
const WALL: char = '│';

pub struct Tank {
    pub cols: usize,
    pub rows: usize,
}

impl Tank {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols: cols.max(1),
            rows: rows.max(1),
        }
    }

    /// Rows of the tank, top first, walled on both sides.
    pub fn raster(&self, frame: &WaveFrame, viewbox: &Viewbox) -> Vec<String> {
        let cell_w = viewbox.width / self.cols as f64;
        let cell_h = viewbox.height / self.rows as f64;

        let columns: Vec<(f64, f64)> = (0..self.cols)
            .map(|c| {
                let x = (c as f64 + 0.5) * cell_w;
                (
                    frame.primary.surface_y_at(x),
                    frame.secondary.surface_y_at(x),
                )
            })
            .collect();

        let mut lines = Vec::with_capacity(self.rows + 1);
        for r in 0..self.rows {
            let y = (r as f64 + 0.5) * cell_h;
            let mut line = String::with_capacity(self.cols + 2);
            line.push(WALL);
            for &(front_y, back_y) in &columns {
                line.push(if y >= front_y {
                    FRONT
                } else if y >= back_y {
                    BACK
                } else {
                    AIR
                });
            }
            line.push(WALL);
            lines.push(line);
        }
        lines.push(format!("└{}┘", "─".repeat(self.cols)));
        lines
    }
}
