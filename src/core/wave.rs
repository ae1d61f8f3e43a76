//! Liquid-level wave geometry.
//!
//! Each frame yields two closed fill outlines: a sine surface sampled across
//! the viewbox (plus an overscan pad) that drops straight down to the bottom
//! edge at both ends. The only state is the pair of phase accumulators in
//! [`WaveClock`]; [`build_sine_fill`] itself is pure.

use std::f64::consts::{PI, TAU};

pub const VIEWBOX_WIDTH: f64 = 375.0;
pub const VIEWBOX_HEIGHT: f64 = 375.0;

/// Horizontal drift, radians per frame.
pub const H_SPEED: f64 = 0.025;
/// Vertical bob, radians per frame.
pub const BOB_SPEED: f64 = 0.025;
pub const BOB_AMP: f64 = 5.0;
pub const SAMPLE_STEP: f64 = 6.0;
pub const X_PAD: f64 = 16.0;

pub const PRIMARY_LAYER: WaveLayer = WaveLayer {
    amplitude: 8.0,
    wavelength: 140.0,
};
pub const SECONDARY_LAYER: WaveLayer = WaveLayer {
    amplitude: 6.0,
    wavelength: 110.0,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewbox {
    pub width: f64,
    pub height: f64,
    pub sample_step: f64,
    pub x_pad: f64,
}

impl Default for Viewbox {
    fn default() -> Self {
        Self {
            width: VIEWBOX_WIDTH,
            height: VIEWBOX_HEIGHT,
            sample_step: SAMPLE_STEP,
            x_pad: X_PAD,
        }
    }
}

impl Viewbox {
    /// Right edge of the sampled range.
    pub fn max_x(&self) -> f64 {
        self.width + self.x_pad
    }

    /// Resting water line for a fill fraction: 0 → bottom (empty), 1 → top.
    pub fn base_level_y(&self, fraction: f64) -> f64 {
        let f = if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            0.0
        };
        (1.0 - f) * self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveLayer {
    pub amplitude: f64,
    pub wavelength: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Closed fill outline of one wave layer.
#[derive(Debug, Clone, PartialEq)]
pub struct WavePath {
    /// Sine surface, left to right.
    pub surface: Vec<Point>,
    pub water_y: f64,
    pub bottom: f64,
    pub max_x: f64,
}

impl WavePath {
    /// Full polygon: bottom-left, water line at x=0, surface, bottom-right.
    pub fn outline(&self) -> Vec<Point> {
        let mut pts = Vec::with_capacity(self.surface.len() + 3);
        pts.push(Point {
            x: 0.0,
            y: self.bottom,
        });
        pts.push(Point {
            x: 0.0,
            y: self.water_y,
        });
        pts.extend_from_slice(&self.surface);
        pts.push(Point {
            x: self.max_x,
            y: self.bottom,
        });
        pts
    }

    /// SVG path data (`M … L … Z`).
    pub fn to_svg_d(&self) -> String {
        let mut d = String::new();
        for (i, p) in self.outline().iter().enumerate() {
            let cmd = if i == 0 { "M" } else { " L" };
            d.push_str(&format!("{} {} {}", cmd, fmt_coord(p.x), fmt_coord(p.y)));
        }
        d.push_str(" Z");
        d
    }

    /// Surface height at `x`, linearly interpolated between samples.
    pub fn surface_y_at(&self, x: f64) -> f64 {
        let (first, last) = match (self.surface.first(), self.surface.last()) {
            (Some(f), Some(l)) => (f, l),
            _ => return self.water_y,
        };
        if x <= first.x {
            return first.y;
        }
        if x >= last.x {
            return last.y;
        }
        for pair in self.surface.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if x <= b.x {
                let t = if b.x > a.x { (x - a.x) / (b.x - a.x) } else { 0.0 };
                return a.y + (b.y - a.y) * t;
            }
        }
        last.y
    }
}

/// Two decimals, trailing zeros trimmed.
fn fmt_coord(v: f64) -> String {
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

/// Sample one sine layer into a closed fill path.
///
/// `y = water_y + amplitude * sin(2π / wavelength * x + phase)` for
/// `x = 0, step, 2·step, …` up to `width + pad`; a last sample is added at
/// exactly `width + pad` when the stepping does not land on it.
pub fn build_sine_fill(phase: f64, water_y: f64, layer: WaveLayer, viewbox: &Viewbox) -> WavePath {
    let max_x = viewbox.max_x();
    let step = if viewbox.sample_step > 0.0 {
        viewbox.sample_step
    } else {
        max_x.max(1.0)
    };
    let k = if layer.wavelength != 0.0 {
        TAU / layer.wavelength
    } else {
        0.0
    };
    let y_at = |x: f64| water_y + layer.amplitude * (k * x + phase).sin();

    let n = (max_x / step).floor() as usize;
    let mut surface: Vec<Point> = (0..=n)
        .map(|i| {
            let x = i as f64 * step;
            Point { x, y: y_at(x) }
        })
        .collect();

    if surface.last().is_some_and(|p| p.x < max_x) {
        surface.push(Point {
            x: max_x,
            y: y_at(max_x),
        });
    }

    WavePath {
        surface,
        water_y,
        bottom: viewbox.height,
        max_x,
    }
}

/// Phase accumulators advanced once per animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WaveClock {
    /// Horizontal phase, kept in [0, 2π).
    pub phase: f64,
    /// Bob phase; only feeds a sine so it is never wrapped.
    pub bob_phase: f64,
}

impl WaveClock {
    /// Clock state after `frame` calls to [`advance`](Self::advance).
    pub fn at_frame(frame: u64) -> Self {
        let n = frame as f64;
        Self {
            phase: (n * H_SPEED) % TAU,
            bob_phase: n * BOB_SPEED,
        }
    }

    pub fn advance(&mut self) {
        self.phase = (self.phase + H_SPEED) % TAU;
        self.bob_phase += BOB_SPEED;
    }

    pub fn bob_offset(&self, amplitude: f64) -> f64 {
        self.bob_phase.sin() * amplitude
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WaveFrame {
    pub water_y: f64,
    /// Front layer, drawn last.
    pub primary: WavePath,
    /// Back layer, half a turn out of phase.
    pub secondary: WavePath,
}

/// Drives the two wave layers from a fill fraction.
#[derive(Debug, Clone)]
pub struct WaveAnimator {
    pub clock: WaveClock,
    pub viewbox: Viewbox,
    pub primary: WaveLayer,
    pub secondary: WaveLayer,
    pub bob_amplitude: f64,
}

impl Default for WaveAnimator {
    fn default() -> Self {
        Self {
            clock: WaveClock::default(),
            viewbox: Viewbox::default(),
            primary: PRIMARY_LAYER,
            secondary: SECONDARY_LAYER,
            bob_amplitude: BOB_AMP,
        }
    }
}

impl WaveAnimator {
    /// Geometry for the current clock state.
    pub fn frame(&self, fraction: f64) -> WaveFrame {
        let water_y =
            self.viewbox.base_level_y(fraction) + self.clock.bob_offset(self.bob_amplitude);
        let phase = self.clock.phase;

        WaveFrame {
            water_y,
            primary: build_sine_fill(phase, water_y, self.primary, &self.viewbox),
            secondary: build_sine_fill(phase + PI, water_y, self.secondary, &self.viewbox),
        }
    }

    /// Advance one frame, then build its geometry.
    pub fn tick(&mut self, fraction: f64) -> WaveFrame {
        self.clock.advance();
        self.frame(fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_amplitude_is_flat_at_water_line() {
        let vb = Viewbox::default();
        let flat = WaveLayer {
            amplitude: 0.0,
            wavelength: 140.0,
        };
        let path = build_sine_fill(1.234, 120.0, flat, &vb);

        assert!(path.surface.iter().all(|p| p.y == 120.0));
        assert_eq!(path.surface.first().unwrap().x, 0.0);
        assert_eq!(path.surface.last().unwrap().x, vb.max_x());
    }

    #[test]
    fn outline_is_closed_to_the_bottom() {
        let vb = Viewbox::default();
        let path = build_sine_fill(0.0, 100.0, PRIMARY_LAYER, &vb);
        let pts = path.outline();

        assert_eq!(pts.first().unwrap(), &Point { x: 0.0, y: 375.0 });
        assert_eq!(pts[1], Point { x: 0.0, y: 100.0 });
        assert_eq!(pts.last().unwrap(), &Point { x: 391.0, y: 375.0 });
        // 0..=390 by 6 is 66 samples, plus the exact edge at 391
        assert_eq!(path.surface.len(), 67);

        let d = path.to_svg_d();
        assert!(d.starts_with("M 0 375 L 0 100 L 0 100"));
        assert!(d.ends_with("L 391 375 Z"));
    }

    #[test]
    fn samples_follow_the_sine() {
        let vb = Viewbox::default();
        let layer = WaveLayer {
            amplitude: 10.0,
            wavelength: 24.0,
        };
        let path = build_sine_fill(0.0, 50.0, layer, &vb);

        // x = 6 is a quarter wavelength: crest offset +amplitude
        assert!((path.surface[1].y - 60.0).abs() < 1e-9);
        // x = 18 is three quarters: -amplitude
        assert!((path.surface[3].y - 40.0).abs() < 1e-9);
    }

    #[test]
    fn level_maps_fraction_to_height() {
        let vb = Viewbox::default();
        assert_eq!(vb.base_level_y(0.0), 375.0);
        assert_eq!(vb.base_level_y(1.0), 0.0);
        assert_eq!(vb.base_level_y(0.5), 187.5);
        assert_eq!(vb.base_level_y(3.0), 0.0);
        assert_eq!(vb.base_level_y(f64::NAN), 375.0);
    }

    #[test]
    fn horizontal_phase_wraps_within_one_turn() {
        let mut clock = WaveClock::default();
        for _ in 0..10_000 {
            clock.advance();
            assert!((0.0..TAU).contains(&clock.phase));
        }
        assert!((clock.bob_phase - 10_000.0 * BOB_SPEED).abs() < 1e-6);
    }

    #[test]
    fn layers_are_half_a_turn_apart() {
        let mut anim = WaveAnimator {
            secondary: PRIMARY_LAYER,
            ..WaveAnimator::default()
        };
        let frame = anim.tick(0.5);

        for (a, b) in frame.primary.surface.iter().zip(&frame.secondary.surface) {
            let da = a.y - frame.water_y;
            let db = b.y - frame.water_y;
            assert!((da + db).abs() < 1e-9);
        }
    }

    #[test]
    fn bob_moves_the_water_line() {
        let mut anim = WaveAnimator::default();
        let f1 = anim.tick(0.5);
        let expected = 187.5 + (BOB_SPEED).sin() * BOB_AMP;
        assert!((f1.water_y - expected).abs() < 1e-9);
    }

    #[test]
    fn surface_interpolates_between_samples() {
        let path = WavePath {
            surface: vec![Point { x: 0.0, y: 10.0 }, Point { x: 10.0, y: 20.0 }],
            water_y: 15.0,
            bottom: 100.0,
            max_x: 10.0,
        };
        assert_eq!(path.surface_y_at(-5.0), 10.0);
        assert_eq!(path.surface_y_at(5.0), 15.0);
        assert_eq!(path.surface_y_at(50.0), 20.0);
    }

    #[test]
    fn clock_at_frame_matches_stepping() {
        let mut stepped = WaveClock::default();
        for _ in 0..40 {
            stepped.advance();
        }
        let direct = WaveClock::at_frame(40);

        assert!((stepped.phase - direct.phase).abs() < 1e-9);
        assert!((stepped.bob_phase - direct.bob_phase).abs() < 1e-9);
        assert_eq!(WaveClock::at_frame(0), WaveClock::default());
    }

    #[test]
    fn clock_at_huge_frame_stays_in_range() {
        let c = WaveClock::at_frame(u64::MAX);
        assert!(c.phase.is_finite());
        assert!((0.0..TAU).contains(&c.phase));
        assert!(c.bob_offset(BOB_AMP).abs() <= BOB_AMP);
    }
}
