/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Goal progress color:
/// 100% → green
/// \>= 50% → cyan
/// \> 0% → yellow
/// 0% → grey
pub fn color_for_percent(pct: u32) -> &'static str {
    match pct {
        100.. => GREEN,
        50..=99 => CYAN,
        1..=49 => YELLOW,
        0 => GREY,
    }
}

/// Wrap `value` with `color` and a reset.
pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
