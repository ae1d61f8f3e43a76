pub mod chart;
pub mod clock;
pub mod config;
pub mod rollover;
pub mod tracker;
pub mod units;
pub mod watch;
pub mod wave;
