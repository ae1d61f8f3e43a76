pub mod chart;
pub mod messages;
pub mod svg;
pub mod tank;
