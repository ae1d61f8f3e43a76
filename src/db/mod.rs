pub mod initialize;
pub mod log;
pub mod migrate;
pub mod persist;
pub mod pool;
pub mod store;
