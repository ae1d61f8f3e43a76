pub mod history;
pub mod settings;
pub mod unit;

pub use history::{History, HistoryRecord};
pub use settings::{Settings, SettingsView};
pub use unit::Unit;
