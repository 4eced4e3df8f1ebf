pub mod history;
pub mod ui;

pub use history::{HistoryEntry, NavigationTrail, SessionHistory};
pub use ui::{NotifyKind, UiState};
