//! Application State: zentrale Datenhaltung.

mod app_state;
mod editor;
mod selection;
mod view;

pub use app_state::AppState;
pub use editor::{EditorTool, EditorToolState, NodeTemplate};
pub use selection::SelectionState;
pub use view::{UiState, ViewState};
