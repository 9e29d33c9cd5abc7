//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod drag;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Layout, Selektion, Werkzeuge).
pub mod state;
pub mod tools;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use drag::{DragKind, DragState};
pub use events::{AppCommand, AppIntent, PointerModifiers};
pub use state::{
    AppState, EditorTool, EditorToolState, NodeTemplate, SelectionState, UiState, ViewState,
};
