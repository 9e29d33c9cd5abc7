//! Facility Layout Engine Library.
//! Constraint-Projektion, Hit-Test und Konnektivität eines 2D-Fabrik-Layouts,
//! als Library exportiert für Editor-Shells, Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, EditorTool, EditorToolState, NodeTemplate,
    PointerModifiers, UiState, ViewState,
};
pub use core::{
    FacilityLayout, HitResult, HitTarget, InteractionMode, LayerKind, LayoutNode, NodeKind,
    PathEdge, TransportNetwork,
};
pub use core::{SpatialIndex, SpatialMatch};
pub use shared::EngineOptions;
