//! Use-Cases der Application-Layer-Orchestrierung.

pub mod cranes;
pub mod drag;
pub mod editing;
pub mod layers;
pub mod placement;
pub mod selection;
pub mod transport;
pub mod validation;
pub mod viewport;
pub mod zones;
