//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Konfiguration und Paletten, die von `core` und `app`
//! gleichermaßen gelesen werden.

pub mod options;
mod palette;

pub use options::EngineOptions;
pub use palette::{network_color, NETWORK_PALETTE};
