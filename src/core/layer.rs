//! Ebenen-Architektur: jede Entity-Art gehört zu genau einer Ebene.

use serde::{Deserialize, Serialize};

/// Die acht Layout-Ebenen (von Infrastruktur bis Personenverkehr).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayerKind {
    /// Wände, Stützen, Kranbahnen
    Infrastructure,
    /// Planungszonen, Korridore
    Spatial,
    /// Maschinen, Puffer, Arbeitsplätze
    Equipment,
    /// Materialfluss-Kanten zwischen Equipment
    LocalFlow,
    /// Fahrerlose Transportsysteme auf Gleisen
    GuidedTransport,
    /// Brücken- und Schwenkkrane
    OverheadTransport,
    /// Stapler und freie Fahrzeuge
    FlexibleTransport,
    /// Fußwege
    Pedestrian,
}

impl LayerKind {
    pub const ALL: [LayerKind; 8] = [
        LayerKind::Infrastructure,
        LayerKind::Spatial,
        LayerKind::Equipment,
        LayerKind::LocalFlow,
        LayerKind::GuidedTransport,
        LayerKind::OverheadTransport,
        LayerKind::FlexibleTransport,
        LayerKind::Pedestrian,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Sichtbarkeit und Sperre einer Ebene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerState {
    pub visible: bool,
    pub locked: bool,
}

impl Default for LayerState {
    fn default() -> Self {
        Self {
            visible: true,
            locked: false,
        }
    }
}

/// Zustand aller Ebenen.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Layers {
    states: [LayerState; 8],
}

impl Layers {
    pub fn state(&self, kind: LayerKind) -> LayerState {
        self.states[kind.index()]
    }

    pub fn is_visible(&self, kind: LayerKind) -> bool {
        self.state(kind).visible
    }

    pub fn is_locked(&self, kind: LayerKind) -> bool {
        self.state(kind).locked
    }

    pub fn set_visible(&mut self, kind: LayerKind, visible: bool) {
        self.states[kind.index()].visible = visible;
    }

    pub fn set_locked(&mut self, kind: LayerKind, locked: bool) {
        self.states[kind.index()].locked = locked;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_layers_start_visible_and_unlocked() {
        let layers = Layers::default();
        for kind in LayerKind::ALL {
            assert!(layers.is_visible(kind));
            assert!(!layers.is_locked(kind));
        }
    }

    #[test]
    fn lock_affects_only_its_layer() {
        let mut layers = Layers::default();
        layers.set_locked(LayerKind::Equipment, true);
        assert!(layers.is_locked(LayerKind::Equipment));
        assert!(!layers.is_locked(LayerKind::LocalFlow));
    }
}
