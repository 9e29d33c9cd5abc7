//! Handler für Krane, Transport-Netzwerke, Ebenen und Validierung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{HandoffKind, HandoffRule, LayerKind, LegacyTransport};

pub fn create_handoff(
    state: &mut AppState,
    crane_a: u64,
    crane_b: u64,
    kind: HandoffKind,
    rule: HandoffRule,
) {
    use_cases::cranes::create_handoff(state, crane_a, crane_b, kind, rule);
}

pub fn set_crane_zone(state: &mut AppState, crane_id: u64, zone_min: f32, zone_max: f32) {
    use_cases::cranes::set_crane_zone(state, crane_id, zone_min, zone_max);
}

pub fn create_network(state: &mut AppState, name: String) {
    use_cases::transport::create_network(state, name);
}

pub fn select_network(state: &mut AppState, network_id: u64) {
    use_cases::transport::select_network(state, network_id);
}

pub fn import_legacy_transport(state: &mut AppState, legacy: LegacyTransport) {
    use_cases::transport::import_legacy_transport(state, legacy);
}

pub fn set_layer_visible(state: &mut AppState, layer: LayerKind, visible: bool) {
    use_cases::layers::set_layer_visible(state, layer, visible);
}

pub fn set_layer_locked(state: &mut AppState, layer: LayerKind, locked: bool) {
    use_cases::layers::set_layer_locked(state, layer, locked);
}

pub fn validate(state: &mut AppState) {
    use_cases::validation::validate_layout(state);
}
