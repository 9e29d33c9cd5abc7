//! Terminal-Anziehung: findet kompatible Terminals benachbarter Nodes und
//! verknüpft sie per gerichteter Kante.
//!
//! Zwei Varianten mit eigener Schwelle: beim Platzieren wird der Node auf das
//! nächste Terminal gezogen, nach einem Drag wird nur verknüpft.

use glam::Vec2;

use super::layout::FacilityLayout;

/// Treffer zwischen einem eigenen und einem fremden Terminal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerminalMatch {
    pub other_node: u64,
    pub distance: f32,
    /// Versatz vom eigenen zum fremden Terminal
    pub offset: Vec2,
}

/// Bester Kandidat je Richtung.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AttractionCandidates {
    /// Eigener Eingang ↔ fremder Ausgang (Kante fremd → eigen)
    pub incoming: Option<TerminalMatch>,
    /// Eigener Ausgang ↔ fremder Eingang (Kante eigen → fremd)
    pub outgoing: Option<TerminalMatch>,
}

impl AttractionCandidates {
    /// Kandidat mit dem kleinsten Abstand über beide Richtungen.
    pub fn closest(&self) -> Option<TerminalMatch> {
        [self.incoming, self.outgoing]
            .into_iter()
            .flatten()
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }
}

/// Ergebnis eines Anziehungs-Events.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AutoConnectOutcome {
    /// Verschiebung des Nodes (nur beim Platzieren)
    pub moved_by: Option<Vec2>,
    pub created_edges: Vec<u64>,
    /// Übersprungen, weil die Kante in dieser Richtung schon existiert
    pub skipped_duplicates: usize,
}

/// Sucht je Richtung das nächste kompatible Terminal innerhalb von `threshold`.
pub fn find_candidates(
    layout: &FacilityLayout,
    node_id: u64,
    threshold: f32,
    stick_out: f32,
) -> AttractionCandidates {
    let mut result = AttractionCandidates::default();
    let Some(node) = layout.nodes.get(&node_id) else {
        return result;
    };
    let entry = node.input_terminal(stick_out);
    let exit = node.output_terminal(stick_out);

    for other in layout.nodes.values().filter(|m| m.id != node_id) {
        if let (Some(own), Some(theirs)) = (entry, other.output_terminal(stick_out)) {
            keep_closer(&mut result.incoming, other.id, own, theirs, threshold);
        }
        if let (Some(own), Some(theirs)) = (exit, other.input_terminal(stick_out)) {
            keep_closer(&mut result.outgoing, other.id, own, theirs, threshold);
        }
    }
    result
}

fn keep_closer(
    slot: &mut Option<TerminalMatch>,
    other_node: u64,
    own: Vec2,
    theirs: Vec2,
    threshold: f32,
) {
    let distance = own.distance(theirs);
    if distance > threshold || slot.is_some_and(|m| m.distance <= distance) {
        return;
    }
    *slot = Some(TerminalMatch {
        other_node,
        distance,
        offset: theirs - own,
    });
}

/// Platzierungs-Variante: zieht den Node auf das nächste Terminal und
/// verknüpft beide Richtungen.
pub fn attract_on_placement(
    layout: &mut FacilityLayout,
    node_id: u64,
    threshold: f32,
    stick_out: f32,
) -> AutoConnectOutcome {
    let mut candidates = find_candidates(layout, node_id, threshold, stick_out);
    let mut outcome = AutoConnectOutcome::default();

    if let Some(snap) = candidates.closest() {
        if snap.offset != Vec2::ZERO && layout.translate_node(node_id, snap.offset) {
            layout.clear_routes_touching(node_id);
            outcome.moved_by = Some(snap.offset);
            // Gegenrichtung an der neuen Position neu bestimmen
            candidates = find_candidates(layout, node_id, threshold, stick_out);
        }
    }

    connect_candidates(layout, node_id, &candidates, &mut outcome);
    outcome
}

/// Verknüpfungs-Variante nach einem Drag: erzeugt nur Kanten.
pub fn link_after_drag(
    layout: &mut FacilityLayout,
    node_id: u64,
    threshold: f32,
    stick_out: f32,
) -> AutoConnectOutcome {
    let candidates = find_candidates(layout, node_id, threshold, stick_out);
    let mut outcome = AutoConnectOutcome::default();
    connect_candidates(layout, node_id, &candidates, &mut outcome);
    outcome
}

fn connect_candidates(
    layout: &mut FacilityLayout,
    node_id: u64,
    candidates: &AttractionCandidates,
    outcome: &mut AutoConnectOutcome,
) {
    let pairs = [
        candidates.incoming.map(|m| (m.other_node, node_id)),
        candidates.outgoing.map(|m| (node_id, m.other_node)),
    ];
    for (from, to) in pairs.into_iter().flatten() {
        if layout.has_edge(from, to) {
            outcome.skipped_duplicates += 1;
            continue;
        }
        if let Some(edge_id) = layout.add_edge(from, to) {
            outcome.created_edges.push(edge_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::Rect;
    use crate::core::node::NodeKind;
    use approx::assert_relative_eq;

    const STICK_OUT: f32 = 0.0;

    /// Node mit Höhe 100, sodass die Seiten-Terminals bei y = 50 liegen.
    fn add_node(layout: &mut FacilityLayout, x: f32) -> u64 {
        layout.create_node(
            "M",
            NodeKind::Machine,
            Rect::new(Vec2::new(x, 0.0), Vec2::new(50.0, 100.0)),
        )
    }

    #[test]
    fn forty_pixels_apart_creates_single_edge() {
        let mut layout = FacilityLayout::new();
        // A: Ausgang bei (100, 50); B: Eingang bei (140, 50)
        let a = add_node(&mut layout, 50.0);
        let b = add_node(&mut layout, 140.0);

        let outcome = link_after_drag(&mut layout, b, 40.0, STICK_OUT);

        assert_eq!(outcome.created_edges.len(), 1);
        assert!(layout.has_edge(a, b));
        assert!(!layout.has_edge(b, a));
        assert_eq!(outcome.moved_by, None);
    }

    #[test]
    fn repeated_event_does_not_duplicate_edges() {
        let mut layout = FacilityLayout::new();
        let a = add_node(&mut layout, 50.0);
        let b = add_node(&mut layout, 140.0);

        link_after_drag(&mut layout, b, 40.0, STICK_OUT);
        let second = link_after_drag(&mut layout, b, 40.0, STICK_OUT);

        assert!(second.created_edges.is_empty());
        assert_eq!(second.skipped_duplicates, 1);
        assert_eq!(
            layout
                .edges
                .values()
                .filter(|e| e.from == a && e.to == b)
                .count(),
            1
        );
    }

    #[test]
    fn reverse_edge_is_not_a_duplicate() {
        let mut layout = FacilityLayout::new();
        let a = add_node(&mut layout, 50.0);
        let b = add_node(&mut layout, 140.0);
        layout.add_edge(b, a).expect("Rückkante");

        let outcome = link_after_drag(&mut layout, b, 40.0, STICK_OUT);

        assert_eq!(outcome.created_edges.len(), 1);
        assert!(layout.has_edge(a, b));
    }

    #[test]
    fn beyond_threshold_nothing_happens() {
        let mut layout = FacilityLayout::new();
        add_node(&mut layout, 50.0);
        let b = add_node(&mut layout, 145.0);

        let outcome = link_after_drag(&mut layout, b, 40.0, STICK_OUT);
        assert!(outcome.created_edges.is_empty());
        assert!(layout.edges.is_empty());
    }

    #[test]
    fn only_closest_candidate_per_direction() {
        let mut layout = FacilityLayout::new();
        let far = layout.create_node(
            "Fern",
            NodeKind::Machine,
            Rect::new(Vec2::new(60.0, 20.0), Vec2::new(50.0, 100.0)),
        );
        let near = add_node(&mut layout, 80.0);
        // Node mit Eingang bei (140, 50): `near` hat Ausgang bei (130, 50)
        let target = add_node(&mut layout, 140.0);

        let candidates = find_candidates(&layout, target, 50.0, STICK_OUT);
        let incoming = candidates.incoming.expect("Eingang gefunden");

        assert_eq!(incoming.other_node, near);
        assert_ne!(incoming.other_node, far);
    }

    #[test]
    fn placement_moves_node_onto_closest_terminal() {
        let mut layout = FacilityLayout::new();
        let a = add_node(&mut layout, 50.0);
        let b = layout.create_node(
            "B",
            NodeKind::Machine,
            Rect::new(Vec2::new(130.0, 10.0), Vec2::new(50.0, 100.0)),
        );

        let outcome = attract_on_placement(&mut layout, b, 50.0, STICK_OUT);

        let moved = outcome.moved_by.expect("verschoben");
        assert_relative_eq!(moved.x, -30.0);
        assert_relative_eq!(moved.y, -10.0);
        let input = layout.nodes[&b].input_terminal(STICK_OUT).expect("Eingang");
        assert_eq!(input, Vec2::new(100.0, 50.0));
        assert!(layout.has_edge(a, b));
    }

    #[test]
    fn placement_links_only_terminals_in_reach_after_snap() {
        let mut layout = FacilityLayout::new();
        // A: Ausgang (100, 50); B: Eingang (130, 50), Ausgang (180, 50); C: Eingang (215, 50)
        let a = add_node(&mut layout, 50.0);
        let b = add_node(&mut layout, 130.0);
        let c = add_node(&mut layout, 215.0);

        let outcome = attract_on_placement(&mut layout, b, 40.0, STICK_OUT);

        // Nach dem Sprung auf A liegt C 65 entfernt
        assert_eq!(outcome.moved_by, Some(Vec2::new(-30.0, 0.0)));
        assert_eq!(outcome.created_edges.len(), 1);
        assert!(layout.has_edge(a, b));
        assert!(!layout.has_edge(b, c));
    }

    #[test]
    fn sources_and_sinks_only_match_their_existing_terminals() {
        let mut layout = FacilityLayout::new();
        let sink = layout.create_node(
            "Senke",
            NodeKind::Sink,
            Rect::new(Vec2::new(50.0, 0.0), Vec2::new(50.0, 100.0)),
        );
        let b = add_node(&mut layout, 140.0);

        let candidates = find_candidates(&layout, b, 50.0, STICK_OUT);
        assert!(candidates.incoming.is_none());
        assert!(layout.nodes.contains_key(&sink));
    }
}
