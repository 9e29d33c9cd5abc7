//! Gruppen und Zellen: benannte Mengen von Nodes mit gemeinsamem Rahmen.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::node::LayoutNode;

/// Gruppe von Nodes. Zellen sind Gruppen mit eigener Fertigungsverantwortung.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeGroup {
    pub id: u64,
    pub name: String,
    /// Mitglieds-Node-IDs in Einfüge-Reihenfolge
    pub members: IndexSet<u64>,
    /// Zelle statt einfacher Gruppe
    pub is_cell: bool,
}

impl NodeGroup {
    pub fn new(id: u64, name: impl Into<String>, members: impl IntoIterator<Item = u64>) -> Self {
        Self {
            id,
            name: name.into(),
            members: members.into_iter().collect(),
            is_cell: false,
        }
    }

    /// Rahmen um alle existierenden Mitglieder plus Innenabstand.
    ///
    /// `None`, wenn kein Mitglied (mehr) existiert.
    pub fn bounds(&self, nodes: &IndexMap<u64, LayoutNode>, padding: f32) -> Option<Rect> {
        self.members
            .iter()
            .filter_map(|id| nodes.get(id))
            .map(|node| node.bounds)
            .reduce(|acc, r| acc.union(&r))
            .map(|r| r.expand(padding))
    }

    /// Entfernt einen Node aus der Gruppe. Gibt `true` zurück, wenn er Mitglied war.
    pub fn remove_member(&mut self, node_id: u64) -> bool {
        self.members.shift_remove(&node_id)
    }
}
