use indexmap::IndexSet;
use std::sync::Arc;

/// Auswahlbezogener Anwendungszustand
///
/// IDs sind layoutweit eindeutig, daher reicht eine Menge für alle Entity-Arten.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    /// Selektierte Entity-IDs in Klick-Reihenfolge (Arc für O(1)-Snapshot)
    pub selected_ids: Arc<IndexSet<u64>>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt eine mutable Referenz auf die Menge zurück (CoW: klont nur wenn nötig).
    #[inline]
    pub fn ids_mut(&mut self) -> &mut IndexSet<u64> {
        Arc::make_mut(&mut self.selected_ids)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.selected_ids.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.selected_ids.is_empty()
    }

    /// Ersetzt die Selektion durch genau eine ID.
    pub fn select_only(&mut self, id: u64) {
        let ids = self.ids_mut();
        ids.clear();
        ids.insert(id);
    }

    pub fn clear(&mut self) {
        if !self.selected_ids.is_empty() {
            self.ids_mut().clear();
        }
    }
}
