use super::SelectionState;
use crate::core::FacilityLayout;
use std::sync::Arc;

/// Snapshot reduziert auf die für Undo/Redo relevanten Teile.
///
/// Nutzt Arc-Clone (Copy-on-Write): Das Erstellen eines Snapshots ist O(1),
/// der teure Layout-Klon findet erst beim nächsten `Arc::make_mut()` statt.
#[derive(Clone)]
pub struct Snapshot {
    /// Layout (Arc-Klon für O(1)-Snapshot)
    pub layout: Arc<FacilityLayout>,
    /// Selektionszustand zum Zeitpunkt des Snapshots
    pub selection: SelectionState,
}

impl std::fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Snapshot")
            .field("nodes", &self.layout.nodes.len())
            .field("selection", &self.selection.selected_ids.len())
            .finish()
    }
}

impl Snapshot {
    /// Erstellt einen O(1)-Snapshot durch Arc-Clone statt Deep-Clone.
    pub fn from_state(state: &crate::app::AppState) -> Self {
        Self {
            layout: Arc::clone(&state.layout),
            selection: state.selection.clone(),
        }
    }

    /// Stellt den Snapshot wieder her (O(1) Arc-Zuweisung).
    pub fn apply_to(self, state: &mut crate::app::AppState) {
        state.layout = self.layout;
        state.selection = self.selection;
    }
}

/// Kennung eines Undo-Eintrags.
///
/// Mehrphasige Operationen (Drag, Gleis-Zug) merken sich die Kennung ihres
/// Begin-Eintrags und verwerfen später nur genau diesen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryMark(u64);

struct UndoEntry {
    mark: HistoryMark,
    snapshot: Snapshot,
}

/// Einfacher Undo/Redo-Manager mit Snapshotting.
#[derive(Default)]
pub struct EditHistory {
    undo_stack: Vec<UndoEntry>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
    next_mark: u64,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth.min(64)),
            redo_stack: Vec::new(),
            max_depth: max_depth.max(1),
            next_mark: 0,
        }
    }

    fn push_undo(&mut self, snapshot: Snapshot) -> HistoryMark {
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.next_mark += 1;
        let mark = HistoryMark(self.next_mark);
        self.undo_stack.push(UndoEntry { mark, snapshot });
        mark
    }

    /// Legt einen fertigen Snapshot ab und verwirft den Redo-Stack.
    pub fn record_snapshot(&mut self, snap: Snapshot) -> HistoryMark {
        let mark = self.push_undo(snap);
        self.redo_stack.clear();
        mark
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Undo-Stack poppen, `current` auf den Redo-Stack legen.
    pub fn pop_undo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let prev = self.undo_stack.pop()?.snapshot;
        if self.redo_stack.len() >= self.max_depth {
            self.redo_stack.remove(0);
        }
        self.redo_stack.push(current);
        Some(prev)
    }

    /// Redo-Stack poppen, `current` auf den Undo-Stack legen.
    pub fn pop_redo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        self.push_undo(current);
        Some(next)
    }

    /// Verwirft den zuletzt aufgezeichneten Eintrag ohne Redo (abgebrochene Operation).
    ///
    /// Nur direkt nach `record_snapshot` in derselben Operation verwenden.
    pub fn discard_last(&mut self) -> Option<Snapshot> {
        self.undo_stack.pop().map(|entry| entry.snapshot)
    }

    /// Verwirft den Eintrag `mark`, sofern er noch oben auf dem Stack liegt.
    ///
    /// Liegt inzwischen ein anderer Eintrag oben (Undo, Löschen, …) oder
    /// wurde `mark` bereits rückgängig gemacht, bleibt die History unverändert.
    pub fn discard_if_last(&mut self, mark: HistoryMark) -> Option<Snapshot> {
        if self.undo_stack.last().is_some_and(|entry| entry.mark == mark) {
            self.discard_last()
        } else {
            None
        }
    }
}
