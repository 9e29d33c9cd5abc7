//! Equipment-Nodes und gerichtete Pfad-Kanten zwischen ihnen.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::terminal::{terminal_position, TerminalRole, TerminalSide};

/// Art eines Equipment-Nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NodeKind {
    /// Materialquelle (kein Eingang)
    Source,
    /// Materialsenke (kein Ausgang)
    Sink,
    #[default]
    Machine,
    Buffer,
    Workstation,
    Inspection,
    Storage,
}

impl NodeKind {
    pub fn has_input(&self) -> bool {
        !matches!(self, NodeKind::Source)
    }

    pub fn has_output(&self) -> bool {
        !matches!(self, NodeKind::Sink)
    }
}

/// Ein Equipment-Node: Rechteck mit deklarierten Terminal-Seiten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutNode {
    /// Stabile Node-ID
    pub id: u64,
    pub name: String,
    pub kind: NodeKind,
    /// Rechteck in Weltkoordinaten
    pub bounds: Rect,
    /// Seite des Eingangs-Terminals
    pub input_side: TerminalSide,
    /// Seite des Ausgangs-Terminals
    pub output_side: TerminalSide,
}

impl LayoutNode {
    /// Erstellt einen Node mit Eingang links und Ausgang rechts.
    pub fn new(id: u64, name: impl Into<String>, kind: NodeKind, bounds: Rect) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            bounds,
            input_side: TerminalSide::Left,
            output_side: TerminalSide::Right,
        }
    }

    /// Setzt die Terminal-Seiten (Builder).
    pub fn with_sides(mut self, input_side: TerminalSide, output_side: TerminalSide) -> Self {
        self.input_side = input_side;
        self.output_side = output_side;
        self
    }

    /// Position des Eingangs-Terminals (`None` bei Quellen).
    pub fn input_terminal(&self, stick_out: f32) -> Option<Vec2> {
        self.kind
            .has_input()
            .then(|| terminal_position(&self.bounds, self.input_side, stick_out))
    }

    /// Position des Ausgangs-Terminals (`None` bei Senken).
    pub fn output_terminal(&self, stick_out: f32) -> Option<Vec2> {
        self.kind
            .has_output()
            .then(|| terminal_position(&self.bounds, self.output_side, stick_out))
    }

    /// Terminal nach Rolle.
    pub fn terminal(&self, role: TerminalRole, stick_out: f32) -> Option<Vec2> {
        match role {
            TerminalRole::Input => self.input_terminal(stick_out),
            TerminalRole::Output => self.output_terminal(stick_out),
        }
    }

    /// Mittelpunkt des Node-Rechtecks.
    pub fn center(&self) -> Vec2 {
        self.bounds.center()
    }
}

/// Gerichtete Kante From → To zwischen zwei Nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathEdge {
    /// Stabile Kanten-ID (manuelle Duplikate sind erlaubt)
    pub id: u64,
    pub from: u64,
    pub to: u64,
    /// Vom externen Router gelieferter Streckenzug (Cache, lazy neu berechnet)
    #[serde(default)]
    pub route: Option<Vec<Vec2>>,
}

impl PathEdge {
    pub fn new(id: u64, from: u64, to: u64) -> Self {
        Self {
            id,
            from,
            to,
            route: None,
        }
    }

    /// Prüft ob die Kante den Node berührt.
    pub fn touches(&self, node_id: u64) -> bool {
        self.from == node_id || self.to == node_id
    }
}
