//! Terminal-Seiten und Terminal-Positionen an Node-Rechtecken.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;

/// Seite eines Node-Rechtecks, an der ein Terminal sitzt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TerminalSide {
    Left,
    #[default]
    Right,
    Top,
    Bottom,
    Center,
}

/// Richtung eines Terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerminalRole {
    /// Eingang (Ziel einer Kante)
    Input,
    /// Ausgang (Quelle einer Kante)
    Output,
}

/// Position eines Terminals.
///
/// Seiten-Terminals werden um `stick_out` nach außen versetzt, das
/// Center-Terminal bleibt im Schwerpunkt. Hit-Test und Anziehung müssen
/// denselben `stick_out` verwenden.
pub fn terminal_position(bounds: &Rect, side: TerminalSide, stick_out: f32) -> Vec2 {
    let Vec2 { x, y } = bounds.position;
    let Vec2 { x: w, y: h } = bounds.size;
    match side {
        TerminalSide::Left => Vec2::new(x - stick_out, y + h / 2.0),
        TerminalSide::Right => Vec2::new(x + w + stick_out, y + h / 2.0),
        TerminalSide::Top => Vec2::new(x + w / 2.0, y - stick_out),
        TerminalSide::Bottom => Vec2::new(x + w / 2.0, y + h + stick_out),
        TerminalSide::Center => bounds.center(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> Rect {
        Rect::new(Vec2::new(10.0, 20.0), Vec2::new(40.0, 20.0))
    }

    #[test]
    fn side_positions_without_stick_out() {
        let r = rect();
        assert_eq!(terminal_position(&r, TerminalSide::Left, 0.0), Vec2::new(10.0, 30.0));
        assert_eq!(terminal_position(&r, TerminalSide::Right, 0.0), Vec2::new(50.0, 30.0));
        assert_eq!(terminal_position(&r, TerminalSide::Top, 0.0), Vec2::new(30.0, 20.0));
        assert_eq!(terminal_position(&r, TerminalSide::Bottom, 0.0), Vec2::new(30.0, 40.0));
        assert_eq!(terminal_position(&r, TerminalSide::Center, 0.0), Vec2::new(30.0, 30.0));
    }

    #[test]
    fn stick_out_moves_side_terminals_outward_only() {
        let r = rect();
        assert_eq!(terminal_position(&r, TerminalSide::Left, 12.0), Vec2::new(-2.0, 30.0));
        assert_eq!(terminal_position(&r, TerminalSide::Bottom, 12.0), Vec2::new(30.0, 52.0));
        assert_eq!(
            terminal_position(&r, TerminalSide::Center, 12.0),
            terminal_position(&r, TerminalSide::Center, 0.0)
        );
    }
}
