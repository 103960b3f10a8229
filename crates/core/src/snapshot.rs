//! Read-only copies of the game for presentation layers.

use serde::{Deserialize, Serialize};

use crate::piece::Piece;
use crate::types::{Cell, Coordinate, PieceKind, Status, GRID_HEIGHT, GRID_WIDTH, STARTING_LEVEL};

pub type GridRows = [[Cell; GRID_WIDTH as usize]; GRID_HEIGHT as usize];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub cells: [Coordinate; 4],
}

impl From<&Piece> for ActiveSnapshot {
    fn from(value: &Piece) -> Self {
        Self {
            kind: value.kind(),
            cells: *value.cells(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Locked cells only; the active piece is reported separately.
    pub grid: GridRows,
    /// `None` once the game is over.
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub level: u32,
    pub lines_toward_next_level: u32,
    pub lines: u32,
    pub gravity_ms: u32,
    pub status: Status,
}

impl GameSnapshot {
    /// Cell as a renderer sees it: locked cells plus the active piece.
    pub fn cell_at(&self, c: Coordinate) -> Cell {
        if let Some(active) = &self.active {
            if active.cells.contains(&c) {
                return Some(active.kind);
            }
        }
        let (row, col) = (usize::try_from(c.row).ok()?, usize::try_from(c.col).ok()?);
        *self.grid.get(row)?.get(col)?
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[None; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
            active: None,
            score: 0,
            level: STARTING_LEVEL,
            lines_toward_next_level: 0,
            lines: 0,
            gravity_ms: 0,
            status: Status::Running,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::GameState;
    use crate::rng::ScriptedPieceSource;
    use crate::GameConfig;

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut state = GameState::with_source(
            GameConfig::default(),
            ScriptedPieceSource::new([PieceKind::T]),
        );
        let snap = state.snapshot();
        state.tick();
        assert_ne!(state.snapshot(), snap);
        assert_eq!(snap.active.unwrap().cells[0], Coordinate::new(0, 4));
    }

    #[test]
    fn test_cell_at_overlays_active_piece() {
        let state = GameState::with_source(
            GameConfig::default(),
            ScriptedPieceSource::new([PieceKind::S]),
        );
        let snap = state.snapshot();
        assert_eq!(snap.cell_at(Coordinate::new(1, 6)), Some(PieceKind::S));
        assert_eq!(snap.cell_at(Coordinate::new(19, 0)), None);
        assert_eq!(snap.cell_at(Coordinate::new(-1, 0)), None);
    }

    #[test]
    fn test_snapshot_serializes_to_json() {
        let state = GameState::with_source(
            GameConfig::default(),
            ScriptedPieceSource::new([PieceKind::I]),
        );
        let json = serde_json::to_value(state.snapshot()).unwrap();
        assert_eq!(json["status"], "running");
        assert_eq!(json["active"]["kind"], "i");
        assert_eq!(json["grid"].as_array().unwrap().len(), 20);
        assert_eq!(json["gravity_ms"], 400);

        let back: GameSnapshot = serde_json::from_value(json).unwrap();
        assert_eq!(back, state.snapshot());
    }
}
