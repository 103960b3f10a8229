//! Piece module - tetromino geometry and pivot rotation
//!
//! A piece stores its four absolute cells plus a pivot. Every transformation returns
//! a new value; validation against the grid is the caller's job.
//!
//! Rotation is a 90° integer matrix rotation of each cell around the pivot, with no
//! wall kicks. The O piece never rotates.

use crate::types::{Coordinate, PieceKind};

/// Absolute cells of a piece
pub type PieceCells = [Coordinate; 4];

/// A tetromino instance on (or near) the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    cells: PieceCells,
    pivot: Coordinate,
}

const fn c(row: i8, col: i8) -> Coordinate {
    Coordinate::new(row, col)
}

/// Spawn layout for a piece kind: (cells, pivot)
///
/// The pivot is one of the four cells for every kind but O, where it is never used.
pub const fn spawn_layout(kind: PieceKind) -> (PieceCells, Coordinate) {
    match kind {
        PieceKind::I => ([c(0, 5), c(1, 5), c(2, 5), c(3, 5)], c(1, 5)),
        PieceKind::J => ([c(0, 4), c(1, 4), c(2, 4), c(2, 5)], c(1, 4)),
        PieceKind::L => ([c(0, 5), c(1, 5), c(2, 5), c(2, 4)], c(1, 5)),
        PieceKind::T => ([c(0, 4), c(1, 4), c(2, 4), c(1, 5)], c(1, 4)),
        // S and Z pivot on an edge cell, not the centroid.
        PieceKind::S => ([c(1, 5), c(1, 6), c(2, 4), c(2, 5)], c(1, 5)),
        PieceKind::Z => ([c(1, 4), c(1, 5), c(2, 5), c(2, 6)], c(1, 5)),
        PieceKind::O => ([c(0, 4), c(0, 5), c(1, 4), c(1, 5)], c(0, 4)),
    }
}

impl Piece {
    /// Canonical starting piece for `kind`, near the top of the grid
    pub fn spawn(kind: PieceKind) -> Self {
        let (cells, pivot) = spawn_layout(kind);
        Self { kind, cells, pivot }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn cells(&self) -> &PieceCells {
        &self.cells
    }

    pub fn pivot(&self) -> Coordinate {
        self.pivot
    }

    /// Shift every cell and the pivot. Bounds are not checked.
    pub fn translate(&self, d_row: i8, d_col: i8) -> Self {
        Self {
            kind: self.kind,
            cells: self.cells.map(|cell| cell.offset(d_row, d_col)),
            pivot: self.pivot.offset(d_row, d_col),
        }
    }

    /// Rotate 90° clockwise around the pivot: `(dr, dc) -> (dc, -dr)`
    pub fn rotate_cw(&self) -> Self {
        self.rotate_with(|dr, dc| (dc, dr.saturating_neg()))
    }

    /// Rotate 90° counter-clockwise around the pivot: `(dr, dc) -> (-dc, dr)`
    pub fn rotate_ccw(&self) -> Self {
        self.rotate_with(|dr, dc| (dc.saturating_neg(), dr))
    }

    fn rotate_with(&self, f: impl Fn(i8, i8) -> (i8, i8)) -> Self {
        if self.kind == PieceKind::O {
            return *self;
        }
        let pivot = self.pivot;
        let cells = self.cells.map(|cell| {
            let (dr, dc) = f(
                cell.row.saturating_sub(pivot.row),
                cell.col.saturating_sub(pivot.col),
            );
            pivot.offset(dr, dc)
        });
        Self {
            kind: self.kind,
            cells,
            pivot,
        }
    }

    /// Cells sorted, for order-insensitive comparison
    pub fn sorted_cells(&self) -> PieceCells {
        let mut cells = self.cells;
        cells.sort();
        cells
    }
}
