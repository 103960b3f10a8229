//! Grid module - the locked-cell matrix
//!
//! The grid is a 10x20 matrix where each cell is empty or occupied by the kind of
//! piece that locked there. The falling piece is never stored here until it locks.
//! Uses a flat array for cache locality and zero-allocation.
//! Coordinates: (row, col) where row ranges 0..19 (top to bottom), col ranges 0..9
//! (left to right).

use arrayvec::ArrayVec;

use crate::error::{CoreError, CoreResult};
use crate::types::{Cell, Coordinate, PieceKind, GRID_HEIGHT, GRID_WIDTH};

/// Total number of cells on the grid
const GRID_SIZE: usize = (GRID_WIDTH as usize) * (GRID_HEIGHT as usize);

/// Row indices removed by one clear pass, bottom to top
pub type ClearedRows = ArrayVec<usize, { GRID_HEIGHT as usize }>;

/// The grid - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    /// Calculate flat index from a coordinate
    #[inline(always)]
    fn index(c: Coordinate) -> Option<usize> {
        if !Self::in_bounds(c) {
            return None;
        }
        Some((c.row as usize) * (GRID_WIDTH as usize) + (c.col as usize))
    }

    /// Whether the coordinate lies inside `[0, 20) x [0, 10)`
    #[inline(always)]
    pub fn in_bounds(c: Coordinate) -> bool {
        c.row >= 0 && c.row < GRID_HEIGHT as i8 && c.col >= 0 && c.col < GRID_WIDTH as i8
    }

    pub fn width(&self) -> u8 {
        GRID_WIDTH
    }

    pub fn height(&self) -> u8 {
        GRID_HEIGHT
    }

    /// Get cell at a coordinate.
    /// Returns None if out of bounds
    pub fn get(&self, c: Coordinate) -> Option<Cell> {
        Self::index(c).map(|idx| self.cells[idx])
    }

    /// True iff the cell is empty. Fails with `OutOfBounds` outside the grid.
    pub fn is_empty_at(&self, c: Coordinate) -> CoreResult<bool> {
        let idx = Self::index(c).ok_or(CoreError::OutOfBounds {
            row: c.row,
            col: c.col,
        })?;
        Ok(self.cells[idx].is_none())
    }

    /// Mark the cell as occupied by `kind`. Fails with `OutOfBounds` outside the grid.
    pub fn set(&mut self, c: Coordinate, kind: PieceKind) -> CoreResult<()> {
        let idx = Self::index(c).ok_or(CoreError::OutOfBounds {
            row: c.row,
            col: c.col,
        })?;
        self.cells[idx] = Some(kind);
        Ok(())
    }

    /// Check if position is inside the grid and empty
    pub fn is_free(&self, c: Coordinate) -> bool {
        matches!(self.get(c), Some(None))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= GRID_HEIGHT as usize {
            return false;
        }
        self.row(row).iter().all(|cell| cell.is_some())
    }

    /// Borrow one row of cells
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * GRID_WIDTH as usize;
        &self.cells[start..start + GRID_WIDTH as usize]
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(GRID_WIDTH as usize)
    }

    /// Remove every full row in one pass and return their indices (bottom to top).
    ///
    /// Fullness is judged against the grid as it was before the pass; surviving rows
    /// compact downward in order and the vacated top rows become empty.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let width = GRID_WIDTH as usize;
        let mut write_row = GRID_HEIGHT as usize;

        // Two pointers, bottom to top. `write_row >= read_row` always holds, so
        // every row is tested before anything is copied over it.
        for read_row in (0..GRID_HEIGHT as usize).rev() {
            if self.is_row_full(read_row) {
                cleared_rows.push(read_row);
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src_start = read_row * width;
                    self.cells
                        .copy_within(src_start..src_start + width, write_row * width);
                }
            }
        }

        for cell in &mut self.cells[..write_row * width] {
            *cell = None;
        }

        cleared_rows
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy into a row-major 2D array (for snapshots)
    pub fn write_rows(&self, out: &mut [[Cell; GRID_WIDTH as usize]; GRID_HEIGHT as usize]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            dst.copy_from_slice(src);
        }
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        self.cells = [None; GRID_SIZE];
    }

    /// Build from a 2D array of rows (for seeding test and puzzle grids)
    pub fn from_rows(rows: [[Cell; GRID_WIDTH as usize]; GRID_HEIGHT as usize]) -> Self {
        let mut grid = Self::new();
        for (row, cells) in rows.iter().enumerate() {
            let start = row * GRID_WIDTH as usize;
            grid.cells[start..start + GRID_WIDTH as usize].copy_from_slice(cells);
        }
        grid
    }

    /// Build from text rows, `.` for empty and a piece letter for occupied.
    ///
    /// Rows are bottom-aligned; missing top rows are empty. Returns `None` for
    /// malformed input.
    pub fn from_ascii(lines: &[&str]) -> Option<Self> {
        if lines.len() > GRID_HEIGHT as usize {
            return None;
        }
        let mut grid = Self::new();
        let top = GRID_HEIGHT as usize - lines.len();
        for (i, line) in lines.iter().enumerate() {
            if line.chars().count() != GRID_WIDTH as usize {
                return None;
            }
            for (col, ch) in line.chars().enumerate() {
                if ch == '.' {
                    continue;
                }
                let kind = PieceKind::from_str(&ch.to_string())?;
                grid.cells[(top + i) * GRID_WIDTH as usize + col] = Some(kind);
            }
        }
        Some(grid)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
