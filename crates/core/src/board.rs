//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell can be empty or filled with a color.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;

use crate::piece::Piece;
use crate::types::{Cell, Color, GRID_HEIGHT, GRID_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (GRID_WIDTH as usize) * (GRID_HEIGHT as usize);

/// Row indices, at most one per grid row
pub type RowList = ArrayVec<usize, { GRID_HEIGHT as usize }>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= GRID_WIDTH as i8 || y < 0 || y >= GRID_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (GRID_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        GRID_WIDTH
    }

    pub fn height(&self) -> u8 {
        GRID_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Whether a single piece cell may sit at (x, y).
    ///
    /// Rows above the grid are open space; everything else must be an empty
    /// in-bounds cell.
    #[inline(always)]
    fn accepts(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= GRID_WIDTH as i8 || y >= GRID_HEIGHT as i8 {
            return false;
        }
        y < 0 || self.is_valid(x, y)
    }

    /// Check that every occupied cell of `piece` is inside the side walls, above
    /// the floor, and not overlapping a locked cell.
    ///
    /// This is the only legality check; movement and spawn both go through it.
    pub fn is_valid_placement(&self, piece: &Piece) -> bool {
        piece.cells().all(|(x, y)| self.accepts(x, y))
    }

    /// Write the piece color into every cell it occupies.
    ///
    /// Callers validate the placement first. Cells above the top row have
    /// nowhere to go and are dropped.
    pub fn lock(&mut self, piece: &Piece) {
        for (x, y) in piece.cells() {
            self.set(x, y, Some(piece.color));
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= GRID_HEIGHT as usize {
            return false;
        }
        let start = y * GRID_WIDTH as usize;
        let end = start + GRID_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Indices of all full rows, top to bottom
    pub fn full_rows(&self) -> RowList {
        (0..GRID_HEIGHT as usize)
            .filter(|&y| self.is_row_full(y))
            .collect()
    }

    /// Remove all full rows, shift the survivors down and refill the top with
    /// empty rows. Returns the number of rows removed.
    ///
    /// Uses a two-pointer pass with zero allocation; survivors keep their
    /// relative order.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = GRID_WIDTH as usize;
        let mut cleared = 0;
        let mut write_y = GRID_HEIGHT as usize;

        // Scan from bottom to top
        for read_y in (0..GRID_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Clear the remaining rows at the top
        self.cells[..write_y * width].fill(None);

        cleared
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(GRID_WIDTH as usize)
    }

    /// Copy the grid into a row-major 2D array
    pub fn write_grid(&self, out: &mut [[Cell; GRID_WIDTH as usize]; GRID_HEIGHT as usize]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            dst.copy_from_slice(src);
        }
    }

    /// Fill a whole row with `color`, leaving the listed columns empty
    pub fn fill_row_except(&mut self, y: i8, color: Color, holes: &[i8]) {
        for x in 0..GRID_WIDTH as i8 {
            let cell = if holes.contains(&x) { None } else { Some(color) };
            self.set(x, y, cell);
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Create from a 2D vector for testing (converts to flat array)
    #[cfg(test)]
    pub fn from_cells(cells_2d: Vec<Vec<Cell>>) -> Self {
        assert_eq!(cells_2d.len(), GRID_HEIGHT as usize);
        assert!(cells_2d.iter().all(|row| row.len() == GRID_WIDTH as usize));

        let mut flat = [None; BOARD_SIZE];
        for (y, row) in cells_2d.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                flat[y * GRID_WIDTH as usize + x] = *cell;
            }
        }
        Self { cells: flat }
    }

    /// Convert to 2D vector for testing/display
    #[cfg(test)]
    pub fn to_cells(&self) -> Vec<Vec<Cell>> {
        self.rows().map(|row| row.to_vec()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
