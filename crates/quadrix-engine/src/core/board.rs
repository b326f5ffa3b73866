use std::collections::HashMap;

use super::{piece::Piece, shape::CellColor};

/// The durable record of permanently settled cells, keyed by board position.
///
/// This map is the single source of truth for occupancy. The visual grid
/// ([`Board`]) is a projection derived from it every frame and is never
/// mutated independently.
///
/// Invariant: every key satisfies `0 <= y < rows` for the board the cells
/// were locked into. Cells above the visible area (`y < 0`) are dropped at
/// lock time and never stored here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LockedCells {
    cells: HashMap<(i32, i32), CellColor>,
}

impl LockedCells {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Option<CellColor> {
        self.cells.get(&(x, y)).copied()
    }

    pub fn insert(&mut self, x: i32, y: i32, color: CellColor) {
        self.cells.insert((x, y), color);
    }

    pub fn remove(&mut self, x: i32, y: i32) -> Option<CellColor> {
        self.cells.remove(&(x, y))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = ((i32, i32), CellColor)> + '_ {
        self.cells.iter().map(|(&pos, &color)| (pos, color))
    }

    pub fn positions(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.cells.keys().copied()
    }

    /// Returns true if any column holds a locked cell in the topmost row.
    ///
    /// This is the terminal condition of a session: a stack that reaches
    /// row 0 ends the game.
    #[must_use]
    pub fn occupies_top_row(&self) -> bool {
        self.cells.keys().any(|&(_, y)| y == 0)
    }
}

/// The projected grid view: `rows × cols` cells of color-or-empty.
///
/// Derived from [`LockedCells`] (plus, for rendering, an overlay of the
/// falling piece) and disposable. Collision checks run against a fresh
/// projection rather than a persistently mutated grid, so the locked map can
/// never diverge from what is displayed or validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cols: i32,
    rows: i32,
    cells: Vec<Option<CellColor>>,
}

impl Board {
    /// Creates an empty board of the given dimensions.
    #[must_use]
    pub fn empty(cols: i32, rows: i32) -> Self {
        assert!(cols > 0 && rows > 0);
        let len = usize::try_from(cols * rows).expect("board dimensions fit in usize");
        Self {
            cols,
            rows,
            cells: vec![None; len],
        }
    }

    /// Projects the locked cells onto an empty grid.
    #[must_use]
    pub fn project(cols: i32, rows: i32, locked: &LockedCells) -> Self {
        let mut board = Self::empty(cols, rows);
        for ((x, y), color) in locked.iter() {
            board.set(x, y, color);
        }
        board
    }

    #[must_use]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    #[must_use]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        ((0..self.cols).contains(&x) && (0..self.rows).contains(&y))
            .then(|| usize::try_from(y * self.cols + x).expect("in-range index is non-negative"))
    }

    /// Returns the cell at `(x, y)`, or `None` when empty or out of range.
    #[must_use]
    pub fn cell(&self, x: i32, y: i32) -> Option<CellColor> {
        self.cells[self.index(x, y)?]
    }

    fn set(&mut self, x: i32, y: i32, color: CellColor) {
        if let Some(index) = self.index(x, y) {
            self.cells[index] = Some(color);
        }
    }

    /// Tests a piece against board bounds and occupancy.
    ///
    /// An occupied piece cell at absolute `(x, y)` is invalid when `x < 0`,
    /// `x >= cols`, or `y >= rows`. A cell with `y >= 0` is additionally
    /// invalid when the board cell is occupied. Cells with `y < 0` (above the
    /// visible board) are only checked against the horizontal bounds.
    #[must_use]
    pub fn is_valid(&self, piece: &Piece) -> bool {
        piece.occupied_cells().all(|(x, y)| {
            x >= 0 && x < self.cols && y < self.rows && (y < 0 || self.cell(x, y).is_none())
        })
    }

    /// Draws the piece's occupied cells onto this projection, for rendering
    /// only. Cells above the visible board are skipped.
    pub fn overlay(&mut self, piece: &Piece) {
        for (x, y) in piece.occupied_cells() {
            if y >= 0 {
                self.set(x, y, piece.color());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::shape::ShapeKind;

    use super::*;

    fn board_with(locked: &LockedCells) -> Board {
        Board::project(10, 20, locked)
    }

    #[test]
    fn test_projection_mirrors_locked_cells() {
        let mut locked = LockedCells::new();
        locked.insert(3, 19, CellColor::Red);
        locked.insert(0, 0, CellColor::Blue);

        let board = board_with(&locked);
        assert_eq!(board.cell(3, 19), Some(CellColor::Red));
        assert_eq!(board.cell(0, 0), Some(CellColor::Blue));
        assert_eq!(board.cell(5, 5), None);
    }

    #[test]
    fn test_spawned_o_piece_is_valid_on_empty_board() {
        let board = board_with(&LockedCells::new());
        let piece = Piece::spawn(ShapeKind::O, CellColor::Yellow, 10);
        assert!(board.is_valid(&piece));
    }

    #[test]
    fn test_out_of_bounds_is_invalid_regardless_of_occupancy() {
        let board = board_with(&LockedCells::new());

        let mut left = Piece::spawn(ShapeKind::O, CellColor::Yellow, 10);
        left.translate(-5, 0);
        assert!(!board.is_valid(&left));

        let mut right = Piece::spawn(ShapeKind::O, CellColor::Yellow, 10);
        right.translate(5, 0);
        assert!(!board.is_valid(&right));

        let mut below = Piece::spawn(ShapeKind::O, CellColor::Yellow, 10);
        below.translate(0, 19);
        assert!(!board.is_valid(&below));
    }

    #[test]
    fn test_cells_above_board_skip_occupancy_check() {
        // Stack a column at the spawn location; a piece hoisted above the
        // visible area still only fails on horizontal bounds.
        let mut locked = LockedCells::new();
        for y in 0..20 {
            locked.insert(4, y, CellColor::Green);
            locked.insert(5, y, CellColor::Green);
        }
        let board = board_with(&locked);

        let mut piece = Piece::spawn(ShapeKind::O, CellColor::Yellow, 10);
        piece.translate(0, -2);
        assert!(board.is_valid(&piece));

        piece.translate(-5, 0);
        assert!(!board.is_valid(&piece));
    }

    #[test]
    fn test_overlap_with_locked_cell_is_invalid() {
        let mut locked = LockedCells::new();
        locked.insert(4, 1, CellColor::Red);
        let board = board_with(&locked);

        let piece = Piece::spawn(ShapeKind::O, CellColor::Yellow, 10);
        assert!(!board.is_valid(&piece));
    }

    #[test]
    fn test_overlay_skips_negative_rows() {
        let mut board = board_with(&LockedCells::new());
        let mut piece = Piece::spawn(ShapeKind::O, CellColor::Yellow, 10);
        piece.translate(0, -1);

        board.overlay(&piece);
        assert_eq!(board.cell(4, 0), Some(CellColor::Yellow));
        assert_eq!(board.cell(5, 0), Some(CellColor::Yellow));
        // The row at y = -1 has nowhere to go and is silently dropped.
        assert_eq!(board.cell(4, 1), None);
    }

    #[test]
    fn test_occupies_top_row() {
        let mut locked = LockedCells::new();
        assert!(!locked.occupies_top_row());
        locked.insert(5, 1, CellColor::Red);
        assert!(!locked.occupies_top_row());
        locked.insert(5, 0, CellColor::Red);
        assert!(locked.occupies_top_row());
    }
}
