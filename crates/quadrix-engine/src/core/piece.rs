use super::shape::{CellColor, ShapeKind};

/// A falling piece: a shape matrix instance with a color and a board-space
/// origin.
///
/// Unlike the catalog entries, a `Piece` is mutable. Translation adjusts the
/// origin in place and rotation replaces the matrix wholesale; neither
/// operation validates the result. Callers are expected to check the new
/// placement against the board and roll the operation back when it is
/// rejected.
///
/// # Coordinate System
///
/// - The origin `(x, y)` is the board-space position of the matrix's top-left
/// - X increases rightward (columns), Y increases downward (rows)
/// - The origin may sit outside the board transiently (e.g. a rejected
///   move-left at the wall), which is why coordinates are signed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    cells: Vec<Vec<bool>>,
    color: CellColor,
    x: i32,
    y: i32,
}

impl Piece {
    /// Creates a piece of the given shape and color at the spawn position:
    /// horizontally centered (integer division), top row.
    ///
    /// No validity check is performed. A piece spawned onto occupied cells is
    /// caught by the game-over check on the next frame, not rejected here.
    #[must_use]
    #[expect(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
    pub fn spawn(kind: ShapeKind, color: CellColor, board_cols: i32) -> Self {
        let cells = kind.cells();
        let width = cells[0].len() as i32;
        Self {
            cells,
            color,
            x: board_cols / 2 - width / 2,
            y: 0,
        }
    }

    #[must_use]
    pub fn color(&self) -> CellColor {
        self.color
    }

    #[must_use]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Adds the deltas to the origin. No rollback is performed here; callers
    /// re-validate and undo with the opposite deltas on failure.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    /// Rotates the shape matrix 90° clockwise by reversing the row order and
    /// transposing.
    ///
    /// The bounding box dimensions swap for non-square matrices while the
    /// origin stays put, so the piece's visual center may shift. That is
    /// accepted behavior and not corrected by re-centering.
    pub fn rotate(&mut self) {
        let rows = self.cells.len();
        let cols = self.cells[0].len();
        let mut rotated = vec![vec![false; rows]; cols];
        for (y, row) in self.cells.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                rotated[x][rows - 1 - y] = cell;
            }
        }
        self.cells = rotated;
    }

    /// Restores the orientation before the last [`rotate`](Self::rotate) by
    /// rotating three more times. Four rotations always reproduce the
    /// original matrix exactly.
    pub fn rotate_back(&mut self) {
        for _ in 0..3 {
            self.rotate();
        }
    }

    /// Returns the board-space positions of the occupied shape cells.
    #[expect(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
    pub fn occupied_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.cells.iter().enumerate().flat_map(move |(dy, row)| {
            row.iter().enumerate().filter_map(move |(dx, &cell)| {
                cell.then_some((self.x + dx as i32, self.y + dy as i32))
            })
        })
    }

    /// Returns the shape matrix rows, for rendering previews.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.iter().map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_centers_horizontally() {
        // 10 columns: I (width 4) spawns at x = 5 - 2 = 3, O (width 2) at 4.
        let i = Piece::spawn(ShapeKind::I, CellColor::Cyan, 10);
        assert_eq!((i.x(), i.y()), (3, 0));

        let o = Piece::spawn(ShapeKind::O, CellColor::Yellow, 10);
        assert_eq!((o.x(), o.y()), (4, 0));
    }

    #[test]
    fn test_translate_adds_deltas() {
        let mut piece = Piece::spawn(ShapeKind::T, CellColor::Purple, 10);
        let (x0, y0) = (piece.x(), piece.y());
        piece.translate(-1, 2);
        assert_eq!((piece.x(), piece.y()), (x0 - 1, y0 + 2));
        piece.translate(1, -2);
        assert_eq!((piece.x(), piece.y()), (x0, y0));
    }

    #[test]
    fn test_rotate_is_reverse_then_transpose() {
        // J spawns as:
        //   X . .
        //   X X X
        // One clockwise rotation:
        //   X X
        //   X .
        //   X .
        let mut piece = Piece::spawn(ShapeKind::J, CellColor::Blue, 10);
        piece.rotate();
        let rows: Vec<Vec<bool>> = piece.rows().map(<[bool]>::to_vec).collect();
        assert_eq!(
            rows,
            vec![
                vec![true, true],
                vec![true, false],
                vec![true, false],
            ]
        );
    }

    #[test]
    fn test_rotate_swaps_bounding_box() {
        let mut piece = Piece::spawn(ShapeKind::I, CellColor::Cyan, 10);
        assert_eq!(piece.rows().count(), 1);
        piece.rotate();
        assert_eq!(piece.rows().count(), 4);
        assert!(piece.rows().all(|row| row.len() == 1));
    }

    #[test]
    fn test_four_rotations_round_trip() {
        for kind in ShapeKind::ALL {
            let original = Piece::spawn(kind, CellColor::Green, 10);
            let mut piece = original.clone();
            for _ in 0..4 {
                piece.rotate();
            }
            assert_eq!(piece, original, "rotate x4 must restore {}", kind.as_char());
        }
    }

    #[test]
    fn test_rotate_back_undoes_rotate() {
        for kind in ShapeKind::ALL {
            let original = Piece::spawn(kind, CellColor::Red, 10);
            let mut piece = original.clone();
            piece.rotate();
            piece.rotate_back();
            assert_eq!(piece, original);
        }
    }

    #[test]
    fn test_occupied_cells_are_absolute() {
        let piece = Piece::spawn(ShapeKind::O, CellColor::Yellow, 10);
        let mut cells: Vec<_> = piece.occupied_cells().collect();
        cells.sort_unstable();
        assert_eq!(cells, vec![(4, 0), (4, 1), (5, 0), (5, 1)]);
    }

    #[test]
    fn test_rotation_keeps_origin() {
        let mut piece = Piece::spawn(ShapeKind::S, CellColor::Green, 10);
        let (x0, y0) = (piece.x(), piece.y());
        piece.rotate();
        assert_eq!((piece.x(), piece.y()), (x0, y0));
    }
}
