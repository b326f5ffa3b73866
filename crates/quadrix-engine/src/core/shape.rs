use rand::{Rng, distr::StandardUniform, prelude::Distribution};

/// Display color of a locked cell or falling piece.
///
/// The palette has exactly 7 entries, but colors are *not* bound to shape
/// kinds: shape and color are drawn independently when a piece spawns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CellColor {
    Cyan = 0,
    Blue = 1,
    Orange = 2,
    Yellow = 3,
    Green = 4,
    Purple = 5,
    Red = 6,
}

impl CellColor {
    /// Number of palette entries (7).
    pub const LEN: usize = 7;
}

impl Distribution<CellColor> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> CellColor {
        match rng.random_range(0..=6) {
            0 => CellColor::Cyan,
            1 => CellColor::Blue,
            2 => CellColor::Orange,
            3 => CellColor::Yellow,
            4 => CellColor::Green,
            5 => CellColor::Purple,
            _ => CellColor::Red,
        }
    }
}

/// Enum representing the type of shape in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ShapeKind {
    /// I-shape.
    I = 0,
    /// J-shape.
    J = 1,
    /// L-shape.
    L = 2,
    /// O-shape.
    O = 3,
    /// S-shape.
    S = 4,
    /// T-shape.
    T = 5,
    /// Z-shape.
    Z = 6,
}

impl Distribution<ShapeKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ShapeKind {
        match rng.random_range(0..=6) {
            0 => ShapeKind::I,
            1 => ShapeKind::J,
            2 => ShapeKind::L,
            3 => ShapeKind::O,
            4 => ShapeKind::S,
            5 => ShapeKind::T,
            _ => ShapeKind::Z,
        }
    }
}

impl ShapeKind {
    /// Number of shape kinds (7).
    pub const LEN: usize = 7;

    /// All catalog entries in declaration order.
    pub const ALL: [Self; Self::LEN] = [
        ShapeKind::I,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::O,
        ShapeKind::S,
        ShapeKind::T,
        ShapeKind::Z,
    ];

    /// Returns the shape's cell matrix in spawn orientation.
    ///
    /// The matrix is row-major with `(0, 0)` at the top-left. Bounding boxes
    /// are tight and non-square for most shapes (the I-shape is 1×4, the
    /// O-shape 2×2, the rest 2×3).
    #[must_use]
    pub fn cells(self) -> Vec<Vec<bool>> {
        SHAPE_CELLS[self as usize]
            .iter()
            .map(|row| row.to_vec())
            .collect()
    }

    /// Returns the single character representation of this shape kind.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            ShapeKind::I => 'I',
            ShapeKind::J => 'J',
            ShapeKind::L => 'L',
            ShapeKind::O => 'O',
            ShapeKind::S => 'S',
            ShapeKind::T => 'T',
            ShapeKind::Z => 'Z',
        }
    }
}

const SHAPE_CELLS: [&[&[bool]]; ShapeKind::LEN] = {
    const C: bool = true;
    const E: bool = false;

    [
        // I-shape
        &[&[C, C, C, C]],
        // J-shape
        &[&[C, E, E], &[C, C, C]],
        // L-shape
        &[&[E, E, C], &[C, C, C]],
        // O-shape
        &[&[C, C], &[C, C]],
        // S-shape
        &[&[E, C, C], &[C, C, E]],
        // T-shape
        &[&[E, C, E], &[C, C, C]],
        // Z-shape
        &[&[C, C, E], &[E, C, C]],
    ]
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_seven_shapes() {
        assert_eq!(ShapeKind::ALL.len(), 7);
        assert_eq!(ShapeKind::LEN, CellColor::LEN);
    }

    #[test]
    fn test_every_shape_has_four_cells() {
        for kind in ShapeKind::ALL {
            let cells = kind.cells();
            let occupied: usize = cells
                .iter()
                .map(|row| row.iter().filter(|&&c| c).count())
                .sum();
            assert_eq!(occupied, 4, "{} shape must have 4 cells", kind.as_char());
        }
    }

    #[test]
    fn test_matrices_are_rectangular() {
        for kind in ShapeKind::ALL {
            let cells = kind.cells();
            let width = cells[0].len();
            assert!(cells.iter().all(|row| row.len() == width));
        }
    }

    #[test]
    fn test_bounding_boxes_match_classic_geometry() {
        let dims = |kind: ShapeKind| {
            let cells = kind.cells();
            (cells.len(), cells[0].len())
        };
        assert_eq!(dims(ShapeKind::I), (1, 4));
        assert_eq!(dims(ShapeKind::O), (2, 2));
        for kind in [
            ShapeKind::J,
            ShapeKind::L,
            ShapeKind::S,
            ShapeKind::T,
            ShapeKind::Z,
        ] {
            assert_eq!(dims(kind), (2, 3));
        }
    }
}
