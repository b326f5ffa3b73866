use std::cmp::Reverse;

use crate::core::board::LockedCells;

use super::config::GameConfig;

/// Removes every full row from the locked cells and compacts the rows above
/// it downward. Returns the number of rows cleared.
///
/// Rows are scanned from the bottom (`rows - 1`) to the top. When a row is
/// full (no empty cell across all columns) its entries are removed and every
/// surviving entry strictly above it shifts down by one, processed from the
/// highest y to the lowest so no entry overwrites another mid-shift. After a
/// clear the same row index is re-checked, since the row that moved into it
/// may itself be full.
///
/// The relative vertical order of surviving cells is preserved; on return no
/// full row remains. A board with zero full rows is left untouched.
pub fn clear_lines(config: &GameConfig, locked: &mut LockedCells) -> usize {
    let mut cleared = 0;
    let mut y = config.rows() - 1;
    while y >= 0 {
        let full = (0..config.cols()).all(|x| locked.get(x, y).is_some());
        if !full {
            y -= 1;
            continue;
        }
        cleared += 1;
        for x in 0..config.cols() {
            locked.remove(x, y);
        }
        let mut above: Vec<(i32, i32)> = locked.positions().filter(|&(_, cy)| cy < y).collect();
        above.sort_unstable_by_key(|&(_, cy)| Reverse(cy));
        for (cx, cy) in above {
            if let Some(color) = locked.remove(cx, cy) {
                locked.insert(cx, cy + 1, color);
            }
        }
    }
    cleared
}

#[cfg(test)]
mod tests {
    use crate::core::shape::CellColor;

    use super::*;

    fn fill_row(locked: &mut LockedCells, y: i32, except: Option<i32>) {
        for x in 0..10 {
            if Some(x) != except {
                locked.insert(x, y, CellColor::Cyan);
            }
        }
    }

    #[test]
    fn test_no_full_rows_is_a_no_op() {
        let config = GameConfig::default();
        let mut locked = LockedCells::new();
        fill_row(&mut locked, 19, Some(0));
        fill_row(&mut locked, 18, Some(9));
        let before = locked.clone();

        assert_eq!(clear_lines(&config, &mut locked), 0);
        assert_eq!(locked, before);
    }

    #[test]
    fn test_single_row_clears_and_compacts() {
        let config = GameConfig::default();
        let mut locked = LockedCells::new();
        fill_row(&mut locked, 19, None);
        locked.insert(3, 17, CellColor::Red);
        locked.insert(3, 18, CellColor::Green);

        assert_eq!(clear_lines(&config, &mut locked), 1);
        // Survivors above the cleared row each moved down by one.
        assert_eq!(locked.get(3, 18), Some(CellColor::Red));
        assert_eq!(locked.get(3, 19), Some(CellColor::Green));
        assert_eq!(locked.len(), 2);
    }

    #[test]
    fn test_bottom_row_completed_by_one_cell() {
        // Row 19 full except column 0; locking a cell at (0, 19) completes it.
        let config = GameConfig::default();
        let mut locked = LockedCells::new();
        fill_row(&mut locked, 19, Some(0));
        locked.insert(2, 18, CellColor::Purple);
        locked.insert(7, 16, CellColor::Orange);
        locked.insert(0, 19, CellColor::Blue);

        assert_eq!(clear_lines(&config, &mut locked), 1);
        assert_eq!(locked.get(2, 19), Some(CellColor::Purple));
        assert_eq!(locked.get(7, 17), Some(CellColor::Orange));
        assert_eq!(locked.len(), 2);
    }

    #[test]
    fn test_consecutive_full_rows_all_clear() {
        let config = GameConfig::default();
        let mut locked = LockedCells::new();
        fill_row(&mut locked, 19, None);
        fill_row(&mut locked, 18, None);
        locked.insert(5, 17, CellColor::Red);

        assert_eq!(clear_lines(&config, &mut locked), 2);
        assert_eq!(locked.get(5, 19), Some(CellColor::Red));
        assert_eq!(locked.len(), 1);
    }

    #[test]
    fn test_separated_full_rows_preserve_relative_order() {
        let config = GameConfig::default();
        let mut locked = LockedCells::new();
        fill_row(&mut locked, 19, None);
        fill_row(&mut locked, 17, None);
        locked.insert(1, 18, CellColor::Green);
        locked.insert(1, 16, CellColor::Red);
        locked.insert(1, 15, CellColor::Blue);

        assert_eq!(clear_lines(&config, &mut locked), 2);
        // Bottom-to-top order (green, red, blue) is preserved.
        assert_eq!(locked.get(1, 19), Some(CellColor::Green));
        assert_eq!(locked.get(1, 18), Some(CellColor::Red));
        assert_eq!(locked.get(1, 17), Some(CellColor::Blue));
        assert_eq!(locked.len(), 3);
    }

    #[test]
    fn test_no_full_row_remains_after_clearing() {
        let config = GameConfig::default();
        let mut locked = LockedCells::new();
        for y in 15..20 {
            fill_row(&mut locked, y, None);
        }

        assert_eq!(clear_lines(&config, &mut locked), 5);
        assert!(locked.is_empty());
    }
}
