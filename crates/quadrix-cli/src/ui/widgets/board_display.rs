use quadrix_engine::Board;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::ui::widgets::CellDisplay;

/// Renders a board projection cell by cell.
///
/// The projection already carries the falling-piece overlay when rendered
/// from [`GameSession::render_board`](quadrix_engine::GameSession::render_board).
#[derive(Debug)]
pub struct BoardDisplay<'a> {
    board: &'a Board,
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self { board, block: None }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn width(&self) -> u16 {
        self.board.cols() as u16 * CellDisplay::width()
            + super::block_horizontal_margin(self.block.as_ref())
    }

    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn height(&self) -> u16 {
        self.board.rows() as u16 * CellDisplay::height()
            + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        // Board dimensions are runtime configuration, so lay the grid out
        // with plain rect arithmetic instead of constraint layouts.
        for y in 0..self.board.rows() {
            for x in 0..self.board.cols() {
                let cell_area = Rect {
                    x: area.x + x as u16 * CellDisplay::width(),
                    y: area.y + y as u16 * CellDisplay::height(),
                    width: CellDisplay::width(),
                    height: CellDisplay::height(),
                };
                let cell_area = cell_area.intersection(area);
                if cell_area.is_empty() {
                    continue;
                }
                CellDisplay::from_cell(self.board.cell(x, y), true).render(cell_area, buf);
            }
        }
    }
}
