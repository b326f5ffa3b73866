use quadrix_engine::Piece;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::ui::widgets::CellDisplay;

/// Preview panel for the pre-selected next piece.
///
/// Reserves a 4×4 cell area (the widest shape is the 1×4 I-piece, which
/// rotates into 4×1) and draws the piece's matrix at the top-left.
#[derive(Debug)]
pub struct NextPieceDisplay<'a> {
    piece: &'a Piece,
    block: Option<BlockWidget<'a>>,
}

const PREVIEW_CELLS: u16 = 4;

impl<'a> NextPieceDisplay<'a> {
    pub fn new(piece: &'a Piece) -> Self {
        Self { piece, block: None }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        PREVIEW_CELLS * CellDisplay::width() + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        PREVIEW_CELLS * CellDisplay::height() + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for NextPieceDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &NextPieceDisplay<'_> {
    #[expect(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        for (y, row) in self.piece.rows().enumerate() {
            for (x, &occupied) in row.iter().enumerate() {
                let cell = occupied.then(|| self.piece.color());
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
                CellDisplay::from_cell(cell, false).render(cell_area, buf);
            }
        }
    }
}
