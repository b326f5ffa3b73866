use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block as BlockWidget, BlockExt as _, Paragraph, Widget},
};

use crate::ui::widgets::style;

/// Panel showing the session score and the persisted best.
#[derive(Debug)]
pub struct ScoreDisplay<'a> {
    score: usize,
    best: usize,
    block: Option<BlockWidget<'a>>,
}

impl<'a> ScoreDisplay<'a> {
    pub fn new(score: usize, best: usize) -> Self {
        Self {
            score,
            best,
            block: None,
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        // "SCORE 99999999" fits comfortably.
        14 + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        2 + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for ScoreDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &ScoreDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let lines = vec![
            Line::from(format!("SCORE {:>7}", self.score)),
            Line::from(format!("BEST  {:>7}", self.best)),
        ];
        Paragraph::new(lines).style(style::DEFAULT).render(area, buf);
    }
}
