use std::{
    mem,
    time::Instant,
};

use crossterm::event::{Event, KeyCode};
use quadrix_engine::{GameConfig, GameSession, Input};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    style::Style,
    text::{Line, Text},
    widgets::{Block, Clear},
};

use crate::{
    command::CommandArgs,
    store::HighScoreStore,
    tui::{self, App},
    ui::widgets::{BoardDisplay, NextPieceDisplay, ScoreDisplay, color, style},
};

const TICK_RATE: f64 = 60.0;

pub(crate) fn run(args: &CommandArgs) -> anyhow::Result<()> {
    let store = HighScoreStore::new(args.score_file.clone());
    let best = store.load();

    let mut app = PlayApp::new(GameConfig::default(), best);
    tui::run(&mut app, TICK_RATE)?;

    let final_score = app.final_score();
    println!("Game Over. Final Score: {final_score}");
    if final_score > best {
        println!("New High Score!");
        store.save(final_score)?;
    } else {
        println!("Highest Score: {best}");
    }
    Ok(())
}

#[derive(Debug)]
struct PlayApp {
    session: GameSession,
    queued_inputs: Vec<Input>,
    last_tick: Instant,
    best: usize,
    /// Highest score reached in sessions already restarted away from.
    past_best: usize,
    is_exiting: bool,
}

impl PlayApp {
    fn new(config: GameConfig, best: usize) -> Self {
        Self {
            session: GameSession::new(config),
            queued_inputs: Vec::new(),
            last_tick: Instant::now(),
            best,
            past_best: 0,
            is_exiting: false,
        }
    }

    /// The score to report and persist: the best over every session played,
    /// including one quit mid-game.
    fn final_score(&self) -> usize {
        self.past_best.max(self.session.score())
    }

    fn restart(&mut self) {
        self.past_best = self.past_best.max(self.session.score());
        self.session.reset();
        self.queued_inputs.clear();
        self.last_tick = Instant::now();
    }
}

impl App for PlayApp {
    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, event: &Event) {
        let is_playing = self.session.state().is_falling();
        let is_game_over = self.session.state().is_game_over();

        if let Some(event) = event.as_key_event() {
            match event.code {
                KeyCode::Left if is_playing => self.queued_inputs.push(Input::MoveLeft),
                KeyCode::Right if is_playing => self.queued_inputs.push(Input::MoveRight),
                KeyCode::Down if is_playing => self.queued_inputs.push(Input::SoftDrop),
                KeyCode::Up if is_playing => self.queued_inputs.push(Input::Rotate),
                KeyCode::Char('r') if is_game_over => self.restart(),
                KeyCode::Char('q') => self.is_exiting = true,
                _ => {}
            }
        }
    }

    fn update(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_tick);
        self.last_tick = now;

        let inputs = mem::take(&mut self.queued_inputs);
        self.session.step(dt, &inputs);
    }

    fn draw(&self, frame: &mut Frame) {
        let is_game_over = self.session.state().is_game_over();
        let border_style = if is_game_over {
            Style::new().fg(color::RED)
        } else {
            Style::new().fg(color::WHITE)
        };

        let board = self.session.render_board();
        let board_display = BoardDisplay::new(&board)
            .block(Block::bordered().border_style(border_style).style(style::DEFAULT));
        let next_display = NextPieceDisplay::new(self.session.next_piece()).block(
            Block::bordered()
                .title(Line::from("NEXT").centered())
                .border_style(border_style)
                .style(style::DEFAULT),
        );
        let score_display = ScoreDisplay::new(self.session.score(), self.best).block(
            Block::bordered()
                .title(Line::from("SCORE").centered())
                .border_style(border_style)
                .style(style::DEFAULT),
        );

        let help_text = if is_game_over {
            "Controls: R (Restart) | Q (Quit)"
        } else {
            "Controls: ← → (Move) | ↓ (Soft Drop) | ↑ (Rotate) | Q (Quit)"
        };
        let help_text = Text::from(help_text)
            .style(Style::default().fg(color::GRAY))
            .centered();

        let [main_area, help_area] = Layout::vertical([
            Constraint::Length(board_display.height()),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let [board_area, side_area] = Layout::horizontal([
            Constraint::Length(board_display.width()),
            Constraint::Length(u16::max(next_display.width(), score_display.width())),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(main_area);

        let [next_area, score_area] = Layout::vertical([
            Constraint::Length(next_display.height()),
            Constraint::Length(score_display.height()),
        ])
        .spacing(1)
        .areas(side_area);

        let board_width = board_display.width();
        frame.render_widget(board_display, board_area);
        frame.render_widget(next_display, next_area);
        frame.render_widget(score_display, score_area);
        frame.render_widget(help_text, help_area);

        if is_game_over {
            let popup_style = Style::new().fg(color::WHITE).bg(color::RED);
            let block = Block::new().style(popup_style);
            let text = Text::styled("GAME OVER!!", popup_style).centered();
            let area = board_area.centered(Constraint::Length(board_width), Constraint::Length(3));
            let inner = block.inner(area);
            frame.render_widget(Clear, area);
            frame.render_widget(block, area);
            frame.render_widget(text, inner.centered_vertically(Constraint::Length(1)));
        }
    }
}
