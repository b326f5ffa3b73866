use std::io;

use crossterm::event::Event;
use ratatui::Frame;

use self::event_loop::{EventLoop, TuiEvent};

mod event_loop;

/// Trait for TUI applications driven by [`run`].
pub trait App {
    /// Returns whether the application should exit.
    fn should_exit(&self) -> bool;

    /// Handles terminal events (key input, mouse, resize, etc.).
    fn handle_event(&mut self, event: &Event);

    /// Updates game logic (called on each tick).
    fn update(&mut self);

    /// Draws the screen (called after state changes).
    fn draw(&self, frame: &mut Frame);
}

/// Runs the application inside a ratatui terminal session.
///
/// The event loop ticks at `tick_rate` Hz and renders after every state
/// change (tick or terminal event) until `app.should_exit()` returns true.
pub fn run<A>(app: &mut A, tick_rate: f64) -> io::Result<()>
where
    A: App,
{
    let mut events = EventLoop::from_tick_rate(tick_rate);
    ratatui::run(|terminal| {
        while !app.should_exit() {
            match events.next()? {
                TuiEvent::Tick => app.update(),
                TuiEvent::Render => {
                    terminal.draw(|frame| app.draw(frame))?;
                }
                TuiEvent::Crossterm(event) => app.handle_event(&event),
            }
        }
        Ok(())
    })
}
