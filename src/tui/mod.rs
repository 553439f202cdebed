pub mod widgets;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use rand::Rng;
use ratatui::prelude::CrosstermBackend;

use crate::engine::{Palette, PaletteEngine};
use self::widgets::PaletteWidget;

/// Type alias for the terminal used throughout the app.
pub type Terminal = ratatui::Terminal<CrosstermBackend<io::Stdout>>;

const TICK_RATE: Duration = Duration::from_millis(250);

/// State for the interactive TUI application.
pub struct TuiApp<R: Rng> {
    engine: PaletteEngine<R>,
    palette: Palette,
    running: bool,
}

impl<R: Rng> TuiApp<R> {
    /// Wrap an engine and populate the initial palette.
    pub fn new(mut engine: PaletteEngine<R>) -> Self {
        let palette = engine.regenerate();
        Self {
            engine,
            palette,
            running: true,
        }
    }

    fn handle_key(&mut self, code: KeyCode) -> Result<()> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char(' ') | KeyCode::Char('g') => {
                self.palette = self.engine.regenerate();
            }
            KeyCode::Tab => {
                // Switching type unlocks everything and regenerates.
                self.engine.set_type(self.engine.active_type().next());
                self.palette = self.engine.regenerate();
            }
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                self.palette[index].locked = self.engine.toggle_lock(index)?;
            }
            _ => {}
        }
        Ok(())
    }
}

/// Initialise the terminal: enter raw mode + alternate screen.
fn init() -> Result<Terminal> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = ratatui::Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to its original state.
fn restore() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Launch the TUI application.
pub fn run<R: Rng>(mut app: TuiApp<R>) -> Result<()> {
    let mut terminal = init()?;
    let result = event_loop(&mut app, &mut terminal);
    restore()?;
    result
}

fn event_loop<R: Rng>(app: &mut TuiApp<R>, terminal: &mut Terminal) -> Result<()> {
    while app.running {
        terminal.draw(|frame| {
            let widget = PaletteWidget::new(&app.palette, app.engine.active_type());
            frame.render_widget(widget, frame.area());
        })?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code)?;
                }
            }
        }
    }
    Ok(())
}
