//! Interactive play in the terminal
//!
//! Any key spawns an item and resolves merges; `q`, Esc and Ctrl-C quit.
//! Animations play in the animated cell as a glyph that grows with the
//! frame's scale.

use crossterm::{
    ExecutableCommand, QueueableCommand, cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    style::{self, Color, Stylize},
    terminal::{self, ClearType},
};
use std::io::{self, Stdout, Write};
use std::thread;
use std::time::Duration;

use crate::game::board::{Board, Position};
use crate::game::item::Item;
use crate::game::observer::BoardObserver;
use crate::game::session::SessionStats;
use crate::io::error::{Result, terminal_error};
use crate::render::animation::AnimationKind;

/// Key handling result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Spawn an item and resolve merges
    Spawn,
    /// Leave the game
    Quit,
}

/// Translate a key event; releases and repeats are ignored
pub fn classify_key(key: &KeyEvent) -> Option<InputEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(InputEvent::Quit);
    }
    match key.code {
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(InputEvent::Quit),
        _ => Some(InputEvent::Spawn),
    }
}

/// Four-column text for a cell, e.g. `" C2 "`
pub fn cell_label(item: Option<&Item>) -> String {
    item.map_or_else(
        || " .. ".to_string(),
        |item| {
            let initial = item.name().chars().next().unwrap_or('?');
            format!(" {initial}{} ", item.level())
        },
    )
}

/// Glyph standing in for an icon drawn at `scale`
pub fn glyph_for_scale(scale: f64) -> char {
    if scale < 0.34 {
        '·'
    } else if scale < 0.67 {
        '•'
    } else {
        '●'
    }
}

fn level_color(level: u8) -> Color {
    match level {
        1 => Color::Yellow,
        2 => Color::Cyan,
        3 => Color::Magenta,
        _ => Color::White,
    }
}

/// Raw-mode terminal front end, restored on drop
pub struct TerminalUi {
    stdout: Stdout,
    status: String,
}

impl TerminalUi {
    /// Switch the terminal to raw mode on the alternate screen
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be configured
    pub fn enter() -> Result<Self> {
        terminal::enable_raw_mode().map_err(|e| terminal_error("enable raw mode", e))?;
        let mut stdout = io::stdout();
        if let Err(e) = stdout
            .execute(terminal::EnterAlternateScreen)
            .and_then(|out| out.execute(cursor::Hide))
        {
            let _ = terminal::disable_raw_mode();
            return Err(terminal_error("enter alternate screen", e));
        }

        Ok(Self {
            stdout,
            status: String::new(),
        })
    }

    /// Update the status line drawn under the board
    pub fn set_status(&mut self, stats: &SessionStats) {
        self.status = format!(
            "Presses: {} | Merges: {} | Best level: {}",
            stats.keypresses, stats.merges, stats.highest_level
        );
    }

    /// Block until a key is pressed
    ///
    /// # Errors
    ///
    /// Returns an error if reading terminal events fails
    pub fn next_input(&mut self) -> Result<InputEvent> {
        loop {
            if !event::poll(Duration::from_millis(50)).map_err(|e| terminal_error("poll", e))? {
                continue;
            }
            if let Event::Key(key) = event::read().map_err(|e| terminal_error("read", e))? {
                if let Some(input) = classify_key(&key) {
                    return Ok(input);
                }
            }
        }
    }

    /// Draw the board; `animated` replaces one cell with a scaled glyph
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails
    pub fn draw(&mut self, board: &Board, animated: Option<(Position, &Item, f64)>) -> Result<()> {
        self.queue_board(board, animated)
            .and_then(|()| self.stdout.flush())
            .map_err(|e| terminal_error("draw", e))
    }

    fn queue_board(
        &mut self,
        board: &Board,
        animated: Option<(Position, &Item, f64)>,
    ) -> io::Result<()> {
        let out = &mut self.stdout;
        out.queue(terminal::Clear(ClearType::All))?;
        out.queue(cursor::MoveTo(0, 0))?;
        out.queue(style::Print(format!("\r\n {}\r\n\r\n", "MERGE".bold())))?;

        for row in 0..board.size() {
            out.queue(style::Print(" "))?;
            for col in 0..board.size() {
                let position = Position::new(row, col);
                match animated {
                    Some((target, item, scale)) if target == position => {
                        let glyph = format!(" {}  ", glyph_for_scale(scale));
                        out.queue(style::Print(glyph.with(level_color(item.level()))))?;
                    }
                    _ => {
                        let item = board.get(position);
                        let label = cell_label(item);
                        let styled = match item {
                            Some(item) => label.with(level_color(item.level())).bold(),
                            None => label.dark_grey(),
                        };
                        out.queue(style::Print(styled))?;
                    }
                }
            }
            out.queue(style::Print("\r\n"))?;
        }

        out.queue(style::Print(format!("\r\n {}\r\n", self.status)))?;
        out.queue(style::Print(" [Any key] Spawn  [Q] Quit\r\n".grey()))?;
        Ok(())
    }

    fn play(&mut self, board: &Board, position: Position, item: &Item, kind: AnimationKind) -> Result<()> {
        let delay = Duration::from_millis(u64::from(kind.frame_delay_ms()));
        for scale in kind.scales() {
            self.draw(board, Some((position, item, scale)))?;
            thread::sleep(delay);
        }
        self.draw(board, None)
    }
}

impl BoardObserver for TerminalUi {
    fn on_spawn(&mut self, board: &Board, position: Position, item: &Item) -> Result<()> {
        self.play(board, position, item, AnimationKind::Spawn)
    }

    fn on_merge(
        &mut self,
        board: &Board,
        position: Position,
        item: &Item,
        _neighbors: &[Position],
    ) -> Result<()> {
        self.play(board, position, item, AnimationKind::Merge)
    }
}

impl Drop for TerminalUi {
    fn drop(&mut self) {
        let _ = self.stdout.execute(cursor::Show);
        let _ = self.stdout.execute(terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
