//! Terminal acquisition and key input.
//!
//! The session loop talks to the screen through the [`Terminal`] trait. The real
//! implementation, [`CrosstermTerminal`], switches to raw mode and the alternate
//! screen when acquired and restores both when dropped, so the launcher's UI is gone
//! on every exit path before anything is launched.

use crate::app::Event;
use crate::domain::{LauncherError, Result};
use crossterm::event::{self, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{cursor, execute, terminal};
use std::io::{self, Write};

/// Input delivered to the session loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// A key press mapped to a session event.
    Event(Event),
    /// The terminal changed size; the next frame must be laid out again.
    Resize,
}

/// Screen and keyboard as seen by the session loop.
pub trait Terminal {
    /// Current size as `(rows, cols)`.
    ///
    /// # Errors
    ///
    /// Returns an error when the size cannot be queried.
    fn size(&self) -> Result<(usize, usize)>;

    /// Blocks until the next input arrives.
    ///
    /// # Errors
    ///
    /// Returns an error when reading from the terminal fails.
    fn read_input(&mut self) -> Result<Input>;

    /// Writes a complete frame and flushes it.
    ///
    /// # Errors
    ///
    /// Returns an error when writing to the terminal fails.
    fn draw(&mut self, frame: &[u8]) -> Result<()>;
}

/// Maps a key press to a session event.
///
/// | Key | Event |
/// |---|---|
/// | Up / Down | `MoveUp` / `MoveDown` |
/// | PageUp / PageDown | `PageUp` / `PageDown` |
/// | Enter | `Commit` |
/// | Esc, `q`, Ctrl+C | `Cancel` |
/// | Backspace, Ctrl+H | `Backspace` |
/// | other printable ASCII | `AppendChar` |
///
/// Key releases, Alt combinations, and everything else map to `Event::Other`.
///
/// ```rust
/// use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
/// use mlaunch::app::Event;
/// use mlaunch::infrastructure::map_key_event;
///
/// let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
/// assert_eq!(map_key_event(&key), Event::Cancel);
/// ```
#[must_use]
pub fn map_key_event(key: &KeyEvent) -> Event {
    if key.kind == KeyEventKind::Release {
        return Event::Other;
    }

    if key.modifiers.contains(KeyModifiers::ALT) {
        return Event::Other;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Event::Cancel,
            KeyCode::Char('h') => Event::Backspace,
            _ => Event::Other,
        };
    }

    match key.code {
        KeyCode::Up => Event::MoveUp,
        KeyCode::Down => Event::MoveDown,
        KeyCode::PageUp => Event::PageUp,
        KeyCode::PageDown => Event::PageDown,
        KeyCode::Enter => Event::Commit,
        KeyCode::Esc | KeyCode::Char('q') => Event::Cancel,
        KeyCode::Backspace => Event::Backspace,
        KeyCode::Char(c) if c.is_ascii_graphic() || c == ' ' => Event::AppendChar(c),
        _ => Event::Other,
    }
}

/// The real terminal, held in raw mode on the alternate screen.
///
/// Dropping the value restores the terminal, even during unwinding.
#[derive(Debug)]
pub struct CrosstermTerminal {
    stdout: io::Stdout,
}

impl CrosstermTerminal {
    /// Enters raw mode, switches to the alternate screen, and hides the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`LauncherError::Terminal`] when stdout is not an interactive terminal
    /// or the mode switch fails. Anything already switched is restored.
    pub fn acquire() -> Result<Self> {
        terminal::enable_raw_mode()
            .map_err(|e| LauncherError::Terminal(format!("failed to enable raw mode: {e}")))?;

        let mut this = Self { stdout: io::stdout() };
        execute!(this.stdout, terminal::EnterAlternateScreen, cursor::Hide)
            .map_err(|e| LauncherError::Terminal(format!("failed to enter alternate screen: {e}")))?;

        tracing::debug!("terminal acquired");
        Ok(this)
    }
}

impl Drop for CrosstermTerminal {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
        tracing::debug!("terminal restored");
    }
}

impl Terminal for CrosstermTerminal {
    fn size(&self) -> Result<(usize, usize)> {
        let (cols, rows) = terminal::size()?;
        Ok((usize::from(rows), usize::from(cols)))
    }

    fn read_input(&mut self) -> Result<Input> {
        loop {
            match event::read()? {
                event::Event::Key(key) => return Ok(Input::Event(map_key_event(&key))),
                event::Event::Resize(..) => return Ok(Input::Resize),
                other => tracing::trace!(event = ?other, "ignoring terminal event"),
            }
        }
    }

    fn draw(&mut self, frame: &[u8]) -> Result<()> {
        self.stdout.write_all(frame)?;
        self.stdout.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn navigation_keys() {
        assert_eq!(map_key_event(&press(KeyCode::Up)), Event::MoveUp);
        assert_eq!(map_key_event(&press(KeyCode::Down)), Event::MoveDown);
        assert_eq!(map_key_event(&press(KeyCode::PageUp)), Event::PageUp);
        assert_eq!(map_key_event(&press(KeyCode::PageDown)), Event::PageDown);
        assert_eq!(map_key_event(&press(KeyCode::Enter)), Event::Commit);
    }

    #[test]
    fn quit_keys() {
        assert_eq!(map_key_event(&press(KeyCode::Esc)), Event::Cancel);
        assert_eq!(map_key_event(&press(KeyCode::Char('q'))), Event::Cancel);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key_event(&ctrl_c), Event::Cancel);
    }

    #[test]
    fn editing_keys() {
        assert_eq!(map_key_event(&press(KeyCode::Backspace)), Event::Backspace);
        let ctrl_h = KeyEvent::new(KeyCode::Char('h'), KeyModifiers::CONTROL);
        assert_eq!(map_key_event(&ctrl_h), Event::Backspace);
        assert_eq!(map_key_event(&press(KeyCode::Char('F'))), Event::AppendChar('F'));
        assert_eq!(map_key_event(&press(KeyCode::Char(' '))), Event::AppendChar(' '));
        let shifted = KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT);
        assert_eq!(map_key_event(&shifted), Event::AppendChar('G'));
    }

    #[test]
    fn unmapped_keys_are_other() {
        assert_eq!(map_key_event(&press(KeyCode::Char('é'))), Event::Other);
        assert_eq!(map_key_event(&press(KeyCode::Tab)), Event::Other);
        assert_eq!(map_key_event(&press(KeyCode::F(1))), Event::Other);
        let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert_eq!(map_key_event(&ctrl_a), Event::Other);
    }

    #[test]
    fn alt_combinations_are_other() {
        let alt_f = KeyEvent::new(KeyCode::Char('f'), KeyModifiers::ALT);
        assert_eq!(map_key_event(&alt_f), Event::Other);
        let alt_q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::ALT);
        assert_eq!(map_key_event(&alt_q), Event::Other);
        let ctrl_alt_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL | KeyModifiers::ALT);
        assert_eq!(map_key_event(&ctrl_alt_c), Event::Other);
    }

    #[test]
    fn releases_are_ignored() {
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Enter,
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(map_key_event(&release), Event::Other);
    }
}
