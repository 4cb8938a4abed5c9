use std::io;

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

/// Wipes the terminal before a screen is redrawn.
///
/// Does nothing when stdout is piped, so transcripts keep every frame.
pub fn clear() -> io::Result<()> {
    if !console::Term::stdout().is_term() {
        return Ok(());
    }
    execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))
}
