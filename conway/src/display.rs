// display.rs - Resetting the viewing surface between streamed generations

use crossterm::{cursor::MoveTo, execute, terminal::{Clear, ClearType}};
use std::io::{self, Write};

/// Wipes whatever the previous generation left on screen.
pub trait DisplayClearer {
    fn clear(&mut self) -> io::Result<()>;
}

/// Clears a terminal and homes the cursor.
pub struct TerminalClearer<W: Write> {
    out: W,
}

impl TerminalClearer<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> TerminalClearer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplayClearer for TerminalClearer<W> {
    fn clear(&mut self) -> io::Result<()> {
        execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))
    }
}

impl<F: FnMut() -> io::Result<()>> DisplayClearer for F {
    fn clear(&mut self) -> io::Result<()> {
        self()
    }
}

/// Leaves the display alone, so generations simply scroll.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoClear;

impl DisplayClearer for NoClear {
    fn clear(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_clearer_emits_escape_sequences() {
        let mut clearer = TerminalClearer::new(Vec::new());
        clearer.clear().unwrap();
        let bytes = clearer.into_inner();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("\x1b[2J"), "{text:?}");
        assert!(text.contains("\x1b[1;1H"), "{text:?}");
    }

    #[test]
    fn closures_are_clearers() {
        let mut clears = 0;
        let mut clearer = || -> io::Result<()> {
            clears += 1;
            Ok(())
        };
        clearer.clear().unwrap();
        DisplayClearer::clear(&mut clearer).unwrap();
        assert_eq!(clears, 2);
    }
}
