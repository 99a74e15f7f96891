// render.rs - Text output of generations

use crate::grid::Grid;
use std::io::{self, Write};

/// Characters drawn for live and dead cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub alive: char,
    pub dead: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            alive: '\u{2591}', // ░
            dead: '\u{2588}',  // █
        }
    }
}

impl Glyphs {
    pub fn new(alive: char, dead: char) -> Self {
        Self { alive, dead }
    }
}

/// Consumes each generation the simulation produces.
pub trait Renderer {
    /// Called once per generation, `generation` 0 being the initial board.
    fn render(&mut self, grid: &Grid, generation: u64) -> io::Result<()>;
}

/// Writes one glyph per cell and a newline after every row.
///
/// With `iteration_headers` on, each generation after the first is preceded
/// by an `Iteration: N` line, `N` counting transitions from zero.
pub struct TextRenderer<W: Write> {
    out: W,
    glyphs: Glyphs,
    iteration_headers: bool,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, glyphs: Glyphs) -> Self {
        Self {
            out,
            glyphs,
            iteration_headers: false,
        }
    }

    pub fn with_iteration_headers(mut self, enabled: bool) -> Self {
        self.iteration_headers = enabled;
        self
    }

    pub fn glyphs(&self) -> Glyphs {
        self.glyphs
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, grid: &Grid, generation: u64) -> io::Result<()> {
        if self.iteration_headers && generation > 0 {
            writeln!(self.out, "Iteration: {}", generation - 1)?;
        }
        self.out.write_all(render_to_string(grid, self.glyphs).as_bytes())?;
        self.out.flush()
    }
}

/// The board as text, one line per row.
pub fn render_to_string(grid: &Grid, glyphs: Glyphs) -> String {
    let glyph_len = glyphs.alive.len_utf8().max(glyphs.dead.len_utf8());
    let mut text = String::with_capacity(grid.rows() * (grid.columns() * glyph_len + 1));
    for row in grid.rows_iter() {
        text.extend(row.iter().map(|cell| if cell.is_alive() { glyphs.alive } else { glyphs.dead }));
        text.push('\n');
    }
    text
}
