//! Terminal rendering and status output

use crate::config::DisplayConfig;
use crate::game_of_life::{Grid, Simulation};
use std::io::{self, Write};

const CLEAR_AND_HOME: &str = "\x1b[2J\x1b[H";

/// Paints one generation per call onto a terminal
pub struct FrameRenderer {
    config: DisplayConfig,
}

impl FrameRenderer {
    pub fn new(config: DisplayConfig) -> Self {
        Self { config }
    }

    /// Render a grid as text, one line per row
    pub fn format_grid(&self, grid: &Grid) -> String {
        let mut output = String::with_capacity(grid.height() * (grid.width() * 3 + 1));
        for row in grid.rows() {
            for &cell in row {
                output.push(if cell {
                    self.config.alive_char
                } else {
                    self.config.dead_char
                });
            }
            output.push('\n');
        }
        output
    }

    /// Build the whole frame for the simulation's current generation
    pub fn format_frame(&self, sim: &Simulation) -> String {
        let mut frame = String::new();
        if self.config.clear_screen {
            frame.push_str(CLEAR_AND_HOME);
        }
        frame.push_str(&self.format_grid(sim.grid()));
        if self.config.show_status {
            frame.push_str(&format!(
                "generation {:>6} | living {:>5} | {}x{}\n",
                sim.generation(),
                sim.grid().living_count(),
                sim.height(),
                sim.width()
            ));
        }
        frame
    }

    /// Write the current frame and flush
    pub fn draw<W: Write>(&self, out: &mut W, sim: &Simulation) -> io::Result<()> {
        out.write_all(self.format_frame(sim).as_bytes())?;
        out.flush()
    }
}

/// Format a grid with row and column numbers
pub fn format_grid_with_coords(grid: &Grid) -> String {
    let mut output = String::new();

    output.push_str("   ");
    for x in 0..grid.width() {
        output.push_str(&format!("{:2}", x % 10));
    }
    output.push('\n');

    for (y, row) in grid.rows().enumerate() {
        output.push_str(&format!("{:2} ", y));
        for &cell in row {
            output.push_str(if cell { "██" } else { "··" });
        }
        output.push('\n');
    }

    output
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
