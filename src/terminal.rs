use std::io;
use std::io::Write;

use crossterm::cursor;
use crossterm::queue;
use crossterm::style;
use crossterm::style::Color;
use crossterm::terminal;

use crate::app::Status;
use crate::controller::SimulationState;
use crate::grid::Grid;
use crate::render::FrameBuffer;
use crate::render::Pixel;
use crate::render::Renderer;

const ALIVE_COLOR: Color = Color::Green;
const DEAD_COLOR: Color = Color::Black;
const GRIDLINE_COLOR: Color = Color::Rgb {
    r: 0x69,
    g: 0x69,
    b: 0x69,
};

const KEY_HELP: &str = "[i]nit [c]lear [space] auto [s]tep [g]rid [q]uit";

/// Draws grids onto a terminal, one terminal cell per pixel, with the top left of the canvas at
/// the top left of the screen.
pub struct TerminalRenderer<W: Write> {
    out: W,
    fb: FrameBuffer,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            fb: FrameBuffer::new(0, 0),
        }
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.fb
    }

    /// Print the status line just below the canvas.
    pub fn draw_status(&mut self, status: &Status) -> io::Result<()> {
        let state = match status.state {
            SimulationState::Running => "RUNNING",
            SimulationState::Stopped => "STOPPED",
        };

        queue!(
            self.out,
            cursor::MoveTo(0, self.fb.height()),
            style::ResetColor,
            terminal::Clear(terminal::ClearType::CurrentLine),
            style::Print(format!(
                "gen {} | pop {} | {state} | {} | {KEY_HELP}",
                status.generation, status.population, status.rules
            )),
        )?;

        self.out.flush()
    }

    fn flush_frame(&mut self) -> io::Result<()> {
        let mut last = None;

        for (y, row) in self.fb.iter_rows().enumerate() {
            queue!(self.out, cursor::MoveTo(0, y as u16))?;

            for &px in row {
                let color = match px {
                    Pixel::Alive => ALIVE_COLOR,
                    Pixel::Dead => DEAD_COLOR,
                    Pixel::Line => GRIDLINE_COLOR,
                };

                if last != Some(color) {
                    queue!(self.out, style::SetBackgroundColor(color))?;
                    last = Some(color);
                }

                queue!(self.out, style::Print(' '))?;
            }
        }

        queue!(self.out, style::ResetColor)?;
        self.out.flush()
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    type Error = io::Error;

    fn draw(&mut self, grid: &Grid, width: u16, height: u16) -> Result<(), Self::Error> {
        if (width, height) != (self.fb.width(), self.fb.height()) {
            queue!(self.out, terminal::Clear(terminal::ClearType::All))?;
        }

        // a framebuffer never fails to draw
        let Ok(()) = self.fb.draw(grid, width, height);

        self.flush_frame()
    }

    fn set_gridlines(&mut self, show: bool) {
        self.fb.set_gridlines(show);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule_set::B3S23;

    #[test]
    fn writes_one_cell_per_pixel() {
        let grid: Grid = "#.\n..".parse().unwrap();
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.set_gridlines(false);

        renderer.draw(&grid, 4, 2).unwrap();

        assert_eq!(renderer.frame_buffer().to_string(), "##..\n....");

        let out = String::from_utf8(renderer.out.clone()).unwrap();
        assert_eq!(out.matches(' ').count(), 8);
    }

    #[test]
    fn status_line() {
        let mut renderer = TerminalRenderer::new(Vec::new());
        let status = Status {
            generation: 12,
            population: 40,
            state: SimulationState::Running,
            rules: B3S23,
        };

        renderer.draw_status(&status).unwrap();

        let out = String::from_utf8(renderer.out).unwrap();
        assert!(out.contains("gen 12 | pop 40 | RUNNING | B3/S23"));
    }
}
