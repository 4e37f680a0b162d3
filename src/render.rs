use std::convert::Infallible;
use std::fmt;

use crate::grid::Grid;
use crate::viewport::Point;
use crate::viewport::Viewport;
use crate::viewport::gridlines;

/// Cells narrower than this, in pixels, get no gridlines along that axis. A line would cover
/// the whole cell.
pub const MIN_GRIDLINE_CELL: f64 = 2.0;

/// Something that can draw a grid onto a `width x height` pixel canvas.
///
/// Drawing is a function of the grid and the canvas size only. Renderers keep no state about
/// previously drawn grids.
pub trait Renderer {
    type Error;

    fn draw(&mut self, grid: &Grid, width: u16, height: u16) -> Result<(), Self::Error>;

    /// Whether gridlines are drawn over the cells. Renderers without gridlines may ignore this.
    fn set_gridlines(&mut self, _show: bool) {}
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Pixel {
    #[default]
    Dead,
    Alive,
    Line,
}

impl Pixel {
    pub const fn as_char(self) -> char {
        match self {
            Pixel::Dead => '.',
            Pixel::Alive => '#',
            Pixel::Line => '+',
        }
    }
}

/// A headless renderer: an in memory buffer of pixels.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    /// The pixel buffer, row-major
    fb: Vec<Pixel>,

    /// Width of the framebuffer
    w: u16,

    /// Height of the framebuffer
    h: u16,

    show_gridlines: bool,
}

impl FrameBuffer {
    pub fn new(w: u16, h: u16) -> Self {
        Self {
            fb: vec![Pixel::Dead; w as usize * h as usize],
            w,
            h,
            show_gridlines: true,
        }
    }

    pub fn width(&self) -> u16 {
        self.w
    }

    pub fn height(&self) -> u16 {
        self.h
    }

    pub fn show_gridlines(&self) -> bool {
        self.show_gridlines
    }

    /// Resize the buffer. Contents are reset.
    pub fn resize(&mut self, w: u16, h: u16) {
        self.w = w;
        self.h = h;
        self.fb = vec![Pixel::Dead; w as usize * h as usize];
    }

    pub fn pixel(&self, x: u16, y: u16) -> Option<Pixel> {
        (x < self.w && y < self.h).then(|| self.fb[self.xy_from(x, y)])
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Pixel]> {
        // `chunks_exact` panics on 0
        self.fb.chunks_exact(self.w.max(1) as usize)
    }

    /// Paint `grid` stretched over the whole buffer. Each pixel takes the state of the cell under
    /// its top left corner, then gridlines are painted on top along each axis where cells are at
    /// least [`MIN_GRIDLINE_CELL`] pixels wide.
    pub fn paint(&mut self, grid: &Grid) {
        let view = Viewport::new(self.w, self.h);

        for y in 0..self.h {
            for x in 0..self.w {
                let coord = view.cell_at(Point::new(x as f64, y as f64), grid);
                let i = self.xy_from(x, y);

                self.fb[i] = match grid.get(coord) {
                    Some(cell) if cell.is_alive() => Pixel::Alive,
                    _ => Pixel::Dead,
                };
            }
        }

        if !self.show_gridlines {
            return;
        }

        let (unit_width, unit_height) = view.cell_size(grid);

        // the far edge lands one past the last pixel and is clipped
        if unit_height >= MIN_GRIDLINE_CELL {
            for r in gridlines(self.h, grid.rows()) {
                let y = r.floor() as u16;
                if y < self.h {
                    for x in 0..self.w {
                        let i = self.xy_from(x, y);
                        self.fb[i] = Pixel::Line;
                    }
                }
            }
        }

        if unit_width >= MIN_GRIDLINE_CELL {
            for c in gridlines(self.w, grid.columns()) {
                let x = c.floor() as u16;
                if x < self.w {
                    for y in 0..self.h {
                        let i = self.xy_from(x, y);
                        self.fb[i] = Pixel::Line;
                    }
                }
            }
        }
    }

    fn xy_from(&self, x: u16, y: u16) -> usize {
        y as usize * self.w as usize + x as usize
    }
}

impl Renderer for FrameBuffer {
    type Error = Infallible;

    fn draw(&mut self, grid: &Grid, width: u16, height: u16) -> Result<(), Self::Error> {
        if (width, height) != (self.w, self.h) {
            self.resize(width, height);
        }

        self.paint(grid);

        Ok(())
    }

    fn set_gridlines(&mut self, show: bool) {
        self.show_gridlines = show;
    }
}

impl fmt::Display for FrameBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.iter_rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }

            for px in row {
                write!(f, "{}", px.as_char())?;
            }
        }

        Ok(())
    }
}
