use crate::cell::CellCoordinate;
use crate::grid::Grid;

/// A position on the canvas, in pixels from its top left corner.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Turns raw input events into canvas-local points.
pub trait PointerSource {
    type Event;

    /// The point the event happened at, or `None` if it carries no position.
    fn canvas_point(&self, event: &Self::Event) -> Option<Point>;
}

/// Size of the canvas the grid is drawn on, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Width and height of a single cell of `grid`, in pixels.
    pub fn cell_size(&self, grid: &Grid) -> (f64, f64) {
        (
            self.width as f64 / grid.columns() as f64,
            self.height as f64 / grid.rows() as f64,
        )
    }

    /// The largest canvas inside this one where each cell of a `rows x columns` grid is a whole
    /// number of pixels. An axis with more cells than pixels is left as is.
    pub fn fit(&self, rows: usize, columns: usize) -> Self {
        Self::new(fit_axis(self.width, columns), fit_axis(self.height, rows))
    }

    /// The cell under `point`. Points outside the canvas map to out of bounds coordinates.
    pub fn cell_at(&self, point: Point, grid: &Grid) -> CellCoordinate {
        let (unit_width, unit_height) = self.cell_size(grid);

        CellCoordinate::new(
            (point.y / unit_height).floor() as isize,
            (point.x / unit_width).floor() as isize,
        )
    }
}

fn fit_axis(length: u16, cells: usize) -> u16 {
    match usize::from(length) / cells.max(1) {
        0 => length,
        scale => u16::try_from(cells * scale).unwrap_or(length),
    }
}

/// Positions of the `count + 1` lines splitting `length` into `count` equal parts, both ends
/// included.
pub fn gridlines(length: u16, count: usize) -> impl Iterator<Item = f64> {
    let unit = length as f64 / count as f64;

    (0..=count).map(move |i| i as f64 * unit)
}
