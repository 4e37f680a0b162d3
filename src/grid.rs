use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::cell::CellCoordinate;
use crate::cell::CellState;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GridError {
    #[error("Invalid grid: {rows}x{columns} is empty or too large")]
    Dimensions { rows: usize, columns: usize },

    /// `line` counts from 1
    #[error("Invalid grid: line {line} has {got} cells, expected {expected}")]
    Jagged {
        line: usize,
        expected: usize,
        got: usize,
    },

    /// `line` counts from 1
    #[error("Invalid grid: unrecognized cell '{got}' on line {line}")]
    InvalidCell { line: usize, got: char },

    #[error("Live probability must lie in [0, 1], got {0}")]
    Probability(f64),
}

/// A rectangular matrix of cells.
///
/// Cells are stored row-major in a single buffer, so every row always has exactly
/// [`Grid::columns`] cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create an all dead grid
    pub fn new(rows: usize, columns: usize) -> Result<Self, GridError> {
        let len = Self::cell_count(rows, columns)?;

        Ok(Self {
            rows,
            columns,
            cells: vec![CellState::Dead; len],
        })
    }

    /// Build a grid by calling `f` once per cell, in row-major order.
    pub fn from_fn<F>(rows: usize, columns: usize, mut f: F) -> Result<Self, GridError>
    where
        F: FnMut(CellCoordinate) -> CellState,
    {
        let mut cells = Vec::with_capacity(Self::cell_count(rows, columns)?);
        for r in 0..rows {
            for c in 0..columns {
                cells.push(f(CellCoordinate::new(r as isize, c as isize)));
            }
        }

        Ok(Self {
            rows,
            columns,
            cells,
        })
    }

    /// Build a grid from nested rows. Fails if there are no rows, no columns, or rows of
    /// different lengths. Rows are numbered from 1 in [`GridError::Jagged`].
    pub fn from_rows(rows: Vec<Vec<CellState>>) -> Result<Self, GridError> {
        let numbered = rows.into_iter().enumerate().map(|(i, row)| (i + 1, row));

        Self::from_numbered_rows(numbered.collect())
    }

    fn from_numbered_rows(rows: Vec<(usize, Vec<CellState>)>) -> Result<Self, GridError> {
        let columns = rows.first().map_or(0, |(_, row)| row.len());
        let n = rows.len();
        let mut cells = Vec::with_capacity(Self::cell_count(n, columns)?);

        for (line, cs) in rows {
            if cs.len() != columns {
                return Err(GridError::Jagged {
                    line,
                    expected: columns,
                    got: cs.len(),
                });
            }

            cells.extend(cs);
        }

        Ok(Self {
            rows: n,
            columns,
            cells,
        })
    }

    /// Number of cells in a `rows x columns` grid. Fails if either is zero or the grid could
    /// not be allocated.
    pub fn cell_count(rows: usize, columns: usize) -> Result<usize, GridError> {
        rows.checked_mul(columns)
            .filter(|&len| len > 0 && len <= isize::MAX as usize)
            .ok_or(GridError::Dimensions { rows, columns })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// `(rows, columns)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    pub fn contains(&self, coord: CellCoordinate) -> bool {
        self.index(coord).is_some()
    }

    /// Convert a coordinate into an index of `cells`, if it is in bounds.
    fn index(&self, coord: CellCoordinate) -> Option<usize> {
        let row = usize::try_from(coord.row).ok()?;
        let column = usize::try_from(coord.column).ok()?;

        (row < self.rows && column < self.columns).then(|| row * self.columns + column)
    }

    pub fn get(&self, coord: CellCoordinate) -> Option<CellState> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Mutable access to a single cell. Mutation from outside the crate goes through
    /// [`crate::editor`].
    pub(crate) fn cell_mut(&mut self, coord: CellCoordinate) -> Option<&mut CellState> {
        let i = self.index(coord)?;
        self.cells.get_mut(i)
    }

    /// Produce a grid of the same dimensions by mapping every cell.
    pub fn map<F>(&self, mut f: F) -> Self
    where
        F: FnMut(CellCoordinate, CellState) -> CellState,
    {
        let cells = self
            .cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| {
                let (r, c) = (i / self.columns, i % self.columns);
                f(CellCoordinate::new(r as isize, c as isize), cell)
            })
            .collect();

        Self {
            rows: self.rows,
            columns: self.columns,
            cells,
        }
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.population() == 0
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks_exact(self.columns)
    }

    /// Copy the grid out as nested rows
    pub fn to_rows(&self) -> Vec<Vec<CellState>> {
        self.iter_rows().map(<[CellState]>::to_vec).collect()
    }
}

/// Parses one row per line, see [`CellState::from_char`]. Blank lines and surrounding
/// whitespace on each line are ignored, but still count towards the line numbers in errors.
impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();

        for (i, text) in s.lines().enumerate() {
            let line = i + 1;
            let text = text.trim();
            if text.is_empty() {
                continue;
            }

            let row = text
                .chars()
                .map(|c| CellState::from_char(c).ok_or(GridError::InvalidCell { line, got: c }))
                .collect::<Result<Vec<_>, _>>()?;

            rows.push((line, row));
        }

        Self::from_numbered_rows(rows)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.iter_rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }

            for cell in row {
                write!(f, "{cell}")?;
            }
        }

        Ok(())
    }
}
