use std::fmt;

/// The state of a single cell of the grid.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    pub const fn is_alive(self) -> bool {
        matches!(self, CellState::Alive)
    }

    /// The opposite state. `Dead` becomes `Alive` and vice versa.
    pub const fn toggled(self) -> Self {
        match self {
            CellState::Dead => CellState::Alive,
            CellState::Alive => CellState::Dead,
        }
    }

    /// Character used when printing grids: `#` for alive, `.` for dead.
    pub const fn as_char(self) -> char {
        match self {
            CellState::Dead => '.',
            CellState::Alive => '#',
        }
    }

    /// Inverse of [`CellState::as_char`]. Also accepts `O`/`o`/`1` for alive and `_`/`0` for
    /// dead, which is how most hand-written patterns look.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '#' | 'O' | 'o' | '1' => Some(CellState::Alive),
            '.' | '_' | '0' => Some(CellState::Dead),
            _ => None,
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Position of a cell as `(row, column)`, with the origin in the top left corner.
///
/// Coordinates are signed so that positions just outside the grid (such as a pointer left of
/// the canvas) are representable. They are simply out of bounds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellCoordinate {
    pub row: isize,
    pub column: isize,
}

impl CellCoordinate {
    pub const fn new(row: isize, column: isize) -> Self {
        Self { row, column }
    }

    pub const fn offset(self, dr: isize, dc: isize) -> Self {
        Self {
            row: self.row + dr,
            column: self.column + dc,
        }
    }
}

impl From<(isize, isize)> for CellCoordinate {
    fn from((row, column): (isize, isize)) -> Self {
        Self { row, column }
    }
}
