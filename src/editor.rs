//! Single cell reads and writes against a [`Grid`].
//!
//! Out of bounds coordinates are never an error: reads yield [`CellState::Dead`] and writes do
//! nothing.

use tracing::trace;

use crate::cell::CellCoordinate;
use crate::cell::CellState;
use crate::grid::Grid;

pub fn get_state(grid: &Grid, coord: CellCoordinate) -> CellState {
    grid.get(coord).unwrap_or(CellState::Dead)
}

/// Set the cell at `coord` to `state`. Returns whether the grid changed.
pub fn set_state(grid: &mut Grid, coord: CellCoordinate, state: CellState) -> bool {
    let Some(cell) = grid.cell_mut(coord) else {
        return false;
    };

    if *cell == state {
        return false;
    }

    *cell = state;
    trace!(row = coord.row, column = coord.column, ?state, "set cell");

    true
}

/// Flip the cell at `coord` between dead and alive.
pub fn toggle(grid: &mut Grid, coord: CellCoordinate) {
    if let Some(cell) = grid.cell_mut(coord) {
        *cell = cell.toggled();
        trace!(row = coord.row, column = coord.column, state = ?*cell, "toggled cell");
    }
}
