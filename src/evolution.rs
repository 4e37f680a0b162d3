use crate::cell::CellCoordinate;
use crate::cell::CellState;
use crate::grid::Grid;
use crate::rule_set::RuleSet;

/// Offsets of the 8 neighbors of a cell, in reading order.
///
/// ```notrust
///   0 | 1 | 2
///   3 |   | 4
///   5 | 6 | 7
/// ```
const NEIGHBORHOOD: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Count the live neighbors of `coord`. The grid has hard edges: positions outside of it count
/// as dead, nothing wraps around.
pub fn neighbor_count(grid: &Grid, coord: CellCoordinate) -> u8 {
    NEIGHBORHOOD
        .iter()
        .filter(|&&(dr, dc)| grid.get(coord.offset(dr, dc)) == Some(CellState::Alive))
        .count() as u8
}

/// State of a cell in the next generation, given its current state and live neighbor count.
pub fn next_state(current: CellState, neighbors: u8, rules: &RuleSet) -> CellState {
    match current {
        CellState::Alive => rules.is_survival(neighbors).into(),
        CellState::Dead => rules.is_birth(neighbors).into(),
    }
}

/// Compute the next generation of `grid`. Every cell is updated simultaneously from the
/// current generation, and the result has the same dimensions.
pub fn compute_next(grid: &Grid, rules: &RuleSet) -> Grid {
    grid.map(|coord, cell| next_state(cell, neighbor_count(grid, coord), rules))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule_set::B3S23;

    fn grid(s: &str) -> Grid {
        s.parse().unwrap()
    }

    #[test]
    fn lone_cell_dies() {
        let g = grid(
            "
            ...
            .#.
            ...
            ",
        );

        let next = compute_next(&g, &B3S23);

        assert_eq!(next.dimensions(), (3, 3));
        assert!(next.is_empty());
    }

    #[test]
    fn blinker_flips_to_vertical() {
        let g = grid(
            "
            .....
            .....
            .###.
            .....
            .....
            ",
        );

        let next = compute_next(&g, &B3S23);

        insta::assert_snapshot!(next.to_string(), @r"
        .....
        ..#..
        ..#..
        ..#..
        .....
        ");

        assert_eq!(compute_next(&next, &B3S23), g);
    }

    #[test]
    fn blinker_on_the_edge_is_truncated() {
        // Row -1 would be born on an unbounded or toroidal grid
        let g = grid(
            "
            ###
            ...
            ...
            ",
        );

        let next = compute_next(&g, &B3S23);

        assert_eq!(next.to_string(), ".#.\n.#.\n...");
    }

    #[test]
    fn block_is_still() {
        let g = grid(
            "
            ....
            .##.
            .##.
            ....
            ",
        );

        assert_eq!(compute_next(&g, &B3S23), g);
    }

    #[test]
    fn neighborhood_bounds() {
        let g = Grid::from_fn(3, 4, |_| CellState::Alive).unwrap();

        // corners
        assert_eq!(neighbor_count(&g, CellCoordinate::new(0, 0)), 3);
        assert_eq!(neighbor_count(&g, CellCoordinate::new(0, 3)), 3);
        assert_eq!(neighbor_count(&g, CellCoordinate::new(2, 0)), 3);
        assert_eq!(neighbor_count(&g, CellCoordinate::new(2, 3)), 3);

        // edges
        assert_eq!(neighbor_count(&g, CellCoordinate::new(0, 1)), 5);
        assert_eq!(neighbor_count(&g, CellCoordinate::new(1, 0)), 5);
        assert_eq!(neighbor_count(&g, CellCoordinate::new(2, 2)), 5);
        assert_eq!(neighbor_count(&g, CellCoordinate::new(1, 3)), 5);

        // interior
        assert_eq!(neighbor_count(&g, CellCoordinate::new(1, 1)), 8);
        assert_eq!(neighbor_count(&g, CellCoordinate::new(1, 2)), 8);
    }

    #[test]
    fn single_cell_and_single_row() {
        let one = grid("#");
        assert_eq!(neighbor_count(&one, CellCoordinate::new(0, 0)), 0);
        assert!(compute_next(&one, &B3S23).is_empty());

        let row = grid("###");
        assert_eq!(neighbor_count(&row, CellCoordinate::new(0, 1)), 2);
        assert_eq!(compute_next(&row, &B3S23).to_string(), ".#.");
    }

    #[test]
    fn birth_on_zero_neighbors() {
        let g = Grid::new(2, 3).unwrap();
        let rules = RuleSet::from_counts(&[0], &[]).unwrap();

        assert_eq!(compute_next(&g, &rules).population(), 6);
    }

    #[test]
    fn next_state_follows_rules() {
        let rules = RuleSet::from_counts(&[3, 6], &[2, 3]).unwrap();

        for n in 0..=8 {
            let born = n == 3 || n == 6;
            let survives = n == 2 || n == 3;

            assert_eq!(next_state(CellState::Dead, n, &rules), CellState::from(born));
            assert_eq!(next_state(CellState::Alive, n, &rules), CellState::from(survives));
        }
    }
}
