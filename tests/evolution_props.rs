use proptest::prelude::*;

use lifecanvas::cell::CellCoordinate;
use lifecanvas::cell::CellState;
use lifecanvas::editor;
use lifecanvas::evolution;
use lifecanvas::grid::Grid;
use lifecanvas::rule_set::RuleSet;

fn arb_grid() -> impl Strategy<Value = Grid> {
    (1usize..12, 1usize..12).prop_flat_map(|(rows, columns)| {
        prop::collection::vec(any::<bool>(), rows * columns).prop_map(move |cells| {
            Grid::from_fn(rows, columns, |c| {
                cells[c.row as usize * columns + c.column as usize].into()
            })
            .unwrap()
        })
    })
}

fn arb_rules() -> impl Strategy<Value = RuleSet> {
    (any::<u16>(), any::<u16>()).prop_map(|(b, s)| RuleSet::new(b, s))
}

proptest! {
    #[test]
    fn next_generation_keeps_dimensions(grid in arb_grid(), rules in arb_rules()) {
        let next = evolution::compute_next(&grid, &rules);

        prop_assert_eq!(next.dimensions(), grid.dimensions());
    }

    #[test]
    fn next_generation_follows_rules(grid in arb_grid(), rules in arb_rules()) {
        let next = evolution::compute_next(&grid, &rules);

        for r in 0..grid.rows() as isize {
            for c in 0..grid.columns() as isize {
                let at = CellCoordinate::new(r, c);
                let n = evolution::neighbor_count(&grid, at);

                let expected = match editor::get_state(&grid, at) {
                    CellState::Alive => rules.is_survival(n),
                    CellState::Dead => rules.is_birth(n),
                };

                prop_assert_eq!(editor::get_state(&next, at), CellState::from(expected));
            }
        }
    }

    #[test]
    fn dead_grid_stays_dead(rows in 1usize..20, columns in 1usize..20, b in any::<u16>(), s in any::<u16>()) {
        // no births from zero neighbors
        let rules = RuleSet::new(b & !1, s);
        let grid = Grid::new(rows, columns).unwrap();

        prop_assert!(evolution::compute_next(&grid, &rules).is_empty());
    }

    #[test]
    fn neighbor_counts_are_bounded_by_position(rows in 1usize..10, columns in 1usize..10) {
        let grid = Grid::from_fn(rows, columns, |_| CellState::Alive).unwrap();

        for r in 0..rows as isize {
            for c in 0..columns as isize {
                let n = evolution::neighbor_count(&grid, CellCoordinate::new(r, c));

                let on_row_edge = r == 0 || r == rows as isize - 1;
                let on_column_edge = c == 0 || c == columns as isize - 1;

                match (on_row_edge, on_column_edge) {
                    (true, true) => prop_assert!(n <= 3),
                    (true, false) | (false, true) => prop_assert!(n <= 5),
                    (false, false) => prop_assert_eq!(n, 8),
                }
            }
        }
    }

    #[test]
    fn toggle_is_an_involution(grid in arb_grid(), r in 0isize..12, c in 0isize..12) {
        let mut edited = grid.clone();
        let at = CellCoordinate::new(r, c);

        editor::toggle(&mut edited, at);
        prop_assert_eq!(edited != grid, grid.contains(at));

        editor::toggle(&mut edited, at);
        prop_assert_eq!(edited, grid);
    }

    #[test]
    fn set_state_out_of_bounds_is_noop(grid in arb_grid(), dr in 0isize..4, c in -2isize..14) {
        let mut edited = grid.clone();
        let at = CellCoordinate::new(grid.rows() as isize + dr, c);

        prop_assert!(!editor::set_state(&mut edited, at, CellState::Alive));
        prop_assert_eq!(edited, grid);
    }

    #[test]
    fn set_state_reports_change(grid in arb_grid(), alive in any::<bool>()) {
        let mut edited = grid.clone();
        let at = CellCoordinate::new(0, 0);
        let state = CellState::from(alive);
        let before = editor::get_state(&grid, at);

        prop_assert_eq!(editor::set_state(&mut edited, at, state), before != state);
        prop_assert_eq!(editor::get_state(&edited, at), state);
    }
}
