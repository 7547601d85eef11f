use super::Cell;

/// Conway's Game of Life (B3/S23).
///
/// 1. Live cell with fewer than 2 neighbors dies (underpopulation)
/// 2. Live cell with 2 or 3 neighbors survives
/// 3. Live cell with more than 3 neighbors dies (overcrowding)
/// 4. Dead cell with exactly 3 neighbors becomes alive (reproduction)
///
/// Total over every count, so callers never need to range-check `neighbors`.
pub const fn apply_rule(current: Cell, neighbors: u8) -> Cell {
    match (current, neighbors) {
        (Cell::Alive, 0 | 1) => Cell::Dead,
        (Cell::Alive, 2 | 3) => Cell::Alive,
        (Cell::Alive, _) => Cell::Dead,
        (Cell::Dead, 3) => Cell::Alive,
        (Cell::Dead, _) => Cell::Dead,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underpopulation() {
        assert_eq!(apply_rule(Cell::Alive, 0), Cell::Dead);
        assert_eq!(apply_rule(Cell::Alive, 1), Cell::Dead);
    }

    #[test]
    fn test_survival() {
        assert_eq!(apply_rule(Cell::Alive, 2), Cell::Alive);
        assert_eq!(apply_rule(Cell::Alive, 3), Cell::Alive);
    }

    #[test]
    fn test_overcrowding() {
        assert_eq!(apply_rule(Cell::Alive, 4), Cell::Dead);
        assert_eq!(apply_rule(Cell::Alive, 8), Cell::Dead);
    }

    #[test]
    fn test_reproduction() {
        assert_eq!(apply_rule(Cell::Dead, 3), Cell::Alive);
        assert_eq!(apply_rule(Cell::Dead, 2), Cell::Dead);
        assert_eq!(apply_rule(Cell::Dead, 4), Cell::Dead);
    }

    #[test]
    fn test_full_rule_table() {
        // (current, neighbors) -> next, all 18 reachable inputs
        let expected = |current: Cell, n: u8| match current {
            Cell::Alive if n < 2 => Cell::Dead,
            Cell::Alive if n <= 3 => Cell::Alive,
            Cell::Alive => Cell::Dead,
            Cell::Dead if n == 3 => Cell::Alive,
            Cell::Dead => Cell::Dead,
        };

        let mut checked = 0;
        for current in [Cell::Alive, Cell::Dead] {
            for n in 0..=8u8 {
                assert_eq!(
                    apply_rule(current, n),
                    expected(current, n),
                    "rule mismatch for {:?} with {} neighbors",
                    current,
                    n
                );
                checked += 1;
            }
        }
        assert_eq!(checked, 18);
    }

    #[test]
    fn test_out_of_range_counts_are_dead() {
        assert_eq!(apply_rule(Cell::Alive, 9), Cell::Dead);
        assert_eq!(apply_rule(Cell::Dead, u8::MAX), Cell::Dead);
    }
}
