use super::Cell;
use rayon::prelude::*;

/// Grid is the rectangular cell matrix the stepper operates on.
/// Stored flat in row-major order, so every row has the same length by
/// construction. Evolution is functional: stepping returns a new grid
/// and leaves the input untouched.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Create a randomized grid. Each cell starts alive with probability
    /// `live_probability`, clamped to [0, 1].
    pub fn random(width: usize, height: usize, live_probability: f64) -> Self {
        use rand::Rng;
        let mut rng = rand::rng();
        let p = live_probability.clamp(0.0, 1.0);

        let cells = (0..width * height)
            .map(|_| {
                if rng.random_bool(p) {
                    Cell::Alive
                } else {
                    Cell::Dead
                }
            })
            .collect();

        Self {
            width,
            height,
            cells,
        }
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to 1D index
    const fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height).then(|| self.cells[self.index(x, y)])
    }

    /// Zero-bounded accessor: any position outside the grid reads as Dead.
    /// Neighborhoods never wrap to the opposite edge.
    fn cell_at(&self, x: isize, y: isize) -> Cell {
        if x < 0 || y < 0 {
            return Cell::Dead;
        }
        self.get(x as usize, y as usize).unwrap_or(Cell::Dead)
    }

    /// Set cell at position; out-of-range coordinates are ignored
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Flip a single cell; out-of-range coordinates are ignored
    pub fn toggle(&mut self, x: usize, y: usize) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = self.cells[idx].toggle();
        }
    }

    /// Count live cells among the 8 adjacent positions, diagonals included.
    /// The border contributes zero live neighbors.
    pub fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        let (x, y) = (x as isize, y as isize);
        let mut count = 0u8;
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                count += self.cell_at(x + dx, y + dy).is_alive() as u8;
            }
        }
        count
    }

    /// Advance one generation. Pure: returns a freshly built grid of
    /// identical dimensions, `self` is not mutated.
    pub fn step(&self) -> Self {
        let cells = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| {
                let current = self.cells[self.index(x, y)];
                current.next_state(self.live_neighbors(x, y))
            })
            .collect();

        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Advance one generation with row-parallel evaluation using rayon.
    /// Produces the same grid as `step`, cell for cell.
    pub fn step_parallel(&self) -> Self {
        let cells: Vec<Cell> = (0..self.height)
            .into_par_iter()
            .flat_map_iter(|y| {
                (0..self.width).map(move |x| {
                    let current = self.cells[self.index(x, y)];
                    current.next_state(self.live_neighbors(x, y))
                })
            })
            .collect();

        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Apply `step` the given number of generations in sequence.
    /// Zero generations returns a fresh copy equal to the input.
    pub fn advance(&self, generations: u32) -> Self {
        let mut grid = self.clone();
        for _ in 0..generations {
            grid = grid.step();
        }
        grid
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| (x, y, self.cells[self.index(x, y)]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_dead_stays_dead() {
        let grid = Grid::new(8, 8);
        let next = grid.step();

        assert_eq!(next.population(), 0);
        assert_eq!(next.dimensions(), (8, 8));
    }

    #[test]
    fn test_isolated_cell_dies() {
        let mut grid = Grid::new(10, 10);
        grid.set(5, 5, Cell::Alive);

        let next = grid.step();
        assert_eq!(next.population(), 0);
    }

    #[test]
    fn test_block_still_life() {
        let mut grid = Grid::new(10, 10);
        grid.set(4, 4, Cell::Alive);
        grid.set(5, 4, Cell::Alive);
        grid.set(4, 5, Cell::Alive);
        grid.set(5, 5, Cell::Alive);

        let next = grid.step();
        assert_eq!(next, grid);
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut grid = Grid::new(10, 10);

        // Horizontal blinker at center
        grid.set(4, 5, Cell::Alive);
        grid.set(5, 5, Cell::Alive);
        grid.set(6, 5, Cell::Alive);

        // After one generation: vertical, center preserved
        let next = grid.step();
        assert_eq!(next.get(4, 5), Some(Cell::Dead));
        assert_eq!(next.get(5, 4), Some(Cell::Alive));
        assert_eq!(next.get(5, 5), Some(Cell::Alive));
        assert_eq!(next.get(5, 6), Some(Cell::Alive));
        assert_eq!(next.get(6, 5), Some(Cell::Dead));
        assert_eq!(next.population(), 3);

        // After two generations: back to horizontal
        let next2 = next.step();
        assert_eq!(next2, grid);
    }

    #[test]
    fn test_dimensions_preserved_for_rectangles() {
        let mut grid = Grid::new(7, 3);
        grid.set(1, 1, Cell::Alive);
        grid.set(2, 1, Cell::Alive);
        grid.set(3, 1, Cell::Alive);

        assert_eq!(grid.step().dimensions(), (7, 3));
        assert_eq!(grid.advance(4).dimensions(), (7, 3));
    }

    #[test]
    fn test_corner_neighbor_counts() {
        let mut grid = Grid::new(5, 5);
        grid.set(0, 0, Cell::Alive);
        grid.set(1, 0, Cell::Alive);
        grid.set(0, 1, Cell::Alive);
        grid.set(1, 1, Cell::Alive);

        // Corner cell sees only its 3 in-bounds neighbors
        assert_eq!(grid.live_neighbors(0, 0), 3);
        assert_eq!(grid.live_neighbors(1, 1), 3);
        // One step out along the border
        assert_eq!(grid.live_neighbors(2, 0), 2);
    }

    #[test]
    fn test_border_blinker_clipped_not_wrapped() {
        let mut grid = Grid::new(5, 5);

        // Horizontal triple on the top row
        grid.set(0, 0, Cell::Alive);
        grid.set(1, 0, Cell::Alive);
        grid.set(2, 0, Cell::Alive);

        let next = grid.step();

        // Center survives, the row below gains a cell; the phantom row
        // above the grid contributes nothing
        assert_eq!(next.get(1, 0), Some(Cell::Alive));
        assert_eq!(next.get(1, 1), Some(Cell::Alive));
        assert_eq!(next.population(), 2);
    }

    #[test]
    fn test_edges_do_not_wrap() {
        // Vertical blinker hugging the left edge of a 5-wide grid
        let mut grid = Grid::new(5, 5);
        grid.set(0, 1, Cell::Alive);
        grid.set(0, 2, Cell::Alive);
        grid.set(0, 3, Cell::Alive);

        // Cells on the right edge see zero live neighbors
        assert_eq!(grid.live_neighbors(4, 2), 0);

        let next = grid.step();

        // Birth happens next to the blinker, never across the seam
        assert_eq!(next.get(1, 2), Some(Cell::Alive));
        assert_eq!(next.get(4, 2), Some(Cell::Dead));
    }

    #[test]
    fn test_advance_zero_is_fresh_copy() {
        let mut grid = Grid::new(6, 6);
        grid.set(2, 2, Cell::Alive);

        let mut copy = grid.advance(0);
        assert_eq!(copy, grid);

        // Mutating the copy must not reach back into the original
        copy.set(0, 0, Cell::Alive);
        assert_eq!(grid.get(0, 0), Some(Cell::Dead));
    }

    #[test]
    fn test_advance_matches_repeated_step() {
        let mut grid = Grid::new(12, 12);
        // R-pentomino seed, enough churn to catch divergence
        grid.set(5, 4, Cell::Alive);
        grid.set(6, 4, Cell::Alive);
        grid.set(4, 5, Cell::Alive);
        grid.set(5, 5, Cell::Alive);
        grid.set(5, 6, Cell::Alive);

        let mut expected = grid.clone();
        for n in 0..6 {
            assert_eq!(grid.advance(n), expected, "diverged at generation {}", n);
            expected = expected.step();
        }
    }

    #[test]
    fn test_parallel_matches_serial() {
        let mut grid = Grid::new(50, 50);
        for i in 0..120 {
            grid.set(i % 50, (i * 7) % 50, Cell::Alive);
        }

        assert_eq!(grid.step_parallel(), grid.step());
    }

    #[test]
    fn test_random_probability_extremes() {
        let empty = Grid::random(20, 20, 0.0);
        assert_eq!(empty.population(), 0);

        let full = Grid::random(20, 20, 1.0);
        assert_eq!(full.population(), 400);

        // Out-of-range probabilities clamp instead of panicking
        let clamped = Grid::random(10, 10, 1.5);
        assert_eq!(clamped.population(), 100);
    }

    #[test]
    fn test_iter_cells_covers_grid_in_row_major_order() {
        let mut grid = Grid::new(3, 2);
        grid.set(2, 0, Cell::Alive);
        grid.set(0, 1, Cell::Alive);

        let cells: Vec<_> = grid.iter_cells().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], (0, 0, Cell::Dead));
        assert_eq!(cells[2], (2, 0, Cell::Alive));
        assert_eq!(cells[3], (0, 1, Cell::Alive));
        assert_eq!(cells[5], (2, 1, Cell::Dead));
    }

    #[test]
    fn test_out_of_range_edits_ignored() {
        let mut grid = Grid::new(4, 4);
        grid.set(9, 9, Cell::Alive);
        grid.toggle(4, 0);
        grid.toggle(0, 4);

        assert_eq!(grid.population(), 0);
        assert_eq!(grid.get(9, 9), None);
    }
}

#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_grid() -> impl Strategy<Value = Grid> {
        (1usize..24, 1usize..24).prop_flat_map(|(w, h)| {
            proptest::collection::vec(any::<bool>(), w * h).prop_map(move |bits| {
                let mut grid = Grid::new(w, h);
                for (i, alive) in bits.into_iter().enumerate() {
                    if alive {
                        grid.set(i % w, i / w, Cell::Alive);
                    }
                }
                grid
            })
        })
    }

    proptest! {
        #[test]
        fn step_preserves_dimensions(grid in arb_grid()) {
            prop_assert_eq!(grid.step().dimensions(), grid.dimensions());
        }

        #[test]
        fn step_does_not_mutate_input(grid in arb_grid()) {
            let before = grid.clone();
            let _ = grid.step();
            prop_assert_eq!(grid, before);
        }

        #[test]
        fn advance_is_iterated_step(grid in arb_grid(), n in 0u32..5) {
            let mut expected = grid.clone();
            for _ in 0..n {
                expected = expected.step();
            }
            prop_assert_eq!(grid.advance(n), expected);
        }

        #[test]
        fn parallel_step_agrees_with_serial(grid in arb_grid()) {
            prop_assert_eq!(grid.step_parallel(), grid.step());
        }
    }
}
