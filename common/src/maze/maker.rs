pub mod algorithms;

use rand::Rng;

use super::{Grid, Walls, check_dimension};
use crate::error::{Axis, MazeError};
use algorithms::binary_tree::BinaryTree;

pub struct MazeMaker<'a, R: Rng + ?Sized> {
    pub grid: Vec<Vec<Walls>>,
    pub rng: &'a mut R,
    cells_x: usize,
    cells_y: usize,
}

impl<'a, R: Rng + ?Sized> MazeMaker<'a, R> {
    pub fn new(cells_x: usize, cells_y: usize, rng: &'a mut R) -> Result<Self, MazeError> {
        let cells_x = check_dimension(Axis::X, cells_x)?;
        let cells_y = check_dimension(Axis::Y, cells_y)?;

        // One extra row and column hold the outer boundary walls.
        let grid = vec![vec![Walls::Open; cells_x + 1]; cells_y + 1];

        Ok(MazeMaker {
            grid,
            rng,
            cells_x,
            cells_y,
        })
    }

    pub fn build(mut self) -> Grid {
        self.binary_tree();
        Grid::from_rows(self.grid)
    }

    fn set(&mut self, row: usize, col: usize, walls: Walls) {
        self.grid[row][col] = walls;
    }

    fn add_south(&mut self, row: usize, col: usize) {
        self.grid[row][col] = self.grid[row][col].with_south();
    }

    fn add_west(&mut self, row: usize, col: usize) {
        self.grid[row][col] = self.grid[row][col].with_west();
    }
}
