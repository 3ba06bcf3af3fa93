use rand::Rng;

use super::super::{MazeMaker, Walls};

pub trait BinaryTree {
    fn binary_tree(&mut self);
}

impl<R: Rng + ?Sized> BinaryTree for MazeMaker<'_, R> {
    fn binary_tree(&mut self) {
        let (cells_x, cells_y) = (self.cells_x, self.cells_y);

        // Each carved cell keeps exactly one of its two walls, so it opens
        // onto either its southern or its western neighbour.
        for row in 1..=cells_y {
            for col in 1..=cells_x {
                let walls = if self.rng.random_bool(0.5) {
                    Walls::South
                } else {
                    Walls::West
                };
                self.set(row, col, walls);
            }
        }

        self.set(0, 0, Walls::SouthWest);

        // Left and right edges.
        for row in 0..cells_y {
            self.add_west(row, 0);
            self.set(row, cells_x, Walls::West);
        }

        // Bottom and top edges.
        for col in 0..cells_x {
            self.add_south(0, col);
            self.set(cells_y, col, Walls::South);
        }

        // Exit.
        self.set(cells_y, cells_x, Walls::Open);

        // The forced corner row ends up drawn at the bottom.
        self.grid.reverse();
    }
}
