use glam::{Vec2, vec2};

use crate::{
    error::{Axis, MazeError},
    maze::{Grid, check_dimension},
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Maps stored grid indices to surface coordinates. Cells are always square.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub cell_size: f32,
    pub origin: Vec2,
}

impl Layout {
    /// Largest square cell size that fits `cells_x` by `cells_y` cells inside
    /// the viewport less `padding` on every side, centred on the viewport.
    pub fn fit(
        viewport: Viewport,
        cells_x: usize,
        cells_y: usize,
        padding: f32,
    ) -> Result<Layout, MazeError> {
        let cells_x = check_dimension(Axis::X, cells_x)?;
        let cells_y = check_dimension(Axis::Y, cells_y)?;

        let Viewport { width, height } = viewport;
        if width <= 2.0 * padding || height <= 2.0 * padding {
            return Err(MazeError::DegenerateViewport {
                width,
                height,
                padding,
            });
        }

        let max_cell_width = (width - 2.0 * padding) / cells_x as f32;
        let max_cell_height = (height - 2.0 * padding) / cells_y as f32;
        let cell_size = max_cell_width.min(max_cell_height);

        let origin = vec2(
            width / 2.0 - cells_x as f32 * cell_size / 2.0,
            height / 2.0 - cells_y as f32 * cell_size / 2.0,
        );

        Ok(Layout { cell_size, origin })
    }

    pub fn for_grid(viewport: Viewport, grid: &Grid, padding: f32) -> Result<Layout, MazeError> {
        Self::fit(viewport, grid.cells_x(), grid.cells_y(), padding)
    }

    /// Point from which stored cell (`row`, `col`) draws its walls.
    pub fn anchor(&self, row: usize, col: usize) -> Vec2 {
        self.origin + vec2(col as f32, row as f32) * self.cell_size
    }

    /// Centre of the drawn square at (`row`, `col`).
    pub fn square_center(&self, row: usize, col: usize) -> Vec2 {
        self.origin + (vec2(col as f32, row as f32) + Vec2::splat(0.5)) * self.cell_size
    }
}
