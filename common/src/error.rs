use strum::Display;
use thiserror::Error;

use crate::maze::MAX_CELLS;

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum Axis {
    #[strum(serialize = "x")]
    X,
    #[strum(serialize = "y")]
    Y,
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum MazeError {
    #[error(
        "invalid {axis} dimension {value:?}: expected a whole number of cells from 1 to {max}",
        max = MAX_CELLS
    )]
    InvalidDimension { axis: Axis, value: String },
    #[error("viewport {width}x{height} leaves no room for a maze inside {padding} padding")]
    DegenerateViewport {
        width: f32,
        height: f32,
        padding: f32,
    },
}

impl MazeError {
    pub fn invalid_dimension(axis: Axis, value: impl ToString) -> Self {
        MazeError::InvalidDimension {
            axis,
            value: value.to_string(),
        }
    }
}
