pub mod maker;

use std::fmt;

use rand::Rng;
use strum::EnumIter;

use crate::error::{Axis, MazeError};
use maker::MazeMaker;

/// Largest number of cells accepted along either axis.
pub const MAX_CELLS: usize = 200;

const SOUTH_BIT: u8 = 0b01;
const WEST_BIT: u8 = 0b10;

/// The walls a stored cell owns. Only the south (bottom) and west (left)
/// sides are encoded: the north and east sides of a square belong to its
/// neighbours.
#[derive(Clone, Copy, Debug, Default, EnumIter, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum Walls {
    #[default]
    Open = 0,
    South = SOUTH_BIT,
    West = WEST_BIT,
    SouthWest = SOUTH_BIT | WEST_BIT,
}

impl Walls {
    pub fn bits(self) -> u8 {
        self as u8
    }

    pub fn from_bits(bits: u8) -> Option<Walls> {
        match bits {
            0 => Some(Walls::Open),
            SOUTH_BIT => Some(Walls::South),
            WEST_BIT => Some(Walls::West),
            3 => Some(Walls::SouthWest),
            _ => None,
        }
    }

    pub fn has_south(self) -> bool {
        self.bits() & SOUTH_BIT != 0
    }

    pub fn has_west(self) -> bool {
        self.bits() & WEST_BIT != 0
    }

    pub fn with_south(self) -> Walls {
        match self {
            Walls::Open | Walls::South => Walls::South,
            Walls::West | Walls::SouthWest => Walls::SouthWest,
        }
    }

    pub fn with_west(self) -> Walls {
        match self {
            Walls::Open | Walls::West => Walls::West,
            Walls::South | Walls::SouthWest => Walls::SouthWest,
        }
    }
}

#[derive(Clone, Copy, Debug, EnumIter, Eq, Hash, PartialEq)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GenerationRequest {
    pub cells_x: usize,
    pub cells_y: usize,
}

impl GenerationRequest {
    pub fn new(cells_x: usize, cells_y: usize) -> Result<Self, MazeError> {
        Ok(Self {
            cells_x: check_dimension(Axis::X, cells_x)?,
            cells_y: check_dimension(Axis::Y, cells_y)?,
        })
    }

    /// Parses the two text fields of the generation form.
    pub fn parse(cells_x: &str, cells_y: &str) -> Result<Self, MazeError> {
        let cells_x = parse_dimension(Axis::X, cells_x)?;
        let cells_y = parse_dimension(Axis::Y, cells_y)?;
        Self::new(cells_x, cells_y)
    }
}

pub(crate) fn check_dimension(axis: Axis, cells: usize) -> Result<usize, MazeError> {
    if (1..=MAX_CELLS).contains(&cells) {
        Ok(cells)
    } else {
        Err(MazeError::invalid_dimension(axis, cells))
    }
}

fn parse_dimension(axis: Axis, text: &str) -> Result<usize, MazeError> {
    text.trim()
        .parse::<usize>()
        .map_err(|_| MazeError::invalid_dimension(axis, text.trim()))
}

/// A maze in boundary-inclusive form: `cells_y + 1` rows of `cells_x + 1`
/// cells. Stored row 0 is drawn at the top of the surface.
#[derive(Clone, Eq, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<Walls>>,
}

impl Grid {
    pub fn generate(cells_x: usize, cells_y: usize) -> Result<Grid, MazeError> {
        Self::generate_with(GenerationRequest::new(cells_x, cells_y)?, &mut rand::rng())
    }

    pub fn generate_with<R: Rng + ?Sized>(
        request: GenerationRequest,
        rng: &mut R,
    ) -> Result<Grid, MazeError> {
        let maker = MazeMaker::new(request.cells_x, request.cells_y, rng)?;
        Ok(maker.build())
    }

    pub(crate) fn from_rows(rows: Vec<Vec<Walls>>) -> Grid {
        debug_assert!(
            rows.len() > 1 && rows.iter().all(|row| row.len() == rows[0].len() && row.len() > 1),
            "grid should be rectangular with at least one cell"
        );

        Grid { rows }
    }

    /// Builds a grid from raw wall bitmasks. Returns `None` unless the rows
    /// are rectangular, describe at least one cell and hold values in 0..=3.
    pub fn from_bits(rows: &[Vec<u8>]) -> Option<Grid> {
        let width = rows.first()?.len();
        if rows.len() < 2 || width < 2 || rows.iter().any(|row| row.len() != width) {
            return None;
        }

        let rows = rows
            .iter()
            .map(|row| row.iter().map(|&bits| Walls::from_bits(bits)).collect())
            .collect::<Option<Vec<Vec<Walls>>>>()?;

        Some(Grid { rows })
    }

    pub fn rows(&self) -> &[Vec<Walls>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.rows[0].len()
    }

    pub fn cells_x(&self) -> usize {
        self.column_count() - 1
    }

    pub fn cells_y(&self) -> usize {
        self.row_count() - 1
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Walls> {
        self.rows.get(row).and_then(|cells| cells.get(col)).copied()
    }

    /// Whether the drawn square at (`row`, `col`) has no wall on the given
    /// side. The square's south and west walls are owned by stored cell
    /// (`row + 1`, `col`), its north wall by (`row`, `col`) and its east wall
    /// by (`row + 1`, `col + 1`).
    pub fn is_passage_open(&self, row: usize, col: usize, direction: Direction) -> bool {
        if row >= self.cells_y() || col >= self.cells_x() {
            return false;
        }

        let owner = match direction {
            Direction::North => self.rows[row][col].has_south(),
            Direction::South => self.rows[row + 1][col].has_south(),
            Direction::West => self.rows[row + 1][col].has_west(),
            Direction::East => self.rows[row + 1][col + 1].has_west(),
        };

        !owner
    }

    pub fn log(&self) -> String {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .flat_map(|cell| {
                        [
                            if cell.has_west() { '|' } else { ' ' },
                            if cell.has_south() { '_' } else { ' ' },
                        ]
                    })
                    .collect::<String>()
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.log())
    }
}
