use std::{env, str::FromStr};

use dotenvy;
use log::warn;

use crate::{maze::MAX_CELLS, render::Color};

pub const DEFAULT_CELLS_X: usize = 4;
pub const DEFAULT_CELLS_Y: usize = 4;
pub const DEFAULT_PADDING: f32 = 64.0;
pub const DEFAULT_LINE_WIDTH: f32 = 3.0;
pub const DEFAULT_FONT_SIZE: f32 = 30.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub cells_x: usize,
    pub cells_y: usize,
    pub padding: f32,
    pub line_width: f32,
    pub stroke: Color,
    pub font_size: f32,
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cells_x: DEFAULT_CELLS_X,
            cells_y: DEFAULT_CELLS_Y,
            padding: DEFAULT_PADDING,
            line_width: DEFAULT_LINE_WIDTH,
            stroke: Color::BLACK,
            font_size: DEFAULT_FONT_SIZE,
            seed: None,
        }
    }
}

impl Settings {
    /// Reads `MAZE_*` variables from the process environment, after loading a
    /// `.env` file from the working directory if there is one.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Settings::default();

        let stroke = match lookup("MAZE_STROKE") {
            None => defaults.stroke,
            Some(raw) => Color::from_hex(&raw).unwrap_or_else(|| {
                warn!("ignoring MAZE_STROKE={:?}: expected #rrggbb or #rrggbbaa", raw);
                defaults.stroke
            }),
        };

        Self {
            cells_x: read(&lookup, "MAZE_CELLS_X", defaults.cells_x, is_cell_count),
            cells_y: read(&lookup, "MAZE_CELLS_Y", defaults.cells_y, is_cell_count),
            padding: read(&lookup, "MAZE_PADDING", defaults.padding, |&p| {
                p.is_finite() && p >= 0.0
            }),
            line_width: read(&lookup, "MAZE_LINE_WIDTH", defaults.line_width, |&w| {
                w.is_finite() && w > 0.0
            }),
            stroke,
            font_size: read(&lookup, "MAZE_FONT_SIZE", defaults.font_size, |&s| {
                s.is_finite() && s > 0.0
            }),
            seed: lookup("MAZE_SEED").and_then(|raw| match raw.trim().parse() {
                Ok(seed) => Some(seed),
                Err(_) => {
                    warn!("ignoring MAZE_SEED={:?}: expected an unsigned integer", raw);
                    None
                }
            }),
        }
    }
}

fn is_cell_count(cells: &usize) -> bool {
    (1..=MAX_CELLS).contains(cells)
}

fn read<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
    is_valid: impl Fn(&T) -> bool,
) -> T {
    let Some(raw) = lookup(key) else {
        return default;
    };

    match raw.trim().parse::<T>() {
        Ok(value) if is_valid(&value) => value,
        _ => {
            warn!("ignoring {}={:?}, using the default", key, raw);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn settings_from(pairs: &[(&str, &str)]) -> Settings {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_missing_variables_fall_back_to_defaults() {
        assert_eq!(settings_from(&[]), Settings::default());
    }

    #[test]
    fn test_variables_override_defaults() {
        let settings = settings_from(&[
            ("MAZE_CELLS_X", "12"),
            ("MAZE_CELLS_Y", " 9 "),
            ("MAZE_PADDING", "16.5"),
            ("MAZE_LINE_WIDTH", "1"),
            ("MAZE_STROKE", "#ffffff"),
            ("MAZE_FONT_SIZE", "18"),
            ("MAZE_SEED", "1234"),
        ]);

        assert_eq!(
            settings,
            Settings {
                cells_x: 12,
                cells_y: 9,
                padding: 16.5,
                line_width: 1.0,
                stroke: Color::WHITE,
                font_size: 18.0,
                seed: Some(1234),
            }
        );
    }

    #[test_log::test]
    fn test_invalid_values_are_ignored() {
        let settings = settings_from(&[
            ("MAZE_CELLS_X", "0"),
            ("MAZE_CELLS_Y", "-2"),
            ("MAZE_PADDING", "NaN"),
            ("MAZE_LINE_WIDTH", "wide"),
            ("MAZE_STROKE", "black"),
            ("MAZE_SEED", "-1"),
        ]);

        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_cell_counts_above_the_maximum_are_ignored() {
        let too_many = (MAX_CELLS + 1).to_string();
        let settings = settings_from(&[
            ("MAZE_CELLS_X", "18446744073709551615"),
            ("MAZE_CELLS_Y", too_many.as_str()),
        ]);

        assert_eq!(settings.cells_x, DEFAULT_CELLS_X);
        assert_eq!(settings.cells_y, DEFAULT_CELLS_Y);

        let max = MAX_CELLS.to_string();
        let settings = settings_from(&[("MAZE_CELLS_X", max.as_str())]);
        assert_eq!(settings.cells_x, MAX_CELLS);
    }
}
