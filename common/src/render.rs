pub mod recorder;

use glam::{Vec2, vec2};

use crate::{layout::Layout, maze::Grid};
pub use recorder::{DrawCommand, Recorder};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parses `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(text: &str) -> Option<Color> {
        let hex = text.trim().strip_prefix('#')?;
        if !hex.is_ascii() || !(hex.len() == 6 || hex.len() == 8) {
            return None;
        }

        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .ok()
                .map(|value| value as f32 / 255.0)
        };
        let alpha = if hex.len() == 8 { channel(6)? } else { 1.0 };

        Some(Color::new(channel(0)?, channel(2)?, channel(4)?, alpha))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub line_width: f32,
    pub color: Color,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    pub show_indices: bool,
    pub style: StrokeStyle,
    pub font_size: f32,
}

/// The drawing capabilities the maze needs from a host, modelled on a 2D
/// canvas context.
pub trait Surface {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn set_line_width(&mut self, width: f32);
    fn set_stroke_color(&mut self, color: Color);
    fn begin_path(&mut self);
    fn move_to(&mut self, point: Vec2);
    fn line_to(&mut self, point: Vec2);
    fn close_path(&mut self);
    fn stroke(&mut self);
    fn fill_text_centered(&mut self, text: &str, center: Vec2, font_size: f32);
}

/// Issues the draw commands for `grid`. Reads only; calling it again with the
/// same inputs issues the same commands.
pub fn render(surface: &mut dyn Surface, layout: &Layout, grid: &Grid, options: &RenderOptions) {
    surface.set_line_width(options.style.line_width);
    surface.set_stroke_color(options.style.color);

    let size = layout.cell_size;

    for (i, row) in grid.rows().iter().enumerate() {
        for (j, &cell) in row.iter().enumerate() {
            let anchor = layout.anchor(i, j);

            if cell.has_south() {
                draw_segment(surface, anchor, anchor + vec2(size, 0.0));
            }
            if cell.has_west() {
                draw_segment(surface, anchor, anchor - vec2(0.0, size));
            }
        }
    }

    if options.show_indices {
        draw_indices(surface, layout, grid, options.font_size);
    }
}

fn draw_segment(surface: &mut dyn Surface, from: Vec2, to: Vec2) {
    surface.begin_path();
    surface.move_to(from);
    surface.line_to(to);
    surface.close_path();
    surface.stroke();
}

fn draw_indices(surface: &mut dyn Surface, layout: &Layout, grid: &Grid, font_size: f32) {
    let cells_x = grid.cells_x();

    for row in 0..grid.cells_y() {
        for col in 0..cells_x {
            let index = row * cells_x + col;
            surface.fill_text_centered(
                &index.to_string(),
                layout.square_center(row, col),
                font_size,
            );
        }
    }
}
