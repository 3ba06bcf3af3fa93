use glam::Vec2;
use macroquad::prelude::{Color, WHITE, draw_line, draw_rectangle, draw_text, measure_text};

use common::render::{Color as MazeColor, Surface};

pub const BACKGROUND_COLOR: Color = WHITE;

fn to_macroquad(color: MazeColor) -> Color {
    Color::new(color.r, color.g, color.b, color.a)
}

/// Line segments collected between `begin_path` and `stroke`.
#[derive(Debug, Default)]
pub struct Path {
    segments: Vec<(Vec2, Vec2)>,
    start: Option<Vec2>,
    cursor: Option<Vec2>,
}

impl Path {
    pub fn clear(&mut self) {
        self.segments.clear();
        self.start = None;
        self.cursor = None;
    }

    pub fn move_to(&mut self, point: Vec2) {
        self.start = Some(point);
        self.cursor = Some(point);
    }

    pub fn line_to(&mut self, point: Vec2) {
        match self.cursor {
            Some(cursor) => self.segments.push((cursor, point)),
            None => self.start = Some(point),
        }
        self.cursor = Some(point);
    }

    pub fn close(&mut self) {
        let (Some(start), Some(cursor)) = (self.start, self.cursor) else {
            return;
        };

        // Closing a single line would only retrace it.
        if start != cursor && self.segments.last() != Some(&(start, cursor)) {
            self.segments.push((cursor, start));
        }
        self.cursor = Some(start);
    }

    pub fn segments(&self) -> &[(Vec2, Vec2)] {
        &self.segments
    }
}

pub struct MacroquadCanvas {
    line_width: f32,
    stroke_color: Color,
    path: Path,
}

impl MacroquadCanvas {
    pub fn new() -> Self {
        Self {
            line_width: 1.0,
            stroke_color: to_macroquad(MazeColor::BLACK),
            path: Path::default(),
        }
    }
}

impl Surface for MacroquadCanvas {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        draw_rectangle(x, y, width, height, BACKGROUND_COLOR);
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    fn set_stroke_color(&mut self, color: MazeColor) {
        self.stroke_color = to_macroquad(color);
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, point: Vec2) {
        self.path.move_to(point);
    }

    fn line_to(&mut self, point: Vec2) {
        self.path.line_to(point);
    }

    fn close_path(&mut self) {
        self.path.close();
    }

    fn stroke(&mut self) {
        for (from, to) in self.path.segments() {
            draw_line(
                from.x,
                from.y,
                to.x,
                to.y,
                self.line_width,
                self.stroke_color,
            );
        }
    }

    fn fill_text_centered(&mut self, text: &str, center: Vec2, font_size: f32) {
        let dimensions = measure_text(text, None, font_size as u16, 1.0);
        draw_text(
            text,
            center.x - dimensions.width / 2.0,
            center.y + dimensions.height / 2.0,
            font_size,
            self.stroke_color,
        );
    }
}
