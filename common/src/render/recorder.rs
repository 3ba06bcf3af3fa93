use glam::Vec2;

use super::{Color, Surface};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    ClearRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    SetLineWidth(f32),
    SetStrokeColor(Color),
    BeginPath,
    MoveTo(Vec2),
    LineTo(Vec2),
    ClosePath,
    Stroke,
    FillTextCentered {
        text: String,
        center: Vec2,
        font_size: f32,
    },
}

/// A surface that keeps every command it is given, for headless use and
/// for comparing frames.
#[derive(Debug, Default)]
pub struct Recorder {
    pub commands: Vec<DrawCommand>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Every `move_to` immediately followed by a `line_to`, as a pair of end
    /// points.
    pub fn segments(&self) -> Vec<(Vec2, Vec2)> {
        self.commands
            .windows(2)
            .filter_map(|pair| match pair {
                [DrawCommand::MoveTo(from), DrawCommand::LineTo(to)] => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    pub fn labels(&self) -> Vec<(String, Vec2)> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::FillTextCentered { text, center, .. } => {
                    Some((text.clone(), *center))
                }
                _ => None,
            })
            .collect()
    }
}

impl Surface for Recorder {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands.push(DrawCommand::ClearRect {
            x,
            y,
            width,
            height,
        });
    }

    fn set_line_width(&mut self, width: f32) {
        self.commands.push(DrawCommand::SetLineWidth(width));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetStrokeColor(color));
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, point: Vec2) {
        self.commands.push(DrawCommand::MoveTo(point));
    }

    fn line_to(&mut self, point: Vec2) {
        self.commands.push(DrawCommand::LineTo(point));
    }

    fn close_path(&mut self) {
        self.commands.push(DrawCommand::ClosePath);
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }

    fn fill_text_centered(&mut self, text: &str, center: Vec2, font_size: f32) {
        self.commands.push(DrawCommand::FillTextCentered {
            text: text.to_string(),
            center,
            font_size,
        });
    }
}
