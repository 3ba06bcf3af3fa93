use log::warn;
use macroquad::prelude::{
    Color, DARKGRAY, KeyCode, RED, draw_text, get_char_pressed, get_time, is_key_pressed,
    screen_height,
};

use common::maze::GenerationRequest;

pub const MAX_DIGITS: usize = 3;

const FONT_SIZE: f32 = 24.0;
const SIDE_PAD: f32 = 20.0;
const BOTTOM_PAD: f32 = 20.0;
const LINE_HEIGHT: f32 = FONT_SIZE * 1.2;

/// Height of the strip along the bottom of the window that the form draws
/// into: the fields, help and error lines.
pub const FORM_HEIGHT: f32 = BOTTOM_PAD + 3.0 * LINE_HEIGHT;

const TEXT_COLOR: Color = DARKGRAY;
const ERROR_COLOR: Color = RED;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormKey {
    Char(char),
    Backspace,
    Tab,
    Enter,
    Esc,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormAction {
    Generate(GenerationRequest),
    ToggleIndices,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Field {
    CellsX,
    CellsY,
}

/// The dimension form: two numeric fields, a generate action on Enter and
/// an index-overlay toggle on `I`.
#[derive(Debug)]
pub struct Form {
    cells_x: String,
    cells_y: String,
    focus: Field,
    error: Option<String>,
}

impl Form {
    pub fn new(cells_x: usize, cells_y: usize) -> Self {
        Self {
            cells_x: cells_x.to_string(),
            cells_y: cells_y.to_string(),
            focus: Field::CellsX,
            error: None,
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            Field::CellsX => &mut self.cells_x,
            Field::CellsY => &mut self.cells_y,
        }
    }

    pub fn handle_key(&mut self, key: FormKey) -> Option<FormAction> {
        match key {
            FormKey::Char('i' | 'I') => return Some(FormAction::ToggleIndices),
            FormKey::Char(c) if c.is_ascii_digit() => {
                let field = self.focused_mut();
                if field.len() < MAX_DIGITS {
                    field.push(c);
                }
            }
            FormKey::Char(_) => {}
            FormKey::Backspace => {
                self.focused_mut().pop();
            }
            FormKey::Esc => self.focused_mut().clear(),
            FormKey::Tab => {
                self.focus = match self.focus {
                    Field::CellsX => Field::CellsY,
                    Field::CellsY => Field::CellsX,
                };
            }
            FormKey::Enter => match GenerationRequest::parse(&self.cells_x, &self.cells_y) {
                Ok(request) => return Some(FormAction::Generate(request)),
                Err(e) => {
                    warn!("rejected maze dimensions: {}", e);
                    self.show_error(&e.to_string());
                }
            },
        }

        None
    }

    /// Collects this frame's key presses and turns them into actions.
    pub fn poll(&mut self) -> Vec<FormAction> {
        let mut keys = Vec::new();

        if is_key_pressed(KeyCode::Tab) {
            keys.push(FormKey::Tab);
        }
        if is_key_pressed(KeyCode::Backspace) {
            keys.push(FormKey::Backspace);
        }
        if is_key_pressed(KeyCode::Escape) {
            keys.push(FormKey::Esc);
        }
        while let Some(c) = get_char_pressed() {
            if !c.is_control() {
                keys.push(FormKey::Char(c));
            }
        }
        if is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter) {
            keys.push(FormKey::Enter);
        }

        keys.into_iter()
            .filter_map(|key| self.handle_key(key))
            .collect()
    }

    pub fn show_error(&mut self, message: &str) {
        self.error = Some(format!("[ERROR] {}.", message.trim_end_matches('.')));
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn fields_line(&self, show_cursor: bool) -> String {
        let field = |label: &str, value: &str, focused: bool| {
            let marker = if focused { "> " } else { "  " };
            let cursor = if focused && show_cursor { "_" } else { "" };
            format!("{}{}: {}{}", marker, label, value, cursor)
        };

        format!(
            "{}    {}",
            field("cells x", &self.cells_x, self.focus == Field::CellsX),
            field("cells y", &self.cells_y, self.focus == Field::CellsY),
        )
    }

    pub fn help_line(show_indices: bool) -> String {
        format!(
            "Tab: next field   Enter: generate   I: indices ({})",
            if show_indices { "on" } else { "off" }
        )
    }

    pub fn draw(&self, show_indices: bool) {
        let show_cursor = (get_time() * 2.0) as i32 % 2 == 0;
        let mut baseline = screen_height() - BOTTOM_PAD;

        if let Some(error) = &self.error {
            draw_text(error, SIDE_PAD, baseline, FONT_SIZE, ERROR_COLOR);
            baseline -= LINE_HEIGHT;
        }

        draw_text(
            &Self::help_line(show_indices),
            SIDE_PAD,
            baseline,
            FONT_SIZE,
            TEXT_COLOR,
        );
        baseline -= LINE_HEIGHT;

        draw_text(
            &self.fields_line(show_cursor),
            SIDE_PAD,
            baseline,
            FONT_SIZE,
            TEXT_COLOR,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_keys(form: &mut Form, keys: &[FormKey]) -> Vec<FormAction> {
        keys.iter()
            .filter_map(|&key| form.handle_key(key))
            .collect()
    }

    #[test]
    fn test_enter_submits_both_fields() {
        let mut form = Form::new(4, 4);
        let actions = type_keys(
            &mut form,
            &[
                FormKey::Backspace,
                FormKey::Char('1'),
                FormKey::Char('2'),
                FormKey::Tab,
                FormKey::Esc,
                FormKey::Char('7'),
                FormKey::Enter,
            ],
        );

        assert_eq!(
            actions,
            vec![FormAction::Generate(GenerationRequest {
                cells_x: 12,
                cells_y: 7,
            })]
        );
    }

    #[test]
    fn test_non_digits_are_ignored_and_length_is_capped() {
        let mut form = Form::new(1, 1);
        type_keys(
            &mut form,
            &[
                FormKey::Char('-'),
                FormKey::Char('.'),
                FormKey::Char('2'),
                FormKey::Char('3'),
                FormKey::Char('4'),
            ],
        );

        assert_eq!(form.fields_line(false), "> cells x: 123      cells y: 1");
    }

    #[test]
    fn test_i_toggles_indices_without_editing() {
        let mut form = Form::new(3, 3);
        let actions = type_keys(&mut form, &[FormKey::Char('i'), FormKey::Char('I')]);

        assert_eq!(
            actions,
            vec![FormAction::ToggleIndices, FormAction::ToggleIndices]
        );
        assert_eq!(form.fields_line(false), "> cells x: 3      cells y: 3");
    }

    #[test]
    fn test_zero_or_empty_field_shows_error_instead_of_generating() {
        let mut form = Form::new(4, 4);
        let actions = type_keys(
            &mut form,
            &[FormKey::Tab, FormKey::Backspace, FormKey::Enter],
        );

        assert!(actions.is_empty());
        assert_eq!(
            form.error(),
            Some(
                "[ERROR] invalid y dimension \"\": expected a whole number of cells from 1 to 200."
            )
        );

        type_keys(&mut form, &[FormKey::Char('0'), FormKey::Enter]);
        assert!(form.error().is_some_and(|e| e.contains("invalid y dimension \"0\"")));

        form.clear_error();
        assert_eq!(form.error(), None);
    }

    #[test]
    fn test_too_many_cells_shows_error_instead_of_generating() {
        let mut form = Form::new(4, 4);
        let actions = type_keys(
            &mut form,
            &[
                FormKey::Esc,
                FormKey::Char('9'),
                FormKey::Char('9'),
                FormKey::Char('9'),
                FormKey::Enter,
            ],
        );

        assert!(actions.is_empty());
        assert!(form.error().is_some_and(|e| e.contains("invalid x dimension \"999\"")));
    }

    #[test]
    fn test_fields_line_marks_focus_and_cursor() {
        let mut form = Form::new(4, 5);
        form.handle_key(FormKey::Tab);

        assert_eq!(form.fields_line(true), "  cells x: 4    > cells y: 5_");
    }

    #[test]
    fn test_help_line_reports_overlay_state() {
        assert!(Form::help_line(true).ends_with("I: indices (on)"));
        assert!(Form::help_line(false).ends_with("I: indices (off)"));
    }
}
