use log::{debug, error, warn};
use macroquad::prelude::{clear_background, next_frame, screen_height, screen_width};

use crate::{
    canvas::{BACKGROUND_COLOR, MacroquadCanvas},
    form::{FORM_HEIGHT, Form, FormAction},
};
use common::{config::Settings, error::MazeError, layout::Viewport, state::MazeState};

/// The part of a `width` by `height` window left for the maze once the form
/// strip along the bottom is taken out.
pub fn maze_viewport(width: f32, height: f32) -> Viewport {
    Viewport::new(width, (height - FORM_HEIGHT).max(0.0))
}

pub fn current_viewport() -> Viewport {
    maze_viewport(screen_width(), screen_height())
}

pub struct MazeRunner {
    pub state: MazeState,
    pub form: Form,
    canvas: MacroquadCanvas,
}

impl MazeRunner {
    pub fn new(settings: Settings, viewport: Viewport) -> Result<Self, MazeError> {
        let form = Form::new(settings.cells_x, settings.cells_y);
        let state = MazeState::new(settings, viewport)?;

        Ok(Self {
            state,
            form,
            canvas: MacroquadCanvas::new(),
        })
    }

    /// Refits the maze if the window changed size since the last frame.
    pub fn handle_resize(&mut self, viewport: Viewport) {
        if let Err(e) = self.state.resize(viewport) {
            warn!("keeping previous layout: {}", e);
        }
    }

    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::Generate(request) => match self.state.regenerate(request) {
                Ok(()) => self.form.clear_error(),
                Err(e) => {
                    warn!("rejected maze regeneration: {}", e);
                    self.form.show_error(&e.to_string());
                }
            },
            FormAction::ToggleIndices => {
                let shown = self.state.toggle_indices();
                debug!("index overlay {}", if shown { "on" } else { "off" });
            }
        }
    }

    pub fn update(&mut self) {
        self.handle_resize(current_viewport());

        for action in self.form.poll() {
            self.apply(action);
        }
    }

    pub fn draw(&mut self) {
        clear_background(BACKGROUND_COLOR);
        self.state.render_frame(&mut self.canvas);
        self.form.draw(self.state.show_indices());
    }
}

pub async fn run(settings: Settings) {
    let mut runner = match MazeRunner::new(settings, current_viewport()) {
        Ok(runner) => runner,
        Err(e) => {
            error!("failed to start: {}", e);
            return;
        }
    };

    loop {
        runner.update();
        runner.draw();
        next_frame().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::maze::GenerationRequest;

    fn runner() -> MazeRunner {
        let settings = Settings {
            seed: Some(8),
            ..Settings::default()
        };
        MazeRunner::new(settings, Viewport::new(1000.0, 1000.0)).unwrap()
    }

    #[test]
    fn test_generate_action_replaces_maze_and_clears_error() {
        let mut runner = runner();
        runner.form.show_error("stale");

        runner.apply(FormAction::Generate(GenerationRequest::new(6, 3).unwrap()));

        assert_eq!(runner.state.grid().cells_x(), 6);
        assert_eq!(runner.state.grid().cells_y(), 3);
        assert_eq!(runner.form.error(), None);
    }

    #[test]
    fn test_generate_in_degenerate_viewport_reports_error_and_keeps_maze() {
        let mut runner = runner();
        runner.handle_resize(Viewport::new(120.0, 1000.0));
        let before = runner.state.scene().clone();

        runner.apply(FormAction::Generate(GenerationRequest::new(6, 3).unwrap()));

        assert_eq!(runner.state.scene(), &before);
        assert!(
            runner
                .form
                .error()
                .is_some_and(|e| e.starts_with("[ERROR] viewport 120x1000"))
        );
    }

    #[test]
    fn test_maze_stays_above_the_form() {
        let runner = MazeRunner::new(
            Settings {
                seed: Some(8),
                ..Settings::default()
            },
            maze_viewport(1000.0, 800.0),
        )
        .unwrap();

        let layout = runner.state.layout();
        let maze_bottom = layout.origin.y + runner.state.grid().cells_y() as f32 * layout.cell_size;
        assert!(maze_bottom + runner.state.settings().line_width <= 800.0 - FORM_HEIGHT);
    }

    #[test]
    fn test_maze_viewport_never_goes_negative() {
        assert_eq!(maze_viewport(300.0, 50.0), Viewport::new(300.0, 0.0));
    }

    #[test]
    fn test_toggle_action_flips_overlay() {
        let mut runner = runner();
        runner.apply(FormAction::ToggleIndices);
        assert!(runner.state.show_indices());
    }
}
