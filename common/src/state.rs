use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    config::Settings,
    error::MazeError,
    layout::{Layout, Viewport},
    maze::{GenerationRequest, Grid},
    render::{self, RenderOptions, StrokeStyle, Surface},
};

/// A grid together with the layout computed for it. Replaced as a whole so
/// a frame never sees a grid paired with another grid's layout.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub grid: Grid,
    pub layout: Layout,
}

impl Scene {
    fn build(
        request: GenerationRequest,
        viewport: Viewport,
        padding: f32,
        rng: &mut StdRng,
    ) -> Result<Scene, MazeError> {
        let grid = Grid::generate_with(request, rng)?;
        let layout = Layout::for_grid(viewport, &grid, padding)?;
        Ok(Scene { grid, layout })
    }
}

pub struct MazeState {
    scene: Scene,
    viewport: Viewport,
    show_indices: bool,
    settings: Settings,
    rng: StdRng,
}

impl MazeState {
    pub fn new(settings: Settings, viewport: Viewport) -> Result<Self, MazeError> {
        let mut rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let request = GenerationRequest::new(settings.cells_x, settings.cells_y)?;
        let scene = Scene::build(request, viewport, settings.padding, &mut rng)?;
        info!(
            "generated {}x{} maze for {}x{} viewport",
            request.cells_x, request.cells_y, viewport.width, viewport.height
        );
        debug!("maze:\n{}", scene.grid);

        Ok(Self {
            scene,
            viewport,
            show_indices: false,
            settings,
            rng,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.scene.grid
    }

    pub fn layout(&self) -> &Layout {
        &self.scene.layout
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn show_indices(&self) -> bool {
        self.show_indices
    }

    pub fn toggle_indices(&mut self) -> bool {
        self.show_indices = !self.show_indices;
        self.show_indices
    }

    /// Replaces the maze. On error the current grid and layout are kept.
    pub fn regenerate(&mut self, request: GenerationRequest) -> Result<(), MazeError> {
        let scene = Scene::build(request, self.viewport, self.settings.padding, &mut self.rng)?;
        self.scene = scene;

        info!("regenerated {}x{} maze", request.cells_x, request.cells_y);
        debug!("maze:\n{}", self.scene.grid);
        Ok(())
    }

    /// Refits the current grid to a new viewport. An unchanged viewport is a
    /// no-op. On error the viewport is still recorded but the last good
    /// layout stays in place.
    pub fn resize(&mut self, viewport: Viewport) -> Result<(), MazeError> {
        if viewport == self.viewport {
            return Ok(());
        }

        self.viewport = viewport;
        self.scene.layout = Layout::for_grid(viewport, &self.scene.grid, self.settings.padding)?;

        debug!(
            "resized to {}x{}, cell size {}",
            viewport.width, viewport.height, self.scene.layout.cell_size
        );
        Ok(())
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            show_indices: self.show_indices,
            style: StrokeStyle {
                line_width: self.settings.line_width,
                color: self.settings.stroke,
            },
            font_size: self.settings.font_size,
        }
    }

    /// Clears the viewport and draws the current scene.
    pub fn render_frame(&self, surface: &mut dyn Surface) {
        surface.clear_rect(0.0, 0.0, self.viewport.width, self.viewport.height);
        render::render(
            surface,
            &self.scene.layout,
            &self.scene.grid,
            &self.render_options(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCommand, Recorder};

    fn seeded_settings() -> Settings {
        Settings {
            seed: Some(3),
            ..Settings::default()
        }
    }

    fn square_viewport() -> Viewport {
        Viewport::new(1000.0, 1000.0)
    }

    #[test]
    fn test_new_builds_default_maze_fitted_to_viewport() {
        let state = MazeState::new(seeded_settings(), square_viewport()).unwrap();

        assert_eq!(state.grid().cells_x(), 4);
        assert_eq!(state.grid().cells_y(), 4);
        assert_eq!(state.layout().cell_size, 218.0);
        assert!(!state.show_indices());
    }

    #[test]
    fn test_new_fails_for_degenerate_viewport() {
        assert!(matches!(
            MazeState::new(seeded_settings(), Viewport::new(100.0, 100.0)),
            Err(MazeError::DegenerateViewport { .. })
        ));
    }

    #[test]
    fn test_regenerate_replaces_grid_and_layout_together() {
        let mut state = MazeState::new(seeded_settings(), square_viewport()).unwrap();
        state
            .regenerate(GenerationRequest::new(8, 2).unwrap())
            .unwrap();

        assert_eq!(state.grid().cells_x(), 8);
        assert_eq!(state.grid().cells_y(), 2);
        assert_eq!(state.layout().cell_size, 109.0);
    }

    #[test]
    fn test_failed_regenerate_keeps_previous_scene() {
        let mut state = MazeState::new(seeded_settings(), square_viewport()).unwrap();
        state.resize(Viewport::new(100.0, 1000.0)).unwrap_err();
        let before = state.scene().clone();

        let result = state.regenerate(GenerationRequest::new(8, 8).unwrap());

        assert!(matches!(result, Err(MazeError::DegenerateViewport { .. })));
        assert_eq!(state.scene(), &before);
    }

    #[test]
    fn test_resize_refits_and_ignores_unchanged_viewport() {
        let mut state = MazeState::new(seeded_settings(), square_viewport()).unwrap();
        let before = *state.layout();

        state.resize(square_viewport()).unwrap();
        assert_eq!(*state.layout(), before);

        state.resize(Viewport::new(2000.0, 1000.0)).unwrap();
        assert_eq!(state.layout().cell_size, 218.0);
        assert_eq!(state.layout().origin.x, 564.0);
    }

    #[test]
    fn test_toggle_indices_flips_overlay() {
        let mut state = MazeState::new(seeded_settings(), square_viewport()).unwrap();
        assert!(state.toggle_indices());
        assert!(state.render_options().show_indices);
        assert!(!state.toggle_indices());
    }

    #[test]
    fn test_render_frame_clears_viewport_first() {
        let state = MazeState::new(seeded_settings(), square_viewport()).unwrap();
        let mut recorder = Recorder::new();
        state.render_frame(&mut recorder);

        assert_eq!(
            recorder.commands[0],
            DrawCommand::ClearRect {
                x: 0.0,
                y: 0.0,
                width: 1000.0,
                height: 1000.0,
            }
        );
        assert_eq!(recorder.commands[1], DrawCommand::SetLineWidth(3.0));
    }
}
