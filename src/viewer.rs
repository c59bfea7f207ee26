use crate::{
    camera::camera_translation, CameraState, Display, FrameLimiter, GlyphMesh, GlyphMeshBuilder,
    HeldKeys, InputEvent, InputSource, Key, ViewerConfig, ViewerError,
};

use ilattice::glam::Vec3;
use log::{debug, info};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SessionState {
    Running,
    /// Terminal. No further frames are produced.
    Stopped,
}

/// Summary returned when a session ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionReport {
    /// The pattern that was displayed, after fallback.
    pub symbol: char,
    pub frames_presented: u64,
    pub final_camera: CameraState,
}

/// One display session of one glyph.
///
/// The viewer is the only writer of its camera and loop state. The mesh is
/// built once in [`Viewer::new`] and only read afterwards.
#[derive(Debug)]
pub struct Viewer {
    config: ViewerConfig,
    mesh: GlyphMesh,
    camera: CameraState,
    state: SessionState,
}

impl Viewer {
    pub fn new(character: char, config: ViewerConfig) -> Self {
        let mesh = GlyphMeshBuilder::new(config.mesh.clone()).build(character);
        info!(
            "displaying glyph {character:?} as {:?} with {} cuboids",
            mesh.symbol(),
            mesh.len()
        );
        Self::with_mesh(mesh, config)
    }

    pub fn with_mesh(mesh: GlyphMesh, config: ViewerConfig) -> Self {
        Self {
            config,
            mesh,
            camera: CameraState::IDENTITY,
            state: SessionState::Running,
        }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn mesh(&self) -> &GlyphMesh {
        &self.mesh
    }

    pub fn camera(&self) -> CameraState {
        self.camera
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit | InputEvent::KeyDown(Key::Escape) => {
                if self.is_running() {
                    debug!("stop requested by {event:?}");
                }
                self.state = SessionState::Stopped;
            }
            InputEvent::KeyDown(Key::Space) => {
                debug!("rotation reset");
                self.camera.reset();
            }
        }
    }

    /// Applies one tick of input: discrete events first, then held keys.
    ///
    /// A stop event ends the tick at once; later events and held keys are
    /// ignored. Does nothing once stopped.
    pub fn step<E>(&mut self, events: E, held: HeldKeys) -> SessionState
    where
        E: IntoIterator<Item = InputEvent>,
    {
        if !self.is_running() {
            return self.state;
        }

        for event in events {
            self.handle_event(event);
            if !self.is_running() {
                return self.state;
            }
        }

        let (delta_x, delta_y) = held.rotation_delta(self.config.rotation_step);
        self.camera.rotate(delta_x, delta_y);
        self.state
    }

    /// Per-session display state: projection, view translation and light.
    pub fn setup_display<D: Display>(&self, display: &mut D) {
        display.set_perspective(&self.config.projection, self.config.window.aspect_ratio());
        display.translate(camera_translation(self.config.camera_distance));
        display.set_light(&self.config.light);
    }

    /// Draws and presents one frame.
    pub fn render<D: Display>(&self, display: &mut D) {
        display.clear();

        display.push_transform();
        display.rotate(self.camera.rotation_x(), Vec3::X);
        display.rotate(self.camera.rotation_y(), Vec3::Y);
        let color = self.mesh.color();
        for cuboid in self.mesh.cuboids() {
            display.draw_cuboid(cuboid, color);
        }
        display.pop_transform();

        display.present();
    }

    /// Runs ticks until input stops the session, then releases the display.
    pub fn run<D, I, L>(mut self, display: &mut D, input: &mut I, limiter: &mut L) -> SessionReport
    where
        D: Display,
        I: InputSource,
        L: FrameLimiter,
    {
        self.setup_display(display);

        let mut events = Vec::new();
        let mut frames_presented = 0;
        while self.is_running() {
            input.poll_events(&mut events);
            let state = self.step(events.drain(..), input.held_keys());
            if state == SessionState::Stopped {
                break;
            }

            self.render(display);
            frames_presented += 1;
            limiter.wait_for_next_tick();
        }

        display.release();
        info!("session for {:?} stopped after {frames_presented} frames", self.mesh.symbol());

        SessionReport {
            symbol: self.mesh.symbol(),
            frames_presented,
            final_camera: self.camera,
        }
    }
}

/// Opens a display and runs one session for `character` on it.
///
/// A display that fails to open aborts the session before the mesh is built
/// or any input is read.
pub fn run_session<D, E, F, I, L>(
    character: char,
    config: ViewerConfig,
    open_display: F,
    input: &mut I,
    limiter: &mut L,
) -> Result<SessionReport, ViewerError>
where
    D: Display,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
    F: FnOnce(&ViewerConfig) -> Result<D, E>,
    I: InputSource,
    L: FrameLimiter,
{
    let mut display = open_display(&config).map_err(|err| ViewerError::DisplayInit(err.into()))?;
    let viewer = Viewer::new(character, config);
    Ok(viewer.run(&mut display, input, limiter))
}
