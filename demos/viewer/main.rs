use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::Command;

use anyhow::Context;
use bevy::app::AppExit;
use bevy::prelude::*;
use bevy::render::mesh::Indices;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::PrimitiveTopology;
use bevy::window::{WindowCloseRequested, WindowResolution};
use glyph_voxel::pattern::supported_characters;
use glyph_voxel::{
    camera::camera_translation, HeldKeys, InputEvent, Key as ViewerKey, Selection, SessionState,
    Viewer, ViewerConfig,
};

/// Bevy's light units are physical; these map the unitless ambient and
/// diffuse terms onto them.
const AMBIENT_BRIGHTNESS_SCALE: f32 = 500.0;
const DIRECTIONAL_ILLUMINANCE_SCALE: f32 = 10_000.0;

/// Passed to the child process that owns the window for one glyph.
const GLYPH_FLAG: &str = "--glyph";

fn main() -> anyhow::Result<()> {
    let args = LaunchArgs::parse(std::env::args().skip(1))?;

    let config = match &args.config_path {
        Some(path) => ViewerConfig::load(path).with_context(|| {
            format!("failed to load viewer configuration from {}", path.display())
        })?,
        None => ViewerConfig::default(),
    };

    match args.glyph {
        Some(character) => {
            show_glyph(character, config);
            Ok(())
        }
        None => prompt_loop(&args),
    }
}

/// `viewer [CONFIG]` prompts; `viewer --glyph <c> [CONFIG]` opens one window.
#[derive(Debug, Default, PartialEq)]
struct LaunchArgs {
    config_path: Option<PathBuf>,
    glyph: Option<char>,
}

impl LaunchArgs {
    fn parse(args: impl IntoIterator<Item = String>) -> anyhow::Result<Self> {
        let mut parsed = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            if arg == GLYPH_FLAG {
                let value = args.next().unwrap_or_default();
                parsed.glyph = Some(value.chars().next().context("--glyph needs a character")?);
            } else {
                parsed.config_path = Some(PathBuf::from(arg));
            }
        }
        Ok(parsed)
    }

    /// Arguments for the child process that shows `character`.
    fn for_glyph(&self, character: char) -> Vec<String> {
        let mut args = vec![GLYPH_FLAG.to_string(), character.to_string()];
        if let Some(path) = &self.config_path {
            args.push(path.display().to_string());
        }
        args
    }
}

/// Prompts for glyphs until `quit`, showing each in its own window.
///
/// winit allows one event loop per process, so every window is opened by a
/// child process running this executable with `--glyph`.
fn prompt_loop(args: &LaunchArgs) -> anyhow::Result<()> {
    println!("3D Glyph Viewer");
    println!(
        "Supported characters: {}",
        supported_characters().map(String::from).collect::<Vec<_>>().join(", ")
    );

    let exe = std::env::current_exe().context("failed to locate the viewer executable")?;
    while let Some(character) = prompt_for_glyph()? {
        println!("Displaying 3D character: '{character}'");
        println!("Use arrow keys to rotate the view, space to reset");
        println!("Press ESC or close window to exit");

        let status = Command::new(&exe)
            .args(args.for_glyph(character))
            .status()
            .context("failed to start the viewer window")?;
        if !status.success() {
            eprintln!("viewer for '{character}' exited with {status}");
        }
    }

    Ok(())
}

fn show_glyph(character: char, config: ViewerConfig) {
    let window = Window {
        title: config.window.title.clone(),
        resolution: WindowResolution::new(config.window.width as f32, config.window.height as f32),
        ..Default::default()
    };
    let tick_rate = config.tick_rate_hz();

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(window),
        close_when_requested: false,
        ..Default::default()
    }))
    .init_resource::<PendingEvents>()
    .insert_resource(Session(Viewer::new(character, config)))
    .add_systems(Startup, setup);

    match tick_rate {
        Some(hz) => {
            app.insert_resource(Time::<Fixed>::from_hz(hz))
                .add_systems(FixedUpdate, tick_session)
                .add_systems(Update, (collect_events, apply_rotation).chain());
        }
        None => {
            app.add_systems(
                Update,
                (collect_events, tick_session, apply_rotation).chain(),
            );
        }
    }

    app.run();
}

/// Asks for characters until a valid selection or `quit`. End of input counts
/// as `quit`.
fn prompt_for_glyph() -> anyhow::Result<Option<char>> {
    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("\nEnter a character to display in 3D (or 'quit' to exit): ");
        io::stdout().flush().context("failed to flush prompt")?;

        line.clear();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .context("failed to read selection")?;
        if read == 0 {
            return Ok(None);
        }

        match line.parse::<Selection>() {
            Ok(Selection::Glyph(character)) => return Ok(Some(character)),
            Ok(Selection::Quit) => return Ok(None),
            Err(err) => println!("{err}"),
        }
    }
}

#[derive(Resource)]
struct Session(Viewer);

/// Discrete events seen since the last tick. Frames and ticks run at
/// different rates, so each event is queued once and consumed by one tick.
#[derive(Resource, Default)]
struct PendingEvents(Vec<InputEvent>);

#[derive(Component)]
struct GlyphModel;

fn setup(
    mut commands: Commands,
    session: Res<Session>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let viewer = &session.0;
    let config = viewer.config();

    let triangles = viewer.mesh().to_triangle_mesh();
    debug!(
        "glyph surface has {} triangles",
        triangles.num_triangles()
    );
    let num_vertices = triangles.num_vertices();
    let mut render_mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    );
    render_mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, triangles.positions);
    render_mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, triangles.normals);
    render_mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, vec![[0.0f32; 2]; num_vertices]);
    render_mesh.insert_indices(Indices::U32(triangles.indices));

    let [r, g, b] = viewer.mesh().color();
    let mut material = StandardMaterial::from(Color::rgb(r, g, b));
    material.perceptual_roughness = 0.9;

    commands.spawn((
        PbrBundle {
            mesh: meshes.add(render_mesh),
            material: materials.add(material),
            ..Default::default()
        },
        GlyphModel,
    ));

    let light = config.light;
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: light.ambient * AMBIENT_BRIGHTNESS_SCALE,
    });
    commands.spawn(DirectionalLightBundle {
        directional_light: DirectionalLight {
            illuminance: light.diffuse * DIRECTIONAL_ILLUMINANCE_SCALE,
            ..Default::default()
        },
        transform: Transform::from_translation(Vec3::from_array(light.direction))
            .looking_at(Vec3::ZERO, Vec3::Y),
        ..Default::default()
    });

    // The view translation moves the world away from the camera, so the
    // camera itself sits on the opposite side.
    let eye = -Vec3::from_array(camera_translation(config.camera_distance).to_array());
    commands.spawn(Camera3dBundle {
        projection: Projection::Perspective(PerspectiveProjection {
            fov: config.projection.fov_y_degrees.to_radians(),
            near: config.projection.near,
            far: config.projection.far,
            aspect_ratio: config.window.aspect_ratio(),
        }),
        transform: Transform::from_translation(eye).looking_at(Vec3::ZERO, Vec3::Y),
        ..Default::default()
    });
}

fn collect_events(
    keys: Res<ButtonInput<KeyCode>>,
    mut close_requests: EventReader<WindowCloseRequested>,
    mut pending: ResMut<PendingEvents>,
) {
    if close_requests.read().count() > 0 {
        pending.0.push(InputEvent::Quit);
    }
    for key in keys.get_just_pressed() {
        match key {
            KeyCode::Escape => pending.0.push(InputEvent::KeyDown(ViewerKey::Escape)),
            KeyCode::Space => pending.0.push(InputEvent::KeyDown(ViewerKey::Space)),
            _ => {}
        }
    }
}

/// One viewer tick: queued events, then the arrow keys still held.
fn tick_session(
    keys: Res<ButtonInput<KeyCode>>,
    mut pending: ResMut<PendingEvents>,
    mut session: ResMut<Session>,
    mut exit: EventWriter<AppExit>,
) {
    if !session.0.is_running() {
        return;
    }

    let mut held = HeldKeys::empty();
    for (code, flag) in [
        (KeyCode::ArrowUp, HeldKeys::UP),
        (KeyCode::ArrowDown, HeldKeys::DOWN),
        (KeyCode::ArrowLeft, HeldKeys::LEFT),
        (KeyCode::ArrowRight, HeldKeys::RIGHT),
    ] {
        if keys.pressed(code) {
            held |= flag;
        }
    }

    if session.0.step(pending.0.drain(..), held) == SessionState::Stopped {
        info!("closing viewer");
        exit.send(AppExit);
    }
}

fn apply_rotation(session: Res<Session>, mut models: Query<&mut Transform, With<GlyphModel>>) {
    let rotation = Quat::from_array(session.0.camera().rotation().to_array());
    for mut transform in models.iter_mut() {
        transform.rotation = rotation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn child_arguments_round_trip() {
        let parent = LaunchArgs::parse(args(&["viewer.json"])).unwrap();
        assert_eq!(parent.glyph, None);

        let child = LaunchArgs::parse(parent.for_glyph('B')).unwrap();
        assert_eq!(child.glyph, Some('B'));
        assert_eq!(child.config_path, parent.config_path);
    }

    #[test]
    fn glyph_flag_needs_a_value() {
        assert!(LaunchArgs::parse(args(&["--glyph"])).is_err());
    }
}
