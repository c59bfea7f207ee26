//! Extruded voxel meshes for bitmap glyphs, and an interactive viewer that
//! spins them.
//!
//! A glyph is a small grid of filled and empty cells. Every filled cell is
//! extruded into a [`Cuboid`], and the cuboids together form a [`GlyphMesh`]
//! centered on the origin. The mesh is built once per glyph and then drawn
//! every frame by a [`Viewer`], which turns arrow keys into rotation.
//!
//! Two ways of drawing are supported:
//! - immediate mode, through the [`Display`] trait, with one draw call per
//!   cuboid (see [`Viewer::run`])
//! - retained mode, through [`GlyphMesh::to_triangle_mesh`], which culls the
//!   faces shared by neighbouring cells
//!
//! Windowing, graphics bindings and input devices are left to the caller. The
//! `demos` crate shows a bevy frontend.
//!
//! # Example Code
//!
//! ```
//! use glyph_voxel::{build_glyph_mesh, HeldKeys, InputEvent, Viewer, ViewerConfig};
//!
//! // Unknown characters fall back to the '0' pattern instead of failing.
//! let mesh = build_glyph_mesh('?', 1.0);
//! assert_eq!(mesh.symbol(), '0');
//!
//! // The '1' pattern has 13 filled cells.
//! let mut viewer = Viewer::new('1', ViewerConfig::default());
//! assert_eq!(viewer.mesh().len(), 13);
//!
//! // Two ticks with "up" held, then one with "left".
//! for held in [HeldKeys::UP, HeldKeys::UP, HeldKeys::LEFT] {
//!     viewer.step(std::iter::empty::<InputEvent>(), held);
//! }
//! assert_eq!(viewer.camera().rotation_x(), -4.0);
//! assert_eq!(viewer.camera().rotation_y(), -2.0);
//!
//! // A surface mesh for retained-mode renderers.
//! let triangles = viewer.mesh().to_triangle_mesh();
//! assert!(triangles.num_triangles() > 0);
//! ```

mod buffer;
pub mod camera;
pub mod config;
mod display;
mod error;
pub mod geometry;
mod input;
mod mesh;
pub mod pattern;
mod selection;
mod surface;
mod viewer;

pub use buffer::*;
pub use camera::CameraState;
pub use config::{LightConfig, ViewerConfig, WindowConfig};
pub use display::*;
pub use error::*;
#[doc(inline)]
pub use geometry::*;
pub use input::*;
pub use mesh::*;
pub use pattern::GlyphPattern;
pub use selection::*;
pub use surface::*;
pub use viewer::*;

pub use ilattice;
