//! Cuboid faces and coordinate systems.
//!
//! Every glyph cell becomes a cuboid, and every cuboid has six **faces**.
//!
//! ```text
//!     O--------O
//!   / |      / |
//! O--------O   |
//! |   |    |   |
//! |   O----|---O
//! | /      | /
//! O--------O
//! ```
//!
//! A face is drawn as one **quad**: four vertices sharing a **normal**,
//! rendered as two triangles through six indices.
//!
//! # `{N, U, V}` Space
//!
//! Each face is described in its own local frame: **N** is the normal axis,
//! **U** and **V** span the face. An [`AxisPermutation`] maps `{N, U, V}` onto
//! `{X, Y, Z}`, and the sign of the normal picks which of the two parallel
//! faces is meant. Together they form an [`OrientedBlockFace`], which returns
//! corners, normals and indices in the same order for all six faces.
//!
//! The six faces of one coordinate system form a [`QuadCoordinateConfig`].
//! Glyphs are built right-handed with +Y up, matching
//! [`RIGHT_HANDED_Y_UP_CONFIG`].
//!
//! ```text
//!       +Y
//!       | -Z
//! -X____|/____+X
//!      /|
//!    +Z |
//!       -Y
//! ```

mod axis;
mod face;

pub use axis::*;
pub use face::*;

/// The six oriented faces of a cuboid for one coordinate system.
#[derive(Clone, Debug)]
pub struct QuadCoordinateConfig {
    pub faces: [OrientedBlockFace; 6],
}

/// Coordinate configuration for a right-handed coordinate system with Y up.
pub const RIGHT_HANDED_Y_UP_CONFIG: QuadCoordinateConfig = QuadCoordinateConfig {
    // Y is always in the V direction when it's not the normal. When Y is the
    // normal, right-handedness determines that we must use Yzx permutations.
    faces: [
        OrientedBlockFace::new(-1, AxisPermutation::Xzy),
        OrientedBlockFace::new(-1, AxisPermutation::Yzx),
        OrientedBlockFace::new(-1, AxisPermutation::Zxy),
        OrientedBlockFace::new(1, AxisPermutation::Xzy),
        OrientedBlockFace::new(1, AxisPermutation::Yzx),
        OrientedBlockFace::new(1, AxisPermutation::Zxy),
    ],
};
