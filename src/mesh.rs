use crate::pattern::{self, GlyphPattern};

use ilattice::glam::Vec3;
use log::warn;
use serde::{Deserialize, Serialize};

/// Edge length of one pattern cell in model space.
pub const DEFAULT_BLOCK_SIZE: f32 = 0.8;
/// Thickness of the glyph along Z.
pub const DEFAULT_EXTRUDE_DEPTH: f32 = 1.0;
pub const DEFAULT_COLOR: [f32; 3] = [0.3, 0.7, 1.0];

/// An axis-aligned rectangular solid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cuboid {
    pub center: Vec3,
    pub half_extents: Vec3,
}

impl Cuboid {
    #[inline]
    pub fn new(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            center,
            half_extents,
        }
    }

    #[inline]
    pub fn min(&self) -> Vec3 {
        self.center - self.half_extents
    }

    #[inline]
    pub fn max(&self) -> Vec3 {
        self.center + self.half_extents
    }

    #[inline]
    pub fn size(&self) -> Vec3 {
        2.0 * self.half_extents
    }
}

/// Parameters of the cell-to-cuboid placement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshConfig {
    pub block_size: f32,
    pub extrude_depth: f32,
    /// Linear RGB base color shared by every cuboid.
    pub color: [f32; 3],
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            extrude_depth: DEFAULT_EXTRUDE_DEPTH,
            color: DEFAULT_COLOR,
        }
    }
}

/// The extruded cuboids of one glyph, in row-major cell order.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphMesh {
    pattern: &'static GlyphPattern,
    cuboids: Vec<Cuboid>,
    /// `[col, row]` of the cell each cuboid came from, parallel to `cuboids`.
    cells: Vec<[u32; 2]>,
    color: [f32; 3],
}

impl GlyphMesh {
    /// The pattern the mesh was built from. For unsupported characters this is
    /// the default pattern.
    pub fn pattern(&self) -> &'static GlyphPattern {
        self.pattern
    }

    pub fn symbol(&self) -> char {
        self.pattern.symbol()
    }

    pub fn cuboids(&self) -> &[Cuboid] {
        &self.cuboids
    }

    pub fn cells(&self) -> &[[u32; 2]] {
        &self.cells
    }

    pub fn color(&self) -> [f32; 3] {
        self.color
    }

    pub fn len(&self) -> usize {
        self.cuboids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cuboids.is_empty()
    }
}

/// Turns glyph patterns into cuboid lists.
///
/// Building never fails. Characters without a pattern are drawn with the
/// default pattern, and invalid dimensions in the config are replaced by the
/// defaults.
#[derive(Clone, Debug, Default)]
pub struct GlyphMeshBuilder {
    config: MeshConfig,
}

impl GlyphMeshBuilder {
    pub fn new(config: MeshConfig) -> Self {
        let config = MeshConfig {
            block_size: positive_or(config.block_size, DEFAULT_BLOCK_SIZE, "block_size"),
            extrude_depth: positive_or(
                config.extrude_depth,
                DEFAULT_EXTRUDE_DEPTH,
                "extrude_depth",
            ),
            color: config.color,
        };
        Self { config }
    }

    pub fn with_extrude_depth(extrude_depth: f32) -> Self {
        Self::new(MeshConfig {
            extrude_depth,
            ..Default::default()
        })
    }

    pub fn config(&self) -> &MeshConfig {
        &self.config
    }

    pub fn build(&self, character: char) -> GlyphMesh {
        self.build_pattern(pattern::lookup(character))
    }

    /// Emits one cuboid per filled cell, centering the grid on the origin with
    /// row 0 at +Y and column 0 at -X.
    pub fn build_pattern(&self, pattern: &'static GlyphPattern) -> GlyphMesh {
        let block = self.config.block_size;
        let half_cols = pattern.cols() as f32 / 2.0;
        let half_rows = pattern.rows() as f32 / 2.0;
        let half_extents = Vec3::new(block / 2.0, block / 2.0, self.config.extrude_depth / 2.0);

        let cells: Vec<[u32; 2]> = pattern.filled_cells().collect();
        let cuboids = cells
            .iter()
            .map(|&[col, row]| {
                let center = Vec3::new(
                    (col as f32 - half_cols) * block,
                    (half_rows - row as f32) * block,
                    0.0,
                );
                Cuboid::new(center, half_extents)
            })
            .collect();

        GlyphMesh {
            pattern,
            cuboids,
            cells,
            color: self.config.color,
        }
    }
}

/// Builds the mesh for `character` with the default block size and color.
pub fn build_glyph_mesh(character: char, extrude_depth: f32) -> GlyphMesh {
    GlyphMeshBuilder::with_extrude_depth(extrude_depth).build(character)
}

fn positive_or(value: f32, default: f32, name: &str) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        warn!("{name} must be positive and finite, got {value}; using {default}");
        default
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{default_pattern, supported_characters, PATTERN_COLS, PATTERN_ROWS};

    #[test]
    fn cuboid_count_matches_filled_cells() {
        for symbol in supported_characters() {
            let mesh = build_glyph_mesh(symbol, DEFAULT_EXTRUDE_DEPTH);
            assert!(!mesh.is_empty());
            assert_eq!(mesh.len(), pattern::lookup(symbol).filled_count());
        }
    }

    #[test]
    fn one_builds_thirteen_cuboids() {
        assert_eq!(build_glyph_mesh('1', 1.0).len(), 13);
    }

    #[test]
    fn unsupported_character_matches_default() {
        let fallback = build_glyph_mesh('%', 1.0);
        let default = GlyphMeshBuilder::with_extrude_depth(1.0).build_pattern(default_pattern());
        assert_eq!(fallback.cuboids(), default.cuboids());
        assert_eq!(fallback.symbol(), default.symbol());
    }

    #[test]
    fn builds_are_deterministic() {
        let builder = GlyphMeshBuilder::with_extrude_depth(2.5);
        assert_eq!(builder.build('b'), builder.build('b'));
    }

    #[test]
    fn placement_matches_grid_position() {
        let center_col = PATTERN_COLS as f32 / 2.0;
        let center_row = PATTERN_ROWS as f32 / 2.0;
        for symbol in supported_characters() {
            let mesh = build_glyph_mesh(symbol, 1.0);
            for (cuboid, &[col, row]) in mesh.cuboids().iter().zip(mesh.cells()) {
                let dx = col as f32 - center_col;
                let dy = row as f32 - center_row;
                assert_eq!(cuboid.center.x < 0.0, dx < 0.0, "{symbol:?} {col},{row}");
                assert_eq!(cuboid.center.y > 0.0, dy < 0.0, "{symbol:?} {col},{row}");
                assert_eq!(cuboid.center.z, 0.0);
            }
        }
    }

    #[test]
    fn top_left_cell_position() {
        let mesh = build_glyph_mesh('4', 1.0);
        let first = mesh.cuboids()[0];
        assert_eq!(mesh.cells()[0], [0, 0]);
        assert!((first.center.x - (-3.5 * DEFAULT_BLOCK_SIZE)).abs() < 1e-6);
        assert!((first.center.y - 3.5 * DEFAULT_BLOCK_SIZE).abs() < 1e-6);
    }

    #[test]
    fn extents_follow_block_and_depth() {
        let mesh = build_glyph_mesh('2', 3.0);
        for cuboid in mesh.cuboids() {
            assert_eq!(cuboid.half_extents, Vec3::new(0.4, 0.4, 1.5));
            assert_eq!(cuboid.size().z, 3.0);
        }
    }

    #[test]
    fn invalid_depth_falls_back_to_default() {
        for depth in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let builder = GlyphMeshBuilder::with_extrude_depth(depth);
            assert_eq!(builder.config().extrude_depth, DEFAULT_EXTRUDE_DEPTH);
        }
    }

    #[test]
    fn mesh_carries_configured_color() {
        let builder = GlyphMeshBuilder::new(MeshConfig {
            color: [1.0, 0.0, 0.0],
            ..Default::default()
        });
        assert_eq!(builder.build('3').color(), [1.0, 0.0, 0.0]);
        assert_eq!(build_glyph_mesh('3', 1.0).color(), DEFAULT_COLOR);
    }
}
