use crate::{
    GlyphMesh, OrientedBlockFace, UnitQuadBuffer, UnorientedUnitQuad, RIGHT_HANDED_Y_UP_CONFIG,
};

use ilattice::glam::{IVec3, UVec3};
use ndshape::{RuntimeShape, Shape};

/// Produces a single quad for every face of a cuboid that is not covered by a
/// neighbouring cuboid of the same glyph.
///
/// The pattern is laid out in a voxel grid one layer deep with a one-voxel
/// border of empty space, so every neighbour lookup stays in bounds. Faces on
/// the extrusion axis are always visible.
pub fn visible_cuboid_faces(
    mesh: &GlyphMesh,
    faces: &[OrientedBlockFace; 6],
    output: &mut UnitQuadBuffer,
) {
    output.reset();

    let pattern = mesh.pattern();
    let shape = RuntimeShape::<u32, 3>::new([pattern.cols() + 2, pattern.rows() + 2, 3]);
    let voxel_of = |[col, row]: [u32; 2]| UVec3::new(col + 1, pattern.rows() - row, 1);

    let mut occupied = vec![false; shape.size() as usize];
    for &cell in mesh.cells() {
        occupied[shape.linearize(voxel_of(cell).to_array()) as usize] = true;
    }

    for (index, &cell) in mesh.cells().iter().enumerate() {
        let p = voxel_of(cell).as_ivec3();

        for (group, face) in output.groups.iter_mut().zip(faces.iter()) {
            let neighbor = neighbor_in_grid(p + face.signed_normal(), &shape);
            if !occupied[shape.linearize(neighbor.to_array()) as usize] {
                group.push(UnorientedUnitQuad {
                    cuboid: index as u32,
                });
            }
        }
    }
}

fn neighbor_in_grid(p: IVec3, shape: &RuntimeShape<u32, 3>) -> UVec3 {
    debug_assert!(
        p.cmpge(IVec3::ZERO).all() && p.as_uvec3().cmplt(UVec3::from(shape.as_array())).all(),
        "neighbour {p:?} left the padded grid"
    );
    p.as_uvec3()
}

/// Flat vertex and index arrays for a retained-mode renderer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TriangleMesh {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    /// Expands the quads in `buffer` into two triangles each.
    ///
    /// `buffer` must have been filled by [`visible_cuboid_faces`] for this same
    /// `mesh`; its quads index into `mesh.cuboids()`.
    pub(crate) fn from_quads(
        mesh: &GlyphMesh,
        buffer: &UnitQuadBuffer,
        faces: &[OrientedBlockFace; 6],
    ) -> Self {
        let num_indices = buffer.num_quads() * 6;
        let num_vertices = buffer.num_quads() * 4;
        let mut indices = Vec::with_capacity(num_indices);
        let mut positions = Vec::with_capacity(num_vertices);
        let mut normals = Vec::with_capacity(num_vertices);
        for (group, face) in buffer.groups.iter().zip(faces.iter()) {
            for quad in group.iter() {
                let cuboid = &mesh.cuboids()[quad.cuboid as usize];
                indices.extend_from_slice(&face.quad_mesh_indices(positions.len() as u32));
                positions.extend_from_slice(&face.quad_mesh_positions(cuboid));
                normals.extend_from_slice(&face.quad_mesh_normals());
            }
        }

        Self {
            positions,
            normals,
            indices,
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.positions.len()
    }

    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }
}

impl GlyphMesh {
    /// Surface mesh of the glyph with faces between adjacent cells culled, in
    /// the right-handed Y-up coordinate system.
    pub fn to_triangle_mesh(&self) -> TriangleMesh {
        let faces = RIGHT_HANDED_Y_UP_CONFIG.faces;
        let mut buffer = UnitQuadBuffer::new();
        visible_cuboid_faces(self, &faces, &mut buffer);
        TriangleMesh::from_quads(self, &buffer, &faces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build_glyph_mesh, GlyphMeshBuilder, GlyphPattern};
    use ilattice::glam::Vec3;

    fn face_count(symbol: char) -> usize {
        let mesh = build_glyph_mesh(symbol, 1.0);
        let mut buffer = UnitQuadBuffer::new();
        visible_cuboid_faces(&mesh, &RIGHT_HANDED_Y_UP_CONFIG.faces, &mut buffer);
        buffer.num_quads()
    }

    /// Counts the faces between two filled cells of a pattern.
    fn shared_faces(pattern: &GlyphPattern) -> usize {
        let mut shared = 0;
        for [col, row] in pattern.filled_cells() {
            if pattern.is_filled(col + 1, row) {
                shared += 1;
            }
            if pattern.is_filled(col, row + 1) {
                shared += 1;
            }
        }
        shared
    }

    #[test]
    fn interior_faces_are_culled() {
        for symbol in crate::pattern::supported_characters() {
            let pattern = crate::pattern::lookup(symbol);
            let expected = 6 * pattern.filled_count() - 2 * shared_faces(pattern);
            assert_eq!(face_count(symbol), expected, "{symbol:?}");
        }
    }

    #[test]
    fn isolated_cell_keeps_all_faces() {
        // The flag of the '1' at row 2 touches nothing on its left, right or below.
        let mesh = build_glyph_mesh('1', 1.0);
        let flag = mesh
            .cells()
            .iter()
            .position(|&cell| cell == [1, 2])
            .unwrap() as u32;
        let mut buffer = UnitQuadBuffer::new();
        visible_cuboid_faces(&mesh, &RIGHT_HANDED_Y_UP_CONFIG.faces, &mut buffer);
        let flag_faces = buffer
            .groups
            .iter()
            .flatten()
            .filter(|quad| quad.cuboid == flag)
            .count();
        // Only the diagonal neighbour at [2, 1] exists, which shares no face.
        assert_eq!(flag_faces, 6);
    }

    #[test]
    fn buffer_is_reset_between_runs() {
        let mesh = build_glyph_mesh('C', 1.0);
        let mut buffer = UnitQuadBuffer::new();
        visible_cuboid_faces(&mesh, &RIGHT_HANDED_Y_UP_CONFIG.faces, &mut buffer);
        let first = buffer.num_quads();
        visible_cuboid_faces(&mesh, &RIGHT_HANDED_Y_UP_CONFIG.faces, &mut buffer);
        assert_eq!(buffer.num_quads(), first);
    }

    #[test]
    fn triangle_mesh_sizes() {
        let mesh = GlyphMeshBuilder::with_extrude_depth(2.0).build('B');
        let triangles = mesh.to_triangle_mesh();
        let quads = face_count('B');
        assert_eq!(triangles.num_vertices(), 4 * quads);
        assert_eq!(triangles.normals.len(), 4 * quads);
        assert_eq!(triangles.num_triangles(), 2 * quads);
        assert!(triangles
            .indices
            .iter()
            .all(|&i| (i as usize) < triangles.num_vertices()));
    }

    #[test]
    fn triangle_mesh_stays_inside_glyph_bounds() {
        let mesh = build_glyph_mesh('5', 1.0);
        let (min, max) = mesh.cuboids().iter().fold(
            (Vec3::splat(f32::MAX), Vec3::splat(f32::MIN)),
            |(min, max), cuboid| (min.min(cuboid.min()), max.max(cuboid.max())),
        );
        assert!(max.x <= 3.5 * 0.8 + 0.4 + 1e-5);
        assert!(min.y >= -(3.5 * 0.8 + 0.4 + 1e-5));
        assert_eq!((min.z, max.z), (-0.5, 0.5));

        let triangles = mesh.to_triangle_mesh();
        for &position in &triangles.positions {
            let p = Vec3::from(position);
            assert!(p.cmpge(min - 1e-5).all() && p.cmple(max + 1e-5).all(), "{p:?}");
        }
    }
}
