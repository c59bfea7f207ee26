/// A visible face of one cuboid, without an orientation. Combine with the
/// [`OrientedBlockFace`](crate::OrientedBlockFace) of its group to get corners.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct UnorientedUnitQuad {
    /// Position of the cuboid in [`GlyphMesh::cuboids`](crate::GlyphMesh::cuboids).
    pub cuboid: u32,
}

#[derive(Debug, Default)]
pub struct UnitQuadBuffer {
    /// A group of quads for each cuboid face. We rely on [`OrientedBlockFace`]
    /// metadata to interpret them.
    ///
    /// [`OrientedBlockFace`]: crate::OrientedBlockFace
    pub groups: [Vec<UnorientedUnitQuad>; 6],
}

impl UnitQuadBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the buffer.
    pub fn reset(&mut self) {
        for group in self.groups.iter_mut() {
            group.clear();
        }
    }

    /// Returns the total count of quads across all groups.
    pub fn num_quads(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }
}
