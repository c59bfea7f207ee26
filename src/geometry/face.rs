use crate::{AxisPermutation, Cuboid};

use ilattice::glam::{IVec3, Vec3};

/// Metadata that's used to aid in the geometric calculations for one of the 6 possible cuboid faces.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OrientedBlockFace {
    /// Determines the orientation of the plane.
    pub(crate) n_sign: i32,

    /// Determines the {N, U, V} <--> {X, Y, Z} relation.
    pub(crate) permutation: AxisPermutation,

    /// First in the `permutation` of +X, +Y, and +Z.
    pub(crate) n: IVec3,
    /// Second in the `permutation` of +X, +Y, and +Z.
    pub(crate) u: IVec3,
    /// Third in the `permutation` of +X, +Y, and +Z.
    pub(crate) v: IVec3,
}

impl OrientedBlockFace {
    pub const fn new(n_sign: i32, permutation: AxisPermutation) -> Self {
        let [n_axis, u_axis, v_axis] = permutation.axes();

        Self {
            n_sign,
            permutation,
            n: n_axis.unit_ivec(),
            u: u_axis.unit_ivec(),
            v: v_axis.unit_ivec(),
        }
    }

    #[inline]
    pub fn n_sign(&self) -> i32 {
        self.n_sign
    }

    #[inline]
    pub fn permutation(&self) -> AxisPermutation {
        self.permutation
    }

    /// Offset from a grid cell to the neighbour sharing this face.
    #[inline]
    pub fn signed_normal(&self) -> IVec3 {
        self.n * self.n_sign
    }

    /// Returns the corners of this face on the unit cube `[0, 1]^3`, in this
    /// order:
    ///
    /// ```text
    ///         2 ----> 3
    ///           ^
    ///     ^       \
    ///     |         \
    ///  +V |   0 ----> 1
    ///     |
    ///      -------->
    ///        +U
    ///
    /// (+N pointing out of the screen)
    /// ```
    #[inline]
    pub fn unit_corners(&self) -> [IVec3; 4] {
        let minu_minv = if self.n_sign > 0 { self.n } else { IVec3::ZERO };
        let maxu_minv = minu_minv + self.u;
        let minu_maxv = minu_minv + self.v;
        let maxu_maxv = minu_minv + self.u + self.v;

        [minu_minv, maxu_minv, minu_maxv, maxu_maxv]
    }

    /// The face corners stretched over `cuboid`, in [`unit_corners`](Self::unit_corners) order.
    #[inline]
    pub fn cuboid_corners(&self, cuboid: &Cuboid) -> [Vec3; 4] {
        self.unit_corners().map(|corner| {
            let sign = 2.0 * corner.as_vec3() - Vec3::ONE;
            cuboid.center + sign * cuboid.half_extents
        })
    }

    #[inline]
    pub fn quad_mesh_positions(&self, cuboid: &Cuboid) -> [[f32; 3]; 4] {
        self.cuboid_corners(cuboid).map(|c| c.to_array())
    }

    #[inline]
    pub fn quad_mesh_normals(&self) -> [[f32; 3]; 4] {
        [self.signed_normal().as_vec3().to_array(); 4]
    }

    /// Returns the 6 vertex indices for the quad in order to make two triangles
    /// in a mesh. Winding order depends on both the sign of the surface normal
    /// and the permutation of the UVs.
    ///
    /// Front faces will be wound counterclockwise, and back faces clockwise, as
    /// per convention.
    #[inline]
    pub fn quad_mesh_indices(&self, start: u32) -> [u32; 6] {
        quad_indices(start, self.n_sign * self.permutation.sign() > 0)
    }
}

/// Returns the vertex indices for a single quad (two triangles). The triangles
/// may have either clockwise or counter-clockwise winding. `start` is the first
/// index.
fn quad_indices(start: u32, counter_clockwise: bool) -> [u32; 6] {
    if counter_clockwise {
        [start, start + 1, start + 2, start + 1, start + 3, start + 2]
    } else {
        [start, start + 2, start + 1, start + 1, start + 2, start + 3]
    }
}
