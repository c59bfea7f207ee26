use ilattice::glam::IVec3;

/// Either the X, Y, or Z axis.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

impl Axis {
    #[inline]
    pub const fn unit_ivec(&self) -> IVec3 {
        match self {
            Axis::X => IVec3::X,
            Axis::Y => IVec3::Y,
            Axis::Z => IVec3::Z,
        }
    }
}

/// One of the six possible `{N, U, V}` --> `{X, Y, Z}` mappings.
///
/// Even permutations keep the handedness of `{X, Y, Z}`, odd ones mirror it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AxisPermutation {
    // Even permutations
    Xyz,
    Zxy,
    Yzx,
    // Odd permutations
    Zyx,
    Xzy,
    Yxz,
}

impl AxisPermutation {
    #[inline]
    pub const fn sign(&self) -> i32 {
        match self {
            AxisPermutation::Xyz | AxisPermutation::Zxy | AxisPermutation::Yzx => 1,
            AxisPermutation::Zyx | AxisPermutation::Xzy | AxisPermutation::Yxz => -1,
        }
    }

    /// Returns the axes in `{N, U, V}` order.
    ///
    /// ```
    /// # use glyph_voxel::{Axis, AxisPermutation};
    /// assert_eq!(AxisPermutation::Zxy.axes(), [Axis::Z, Axis::X, Axis::Y]);
    /// ```
    #[inline]
    pub const fn axes(&self) -> [Axis; 3] {
        match self {
            AxisPermutation::Xyz => [Axis::X, Axis::Y, Axis::Z],
            AxisPermutation::Zxy => [Axis::Z, Axis::X, Axis::Y],
            AxisPermutation::Yzx => [Axis::Y, Axis::Z, Axis::X],
            AxisPermutation::Zyx => [Axis::Z, Axis::Y, Axis::X],
            AxisPermutation::Xzy => [Axis::X, Axis::Z, Axis::Y],
            AxisPermutation::Yxz => [Axis::Y, Axis::X, Axis::Z],
        }
    }
}
