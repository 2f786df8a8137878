use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut, Mul};

use super::vector::{Vec2, Vec3, Vec4};

/// 2x2 column-major matrix.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Mat2 {
    cols: [Vec2; 2],
}

/// 3x3 column-major matrix.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Mat3 {
    cols: [Vec3; 3],
}

/// 4x4 column-major matrix.
///
/// Storage is an array of column vectors; `to_cols_array` yields the exact
/// layout a GPU uniform upload expects.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Mat4 {
    cols: [Vec4; 4],
}

impl Mat2 {
    pub const IDENTITY: Self = Self {
        cols: [Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)],
    };

    /// Matrix with `scale` on the diagonal and 0 elsewhere.
    pub const fn diagonal(scale: f32) -> Self {
        Self {
            cols: [Vec2::new(scale, 0.0), Vec2::new(0.0, scale)],
        }
    }

    pub const fn from_cols(x: Vec2, y: Vec2) -> Self {
        Self { cols: [x, y] }
    }

    /// Builds from a column-major flat array.
    pub const fn from_cols_array(a: [f32; 4]) -> Self {
        Self::from_cols(Vec2::new(a[0], a[1]), Vec2::new(a[2], a[3]))
    }

    /// Flattens column by column, column 0 first.
    pub const fn to_cols_array(self) -> [f32; 4] {
        [
            self.cols[0].x, self.cols[0].y,
            self.cols[1].x, self.cols[1].y,
        ]
    }
}

impl Mat3 {
    pub const IDENTITY: Self = Self {
        cols: [
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        ],
    };

    /// Matrix with `scale` on the diagonal and 0 elsewhere.
    pub const fn diagonal(scale: f32) -> Self {
        Self {
            cols: [
                Vec3::new(scale, 0.0, 0.0),
                Vec3::new(0.0, scale, 0.0),
                Vec3::new(0.0, 0.0, scale),
            ],
        }
    }

    pub const fn from_cols(x: Vec3, y: Vec3, z: Vec3) -> Self {
        Self { cols: [x, y, z] }
    }

    /// Builds from a column-major flat array.
    pub const fn from_cols_array(a: [f32; 9]) -> Self {
        Self::from_cols(
            Vec3::new(a[0], a[1], a[2]),
            Vec3::new(a[3], a[4], a[5]),
            Vec3::new(a[6], a[7], a[8]),
        )
    }

    /// Upper-left 3x3 block of a [`Mat4`].
    pub const fn from_mat4(m: Mat4) -> Self {
        Self::from_cols(
            m.cols[0].truncate(),
            m.cols[1].truncate(),
            m.cols[2].truncate(),
        )
    }

    /// Flattens column by column, column 0 first.
    pub const fn to_cols_array(self) -> [f32; 9] {
        [
            self.cols[0].x, self.cols[0].y, self.cols[0].z,
            self.cols[1].x, self.cols[1].y, self.cols[1].z,
            self.cols[2].x, self.cols[2].y, self.cols[2].z,
        ]
    }
}

impl Mat4 {
    pub const IDENTITY: Self = Self {
        cols: [
            Vec4::new(1.0, 0.0, 0.0, 0.0),
            Vec4::new(0.0, 1.0, 0.0, 0.0),
            Vec4::new(0.0, 0.0, 1.0, 0.0),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        ],
    };

    /// Matrix with `scale` on the diagonal and 0 elsewhere.
    pub const fn diagonal(scale: f32) -> Self {
        Self {
            cols: [
                Vec4::new(scale, 0.0, 0.0, 0.0),
                Vec4::new(0.0, scale, 0.0, 0.0),
                Vec4::new(0.0, 0.0, scale, 0.0),
                Vec4::new(0.0, 0.0, 0.0, scale),
            ],
        }
    }

    pub const fn from_cols(x: Vec4, y: Vec4, z: Vec4, w: Vec4) -> Self {
        Self { cols: [x, y, z, w] }
    }

    /// Builds from a column-major flat array.
    pub const fn from_cols_array(a: [f32; 16]) -> Self {
        Self::from_cols(
            Vec4::new(a[0], a[1], a[2], a[3]),
            Vec4::new(a[4], a[5], a[6], a[7]),
            Vec4::new(a[8], a[9], a[10], a[11]),
            Vec4::new(a[12], a[13], a[14], a[15]),
        )
    }

    /// Flattens column by column, column 0 first.
    pub const fn to_cols_array(self) -> [f32; 16] {
        [
            self.cols[0].x, self.cols[0].y, self.cols[0].z, self.cols[0].w,
            self.cols[1].x, self.cols[1].y, self.cols[1].z, self.cols[1].w,
            self.cols[2].x, self.cols[2].y, self.cols[2].z, self.cols[2].w,
            self.cols[3].x, self.cols[3].y, self.cols[3].z, self.cols[3].w,
        ]
    }

    /// Translation matrix.
    pub const fn from_translation(v: Vec3) -> Self {
        Self {
            cols: [
                Vec4::new(1.0, 0.0, 0.0, 0.0),
                Vec4::new(0.0, 1.0, 0.0, 0.0),
                Vec4::new(0.0, 0.0, 1.0, 0.0),
                Vec4::new(v.x, v.y, v.z, 1.0),
            ],
        }
    }

    /// Non-uniform scale matrix.
    pub const fn from_scale(v: Vec3) -> Self {
        Self {
            cols: [
                Vec4::new(v.x, 0.0, 0.0, 0.0),
                Vec4::new(0.0, v.y, 0.0, 0.0),
                Vec4::new(0.0, 0.0, v.z, 0.0),
                Vec4::new(0.0, 0.0, 0.0, 1.0),
            ],
        }
    }

    /// Rotation of `angle` radians about `axis`. The axis is normalized here;
    /// a zero axis falls through as-is and yields a degenerate matrix.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let axis = axis.normalize();
        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;
        let (x, y, z) = (axis.x, axis.y, axis.z);

        Self::from_cols(
            Vec4::new(t * x * x + c, t * x * y + s * z, t * x * z - s * y, 0.0),
            Vec4::new(t * x * y - s * z, t * y * y + c, t * y * z + s * x, 0.0),
            Vec4::new(t * x * z + s * y, t * y * z - s * x, t * z * z + c, 0.0),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        )
    }

    /// Right-handed view matrix from eye position, target point and up reference.
    ///
    /// Front parallel to `up` degenerates the basis; callers keep the camera
    /// pitch clamped away from the poles instead.
    pub fn look_at_rh(eye: Vec3, center: Vec3, up: Vec3) -> Self {
        let f = (center - eye).normalize();
        let s = f.cross(up).normalize();
        let u = s.cross(f);

        Self::from_cols(
            Vec4::new(s.x, u.x, -f.x, 0.0),
            Vec4::new(s.y, u.y, -f.y, 0.0),
            Vec4::new(s.z, u.z, -f.z, 0.0),
            Vec4::new(-s.dot(eye), -u.dot(eye), f.dot(eye), 1.0),
        )
    }

    /// Right-handed perspective projection with OpenGL [-1, 1] clip depth.
    pub fn perspective_rh_gl(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let tan_half = (fov_y / 2.0).tan();

        let mut m = Self::diagonal(0.0);
        m[(0, 0)] = 1.0 / (aspect * tan_half);
        m[(1, 1)] = 1.0 / tan_half;
        m[(2, 2)] = -(far + near) / (far - near);
        m[(2, 3)] = -1.0;
        m[(3, 2)] = -(2.0 * far * near) / (far - near);
        m
    }
}

macro_rules! impl_matrix_common {
    ($t:ty, $vec:ty, $n:expr) => {
        impl Index<usize> for $t {
            type Output = $vec;
            fn index(&self, column: usize) -> &$vec {
                &self.cols[column]
            }
        }

        impl IndexMut<usize> for $t {
            fn index_mut(&mut self, column: usize) -> &mut $vec {
                &mut self.cols[column]
            }
        }

        impl Index<(usize, usize)> for $t {
            type Output = f32;
            fn index(&self, (column, row): (usize, usize)) -> &f32 {
                &self.cols[column][row]
            }
        }

        impl IndexMut<(usize, usize)> for $t {
            fn index_mut(&mut self, (column, row): (usize, usize)) -> &mut f32 {
                &mut self.cols[column][row]
            }
        }

        impl Default for $t {
            fn default() -> Self {
                Self::IDENTITY
            }
        }

        // Hash folds the component bits in column order; equal matrices
        // hash equal.
        impl Hash for $t {
            fn hash<H: Hasher>(&self, state: &mut H) {
                for component in self.to_cols_array() {
                    state.write_u32(component.to_bits());
                }
            }
        }

        impl Mul<f32> for $t {
            type Output = Self;
            fn mul(self, rhs: f32) -> Self {
                let mut out = self;
                for c in 0..$n {
                    out.cols[c] = out.cols[c] * rhs;
                }
                out
            }
        }

        impl Mul for $t {
            type Output = Self;
            fn mul(self, rhs: Self) -> Self {
                let mut out = self;
                for c in 0..$n {
                    out.cols[c] = self * rhs.cols[c];
                }
                out
            }
        }
    };
}

impl_matrix_common!(Mat2, Vec2, 2);
impl_matrix_common!(Mat3, Vec3, 3);
impl_matrix_common!(Mat4, Vec4, 4);

// Matrix-vector products pair row `r` of each column with the input
// component of that column: result[r] = sum over c of self[(c, r)] * v[c].

impl Mul<Vec2> for Mat2 {
    type Output = Vec2;
    fn mul(self, v: Vec2) -> Vec2 {
        Vec2::new(
            self[(0, 0)] * v.x + self[(1, 0)] * v.y,
            self[(0, 1)] * v.x + self[(1, 1)] * v.y,
        )
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;
    fn mul(self, v: Vec3) -> Vec3 {
        Vec3::new(
            self[(0, 0)] * v.x + self[(1, 0)] * v.y + self[(2, 0)] * v.z,
            self[(0, 1)] * v.x + self[(1, 1)] * v.y + self[(2, 1)] * v.z,
            self[(0, 2)] * v.x + self[(1, 2)] * v.y + self[(2, 2)] * v.z,
        )
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;
    fn mul(self, v: Vec4) -> Vec4 {
        Vec4::new(
            self[(0, 0)] * v.x + self[(1, 0)] * v.y + self[(2, 0)] * v.z + self[(3, 0)] * v.w,
            self[(0, 1)] * v.x + self[(1, 1)] * v.y + self[(2, 1)] * v.z + self[(3, 1)] * v.w,
            self[(0, 2)] * v.x + self[(1, 2)] * v.y + self[(2, 2)] * v.z + self[(3, 2)] * v.w,
            self[(0, 3)] * v.x + self[(1, 3)] * v.y + self[(2, 3)] * v.z + self[(3, 3)] * v.w,
        )
    }
}

// Row-grouped debug form: rows separated by ';', elements read across columns.

impl fmt::Display for Mat2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}; {}, {}]",
            self[(0, 0)], self[(1, 0)],
            self[(0, 1)], self[(1, 1)],
        )
    }
}

impl fmt::Display for Mat3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}; {}, {}, {}; {}, {}, {}]",
            self[(0, 0)], self[(1, 0)], self[(2, 0)],
            self[(0, 1)], self[(1, 1)], self[(2, 1)],
            self[(0, 2)], self[(1, 2)], self[(2, 2)],
        )
    }
}

impl fmt::Display for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}; {}, {}, {}, {}; {}, {}, {}, {}; {}, {}, {}, {}]",
            self[(0, 0)], self[(1, 0)], self[(2, 0)], self[(3, 0)],
            self[(0, 1)], self[(1, 1)], self[(2, 1)], self[(3, 1)],
            self[(0, 2)], self[(1, 2)], self[(2, 2)], self[(3, 2)],
            self[(0, 3)], self[(1, 3)], self[(2, 3)], self[(3, 3)],
        )
    }
}
