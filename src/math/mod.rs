mod matrix;
pub mod trig;
mod vector;

pub use matrix::{Mat2, Mat3, Mat4};
pub use trig::{degrees, radians, DEG_TO_RAD, RAD_TO_DEG};
pub use vector::{Vec2, Vec3, Vec4};
