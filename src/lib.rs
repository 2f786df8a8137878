pub mod camera;
pub mod cli;
pub mod clock;
pub mod config;
pub mod light;
pub mod math;
pub mod scene;
pub mod transform;
pub mod types;

pub use camera::{Camera, CameraMovement};
pub use clock::Clock;
pub use config::CameraConfig;
pub use light::{Light, LightKind};
pub use math::{Mat2, Mat3, Mat4, Vec2, Vec3, Vec4};
pub use scene::{Entity, EntityId, Scene, SceneError};
pub use transform::Transform;
