pub mod camera;
pub mod coordinate;
pub mod frame;

pub use camera::{CameraIntrinsics, PinholeCamera};
pub use coordinate::{Pose, Se3Pose};
pub use frame::{Frame, SHARPNESS_PLACEHOLDER};
