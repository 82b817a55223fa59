//! Camera calibration records

mod intrinsics;
mod pinhole;

pub use intrinsics::CameraIntrinsics;
pub use pinhole::PinholeCamera;
