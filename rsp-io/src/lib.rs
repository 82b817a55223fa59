//! Export of capture sessions as NeRF-style `transforms.json` files

pub mod document;
pub mod error;
pub mod session;

pub use document::TransformsDocument;
pub use error::{IoError, Result};
pub use session::CaptureSession;

// Re-export from rsp-core for convenience
pub use rsp_core::{CameraIntrinsics, Frame, Pose, Se3Pose};
