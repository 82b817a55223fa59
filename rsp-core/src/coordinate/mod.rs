//! Rigid camera poses

mod transforms;

pub use transforms::{Pose, Se3Pose};
