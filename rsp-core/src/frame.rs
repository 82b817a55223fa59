//! Captured frames

use nalgebra::Matrix4;
use serde::{Deserialize, Serialize};

use crate::coordinate::Pose;

/// Fixed sharpness written for every frame that was not scored by the caller.
/// This is a placeholder, not a measured image-quality metric.
pub const SHARPNESS_PLACEHOLDER: f64 = 100.0;

/// One capture: an image reference plus the camera-to-world transform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    image_path: String,
    sharpness: f64,
    /// Row-major 4x4 homogeneous transform
    transform_matrix: [[f64; 4]; 4],
}

impl Frame {
    pub fn new(image_path: impl Into<String>, sharpness: f64, transform_matrix: [[f64; 4]; 4]) -> Self {
        Self {
            image_path: image_path.into(),
            sharpness,
            transform_matrix,
        }
    }

    /// Frame with the placeholder sharpness and the pose's homogeneous matrix
    pub fn from_pose<P: Pose + ?Sized>(image_path: impl Into<String>, pose: &P) -> Self {
        Self::scored(image_path, pose, SHARPNESS_PLACEHOLDER)
    }

    /// Frame with a sharpness computed by the caller
    pub fn scored<P: Pose + ?Sized>(image_path: impl Into<String>, pose: &P, sharpness: f64) -> Self {
        Self::new(image_path, sharpness, rows(&pose.to_matrix()))
    }

    pub fn image_path(&self) -> &str {
        &self.image_path
    }

    pub fn sharpness(&self) -> f64 {
        self.sharpness
    }

    pub fn transform_matrix(&self) -> &[[f64; 4]; 4] {
        &self.transform_matrix
    }

    /// Transform as an nalgebra matrix
    pub fn transform(&self) -> Matrix4<f64> {
        Matrix4::from_fn(|r, c| self.transform_matrix[r][c])
    }
}

/// Split a matrix into rows, first index = row
fn rows(m: &Matrix4<f64>) -> [[f64; 4]; 4] {
    std::array::from_fn(|r| std::array::from_fn(|c| m[(r, c)]))
}
