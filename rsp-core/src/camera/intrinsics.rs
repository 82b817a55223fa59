use serde::{Deserialize, Serialize};

use super::PinholeCamera;

/// Calibration parameters as consumed by NeRF-style `transforms.json` readers.
///
/// Field order here is the key order in the emitted document. Values are
/// taken as-is; nothing is range-checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraIntrinsics {
    camera_angle_x: f64,
    camera_angle_y: f64,
    #[serde(rename = "fl_x")]
    focal_length_x: f64,
    #[serde(rename = "fl_y")]
    focal_length_y: f64,
    #[serde(rename = "k1")]
    distortion_k1: f64,
    #[serde(rename = "k2")]
    distortion_k2: f64,
    #[serde(rename = "p1")]
    distortion_p1: f64,
    #[serde(rename = "p2")]
    distortion_p2: f64,
    #[serde(rename = "cx")]
    principal_point_x: f64,
    #[serde(rename = "cy")]
    principal_point_y: f64,
    #[serde(rename = "w")]
    image_width: f64,
    #[serde(rename = "h")]
    image_height: f64,
    aabb_scale: f64,
}

impl CameraIntrinsics {
    /// Create a fully populated record
    pub fn new(
        camera_angle_x: f64,
        camera_angle_y: f64,
        focal_length_x: f64,
        focal_length_y: f64,
        distortion_k1: f64,
        distortion_k2: f64,
        distortion_p1: f64,
        distortion_p2: f64,
        principal_point_x: f64,
        principal_point_y: f64,
        image_width: f64,
        image_height: f64,
        aabb_scale: f64,
    ) -> Self {
        Self {
            camera_angle_x,
            camera_angle_y,
            focal_length_x,
            focal_length_y,
            distortion_k1,
            distortion_k2,
            distortion_p1,
            distortion_p2,
            principal_point_x,
            principal_point_y,
            image_width,
            image_height,
            aabb_scale,
        }
    }

    /// Derive every field from a calibrated pinhole camera.
    /// `aabb_scale` is not a camera property and has to be supplied.
    pub fn from_pinhole(camera: &PinholeCamera, aabb_scale: f64) -> Self {
        let (angle_x, angle_y) = camera.field_of_view();
        let (fx, fy) = camera.focal_length();
        let (cx, cy) = camera.principal_point();
        let (k1, k2, p1, p2) = camera.distortion();
        let (w, h) = camera.image_size();

        Self::new(
            angle_x, angle_y, fx, fy, k1, k2, p1, p2, cx, cy, w as f64, h as f64, aabb_scale,
        )
    }

    /// Horizontal and vertical field of view in radians
    pub fn camera_angles(&self) -> (f64, f64) {
        (self.camera_angle_x, self.camera_angle_y)
    }

    pub fn focal_length(&self) -> (f64, f64) {
        (self.focal_length_x, self.focal_length_y)
    }

    /// Radial (k1, k2) and tangential (p1, p2) coefficients
    pub fn distortion(&self) -> (f64, f64, f64, f64) {
        (
            self.distortion_k1,
            self.distortion_k2,
            self.distortion_p1,
            self.distortion_p2,
        )
    }

    pub fn principal_point(&self) -> (f64, f64) {
        (self.principal_point_x, self.principal_point_y)
    }

    pub fn image_size(&self) -> (f64, f64) {
        (self.image_width, self.image_height)
    }

    pub fn aabb_scale(&self) -> f64 {
        self.aabb_scale
    }
}
