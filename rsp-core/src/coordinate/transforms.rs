use nalgebra::{Isometry3, Matrix4, Quaternion, Translation3, UnitQuaternion, Vector3};

/// Anything that can be expressed as a 4x4 homogeneous transform.
///
/// The returned matrix maps camera coordinates into world coordinates:
/// `[R | t; 0 0 0 1]`, indexed `(row, col)`.
pub trait Pose {
    fn to_matrix(&self) -> Matrix4<f64>;
}

/// Camera pose in SE(3): rotation as a unit quaternion plus a translation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Se3Pose {
    pub rotation: UnitQuaternion<f64>,
    pub translation: Vector3<f64>,
}

impl Se3Pose {
    pub fn new(rotation: UnitQuaternion<f64>, translation: Vector3<f64>) -> Self {
        Self { rotation, translation }
    }

    /// Pose at the world origin with no rotation
    pub fn identity() -> Self {
        Self::new(UnitQuaternion::identity(), Vector3::zeros())
    }

    /// Pure translation, no rotation
    pub fn from_translation(translation: Vector3<f64>) -> Self {
        Self::new(UnitQuaternion::identity(), translation)
    }

    /// Build from raw quaternion components (w, x, y, z).
    /// The quaternion is normalized; nothing else is checked.
    pub fn from_quaternion(w: f64, x: f64, y: f64, z: f64, translation: Vector3<f64>) -> Self {
        let rotation = UnitQuaternion::from_quaternion(Quaternion::new(w, x, y, z));
        Self::new(rotation, translation)
    }

    pub fn to_isometry(&self) -> Isometry3<f64> {
        Isometry3::from_parts(Translation3::from(self.translation), self.rotation)
    }
}

impl Default for Se3Pose {
    fn default() -> Self {
        Self::identity()
    }
}

impl Pose for Se3Pose {
    fn to_matrix(&self) -> Matrix4<f64> {
        self.to_isometry().to_homogeneous()
    }
}

impl Pose for Isometry3<f64> {
    fn to_matrix(&self) -> Matrix4<f64> {
        self.to_homogeneous()
    }
}

// Already homogeneous, passed through as-is
impl Pose for Matrix4<f64> {
    fn to_matrix(&self) -> Matrix4<f64> {
        *self
    }
}
