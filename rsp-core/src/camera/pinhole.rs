/// Calibrated pinhole camera with optional Brown-Conrady distortion
#[derive(Debug, Clone, PartialEq)]
pub struct PinholeCamera {
    width: usize,
    height: usize,
    fx: f64,
    fy: f64,
    cx: f64,
    cy: f64,
    k1: f64,
    k2: f64,
    p1: f64,
    p2: f64,
}

impl PinholeCamera {
    /// Create a new pinhole camera with radial (k1, k2) and tangential (p1, p2) distortion
    pub fn new_brown_conrady(
        width: usize,
        height: usize,
        fx: f64,
        fy: f64,
        cx: f64,
        cy: f64,
        k1: f64,
        k2: f64,
        p1: f64,
        p2: f64,
    ) -> Self {
        Self {
            width,
            height,
            fx,
            fy,
            cx,
            cy,
            k1,
            k2,
            p1,
            p2,
        }
    }

    /// Create a new pinhole camera with no distortion
    pub fn new_ideal(width: usize, height: usize, fx: f64, fy: f64, cx: f64, cy: f64) -> Self {
        Self::new_brown_conrady(width, height, fx, fy, cx, cy, 0.0, 0.0, 0.0, 0.0)
    }

    /// Get focal lengths
    pub fn focal_length(&self) -> (f64, f64) {
        (self.fx, self.fy)
    }

    /// Get principal point
    pub fn principal_point(&self) -> (f64, f64) {
        (self.cx, self.cy)
    }

    /// Distortion coefficients (k1, k2, p1, p2)
    pub fn distortion(&self) -> (f64, f64, f64, f64) {
        (self.k1, self.k2, self.p1, self.p2)
    }

    /// Get image dimensions this camera is calibrated for
    pub fn image_size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Full horizontal and vertical field of view in radians
    pub fn field_of_view(&self) -> (f64, f64) {
        let angle_x = 2.0 * (self.width as f64 / (2.0 * self.fx)).atan();
        let angle_y = 2.0 * (self.height as f64 / (2.0 * self.fy)).atan();
        (angle_x, angle_y)
    }
}
