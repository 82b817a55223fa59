//! Capture session: camera intrinsics plus the ordered frames of one run

use std::path::{Path, PathBuf};

use rsp_core::{CameraIntrinsics, Frame, Pose};

use crate::document::TransformsDocument;
use crate::error::Result;

/// Accumulates frames in capture order and flushes them to a transforms file.
///
/// Single-writer: callers feeding frames from several threads must wrap the
/// session in their own lock.
#[derive(Debug, Clone)]
pub struct CaptureSession {
    output_path: PathBuf,
    intrinsics: CameraIntrinsics,
    frames: Vec<Frame>,
}

impl CaptureSession {
    /// Empty session with all-zero intrinsics. Nothing touches the disk until
    /// [`CaptureSession::write_to_file`].
    pub fn new<P: Into<PathBuf>>(output_path: P) -> Self {
        Self {
            output_path: output_path.into(),
            intrinsics: CameraIntrinsics::default(),
            frames: Vec::new(),
        }
    }

    /// Replace the intrinsics wholesale
    pub fn set_intrinsics(
        &mut self,
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
    ) {
        self.set_camera_intrinsics(CameraIntrinsics::new(
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
        ));
    }

    /// Replace the intrinsics with an already built record
    pub fn set_camera_intrinsics(&mut self, intrinsics: CameraIntrinsics) {
        log::debug!("Intrinsics replaced: {intrinsics:?}");
        self.intrinsics = intrinsics;
    }

    /// Append a frame with the placeholder sharpness
    pub fn add_frame<P: Pose + ?Sized>(&mut self, image_path: impl Into<String>, pose: &P) {
        self.push(Frame::from_pose(image_path, pose));
    }

    /// Append a frame whose sharpness was scored by the caller
    pub fn add_frame_with_sharpness<P: Pose + ?Sized>(
        &mut self,
        image_path: impl Into<String>,
        pose: &P,
        sharpness: f64,
    ) {
        self.push(Frame::scored(image_path, pose, sharpness));
    }

    fn push(&mut self, frame: Frame) {
        log::debug!("Frame {} added: {}", self.frames.len(), frame.image_path());
        self.frames.push(frame);
    }

    /// Drop all captured frames so the session can record a new batch.
    /// Intrinsics and output path are kept.
    pub fn clear_frames(&mut self) {
        log::debug!("Clearing {} frames", self.frames.len());
        self.frames.clear();
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn intrinsics(&self) -> &CameraIntrinsics {
        &self.intrinsics
    }

    /// Frames in capture order
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Flat output record borrowing this session's state
    pub fn document(&self) -> TransformsDocument<'_> {
        TransformsDocument::new(&self.intrinsics, &self.frames)
    }

    /// Render the exact content [`CaptureSession::write_to_file`] would write
    pub fn to_json_string(&self) -> Result<String> {
        self.document().to_json_string()
    }

    /// Create or truncate the output file and write the whole session to it
    pub fn write_to_file(&self) -> Result<()> {
        self.document().write_to(&self.output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Matrix4, UnitQuaternion, Vector3};
    use rsp_core::{SHARPNESS_PLACEHOLDER, Se3Pose};
    use serde_json::Value;

    fn render(session: &CaptureSession) -> Value {
        serde_json::from_str(&session.to_json_string().unwrap()).unwrap()
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = CaptureSession::new("out/transforms.json");
        assert_eq!(session.output_path(), Path::new("out/transforms.json"));
        assert_eq!(*session.intrinsics(), CameraIntrinsics::default());
        assert!(session.is_empty());
        assert_eq!(session.frame_count(), 0);
    }

    #[test]
    fn test_frames_keep_call_order() {
        let mut session = CaptureSession::new("t.json");
        for i in 0..25 {
            let pose = Se3Pose::from_translation(Vector3::new(i as f64, 0.0, 0.0));
            session.add_frame(format!("frame_{i:03}.png"), &pose);
        }

        let value = render(&session);
        let frames = value["frames"].as_array().unwrap();
        assert_eq!(frames.len(), 25);
        for (i, frame) in frames.iter().enumerate() {
            assert_eq!(frame["image_path"], format!("frame_{i:03}.png"));
            assert_eq!(frame["transform_matrix"][0][3], i as f64);
        }
    }

    #[test]
    fn test_duplicate_paths_are_kept() {
        let mut session = CaptureSession::new("t.json");
        session.add_frame("same.png", &Se3Pose::identity());
        session.add_frame("same.png", &Se3Pose::identity());
        assert_eq!(session.frame_count(), 2);
    }

    #[test]
    fn test_set_intrinsics_field_mapping() {
        let mut session = CaptureSession::new("t.json");
        session.set_intrinsics(
            0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0, 1.1, 1.2, 1.3,
        );

        let value = render(&session);
        let expected = [
            ("camera_angle_x", 0.1),
            ("camera_angle_y", 0.2),
            ("fl_x", 0.3),
            ("fl_y", 0.4),
            ("k1", 0.5),
            ("k2", 0.6),
            ("p1", 0.7),
            ("p2", 0.8),
            ("cx", 0.9),
            ("cy", 1.0),
            ("w", 1.1),
            ("h", 1.2),
            ("aabb_scale", 1.3),
        ];
        for (key, v) in expected {
            assert_eq!(value[key].as_f64(), Some(v), "key {key}");
        }
        // 13 intrinsic keys plus "frames"
        assert_eq!(value.as_object().unwrap().len(), 14);
    }

    #[test]
    fn test_set_intrinsics_overwrites() {
        let mut session = CaptureSession::new("t.json");
        session.set_intrinsics(
            1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0,
        );
        session.set_intrinsics(
            2.0, 0.0, 3.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
        );

        let value = render(&session);
        assert_eq!(value["camera_angle_x"], 2.0);
        assert_eq!(value["fl_x"], 3.0);
        assert_eq!(value["camera_angle_y"], 0.0);
        assert_eq!(value["aabb_scale"], 0.0);
    }

    #[test]
    fn test_set_camera_intrinsics() {
        let mut session = CaptureSession::new("t.json");
        let intrinsics = CameraIntrinsics::new(
            0.0, 0.0, 500.0, 500.0, 0.0, 0.0, 0.0, 0.0, 320.0, 240.0, 640.0, 480.0, 8.0,
        );
        session.set_camera_intrinsics(intrinsics);
        assert_eq!(*session.intrinsics(), intrinsics);
    }

    #[test]
    fn test_placeholder_and_scored_sharpness() {
        let mut session = CaptureSession::new("t.json");
        session.add_frame("a.png", &Se3Pose::identity());
        session.add_frame_with_sharpness("b.png", &Se3Pose::identity(), 37.5);

        let value = render(&session);
        assert_eq!(value["frames"][0]["sharpness"], SHARPNESS_PLACEHOLDER);
        assert_eq!(value["frames"][0]["sharpness"], 100.0);
        assert_eq!(value["frames"][1]["sharpness"], 37.5);
    }

    #[test]
    fn test_transform_matrix_matches_pose() {
        let rotation = UnitQuaternion::from_euler_angles(0.3, -0.2, 1.1);
        let pose = Se3Pose::new(rotation, Vector3::new(1.5, -0.5, 2.0));
        let expected = pose.to_matrix();

        let mut session = CaptureSession::new("t.json");
        session.add_frame("r.png", &pose);

        let value = render(&session);
        let matrix = &value["frames"][0]["transform_matrix"];
        for r in 0..4 {
            for c in 0..4 {
                let got = matrix[r][c].as_f64().unwrap();
                assert!((got - expected[(r, c)]).abs() < 1e-9, "({r}, {c})");
            }
        }
    }

    #[test]
    fn test_accepts_raw_matrix_pose() {
        let mut session = CaptureSession::new("t.json");
        let m = Matrix4::new_translation(&Vector3::new(0.0, 3.0, 0.0));
        session.add_frame("m.png", &m);
        assert_eq!(session.frames()[0].transform(), m);
    }

    #[test]
    fn test_clear_frames_empties_sequence() {
        let mut session = CaptureSession::new("t.json");
        session.set_intrinsics(
            1.0, 2.0, 3.0, 4.0, 0.0, 0.0, 0.0, 0.0, 9.0, 10.0, 11.0, 12.0, 13.0,
        );
        session.add_frame("old_1.png", &Se3Pose::identity());
        session.add_frame("old_2.png", &Se3Pose::identity());

        session.clear_frames();
        assert!(session.is_empty());
        assert_eq!(session.intrinsics().focal_length(), (3.0, 4.0));

        session.add_frame("new_1.png", &Se3Pose::identity());
        let value = render(&session);
        let frames = value["frames"].as_array().unwrap();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0]["image_path"], "new_1.png");
    }

    #[test]
    fn test_empty_session_document() {
        let value = render(&CaptureSession::new("t.json"));
        let obj = value.as_object().unwrap();

        assert_eq!(obj["frames"], Value::Array(vec![]));
        for (key, v) in obj.iter().filter(|(k, _)| k.as_str() != "frames") {
            assert_eq!(v.as_f64(), Some(0.0), "key {key}");
        }
    }

    #[test]
    fn test_nan_is_not_rejected() {
        let mut session = CaptureSession::new("t.json");
        session.set_intrinsics(
            f64::NAN, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
        );
        let value = render(&session);
        assert!(value["camera_angle_x"].is_null());
    }
}
