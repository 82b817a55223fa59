//! Flat `transforms.json` record

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use rsp_core::{CameraIntrinsics, Frame};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::{IoError, Result};

const INDENT: &[u8] = b"    ";

/// Output record: intrinsic keys at the top level followed by `"frames"`.
///
/// Borrows from the session so building it copies nothing.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TransformsDocument<'a> {
    #[serde(flatten)]
    intrinsics: &'a CameraIntrinsics,
    frames: &'a [Frame],
}

impl<'a> TransformsDocument<'a> {
    pub fn new(intrinsics: &'a CameraIntrinsics, frames: &'a [Frame]) -> Self {
        Self { intrinsics, frames }
    }

    /// Pretty JSON with 4-space indentation; non-ASCII text is left unescaped
    pub fn to_json_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        self.serialize(&mut ser)?;
        // serde_json only emits UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Create or truncate `path` and write the document in one pass
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = self.to_json_string()?;

        let file = File::create(path).map_err(|source| IoError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(json.as_bytes())
            .and_then(|()| writer.flush())
            .map_err(|source| IoError::Write {
                path: path.to_path_buf(),
                source,
            })?;

        log::info!("Wrote {} frames to {}", self.frames.len(), path.display());
        Ok(())
    }
}
