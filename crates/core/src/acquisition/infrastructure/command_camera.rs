use std::path::Path;
use std::process::{Command, Stdio};

use crate::acquisition::domain::acquisition_outcome::AcquisitionError;
use crate::acquisition::domain::camera::Camera;
use crate::acquisition::infrastructure::image_file_decoder::decode_file;
use crate::shared::acquired_image::AcquiredImage;
use crate::shared::constants::{CAMERA_OUTPUT_PLACEHOLDER, PREVIEW_MAX_DIMENSION};

/// [`Camera`] that hands off to an external capture program, much like a
/// phone delegates to its camera app.
///
/// `command` is an argv list. Every `{output}` in the arguments is replaced
/// with the path the program must write its photo to. A non-zero exit or a
/// missing output file means the user backed out. Captures are downscaled to
/// preview resolution.
pub struct CommandCamera {
    command: Vec<String>,
    preview_max_dimension: u32,
}

impl CommandCamera {
    pub fn new(command: Vec<String>) -> Self {
        Self {
            command,
            preview_max_dimension: PREVIEW_MAX_DIMENSION,
        }
    }

    pub fn with_preview_max_dimension(mut self, max_dimension: u32) -> Self {
        self.preview_max_dimension = max_dimension;
        self
    }

    fn program(&self) -> Option<&str> {
        self.command
            .first()
            .map(String::as_str)
            .filter(|p| !p.is_empty())
    }
}

impl Camera for CommandCamera {
    fn is_available(&self) -> bool {
        self.program().is_some_and(|p| program_exists(p))
    }

    fn capture(&mut self) -> Result<Option<AcquiredImage>, AcquisitionError> {
        let program = self.program().ok_or(AcquisitionError::NoCameraCommand)?;

        let workspace = tempfile::tempdir().map_err(AcquisitionError::CameraWorkspace)?;
        let output = workspace.path().join("capture.jpg");
        let output_arg = output.to_string_lossy();
        let args: Vec<String> = self.command[1..]
            .iter()
            .map(|arg| arg.replace(CAMERA_OUTPUT_PLACEHOLDER, &output_arg))
            .collect();

        log::debug!("Running camera command: {program} {}", args.join(" "));
        let status = Command::new(program)
            .args(&args)
            .stdin(Stdio::null())
            .status()
            .map_err(|e| AcquisitionError::CameraLaunch {
                program: program.to_string(),
                source: e,
            })?;

        if !status.success() {
            log::info!("Camera command exited with {status}; treating as cancelled");
            return Ok(None);
        }
        if !output.is_file() {
            log::info!("Camera command produced no photo; treating as cancelled");
            return Ok(None);
        }

        let photo = decode_file(&output)?;
        Ok(Some(photo.downscaled(self.preview_max_dimension)))
    }
}

/// Whether `program` names an existing file, either directly or via `PATH`.
fn program_exists(program: &str) -> bool {
    let path = Path::new(program);
    if path.components().count() > 1 {
        return path.is_file();
    }

    let Some(paths) = std::env::var_os("PATH") else {
        return false;
    };
    std::env::split_paths(&paths).any(|dir| {
        let candidate = dir.join(program);
        candidate.is_file() || (cfg!(windows) && candidate.with_extension("exe").is_file())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_command_is_unavailable() {
        assert!(!CommandCamera::new(vec![]).is_available());
        assert!(!CommandCamera::new(args(&[""])).is_available());
    }

    #[test]
    fn test_missing_program_is_unavailable() {
        let camera = CommandCamera::new(args(&["definitely-not-a-camera-program-xyz"]));
        assert!(!camera.is_available());
    }

    #[test]
    fn test_capture_without_command_errors() {
        let mut camera = CommandCamera::new(vec![]);
        assert!(matches!(
            camera.capture(),
            Err(AcquisitionError::NoCameraCommand)
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_shell_is_available() {
        assert!(CommandCamera::new(args(&["sh"])).is_available());
        assert!(CommandCamera::new(args(&["/bin/sh"])).is_available());
    }

    #[cfg(unix)]
    #[test]
    fn test_capture_decodes_and_downscales() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("source.png");
        image::RgbImage::from_pixel(640, 480, image::Rgb([10, 20, 30]))
            .save(&source)
            .unwrap();

        let mut camera = CommandCamera::new(args(&[
            "sh",
            "-c",
            "cp \"$0\" \"$1\"",
            source.to_str().unwrap(),
            "{output}",
        ]));
        let photo = camera.capture().unwrap().expect("photo expected");
        assert_eq!((photo.width(), photo.height()), (320, 240));
    }

    #[cfg(unix)]
    #[test]
    fn test_custom_preview_size() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("source.png");
        image::RgbImage::from_pixel(200, 100, image::Rgb([10, 20, 30]))
            .save(&source)
            .unwrap();

        let mut camera = CommandCamera::new(args(&[
            "sh",
            "-c",
            "cp \"$0\" \"$1\"",
            source.to_str().unwrap(),
            "{output}",
        ]))
        .with_preview_max_dimension(50);
        let photo = camera.capture().unwrap().unwrap();
        assert_eq!((photo.width(), photo.height()), (50, 25));
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_is_cancellation() {
        let mut camera = CommandCamera::new(args(&["sh", "-c", "exit 1"]));
        assert!(camera.capture().unwrap().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_no_output_is_cancellation() {
        let mut camera = CommandCamera::new(args(&["sh", "-c", "true"]));
        assert!(camera.capture().unwrap().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_output_is_decode_error() {
        let mut camera = CommandCamera::new(args(&["sh", "-c", "echo junk > \"$0\"", "{output}"]));
        assert!(matches!(camera.capture(), Err(AcquisitionError::Decode(_))));
    }

    #[test]
    fn test_launch_failure_is_error() {
        let mut camera = CommandCamera::new(args(&["definitely-not-a-camera-program-xyz"]));
        assert!(matches!(
            camera.capture(),
            Err(AcquisitionError::CameraLaunch { .. })
        ));
    }
}
