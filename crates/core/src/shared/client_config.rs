use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::presentation::locale::Locale;
use crate::recognition::domain::endpoint::{Endpoint, EndpointError};
use crate::shared::constants::DEFAULT_ENDPOINT;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("invalid camera command '{0}': unbalanced quotes")]
    CameraCommand(String),
}

/// Settings shared by every front-end: where to upload, how long to wait,
/// how to reach the camera, and which language to answer in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub endpoint: String,
    pub timeout_secs: Option<u64>,
    pub camera_command: Vec<String>,
    pub locale: Locale,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: None,
            camera_command: default_camera_command(),
            locale: Locale::default(),
        }
    }
}

/// Platform capture program writing one still frame to `{output}`.
pub fn default_camera_command() -> Vec<String> {
    #[cfg(target_os = "macos")]
    let argv: &[&str] = &["imagesnap", "-q", "-w", "1", "{output}"];
    #[cfg(target_os = "windows")]
    let argv: &[&str] = &[
        "ffmpeg", "-loglevel", "error", "-y", "-f", "dshow", "-i", "video=Integrated Camera",
        "-frames:v", "1", "{output}",
    ];
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let argv: &[&str] = &[
        "ffmpeg", "-loglevel", "error", "-y", "-f", "v4l2", "-i", "/dev/video0", "-frames:v",
        "1", "{output}",
    ];
    argv.iter().map(|s| s.to_string()).collect()
}

/// Parse a shell-style command line into argv. Quoted arguments may contain
/// spaces, e.g. `ffmpeg -i "video=Integrated Camera" {output}`.
pub fn parse_camera_command(line: &str) -> Result<Vec<String>, ConfigError> {
    shlex::split(line).ok_or_else(|| ConfigError::CameraCommand(line.to_string()))
}

/// Inverse of [`parse_camera_command`], for showing argv in a text field.
pub fn format_camera_command(argv: &[String]) -> String {
    shlex::try_join(argv.iter().map(String::as_str)).unwrap_or_else(|_| argv.join(" "))
}

impl ClientConfig {
    /// `<config_dir>/FaceCheck/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("FaceCheck").join("config.json"))
    }

    /// Load from the default location. A missing or broken file yields defaults.
    pub fn load() -> Self {
        Self::default_path()
            .map(|path| Self::load_or_default(&path))
            .unwrap_or_default()
    }

    /// Forgiving load: falls back to defaults and logs why.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        Self::load_from(path).unwrap_or_else(|e| {
            log::warn!("{e}; using default settings");
            Self::default()
        })
    }

    /// Strict load for explicitly requested files.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&json).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Write {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        fs::write(path, self.to_json_pretty()?).map_err(|e| ConfigError::Write {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    pub fn endpoint(&self) -> Result<Endpoint, EndpointError> {
        Endpoint::parse(&self.endpoint)
    }

    /// `timeout_secs: 0` in a hand-edited file means no timeout.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.filter(|&secs| secs > 0).map(Duration::from_secs)
    }
}
