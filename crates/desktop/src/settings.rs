use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use facecheck_core::acquisition::domain::permission_gate::PermissionStatus;
use facecheck_core::shared::client_config::ClientConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    System,
    Dark,
    Light,
}

impl Appearance {
    pub const ALL: &[Appearance] = &[Appearance::System, Appearance::Dark, Appearance::Light];
}

impl std::fmt::Display for Appearance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Appearance::System => write!(f, "System"),
            Appearance::Dark => write!(f, "Dark"),
            Appearance::Light => write!(f, "Light"),
        }
    }
}

/// Persisted answer to the camera permission dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraPermission {
    Granted,
    Denied,
    #[default]
    NotAsked,
}

impl From<CameraPermission> for PermissionStatus {
    fn from(permission: CameraPermission) -> Self {
        match permission {
            CameraPermission::Granted => PermissionStatus::Granted,
            CameraPermission::Denied => PermissionStatus::Denied,
            CameraPermission::NotAsked => PermissionStatus::NotDetermined,
        }
    }
}

impl std::fmt::Display for CameraPermission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CameraPermission::Granted => write!(f, "Allowed"),
            CameraPermission::Denied => write!(f, "Denied"),
            CameraPermission::NotAsked => write!(f, "Not asked yet"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[serde(flatten)]
    pub client: ClientConfig,
    pub camera_permission: CameraPermission,
    pub appearance: Appearance,
    pub high_contrast: bool,
    pub font_scale: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            camera_permission: CameraPermission::default(),
            appearance: Appearance::System,
            high_contrast: false,
            font_scale: 1.0,
        }
    }
}

impl Settings {
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("FaceCheck").join("settings.json"))
    }

    pub fn load() -> Self {
        Self::config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    pub fn load_from(path: &Path) -> Self {
        fs::read_to_string(path)
            .ok()
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default()
    }

    pub fn save(&self) {
        if let Some(path) = Self::config_path() {
            self.save_to(&path);
        }
    }

    pub fn save_to(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = fs::write(path, json) {
                    log::warn!("Failed to save settings to {}: {e}", path.display());
                }
            }
            Err(e) => log::warn!("Failed to serialize settings: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facecheck_core::presentation::locale::Locale;

    #[test]
    fn test_save_then_load_keeps_client_fields_flat() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut settings = Settings::default();
        settings.client.endpoint = "http://192.168.0.10/face-mobile".into();
        settings.client.locale = Locale::Japanese;
        settings.camera_permission = CameraPermission::Granted;
        settings.font_scale = 1.25;

        settings.save_to(&path);

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["endpoint"], "http://192.168.0.10/face-mobile");
        assert_eq!(json["locale"], "ja");
        assert_eq!(json["camera_permission"], "granted");

        let loaded = Settings::load_from(&path);
        assert_eq!(loaded.client, settings.client);
        assert_eq!(loaded.camera_permission, CameraPermission::Granted);
        assert_eq!(loaded.font_scale, 1.25);
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "[1, 2").unwrap();

        let loaded = Settings::load_from(&path);
        assert_eq!(loaded.client, ClientConfig::default());
        assert_eq!(loaded.camera_permission, CameraPermission::NotAsked);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"appearance": "dark", "timeout_secs": 20}"#).unwrap();

        let loaded = Settings::load_from(&path);
        assert_eq!(loaded.appearance, Appearance::Dark);
        assert_eq!(loaded.client.timeout_secs, Some(20));
        assert_eq!(loaded.client.endpoint, ClientConfig::default().endpoint);
    }

    #[test]
    fn test_permission_maps_to_status() {
        assert_eq!(
            PermissionStatus::from(CameraPermission::NotAsked),
            PermissionStatus::NotDetermined
        );
        assert_eq!(
            PermissionStatus::from(CameraPermission::Granted),
            PermissionStatus::Granted
        );
    }
}
