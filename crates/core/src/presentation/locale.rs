use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Language used for every user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ja")]
    Japanese,
}

impl Locale {
    pub const ALL: &[Locale] = &[Locale::English, Locale::Japanese];

    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::English => &ENGLISH,
            Locale::Japanese => &JAPANESE,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::English => write!(f, "English"),
            Locale::Japanese => write!(f, "日本語"),
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::English),
            "ja" | "japanese" => Ok(Locale::Japanese),
            other => Err(format!("unknown locale '{other}', expected 'en' or 'ja'")),
        }
    }
}

/// Fixed message table for one locale.
#[derive(Debug)]
pub struct Messages {
    pub select_image: &'static str,
    pub communication_failed: &'static str,
    pub not_detected: &'static str,
    /// Appended directly to the recognized name.
    pub identified_suffix: &'static str,
    pub already_submitting: &'static str,
    pub unreadable_picture: &'static str,
}

static ENGLISH: Messages = Messages {
    select_image: "Please take or select a picture to identify.",
    communication_failed: "Communication failed.",
    not_detected: "Could not be detected.",
    identified_suffix: "-san was identified.",
    already_submitting: "Recognition is already in progress.",
    unreadable_picture: "The picture could not be read.",
};

static JAPANESE: Messages = Messages {
    select_image: "カメラを起動して判定する画像を選択してください",
    communication_failed: "通信に失敗しました。",
    not_detected: "検出できませんでした。",
    identified_suffix: "さんと判定されました。",
    already_submitting: "判定中です。しばらくお待ちください。",
    unreadable_picture: "画像を読み込めませんでした。",
};
