use iced::color;
use iced::theme::Palette;
use iced::{Color, Theme};

use facecheck_core::presentation::notice::NoticeKind;

use crate::settings::Appearance;

/// Resolve the iced Theme from appearance + high_contrast settings.
pub fn resolve_theme(appearance: Appearance, high_contrast: bool) -> Theme {
    let is_dark = match appearance {
        Appearance::Dark => true,
        Appearance::Light => false,
        Appearance::System => detect_system_dark_mode(),
    };
    Theme::custom("FaceCheck", palette(is_dark, high_contrast))
}

/// Secondary text, e.g. hints under the preview.
pub fn muted_color(theme: &Theme) -> Color {
    Color {
        a: 0.6,
        ..theme.palette().text
    }
}

/// Background of the preview frame.
pub fn surface_color(theme: &Theme) -> Color {
    let base = if theme.extended_palette().is_dark {
        Color::WHITE
    } else {
        Color::BLACK
    };
    Color { a: 0.05, ..base }
}

pub fn notice_color(theme: &Theme, kind: NoticeKind) -> Color {
    let palette = theme.palette();
    match kind {
        NoticeKind::Info => palette.primary,
        NoticeKind::Success => palette.success,
        NoticeKind::Error => palette.danger,
    }
}

/// Teal accent on slate greys. High contrast keeps the hues and pushes
/// background and text to the extremes.
fn palette(is_dark: bool, high_contrast: bool) -> Palette {
    match (is_dark, high_contrast) {
        (true, false) => Palette {
            background: color!(0x1a, 0x1f, 0x24),
            text: color!(0xd8, 0xde, 0xe4),
            primary: color!(0x2e, 0xb8, 0xa6),
            success: color!(0x4c, 0xc3, 0x7a),
            warning: color!(0xf2, 0xb8, 0x3a),
            danger: color!(0xef, 0x5b, 0x5b),
        },
        (false, false) => Palette {
            background: color!(0xf3, 0xf6, 0xf8),
            text: color!(0x1e, 0x26, 0x2e),
            primary: color!(0x12, 0x8c, 0x7e),
            success: color!(0x2f, 0x9e, 0x5b),
            warning: color!(0xd9, 0x8c, 0x12),
            danger: color!(0xd6, 0x3f, 0x3f),
        },
        (true, true) => Palette {
            background: color!(0x05, 0x07, 0x09),
            text: color!(0xfa, 0xfb, 0xfc),
            primary: color!(0x4d, 0xe0, 0xcc),
            success: color!(0x6b, 0xe3, 0x96),
            warning: color!(0xff, 0xcf, 0x4d),
            danger: color!(0xff, 0x6e, 0x6e),
        },
        (false, true) => Palette {
            background: color!(0xfe, 0xfe, 0xfe),
            text: color!(0x05, 0x07, 0x09),
            primary: color!(0x00, 0x66, 0x5c),
            success: color!(0x1b, 0x6e, 0x3c),
            warning: color!(0x8f, 0x52, 0x00),
            danger: color!(0xb0, 0x1e, 0x1e),
        },
    }
}

#[cfg(target_os = "macos")]
fn detect_system_dark_mode() -> bool {
    // `defaults` exits non-zero when the key is absent, which means light mode.
    std::process::Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .map(|out| out.status.success() && String::from_utf8_lossy(&out.stdout).contains("Dark"))
        .unwrap_or(false)
}

#[cfg(not(target_os = "macos"))]
fn detect_system_dark_mode() -> bool {
    gtk_theme_is_dark(std::env::var("GTK_THEME").ok().as_deref())
}

/// `GTK_THEME` looks like `Adwaita:dark`. Without it there is nothing to go
/// on, so dark is assumed.
#[cfg_attr(target_os = "macos", allow(dead_code))]
fn gtk_theme_is_dark(gtk_theme: Option<&str>) -> bool {
    match gtk_theme {
        Some(name) => {
            let name = name.to_ascii_lowercase();
            name.ends_with(":dark") || name.contains("-dark")
        }
        None => true,
    }
}
