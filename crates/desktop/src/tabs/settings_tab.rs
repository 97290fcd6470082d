use iced::widget::{button, column, pick_list, row, text, text_input, Column, Space};
use iced::{Color, Element};

use facecheck_core::presentation::locale::Locale;

use crate::app::{scaled, Message};
use crate::settings::{CameraPermission, Settings};

pub struct SettingsForm<'a> {
    pub endpoint: &'a str,
    pub endpoint_error: Option<&'a str>,
    pub timeout: &'a str,
    pub timeout_error: Option<&'a str>,
    pub camera_command: &'a str,
    pub camera_command_error: Option<&'a str>,
}

/// Appends an inline validation message under a field when there is one.
fn with_error<'a>(
    field: Column<'a, Message>,
    error: Option<&str>,
    fs: f32,
) -> Column<'a, Message> {
    match error {
        Some(error) => field.push(Space::new().height(4)).push(
            text(error.to_owned())
                .size(scaled(12.0, fs))
                .color(Color::from_rgb8(0xe5, 0x48, 0x4d)),
        ),
        None => field,
    }
}

pub fn view<'a>(settings: &Settings, form: SettingsForm<'a>) -> Element<'a, Message> {
    let fs = settings.font_scale;

    let endpoint_section = column![
        text("Recognition service").size(scaled(16.0, fs)),
        Space::new().height(8),
        text_input("https://localhost/face-mobile", form.endpoint)
            .on_input(Message::EndpointChanged)
            .on_submit(Message::EndpointSubmitted)
            .size(scaled(13.0, fs)),
    ]
    .spacing(0);
    let endpoint_section = with_error(endpoint_section, form.endpoint_error, fs);

    let timeout_section = with_error(
        column![row![
            text("Timeout (seconds)").size(scaled(13.0, fs)),
            text_input("none", form.timeout)
                .on_input(Message::TimeoutChanged)
                .size(scaled(13.0, fs))
                .width(80),
        ]
        .spacing(12)
        .align_y(iced::Alignment::Center)],
        form.timeout_error,
        fs,
    );

    let camera_section = with_error(
        column![text_input("ffmpeg ... {output}", form.camera_command)
            .on_input(Message::CameraCommandChanged)
            .size(scaled(13.0, fs))],
        form.camera_command_error,
        fs,
    );

    let permission_row: Element<'a, Message> = if settings.camera_permission
        == CameraPermission::NotAsked
    {
        text(settings.camera_permission.to_string())
            .size(scaled(13.0, fs))
            .into()
    } else {
        row![
            text(settings.camera_permission.to_string()).size(scaled(13.0, fs)),
            button(text("Ask Again").size(scaled(12.0, fs)))
                .on_press(Message::ResetCameraPermission)
                .style(button::secondary),
        ]
        .spacing(12)
        .align_y(iced::Alignment::Center)
        .into()
    };

    column![
        endpoint_section,
        Space::new().height(12),
        timeout_section,
        Space::new().height(20),
        text("Language").size(scaled(16.0, fs)),
        Space::new().height(8),
        pick_list(Locale::ALL, Some(settings.client.locale), Message::LocaleChanged)
            .text_size(scaled(13.0, fs)),
        Space::new().height(20),
        text("Camera").size(scaled(16.0, fs)),
        Space::new().height(8),
        camera_section,
        Space::new().height(4),
        text("{output} is replaced with the file the photo is written to. Quote arguments that contain spaces.")
            .size(scaled(11.0, fs)),
        Space::new().height(12),
        row![text("Permission").size(scaled(13.0, fs)), permission_row]
            .spacing(12)
            .align_y(iced::Alignment::Center),
    ]
    .spacing(0)
    .into()
}
