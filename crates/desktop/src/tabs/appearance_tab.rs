use iced::widget::{button, checkbox, column, pick_list, row, slider, text, Space};
use iced::{Element, Length};

use crate::app::{scaled, Message};
use crate::settings::{Appearance, Settings};

const FONT_SCALE_RANGE: std::ops::RangeInclusive<f32> = 0.8..=1.5;
const LABEL_WIDTH: f32 = 96.0;

fn labelled_row<'a>(
    label: &'a str,
    control: impl Into<Element<'a, Message>>,
    fs: f32,
) -> Element<'a, Message> {
    row![
        text(label).size(scaled(13.0, fs)).width(Length::Fixed(LABEL_WIDTH)),
        control.into(),
    ]
    .spacing(12)
    .align_y(iced::Alignment::Center)
    .into()
}

pub fn view<'a>(settings: &Settings) -> Element<'a, Message> {
    let fs = settings.font_scale;

    let scale_control = row![
        slider(FONT_SCALE_RANGE, settings.font_scale, Message::FontScaleChanged)
            .step(0.05)
            .width(Length::Fill),
        text(format!("{:.0}%", settings.font_scale * 100.0))
            .size(scaled(13.0, fs))
            .width(48),
    ]
    .spacing(8)
    .align_y(iced::Alignment::Center);

    let mut content = column![
        text("Display").size(scaled(16.0, fs)),
        Space::new().height(8),
        labelled_row(
            "Appearance",
            pick_list(Appearance::ALL, Some(settings.appearance), Message::AppearanceChanged)
                .text_size(scaled(13.0, fs)),
            fs,
        ),
        Space::new().height(8),
        labelled_row(
            "Contrast",
            checkbox(settings.high_contrast)
                .label("Increase contrast")
                .on_toggle(Message::HighContrastChanged)
                .text_size(scaled(13.0, fs)),
            fs,
        ),
        Space::new().height(8),
        labelled_row("Text scale", scale_control, fs),
    ]
    .spacing(0);

    if settings.font_scale != 1.0 {
        content = content.push(
            button(text("Reset to 100%").size(scaled(12.0, fs)))
                .on_press(Message::FontScaleChanged(1.0))
                .style(button::text),
        );
    }

    content.into()
}
