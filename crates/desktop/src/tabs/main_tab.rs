use iced::border::Border;
use iced::widget::{button, column, container, image, row, text, Space};
use iced::{Color, Element, Length, Theme};

use facecheck_core::presentation::notice::Notice;
use facecheck_core::session::recognition_session::ScreenState;

use crate::app::{scaled, Message};
use crate::theme::{muted_color, notice_color, surface_color};

const PREVIEW_HEIGHT: f32 = 260.0;

pub struct MainView<'a> {
    pub state: ScreenState,
    pub preview: Option<&'a image::Handle>,
    pub prompt: &'a str,
    pub notice: Option<&'a Notice>,
    pub camera_busy: bool,
}

pub fn view<'a>(fs: f32, main: MainView<'a>, theme: &Theme) -> Element<'a, Message> {
    let muted = muted_color(theme);
    let surface = surface_color(theme);

    let preview: Element<'a, Message> = match main.preview {
        Some(handle) => image(handle.clone())
            .height(Length::Fill)
            .width(Length::Fill)
            .into(),
        None => text(main.prompt.to_owned())
            .size(scaled(14.0, fs))
            .color(muted)
            .align_x(iced::Alignment::Center)
            .into(),
    };

    let frame = container(preview)
        .width(Length::Fill)
        .height(scaled(PREVIEW_HEIGHT, fs))
        .center_x(Length::Fill)
        .center_y(scaled(PREVIEW_HEIGHT, fs))
        .padding(8)
        .style(move |_: &Theme| container::Style {
            background: Some(iced::Background::Color(surface)),
            border: Border {
                radius: 12.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        });

    let take_photo = button(text("Take Photo").size(scaled(14.0, fs)))
        .padding([12, 20])
        .width(Length::Fill)
        .style(button::secondary);
    let take_photo = if main.camera_busy {
        take_photo
    } else {
        take_photo.on_press(Message::TakePhoto)
    };

    let choose_photo = button(text("Choose Photo").size(scaled(14.0, fs)))
        .on_press(Message::ChoosePhoto)
        .padding([12, 20])
        .width(Length::Fill)
        .style(button::secondary);

    // Identify stays pressable while submitting; the session refuses the
    // second request and a notice explains why.
    let identify_label = match main.state {
        ScreenState::Submitting => "Identifying\u{2026}",
        _ => "Identify",
    };
    let identify = button(text(identify_label).size(scaled(15.0, fs)))
        .on_press(Message::Identify)
        .padding([14, 24])
        .width(Length::Fill);

    let mut col = column![
        frame,
        Space::new().height(16),
        row![take_photo, choose_photo].spacing(10),
        Space::new().height(10),
        identify,
    ]
    .spacing(0);

    if let Some(notice) = main.notice {
        col = col.push(Space::new().height(16)).push(toast(fs, notice, theme));
    }

    col.into()
}

fn toast<'a>(fs: f32, notice: &Notice, theme: &Theme) -> Element<'a, Message> {
    let background = notice_color(theme, notice.kind);

    container(
        row![
            text(notice.message.clone())
                .size(scaled(14.0, fs))
                .color(Color::WHITE)
                .width(Length::Fill),
            button(text("\u{2715}").size(scaled(12.0, fs)).color(Color::WHITE))
                .on_press(Message::DismissNotice)
                .style(button::text),
        ]
        .spacing(8)
        .align_y(iced::Alignment::Center),
    )
    .width(Length::Fill)
    .padding([10, 14])
    .style(move |_: &Theme| container::Style {
        background: Some(iced::Background::Color(background)),
        border: Border {
            radius: 10.0.into(),
            ..Border::default()
        },
        text_color: Some(Color::WHITE),
        ..container::Style::default()
    })
    .into()
}
