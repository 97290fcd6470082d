use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, TryRecvError};
use iced::widget::{button, column, container, image, row, scrollable, text};
use iced::{Element, Length, Subscription, Task, Theme};

use facecheck_core::acquisition::domain::camera::Camera;
use facecheck_core::acquisition::infrastructure::command_camera::CommandCamera;
use facecheck_core::acquisition::infrastructure::selected_file_picker::SelectedFilePicker;
use facecheck_core::encoding::infrastructure::jpeg_encoder::JpegImageEncoder;
use facecheck_core::pipeline::acquire_from_gallery_use_case::AcquireFromGalleryUseCase;
use facecheck_core::pipeline::infrastructure::threaded_submitter::ThreadedSubmitter;
use facecheck_core::pipeline::submit_image_use_case::{SubmissionOutcome, SubmitImageUseCase};
use facecheck_core::presentation::locale::Locale;
use facecheck_core::presentation::notice::Notice;
use facecheck_core::presentation::result_presenter::ResultPresenter;
use facecheck_core::recognition::domain::endpoint::Endpoint;
use facecheck_core::recognition::infrastructure::http_recognition_client::HttpRecognitionClient;
use facecheck_core::session::recognition_session::RecognitionSession;
use facecheck_core::shared::acquired_image::AcquiredImage;
use facecheck_core::shared::client_config::{format_camera_command, parse_camera_command};
use facecheck_core::shared::constants::IMAGE_EXTENSIONS;

use crate::settings::{Appearance, CameraPermission, Settings};
use crate::tabs;
use crate::tabs::main_tab::MainView;
use crate::tabs::settings_tab::SettingsForm;
use crate::theme;
use crate::workers::camera_worker::{self, CameraResult};

const NOTICE_DURATION: Duration = Duration::from_millis(3500);
const POLL_INTERVAL: Duration = Duration::from_millis(100);

// ---------------------------------------------------------------------------
// Tab enum
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Main,
    Settings,
    Appearance,
}

impl Tab {
    const ALL: &[Tab] = &[Tab::Main, Tab::Settings, Tab::Appearance];

    fn label(self) -> &'static str {
        match self {
            Tab::Main => "Identify",
            Tab::Settings => "Settings",
            Tab::Appearance => "Appearance",
        }
    }
}

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(Tab),
    TakePhoto,
    CameraPermissionAnswered(bool),
    ChoosePhoto,
    PhotoChosen(Option<PathBuf>),
    Identify,
    Tick,
    DismissNotice,
    EndpointChanged(String),
    EndpointSubmitted,
    TimeoutChanged(String),
    LocaleChanged(Locale),
    CameraCommandChanged(String),
    ResetCameraPermission,
    AppearanceChanged(Appearance),
    HighContrastChanged(bool),
    FontScaleChanged(f32),
    PollSystemTheme,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    active_tab: Tab,
    pub settings: Settings,
    session: RecognitionSession,
    submitter: Option<ThreadedSubmitter>,
    pending_submission: Option<Receiver<SubmissionOutcome>>,
    pending_capture: Option<Receiver<CameraResult>>,
    preview: Option<image::Handle>,
    notice: Option<(Notice, Instant)>,
    endpoint_input: String,
    endpoint_error: Option<String>,
    timeout_input: String,
    timeout_error: Option<String>,
    camera_command_input: String,
    camera_command_error: Option<String>,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        (Self::with_settings(Settings::load()), Task::none())
    }

    fn with_settings(settings: Settings) -> Self {
        Self {
            active_tab: Tab::Main,
            endpoint_input: settings.client.endpoint.clone(),
            endpoint_error: None,
            timeout_input: settings
                .client
                .timeout_secs
                .map(|t| t.to_string())
                .unwrap_or_default(),
            timeout_error: None,
            camera_command_input: format_camera_command(&settings.client.camera_command),
            camera_command_error: None,
            settings,
            session: RecognitionSession::new(),
            submitter: None,
            pending_submission: None,
            pending_capture: None,
            preview: None,
            notice: None,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TabSelected(tab) => {
                self.active_tab = tab;
            }
            Message::TakePhoto => {
                if self.pending_capture.is_some() {
                    return Task::none();
                }
                let camera = CommandCamera::new(self.settings.client.camera_command.clone());
                if !camera.is_available() {
                    log::info!("No camera available; ignoring Take Photo");
                    return Task::none();
                }
                if self.settings.camera_permission == CameraPermission::Granted {
                    self.start_capture();
                } else {
                    return Task::perform(ask_camera_permission(), Message::CameraPermissionAnswered);
                }
            }
            Message::CameraPermissionAnswered(granted) => {
                self.settings.camera_permission = if granted {
                    CameraPermission::Granted
                } else {
                    CameraPermission::Denied
                };
                self.settings.save();
                if granted {
                    self.start_capture();
                } else {
                    log::info!("Camera permission denied");
                }
            }
            Message::ChoosePhoto => {
                return Task::perform(
                    async {
                        rfd::AsyncFileDialog::new()
                            .set_title("Choose a photo")
                            .add_filter("Images", IMAGE_EXTENSIONS)
                            .pick_file()
                            .await
                            .map(|h| h.path().to_path_buf())
                    },
                    Message::PhotoChosen,
                );
            }
            Message::PhotoChosen(path) => {
                let mut use_case =
                    AcquireFromGalleryUseCase::new(Box::new(SelectedFilePicker::new(path)));
                self.handle_acquisition(use_case.execute());
            }
            Message::Identify => self.identify(),
            Message::Tick => {
                self.poll_workers();
                if self
                    .notice
                    .as_ref()
                    .is_some_and(|(_, expires)| Instant::now() >= *expires)
                {
                    self.notice = None;
                }
            }
            Message::DismissNotice => {
                self.notice = None;
            }
            Message::EndpointChanged(value) => {
                self.endpoint_input = value;
                self.endpoint_error = None;
            }
            Message::EndpointSubmitted => match Endpoint::parse(&self.endpoint_input) {
                Ok(endpoint) => {
                    self.settings.client.endpoint = endpoint.to_string();
                    self.endpoint_input = endpoint.to_string();
                    self.submitter = None;
                    self.settings.save();
                }
                Err(e) => {
                    self.endpoint_error = Some(e.to_string());
                }
            },
            Message::TimeoutChanged(value) => {
                match parse_timeout(&value) {
                    Ok(timeout) => {
                        self.settings.client.timeout_secs = timeout;
                        self.timeout_error = None;
                        self.submitter = None;
                        self.settings.save();
                    }
                    Err(e) => {
                        self.timeout_error = Some(e);
                    }
                }
                self.timeout_input = value;
            }
            Message::LocaleChanged(locale) => {
                self.settings.client.locale = locale;
                self.settings.save();
            }
            Message::CameraCommandChanged(value) => {
                match parse_camera_command(&value) {
                    Ok(argv) => {
                        self.settings.client.camera_command = argv;
                        self.camera_command_error = None;
                        self.settings.save();
                    }
                    Err(e) => {
                        self.camera_command_error = Some(e.to_string());
                    }
                }
                self.camera_command_input = value;
            }
            Message::ResetCameraPermission => {
                self.settings.camera_permission = CameraPermission::NotAsked;
                self.settings.save();
            }
            Message::AppearanceChanged(appearance) => {
                self.settings.appearance = appearance;
                self.settings.save();
            }
            Message::HighContrastChanged(enabled) => {
                self.settings.high_contrast = enabled;
                self.settings.save();
            }
            Message::FontScaleChanged(scale) => {
                self.settings.font_scale = scale;
                self.settings.save();
            }
            Message::PollSystemTheme => {
                // Theme is resolved fresh in theme() on every render,
                // so just requesting a redraw is enough.
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let fs = self.settings.font_scale;

        let tab_bar = row(Tab::ALL
            .iter()
            .map(|&tab| {
                let label = text(tab.label()).size(scaled(13.0, fs));
                let btn = button(label)
                    .on_press(Message::TabSelected(tab))
                    .padding([6, 14]);
                if tab == self.active_tab {
                    btn.style(button::primary).into()
                } else {
                    btn.style(button::text).into()
                }
            })
            .collect::<Vec<_>>())
        .spacing(2);

        let content: Element<'_, Message> = match self.active_tab {
            Tab::Main => tabs::main_tab::view(
                fs,
                MainView {
                    state: self.session.state(),
                    preview: self.preview.as_ref(),
                    prompt: self.presenter().locale().messages().select_image,
                    notice: self.notice.as_ref().map(|(notice, _)| notice),
                    camera_busy: self.pending_capture.is_some(),
                },
                &self.theme(),
            ),
            Tab::Settings => tabs::settings_tab::view(
                &self.settings,
                SettingsForm {
                    endpoint: &self.endpoint_input,
                    endpoint_error: self.endpoint_error.as_deref(),
                    timeout: &self.timeout_input,
                    timeout_error: self.timeout_error.as_deref(),
                    camera_command: &self.camera_command_input,
                    camera_command_error: self.camera_command_error.as_deref(),
                },
            ),
            Tab::Appearance => tabs::appearance_tab::view(&self.settings),
        };

        let tab_content = container(scrollable(content).height(Length::Fill))
            .padding(16)
            .height(Length::Fill);

        column![tab_bar, tab_content]
            .spacing(0)
            .height(Length::Fill)
            .into()
    }

    pub fn theme(&self) -> Theme {
        theme::resolve_theme(self.settings.appearance, self.settings.high_contrast)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = Vec::new();
        if self.pending_submission.is_some()
            || self.pending_capture.is_some()
            || self.notice.is_some()
        {
            subscriptions.push(iced::time::every(POLL_INTERVAL).map(|_| Message::Tick));
        }
        if self.settings.appearance == Appearance::System {
            subscriptions
                .push(iced::time::every(Duration::from_secs(2)).map(|_| Message::PollSystemTheme));
        }
        Subscription::batch(subscriptions)
    }

    fn presenter(&self) -> ResultPresenter {
        ResultPresenter::new(self.settings.client.locale)
    }

    fn show(&mut self, notice: Notice) {
        log::debug!("Notice: {notice}");
        self.notice = Some((notice, Instant::now() + NOTICE_DURATION));
    }

    fn start_capture(&mut self) {
        self.pending_capture = Some(camera_worker::spawn(
            self.settings.client.camera_command.clone(),
            self.settings.camera_permission.into(),
        ));
    }

    fn handle_acquisition(&mut self, result: CameraResult) {
        match result {
            Ok(outcome) => {
                let handle = outcome.image().map(preview_handle);
                if self.session.apply_acquisition(outcome) {
                    self.preview = handle;
                }
            }
            Err(e) => {
                log::warn!("Could not read picture: {e}");
                self.show(self.presenter().unreadable_picture());
            }
        }
    }

    fn identify(&mut self) {
        let image = match self.session.begin_submission() {
            Ok(image) => image,
            Err(rejection) => {
                self.show(self.presenter().rejection(rejection));
                return;
            }
        };

        match self.submitter() {
            Ok(submitter) => {
                self.pending_submission = Some(submitter.submit(image));
            }
            Err(reason) => {
                log::error!("Cannot reach recognition service: {reason}");
                self.session.finish_submission();
                self.show(self.presenter().present(&SubmissionOutcome::Failed(reason)));
            }
        }
    }

    fn submitter(&mut self) -> Result<ThreadedSubmitter, String> {
        if let Some(submitter) = &self.submitter {
            return Ok(submitter.clone());
        }
        let endpoint = self.settings.client.endpoint().map_err(|e| e.to_string())?;
        let client = HttpRecognitionClient::new(endpoint, self.settings.client.timeout())
            .map_err(|e| e.to_string())?;
        let submitter = ThreadedSubmitter::new(SubmitImageUseCase::new(
            Box::new(JpegImageEncoder::default()),
            Box::new(client),
        ));
        self.submitter = Some(submitter.clone());
        Ok(submitter)
    }

    fn poll_workers(&mut self) {
        if let Some(received) = self.pending_submission.as_ref().map(Receiver::try_recv) {
            match received {
                Ok(outcome) => {
                    self.pending_submission = None;
                    self.session.finish_submission();
                    self.show(self.presenter().present(&outcome));
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    self.pending_submission = None;
                    self.session.finish_submission();
                    let outcome = SubmissionOutcome::Failed("submission worker exited".into());
                    self.show(self.presenter().present(&outcome));
                }
            }
        }

        if let Some(received) = self.pending_capture.as_ref().map(Receiver::try_recv) {
            match received {
                Ok(result) => {
                    self.pending_capture = None;
                    self.handle_acquisition(result);
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    log::warn!("Camera worker exited without a result");
                    self.pending_capture = None;
                }
            }
        }
    }
}

async fn ask_camera_permission() -> bool {
    let answer = rfd::AsyncMessageDialog::new()
        .set_level(rfd::MessageLevel::Info)
        .set_title("Camera access")
        .set_description("Allow FaceCheck to use the camera to take a photo?")
        .set_buttons(rfd::MessageButtons::YesNo)
        .show()
        .await;
    matches!(answer, rfd::MessageDialogResult::Yes)
}

fn preview_handle(image: &AcquiredImage) -> image::Handle {
    image::Handle::from_rgba(image.width(), image.height(), image.to_rgba())
}

/// Empty text clears the timeout.
fn parse_timeout(value: &str) -> Result<Option<u64>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    match value.parse::<u64>() {
        Ok(0) => Err("Timeout must be at least 1 second.".to_string()),
        Ok(secs) => Ok(Some(secs)),
        Err(_) => Err(format!("'{value}' is not a whole number of seconds.")),
    }
}

/// Scale a base font size by the user's font_scale setting.
pub fn scaled(base: f32, font_scale: f32) -> f32 {
    (base * font_scale).round()
}

#[cfg(test)]
mod tests {
    use super::*;
    use facecheck_core::session::recognition_session::ScreenState;

    fn app() -> App {
        let mut settings = Settings::default();
        // Nothing listens on the discard port, so submissions fail fast.
        settings.client.endpoint = "http://127.0.0.1:9/face-mobile".into();
        App::with_settings(settings)
    }

    fn notice_text(app: &App) -> Option<&str> {
        app.notice.as_ref().map(|(n, _)| n.message.as_str())
    }

    fn write_photo(dir: &std::path::Path) -> PathBuf {
        let path = dir.join("friend.png");
        ::image::RgbImage::from_pixel(40, 30, ::image::Rgb([90, 60, 30]))
            .save(&path)
            .unwrap();
        path
    }

    #[test]
    fn test_identify_without_photo_prompts() {
        let mut app = app();
        let _ = app.update(Message::Identify);
        assert_eq!(
            notice_text(&app),
            Some("Please take or select a picture to identify.")
        );
        assert!(app.pending_submission.is_none());
        assert_eq!(app.session.state(), ScreenState::Idle);
    }

    #[test]
    fn test_cancelled_picker_changes_nothing() {
        let mut app = app();
        let _ = app.update(Message::PhotoChosen(None));
        assert!(app.preview.is_none());
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_unreadable_photo_shows_notice_and_keeps_state() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_photo(dir.path());
        let bad = dir.path().join("broken.jpg");
        std::fs::write(&bad, b"not a picture").unwrap();

        let mut app = app();
        let _ = app.update(Message::PhotoChosen(Some(good)));
        assert_eq!(app.session.state(), ScreenState::ImageAcquired);

        let _ = app.update(Message::PhotoChosen(Some(bad)));
        assert_eq!(notice_text(&app), Some("The picture could not be read."));
        assert_eq!(app.session.image().map(|i| i.width()), Some(40));
        assert!(app.preview.is_some());
    }

    #[test]
    fn test_second_identify_is_refused_while_in_flight() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app();
        let _ = app.update(Message::PhotoChosen(Some(write_photo(dir.path()))));

        let _ = app.update(Message::Identify);
        assert_eq!(app.session.state(), ScreenState::Submitting);
        assert!(app.pending_submission.is_some());

        let _ = app.update(Message::Identify);
        assert_eq!(notice_text(&app), Some("Recognition is already in progress."));
    }

    #[test]
    fn test_failed_submission_reports_once_and_keeps_photo() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app();
        let _ = app.update(Message::PhotoChosen(Some(write_photo(dir.path()))));
        let _ = app.update(Message::Identify);

        let deadline = Instant::now() + Duration::from_secs(10);
        while app.pending_submission.is_some() && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(20));
            app.poll_workers();
        }

        assert_eq!(notice_text(&app), Some("Communication failed."));
        assert_eq!(app.session.state(), ScreenState::ImageAcquired);
    }

    #[test]
    fn test_invalid_endpoint_is_not_applied() {
        let mut app = app();
        let _ = app.update(Message::EndpointChanged("ftp://example.com".into()));
        // EndpointSubmitted would save on success; only the failure path runs here.
        let _ = app.update(Message::EndpointSubmitted);
        assert!(app.endpoint_error.is_some());
        assert_eq!(app.settings.client.endpoint, "http://127.0.0.1:9/face-mobile");
    }

    #[test]
    fn test_parse_timeout() {
        assert_eq!(parse_timeout(""), Ok(None));
        assert_eq!(parse_timeout(" 30 "), Ok(Some(30)));
        assert!(parse_timeout("0").is_err());
        assert!(parse_timeout("3s").is_err());
    }

    #[test]
    fn test_rejected_timeout_shows_error_and_keeps_setting() {
        let mut app = app();
        app.settings.client.timeout_secs = Some(20);

        let _ = app.update(Message::TimeoutChanged("0".into()));
        assert!(app.timeout_error.is_some());
        assert_eq!(app.timeout_input, "0");
        assert_eq!(app.settings.client.timeout_secs, Some(20));

        let _ = app.update(Message::TimeoutChanged("3s".into()));
        assert!(app.timeout_error.is_some());
        assert_eq!(app.settings.client.timeout_secs, Some(20));
    }

    #[test]
    fn test_camera_command_field_keeps_quoted_argument() {
        let mut settings = Settings::default();
        settings.client.camera_command = ["ffmpeg", "-i", "video=Integrated Camera", "{output}"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let app = App::with_settings(settings.clone());

        assert_eq!(
            parse_camera_command(&app.camera_command_input).unwrap(),
            settings.client.camera_command
        );
    }

    #[test]
    fn test_unbalanced_camera_command_is_not_applied() {
        let mut app = app();
        let before = app.settings.client.camera_command.clone();

        let _ = app.update(Message::CameraCommandChanged(r#"snap "{output}"#.into()));
        assert!(app.camera_command_error.is_some());
        assert_eq!(app.camera_command_input, r#"snap "{output}"#);
        assert_eq!(app.settings.client.camera_command, before);
    }
}
