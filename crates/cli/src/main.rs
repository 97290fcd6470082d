use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use facecheck_core::acquisition::domain::acquisition_outcome::{
    AcquisitionError, AcquisitionOutcome,
};
use facecheck_core::acquisition::domain::permission_gate::PermissionStatus;
use facecheck_core::acquisition::infrastructure::command_camera::CommandCamera;
use facecheck_core::acquisition::infrastructure::prompt_permission_gate::PromptPermissionGate;
use facecheck_core::acquisition::infrastructure::selected_file_picker::SelectedFilePicker;
use facecheck_core::encoding::infrastructure::jpeg_encoder::JpegImageEncoder;
use facecheck_core::pipeline::acquire_from_gallery_use_case::AcquireFromGalleryUseCase;
use facecheck_core::pipeline::capture_from_camera_use_case::CaptureFromCameraUseCase;
use facecheck_core::pipeline::submit_image_use_case::SubmitImageUseCase;
use facecheck_core::presentation::locale::Locale;
use facecheck_core::presentation::notice::NoticeKind;
use facecheck_core::presentation::result_presenter::ResultPresenter;
use facecheck_core::recognition::infrastructure::http_recognition_client::HttpRecognitionClient;
use facecheck_core::session::recognition_session::RecognitionSession;
use facecheck_core::shared::client_config::{parse_camera_command, ClientConfig};
use facecheck_core::shared::constants::IMAGE_EXTENSIONS;

/// Identify the person in a photo with a remote face-recognition service.
#[derive(Parser)]
#[command(name = "facecheck")]
struct Cli {
    /// Recognition endpoint URL (overrides the config file).
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Request timeout in seconds (default: no explicit timeout).
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Message language: en or ja.
    #[arg(long, global = true)]
    locale: Option<Locale>,

    /// Config file to read instead of the default location.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Identify the face in an existing picture.
    Identify {
        /// Picture to upload (jpg, png, bmp, gif, tiff, webp).
        image: PathBuf,
    },

    /// Take a photo with the camera and identify it.
    Capture {
        /// Skip the camera permission prompt.
        #[arg(long)]
        allow_camera: bool,

        /// Capture command, with {output} where the photo should be written.
        #[arg(long)]
        camera_command: Option<String>,
    },

    /// Print the effective configuration as JSON.
    Config,
}

fn main() {
    env_logger::init();

    match run() {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

/// Returns whether the run ended without a user-visible error.
fn run() -> Result<bool, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    let acquired = match cli.command {
        Command::Config => {
            println!("{}", config.to_json_pretty()?);
            return Ok(true);
        }
        Command::Identify { image } => acquire_from_file(image),
        Command::Capture { allow_camera, .. } => capture_from_camera(allow_camera, &config),
    };

    let presenter = ResultPresenter::new(config.locale);
    let outcome = match acquired {
        Ok(outcome) => outcome,
        Err(e) => {
            log::debug!("Acquisition failed: {e}");
            eprintln!("{}", presenter.unreadable_picture());
            return Ok(false);
        }
    };

    let mut session = RecognitionSession::new();
    if !session.apply_acquisition(outcome) {
        // Cancelled, denied, or no camera: nothing to submit, nothing to say.
        return Ok(true);
    }

    let image = match session.begin_submission() {
        Ok(image) => image,
        Err(rejection) => {
            println!("{}", presenter.rejection(rejection));
            return Ok(true);
        }
    };

    let client = HttpRecognitionClient::new(config.endpoint()?, config.timeout())?;
    let use_case = SubmitImageUseCase::new(Box::new(JpegImageEncoder::default()), Box::new(client));
    let outcome = use_case.execute(&image);
    session.finish_submission();

    let notice = presenter.present(&outcome);
    if notice.kind == NoticeKind::Error {
        eprintln!("{notice}");
        return Ok(false);
    }
    println!("{notice}");
    Ok(true)
}

fn resolve_config(cli: &Cli) -> Result<ClientConfig, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => ClientConfig::load_from(path)?,
        None => ClientConfig::load(),
    };

    if let Some(endpoint) = &cli.endpoint {
        config.endpoint = endpoint.clone();
    }
    if let Some(timeout) = cli.timeout {
        if timeout == 0 {
            return Err("Timeout must be at least 1 second".into());
        }
        config.timeout_secs = Some(timeout);
    }
    if let Some(locale) = cli.locale {
        config.locale = locale;
    }
    if let Command::Capture {
        camera_command: Some(command),
        ..
    } = &cli.command
    {
        config.camera_command = parse_camera_command(command)?;
    }

    // Reject a bad endpoint before touching the camera.
    config.endpoint()?;
    Ok(config)
}

fn acquire_from_file(image: PathBuf) -> Result<AcquisitionOutcome, AcquisitionError> {
    if !is_image(&image) {
        log::warn!("{} does not look like a picture", image.display());
    }
    AcquireFromGalleryUseCase::new(Box::new(SelectedFilePicker::new(Some(image)))).execute()
}

fn capture_from_camera(
    allow_camera: bool,
    config: &ClientConfig,
) -> Result<AcquisitionOutcome, AcquisitionError> {
    let status = if allow_camera {
        PermissionStatus::Granted
    } else {
        PermissionStatus::NotDetermined
    };
    let camera = CommandCamera::new(config.camera_command.clone());
    let gate = PromptPermissionGate::new(status, ask_camera_permission);
    let outcome = CaptureFromCameraUseCase::new(Box::new(camera), Box::new(gate)).execute()?;
    if outcome == AcquisitionOutcome::CameraUnavailable {
        log::info!(
            "Camera command not found: {}",
            config.camera_command.first().map_or("", String::as_str)
        );
    }
    Ok(outcome)
}

fn ask_camera_permission() -> bool {
    eprint!("Allow facecheck to use the camera? [y/N] ");
    let _ = io::stderr().flush();

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    is_yes(&answer)
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

fn is_image(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
