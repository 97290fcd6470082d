use crate::pipeline::submit_image_use_case::SubmissionOutcome;
use crate::recognition::domain::recognition_result::RecognitionResult;
use crate::session::recognition_session::SubmitRejection;

use super::locale::{Locale, Messages};
use super::notice::{Notice, NoticeKind};

/// Turns submission outcomes into the fixed user-facing messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultPresenter {
    locale: Locale,
}

impl ResultPresenter {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    fn messages(&self) -> &'static Messages {
        self.locale.messages()
    }

    pub fn present(&self, outcome: &SubmissionOutcome) -> Notice {
        let m = self.messages();
        match outcome {
            SubmissionOutcome::Failed(_) => Notice::new(NoticeKind::Error, m.communication_failed),
            SubmissionOutcome::Recognized(RecognitionResult::Unknown) => {
                Notice::new(NoticeKind::Info, m.not_detected)
            }
            SubmissionOutcome::Recognized(RecognitionResult::Identified(name)) => Notice::new(
                NoticeKind::Success,
                format!("{name}{}", m.identified_suffix),
            ),
        }
    }

    pub fn rejection(&self, rejection: SubmitRejection) -> Notice {
        let m = self.messages();
        match rejection {
            SubmitRejection::NoImage => Notice::new(NoticeKind::Info, m.select_image),
            SubmitRejection::AlreadySubmitting => {
                Notice::new(NoticeKind::Info, m.already_submitting)
            }
        }
    }

    pub fn unreadable_picture(&self) -> Notice {
        Notice::new(NoticeKind::Error, self.messages().unreadable_picture)
    }
}
