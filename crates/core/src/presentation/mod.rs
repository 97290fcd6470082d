pub mod locale;
pub mod notice;
pub mod result_presenter;
