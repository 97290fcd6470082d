pub mod recognition_session;
