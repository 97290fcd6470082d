pub mod acquisition;
pub mod encoding;
pub mod pipeline;
pub mod presentation;
pub mod recognition;
pub mod session;
pub mod shared;
