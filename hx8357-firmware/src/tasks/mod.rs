//! Embassy async tasks

pub mod status;

pub use status::status_task;
