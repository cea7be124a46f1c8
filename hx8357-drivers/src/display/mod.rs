//! Display controller implementations

pub mod hx8357b;
pub mod init;

pub use hx8357b::{Error, Hx8357b};
pub use init::{InitStep, HX8357B_INIT};
