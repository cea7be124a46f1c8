//! Display controller drivers
//!
//! This crate provides concrete implementations of the traits defined
//! in hx8357-core:
//!
//! - HX8357B over the 9-bit 3-wire serial interface, emulated on a 16-bit
//!   SPI word stream

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod display;

pub use display::{Error, Hx8357b};
