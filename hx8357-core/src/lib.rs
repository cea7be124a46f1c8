//! Board-agnostic drawing core for HX8357 displays
//!
//! This crate contains everything that does not touch the bus:
//!
//! - Colors, points and address windows
//! - Panel constants per orientation and the addressing state machine
//! - The [`Gram`](traits::Gram) trait a controller driver implements
//! - Rasterization (line, rectangle, circle, fill, image) and text blitting
//!   as blanket extension traits over any `Gram`
//! - Glyph table types
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod color;
pub mod config;
pub mod font;
pub mod geometry;
pub mod raster;
pub mod state;
pub mod text;
pub mod traits;

#[cfg(test)]
mod testing;

pub use color::Rgb565;
pub use geometry::{Point, Window};
pub use text::{BlitMode, TextExt, TextStyle};
pub use traits::{Gram, GramExt};
