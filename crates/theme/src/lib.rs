//! Colour primitives shared by the appearance configuration.

pub mod colors;

pub use colors::{Color, ColorParseError};
