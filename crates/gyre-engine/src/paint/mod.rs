//! Colour model shared by vertex data and the clear pass.

pub mod color;

pub use color::Color;
