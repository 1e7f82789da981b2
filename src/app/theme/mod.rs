//! Application theme: palette constants and style helpers

pub mod colors;
pub mod styles;
