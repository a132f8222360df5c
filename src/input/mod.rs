//! Caller-side analog processing
//!
//! Deadzone and axis handling for raw stick readings before they reach
//! [`crate::skill::classify`].

pub mod analog;
pub mod normalize;

pub use analog::{apply_inversion, process_stick};
