//! Error types for replay scripts

use thiserror::Error;

/// A script event that cannot be replayed
#[derive(Debug, Error, PartialEq)]
pub enum ScriptError {
    /// Tap or hold event without a button name
    #[error("event {index}: button name is empty")]
    EmptyButton { index: usize },

    /// Stick event with a NaN or infinite component
    #[error("event {index}: stick {axis} value {value} is not finite")]
    NonFiniteAxis {
        index: usize,
        axis: &'static str,
        value: f32,
    },
}
