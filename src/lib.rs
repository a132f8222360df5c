//! Skill input classification for controller-driven combos
//!
//! [`skill`] is the classifier proper: pure functions from button names and
//! stick vectors to [`skill::SkillInput`] symbols. The other modules make up
//! the scripted replay harness used by the `skill-input` binary.

pub mod config;
pub mod input;
pub mod replay;
pub mod skill;

pub use skill::{SkillInput, StickSide, StickVector};
