//! Stick direction classification
//!
//! Maps a stick vector to one of eight 45° sectors by angle alone. Cardinal
//! sectors are 40° wide and diagonal sectors 50° wide:
//!
//! ```text
//!              Up [70, 110)
//!   UpLeft [110, 160)    UpRight (20, 70)
//! Left [160, 200)            Right [0, 20] ∪ (340, 360)
//!   DownLeft [200, 250)  DownRight [290, 340]
//!             Down [250, 290)
//! ```
//!
//! Magnitude is ignored. Callers filter out small deflections (see
//! `crate::input::analog`) before classifying, since any vector that reaches
//! this module counts as a committed direction.

use tracing::trace;

use super::symbol::{Direction, SkillInput, StickSide};

/// Analog stick displacement
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StickVector {
    pub x: f32,
    pub y: f32,
}

impl StickVector {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Angle in degrees, counter-clockwise from +X, in [0, 360)
    ///
    /// NaN if either component is NaN.
    pub fn angle_degrees(&self) -> f32 {
        normalize_degrees(self.y.atan2(self.x).to_degrees())
    }

    /// Euclidean length of the vector
    pub fn magnitude(&self) -> f32 {
        self.x.hypot(self.y)
    }
}

impl From<(f32, f32)> for StickVector {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// Wrap an angle into [0, 360)
///
/// Tiny negative angles can round up to exactly 360 after wrapping; those
/// fold back to 0 so they stay in the Right sector.
pub fn normalize_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

impl Direction {
    /// Sector for an angle in [0, 360)
    ///
    /// A boundary angle belongs to the lower sector: 20 is Right and 340 is
    /// DownRight. Returns `None` outside [0, 360) and for NaN.
    pub fn from_degrees(degrees: f32) -> Option<Direction> {
        if degrees > 20.0 && degrees < 70.0 {
            Some(Direction::UpRight)
        } else if (110.0..160.0).contains(&degrees) {
            Some(Direction::UpLeft)
        } else if (200.0..250.0).contains(&degrees) {
            Some(Direction::DownLeft)
        } else if (290.0..=340.0).contains(&degrees) {
            Some(Direction::DownRight)
        } else if (0.0..=20.0).contains(&degrees) || (degrees > 340.0 && degrees < 360.0) {
            Some(Direction::Right)
        } else if (70.0..110.0).contains(&degrees) {
            Some(Direction::Up)
        } else if (160.0..200.0).contains(&degrees) {
            Some(Direction::Left)
        } else if (250.0..290.0).contains(&degrees) {
            Some(Direction::Down)
        } else {
            None
        }
    }
}

/// Classify a stick vector into a flick or held symbol
///
/// Falls back to [`SkillInput::FlickNone`] when no sector matches, which
/// only happens for non-finite vectors.
pub fn classify(vector: StickVector, side: StickSide, held: bool) -> SkillInput {
    let degrees = vector.angle_degrees();
    let input = classify_degrees(degrees, side, held);
    trace!(
        "Classified {:?} ({:.3}°) on {} held={} -> {}",
        vector, degrees, side, held, input
    );
    input
}

/// Classify a raw angle in degrees; any finite value is wrapped first
pub fn classify_degrees(degrees: f32, side: StickSide, held: bool) -> SkillInput {
    Direction::from_degrees(normalize_degrees(degrees))
        .map(|dir| SkillInput::directional(side, dir, held))
        .unwrap_or(SkillInput::FlickNone)
}
