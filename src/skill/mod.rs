//! Skill input classification
//!
//! Turns controller events into skill input symbols for the combo matcher:
//!
//! - [`map_tap`] / [`map_hold`]: button name to button symbol
//! - [`classify`]: stick vector to an eight-way flick or held symbol
//! - [`match_rotation`]: flick history to a rotation gesture
//! - [`is_left_flick`] and friends: coarse category checks
//!
//! Everything here is a pure function over its arguments. Absence of a
//! symbol is reported as `None` and is an ordinary outcome.

pub mod buttons;
pub mod category;
pub mod direction;
pub mod rotation;
pub mod symbol;

pub use buttons::{map_hold, map_tap};
pub use category::{category, is_left_flick, is_left_held, is_right_flick, is_right_held, StickCategory};
pub use direction::{classify, classify_degrees, StickVector};
pub use rotation::{match_rotation, templates_for, GestureTemplate, MAX_GESTURE_LEN};
pub use symbol::{Direction, SkillInput, StickSide};
