//! Button name to skill input mapping
//!
//! Button names are the control names reported by the input layer, based on
//! physical position rather than printed label:
//!
//! ```text
//!        [buttonNorth]            Triangle
//!   [buttonWest] [buttonEast]     Square  Circle
//!        [buttonSouth]            X
//! ```
//!
//! Taps and holds are two independent tables. A button may appear in both
//! with different symbols; stick presses only tap, triggers only hold.

use super::symbol::SkillInput;

/// Map a button name to its tap symbol
///
/// Returns `None` for unknown names. Matching is exact and case-sensitive.
pub fn map_tap(button_name: &str) -> Option<SkillInput> {
    match button_name {
        // Face buttons
        "buttonSouth" => Some(SkillInput::ButtonX),
        "buttonEast" => Some(SkillInput::ButtonCircle),
        "buttonWest" => Some(SkillInput::ButtonSquare),
        "buttonNorth" => Some(SkillInput::ButtonTriangle),

        // Shoulder buttons
        "leftShoulder" => Some(SkillInput::L1),
        "rightShoulder" => Some(SkillInput::R1),

        // Stick clicks
        "leftStickPress" => Some(SkillInput::L3),
        "rightStickPress" => Some(SkillInput::R3),

        _ => None,
    }
}

/// Map a button name to its hold symbol
///
/// Triggers only exist in this table. Stick presses have no hold symbol.
pub fn map_hold(button_name: &str) -> Option<SkillInput> {
    match button_name {
        "buttonSouth" => Some(SkillInput::HoldButtonX),
        "buttonEast" => Some(SkillInput::HoldButtonCircle),
        "buttonWest" => Some(SkillInput::HoldButtonSquare),
        "buttonNorth" => Some(SkillInput::HoldButtonTriangle),

        "leftShoulder" => Some(SkillInput::L1Hold),
        "rightShoulder" => Some(SkillInput::R1Hold),

        // Analog triggers
        "leftTrigger" => Some(SkillInput::L2Hold),
        "rightTrigger" => Some(SkillInput::R2Hold),

        _ => None,
    }
}
