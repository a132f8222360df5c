//! Coarse stick categories for consumers that branch on symbol kind

use super::symbol::SkillInput;

/// Directional stick symbol category
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum StickCategory {
    LeftFlick,
    RightFlick,
    LeftHeld,
    RightHeld,
}

pub fn is_left_flick(input: Option<SkillInput>) -> bool {
    use SkillInput::*;
    matches!(
        input,
        Some(L3Up | L3Down | L3Left | L3Right | L3UpRight | L3UpLeft | L3DownRight | L3DownLeft)
    )
}

pub fn is_right_flick(input: Option<SkillInput>) -> bool {
    use SkillInput::*;
    matches!(
        input,
        Some(R3Up | R3Down | R3Left | R3Right | R3UpRight | R3UpLeft | R3DownRight | R3DownLeft)
    )
}

pub fn is_left_held(input: Option<SkillInput>) -> bool {
    use SkillInput::*;
    matches!(
        input,
        Some(
            HoldL3Up
                | HoldL3Down
                | HoldL3Left
                | HoldL3Right
                | HoldL3UpRight
                | HoldL3UpLeft
                | HoldL3DownRight
                | HoldL3DownLeft
        )
    )
}

pub fn is_right_held(input: Option<SkillInput>) -> bool {
    use SkillInput::*;
    matches!(
        input,
        Some(
            HoldR3Up
                | HoldR3Down
                | HoldR3Left
                | HoldR3Right
                | HoldR3UpRight
                | HoldR3UpLeft
                | HoldR3DownRight
                | HoldR3DownLeft
        )
    )
}

/// Category of a directional symbol, `None` for everything else
pub fn category(input: Option<SkillInput>) -> Option<StickCategory> {
    if is_left_flick(input) {
        Some(StickCategory::LeftFlick)
    } else if is_right_flick(input) {
        Some(StickCategory::RightFlick)
    } else if is_left_held(input) {
        Some(StickCategory::LeftHeld)
    } else if is_right_held(input) {
        Some(StickCategory::RightHeld)
    } else {
        None
    }
}
