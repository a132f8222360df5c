//! Skill input vocabulary
//!
//! Every classified controller input is one `SkillInput` value. The set is
//! closed: buttons, button holds, stick presses, eight-way flicks and holds
//! for each stick, and the compound rotation gestures.

use serde::{Serialize, Serializer};
use std::fmt;

/// Which analog stick an event comes from
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StickSide {
    Left,
    Right,
}

impl StickSide {
    /// Control name prefix used by the input layer ("leftStick", "rightStick")
    pub fn control_name(self) -> &'static str {
        match self {
            StickSide::Left => "leftStick",
            StickSide::Right => "rightStick",
        }
    }

    /// Axis ids for the X and Y components ("lx"/"ly", "rx"/"ry")
    pub fn axis_ids(self) -> (&'static str, &'static str) {
        match self {
            StickSide::Left => ("lx", "ly"),
            StickSide::Right => ("rx", "ry"),
        }
    }
}

impl fmt::Display for StickSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.control_name())
    }
}

/// Eight-way stick direction
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpRight,
    UpLeft,
    DownRight,
    DownLeft,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpRight,
        Direction::UpLeft,
        Direction::DownRight,
        Direction::DownLeft,
    ];
}

macro_rules! skill_inputs {
    ($($(#[$meta:meta])* $variant:ident => $name:literal,)+) => {
        /// A classified skill input
        ///
        /// Serializes as its canonical name (see [`SkillInput::as_str`]).
        #[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
        pub enum SkillInput {
            $($(#[$meta])* $variant,)+
        }

        impl SkillInput {
            /// Every symbol of the vocabulary, in declaration order
            pub const ALL: &'static [SkillInput] = &[$(SkillInput::$variant,)+];

            /// Canonical name, as used in combo definitions
            pub fn as_str(self) -> &'static str {
                match self {
                    $(SkillInput::$variant => $name,)+
                }
            }
        }
    };
}

skill_inputs! {
    // Face and shoulder taps
    ButtonX => "Button_X",
    ButtonCircle => "Button_Circle",
    ButtonSquare => "Button_Square",
    ButtonTriangle => "Button_Triangle",
    L1 => "L1",
    R1 => "R1",

    // Stick presses
    L3 => "L3",
    R3 => "R3",
    /// Never produced by the hold table; stick presses only tap.
    L3Hold => "L3_Hold",
    /// Never produced by the hold table; stick presses only tap.
    R3Hold => "R3_Hold",

    // Holds
    HoldButtonX => "Hold_Button_X",
    HoldButtonCircle => "Hold_Button_Circle",
    HoldButtonSquare => "Hold_Button_Square",
    HoldButtonTriangle => "Hold_Button_Triangle",
    L1Hold => "L1_Hold",
    R1Hold => "R1_Hold",
    L2Hold => "L2_Hold",
    R2Hold => "R2_Hold",

    /// No sector matched the stick angle
    FlickNone => "Flick_None",

    // Left stick flicks
    L3Up => "L3_Up",
    L3Down => "L3_Down",
    L3Left => "L3_Left",
    L3Right => "L3_Right",
    L3UpRight => "L3_UpRight",
    L3UpLeft => "L3_UpLeft",
    L3DownRight => "L3_DownRight",
    L3DownLeft => "L3_DownLeft",

    // Right stick flicks
    R3Up => "R3_Up",
    R3Down => "R3_Down",
    R3Left => "R3_Left",
    R3Right => "R3_Right",
    R3UpRight => "R3_UpRight",
    R3UpLeft => "R3_UpLeft",
    R3DownRight => "R3_DownRight",
    R3DownLeft => "R3_DownLeft",

    // Left stick held
    HoldL3Up => "Hold_L3_Up",
    HoldL3Down => "Hold_L3_Down",
    HoldL3Left => "Hold_L3_Left",
    HoldL3Right => "Hold_L3_Right",
    HoldL3UpRight => "Hold_L3_UpRight",
    HoldL3UpLeft => "Hold_L3_UpLeft",
    HoldL3DownRight => "Hold_L3_DownRight",
    HoldL3DownLeft => "Hold_L3_DownLeft",

    // Right stick held
    HoldR3Up => "Hold_R3_Up",
    HoldR3Down => "Hold_R3_Down",
    HoldR3Left => "Hold_R3_Left",
    HoldR3Right => "Hold_R3_Right",
    HoldR3UpRight => "Hold_R3_UpRight",
    HoldR3UpLeft => "Hold_R3_UpLeft",
    HoldR3DownRight => "Hold_R3_DownRight",
    HoldR3DownLeft => "Hold_R3_DownLeft",

    // Right stick rotations
    R3RightToUp => "R3_RightToUp",
    R3RightToDown => "R3_RightToDown",
    R3UpToRight => "R3_UpToRight",
    R3UpToLeft => "R3_UpToLeft",
    R3DownToRight => "R3_DownToRight",
    R3DownToLeft => "R3_DownToLeft",
    R3LeftToUp => "R3_LeftToUp",
    R3LeftToDown => "R3_LeftToDown",
    R3LeftToDownToLeft => "R3_LeftToDownToLeft",
    R3LeftToUpToLeft => "R3_LeftToUpToLeft",

    // Left stick rotations
    L3RightToUp => "L3_RightToUp",
    L3RightToDown => "L3_RightToDown",
    L3UpToRight => "L3_UpToRight",
    L3UpToLeft => "L3_UpToLeft",
    L3DownToRight => "L3_DownToRight",
    L3DownToLeft => "L3_DownToLeft",
    L3LeftToUp => "L3_LeftToUp",
    L3LeftToDown => "L3_LeftToDown",
    L3LeftToDownToLeft => "L3_LeftToDownToLeft",
    L3LeftToUpToLeft => "L3_LeftToUpToLeft",
    L3DownToRightToDown => "L3_DownToRightToDown",
    L3RightToDownToRight => "L3_RightToDownToRight",
}

impl SkillInput {
    /// Flick or held symbol for a stick direction
    pub fn directional(side: StickSide, direction: Direction, held: bool) -> SkillInput {
        use Direction as D;
        use SkillInput as S;

        match (side, held, direction) {
            (StickSide::Left, false, D::Up) => S::L3Up,
            (StickSide::Left, false, D::Down) => S::L3Down,
            (StickSide::Left, false, D::Left) => S::L3Left,
            (StickSide::Left, false, D::Right) => S::L3Right,
            (StickSide::Left, false, D::UpRight) => S::L3UpRight,
            (StickSide::Left, false, D::UpLeft) => S::L3UpLeft,
            (StickSide::Left, false, D::DownRight) => S::L3DownRight,
            (StickSide::Left, false, D::DownLeft) => S::L3DownLeft,

            (StickSide::Right, false, D::Up) => S::R3Up,
            (StickSide::Right, false, D::Down) => S::R3Down,
            (StickSide::Right, false, D::Left) => S::R3Left,
            (StickSide::Right, false, D::Right) => S::R3Right,
            (StickSide::Right, false, D::UpRight) => S::R3UpRight,
            (StickSide::Right, false, D::UpLeft) => S::R3UpLeft,
            (StickSide::Right, false, D::DownRight) => S::R3DownRight,
            (StickSide::Right, false, D::DownLeft) => S::R3DownLeft,

            (StickSide::Left, true, D::Up) => S::HoldL3Up,
            (StickSide::Left, true, D::Down) => S::HoldL3Down,
            (StickSide::Left, true, D::Left) => S::HoldL3Left,
            (StickSide::Left, true, D::Right) => S::HoldL3Right,
            (StickSide::Left, true, D::UpRight) => S::HoldL3UpRight,
            (StickSide::Left, true, D::UpLeft) => S::HoldL3UpLeft,
            (StickSide::Left, true, D::DownRight) => S::HoldL3DownRight,
            (StickSide::Left, true, D::DownLeft) => S::HoldL3DownLeft,

            (StickSide::Right, true, D::Up) => S::HoldR3Up,
            (StickSide::Right, true, D::Down) => S::HoldR3Down,
            (StickSide::Right, true, D::Left) => S::HoldR3Left,
            (StickSide::Right, true, D::Right) => S::HoldR3Right,
            (StickSide::Right, true, D::UpRight) => S::HoldR3UpRight,
            (StickSide::Right, true, D::UpLeft) => S::HoldR3UpLeft,
            (StickSide::Right, true, D::DownRight) => S::HoldR3DownRight,
            (StickSide::Right, true, D::DownLeft) => S::HoldR3DownLeft,
        }
    }

    /// Flick symbol for a stick direction
    pub fn flick(side: StickSide, direction: Direction) -> SkillInput {
        Self::directional(side, direction, false)
    }

    /// Held symbol for a stick direction
    pub fn held(side: StickSide, direction: Direction) -> SkillInput {
        Self::directional(side, direction, true)
    }
}

impl fmt::Display for SkillInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SkillInput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_canonical_names_are_unique() {
        let names: HashSet<&str> = SkillInput::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(names.len(), SkillInput::ALL.len());
    }

    #[test]
    fn test_directional_table_is_injective() {
        let mut seen = HashSet::new();
        for side in [StickSide::Left, StickSide::Right] {
            for held in [false, true] {
                for dir in Direction::ALL {
                    assert!(seen.insert(SkillInput::directional(side, dir, held)));
                }
            }
        }
        assert_eq!(seen.len(), 32);
        assert!(!seen.contains(&SkillInput::FlickNone));
    }

    #[test]
    fn test_flick_and_held_helpers() {
        assert_eq!(SkillInput::flick(StickSide::Left, Direction::UpRight), SkillInput::L3UpRight);
        assert_eq!(SkillInput::held(StickSide::Right, Direction::Down), SkillInput::HoldR3Down);
    }

    #[test]
    fn test_display_and_serialize_use_canonical_name() {
        assert_eq!(SkillInput::HoldL3DownLeft.to_string(), "Hold_L3_DownLeft");
        assert_eq!(
            serde_json::to_string(&SkillInput::R3LeftToUpToLeft).unwrap(),
            "\"R3_LeftToUpToLeft\""
        );
    }

    #[test]
    fn test_stick_side_names() {
        assert_eq!(StickSide::Left.control_name(), "leftStick");
        assert_eq!(StickSide::Right.to_string(), "rightStick");
        assert_eq!(StickSide::Right.axis_ids(), ("rx", "ry"));
    }
}
