//! Stick rotation gestures
//!
//! A rotation is a short, exact sequence of flicks on one stick, such as
//! right then up. The caller keeps the flick history and hands it over
//! whole; there is no subsequence search, so the history has to equal a
//! template in both length and order.
//!
//! The left stick knows two more three-step gestures than the right stick
//! (down→right→down and right→down→right). Right-stick input never matches
//! them.

use tracing::trace;

use super::symbol::{SkillInput, StickSide};

/// A fixed flick sequence and the rotation it produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureTemplate {
    pub steps: &'static [SkillInput],
    pub output: SkillInput,
}

impl GestureTemplate {
    const fn new(steps: &'static [SkillInput], output: SkillInput) -> Self {
        Self { steps, output }
    }

    /// Exact, full-length comparison
    pub fn matches(&self, history: &[SkillInput]) -> bool {
        self.steps == history
    }
}

use SkillInput as S;

/// Right stick templates, in match priority order
pub static RIGHT_STICK_TEMPLATES: [GestureTemplate; 10] = [
    GestureTemplate::new(&[S::R3Right, S::R3Up], S::R3RightToUp),
    GestureTemplate::new(&[S::R3Right, S::R3Down], S::R3RightToDown),
    GestureTemplate::new(&[S::R3Up, S::R3Right], S::R3UpToRight),
    GestureTemplate::new(&[S::R3Up, S::R3Left], S::R3UpToLeft),
    GestureTemplate::new(&[S::R3Down, S::R3Right], S::R3DownToRight),
    GestureTemplate::new(&[S::R3Down, S::R3Left], S::R3DownToLeft),
    GestureTemplate::new(&[S::R3Left, S::R3Up], S::R3LeftToUp),
    GestureTemplate::new(&[S::R3Left, S::R3Down], S::R3LeftToDown),
    GestureTemplate::new(&[S::R3Left, S::R3Down, S::R3Left], S::R3LeftToDownToLeft),
    GestureTemplate::new(&[S::R3Left, S::R3Up, S::R3Left], S::R3LeftToUpToLeft),
];

/// Left stick templates, in match priority order
pub static LEFT_STICK_TEMPLATES: [GestureTemplate; 12] = [
    GestureTemplate::new(&[S::L3Right, S::L3Up], S::L3RightToUp),
    GestureTemplate::new(&[S::L3Right, S::L3Down], S::L3RightToDown),
    GestureTemplate::new(&[S::L3Up, S::L3Right], S::L3UpToRight),
    GestureTemplate::new(&[S::L3Up, S::L3Left], S::L3UpToLeft),
    GestureTemplate::new(&[S::L3Down, S::L3Right], S::L3DownToRight),
    GestureTemplate::new(&[S::L3Down, S::L3Left], S::L3DownToLeft),
    GestureTemplate::new(&[S::L3Left, S::L3Up], S::L3LeftToUp),
    GestureTemplate::new(&[S::L3Left, S::L3Down], S::L3LeftToDown),
    GestureTemplate::new(&[S::L3Left, S::L3Down, S::L3Left], S::L3LeftToDownToLeft),
    GestureTemplate::new(&[S::L3Left, S::L3Up, S::L3Left], S::L3LeftToUpToLeft),
    GestureTemplate::new(&[S::L3Down, S::L3Right, S::L3Down], S::L3DownToRightToDown),
    GestureTemplate::new(&[S::L3Right, S::L3Down, S::L3Right], S::L3RightToDownToRight),
];

/// Longest template, in steps
pub const MAX_GESTURE_LEN: usize = 3;

/// Templates registered for one stick
pub fn templates_for(side: StickSide) -> &'static [GestureTemplate] {
    match side {
        StickSide::Left => &LEFT_STICK_TEMPLATES,
        StickSide::Right => &RIGHT_STICK_TEMPLATES,
    }
}

/// Match a flick history against the rotation templates of a stick
///
/// The stick is picked by substring: a name containing "rightStick" checks
/// the right templates, one containing "leftStick" the left templates (right
/// first if both appear). Returns `None` for any other name, or when no
/// template equals `history` exactly.
pub fn match_rotation(button_name: &str, history: &[SkillInput]) -> Option<SkillInput> {
    let found = [StickSide::Right, StickSide::Left]
        .into_iter()
        .filter(|side| button_name.contains(side.control_name()))
        .find_map(|side| {
            templates_for(side)
                .iter()
                .find(|template| template.matches(history))
                .map(|template| template.output)
        });

    if let Some(rotation) = found {
        trace!("Rotation {} from {} history {:?}", rotation, button_name, history);
    }

    found
}
