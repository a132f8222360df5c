//! Replay script format
//!
//! ```yaml
//! events:
//!   - { type: tap, button: buttonSouth }
//!   - { type: hold, button: leftTrigger }
//!   - { type: stick, side: right, x: 1.0, y: 0.0 }
//!   - { type: stick, side: left, x: 0.0, y: -1.0, held: true }
//!   - { type: release, side: right }
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use tokio::fs;

use super::error::ScriptError;
use crate::skill::StickSide;

/// A list of controller events, replayed in order
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

/// One controller event
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ScriptEvent {
    /// Button pressed and released
    Tap { button: String },
    /// Button held past the hold threshold
    Hold { button: String },
    /// Raw stick reading
    Stick {
        side: StickSide,
        x: f32,
        y: f32,
        #[serde(default)]
        held: bool,
    },
    /// Stick let go; forgets its flick history
    Release { side: StickSide },
}

impl Script {
    /// Load and validate a script file
    pub async fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read script file: {}", path))?;

        Self::from_yaml(&contents).with_context(|| format!("Invalid script file: {}", path))
    }

    /// Parse and validate a script from a YAML string
    pub fn from_yaml(contents: &str) -> Result<Self> {
        let script: Script = serde_yaml::from_str(contents).context("Failed to parse YAML script")?;
        script.validate()?;
        Ok(script)
    }

    /// Check every event before anything is replayed
    pub fn validate(&self) -> Result<(), ScriptError> {
        for (index, event) in self.events.iter().enumerate() {
            match event {
                ScriptEvent::Tap { button } | ScriptEvent::Hold { button } => {
                    if button.is_empty() {
                        return Err(ScriptError::EmptyButton { index });
                    }
                }
                ScriptEvent::Stick { x, y, .. } => {
                    if !x.is_finite() {
                        return Err(ScriptError::NonFiniteAxis { index, axis: "x", value: *x });
                    }
                    if !y.is_finite() {
                        return Err(ScriptError::NonFiniteAxis { index, axis: "y", value: *y });
                    }
                }
                ScriptEvent::Release { .. } => {}
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_event_kinds() {
        let script = Script::from_yaml(
            r#"
events:
  - { type: tap, button: buttonSouth }
  - { type: hold, button: leftTrigger }
  - { type: stick, side: right, x: 1.0, y: 0.0 }
  - { type: stick, side: left, x: 0.0, y: -1.0, held: true }
  - { type: release, side: right }
"#,
        )
        .unwrap();

        assert_eq!(
            script.events,
            vec![
                ScriptEvent::Tap { button: "buttonSouth".to_string() },
                ScriptEvent::Hold { button: "leftTrigger".to_string() },
                ScriptEvent::Stick { side: StickSide::Right, x: 1.0, y: 0.0, held: false },
                ScriptEvent::Stick { side: StickSide::Left, x: 0.0, y: -1.0, held: true },
                ScriptEvent::Release { side: StickSide::Right },
            ]
        );
    }

    #[test]
    fn test_unknown_event_type_rejected() {
        assert!(Script::from_yaml("events:\n  - { type: wiggle }\n").is_err());
    }

    #[test]
    fn test_unknown_side_rejected() {
        assert!(Script::from_yaml("events:\n  - { type: release, side: middle }\n").is_err());
    }

    #[test]
    fn test_empty_button_rejected() {
        let script = Script {
            events: vec![
                ScriptEvent::Tap { button: "buttonSouth".to_string() },
                ScriptEvent::Hold { button: String::new() },
            ],
        };
        assert_eq!(script.validate(), Err(ScriptError::EmptyButton { index: 1 }));
    }

    #[test]
    fn test_non_finite_axis_rejected() {
        let script = Script {
            events: vec![ScriptEvent::Stick {
                side: StickSide::Left,
                x: 0.5,
                y: f32::INFINITY,
                held: false,
            }],
        };
        let err = script.validate().unwrap_err();
        assert!(matches!(err, ScriptError::NonFiniteAxis { index: 0, axis: "y", .. }));
        assert_eq!(err.to_string(), "event 0: stick y value inf is not finite");
    }

    #[tokio::test]
    async fn test_load_from_file() -> Result<()> {
        let temp_dir = tempfile::TempDir::new()?;
        let path = temp_dir.path().join("combo.yaml");
        std::fs::write(&path, "events:\n  - { type: tap, button: buttonNorth }\n")?;

        let script = Script::load(&path.to_string_lossy()).await?;
        assert_eq!(script.events.len(), 1);

        Ok(())
    }
}
