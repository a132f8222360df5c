//! Scripted event replay
//!
//! Plays the part of the input layer in front of the classifier: raw events
//! from a script go through the analog pre-filter, get classified, and the
//! resulting symbols are sent as values to an output sink.
//!
//! Events are processed strictly in order by one task. Classified inputs are
//! passed over a channel to a single writer task, so the classifier never
//! knows who consumes its output.

pub mod error;
pub mod history;
pub mod script;
pub mod sink;

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use tokio::sync::mpsc;
use tracing::{debug, info, trace, warn};

use crate::config::AppConfig;
use crate::input::process_stick;
use crate::skill::{self, SkillInput, StickSide};

pub use error::ScriptError;
pub use history::FlickHistory;
pub use script::{Script, ScriptEvent};
pub use sink::{spawn_sink, OutputFormat};

/// A classified input, tagged with the script event that produced it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedInput {
    /// Index of the source event in the script
    pub index: usize,
    /// Button name or stick control name
    pub source: String,
    pub input: SkillInput,
}

/// Sequential event processor holding the per-stick flick history
pub struct Replayer {
    config: AppConfig,
    history: FlickHistory,
}

impl Replayer {
    pub fn new(config: AppConfig) -> Self {
        let history = FlickHistory::new(config.history.window);
        Self { config, history }
    }

    pub fn history(&self) -> &FlickHistory {
        &self.history
    }

    /// Classify one event
    ///
    /// Returns every symbol the event produced, in emission order. Most
    /// events produce zero or one; a flick that completes a rotation
    /// produces the flick followed by the rotation.
    pub fn process(&mut self, index: usize, event: &ScriptEvent) -> Vec<ClassifiedInput> {
        let mut out = Vec::new();

        match event {
            ScriptEvent::Tap { button } => match skill::map_tap(button) {
                Some(input) => out.push(Self::record(index, button, input)),
                None => debug!("No tap symbol for button '{}'", button),
            },
            ScriptEvent::Hold { button } => match skill::map_hold(button) {
                Some(input) => out.push(Self::record(index, button, input)),
                None => debug!("No hold symbol for button '{}'", button),
            },
            ScriptEvent::Stick { side, x, y, held } => {
                self.handle_stick(index, *side, *x, *y, *held, &mut out);
            }
            ScriptEvent::Release { side } => {
                trace!("Release on {}, clearing {} flicks", side, self.history.len(*side));
                self.history.clear(*side);
            }
        }

        out
    }

    fn handle_stick(
        &mut self,
        index: usize,
        side: StickSide,
        x: f32,
        y: f32,
        held: bool,
        out: &mut Vec<ClassifiedInput>,
    ) {
        let Some(vector) = process_stick(side, x, y, &self.config.analog) else {
            trace!("Stick {} ({}, {}) inside deadzone", side, x, y);
            return;
        };

        let input = skill::classify(vector, side, held);
        if input == SkillInput::FlickNone {
            warn!("Stick {} ({}, {}) matched no sector", side, x, y);
            return;
        }

        if held {
            out.push(Self::record(index, side.control_name(), input));
            return;
        }

        if !self.history.record(side, input) {
            return;
        }
        out.push(Self::record(index, side.control_name(), input));

        // Longest tail first so three-step gestures win over their prefix
        for len in (2..=self.config.history.window).rev() {
            let Some(tail) = self.history.recent(side, len) else {
                continue;
            };
            if let Some(rotation) = skill::match_rotation(side.control_name(), tail) {
                debug!("Rotation {} on {} at event {}", rotation, side, index);
                out.push(Self::record(index, side.control_name(), rotation));
                break;
            }
        }
    }

    fn record(index: usize, source: &str, input: SkillInput) -> ClassifiedInput {
        ClassifiedInput {
            index,
            source: source.to_string(),
            input,
        }
    }
}

/// Replay a whole script into `out`
///
/// # Returns
/// Number of records written, and the writer
pub async fn run<W>(config: AppConfig, script: &Script, format: OutputFormat, out: W) -> Result<(usize, W)>
where
    W: Write + Send + 'static,
{
    info!("Replaying {} events", script.events.len());

    let (tx, rx) = mpsc::unbounded_channel::<ClassifiedInput>();
    let sink = spawn_sink(rx, format, out);

    let mut replayer = Replayer::new(config);
    'events: for (index, event) in script.events.iter().enumerate() {
        for classified in replayer.process(index, event) {
            if let Err(e) = tx.send(classified) {
                warn!("Output sink closed early: {}", e);
                break 'events;
            }
        }
    }

    // Close the channel so the sink drains and exits
    drop(tx);

    let (written, out) = sink
        .await
        .context("Output task failed")?
        .context("Failed to write output")?;

    info!("Replay finished, {} inputs classified", written);

    Ok((written, out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use SkillInput as S;

    fn stick(side: StickSide, x: f32, y: f32) -> ScriptEvent {
        ScriptEvent::Stick { side, x, y, held: false }
    }

    fn inputs(records: Vec<ClassifiedInput>) -> Vec<SkillInput> {
        records.into_iter().map(|r| r.input).collect()
    }

    fn replay(replayer: &mut Replayer, events: &[ScriptEvent]) -> Vec<SkillInput> {
        events
            .iter()
            .enumerate()
            .flat_map(|(i, e)| replayer.process(i, e))
            .map(|r| r.input)
            .collect()
    }

    #[test]
    fn test_buttons() {
        let mut replayer = Replayer::new(AppConfig::default());

        let tap = replayer.process(0, &ScriptEvent::Tap { button: "buttonSouth".to_string() });
        assert_eq!(tap, vec![ClassifiedInput { index: 0, source: "buttonSouth".to_string(), input: S::ButtonX }]);

        let hold = replayer.process(1, &ScriptEvent::Hold { button: "rightTrigger".to_string() });
        assert_eq!(inputs(hold), vec![S::R2Hold]);

        assert!(replayer.process(2, &ScriptEvent::Tap { button: "unknownButton".to_string() }).is_empty());
        assert!(replayer.process(3, &ScriptEvent::Hold { button: "leftStickPress".to_string() }).is_empty());
    }

    #[test]
    fn test_deadzone_events_produce_nothing() {
        let mut replayer = Replayer::new(AppConfig::default());
        assert!(replayer.process(0, &stick(StickSide::Left, 0.1, 0.05)).is_empty());
        assert!(replayer.history().is_empty(StickSide::Left));
    }

    #[test]
    fn test_right_then_up_emits_rotation() {
        let mut replayer = Replayer::new(AppConfig::default());
        let out = replay(
            &mut replayer,
            &[stick(StickSide::Right, 1.0, 0.0), stick(StickSide::Right, 0.0, 1.0)],
        );
        assert_eq!(out, vec![S::R3Right, S::R3Up, S::R3RightToUp]);
    }

    #[test]
    fn test_repeated_flick_recorded_once() {
        let mut replayer = Replayer::new(AppConfig::default());
        let out = replay(
            &mut replayer,
            &[
                stick(StickSide::Left, 0.0, -0.9),
                stick(StickSide::Left, 0.1, -1.0),
                stick(StickSide::Left, 1.0, 0.0),
            ],
        );
        assert_eq!(out, vec![S::L3Down, S::L3Right, S::L3DownToRight]);
    }

    #[test]
    fn test_three_step_gesture_wins_over_two_step() {
        let mut replayer = Replayer::new(AppConfig::default());
        let out = replay(
            &mut replayer,
            &[
                stick(StickSide::Left, -1.0, 0.0),
                stick(StickSide::Left, 0.0, -1.0),
                stick(StickSide::Left, -1.0, 0.0),
            ],
        );
        assert_eq!(
            out,
            vec![S::L3Left, S::L3Down, S::L3LeftToDown, S::L3Left, S::L3LeftToDownToLeft]
        );
    }

    #[test]
    fn test_left_only_gesture_not_on_right_stick() {
        let mut replayer = Replayer::new(AppConfig::default());
        let out = replay(
            &mut replayer,
            &[
                stick(StickSide::Right, 0.0, -1.0),
                stick(StickSide::Right, 1.0, 0.0),
                stick(StickSide::Right, 0.0, -1.0),
            ],
        );
        // D→R→D only exists on the left stick, so the two-step tail R→D wins
        assert_eq!(
            out,
            vec![S::R3Down, S::R3Right, S::R3DownToRight, S::R3Down, S::R3RightToDown]
        );
    }

    #[test]
    fn test_held_bypasses_history() {
        let mut replayer = Replayer::new(AppConfig::default());
        let out = replayer.process(
            0,
            &ScriptEvent::Stick { side: StickSide::Right, x: -0.7, y: 0.7, held: true },
        );
        assert_eq!(inputs(out), vec![S::HoldR3UpLeft]);
        assert!(replayer.history().is_empty(StickSide::Right));
    }

    #[test]
    fn test_release_clears_history() {
        let mut replayer = Replayer::new(AppConfig::default());
        let out = replay(
            &mut replayer,
            &[
                stick(StickSide::Right, 1.0, 0.0),
                ScriptEvent::Release { side: StickSide::Right },
                stick(StickSide::Right, 0.0, 1.0),
            ],
        );
        assert_eq!(out, vec![S::R3Right, S::R3Up]);
    }

    #[test]
    fn test_sticks_keep_separate_histories() {
        let mut replayer = Replayer::new(AppConfig::default());
        let out = replay(
            &mut replayer,
            &[stick(StickSide::Left, 1.0, 0.0), stick(StickSide::Right, 0.0, 1.0)],
        );
        assert_eq!(out, vec![S::L3Right, S::R3Up]);
    }

    #[tokio::test]
    async fn test_run_writes_json_lines() {
        let script = Script {
            events: vec![
                ScriptEvent::Tap { button: "buttonEast".to_string() },
                stick(StickSide::Right, 0.0, 1.0),
                stick(StickSide::Right, -1.0, 0.0),
            ],
        };

        let (written, out) = run(AppConfig::default(), &script, OutputFormat::Json, Vec::new())
            .await
            .unwrap();
        assert_eq!(written, 4);

        let text = String::from_utf8(out).unwrap();
        let names: Vec<String> = text
            .lines()
            .map(|line| {
                let value: serde_json::Value = serde_json::from_str(line).unwrap();
                value["input"].as_str().unwrap().to_string()
            })
            .collect();
        assert_eq!(names, ["Button_Circle", "R3_Up", "R3_Left", "R3_UpToLeft"]);
    }
}
