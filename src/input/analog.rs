//! Analog stick pre-filter (inversion, square-to-circle, deadzone)
//!
//! The classifier treats every vector it sees as a committed direction, so
//! this is where resting and drifting sticks get dropped.

use tracing::trace;

use crate::config::AnalogConfig;
use crate::skill::{StickSide, StickVector};

use super::normalize::{radial_deadzone, square_to_circle};

/// Apply axis inversion if configured
///
/// # Arguments
/// * `value` - Axis value
/// * `axis_id` - Axis identifier ("lx", "ly", "rx", "ry")
/// * `config` - Analog configuration with invert map
pub fn apply_inversion(value: f32, axis_id: &str, config: &AnalogConfig) -> f32 {
    if config.invert.get(axis_id).copied().unwrap_or(false) {
        -value
    } else {
        value
    }
}

/// Run a raw stick reading through the pre-filter
///
/// # Returns
/// The vector to classify, or `None` if the stick is inside the deadzone
pub fn process_stick(side: StickSide, x: f32, y: f32, config: &AnalogConfig) -> Option<StickVector> {
    let (x_id, y_id) = side.axis_ids();
    let x = apply_inversion(x, x_id, config);
    let y = apply_inversion(y, y_id, config);

    let (x, y) = if config.square_to_circle {
        square_to_circle(x, y)
    } else {
        (x, y)
    };

    let vector = StickVector::from(radial_deadzone(x, y, config.deadzone)?);
    trace!(
        "{} stick past deadzone: magnitude {:.3} at {:.1}°",
        side,
        vector.magnitude(),
        vector.angle_degrees()
    );
    Some(vector)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn test_config() -> AnalogConfig {
        AnalogConfig {
            deadzone: 0.2,
            square_to_circle: false,
            invert: HashMap::new(),
        }
    }

    #[test]
    fn test_inversion() {
        let mut config = test_config();
        config.invert.insert("ly".to_string(), true);

        assert_eq!(apply_inversion(0.5, "lx", &config), 0.5);
        assert_eq!(apply_inversion(0.5, "ly", &config), -0.5);
        assert_eq!(apply_inversion(-0.5, "ly", &config), 0.5);
        assert_eq!(apply_inversion(0.5, "ry", &config), 0.5);
    }

    #[test]
    fn test_process_stick_filters_deadzone() {
        let config = test_config();
        assert_eq!(process_stick(StickSide::Left, 0.05, 0.1, &config), None);
        assert!(process_stick(StickSide::Left, 0.0, 0.9, &config).is_some());
    }

    #[test]
    fn test_process_stick_rescales_past_deadzone() {
        let config = test_config();
        let v = process_stick(StickSide::Left, 0.6, 0.0, &config).unwrap();
        assert!((v.magnitude() - 0.5).abs() < 1e-6, "magnitude was {}", v.magnitude());
        assert_eq!(v.y, 0.0);
    }

    #[test]
    fn test_process_stick_inverts_per_side() {
        let mut config = test_config();
        config.invert.insert("ry".to_string(), true);

        let left = process_stick(StickSide::Left, 0.0, 1.0, &config).unwrap();
        let right = process_stick(StickSide::Right, 0.0, 1.0, &config).unwrap();
        assert!(left.y > 0.0);
        assert!(right.y < 0.0);
    }

    #[test]
    fn test_process_stick_keeps_direction_with_square_to_circle() {
        let mut config = test_config();
        config.square_to_circle = true;

        let v = process_stick(StickSide::Right, 1.0, 1.0, &config).unwrap();
        assert!((v.x - v.y).abs() < 1e-6);
        assert!(v.magnitude() <= 1.0 + 1e-6);
    }
}
