//! Stick normalization ahead of classification
//!
//! Uses a radial (circular) deadzone rather than a per-axis (square) one, so
//! a diagonal deflection is judged by its real distance from center and
//! small diagonal drift does not leak through as a flick.

/// Below this magnitude a vector is treated as centered
const CENTER_EPSILON: f32 = 0.0001;

/// Apply a radial deadzone with radial rescaling
///
/// Maps magnitude `[deadzone, 1.0]` onto `[0.0, 1.0]` and keeps the
/// direction. Magnitudes above 1.0 are clamped.
///
/// # Returns
/// `None` while the stick is inside the deadzone, otherwise the rescaled
/// `(x, y)`.
///
/// # Example
/// ```
/// use skill_input::input::normalize::radial_deadzone;
///
/// assert_eq!(radial_deadzone(0.1, 0.1, 0.2), None);
///
/// let (x, y) = radial_deadzone(1.0, 0.0, 0.2).unwrap();
/// assert!((x - 1.0).abs() < 1e-6 && y == 0.0);
/// ```
pub fn radial_deadzone(x: f32, y: f32, deadzone: f32) -> Option<(f32, f32)> {
    let magnitude = (x * x + y * y).sqrt();

    if !magnitude.is_finite() || magnitude <= deadzone || magnitude < CENTER_EPSILON {
        return None;
    }

    if deadzone >= 1.0 {
        return None;
    }

    let rescaled = ((magnitude - deadzone) / (1.0 - deadzone)).min(1.0);
    let scale = rescaled / magnitude;

    Some((x * scale, y * scale))
}

/// Map square-gated input onto the unit circle
///
/// Some pads report each axis independently in [-1, 1], so full diagonals
/// reach (1, 1). This scales by `max(|x|, |y|) / magnitude`, which puts the
/// square's edge on the circle's edge without changing direction.
pub fn square_to_circle(x: f32, y: f32) -> (f32, f32) {
    let magnitude = (x * x + y * y).sqrt();

    if magnitude < CENTER_EPSILON {
        return (0.0, 0.0);
    }

    let scale = x.abs().max(y.abs()) / magnitude;

    (x * scale, y * scale)
}
