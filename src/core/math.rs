// Math utilities and helper functions

/// Milliseconds per second, used to convert tick durations for integration
pub const MS_PER_SEC: f32 = 1000.0;

/// Convert a duration in milliseconds to seconds
pub fn ms_to_secs(ms: f32) -> f32 {
    ms / MS_PER_SEC
}

/// Slack allowed when comparing accumulated tick lengths against a duration.
///
/// `1000.0 / 60.0` is not exact in f32, so 27 frames sum to a hair under
/// 450ms. Anything within this margin counts as having reached the boundary.
pub const TIME_EPSILON_MS: f64 = 1e-3;

/// Check if `elapsed_ms` has reached `duration_ms`, within `TIME_EPSILON_MS`
pub fn has_elapsed(elapsed_ms: f64, duration_ms: f64) -> bool {
    elapsed_ms + TIME_EPSILON_MS >= duration_ms
}

/// Apply one step of exponential decay toward zero.
///
/// Values whose magnitude falls below `epsilon` snap to exactly 0.0 so a
/// decaying quantity reaches rest in a finite number of steps.
pub fn decay_toward_rest(value: f32, factor: f32, epsilon: f32) -> f32 {
    let next = value * factor;
    if next.abs() < epsilon {
        0.0
    } else {
        next
    }
}

/// Check if two f32 values are approximately equal
pub fn approx_equal(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}
