use crate::domain::model::{Volume, VolumeChange};
use crate::domain::ports::CastClient;
use crate::utils::error::{CastError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Up,
    Down,
}

/// New level after one step, clamped to what the receiver accepts.
pub fn stepped_level(current: f32, step: f32, direction: StepDirection) -> f32 {
    let level = match direction {
        StepDirection::Up => current + step,
        StepDirection::Down => current - step,
    };
    level.clamp(0.0, 1.0)
}

/// Read the current level, move it by `step` and unmute.
pub fn step_volume<C: CastClient>(
    client: &C,
    step: f32,
    direction: StepDirection,
) -> Result<Volume> {
    let status = client.receiver_status()?;
    let current = status
        .volume
        .level
        .ok_or_else(|| CastError::Device("Receiver did not report a volume level".to_string()))?;

    let level = stepped_level(current, step, direction);
    tracing::debug!(current, level, ?direction, "Stepping volume");
    client.set_volume(VolumeChange::level(level))
}
