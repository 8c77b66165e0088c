//! Time-slot generation: discretizes a start..end window into "HH:MM" labels.

use chrono::{NaiveTime, Timelike};

use super::PlanError;

/// Generate every time point from `start` to `end` inclusive, spaced by
/// `step_minutes`, as zero-padded 24-hour "HH:MM" strings.
///
/// If the window length is not an exact multiple of the step, the sequence
/// stops at the largest aligned point below `end` (the end itself is
/// dropped). Recomputed on every call, nothing is cached.
pub fn generate(start: NaiveTime, end: NaiveTime, step_minutes: u32) -> Result<Vec<String>, PlanError> {
    if step_minutes == 0 {
        return Err(PlanError::InvalidRange(format!(
            "step must be positive, got {} minutes",
            step_minutes
        )));
    }
    if end < start {
        return Err(PlanError::InvalidRange(format!(
            "end {} is before start {}",
            end.format("%H:%M"),
            start.format("%H:%M")
        )));
    }

    let start_min = start.hour() * 60 + start.minute();
    let end_min = end.hour() * 60 + end.minute();

    let slots = (start_min..=end_min)
        .step_by(step_minutes as usize)
        .map(|m| format!("{:02}:{:02}", m / 60, m % 60))
        .collect();
    Ok(slots)
}
