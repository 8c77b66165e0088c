use thiserror::Error;

/// Errors from the planner model. All of these are recoverable: the UI
/// catches them and re-prompts instead of crashing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// End before start, or a zero/negative step.
    #[error("invalid time range: {0}")]
    InvalidRange(String),

    /// Day key outside the fixed seven weekdays.
    #[error("unknown day: {0}")]
    UnknownDay(String),

    /// Slot not in the current grid, usually a stale reference kept
    /// across a reconfiguration.
    #[error("time slot not in the current grid: {0}")]
    SlotNotFound(String),
}
