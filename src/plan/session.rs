//! Session state: the confirmed configuration plus the live weekly plan.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::{generate, render, PlanError, PlanTable, Weekday, WeeklyPlan};

/// Spacing between slots. The planner supports exactly two grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Granularity {
    TenMinutes,
    #[default]
    ThirtyMinutes,
}

impl Granularity {
    pub const ALL: [Granularity; 2] = [Granularity::TenMinutes, Granularity::ThirtyMinutes];

    pub fn minutes(self) -> u32 {
        match self {
            Granularity::TenMinutes => 10,
            Granularity::ThirtyMinutes => 30,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Granularity::TenMinutes => "10 min",
            Granularity::ThirtyMinutes => "30 min",
        }
    }
}

/// The confirmed planner settings. Immutable once the user confirms;
/// changing any of them means a fresh [`WeeklyPlan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    pub username: String,
    pub granularity: Granularity,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// Owns everything a planning session mutates: the confirmed config, the
/// weekly plan built from it, and the currently viewed day. One of these
/// lives at the top of the app; every operation borrows it.
#[derive(Debug, Clone, Default)]
pub struct PlannerSession {
    config: Option<PlannerConfig>,
    plan: Option<WeeklyPlan>,
    selected_day: Option<Weekday>,
}

impl PlannerSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_some()
    }

    pub fn config(&self) -> Option<&PlannerConfig> {
        self.config.as_ref()
    }

    pub fn plan(&self) -> Option<&WeeklyPlan> {
        self.plan.as_ref()
    }

    pub fn selected_day(&self) -> Weekday {
        self.selected_day.unwrap_or(Weekday::Monday)
    }

    /// Confirm the window and granularity. Any existing plan is discarded
    /// and a fresh empty grid is built; assignments do not carry over.
    pub fn configure(
        &mut self,
        username: &str,
        granularity: Granularity,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Result<(), PlanError> {
        let slots = generate(start, end, granularity.minutes())?;
        self.config = Some(PlannerConfig {
            username: username.to_string(),
            granularity,
            start,
            end,
        });
        self.plan = Some(WeeklyPlan::new(slots));
        Ok(())
    }

    /// Place a task; see [`WeeklyPlan::assign`] for the span semantics.
    pub fn assign(
        &mut self,
        day: &str,
        start_slot: &str,
        end_slot: &str,
        label: &str,
        color: &str,
    ) -> Result<(), PlanError> {
        let plan = self
            .plan
            .as_mut()
            .ok_or_else(|| PlanError::SlotNotFound(start_slot.to_string()))?;
        plan.assign(day, start_slot, end_slot, label, color)
    }

    /// Change which day the grid view highlights. View state only, the
    /// plan itself is untouched.
    pub fn select_day(&mut self, day: &str) -> Result<(), PlanError> {
        self.selected_day = Some(Weekday::parse(day)?);
        Ok(())
    }

    /// Current display matrices, empty if nothing is configured yet.
    pub fn table(&self) -> PlanTable {
        match &self.plan {
            Some(plan) => render(plan),
            None => PlanTable {
                labels: vec![Vec::new(); 7],
                colors: vec![Vec::new(); 7],
            },
        }
    }
}
