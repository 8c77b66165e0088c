mod day;
mod error;
mod render;
mod session;
mod time_grid;
mod week;

pub use day::{Cell, DayPlan};
pub use error::PlanError;
pub use render::{render, PlanTable};
pub use session::{Granularity, PlannerConfig, PlannerSession};
pub use time_grid::generate;
pub use week::{Weekday, WeeklyPlan};
