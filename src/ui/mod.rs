mod app;
mod theme;
mod views;

pub use app::PlannerApp;
pub use theme::{setup_fonts, setup_theme};
