//! Flattens a [`WeeklyPlan`] into the display matrices the grid view draws.

use super::{Weekday, WeeklyPlan};

/// Renderable form of a week: two parallel matrices indexed `[day][slot]`
/// in fixed weekday order and shared slot order. `labels` holds the cell
/// text, `colors` the "#RRGGBB" background (empty string = no override).
/// Same shape by construction, so consumers can zip them cell by cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanTable {
    pub labels: Vec<Vec<String>>,
    pub colors: Vec<Vec<String>>,
}

/// Re-derive the display matrices from the current plan. Pure; nothing
/// is cached between calls.
pub fn render(plan: &WeeklyPlan) -> PlanTable {
    let mut labels = Vec::with_capacity(Weekday::ALL.len());
    let mut colors = Vec::with_capacity(Weekday::ALL.len());

    for wd in Weekday::ALL {
        let day = plan.day(wd);
        let mut day_labels = Vec::with_capacity(day.len());
        let mut day_colors = Vec::with_capacity(day.len());
        for pos in 0..day.len() {
            let cell = day.cell_at(pos);
            day_labels.push(cell.label.clone());
            day_colors.push(cell.color.clone());
        }
        labels.push(day_labels);
        colors.push(day_colors);
    }

    PlanTable { labels, colors }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::generate;
    use chrono::NaiveTime;

    fn week() -> WeeklyPlan {
        let slots = generate(
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            30,
        )
        .unwrap();
        WeeklyPlan::new(slots)
    }

    #[test]
    fn matrices_share_shape_and_order() {
        let mut plan = week();
        plan.assign("금요일", "09:00", "10:00", "Review", "#ABCDEF")
            .unwrap();

        let table = render(&plan);
        assert_eq!(table.labels.len(), 7);
        assert_eq!(table.colors.len(), 7);
        for (day_labels, day_colors) in table.labels.iter().zip(&table.colors) {
            assert_eq!(day_labels.len(), 3);
            assert_eq!(day_colors.len(), 3);
        }

        let friday = Weekday::Friday.index();
        assert_eq!(table.labels[friday], vec!["", "Review", ""]);
        assert_eq!(table.colors[friday], vec!["#ABCDEF"; 3]);
    }

    #[test]
    fn empty_plan_renders_empty_strings() {
        let table = render(&week());
        for day in &table.labels {
            assert!(day.iter().all(String::is_empty));
        }
        for day in &table.colors {
            assert!(day.iter().all(String::is_empty));
        }
    }

    #[test]
    fn render_is_deterministic() {
        let mut plan = week();
        plan.assign("월요일", "09:30", "10:00", "Standup", "#FF0000")
            .unwrap();
        assert_eq!(render(&plan), render(&plan));
    }
}
