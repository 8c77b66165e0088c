//! The seven-day plan and the task-assignment logic.

use super::{DayPlan, PlanError};

/// Fixed weekday keys in calendar order. Display labels are the Korean
/// day names the planner has always used; parsing also accepts the
/// English names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Weekday::Monday => "월요일",
            Weekday::Tuesday => "화요일",
            Weekday::Wednesday => "수요일",
            Weekday::Thursday => "목요일",
            Weekday::Friday => "금요일",
            Weekday::Saturday => "토요일",
            Weekday::Sunday => "일요일",
        }
    }

    /// Resolve a day key supplied by the input layer.
    pub fn parse(day: &str) -> Result<Weekday, PlanError> {
        let key = day.trim();
        for wd in Weekday::ALL {
            if key == wd.label() {
                return Ok(wd);
            }
        }
        match key.to_lowercase().as_str() {
            "monday" => Ok(Weekday::Monday),
            "tuesday" => Ok(Weekday::Tuesday),
            "wednesday" => Ok(Weekday::Wednesday),
            "thursday" => Ok(Weekday::Thursday),
            "friday" => Ok(Weekday::Friday),
            "saturday" => Ok(Weekday::Saturday),
            "sunday" => Ok(Weekday::Sunday),
            _ => Err(PlanError::UnknownDay(day.to_string())),
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Seven [`DayPlan`]s sharing one slot index, keyed by weekday in
/// calendar order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyPlan {
    slots: Vec<String>,
    days: [DayPlan; 7],
}

impl WeeklyPlan {
    /// Build an empty week over the given slot index.
    pub fn new(slots: Vec<String>) -> Self {
        let days = std::array::from_fn(|_| DayPlan::new(&slots));
        Self { slots, days }
    }

    /// The shared slot index, in display order.
    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    pub fn day(&self, day: Weekday) -> &DayPlan {
        &self.days[day.index()]
    }

    /// Position of a slot label within the shared index.
    pub fn slot_position(&self, slot: &str) -> Result<usize, PlanError> {
        self.slots
            .iter()
            .position(|s| s == slot)
            .ok_or_else(|| PlanError::SlotNotFound(slot.to_string()))
    }

    /// Place a task on one day across the inclusive slot range
    /// `start_slot..=end_slot`.
    ///
    /// The color fills every slot of the span; the label lands on a single
    /// slot, the floor midpoint of the span (for an even-length span that
    /// is the earlier of the two middle slots). Every other slot in the
    /// span has its label forced to empty, so a multi-slot task reads as
    /// one labeled colored block. Overlap with an earlier task is not an
    /// error: the later assignment wins slot by slot.
    ///
    /// All validation happens before any write, so a failed call leaves
    /// the week untouched.
    pub fn assign(
        &mut self,
        day: &str,
        start_slot: &str,
        end_slot: &str,
        label: &str,
        color: &str,
    ) -> Result<(), PlanError> {
        let weekday = Weekday::parse(day)?;
        let start_pos = self.slot_position(start_slot)?;
        let end_pos = self.slot_position(end_slot)?;
        if end_pos < start_pos {
            return Err(PlanError::InvalidRange(format!(
                "end slot {} is before start slot {}",
                end_slot, start_slot
            )));
        }

        let center_pos = (start_pos + end_pos) / 2;
        let plan = &mut self.days[weekday.index()];
        for pos in start_pos..=end_pos {
            let slot_label = if pos == center_pos { label } else { "" };
            plan.set_at(pos, slot_label.to_string(), color.to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::{generate, Cell};
    use chrono::NaiveTime;

    fn four_slot_plan() -> WeeklyPlan {
        let slots = generate(
            NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(6, 30, 0).unwrap(),
            10,
        )
        .unwrap();
        WeeklyPlan::new(slots)
    }

    #[test]
    fn parses_korean_and_english_day_keys() {
        assert_eq!(Weekday::parse("월요일").unwrap(), Weekday::Monday);
        assert_eq!(Weekday::parse("일요일").unwrap(), Weekday::Sunday);
        assert_eq!(Weekday::parse("Wednesday").unwrap(), Weekday::Wednesday);
        assert_eq!(Weekday::parse("friday").unwrap(), Weekday::Friday);
        assert!(matches!(
            Weekday::parse("someday"),
            Err(PlanError::UnknownDay(_))
        ));
    }

    #[test]
    fn label_lands_on_floor_midpoint_of_even_span() {
        let mut week = four_slot_plan();
        week.assign("월요일", "06:00", "06:30", "Meeting", "#FF0000")
            .unwrap();

        let monday = week.day(Weekday::Monday);
        let labels: Vec<&str> = (0..4).map(|p| monday.cell_at(p).label.as_str()).collect();
        let colors: Vec<&str> = (0..4).map(|p| monday.cell_at(p).color.as_str()).collect();
        // span positions 0..=3, center = (0 + 3) / 2 = 1
        assert_eq!(labels, vec!["", "Meeting", "", ""]);
        assert_eq!(colors, vec!["#FF0000"; 4]);
    }

    #[test]
    fn single_slot_span_carries_its_own_label() {
        let mut week = four_slot_plan();
        week.assign("화요일", "06:10", "06:10", "Coffee", "#FFFF00")
            .unwrap();
        let cell = week.day(Weekday::Tuesday).get("06:10").unwrap();
        assert_eq!(cell.label, "Coffee");
        assert_eq!(cell.color, "#FFFF00");
    }

    #[test]
    fn odd_span_centers_exactly() {
        let mut week = four_slot_plan();
        week.assign("수요일", "06:00", "06:20", "Gym", "#00FF00")
            .unwrap();
        let wednesday = week.day(Weekday::Wednesday);
        assert_eq!(wednesday.get("06:00").unwrap().label, "");
        assert_eq!(wednesday.get("06:10").unwrap().label, "Gym");
        assert_eq!(wednesday.get("06:20").unwrap().label, "");
        assert_eq!(wednesday.get("06:30").unwrap(), &Cell::default());
    }

    #[test]
    fn overlap_overwrites_only_the_overlap() {
        let mut week = four_slot_plan();
        week.assign("월요일", "06:00", "06:20", "First", "#FF0000")
            .unwrap();
        week.assign("월요일", "06:20", "06:30", "Second", "#0000FF")
            .unwrap();

        let monday = week.day(Weekday::Monday);
        // untouched part of the first task
        assert_eq!(monday.get("06:00").unwrap().color, "#FF0000");
        assert_eq!(monday.get("06:10").unwrap().label, "First");
        // overlap slot taken over by the second task (its center)
        assert_eq!(monday.get("06:20").unwrap().color, "#0000FF");
        assert_eq!(monday.get("06:20").unwrap().label, "Second");
        assert_eq!(monday.get("06:30").unwrap().color, "#0000FF");
    }

    #[test]
    fn inverted_range_fails_and_leaves_plan_unchanged() {
        let mut week = four_slot_plan();
        week.assign("월요일", "06:00", "06:10", "Keep", "#FF0000")
            .unwrap();
        let before = week.clone();

        let err = week
            .assign("월요일", "06:30", "06:00", "Late", "#0000FF")
            .unwrap_err();
        assert!(matches!(err, PlanError::InvalidRange(_)));
        assert_eq!(week, before);
    }

    #[test]
    fn unknown_day_fails_and_touches_nothing() {
        let mut week = four_slot_plan();
        let before = week.clone();
        let err = week
            .assign("Funday", "06:00", "06:10", "X", "#FF0000")
            .unwrap_err();
        assert_eq!(err, PlanError::UnknownDay("Funday".to_string()));
        assert_eq!(week, before);
    }

    #[test]
    fn unknown_slot_fails_before_any_write() {
        let mut week = four_slot_plan();
        let before = week.clone();
        let err = week
            .assign("월요일", "06:00", "07:00", "X", "#FF0000")
            .unwrap_err();
        assert_eq!(err, PlanError::SlotNotFound("07:00".to_string()));
        assert_eq!(week, before);
    }

    #[test]
    fn assignment_touches_exactly_one_day() {
        let mut week = four_slot_plan();
        week.assign("목요일", "06:00", "06:30", "Focus", "#ABCDEF")
            .unwrap();
        for wd in Weekday::ALL {
            if wd == Weekday::Thursday {
                continue;
            }
            for slot in week.slots().to_vec() {
                assert!(week.day(wd).get(&slot).unwrap().is_empty());
            }
        }
    }
}
