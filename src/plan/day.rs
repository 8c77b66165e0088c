//! Per-day slot storage: one (label, color) cell for every slot in the grid.

use super::PlanError;

/// Contents of one (day, slot) coordinate. Empty strings mean "unset":
/// a cell with both fields empty renders as a blank, uncolored slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    pub label: String,
    pub color: String,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        self.label.is_empty() && self.color.is_empty()
    }
}

/// One day's plan: a fixed-size mapping from slot label to [`Cell`],
/// covering the full configured window. Replaced wholesale when the
/// window or granularity changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayPlan {
    slots: Vec<String>,
    cells: Vec<Cell>,
}

impl DayPlan {
    /// Build an empty plan over the given slot index.
    pub fn new(slots: &[String]) -> Self {
        Self {
            slots: slots.to_vec(),
            cells: vec![Cell::default(); slots.len()],
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Position of a slot label within the configured index.
    pub fn position(&self, slot: &str) -> Option<usize> {
        self.slots.iter().position(|s| s == slot)
    }

    pub fn get(&self, slot: &str) -> Result<&Cell, PlanError> {
        let pos = self
            .position(slot)
            .ok_or_else(|| PlanError::SlotNotFound(slot.to_string()))?;
        Ok(&self.cells[pos])
    }

    /// Overwrite the cell at `slot` unconditionally. Last write wins,
    /// nothing is merged with a previous occupant.
    pub fn set(&mut self, slot: &str, label: &str, color: &str) -> Result<(), PlanError> {
        let pos = self
            .position(slot)
            .ok_or_else(|| PlanError::SlotNotFound(slot.to_string()))?;
        self.cells[pos] = Cell {
            label: label.to_string(),
            color: color.to_string(),
        };
        Ok(())
    }

    /// Reset the cell at `slot` back to empty.
    pub fn clear(&mut self, slot: &str) -> Result<(), PlanError> {
        let pos = self
            .position(slot)
            .ok_or_else(|| PlanError::SlotNotFound(slot.to_string()))?;
        self.cells[pos] = Cell::default();
        Ok(())
    }

    pub(crate) fn cell_at(&self, pos: usize) -> &Cell {
        &self.cells[pos]
    }

    pub(crate) fn set_at(&mut self, pos: usize, label: String, color: String) {
        self.cells[pos] = Cell { label, color };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots() -> Vec<String> {
        ["06:00", "06:10", "06:20"].map(String::from).to_vec()
    }

    #[test]
    fn starts_fully_empty() {
        let plan = DayPlan::new(&slots());
        assert_eq!(plan.len(), 3);
        for slot in slots() {
            assert!(plan.get(&slot).unwrap().is_empty());
        }
    }

    #[test]
    fn set_overwrites_unconditionally() {
        let mut plan = DayPlan::new(&slots());
        plan.set("06:10", "Gym", "#00FF00").unwrap();
        plan.set("06:10", "Run", "#FF0000").unwrap();
        let cell = plan.get("06:10").unwrap();
        assert_eq!(cell.label, "Run");
        assert_eq!(cell.color, "#FF0000");
    }

    #[test]
    fn clear_resets_to_empty() {
        let mut plan = DayPlan::new(&slots());
        plan.set("06:00", "Gym", "#00FF00").unwrap();
        plan.clear("06:00").unwrap();
        assert!(plan.get("06:00").unwrap().is_empty());
    }

    #[test]
    fn stale_slot_is_rejected() {
        let mut plan = DayPlan::new(&slots());
        assert_eq!(
            plan.get("07:00").unwrap_err(),
            PlanError::SlotNotFound("07:00".to_string())
        );
        assert!(plan.set("07:00", "Gym", "#00FF00").is_err());
        assert!(plan.clear("07:00").is_err());
    }
}
