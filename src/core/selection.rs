use crate::domain::model::Doctor;
use crate::utils::error::{AppError, Result};

/// Maximum number of doctors that can be compared at once.
pub const MAX_SELECTED: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
}

/// Ordered selection of at most two doctors, unique by id. The capacity
/// invariant is enforced inside `toggle`; there is no other mutation path.
#[derive(Debug, Default)]
pub struct SelectionSet {
    doctors: Vec<Doctor>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn len(&self) -> usize {
        self.doctors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doctors.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.doctors.iter().any(|d| d.id == id)
    }

    /// Add the doctor if absent and there is room, remove it if present.
    /// Selecting a third distinct doctor is rejected and leaves the set
    /// unchanged.
    pub fn toggle(&mut self, doctor: &Doctor) -> Result<ToggleOutcome> {
        if let Some(pos) = self.doctors.iter().position(|d| d.id == doctor.id) {
            self.doctors.remove(pos);
            return Ok(ToggleOutcome::Removed);
        }

        if self.doctors.len() < MAX_SELECTED {
            self.doctors.push(doctor.clone());
            return Ok(ToggleOutcome::Added);
        }

        Err(AppError::SelectionLimit)
    }

    pub fn clear(&mut self) {
        self.doctors.clear();
    }

    /// Side-by-side comparison, available only when exactly two doctors are
    /// selected.
    pub fn compare(&self) -> Option<Comparison> {
        match self.doctors.as_slice() {
            [first, second] => Some(Comparison::new(first.clone(), second.clone())),
            _ => None,
        }
    }
}

/// Pure comparison of two selected doctors. The strictly higher rating wins;
/// on a tie the first doctor in selection order is recommended.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub first: Doctor,
    pub second: Doctor,
}

impl Comparison {
    pub fn new(first: Doctor, second: Doctor) -> Self {
        Self { first, second }
    }

    pub fn recommended(&self) -> &Doctor {
        if self.second.rating > self.first.rating {
            &self.second
        } else {
            &self.first
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "Based on availability and ratings, {} might be a better choice for your consultation.",
            self.recommended().name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::roster::sample_roster;

    fn doctor(id: usize) -> Doctor {
        sample_roster()[id - 1].clone()
    }

    #[test]
    fn toggle_adds_and_removes() {
        let mut selection = SelectionSet::new();

        assert_eq!(selection.toggle(&doctor(1)).unwrap(), ToggleOutcome::Added);
        assert!(selection.contains("1"));

        assert_eq!(
            selection.toggle(&doctor(1)).unwrap(),
            ToggleOutcome::Removed
        );
        assert!(selection.is_empty());
    }

    #[test]
    fn third_distinct_doctor_is_rejected() {
        let mut selection = SelectionSet::new();
        selection.toggle(&doctor(1)).unwrap();
        selection.toggle(&doctor(2)).unwrap();

        let err = selection.toggle(&doctor(3)).unwrap_err();
        assert!(matches!(err, AppError::SelectionLimit));
        assert_eq!(selection.len(), 2);
        assert!(selection.contains("1") && selection.contains("2"));
    }

    #[test]
    fn toggling_a_selected_doctor_works_when_full() {
        let mut selection = SelectionSet::new();
        selection.toggle(&doctor(1)).unwrap();
        selection.toggle(&doctor(2)).unwrap();

        assert_eq!(
            selection.toggle(&doctor(2)).unwrap(),
            ToggleOutcome::Removed
        );
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn capacity_invariant_holds_for_arbitrary_toggle_sequences() {
        let roster = sample_roster();
        let mut selection = SelectionSet::new();

        for i in [0usize, 1, 2, 3, 1, 4, 5, 0, 2, 2, 3, 5, 1, 4] {
            let _ = selection.toggle(&roster[i]);
            assert!(selection.len() <= MAX_SELECTED);
        }
    }

    #[test]
    fn comparison_requires_exactly_two() {
        let mut selection = SelectionSet::new();
        assert!(selection.compare().is_none());

        selection.toggle(&doctor(1)).unwrap();
        assert!(selection.compare().is_none());

        selection.toggle(&doctor(2)).unwrap();
        assert!(selection.compare().is_some());
    }

    #[test]
    fn higher_rating_wins() {
        // Dr. Asha Rawat 4.8 vs Dr. Manoj Joshi 4.6.
        let comparison = Comparison::new(doctor(2), doctor(1));
        assert_eq!(comparison.recommended().name, "Dr. Asha Rawat");
        assert!(comparison.summary().contains("Dr. Asha Rawat"));
    }

    #[test]
    fn tie_prefers_selection_order() {
        // Dr. Asha Rawat and Dr. Priya Sharma are both rated 4.8.
        let comparison = Comparison::new(doctor(5), doctor(1));
        assert_eq!(comparison.recommended().name, "Dr. Priya Sharma");
    }

    #[test]
    fn clear_empties_the_set() {
        let mut selection = SelectionSet::new();
        selection.toggle(&doctor(1)).unwrap();
        selection.toggle(&doctor(2)).unwrap();
        selection.clear();
        assert!(selection.is_empty());
    }
}
