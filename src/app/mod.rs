//! Application module - handles core application logic
//!
//! This module provides the selection workflow shared by all platforms:
//! a session over the fetched course list that tracks toggles under the
//! credit cap and commits them exactly once, with platform-specific
//! frontends for WASM and no-WASM environments.

// Platform-specific modules
#[cfg(feature = "no-wasm")]
pub mod request;
#[cfg(feature = "no-wasm")]
pub use request::*;

#[cfg(feature = "wasm")]
pub mod gloo;
#[cfg(feature = "wasm")]
pub use gloo::*;

use serde_json::Value;

use crate::error::{ErrorKind, Result};
use crate::model::structs::{Course, CourseId, SelectionState};

/// Inclusive credit cap for one semester.
pub const MAX_SEMESTER_CREDITS: u32 = 18;

/// Result of a toggle gesture on the available list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Course is now selected; carries the new credit total.
    Selected(u32),
    /// Course is now deselected; carries the new credit total.
    Deselected(u32),
    /// Selecting would push the total over the cap; nothing changed.
    CapExceeded { credits: u32 },
    /// The id matches no available course; nothing changed.
    Unknown,
    /// The selection is already committed; nothing changed.
    Ignored,
}

/// Result of a submit gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Snapshot committed; carries the number of selected courses.
    Committed(usize),
    /// Confirmation declined; nothing changed.
    Declined,
    /// A selection was already committed this session.
    AlreadyCommitted,
}

/// Parse the course-list response body into course records.
pub fn parse_course_list(value: Value) -> Result<Vec<Course>> {
    if !value.is_array() {
        return Err(ErrorKind::CourseError("Course list response is not an array".to_string()).into());
    }

    Ok(serde_json::from_value(value)?)
}

/// One course-selection session: owns the state store and the toggle
/// tracking, and enforces the credit cap and lock invariants that the
/// store itself does not.
#[derive(Debug, Clone, Default)]
pub struct SelectionSession {
    state: SelectionState,
    // Toggled-but-not-committed course ids, in toggle order. Authoritative
    // at submit time; never re-derived from rendered output.
    picked: Vec<CourseId>,
}

impl SelectionSession {
    pub fn new(courses: Vec<Course>) -> Self {
        let mut state = SelectionState::new();
        state.set_available_courses(courses);

        SelectionSession {
            state,
            picked: Vec::new(),
        }
    }

    pub fn total_credits(&self) -> u32 {
        self.state.total_credits()
    }

    pub fn locked(&self) -> bool {
        self.state.locked()
    }

    pub fn is_picked(&self, id: &CourseId) -> bool {
        self.picked.contains(id)
    }

    pub fn selected_courses(&self) -> &[Course] {
        self.state.selected_courses()
    }

    /// Available list as the user sees it: committed courses drop out.
    /// The underlying store list stays untouched after the fetch.
    pub fn available_view(&self) -> Vec<&Course> {
        let committed = self.state.selected_courses();
        self.state
            .available_courses()
            .iter()
            .filter(|c| !committed.iter().any(|s| s.id == c.id))
            .collect()
    }

    /// Flip a course's selected flag, keeping the running total within the
    /// cap. No-op once the selection is committed.
    pub fn toggle(&mut self, id: &CourseId) -> ToggleOutcome {
        if self.state.locked() {
            return ToggleOutcome::Ignored;
        }

        let credits = match self
            .state
            .available_courses()
            .iter()
            .find(|c| &c.id == id)
        {
            Some(course) => course.credits,
            None => return ToggleOutcome::Unknown,
        };

        if let Some(pos) = self.picked.iter().position(|p| p == id) {
            self.picked.remove(pos);
            let total = self.state.total_credits() - credits;
            self.state.set_total_credits(total);
            ToggleOutcome::Deselected(total)
        } else if self.state.total_credits() + credits > MAX_SEMESTER_CREDITS {
            ToggleOutcome::CapExceeded { credits }
        } else {
            self.picked.push(id.clone());
            let total = self.state.total_credits() + credits;
            self.state.set_total_credits(total);
            ToggleOutcome::Selected(total)
        }
    }

    /// Commit the current toggles. `confirmed` is the answer to the
    /// frontend's confirmation prompt; declining leaves everything as-is.
    /// Committing locks the session for the rest of its lifetime.
    pub fn submit(&mut self, confirmed: bool) -> SubmitOutcome {
        if self.state.locked() {
            return SubmitOutcome::AlreadyCommitted;
        }
        if !confirmed {
            return SubmitOutcome::Declined;
        }

        // Snapshot in display order, not toggle order.
        let snapshot: Vec<Course> = self
            .state
            .available_courses()
            .iter()
            .filter(|c| self.picked.contains(&c.id))
            .cloned()
            .collect();
        let count = snapshot.len();

        self.state.set_selected_courses(snapshot);
        self.state.set_locked(true);

        SubmitOutcome::Committed(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: u64, name: &str, required: bool, credits: u32) -> Course {
        Course {
            id: CourseId::Num(id),
            name: name.to_string(),
            required,
            credits,
        }
    }

    fn sample_courses() -> Vec<Course> {
        vec![course(1, "A", true, 3), course(2, "B", false, 16)]
    }

    #[test]
    fn toggle_updates_running_total() {
        let mut session = SelectionSession::new(sample_courses());

        assert_eq!(session.toggle(&CourseId::Num(1)), ToggleOutcome::Selected(3));
        assert_eq!(session.total_credits(), 3);
        assert!(session.is_picked(&CourseId::Num(1)));
    }

    #[test]
    fn cap_violation_is_rejected_without_side_effects() {
        let mut session = SelectionSession::new(sample_courses());

        session.toggle(&CourseId::Num(1));
        assert_eq!(
            session.toggle(&CourseId::Num(2)),
            ToggleOutcome::CapExceeded { credits: 16 }
        );
        assert_eq!(session.total_credits(), 3);
        assert!(!session.is_picked(&CourseId::Num(2)));
    }

    #[test]
    fn cap_violation_rejected_in_either_order() {
        let mut session = SelectionSession::new(sample_courses());

        assert_eq!(session.toggle(&CourseId::Num(2)), ToggleOutcome::Selected(16));
        assert_eq!(
            session.toggle(&CourseId::Num(1)),
            ToggleOutcome::CapExceeded { credits: 3 }
        );
        assert_eq!(session.total_credits(), 16);
        assert!(!session.is_picked(&CourseId::Num(1)));
    }

    #[test]
    fn landing_exactly_on_the_cap_is_allowed() {
        let mut session = SelectionSession::new(vec![course(7, "Capstone", false, 18)]);

        assert_eq!(session.toggle(&CourseId::Num(7)), ToggleOutcome::Selected(18));
        assert_eq!(session.total_credits(), 18);
    }

    #[test]
    fn deselecting_subtracts_credits() {
        let mut session = SelectionSession::new(sample_courses());

        session.toggle(&CourseId::Num(1));
        assert_eq!(session.toggle(&CourseId::Num(1)), ToggleOutcome::Deselected(0));
        assert_eq!(session.total_credits(), 0);
        assert!(!session.is_picked(&CourseId::Num(1)));
    }

    #[test]
    fn total_always_equals_sum_of_picked_credits() {
        let courses = vec![
            course(1, "A", true, 3),
            course(2, "B", false, 4),
            course(3, "C", false, 5),
            course(4, "D", false, 16),
        ];
        let mut session = SelectionSession::new(courses.clone());

        let gestures = [1u64, 2, 3, 2, 4, 1, 1, 3, 4];
        for id in gestures {
            session.toggle(&CourseId::Num(id));

            let sum: u32 = courses
                .iter()
                .filter(|c| session.is_picked(&c.id))
                .map(|c| c.credits)
                .sum();
            assert_eq!(session.total_credits(), sum);
            assert!(session.total_credits() <= MAX_SEMESTER_CREDITS);
        }
    }

    #[test]
    fn unknown_course_is_a_noop() {
        let mut session = SelectionSession::new(sample_courses());

        assert_eq!(session.toggle(&CourseId::Num(99)), ToggleOutcome::Unknown);
        assert_eq!(
            session.toggle(&CourseId::Text("nope".to_string())),
            ToggleOutcome::Unknown
        );
        assert_eq!(session.total_credits(), 0);
    }

    #[test]
    fn declined_submission_changes_nothing() {
        let mut session = SelectionSession::new(sample_courses());
        session.toggle(&CourseId::Num(1));

        assert_eq!(session.submit(false), SubmitOutcome::Declined);
        assert!(!session.locked());
        assert!(session.selected_courses().is_empty());

        // Still toggleable afterwards.
        assert_eq!(session.toggle(&CourseId::Num(1)), ToggleOutcome::Deselected(0));
    }

    #[test]
    fn confirmed_submission_snapshots_in_display_order() {
        let courses = vec![
            course(1, "A", true, 3),
            course(2, "B", false, 4),
            course(3, "C", false, 5),
        ];
        let mut session = SelectionSession::new(courses);

        // Toggle order deliberately reversed relative to display order.
        session.toggle(&CourseId::Num(3));
        session.toggle(&CourseId::Num(1));

        assert_eq!(session.submit(true), SubmitOutcome::Committed(2));
        assert!(session.locked());

        let selected: Vec<u64> = session
            .selected_courses()
            .iter()
            .map(|c| match c.id {
                CourseId::Num(n) => n,
                CourseId::Text(_) => unreachable!(),
            })
            .collect();
        assert_eq!(selected, vec![1, 3]);

        // Committed courses drop out of the available view.
        let available: Vec<&CourseId> = session.available_view().iter().map(|c| &c.id).collect();
        assert_eq!(available, vec![&CourseId::Num(2)]);
    }

    #[test]
    fn session_is_inert_after_commit() {
        let mut session = SelectionSession::new(sample_courses());
        session.toggle(&CourseId::Num(1));
        session.submit(true);

        let selected_before = session.selected_courses().to_vec();

        assert_eq!(session.toggle(&CourseId::Num(2)), ToggleOutcome::Ignored);
        assert_eq!(session.toggle(&CourseId::Num(1)), ToggleOutcome::Ignored);
        assert_eq!(session.submit(true), SubmitOutcome::AlreadyCommitted);
        assert_eq!(session.submit(false), SubmitOutcome::AlreadyCommitted);

        assert_eq!(session.total_credits(), 3);
        assert_eq!(session.selected_courses(), selected_before.as_slice());
        assert!(session.locked());
    }

    #[test]
    fn empty_selection_can_still_be_committed() {
        let mut session = SelectionSession::new(sample_courses());

        assert_eq!(session.submit(true), SubmitOutcome::Committed(0));
        assert!(session.locked());
        assert!(session.selected_courses().is_empty());
    }

    #[test]
    fn parses_course_ids_as_numbers_or_strings() {
        let body = serde_json::json!([
            {"courseId": 1, "courseName": "Intro to Programming", "required": true, "credit": 3},
            {"courseId": "LA-201", "courseName": "Linear Algebra", "required": false, "credit": 4}
        ]);

        let courses = parse_course_list(body).unwrap();

        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].id, CourseId::Num(1));
        assert_eq!(courses[1].id, CourseId::Text("LA-201".to_string()));
        assert_eq!(courses[1].credits, 4);
    }

    #[test]
    fn rejects_non_array_course_list() {
        let body = serde_json::json!({"courseList": []});

        assert!(parse_course_list(body).is_err());
    }
}
