use serde::{Deserialize, Serialize};

// Common data structures used across all platforms

/// Course identifier as the endpoint sends it. Some backends serve
/// `courseId` as a JSON number, others as a string; both are accepted
/// and treated as opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(untagged)]
pub enum CourseId {
    Num(u64),
    Text(String),
}

impl std::fmt::Display for CourseId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            CourseId::Num(n) => write!(f, "{n}"),
            CourseId::Text(ref s) => write!(f, "{s}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Course {
    #[serde(rename = "courseId")]
    pub id: CourseId,
    #[serde(rename = "courseName")]
    pub name: String,
    pub required: bool,
    #[serde(rename = "credit")]
    pub credits: u32,
}

impl Course {
    /// Display label derived from the `required` flag.
    pub fn course_type(&self) -> &'static str {
        if self.required {
            "Compulsory"
        } else {
            "Elective"
        }
    }
}

/// Session-scoped selection state. Plain accessors only; the credit cap
/// and lock invariants are enforced by the session layer.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    total_credits: u32,
    locked: bool,
    available_courses: Vec<Course>,
    selected_courses: Vec<Course>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_credits(&self) -> u32 {
        self.total_credits
    }

    pub fn set_total_credits(&mut self, credits: u32) {
        self.total_credits = credits;
    }

    pub fn locked(&self) -> bool {
        self.locked
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    pub fn available_courses(&self) -> &[Course] {
        &self.available_courses
    }

    /// Set once after the initial fetch; never touched afterwards.
    pub fn set_available_courses(&mut self, courses: Vec<Course>) {
        self.available_courses = courses;
    }

    pub fn selected_courses(&self) -> &[Course] {
        &self.selected_courses
    }

    /// Assigned exactly once, when the selection is committed.
    pub fn set_selected_courses(&mut self, courses: Vec<Course>) {
        self.selected_courses = courses;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_type_follows_required_flag() {
        let compulsory = Course {
            id: CourseId::Num(1),
            name: "Calculus".to_string(),
            required: true,
            credits: 4,
        };
        let elective = Course {
            required: false,
            ..compulsory.clone()
        };

        assert_eq!(compulsory.course_type(), "Compulsory");
        assert_eq!(elective.course_type(), "Elective");
    }

    #[test]
    fn course_id_displays_both_forms() {
        assert_eq!(CourseId::Num(42).to_string(), "42");
        assert_eq!(CourseId::Text("LA-201".to_string()).to_string(), "LA-201");
    }
}
