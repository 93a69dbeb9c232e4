//! Text rendering of course records
//!
//! The index has no formatting responsibility; every user-facing line is
//! produced here.

use crate::domain::Course;

pub const NO_COURSES: &str = "No courses available.";
pub const NO_MATCHES: &str = "No matching courses found.";

/// Normalize a user-supplied identifier the way catalog keys are stored.
pub fn normalize_identifier(input: &str) -> String {
    input.trim().to_uppercase()
}

/// Comma-joined prerequisites, or `None` when there are none.
pub fn prerequisite_list(prerequisites: &[String]) -> String {
    if prerequisites.is_empty() {
        "None".to_string()
    } else {
        prerequisites.join(", ")
    }
}

/// `identifier: name - Prerequisites: <list>`
pub fn format_line(course: &Course) -> String {
    format!(
        "{}: {} - Prerequisites: {}",
        course.id(),
        course.name(),
        prerequisite_list(course.prerequisites())
    )
}

/// Two-line detail view for a single lookup.
pub fn format_detail(course: &Course) -> String {
    format!(
        "{}: {}\nPrerequisites: {}",
        course.id(),
        course.name(),
        prerequisite_list(course.prerequisites())
    )
}

/// One line per course, or `empty` when the view has no courses.
pub fn render_lines(view: &[&Course], empty: &str) -> String {
    if view.is_empty() {
        return empty.to_string();
    }
    view.iter()
        .map(|c| format_line(c))
        .collect::<Vec<_>>()
        .join("\n")
}
