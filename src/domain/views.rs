//! Derived views over a traversal
//!
//! Both views take the ascending sequence produced by
//! [`CourseIndex::traverse`](crate::domain::CourseIndex::traverse) and never
//! walk the tree themselves.

use std::cmp::Reverse;

use crate::domain::course::Course;

/// Case folding shared by both sides of a substring comparison.
pub fn fold_case(s: &str) -> String {
    s.to_lowercase()
}

/// Keep courses whose id or name contains `needle`, ignoring case.
///
/// Input order is preserved. An empty needle keeps everything.
pub fn filter_by_substring<'a>(view: &[&'a Course], needle: &str) -> Vec<&'a Course> {
    let needle = fold_case(needle);
    view.iter()
        .copied()
        .filter(|c| fold_case(c.id()).contains(&needle) || fold_case(c.name()).contains(&needle))
        .collect()
}

/// Order by prerequisite count, descending.
///
/// Stable: courses with equal counts keep their relative input order.
pub fn sort_by_prerequisite_count<'a>(view: &[&'a Course]) -> Vec<&'a Course> {
    let mut sorted = view.to_vec();
    sorted.sort_by_key(|c| Reverse(c.prerequisite_count()));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: &str, name: &str, prereqs: &[&str]) -> Course {
        Course::new(id, name, prereqs.iter().map(|p| p.to_string()).collect()).unwrap()
    }

    #[test]
    fn given_mixed_case_needle_when_filtering_then_matches_name() {
        let calc = course("MATH201", "Calc II", &[]);
        let view = vec![&calc];
        assert_eq!(filter_by_substring(&view, "cALc"), vec![&calc]);
        assert!(filter_by_substring(&view, "physics").is_empty());
    }

    #[test]
    fn given_needle_in_identifier_when_filtering_then_matches() {
        let cs = course("CSCI100", "Intro", &[]);
        let math = course("MATH201", "Calc II", &[]);
        let view = vec![&cs, &math];
        assert_eq!(filter_by_substring(&view, "csci"), vec![&cs]);
    }

    #[test]
    fn given_empty_needle_when_filtering_then_keeps_all() {
        let a = course("A", "x", &[]);
        let b = course("B", "y", &[]);
        let view = vec![&a, &b];
        assert_eq!(filter_by_substring(&view, ""), view);
    }

    #[test]
    fn given_equal_counts_when_sorting_then_keeps_input_order() {
        let a = course("A", "a", &["X"]);
        let b = course("B", "b", &[]);
        let c = course("C", "c", &["X"]);
        let d = course("D", "d", &["X", "Y"]);
        let view = vec![&a, &b, &c, &d];

        let sorted = sort_by_prerequisite_count(&view);
        let ids: Vec<_> = sorted.iter().map(|c| c.id()).collect();
        assert_eq!(ids, ["D", "A", "C", "B"]);
    }
}
