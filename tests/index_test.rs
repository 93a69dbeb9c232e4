//! Tests for CourseIndex ordering, lookup and derived views

use course_planner::domain::{Course, CourseIndex};
use rstest::rstest;

fn course(id: &str, name: &str, prereqs: &[&str]) -> Course {
    Course::new(id, name, prereqs.iter().map(|p| p.to_string()).collect()).unwrap()
}

fn ids<'a>(view: &[&'a Course]) -> Vec<&'a str> {
    view.iter().map(|c| c.id()).collect()
}

// ============================================================
// Ordering
// ============================================================

#[rstest]
#[case::ascending(&["A", "B", "C", "D", "E"])]
#[case::descending(&["E", "D", "C", "B", "A"])]
#[case::balanced(&["C", "A", "E", "B", "D"])]
#[case::zigzag(&["A", "E", "B", "D", "C"])]
#[case::duplicates(&["B", "A", "B", "C", "A"])]
fn given_any_insert_order_when_traversing_then_ids_are_non_decreasing(#[case] order: &[&str]) {
    let index: CourseIndex = order.iter().map(|id| course(id, "x", &[])).collect();

    let view = index.traverse();
    assert_eq!(view.len(), order.len());
    assert!(view.windows(2).all(|w| w[0].id() <= w[1].id()));
}

#[test]
fn given_two_courses_when_traversing_then_returns_ascending_and_lookup_finds_them() {
    let mut index = CourseIndex::new();
    index.insert(course("CS300", "Emerging Trends", &["CS250", "CS255"]));
    index.insert(course("CS101", "Intro", &[]));

    assert_eq!(ids(&index.traverse()), ["CS101", "CS300"]);

    let found = index.lookup("CS300").expect("CS300 should be present");
    assert_eq!(found.name(), "Emerging Trends");
    assert_eq!(found.prerequisites(), ["CS250", "CS255"]);
    assert!(index.lookup("CS999").is_none());
}

#[test]
fn given_no_intervening_inserts_when_traversing_twice_then_sequences_are_equal() {
    let index: CourseIndex = ["M", "C", "X", "A"]
        .into_iter()
        .map(|id| course(id, "x", &[]))
        .collect();
    assert_eq!(index.traverse(), index.traverse());
}

#[test]
fn given_traversal_taken_when_inserting_later_then_earlier_sequence_is_unchanged() {
    let mut index = CourseIndex::new();
    index.insert(course("B", "b", &[]));
    let before: Vec<Course> = index.traverse().into_iter().cloned().collect();

    index.insert(course("A", "a", &[]));

    assert_eq!(before.len(), 1);
    assert_eq!(index.traverse().len(), 2);
}

// ============================================================
// Duplicates
// ============================================================

#[test]
fn given_duplicate_ids_when_looking_up_then_returns_first_inserted() {
    let mut index = CourseIndex::new();
    index.insert(course("CS200", "First", &[]));
    index.insert(course("CS100", "Other", &[]));
    index.insert(course("CS200", "Second", &[]));

    assert_eq!(index.lookup("CS200").unwrap().name(), "First");

    let names: Vec<_> = index.traverse().iter().map(|c| c.name()).collect();
    assert_eq!(names, ["Other", "First", "Second"]);
}

// ============================================================
// Lookup
// ============================================================

#[rstest]
#[case("CS100", true)]
#[case("CS250", true)]
#[case("CS400", true)]
#[case("CS000", false)]
#[case("CS275", false)]
#[case("CS999", false)]
fn given_populated_index_when_looking_up_then_finds_only_inserted(
    #[case] id: &str,
    #[case] present: bool,
) {
    let index: CourseIndex = ["CS250", "CS100", "CS400", "CS300", "CS200"]
        .into_iter()
        .map(|id| course(id, "x", &[]))
        .collect();

    assert_eq!(index.lookup(id).is_some(), present);
    if let Some(found) = index.lookup(id) {
        assert_eq!(found.id(), id);
    }
}

// ============================================================
// Derived views
// ============================================================

#[test]
fn given_counts_zero_two_one_when_sorting_by_prerequisites_then_descending() {
    let mut index = CourseIndex::new();
    index.insert(course("A", "a", &[]));
    index.insert(course("B", "b", &["X", "Y"]));
    index.insert(course("C", "c", &["X"]));

    assert_eq!(ids(&index.by_prerequisite_count()), ["B", "C", "A"]);
}

#[test]
fn given_equal_prerequisite_counts_when_sorting_then_ascending_id_order_is_kept() {
    // inserted out of order so the traversal, not insertion, defines the tie order
    let index: CourseIndex = [
        course("D", "d", &["X"]),
        course("B", "b", &["X"]),
        course("E", "e", &[]),
        course("A", "a", &["X"]),
        course("C", "c", &["X", "Y"]),
    ]
    .into_iter()
    .collect();

    assert_eq!(ids(&index.by_prerequisite_count()), ["C", "A", "B", "D", "E"]);
}

#[test]
fn given_calc_course_when_searching_then_matches_case_insensitively() {
    let mut index = CourseIndex::new();
    index.insert(course("MATH201", "Calc II", &[]));

    assert_eq!(ids(&index.search("calc")), ["MATH201"]);
    assert!(index.search("physics").is_empty());
}

#[test]
fn given_several_matches_when_searching_then_keeps_ascending_order() {
    let index: CourseIndex = [
        course("MATH301", "Linear Algebra", &[]),
        course("CS101", "Intro to Programming", &[]),
        course("MATH101", "Algebra", &[]),
    ]
    .into_iter()
    .collect();

    assert_eq!(ids(&index.search("ALGEBRA")), ["MATH101", "MATH301"]);
    assert_eq!(ids(&index.search("math")), ["MATH101", "MATH301"]);
}

#[test]
fn given_deep_degenerate_tree_when_traversing_then_does_not_overflow() {
    let index: CourseIndex = (0..5_000)
        .map(|i| course(&format!("C{i:06}"), "x", &[]))
        .collect();

    let view = index.traverse();
    assert_eq!(view.len(), 5_000);
    assert_eq!(view.first().unwrap().id(), "C000000");
    assert_eq!(index.height(), 5_000);
    assert!(index.lookup("C004999").is_some());
}
