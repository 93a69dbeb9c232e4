//! Tests for CatalogLoader

use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;

use course_planner::application::services::CatalogLoader;
use course_planner::application::ApplicationError;
use course_planner::domain::CourseIndex;
use course_planner::infrastructure::traits::RealFileSystem;

/// Helper to create a catalog file for testing
fn create_catalog(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write catalog");
    path
}

fn loader(skip_header: bool) -> CatalogLoader {
    CatalogLoader::new(Arc::new(RealFileSystem), skip_header)
}

#[test]
fn given_catalog_with_header_when_loading_then_inserts_every_row() {
    let temp = TempDir::new().unwrap();
    let path = create_catalog(
        &temp,
        "courses.csv",
        "course_id,course_name,prerequisites\n\
         CSCI300,Introduction to Algorithms,CSCI200,MATH201\n\
         CSCI100,Introduction to Computer Science\n\
         MATH201,Discrete Mathematics\n",
    );

    let (index, report) = loader(true).load(&path).unwrap();

    assert_eq!(report.loaded, 3);
    assert!(report.rejected.is_empty());
    let ids: Vec<_> = index.traverse().iter().map(|c| c.id()).collect();
    assert_eq!(ids, ["CSCI100", "CSCI300", "MATH201"]);
    assert_eq!(
        index.lookup("CSCI300").unwrap().prerequisites(),
        ["CSCI200", "MATH201"]
    );
}

#[test]
fn given_headerless_catalog_when_loading_with_header_skip_off_then_keeps_first_row() {
    let temp = TempDir::new().unwrap();
    let path = create_catalog(&temp, "courses.csv", "CS101,Intro\nCS102,Next,CS101\n");

    let (index, report) = loader(false).load(&path).unwrap();

    assert_eq!(report.loaded, 2);
    assert!(index.lookup("CS101").is_some());
}

#[test]
fn given_malformed_rows_when_loading_then_rejects_them_and_loads_the_rest() {
    let temp = TempDir::new().unwrap();
    let path = create_catalog(
        &temp,
        "courses.csv",
        "CS101,Intro\nBROKEN\n,No Id\nCS200,Data Structures,CS101\n",
    );

    let (index, report) = loader(false).load(&path).unwrap();

    assert_eq!(report.loaded, 2);
    let lines: Vec<_> = report.rejected.iter().map(|r| r.line).collect();
    assert_eq!(lines, [2, 3]);
    assert_eq!(index.len(), 2);
    assert!(index.lookup("BROKEN").is_none());
}

#[test]
fn given_duplicate_rows_when_loading_then_first_row_wins_lookup() {
    let temp = TempDir::new().unwrap();
    let path = create_catalog(&temp, "courses.csv", "CS101,Old Intro\nCS101,New Intro\n");

    let (index, report) = loader(false).load(&path).unwrap();

    assert_eq!(report.loaded, 2);
    assert_eq!(index.lookup("CS101").unwrap().name(), "Old Intro");
    assert_eq!(index.traverse().len(), 2);
}

#[test]
fn given_existing_index_when_loading_into_then_appends() {
    let temp = TempDir::new().unwrap();
    let first = create_catalog(&temp, "a.csv", "CS101,Intro\n");
    let second = create_catalog(&temp, "b.csv", "CS050,Preparatory\n");

    let mut index = CourseIndex::new();
    let loader = loader(false);
    loader.load_into(&first, &mut index).unwrap();
    loader.load_into(&second, &mut index).unwrap();

    let ids: Vec<_> = index.traverse().iter().map(|c| c.id()).collect();
    assert_eq!(ids, ["CS050", "CS101"]);
}

#[test]
fn given_missing_file_when_loading_then_returns_catalog_not_found() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope.csv");

    let result = loader(true).load(&missing);

    assert!(matches!(result, Err(ApplicationError::CatalogNotFound(p)) if p == missing));
}

#[test]
fn given_empty_file_when_loading_then_index_is_empty() {
    let temp = TempDir::new().unwrap();
    let path = create_catalog(&temp, "empty.csv", "");

    let (index, report) = loader(true).load(&path).unwrap();

    assert!(index.is_empty());
    assert_eq!(report.loaded, 0);
}
