//! Catalog ingestion service
//!
//! Turns a comma-delimited course file into index insertions. Row layout:
//! `identifier,name[,prerequisite...]`. Malformed rows are rejected here and
//! never reach the index.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{Course, CourseIndex};
use crate::infrastructure::traits::FileSystem;

/// A row that could not yield a course record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRow {
    /// 1-based line number in the source file
    pub line: usize,
    pub reason: String,
}

/// Outcome of loading a catalog file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Number of courses inserted
    pub loaded: usize,
    pub rejected: Vec<RejectedRow>,
}

/// Parse catalog text into records, in file order.
///
/// Blank lines are ignored. When `skip_header` is set, the first non-blank
/// line is dropped. Fields are trimmed and empty prerequisite fields dropped.
pub fn parse_catalog(content: &str, skip_header: bool) -> (Vec<Course>, Vec<RejectedRow>) {
    let mut courses = Vec::new();
    let mut rejected = Vec::new();
    let mut header_pending = skip_header;

    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    for (i, raw) in content.lines().enumerate() {
        let line = i + 1;
        if raw.trim().is_empty() {
            continue;
        }
        if header_pending {
            header_pending = false;
            continue;
        }

        match parse_row(raw) {
            Ok(course) => courses.push(course),
            Err(reason) => rejected.push(RejectedRow { line, reason }),
        }
    }

    (courses, rejected)
}

fn parse_row(raw: &str) -> Result<Course, String> {
    let mut fields = raw.split(',').map(str::trim);

    let id = fields.next().unwrap_or_default();
    let Some(name) = fields.next() else {
        return Err("expected at least identifier and name".to_string());
    };
    if id.is_empty() {
        return Err("empty identifier".to_string());
    }
    if name.is_empty() {
        return Err("empty name".to_string());
    }

    let prerequisites = fields
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();
    Course::new(id, name, prerequisites).map_err(|e| e.to_string())
}

/// Loads catalog files into a [`CourseIndex`].
pub struct CatalogLoader {
    fs: Arc<dyn FileSystem>,
    skip_header: bool,
}

impl CatalogLoader {
    pub fn new(fs: Arc<dyn FileSystem>, skip_header: bool) -> Self {
        Self { fs, skip_header }
    }

    /// Insert every valid row of `path` into `index`, one insert per row.
    #[instrument(level = "debug", skip(self, index))]
    pub fn load_into(&self, path: &Path, index: &mut CourseIndex) -> ApplicationResult<LoadReport> {
        if !self.fs.exists(path) {
            return Err(ApplicationError::CatalogNotFound(path.to_path_buf()));
        }
        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read catalog", path)?;

        let (courses, rejected) = parse_catalog(&content, self.skip_header);
        for row in &rejected {
            debug!("{}:{}: rejected row: {}", path.display(), row.line, row.reason);
        }

        let loaded = courses.len();
        for course in courses {
            index.insert(course);
        }
        debug!("loaded {} courses, rejected {}", loaded, rejected.len());

        Ok(LoadReport { loaded, rejected })
    }

    /// Load `path` into a fresh index.
    pub fn load(&self, path: &Path) -> ApplicationResult<(CourseIndex, LoadReport)> {
        let mut index = CourseIndex::new();
        let report = self.load_into(path, &mut index)?;
        Ok((index, report))
    }
}
