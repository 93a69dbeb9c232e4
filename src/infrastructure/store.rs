//! Document-store seam
//!
//! An independent data path: the store hands record-shaped documents to the
//! presentation layer and never touches the in-memory index.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::domain::{Course, DomainError};
use crate::infrastructure::traits::FileSystem;

/// Course document as kept in the store: fixed prerequisite slots.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct StoredCourse {
    pub course_id: String,
    pub course_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prerequisite_1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prerequisite_2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prerequisite_3: Option<String>,
}

impl StoredCourse {
    /// Filled slots in slot order; empty strings count as unfilled.
    pub fn prerequisites(&self) -> Vec<String> {
        [&self.prerequisite_1, &self.prerequisite_2, &self.prerequisite_3]
            .into_iter()
            .flatten()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn into_course(self) -> Result<Course, DomainError> {
        let prerequisites = self.prerequisites();
        Course::new(self.course_id, self.course_name, prerequisites)
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("read store {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parse store {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Read access to an external course collection.
pub trait DocumentStore: Send + Sync {
    /// First document whose `course_id` equals `course_id` exactly.
    fn find_one(&self, course_id: &str) -> Result<Option<StoredCourse>, StoreError>;

    /// Every document, in store order.
    fn find_all(&self) -> Result<Vec<StoredCourse>, StoreError>;
}

/// On-disk layout of a TOML store file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    courses: Vec<StoredCourse>,
}

/// Store backed by a TOML file of `[[courses]]` tables, read once at open.
#[derive(Debug)]
pub struct TomlDocumentStore {
    courses: Vec<StoredCourse>,
}

impl TomlDocumentStore {
    #[instrument(level = "debug", skip(fs))]
    pub fn open(fs: &dyn FileSystem, path: &Path) -> Result<Self, StoreError> {
        let content = fs.read_to_string(path).map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file: StoreFile = toml::from_str(&content).map_err(|e| StoreError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        debug!("opened store with {} documents", file.courses.len());
        Ok(Self {
            courses: file.courses,
        })
    }
}

impl DocumentStore for TomlDocumentStore {
    fn find_one(&self, course_id: &str) -> Result<Option<StoredCourse>, StoreError> {
        Ok(self
            .courses
            .iter()
            .find(|c| c.course_id == course_id)
            .cloned())
    }

    fn find_all(&self) -> Result<Vec<StoredCourse>, StoreError> {
        Ok(self.courses.clone())
    }
}

/// Store held entirely in memory.
#[derive(Debug, Default, Clone)]
pub struct InMemoryDocumentStore {
    courses: Vec<StoredCourse>,
}

impl InMemoryDocumentStore {
    pub fn new(courses: Vec<StoredCourse>) -> Self {
        Self { courses }
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn find_one(&self, course_id: &str) -> Result<Option<StoredCourse>, StoreError> {
        Ok(self
            .courses
            .iter()
            .find(|c| c.course_id == course_id)
            .cloned())
    }

    fn find_all(&self) -> Result<Vec<StoredCourse>, StoreError> {
        Ok(self.courses.clone())
    }
}
