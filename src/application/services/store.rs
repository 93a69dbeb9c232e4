//! Document-store service
//!
//! Reads course documents from an external store. Kept separate from the
//! catalog index: nothing here inserts into or queries a `CourseIndex`.

use std::sync::Arc;

use tracing::{instrument, warn};

use crate::application::ApplicationResult;
use crate::domain::Course;
use crate::infrastructure::store::DocumentStore;

pub struct StoreService {
    store: Arc<dyn DocumentStore>,
}

impl StoreService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// All valid documents as courses, in store order.
    ///
    /// Documents without an identifier are skipped with a warning.
    #[instrument(level = "debug", skip(self))]
    pub fn list(&self) -> ApplicationResult<Vec<Course>> {
        let courses = self
            .store
            .find_all()?
            .into_iter()
            .filter_map(|doc| {
                let name = doc.course_name.clone();
                match doc.into_course() {
                    Ok(course) => Some(course),
                    Err(e) => {
                        warn!("skipping document '{}': {}", name, e);
                        None
                    }
                }
            })
            .collect();
        Ok(courses)
    }

    /// Exact-id lookup; `Ok(None)` when the store has no such course.
    #[instrument(level = "debug", skip(self))]
    pub fn find(&self, course_id: &str) -> ApplicationResult<Option<Course>> {
        match self.store.find_one(course_id)? {
            Some(doc) => Ok(Some(doc.into_course()?)),
            None => Ok(None),
        }
    }
}
