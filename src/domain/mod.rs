//! Domain layer: the course record and the ordered index
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod course;
pub mod error;
pub mod index;
pub mod tree_traits;
pub mod views;

pub use course::Course;
pub use error::DomainError;
pub use index::{CourseIndex, InOrderIterator, IndexNode};
pub use tree_traits::TreeNodeConvert;
pub use views::{filter_by_substring, fold_case, sort_by_prerequisite_count};
