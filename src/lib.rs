//! Course catalog built on an ordered binary search tree index.
//!
//! Layers:
//! - [`domain`]: course record, [`domain::CourseIndex`] and derived views
//! - [`application`]: catalog ingestion, document-store service, text rendering
//! - [`infrastructure`]: filesystem and document-store seams, service wiring
//! - [`cli`]: argument parsing and command dispatch

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use domain::{Course, CourseIndex};
