//! Course record: the value stored at every index node

use std::fmt;

use crate::domain::DomainError;

/// Immutable course record.
///
/// The identifier is the ordering key of the index and is compared over its
/// exact stored representation. Callers normalize case before constructing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    id: String,
    name: String,
    prerequisites: Vec<String>,
}

impl Course {
    /// Build a record. The only validation is a non-empty identifier.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        prerequisites: Vec<String>,
    ) -> Result<Self, DomainError> {
        let id = id.into();
        if id.is_empty() {
            return Err(DomainError::EmptyIdentifier);
        }
        Ok(Self {
            id,
            name: name.into(),
            prerequisites,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Prerequisite identifiers in the order given at construction.
    pub fn prerequisites(&self) -> &[String] {
        &self.prerequisites
    }

    pub fn prerequisite_count(&self) -> usize {
        self.prerequisites.len()
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.id, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_empty_identifier_when_constructing_then_rejects() {
        let result = Course::new("", "Nameless", vec![]);
        assert!(matches!(result, Err(DomainError::EmptyIdentifier)));
    }

    #[test]
    fn given_duplicate_prerequisites_when_constructing_then_keeps_them_in_order() {
        let course = Course::new(
            "CS400",
            "Capstone",
            vec!["CS300".into(), "CS200".into(), "CS300".into()],
        )
        .unwrap();
        assert_eq!(course.prerequisites(), ["CS300", "CS200", "CS300"]);
        assert_eq!(course.prerequisite_count(), 3);
    }

    #[test]
    fn test_display_shows_id_and_name() {
        let course = Course::new("MATH201", "Calc II", vec![]).unwrap();
        assert_eq!(course.to_string(), "MATH201: Calc II");
    }
}
