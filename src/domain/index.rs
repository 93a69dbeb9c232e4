use std::cmp::Ordering;

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::course::Course;
use crate::domain::views;

/// Binary search tree node holding one course.
///
/// Child indices point into the owning [`CourseIndex`] arena. Every index is
/// referenced by at most one parent.
#[derive(Debug)]
pub struct IndexNode {
    course: Course,
    left: Option<Index>,
    right: Option<Index>,
}

impl IndexNode {
    fn leaf(course: Course) -> Self {
        Self {
            course,
            left: None,
            right: None,
        }
    }

    pub fn course(&self) -> &Course {
        &self.course
    }

    pub fn left(&self) -> Option<Index> {
        self.left
    }

    pub fn right(&self) -> Option<Index> {
        self.right
    }
}

/// Ordered course index: an unbalanced binary search tree keyed by course id.
///
/// Nodes live in a generational arena and are never removed, so every child
/// index stays valid for the lifetime of the index. Ties are routed right,
/// which keeps duplicates but makes only the first-inserted one reachable
/// through [`CourseIndex::lookup`].
#[derive(Debug)]
pub struct CourseIndex {
    arena: Arena<IndexNode>,
    root: Option<Index>,
}

impl Default for CourseIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl CourseIndex {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Insert a course. Always succeeds, duplicates included.
    #[instrument(level = "trace", skip(self, course), fields(id = course.id()))]
    pub fn insert(&mut self, course: Course) -> Index {
        let Some(mut current) = self.root else {
            let idx = self.arena.insert(IndexNode::leaf(course));
            self.root = Some(idx);
            return idx;
        };

        loop {
            let node = &self.arena[current];
            let goes_left = course.id() < node.course.id();
            let next = if goes_left { node.left } else { node.right };

            match next {
                Some(child) => current = child,
                None => {
                    let idx = self.arena.insert(IndexNode::leaf(course));
                    let parent = &mut self.arena[current];
                    if goes_left {
                        parent.left = Some(idx);
                    } else {
                        parent.right = Some(idx);
                    }
                    return idx;
                }
            }
        }
    }

    /// Exact-key lookup. `None` is a normal outcome, not an error.
    #[instrument(level = "trace", skip(self))]
    pub fn lookup(&self, id: &str) -> Option<&Course> {
        let mut current = self.root;
        while let Some(idx) = current {
            let node = self.arena.get(idx)?;
            match id.cmp(node.course.id()) {
                Ordering::Equal => return Some(&node.course),
                Ordering::Less => current = node.left,
                Ordering::Greater => current = node.right,
            }
        }
        None
    }

    /// All courses in ascending identifier order, materialized once.
    #[instrument(level = "debug", skip(self))]
    pub fn traverse(&self) -> Vec<&Course> {
        self.iter().collect()
    }

    /// Courses whose id or name contains `needle`, case-insensitively.
    pub fn search(&self, needle: &str) -> Vec<&Course> {
        views::filter_by_substring(&self.traverse(), needle)
    }

    /// Courses ordered by prerequisite count, descending, ties by id.
    pub fn by_prerequisite_count(&self) -> Vec<&Course> {
        views::sort_by_prerequisite_count(&self.traverse())
    }

    pub fn iter(&self) -> InOrderIterator<'_> {
        InOrderIterator::new(self)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn get_node(&self, idx: Index) -> Option<&IndexNode> {
        self.arena.get(idx)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes on the longest root-to-leaf path, 0 when empty.
    #[instrument(level = "debug", skip(self))]
    pub fn height(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(Index, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();

        while let Some((idx, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            if let Some(node) = self.get_node(idx) {
                for child in [node.left, node.right].into_iter().flatten() {
                    stack.push((child, depth + 1));
                }
            }
        }

        max_depth
    }
}

/// In-order walk driven by an explicit stack of pending ancestors.
pub struct InOrderIterator<'a> {
    index: &'a CourseIndex,
    stack: Vec<&'a IndexNode>,
}

impl<'a> InOrderIterator<'a> {
    fn new(index: &'a CourseIndex) -> Self {
        let mut iter = Self {
            index,
            stack: Vec::new(),
        };
        iter.push_left_spine(index.root);
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<Index>) {
        let index = self.index;
        while let Some(node) = current.and_then(|idx| index.get_node(idx)) {
            self.stack.push(node);
            current = node.left;
        }
    }
}

impl<'a> Iterator for InOrderIterator<'a> {
    type Item = &'a Course;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right);
        Some(&node.course)
    }
}

impl<'a> IntoIterator for &'a CourseIndex {
    type Item = &'a Course;
    type IntoIter = InOrderIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Course> for CourseIndex {
    fn from_iter<I: IntoIterator<Item = Course>>(iter: I) -> Self {
        let mut index = Self::new();
        for course in iter {
            index.insert(course);
        }
        index
    }
}
