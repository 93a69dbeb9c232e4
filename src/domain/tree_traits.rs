use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::domain::index::CourseIndex;

/// Render a tree shape for terminal display.
pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeNodeConvert for CourseIndex {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        fn build_tree(index: &CourseIndex, node_idx: Index) -> Tree<String> {
            match index.get_node(node_idx) {
                Some(node) => {
                    // left before right so the rendering reads in key order
                    let leaves: Vec<_> = [node.left(), node.right()]
                        .into_iter()
                        .flatten()
                        .map(|child| build_tree(index, child))
                        .collect();
                    Tree::new(node.course().id().to_string()).with_leaves(leaves)
                }
                None => Tree::new(String::new()),
            }
        }

        match self.root() {
            Some(root_idx) => build_tree(self, root_idx),
            None => Tree::new("Empty index".to_string()),
        }
    }
}
