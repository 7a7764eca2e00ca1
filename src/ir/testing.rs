//! Testing utilities for tree assertions
//!
//! Structural tests on entry trees should use this fluent API instead of
//! hand-rolled index chasing. It threads a breadcrumb context through every
//! assertion so a failure names the exact position in the tree, and it lets
//! whole hierarchies be verified in a few lines:
//!
//! ```rust-example
//! assert_tree(&tree).root(|root| {
//!     root.child_count(1).child(0, |class| {
//!         class
//!             .section(Section::Class)
//!             .name("Widget")
//!             .parent_is_consistent()
//!             .child(0, |member| {
//!                 member.section(Section::Function).name("draw");
//!             });
//!     });
//! });
//! ```

use super::entry::Entry;
use super::section::Section;
use super::tree::{EntryId, EntryTree};

/// Entry point for fluent tree assertions.
pub fn assert_tree(tree: &EntryTree) -> TreeAssertion<'_> {
    TreeAssertion { tree }
}

pub struct TreeAssertion<'a> {
    tree: &'a EntryTree,
}

impl<'a> TreeAssertion<'a> {
    /// Assert on the root node.
    pub fn root<F>(self, assertion: F) -> Self
    where
        F: FnOnce(EntryAssertion<'a>),
    {
        assertion(self.at(self.tree.root()));
        self
    }

    /// Assert on an arbitrary node.
    pub fn node<F>(self, id: EntryId, assertion: F) -> Self
    where
        F: FnOnce(EntryAssertion<'a>),
    {
        assertion(self.at(id));
        self
    }

    /// Assert the number of live nodes in the whole tree.
    pub fn node_count(self, expected: usize) -> Self {
        let actual = self.tree.node_count();
        assert_eq!(
            actual, expected,
            "tree: Expected {} live nodes, found {}",
            expected, actual
        );
        self
    }

    fn at(&self, id: EntryId) -> EntryAssertion<'a> {
        assert!(self.tree.contains(id), "tree: {:?} is stale", id);
        EntryAssertion {
            tree: self.tree,
            id,
            context: if id == self.tree.root() {
                "root".to_string()
            } else {
                format!("{:?}", id)
            },
        }
    }
}

pub struct EntryAssertion<'a> {
    tree: &'a EntryTree,
    id: EntryId,
    context: String,
}

impl<'a> EntryAssertion<'a> {
    fn entry(&self) -> &'a Entry {
        self.tree.entry(self.id)
    }

    pub fn section(self, expected: Section) -> Self {
        let actual = self.entry().section;
        assert_eq!(
            actual, expected,
            "{}: Expected section {}, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn name(self, expected: &str) -> Self {
        let actual = &self.entry().name;
        assert_eq!(
            actual, expected,
            "{}: Expected name {:?}, found {:?}",
            self.context, expected, actual
        );
        self
    }

    pub fn type_is(self, expected: &str) -> Self {
        let actual = &self.entry().type_;
        assert_eq!(
            actual, expected,
            "{}: Expected type {:?}, found {:?}",
            self.context, expected, actual
        );
        self
    }

    pub fn brief_contains(self, substring: &str) -> Self {
        let actual = &self.entry().brief.text;
        assert!(
            actual.contains(substring),
            "{}: Expected brief containing {:?}, found {:?}",
            self.context,
            substring,
            actual
        );
        self
    }

    pub fn doc_contains(self, substring: &str) -> Self {
        let actual = &self.entry().doc.text;
        assert!(
            actual.contains(substring),
            "{}: Expected doc containing {:?}, found {:?}",
            self.context,
            substring,
            actual
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.tree.children_of(self.id).len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} children, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(EntryAssertion<'a>),
    {
        let children = self.tree.children_of(self.id);
        assert!(
            index < children.len(),
            "{}: Child index {} out of bounds (entry has {} children)",
            self.context,
            index,
            children.len()
        );
        assertion(EntryAssertion {
            tree: self.tree,
            id: children[index],
            context: format!("{}:children[{}]", self.context, index),
        });
        self
    }

    /// Assert that every child's parent back-reference points back to this
    /// node, recursively through the subtree.
    pub fn parent_is_consistent(self) -> Self {
        fn check(tree: &EntryTree, id: EntryId, context: &str) {
            for (index, &child) in tree.children_of(id).iter().enumerate() {
                assert_eq!(
                    tree.parent_of(child),
                    Some(id),
                    "{}:children[{}]: parent back-reference does not match owning sequence",
                    context,
                    index
                );
                check(tree, child, &format!("{}:children[{}]", context, index));
            }
        }
        check(self.tree, self.id, &self.context);
        self
    }

    /// Assert that this node is a detached, freshly constructed default node.
    pub fn is_blank(self) -> Self {
        assert_eq!(
            self.entry(),
            &Entry::new(),
            "{}: Expected a default entry",
            self.context
        );
        assert!(
            self.tree.parent_of(self.id).is_none(),
            "{}: Expected a detached entry",
            self.context
        );
        assert!(
            self.tree.children_of(self.id).is_empty(),
            "{}: Expected an entry without children",
            self.context
        );
        self
    }
}
