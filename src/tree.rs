//! The parse tree produced by a compiled BNF parser.
//!
//! A closed two-variant sum: a named rule node with children, or a literal
//! leaf. `children` uses `smallvec::SmallVec` since most grammar rules have
//! a handful of terms per alternative, not hundreds, so the common case
//! avoids a heap allocation.

use smallvec::SmallVec;

/// The children of a rule node. Most alternatives in a hand-written
/// grammar have a small, fixed number of terms, so this avoids a heap
/// allocation for the common case.
pub type ChildNodes = SmallVec<[ParseNode; 4]>;

/// A node in a parse tree produced by [`crate::bnf::from_bnf`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseNode {
    /// A rule name together with the ordered sequence of child nodes its
    /// winning alternative produced.
    Rule { name: String, children: ChildNodes },
    /// A literal string matched verbatim.
    Literal(String),
}

impl ParseNode {
    pub fn rule(name: impl Into<String>, children: impl IntoIterator<Item = ParseNode>) -> Self {
        ParseNode::Rule {
            name: name.into(),
            children: children.into_iter().collect(),
        }
    }

    pub fn literal(text: impl Into<String>) -> Self {
        ParseNode::Literal(text.into())
    }

    /// The rule name, if this is a rule node.
    pub fn name(&self) -> Option<&str> {
        match self {
            ParseNode::Rule { name, .. } => Some(name),
            ParseNode::Literal(_) => None,
        }
    }

    pub fn children(&self) -> &[ParseNode] {
        match self {
            ParseNode::Rule { children, .. } => children.as_slice(),
            ParseNode::Literal(_) => &[],
        }
    }

    /// Recursively reconstructs the matched input: the concatenation of
    /// literal leaves in depth-first left-to-right order.
    pub fn show(&self) -> String {
        match self {
            ParseNode::Literal(s) => s.clone(),
            ParseNode::Rule { children, .. } => children.iter().map(ParseNode::show).collect(),
        }
    }
}
