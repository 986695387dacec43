//! Node graph for a compiled pattern

use crate::types::{CaptureGroupID, NodeID};
use crate::util::display_element;
use core::fmt;

/// A Quantifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Quantifier {
    /// Minimum number of iterations of the loop, inclusive.
    pub min: u16,

    /// Maximum number of iterations of the loop, inclusive.
    /// UNBOUNDED means there is no maximum.
    pub max: u16,
}

impl Quantifier {
    /// Sentinel maximum meaning "no limit".
    pub const UNBOUNDED: u16 = u16::MAX;

    pub const fn new(min: u16, max: u16) -> Self {
        Quantifier { min, max }
    }

    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.max == Self::UNBOUNDED
    }
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_unbounded() {
            write!(f, "{{{},}}", self.min)
        } else {
            write!(f, "{{{},{}}}", self.min, self.max)
        }
    }
}

/// The node types of our graph.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Match a literal element.
    Char(u32),

    /// Repeat `body` as often as the quantifier allows.
    Greedy { body: NodeID, quant: Quantifier },

    /// Match the chain at `left`, or else the chain at `right`.
    Alternation { left: NodeID, right: NodeID },

    /// A capturing group. The body is set once its contents are parsed.
    Group {
        body: Option<NodeID>,
        slot: CaptureGroupID,
    },

    /// Match any one element.
    AnyChar,

    /// Match one element contained in the member chain.
    Class { members: NodeID },

    /// Match one element not contained in the member chain.
    NegatedClass { members: NodeID },

    /// A class member covering `first..=last`.
    Range { first: u32, last: u32 },

    /// Zero-width: the end of the bound.
    EndAnchor,

    /// Zero-width: the start of the bound.
    StartAnchor,
}

/// One entry in the arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,

    /// The following sibling in a concatenation or class member list.
    pub next: Option<NodeID>,
}

/// Append-only node storage. Indices handed out by `push` stay valid for
/// the arena's lifetime.
#[derive(Debug, Default)]
pub struct Arena {
    nodes: Vec<Node>,
}

impl Arena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node with no sibling, returning its index.
    pub fn push(&mut self, kind: NodeKind) -> NodeID {
        self.nodes.push(Node { kind, next: None });
        self.nodes.len() - 1
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[cfg(test)]
    pub fn get(&self, id: NodeID) -> &Node {
        &self.nodes[id]
    }

    /// Link \p next as the sibling following \p id.
    pub fn set_next(&mut self, id: NodeID, next: NodeID) {
        debug_assert!(next < self.nodes.len(), "Sibling must already exist");
        self.nodes[id].next = Some(next);
    }

    /// Attach the parsed contents of a group.
    pub fn set_group_body(&mut self, group: NodeID, head: NodeID) {
        debug_assert!(head < self.nodes.len(), "Group body must already exist");
        match &mut self.nodes[group].kind {
            NodeKind::Group { body, .. } => *body = Some(head),
            kind => panic!("Node {} is not a group: {:?}", group, kind),
        }
    }

    /// Freeze the arena.
    pub fn into_nodes(self) -> Box<[Node]> {
        self.nodes.into_boxed_slice()
    }
}

/// A pattern in graph form, as produced by the parser.
#[derive(Debug)]
pub struct Regex {
    pub nodes: Box<[Node]>,

    /// Number of capture groups, including the implicit group 0.
    pub group_count: usize,
}

/// A Display adapter which lists every node of a graph, one per line.
#[derive(Debug, Copy, Clone)]
pub struct Dump<'a> {
    nodes: &'a [Node],
}

impl<'a> Dump<'a> {
    pub fn new(nodes: &'a [Node]) -> Self {
        Dump { nodes }
    }
}

fn display_link(link: Option<NodeID>) -> String {
    match link {
        Some(id) => format!("{:02}", id),
        None => "--".to_string(),
    }
}

fn display_node(id: NodeID, node: &Node, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "[{:02}] ", id)?;
    match node.kind {
        NodeKind::Char(c) => write!(f, "{:>12}", display_element(c))?,
        NodeKind::Greedy { body, quant } => write!(f, "{:>12} body {:02} {}", "Greedy", body, quant)?,
        NodeKind::Alternation { left, right } => {
            write!(f, "{:>12} left {:02} right {:02}", "Alternation", left, right)?
        }
        NodeKind::Group { body, slot } => {
            write!(f, "{:>12} body {} slot {}", "Group", display_link(body), slot)?
        }
        NodeKind::AnyChar => write!(f, "{:>12}", "AnyChar")?,
        NodeKind::Class { members } => write!(f, "{:>12} members {:02}", "Class", members)?,
        NodeKind::NegatedClass { members } => {
            write!(f, "{:>12} members {:02}", "NegatedClass", members)?
        }
        NodeKind::Range { first, last } => write!(
            f,
            "{:>12} {}-{}",
            "Range",
            display_element(first),
            display_element(last)
        )?,
        NodeKind::EndAnchor => write!(f, "{:>12}", "EndAnchor")?,
        NodeKind::StartAnchor => write!(f, "{:>12}", "StartAnchor")?,
    }
    writeln!(f, " next {}", display_link(node.next))
}

impl fmt::Display for Dump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (id, node) in self.nodes.iter().enumerate() {
            display_node(id, node, f)?;
        }
        Ok(())
    }
}
