//! Support for quickly finding potential match locations.
use crate::ir::{Node, NodeKind};
use crate::types::{NodeID, ROOT};

/// What a successful match must begin with.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StartPredicate {
    /// Any position may start a match.
    Arbitrary,

    /// Only the start of the search range may start a match.
    StartAnchored,

    /// A match must begin with this element.
    Literal(u32),
}

/// Inspect the node that every match must begin with.
/// This is best-effort: Arbitrary is always safe.
fn predicate_for_node(nodes: &[Node], id: NodeID, depth: usize) -> StartPredicate {
    // Nesting deep enough to matter is not worth chasing.
    if depth > 64 {
        return StartPredicate::Arbitrary;
    }
    match nodes[id].kind {
        NodeKind::StartAnchor => StartPredicate::StartAnchored,
        NodeKind::Char(c) => StartPredicate::Literal(c),
        NodeKind::Group {
            body: Some(body), ..
        } => predicate_for_node(nodes, body, depth + 1),
        // The first iteration of a required loop begins the match.
        NodeKind::Greedy { body, quant } if quant.min > 0 => {
            predicate_for_node(nodes, body, depth + 1)
        }
        _ => StartPredicate::Arbitrary,
    }
}

/// Compute the start predicate for a graph rooted at ROOT.
pub fn predicate_for_regex(nodes: &[Node]) -> StartPredicate {
    if nodes.is_empty() {
        return StartPredicate::Arbitrary;
    }
    predicate_for_node(nodes, ROOT, 0)
}
