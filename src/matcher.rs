//! Recursive matching engine

use crate::api::Captures;
use crate::indexing::InputIndexer;
use crate::ir::{Node, NodeKind};
use crate::types::NodeID;

/// Walks the node graph against an input between the bounds `bol` and `eol`.
/// One attempter serves any number of attempts; each attempt resets the
/// captures and the capture counter.
#[derive(Debug)]
pub(crate) struct MatchAttempter<'r, 'c, Input: InputIndexer> {
    nodes: &'r [Node],
    input: Input,
    bol: usize,
    eol: usize,
    captures: &'c mut Captures,

    /// The next capture slot which may be written in this attempt.
    /// Slots below it have already been entered.
    current: u32,
}

impl<'r, 'c, Input: InputIndexer> MatchAttempter<'r, 'c, Input> {
    pub(crate) fn new(
        nodes: &'r [Node],
        input: Input,
        bol: usize,
        eol: usize,
        captures: &'c mut Captures,
    ) -> Self {
        debug_assert!(bol <= eol && eol <= input.len(), "Invalid bounds");
        Self {
            nodes,
            input,
            bol,
            eol,
            captures,
            current: 0,
        }
    }

    /// Forget everything captured by a previous attempt.
    pub(crate) fn reset(&mut self) {
        self.captures.reset();
        self.current = 0;
    }

    /// Run one attempt of \p root at \p pos.
    /// \return the position after the match, or None.
    pub(crate) fn run(&mut self, root: NodeID, pos: usize) -> Option<usize> {
        self.reset();
        self.match_node(root, pos)
    }

    /// Consume one element.
    #[inline(always)]
    fn next_element(&self, pos: usize) -> Option<(u32, usize)> {
        let mut pos = pos;
        let e = self.input.next_right(&mut pos, self.eol)?;
        Some((e.into(), pos))
    }

    /// \return whether any member of the class chain at \p members matches \p c.
    fn class_contains(&self, members: NodeID, c: u32) -> bool {
        let mut cursor = Some(members);
        while let Some(id) = cursor {
            let node = &self.nodes[id];
            match node.kind {
                NodeKind::Char(m) if m == c => return true,
                NodeKind::Range { first, last } if c >= first && c <= last => return true,
                _ => {}
            }
            cursor = node.next;
        }
        false
    }

    /// Match \p head and each of its siblings in turn.
    fn match_chain(&mut self, head: NodeID, mut pos: usize) -> Option<usize> {
        let mut cursor = Some(head);
        while let Some(id) = cursor {
            pos = self.match_node(id, pos)?;
            cursor = self.nodes[id].next;
        }
        Some(pos)
    }

    /// Match a single node, ignoring its siblings.
    fn match_node(&mut self, id: NodeID, pos: usize) -> Option<usize> {
        let nodes = self.nodes;
        match nodes[id].kind {
            NodeKind::Char(c) => match self.next_element(pos) {
                Some((e, next)) if e == c => Some(next),
                _ => None,
            },

            NodeKind::AnyChar => self.next_element(pos).map(|(_, next)| next),

            NodeKind::Class { members } => match self.next_element(pos) {
                Some((e, next)) if self.class_contains(members, e) => Some(next),
                _ => None,
            },

            NodeKind::NegatedClass { members } => match self.next_element(pos) {
                Some((e, next)) if !self.class_contains(members, e) => Some(next),
                _ => None,
            },

            // Ranges only appear as class members.
            NodeKind::Range { .. } => None,

            NodeKind::StartAnchor => {
                if pos == self.bol {
                    Some(pos)
                } else {
                    None
                }
            }

            NodeKind::EndAnchor => {
                if pos == self.eol {
                    Some(pos)
                } else {
                    None
                }
            }

            NodeKind::Greedy { body, quant } => {
                let min = u32::from(quant.min);
                let max = u32::from(quant.max);
                let mut iters: u32 = 0;
                let mut good = pos;
                while quant.is_unbounded() || iters < max {
                    let next = match self.match_node(body, good) {
                        Some(next) => next,
                        None => break,
                    };
                    iters += 1;
                    if next == good {
                        // Every further iteration would match empty here too.
                        iters = iters.max(min);
                        break;
                    }
                    good = next;
                }
                // Never retry with fewer iterations.
                if iters >= min {
                    Some(good)
                } else {
                    None
                }
            }

            NodeKind::Alternation { left, right } => self
                .match_chain(left, pos)
                .or_else(|| self.match_chain(right, pos)),

            NodeKind::Group { body, slot } => {
                let capture = if u32::from(slot) == self.current {
                    self.current += 1;
                    self.captures.open(slot, pos);
                    Some(slot)
                } else {
                    None
                };
                let result = match body {
                    Some(head) => self.match_chain(head, pos),
                    None => Some(pos),
                };
                if let Some(slot) = capture {
                    match result {
                        Some(end) => self.captures.close(slot, end),
                        None => self.captures.clear(slot),
                    }
                }
                result
            }
        }
    }
}
