//! Parser from regex patterns to the node graph

use crate::ir::{self, Arena, NodeKind, Quantifier};
use crate::types::{CaptureGroupID, NodeID, MAX_CAPTURE_GROUPS, ROOT};
use crate::util::{is_metachar, to_char_sat};
use std::fmt;
use std::iter::Peekable;

/// Represents an error encountered during regex compilation.
/// The text contains a human-readable error message, and the offset is the
/// number of pattern characters consumed when parsing stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    pub text: String,
    pub offset: usize,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} at offset {}", self.text, self.offset)
    }
}

impl std::error::Error for Error {}

/// Represents the state used to parse a regex.
struct Parser<I: Iterator<Item = u32>> {
    /// The remaining input.
    input: Peekable<I>,

    /// Number of pattern characters consumed so far.
    offset: usize,

    /// The nodes built so far.
    arena: Arena,

    /// Number of capturing groups, including the root.
    group_count: usize,

    /// How many parenthesized groups enclose the current position.
    group_depth: usize,
}

impl<I: Iterator<Item = u32>> Parser<I> {
    fn error<T>(&self, text: &str) -> Result<T, Error> {
        Err(Error {
            text: text.to_string(),
            offset: self.offset,
        })
    }

    /// Peek at the next character.
    /// Code points which are not chars peek as char::MAX, which is never syntax.
    fn peek(&mut self) -> Option<char> {
        self.input.peek().copied().map(to_char_sat)
    }

    /// \return the next raw code point.
    fn next(&mut self) -> Option<u32> {
        let c = self.input.next();
        if c.is_some() {
            self.offset += 1;
        }
        c
    }

    /// If our contents begin with the char c, consume it from our contents
    /// and return true. Otherwise return false.
    fn try_consume(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.next();
            true
        } else {
            false
        }
    }

    fn try_parse(mut self) -> Result<ir::Regex, Error> {
        let root = self.new_group()?;
        debug_assert!(root == ROOT, "Root group must be the first node");
        let body = self.consume_list()?;
        self.arena.set_group_body(root, body);
        if self.peek().is_some() {
            return self.error("unexpected trailing character");
        }
        log::trace!(
            "parsed {} nodes, {} groups",
            self.arena.len(),
            self.group_count
        );
        Ok(ir::Regex {
            nodes: self.arena.into_nodes(),
            group_count: self.group_count,
        })
    }

    /// Append a group node, assigning it the next slot.
    fn new_group(&mut self) -> Result<NodeID, Error> {
        if self.group_count >= MAX_CAPTURE_GROUPS {
            return self.error("capture group count limit exceeded");
        }
        let slot = self.group_count as CaptureGroupID;
        self.group_count += 1;
        Ok(self.arena.push(NodeKind::Group { body: None, slot }))
    }

    /// An optional start anchor, a chain of elements, and optionally a `|`
    /// followed by another list.
    fn consume_list(&mut self) -> Result<NodeID, Error> {
        let anchor = if self.try_consume('^') {
            Some(self.arena.push(NodeKind::StartAnchor))
        } else {
            None
        };
        let element = self.consume_element()?;
        let head = match anchor {
            Some(anchor) => {
                self.arena.set_next(anchor, element);
                anchor
            }
            None => element,
        };
        if self.try_consume('|') {
            let right = self.consume_list()?;
            return Ok(self.arena.push(NodeKind::Alternation { left: head, right }));
        }
        Ok(head)
    }

    /// Whether the current element chain stops here.
    /// A stray quantifier stops the chain and is reported by whoever sees it next.
    fn at_chain_end(&mut self) -> bool {
        matches!(self.peek(), None | Some('|') | Some(')') | Some('*') | Some('+'))
    }

    /// A sibling chain of quantified atoms, returning the head.
    fn consume_element(&mut self) -> Result<NodeID, Error> {
        let head = self.consume_quantified_atom()?;
        let mut tail = head;
        while !self.at_chain_end() {
            let next = self.consume_quantified_atom()?;
            self.arena.set_next(tail, next);
            tail = next;
        }
        Ok(head)
    }

    fn consume_quantified_atom(&mut self) -> Result<NodeID, Error> {
        let atom = self.consume_atom()?;
        match self.try_consume_quantifier()? {
            Some(quant) => Ok(self.arena.push(NodeKind::Greedy { body: atom, quant })),
            None => Ok(atom),
        }
    }

    fn consume_atom(&mut self) -> Result<NodeID, Error> {
        match self.peek() {
            Some('(') => {
                self.next();
                let group = self.new_group()?;
                self.group_depth += 1;
                let body = self.consume_list()?;
                self.group_depth -= 1;
                self.arena.set_group_body(group, body);
                if !self.try_consume(')') {
                    return self.error("expected closing parenthesis");
                }
                Ok(group)
            }
            Some('[') => {
                self.next();
                self.consume_bracket()
            }
            Some('$') => {
                self.next();
                Ok(self.arena.push(NodeKind::EndAnchor))
            }
            Some('.') => {
                self.next();
                Ok(self.arena.push(NodeKind::AnyChar))
            }
            _ => {
                let c = self.consume_char()?;
                Ok(self.arena.push(NodeKind::Char(c)))
            }
        }
    }

    /// A literal or escaped character.
    fn consume_char(&mut self) -> Result<u32, Error> {
        match self.peek() {
            None if self.group_depth > 0 => self.error("expected closing parenthesis"),
            None => self.error("letter expected"),
            Some('\\') => {
                self.next();
                self.consume_escape()
            }
            Some(c) if is_metachar(c) => self.error("letter expected"),
            Some(_) => match self.next() {
                Some(c) => Ok(c),
                None => self.error("letter expected"),
            },
        }
    }

    /// The character after a backslash.
    fn consume_escape(&mut self) -> Result<u32, Error> {
        let c = match self.next() {
            Some(c) => c,
            None => return self.error("letter expected"),
        };
        let escaped = match to_char_sat(c) {
            'n' => '\n' as u32,
            't' => '\t' as u32,
            'r' => '\r' as u32,
            'f' => 0x0C,
            _ => c,
        };
        Ok(escaped)
    }

    /// Append a class member after \p tail, or start the chain.
    fn push_member(&mut self, chain: &mut Option<(NodeID, NodeID)>, kind: NodeKind) {
        let id = self.arena.push(kind);
        match chain {
            Some((_, tail)) => {
                self.arena.set_next(*tail, id);
                *tail = id;
            }
            None => *chain = Some((id, id)),
        }
    }

    /// The contents of a bracket, after the opening `[`.
    fn consume_bracket(&mut self) -> Result<NodeID, Error> {
        let negated = self.try_consume('^');

        // (head, tail) of the member chain.
        let mut chain = None;

        // A member which may yet turn out to be the start of a range.
        // A leading ']' or '-' is an ordinary member.
        let mut pending = match self.peek() {
            Some(']') | Some('-') => self.next(),
            _ => None,
        };

        while !matches!(self.peek(), None | Some(']')) {
            match pending {
                Some(first) if self.peek() == Some('-') => {
                    self.next();
                    if matches!(self.peek(), None | Some(']')) {
                        return self.error("unfinished range");
                    }
                    let last = self.consume_char()?;
                    if first > last {
                        return self.error("invalid range");
                    }
                    self.push_member(&mut chain, NodeKind::Range { first, last });
                    pending = None;
                }
                _ => {
                    if let Some(c) = pending {
                        self.push_member(&mut chain, NodeKind::Char(c));
                    }
                    pending = Some(self.consume_char()?);
                }
            }
        }
        if let Some(c) = pending {
            self.push_member(&mut chain, NodeKind::Char(c));
        }
        if !self.try_consume(']') {
            return self.error("expected closing bracket");
        }
        let members = match chain {
            Some((head, _)) => head,
            None => return self.error("letter expected"),
        };
        Ok(self.arena.push(if negated {
            NodeKind::NegatedClass { members }
        } else {
            NodeKind::Class { members }
        }))
    }

    fn try_consume_quantifier(&mut self) -> Result<Option<Quantifier>, Error> {
        let quant = match self.peek() {
            Some('*') => Quantifier::new(0, Quantifier::UNBOUNDED),
            Some('+') => Quantifier::new(1, Quantifier::UNBOUNDED),
            Some('?') => Quantifier::new(0, 1),
            Some('{') => {
                self.next();
                return self.consume_braced_quantifier().map(Some);
            }
            _ => return Ok(None),
        };
        self.next();
        Ok(Some(quant))
    }

    /// `{n}`, `{n,}` or `{n,m}`, after the opening brace.
    fn consume_braced_quantifier(&mut self) -> Result<Quantifier, Error> {
        let min = self.consume_number()?;
        let max = match self.peek() {
            Some('}') => {
                self.next();
                min
            }
            Some(',') => {
                self.next();
                let max = if self.peek().map_or(false, |c| c.is_ascii_digit()) {
                    self.consume_number()?
                } else {
                    Quantifier::UNBOUNDED
                };
                if !self.try_consume('}') {
                    return self.error("missing separator or closing brace");
                }
                max
            }
            _ => return self.error("missing separator or closing brace"),
        };
        if min > max {
            return self.error("invalid range");
        }
        Ok(Quantifier::new(min, max))
    }

    /// A decimal repetition count. Counts must stay below the unbounded sentinel.
    fn consume_number(&mut self) -> Result<u16, Error> {
        let mut result: u32 = 0;
        let mut digits = 0;
        while let Some(d) = self.peek().and_then(|c| c.to_digit(10)) {
            self.next();
            digits += 1;
            result = result * 10 + d;
            if result >= u32::from(Quantifier::UNBOUNDED) {
                return self.error("numeric constant overflow");
            }
        }
        if digits == 0 {
            return self.error("number expected");
        }
        Ok(result as u16)
    }
}

/// Try parsing a given pattern.
/// Return the resulting graph, or an Error describing why parsing stopped.
pub fn try_parse<I>(pattern: I) -> Result<ir::Regex, Error>
where
    I: Iterator<Item = u32>,
{
    let parser = Parser {
        input: pattern.peekable(),
        offset: 0,
        arena: Arena::new(),
        group_count: 0,
        group_depth: 0,
    };
    parser.try_parse()
}
