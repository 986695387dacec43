use crate::exec;
use crate::indexing::{AsciiInput, InputIndexer, Utf8Input};
use crate::ir::{self, Node};
use crate::parse;
use crate::startpredicate::{self, StartPredicate};
use crate::types::CaptureGroupID;

#[cfg(feature = "utf16")]
use crate::indexing::Ucs2Input;

use core::str::FromStr;

pub use crate::exec::Matches;
pub use crate::ir::Dump;
pub use crate::types::Slot;
pub use parse::Error;

/// Range is used to express the extent of a match, as indexes into the input
/// string.
pub type Range = core::ops::Range<usize>;

/// The capture table: one slot per capturing group, slot 0 being the whole
/// match. A table belongs to one match attempt at a time, so threads sharing
/// a Regex each use their own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captures {
    slots: Vec<Slot>,
}

impl Captures {
    /// Construct a table with \p group_count absent slots.
    pub fn new(group_count: usize) -> Self {
        Captures {
            slots: vec![Slot::default(); group_count],
        }
    }

    /// The number of slots, including slot 0.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Access a slot by index. None means there is no such group; an absent
    /// capture is a Slot without a begin.
    #[inline]
    pub fn slot(&self, idx: usize) -> Option<Slot> {
        self.slots.get(idx).copied()
    }

    /// Access a group's range by index, or None if the group did not
    /// participate or does not exist.
    #[inline]
    pub fn group(&self, idx: usize) -> Option<Range> {
        self.slots.get(idx).and_then(Slot::range)
    }

    /// Return an iterator over the slots.
    pub fn iter(&self) -> impl Iterator<Item = &Slot> + '_ {
        self.slots.iter()
    }

    /// Size the table for \p group_count groups, and clear it.
    pub(crate) fn prepare(&mut self, group_count: usize) {
        self.slots.resize(group_count, Slot::default());
        self.reset();
    }

    /// Reset every slot to absent.
    pub(crate) fn reset(&mut self) {
        self.slots.iter_mut().for_each(Slot::reset);
    }

    pub(crate) fn open(&mut self, id: CaptureGroupID, begin: usize) {
        if let Some(slot) = self.slots.get_mut(id as usize) {
            slot.begin = Some(begin);
            slot.len = 0;
        }
    }

    pub(crate) fn close(&mut self, id: CaptureGroupID, end: usize) {
        if let Some(slot) = self.slots.get_mut(id as usize) {
            if let Some(begin) = slot.begin {
                slot.len = end - begin;
            }
        }
    }

    pub(crate) fn clear(&mut self, id: CaptureGroupID) {
        if let Some(slot) = self.slots.get_mut(id as usize) {
            slot.reset();
        }
    }
}

/// A Match represents a portion of a string which was found to match a Regex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// The total range of the match. Note this may be empty, if the regex
    /// matched an empty string.
    pub range: Range,

    /// The list of captures. This has length equal to the number of capturing
    /// groups in the regex, not counting the whole match. For each capture,
    /// if the value is None, that group did not match (for example, it was in
    /// a not-taken branch of an alternation).
    pub captures: Vec<Option<Range>>,
}

impl Match {
    pub(crate) fn from_captures(range: Range, captures: &Captures) -> Self {
        Match {
            range,
            captures: captures.iter().skip(1).map(Slot::range).collect(),
        }
    }

    /// Access a group by index, using the convention of Python's group()
    /// function. Index 0 is the total match, index 1 is the first capture
    /// group.
    #[inline]
    pub fn group(&self, idx: usize) -> Option<Range> {
        if idx == 0 {
            Some(self.range.clone())
        } else {
            self.captures.get(idx - 1).cloned().flatten()
        }
    }

    /// Returns the range over the starting and ending offsets of the match.
    ///
    /// This is a convenience function to work around
    /// the fact that Range does not support Copy.
    #[inline]
    pub fn range(&self) -> Range {
        self.range.clone()
    }

    /// Returns the starting offset of the match.
    #[inline]
    pub fn start(&self) -> usize {
        self.range.start
    }

    /// Returns the ending offset of the match.
    #[inline]
    pub fn end(&self) -> usize {
        self.range.end
    }

    /// Return an iterator over a Match. The first returned value is the total
    /// match, and subsequent values represent the capture groups.
    #[inline]
    pub fn groups(&self) -> impl Iterator<Item = Option<Range>> + '_ {
        (0..=self.captures.len()).map(move |idx| self.group(idx))
    }
}

/// A Regex is the compiled version of a pattern.
#[derive(Debug, Clone)]
pub struct Regex {
    nodes: Box<[Node]>,
    group_count: usize,
    start_predicate: StartPredicate,
}

impl From<ir::Regex> for Regex {
    fn from(ire: ir::Regex) -> Self {
        let start_predicate = startpredicate::predicate_for_regex(&ire.nodes);
        Regex {
            nodes: ire.nodes,
            group_count: ire.group_count,
            start_predicate,
        }
    }
}

impl Regex {
    /// Construct a regex by parsing `pattern`.
    /// An Error may be returned if the syntax is invalid.
    /// Prefer to cache a Regex which is intended to be used more than once.
    #[inline]
    pub fn new(pattern: &str) -> Result<Regex, Error> {
        Self::from_unicode(pattern.chars().map(u32::from))
    }

    /// Construct a regex by parsing `pattern`, where `pattern` is an iterator
    /// of `u32` code points. This allows parsing patterns from strings in
    /// other encodings, such as UTF-16 or UTF-32.
    pub fn from_unicode<I>(pattern: I) -> Result<Regex, Error>
    where
        I: Iterator<Item = u32>,
    {
        let ire = match parse::try_parse(pattern) {
            Ok(ire) => ire,
            Err(err) => {
                log::debug!("pattern rejected: {}", err);
                return Err(err);
            }
        };
        let re = Regex::from(ire);
        log::debug!(
            "compiled pattern: {} nodes, {} groups, start predicate {:?}",
            re.nodes.len(),
            re.group_count,
            re.start_predicate
        );
        if log::log_enabled!(log::Level::Trace) {
            log::trace!("node graph:\n{}", re.dump());
        }
        Ok(re)
    }

    pub(crate) fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub(crate) fn start_predicate(&self) -> StartPredicate {
        self.start_predicate
    }

    /// The number of capture groups, including group 0 for the whole match.
    #[inline]
    pub fn group_count(&self) -> usize {
        self.group_count
    }

    /// Construct an empty capture table sized for this regex.
    #[inline]
    pub fn captures(&self) -> Captures {
        Captures::new(self.group_count)
    }

    /// Return a Display value which lists the compiled node graph.
    #[inline]
    pub fn dump(&self) -> Dump<'_> {
        Dump::new(&self.nodes)
    }

    /// Test whether the regex matches all of `input`, recording groups in
    /// `captures`. The table is resized if it was made for another regex.
    pub fn full_match_input<Input: InputIndexer>(
        &self,
        input: Input,
        captures: &mut Captures,
    ) -> bool {
        captures.prepare(self.group_count);
        exec::full_match(self, input, captures)
    }

    /// Search `input` within `range` (default: all of it) for the first
    /// match, recording groups in `captures`. `^` and `$` match at the
    /// range bounds.
    ///
    /// Panics if the range is out of bounds or splits an element.
    pub fn search_input<Input: InputIndexer>(
        &self,
        input: Input,
        range: Option<Range>,
        captures: &mut Captures,
    ) -> Option<Range> {
        let range = range.unwrap_or(0..input.len());
        assert!(
            range.start <= range.end
                && range.end <= input.len()
                && input.is_boundary(range.start)
                && input.is_boundary(range.end),
            "Invalid search range {:?}",
            range
        );
        captures.prepare(self.group_count);
        exec::search(self, input, range, captures)
    }

    fn full_match_impl<Input: InputIndexer>(&self, input: Input) -> Option<Match> {
        let mut captures = self.captures();
        if !exec::full_match(self, input, &mut captures) {
            return None;
        }
        Some(Match::from_captures(0..input.len(), &captures))
    }

    fn find_impl<Input: InputIndexer>(&self, input: Input, range: Option<Range>) -> Option<Match> {
        let mut captures = self.captures();
        let found = self.search_input(input, range, &mut captures)?;
        Some(Match::from_captures(found, &captures))
    }

    /// Test whether the regex matches all of `text`, returning the match with
    /// its groups.
    #[inline]
    pub fn full_match(&self, text: &str) -> Option<Match> {
        self.full_match_impl(Utf8Input::new(text))
    }

    /// Test whether the regex matches all of `text`.
    #[inline]
    pub fn is_full_match(&self, text: &str) -> bool {
        self.full_match(text).is_some()
    }

    /// Searches `text` to find the first match.
    #[inline]
    pub fn find(&self, text: &str) -> Option<Match> {
        self.find_impl(Utf8Input::new(text), None)
    }

    /// Searches `text` between the byte offsets of `range` to find the first
    /// match. `^` and `$` match at the ends of the range.
    ///
    /// Panics if the range is out of bounds or not on char boundaries.
    #[inline]
    pub fn find_in(&self, text: &str, range: Range) -> Option<Match> {
        self.find_impl(Utf8Input::new(text), Some(range))
    }

    /// Searches `text`, returning an iterator over non-overlapping matches.
    /// Note that the resulting Iterator borrows both the regex `'r` and the
    /// input string as `'t`.
    #[inline]
    pub fn find_iter<'r, 't>(&'r self, text: &'t str) -> Matches<'r, Utf8Input<'t>> {
        Matches::new(self, Utf8Input::new(text), 0)
    }

    /// Test whether the regex matches all of `bytes`, one byte per element.
    #[inline]
    pub fn full_match_bytes(&self, bytes: &[u8]) -> Option<Match> {
        self.full_match_impl(AsciiInput::new(bytes))
    }

    /// Searches `bytes`, one byte per element, to find the first match.
    /// Pattern literals above 0xFF never match.
    #[inline]
    pub fn find_bytes(&self, bytes: &[u8]) -> Option<Match> {
        self.find_impl(AsciiInput::new(bytes), None)
    }

    /// Searches `bytes`, returning an iterator over non-overlapping matches.
    #[inline]
    pub fn find_iter_bytes<'r, 't>(&'r self, bytes: &'t [u8]) -> Matches<'r, AsciiInput<'t>> {
        Matches::new(self, AsciiInput::new(bytes), 0)
    }

    /// Test whether the regex matches all of `units`, one UCS-2 code unit per
    /// element.
    #[cfg(feature = "utf16")]
    #[inline]
    pub fn full_match_ucs2(&self, units: &[u16]) -> Option<Match> {
        self.full_match_impl(Ucs2Input::new(units))
    }

    /// Searches `units`, one UCS-2 code unit per element, to find the first
    /// match.
    #[cfg(feature = "utf16")]
    #[inline]
    pub fn find_ucs2(&self, units: &[u16]) -> Option<Match> {
        self.find_impl(Ucs2Input::new(units), None)
    }
}

impl FromStr for Regex {
    type Err = Error;

    /// Attempts to parse a string into a regular expression
    #[inline]
    fn from_str(s: &str) -> Result<Self, Error> {
        Self::new(s)
    }
}
