//! Execution engine bits: full matches, searching, and iteration.

use crate::api::{Captures, Match, Range, Regex};
use crate::indexing::InputIndexer;
use crate::matcher::MatchAttempter;
use crate::startpredicate::StartPredicate;
use crate::types::ROOT;

/// Match the whole of \p input, filling \p captures.
/// On failure every slot is left absent.
pub(crate) fn full_match<Input: InputIndexer>(
    re: &Regex,
    input: Input,
    captures: &mut Captures,
) -> bool {
    let eol = input.len();
    let mut attempter = MatchAttempter::new(re.nodes(), input, 0, eol, captures);
    if attempter.run(ROOT, 0) == Some(eol) {
        return true;
    }
    attempter.reset();
    false
}

/// \return the next position at or after \p start where a match may begin,
/// according to the start predicate.
fn next_candidate<Input: InputIndexer>(
    predicate: StartPredicate,
    input: &Input,
    bounds: &Range,
    start: usize,
) -> Option<usize> {
    match predicate {
        StartPredicate::Arbitrary => Some(start),
        StartPredicate::StartAnchored if start == bounds.start => Some(start),
        StartPredicate::StartAnchored => None,
        StartPredicate::Literal(c) => input.find_element(start, bounds.end, c),
    }
}

/// Find the first substring of \p input within \p range which the pattern
/// matches. The range bounds are what `^` and `$` see.
pub(crate) fn search<Input: InputIndexer>(
    re: &Regex,
    input: Input,
    range: Range,
    captures: &mut Captures,
) -> Option<Range> {
    let start = range.start;
    search_from(re, input, range, start, captures)
}

/// Like search(), but begin trying candidates at \p start inside \p bounds.
/// Every candidate start, up to and including the end of the bounds, is
/// tried against the whole pattern from its root.
pub(crate) fn search_from<Input: InputIndexer>(
    re: &Regex,
    input: Input,
    bounds: Range,
    start: usize,
    captures: &mut Captures,
) -> Option<Range> {
    debug_assert!(bounds.start <= start && start <= bounds.end && bounds.end <= input.len());
    let mut attempter = MatchAttempter::new(re.nodes(), input, bounds.start, bounds.end, captures);
    let mut start = start;
    while let Some(candidate) = next_candidate(re.start_predicate(), &input, &bounds, start) {
        if let Some(end) = attempter.run(ROOT, candidate) {
            return Some(candidate..end);
        }
        start = match input.next_right_pos(candidate, bounds.end) {
            Some(next) => next,
            None => break,
        };
    }
    attempter.reset();
    None
}

/// A struct which enables iteration over non-overlapping matches.
#[derive(Debug)]
pub struct Matches<'r, Input: InputIndexer> {
    re: &'r Regex,
    input: Input,
    captures: Captures,
    offset: Option<usize>,
}

impl<'r, Input: InputIndexer> Matches<'r, Input> {
    pub(crate) fn new(re: &'r Regex, input: Input, start: usize) -> Self {
        Matches {
            re,
            input,
            captures: re.captures(),
            offset: Some(start),
        }
    }
}

impl<Input: InputIndexer> Iterator for Matches<'_, Input> {
    type Item = Match;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.offset?;
        let end = self.input.len();
        let found = search_from(self.re, self.input, 0..end, start, &mut self.captures);
        let range = match found {
            Some(range) => range,
            None => {
                self.offset = None;
                return None;
            }
        };
        // After an empty match, resume one element later so we make progress.
        self.offset = if range.is_empty() {
            self.input.next_right_pos(range.end, end)
        } else {
            Some(range.end)
        };
        Some(Match::from_captures(range, &self.captures))
    }
}
