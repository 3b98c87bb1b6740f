//! The matching engine.
//!
//! Matching is a PEG style walk over the [`Grammar`] tree:
//!
//! - sequences fail as soon as one element fails
//! - alternation commits to the first alternative that succeeds
//! - repetition is greedy and never gives input back
//!
//! Every construct that can fail after having recorded captures rolls the capture
//! stack back to where it started, so a failed branch never leaks captures into the
//! result. The engine also remembers the furthest offset any primitive reached, which
//! is reported in [`MatchFailure`] for diagnostics.

use crate::ensure;

use super::capture::{Capture, Match, MatchFailure};
use super::node::Grammar;

struct MatchState<'i> {
    input: &'i [u8],
    furthest: usize,
    captures: Vec<Capture>,
}

impl MatchState<'_> {
    #[inline]
    fn reached(&mut self, pos: usize) {
        if pos > self.furthest {
            self.furthest = pos;
        }
    }
}

impl Grammar {
    /// Matches the grammar against the whole of `input`.
    ///
    /// # Errors
    ///
    /// Returns [`MatchFailure`] when the grammar does not match, or matches only a
    /// prefix of `input`.
    pub fn parse(&self, input: &str) -> Result<Match, MatchFailure> {
        let (end, state) = self.run(input);
        let end = end.ok_or(MatchFailure::new(state.furthest))?;
        ensure!(end == input.len(), MatchFailure::new(end.max(state.furthest)));
        Ok(Match::new(end, state.captures))
    }

    /// Matches the grammar against a prefix of `input`.
    ///
    /// # Errors
    ///
    /// Returns [`MatchFailure`] when the grammar does not match at offset zero.
    pub fn parse_prefix(&self, input: &str) -> Result<Match, MatchFailure> {
        let (end, state) = self.run(input);
        let end = end.ok_or(MatchFailure::new(state.furthest))?;
        Ok(Match::new(end, state.captures))
    }

    fn run<'i>(&self, input: &'i str) -> (Option<usize>, MatchState<'i>) {
        let mut state = MatchState { input: input.as_bytes(), furthest: 0, captures: Vec::new() };
        let end = self.match_at(&mut state, 0);
        (end, state)
    }

    fn match_at(&self, state: &mut MatchState<'_>, pos: usize) -> Option<usize> {
        match self {
            Grammar::Literal(text) => match_literal(state, pos, text.as_bytes(), false),
            Grammar::LiteralNoCase(text) => match_literal(state, pos, text.as_bytes(), true),
            Grammar::Char(class) => match state.input.get(pos) {
                Some(&byte) if class.accepts(byte) => Some(pos + 1),
                _ => {
                    state.reached(pos);
                    None
                }
            },
            Grammar::Whitespace { required } => {
                let end = pos + state.input[pos..].iter().take_while(|b| matches!(b, b' ' | b'\t')).count();
                if *required && end == pos {
                    state.reached(pos);
                    return None;
                }
                Some(end)
            }
            Grammar::Sequence(items) => {
                let mark = state.captures.len();
                let mut cursor = pos;
                for item in items {
                    match item.match_at(state, cursor) {
                        Some(next) => cursor = next,
                        None => {
                            state.captures.truncate(mark);
                            return None;
                        }
                    }
                }
                Some(cursor)
            }
            Grammar::Choice(alternatives) => {
                let mark = state.captures.len();
                for alternative in alternatives {
                    if let Some(end) = alternative.match_at(state, pos) {
                        return Some(end);
                    }
                    state.captures.truncate(mark);
                }
                None
            }
            Grammar::Optional(inner) => {
                let mark = state.captures.len();
                inner.match_at(state, pos).or_else(|| {
                    state.captures.truncate(mark);
                    Some(pos)
                })
            }
            Grammar::Repeat { inner, min, max } => {
                let mark = state.captures.len();
                let mut cursor = pos;
                let mut count = 0;
                while max.is_none_or(|max| count < max) {
                    let iteration_mark = state.captures.len();
                    match inner.match_at(state, cursor) {
                        Some(next) => {
                            count += 1;
                            // an empty iteration would repeat forever
                            if next == cursor {
                                break;
                            }
                            cursor = next;
                        }
                        None => {
                            state.captures.truncate(iteration_mark);
                            break;
                        }
                    }
                }
                if count < *min {
                    state.captures.truncate(mark);
                    return None;
                }
                Some(cursor)
            }
            Grammar::Not(inner) => {
                let mark = state.captures.len();
                let furthest = state.furthest;
                let matched = inner.match_at(state, pos).is_some();
                state.captures.truncate(mark);
                // lookahead probes are not progress
                state.furthest = furthest;
                if matched {
                    state.reached(pos);
                    None
                } else {
                    Some(pos)
                }
            }
            Grammar::Capture(tag, inner) => {
                let mark = state.captures.len();
                let end = inner.match_at(state, pos)?;
                let children = state.captures.split_off(mark);
                state.captures.push(Capture::new(*tag, pos..end, children));
                Some(end)
            }
        }
    }
}

fn match_literal(state: &mut MatchState<'_>, pos: usize, expected: &[u8], ignore_case: bool) -> Option<usize> {
    let available = &state.input[pos..];
    let common = available
        .iter()
        .zip(expected)
        .take_while(|(actual, wanted)| if ignore_case { actual.eq_ignore_ascii_case(wanted) } else { actual == wanted })
        .count();

    if common == expected.len() {
        Some(pos + common)
    } else {
        state.reached(pos + common);
        None
    }
}
