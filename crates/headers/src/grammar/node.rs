//! Grammar nodes and the combinators used to compose them.
//!
//! A [`Grammar`] is plain data: a tree of primitive matchers glued together by
//! sequencing, ordered alternation and repetition. Because a grammar holds no
//! per-call state it can be built once and shared between threads freely.
//!
//! Grammars are normally written with the free functions in this module and the
//! chaining methods on [`Grammar`]:
//!
//! ```
//! use micro_security_headers::grammar::{choice, digits, lit, seq, stri, Tag};
//!
//! let protection = seq([
//!     choice([lit("0"), lit("1")]),
//!     seq([lit(";"), stri("mode="), stri("block")]).maybe(),
//! ])
//! .tag(Tag::Directive);
//!
//! assert!(protection.parse("1;MODE=block").is_ok());
//! assert!(digits().parse("42").is_ok());
//! ```

use std::fmt;

use super::capture::Tag;

/// A composed, side-effect free matcher over an input string.
#[derive(Debug, Clone)]
pub enum Grammar {
    /// Matches the literal text exactly.
    Literal(&'static str),
    /// Matches the literal text ignoring ASCII case.
    LiteralNoCase(&'static str),
    /// Matches a single byte accepted by the class.
    Char(CharClass),
    /// `*WSP` when not required, `1*WSP` when required.
    Whitespace { required: bool },
    /// Every element in order.
    Sequence(Vec<Grammar>),
    /// The first alternative that matches, in declaration order.
    Choice(Vec<Grammar>),
    /// The inner grammar or nothing. Never fails.
    Optional(Box<Grammar>),
    /// Greedy repetition, between `min` and `max` (unbounded when `None`) times.
    Repeat { inner: Box<Grammar>, min: usize, max: Option<usize> },
    /// Succeeds without consuming input when the inner grammar does not match here.
    Not(Box<Grammar>),
    /// Records the span matched by the inner grammar under a tag.
    Capture(Tag, Box<Grammar>),
}

/// A named predicate over a single ASCII byte.
///
/// Every class only accepts ASCII, so spans produced by the engine always fall on
/// `char` boundaries of the input.
#[derive(Clone, Copy)]
pub struct CharClass {
    name: &'static str,
    accepts: fn(u8) -> bool,
}

impl CharClass {
    pub const fn new(name: &'static str, accepts: fn(u8) -> bool) -> Self {
        Self { name, accepts }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn accepts(&self, byte: u8) -> bool {
        byte.is_ascii() && (self.accepts)(byte)
    }
}

impl fmt::Debug for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CharClass").field(&self.name).finish()
    }
}

/// Matches `text` exactly.
pub fn lit(text: &'static str) -> Grammar {
    Grammar::Literal(text)
}

/// Matches `text` ignoring ASCII case, the captured text keeps the input casing.
pub fn stri(text: &'static str) -> Grammar {
    Grammar::LiteralNoCase(text)
}

/// Matches one byte of the class.
pub fn class(class: CharClass) -> Grammar {
    Grammar::Char(class)
}

/// Optional whitespace: `*( SP / HTAB )`
pub fn ows() -> Grammar {
    Grammar::Whitespace { required: false }
}

/// Required whitespace: `1*( SP / HTAB )`
pub fn rws() -> Grammar {
    Grammar::Whitespace { required: true }
}

/// Matches all of `items` in order.
pub fn seq<I>(items: I) -> Grammar
where
    I: IntoIterator<Item = Grammar>,
{
    Grammar::Sequence(items.into_iter().collect())
}

/// Ordered alternation, the first alternative that matches wins.
///
/// No alternative is retried after a later element fails, so when one keyword is a
/// prefix of another the longer keyword has to be declared first.
pub fn choice<I>(alternatives: I) -> Grammar
where
    I: IntoIterator<Item = Grammar>,
{
    Grammar::Choice(alternatives.into_iter().collect())
}

/// Negative lookahead.
pub fn not(grammar: Grammar) -> Grammar {
    Grammar::Not(Box::new(grammar))
}

/// `1*DIGIT`
pub fn digits() -> Grammar {
    class(super::common::DIGIT).repeat(1)
}

impl Grammar {
    /// `self` followed by `next`.
    #[must_use]
    pub fn then(self, next: Grammar) -> Grammar {
        match self {
            Grammar::Sequence(mut items) => {
                items.push(next);
                Grammar::Sequence(items)
            }
            first => Grammar::Sequence(vec![first, next]),
        }
    }

    /// `self` or, failing that, `other`.
    #[must_use]
    pub fn or(self, other: Grammar) -> Grammar {
        match self {
            Grammar::Choice(mut alternatives) => {
                alternatives.push(other);
                Grammar::Choice(alternatives)
            }
            first => Grammar::Choice(vec![first, other]),
        }
    }

    #[must_use]
    pub fn maybe(self) -> Grammar {
        Grammar::Optional(Box::new(self))
    }

    /// At least `min` repetitions, no upper bound.
    #[must_use]
    pub fn repeat(self, min: usize) -> Grammar {
        Grammar::Repeat { inner: Box::new(self), min, max: None }
    }

    /// Between `min` and `max` repetitions, inclusive.
    #[must_use]
    pub fn repeat_between(self, min: usize, max: usize) -> Grammar {
        Grammar::Repeat { inner: Box::new(self), min, max: Some(max) }
    }

    /// Exactly `count` repetitions.
    #[must_use]
    pub fn times(self, count: usize) -> Grammar {
        self.repeat_between(count, count)
    }

    #[must_use]
    pub fn tag(self, tag: Tag) -> Grammar {
        Grammar::Capture(tag, Box::new(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn then_flattens_sequences() {
        let grammar = lit("a").then(lit("b")).then(lit("c"));
        match grammar {
            Grammar::Sequence(items) => assert_eq!(items.len(), 3),
            other => panic!("expected a sequence, got {other:?}"),
        }
    }

    #[test]
    fn or_flattens_choices() {
        let grammar = lit("a").or(lit("b")).or(lit("c"));
        match grammar {
            Grammar::Choice(items) => assert_eq!(items.len(), 3),
            other => panic!("expected a choice, got {other:?}"),
        }
    }

    #[test]
    fn char_class_rejects_non_ascii() {
        let any = CharClass::new("any", |_| true);
        assert!(any.accepts(b'a'));
        assert!(!any.accepts(0xC3));
        assert_eq!(format!("{any:?}"), "CharClass(\"any\")");
    }
}
