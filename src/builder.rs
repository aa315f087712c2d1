// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

//! The construction surface: free functions that build expression nodes
//! from strings, characters, character classes and other expressions.
//!
//! Mixed-kind arguments all funnel through one coercion contract, the
//! `From`/`Into<Expression>` implementations below: anything that is an
//! `Expression`, `&str`, `String`, `char`, [`CharClass`] or
//! [`CaptureGroup`] can be passed where an expression is expected. For
//! ordered lists of mixed kinds there are the [`sequence!`] and [`choice!`]
//! macros:
//!
//! ```
//! use regex_forge::builder::{capture, one_or_more};
//! use regex_forge::{compile, sequence, CharClass};
//!
//! let word = capture(one_or_more(CharClass::word_char()));
//! let tree = sequence![word, '=', one_or_more(CharClass::digit())];
//! let pattern = compile(&tree).unwrap();
//! assert_eq!(pattern.as_str(), "(\\w+)=\\d+");
//! ```

use crate::ast::{
    BackReference, CaptureGroup, Expression, Greediness, Lookaround, LookaroundKind, Repetition,
    RepetitionKind,
};
use crate::charclass::CharClass;
use crate::replacement::{Replacement, ReplacementPart};

impl From<&str> for Expression {
    fn from(text: &str) -> Self {
        Expression::Literal(text.to_owned())
    }
}

impl From<String> for Expression {
    fn from(text: String) -> Self {
        Expression::Literal(text)
    }
}

impl From<char> for Expression {
    fn from(c: char) -> Self {
        Expression::Literal(c.to_string())
    }
}

impl From<CharClass> for Expression {
    fn from(class: CharClass) -> Self {
        Expression::CharClass(class)
    }
}

impl From<CaptureGroup> for Expression {
    fn from(group: CaptureGroup) -> Self {
        Expression::Capture(group)
    }
}

impl From<&CaptureGroup> for Expression {
    fn from(group: &CaptureGroup) -> Self {
        Expression::Capture(group.clone())
    }
}

/// Match the literal text `s`. Metacharacters are escaped on compilation.
pub fn string(s: &str) -> Expression {
    Expression::from(s)
}

/// Match the literal character `c`.
pub fn character(c: char) -> Expression {
    Expression::from(c)
}

/// Match the beginning of a line, `^`.
pub fn begin_line() -> Expression {
    Expression::BeginLine
}

/// Match the end of a line, `$`.
pub fn end_line() -> Expression {
    Expression::EndLine
}

/// Match any character, `.`.
pub fn any_character() -> Expression {
    Expression::AnyChar
}

/// Match a single character from the given class.
pub fn char_class(class: CharClass) -> Expression {
    Expression::CharClass(class)
}

fn repetition(e: impl Into<Expression>, kind: RepetitionKind, mode: Greediness) -> Expression {
    Expression::Repetition(Repetition {
        child: Box::new(e.into()),
        kind,
        mode,
    })
}

/// Match the expression zero or one times, `?`.
pub fn optional(e: impl Into<Expression>) -> Expression {
    repetition(e, RepetitionKind::Optional, Greediness::Greedy)
}

/// Match the expression zero or one times, preferring zero, `??`.
pub fn optional_lazy(e: impl Into<Expression>) -> Expression {
    repetition(e, RepetitionKind::Optional, Greediness::Lazy)
}

/// Match the expression zero or one times without backtracking, `?+`.
pub fn optional_possessive(e: impl Into<Expression>) -> Expression {
    repetition(e, RepetitionKind::Optional, Greediness::Possessive)
}

/// Match the expression zero or more times, `*`.
pub fn zero_or_more(e: impl Into<Expression>) -> Expression {
    repetition(e, RepetitionKind::ZeroOrMore, Greediness::Greedy)
}

/// Match the expression zero or more times, preferring fewer, `*?`.
pub fn zero_or_more_lazy(e: impl Into<Expression>) -> Expression {
    repetition(e, RepetitionKind::ZeroOrMore, Greediness::Lazy)
}

/// Match the expression zero or more times without backtracking, `*+`.
pub fn zero_or_more_possessive(e: impl Into<Expression>) -> Expression {
    repetition(e, RepetitionKind::ZeroOrMore, Greediness::Possessive)
}

/// Match the expression one or more times, `+`.
pub fn one_or_more(e: impl Into<Expression>) -> Expression {
    repetition(e, RepetitionKind::OneOrMore, Greediness::Greedy)
}

/// Match the expression one or more times, preferring fewer, `+?`.
pub fn one_or_more_lazy(e: impl Into<Expression>) -> Expression {
    repetition(e, RepetitionKind::OneOrMore, Greediness::Lazy)
}

/// Match the expression one or more times without backtracking, `++`.
pub fn one_or_more_possessive(e: impl Into<Expression>) -> Expression {
    repetition(e, RepetitionKind::OneOrMore, Greediness::Possessive)
}

/// Match the expression exactly `n` times, `{n}`.
pub fn repeat(e: impl Into<Expression>, n: usize) -> Expression {
    repetition(e, RepetitionKind::Exactly(n), Greediness::Greedy)
}

/// Match the expression exactly `n` times, lazily, `{n}?`.
pub fn repeat_lazy(e: impl Into<Expression>, n: usize) -> Expression {
    repetition(e, RepetitionKind::Exactly(n), Greediness::Lazy)
}

/// Match the expression exactly `n` times without backtracking, `{n}+`.
pub fn repeat_possessive(e: impl Into<Expression>, n: usize) -> Expression {
    repetition(e, RepetitionKind::Exactly(n), Greediness::Possessive)
}

/// Match the expression between `min` and `max` times, `{min,max}`.
pub fn repeat_range(e: impl Into<Expression>, min: usize, max: usize) -> Expression {
    repetition(e, RepetitionKind::Between(min, max), Greediness::Greedy)
}

/// Match the expression between `min` and `max` times, preferring fewer,
/// `{min,max}?`.
pub fn repeat_range_lazy(e: impl Into<Expression>, min: usize, max: usize) -> Expression {
    repetition(e, RepetitionKind::Between(min, max), Greediness::Lazy)
}

/// Match the expression between `min` and `max` times without
/// backtracking, `{min,max}+`.
pub fn repeat_range_possessive(e: impl Into<Expression>, min: usize, max: usize) -> Expression {
    repetition(e, RepetitionKind::Between(min, max), Greediness::Possessive)
}

/// Match the expression at least `n` times, `{n,}`.
pub fn at_least(e: impl Into<Expression>, n: usize) -> Expression {
    repetition(e, RepetitionKind::AtLeast(n), Greediness::Greedy)
}

/// Match the expression at least `n` times, preferring fewer, `{n,}?`.
pub fn at_least_lazy(e: impl Into<Expression>, n: usize) -> Expression {
    repetition(e, RepetitionKind::AtLeast(n), Greediness::Lazy)
}

/// Match the expression at least `n` times without backtracking, `{n,}+`.
pub fn at_least_possessive(e: impl Into<Expression>, n: usize) -> Expression {
    repetition(e, RepetitionKind::AtLeast(n), Greediness::Possessive)
}

/// Match the expression in a non-backtracking (atomic) group, `(?>...)`.
pub fn atomic(e: impl Into<Expression>) -> Expression {
    Expression::Atomic(Box::new(e.into()))
}

fn lookaround(e: impl Into<Expression>, kind: LookaroundKind) -> Expression {
    Expression::Lookaround(Lookaround {
        kind,
        child: Box::new(e.into()),
    })
}

/// Assert that the expression matches ahead, without consuming, `(?=...)`.
pub fn positive_lookahead(e: impl Into<Expression>) -> Expression {
    lookaround(e, LookaroundKind::PositiveLookahead)
}

/// Assert that the expression does not match ahead, `(?!...)`.
pub fn negative_lookahead(e: impl Into<Expression>) -> Expression {
    lookaround(e, LookaroundKind::NegativeLookahead)
}

/// Assert that the expression matches behind the current position,
/// `(?<=...)`.
pub fn positive_lookbehind(e: impl Into<Expression>) -> Expression {
    lookaround(e, LookaroundKind::PositiveLookbehind)
}

/// Assert that the expression does not match behind the current position,
/// `(?<!...)`.
pub fn negative_lookbehind(e: impl Into<Expression>) -> Expression {
    lookaround(e, LookaroundKind::NegativeLookbehind)
}

/// Create a capture group for the given expression.
///
/// The returned handle is inserted into the tree (it converts into an
/// [`Expression`]) and can also be used to build back references and
/// replacement parts. Each call creates a distinct group, even for
/// structurally identical expressions.
pub fn capture(e: impl Into<Expression>) -> CaptureGroup {
    CaptureGroup::new(e.into(), None)
}

/// Create a named capture group, `(?<name>...)`.
///
/// The name must be an identifier of letters, digits and underscores, not
/// starting with a digit; it is validated when the tree is compiled.
pub fn capture_named(name: &str, e: impl Into<Expression>) -> CaptureGroup {
    CaptureGroup::new(e.into(), Some(name.to_owned()))
}

/// Re-match the text matched by `group`, `\N` or `\k<name>`.
///
/// The reference is weak: the group itself must appear in the same tree,
/// otherwise compiling fails with [`crate::ForgeError::UnboundGroup`].
pub fn back_reference(group: &CaptureGroup) -> Expression {
    Expression::BackReference(BackReference::new(group))
}

/// Match the given expressions one after another.
pub fn sequence(parts: Vec<Expression>) -> Expression {
    Expression::Sequence(parts)
}

/// Match one of the given expressions, `a|b|c`.
pub fn choice(alternatives: Vec<Expression>) -> Expression {
    Expression::Choice(alternatives)
}

/// Match a nonempty list of `e`, separated by `separator`:
/// `e (separator e)*`.
pub fn separated_by1(separator: impl Into<Expression>, e: impl Into<Expression>) -> Expression {
    let separator = separator.into();
    let e = e.into();
    sequence(vec![e.clone(), zero_or_more(sequence(vec![separator, e]))])
}

/// Match a possibly empty list of `e`, separated by `separator`.
pub fn separated_by(separator: impl Into<Expression>, e: impl Into<Expression>) -> Expression {
    optional(separated_by1(separator, e))
}

/// Match a nonempty list of `e`, separated by `separator`, with a
/// possessive repetition.
pub fn separated_by1_possessive(
    separator: impl Into<Expression>,
    e: impl Into<Expression>,
) -> Expression {
    let separator = separator.into();
    let e = e.into();
    sequence(vec![
        e.clone(),
        zero_or_more_possessive(sequence(vec![separator, e])),
    ])
}

/// Match a possibly empty list of `e`, separated by `separator`, with
/// possessive repetitions.
pub fn separated_by_possessive(
    separator: impl Into<Expression>,
    e: impl Into<Expression>,
) -> Expression {
    optional_possessive(separated_by1_possessive(separator, e))
}

/// Match a nonempty run of word characters, `\w+`.
pub fn word() -> Expression {
    one_or_more(CharClass::word_char())
}

/// Match a nonempty run of digits, `\d+`.
pub fn number() -> Expression {
    one_or_more(CharClass::digit())
}

/// Match a possibly empty run of whitespace, `\s*`.
pub fn whitespace() -> Expression {
    zero_or_more(CharClass::whitespace_char())
}

/// Match a nonempty run of whitespace, `\s+`.
pub fn whitespace1() -> Expression {
    one_or_more(CharClass::whitespace_char())
}

/// Build a replacement template from the given parts.
///
/// Strings, characters and capture-group handles coerce into
/// [`ReplacementPart`]; see also the [`replacement!`] macro.
pub fn replacement(parts: Vec<ReplacementPart>) -> Replacement {
    Replacement::new(parts)
}

/// Build a [`Sequence`](crate::Expression::Sequence) from a mixed-kind
/// argument list: expressions, strings, characters, character classes and
/// capture groups are all accepted.
#[macro_export]
macro_rules! sequence {
    ($($part:expr),* $(,)?) => {
        $crate::builder::sequence(vec![$($crate::Expression::from($part)),*])
    };
}

/// Build a [`Choice`](crate::Expression::Choice) from a mixed-kind
/// argument list.
#[macro_export]
macro_rules! choice {
    ($($alternative:expr),* $(,)?) => {
        $crate::builder::choice(vec![$($crate::Expression::from($alternative)),*])
    };
}

/// Build a [`Replacement`](crate::Replacement) from a mixed-kind argument
/// list: strings, characters and capture-group handles are accepted.
#[macro_export]
macro_rules! replacement {
    ($($part:expr),* $(,)?) => {
        $crate::builder::replacement(vec![$($crate::ReplacementPart::from($part)),*])
    };
}
