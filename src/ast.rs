// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::charclass::CharClass;

/// A node of the expression tree.
///
/// Every node is immutable once constructed: children are attached at
/// construction only, so a tree is a pure value that can be shared between
/// threads and compiled any number of times, always producing the same text.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// An exact text run. Every regex metacharacter in the text is
    /// backslash-escaped when the node is compiled.
    Literal(String),

    /// `.`
    AnyChar,

    /// `^`
    BeginLine,

    /// `$`
    EndLine,

    /// A single character from a character class.
    CharClass(CharClass),

    /// A quantified sub-expression, e.g. `x*`, `x{2,4}` or `x+?`.
    Repetition(Repetition),

    /// A non-backtracking group, `(?>...)`.
    Atomic(Box<Expression>),

    /// A zero-width assertion around a sub-expression, e.g. `(?=...)`.
    Lookaround(Lookaround),

    /// A capturing group, `(...)` or `(?<name>...)`.
    Capture(CaptureGroup),

    /// A reference to a capture group elsewhere in the same tree,
    /// `\N` or `\k<name>`.
    BackReference(BackReference),

    /// Ordered concatenation of sub-expressions.
    Sequence(Vec<Expression>),

    /// Alternation, `a|b|c`. Binds loosest of all operators.
    Choice(Vec<Expression>),
}

/// A quantifier applied to a single child expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Repetition {
    pub child: Box<Expression>,
    pub kind: RepetitionKind,
    pub mode: Greediness,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepetitionKind {
    /// `?`, zero or one.
    Optional,
    /// `*`, zero or more.
    ZeroOrMore,
    /// `+`, one or more.
    OneOrMore,
    /// `{n}`, exactly `n` times.
    Exactly(usize),
    /// `{min,max}`, between `min` and `max` times (both inclusive).
    Between(usize, usize),
    /// `{n,}`, at least `n` times.
    AtLeast(usize),
}

/// How a repetition consumes input: preferring the longest match (greedy,
/// the default), the shortest match (lazy, `?` suffix), or the longest
/// match without backtracking (possessive, `+` suffix).
///
/// Exactly one mode applies to a repetition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Greediness {
    #[default]
    Greedy,
    Lazy,
    Possessive,
}

/// A zero-width assertion. Lookarounds never capture and never consume
/// capture-group numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct Lookaround {
    pub kind: LookaroundKind,
    pub child: Box<Expression>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookaroundKind {
    /// `(?=...)`
    PositiveLookahead,
    /// `(?!...)`
    NegativeLookahead,
    /// `(?<=...)`
    PositiveLookbehind,
    /// `(?<!...)`
    NegativeLookbehind,
}

/// The identity of a capture group.
///
/// Identity is allocated once per constructed group and survives cloning:
/// two structurally identical groups built by separate constructor calls
/// are distinct groups, while clones of one handle are the same group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(u64);

impl GroupId {
    pub(crate) fn value(self) -> u64 {
        self.0
    }
}

static NEXT_GROUP_ID: AtomicU64 = AtomicU64::new(1);

/// A capturing group node.
///
/// The handle is cheap to clone; the typical flow is to insert one clone
/// into the tree and keep another for building back references and
/// replacement parts. The group's number is positional and is assigned by
/// the compiler, see [`crate::compile`].
#[derive(Debug, Clone)]
pub struct CaptureGroup {
    id: GroupId,
    name: Option<String>,
    child: Arc<Expression>,
}

impl CaptureGroup {
    pub(crate) fn new(child: Expression, name: Option<String>) -> Self {
        CaptureGroup {
            id: GroupId(NEXT_GROUP_ID.fetch_add(1, Ordering::Relaxed)),
            name,
            child: Arc::new(child),
        }
    }

    pub fn id(&self) -> GroupId {
        self.id
    }

    /// The group's name, if it was built with [`crate::builder::capture_named`].
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub(crate) fn child(&self) -> &Expression {
        &self.child
    }
}

// Equality of capture groups is identity, not structure.
impl PartialEq for CaptureGroup {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// A weak, non-owning reference to a capture group.
///
/// Only the relation is stored: the referenced group must appear in the
/// same tree, otherwise compiling fails with
/// [`crate::ForgeError::UnboundGroup`].
#[derive(Debug, Clone, PartialEq)]
pub struct BackReference {
    id: GroupId,
    name: Option<String>,
}

impl BackReference {
    pub(crate) fn new(group: &CaptureGroup) -> Self {
        BackReference {
            id: group.id(),
            name: group.name().map(str::to_owned),
        }
    }

    pub fn id(&self) -> GroupId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
