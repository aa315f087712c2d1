// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use thiserror::Error;

/// The error type for building and compiling expression trees.
///
/// All failures are reported synchronously at construction or compile time.
/// There is no I/O and therefore no transient-failure class: a failed call
/// has to be fixed at the call site, it can not be retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForgeError {
    /// A builder or compile call received a value it can not work with,
    /// e.g. an empty character set, `min > max` repetition bounds, or the
    /// same capture group node inserted twice into one tree.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A character range where the start code point is greater than
    /// the end code point, e.g. `'z'..'a'`.
    #[error("invalid character range '{start}'..'{end}'")]
    InvalidRange { start: char, end: char },

    /// A back reference or replacement part refers to a capture group
    /// that is not part of the compiled expression tree.
    #[error("unbound capture group{}", .name.as_deref().map(|n| format!(" \"{}\"", n)).unwrap_or_default())]
    UnboundGroup { name: Option<String> },

    /// A capture group name that is not a valid group identifier
    /// (letters, digits and underscores, not starting with a digit),
    /// or a name used by more than one group in the same tree.
    #[error("invalid capture group name \"{0}\"")]
    InvalidName(String),
}
