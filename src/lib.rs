// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

//! Build regular expressions programmatically instead of writing pattern
//! strings by hand: compose an immutable expression tree with the
//! functions of the [`builder`] module, then [`compile`] it to PCRE-flavor
//! pattern text. Capture groups keep their identity across the tree, so
//! back references and replacement templates always resolve to the right
//! group numbers.
//!
//! ```
//! use regex_forge::builder::{back_reference, capture, one_or_more};
//! use regex_forge::{compile, replacement, sequence, CharClass};
//!
//! // (\w+)=\1
//! let key = capture(one_or_more(CharClass::word_char()));
//! let tree = sequence![&key, '=', back_reference(&key)];
//!
//! let pattern = compile(&tree).unwrap();
//! assert_eq!(pattern.as_str(), "(\\w+)=\\1");
//!
//! let template = pattern.replacement_text(&replacement![&key, "=redacted"]).unwrap();
//! assert_eq!(template, "$1=redacted");
//! ```

mod ast;
mod charclass;
mod compiler;
mod error;
mod printer;
mod replacement;

pub mod builder;

pub use ast::{
    BackReference, CaptureGroup, Expression, Greediness, GroupId, Lookaround, LookaroundKind,
    Repetition, RepetitionKind,
};
pub use charclass::{CharClass, PresetCharSet};
pub use compiler::{compile, Pattern};
pub use error::ForgeError;
pub use replacement::{Replacement, ReplacementPart};
