// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use crate::error::ForgeError;

/// A single-character matcher.
///
/// A character class is a pure value: building one never fails, and the
/// same class always compiles to the same text. Range and emptiness
/// violations are reported when the class is compiled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharClass {
    /// A predefined class with a fixed escape token, e.g. `\d` or `\W`.
    Preset(PresetCharSet),

    /// An inclusive character range, `start-end` by code point order.
    Range { start: char, end_included: char },

    /// An explicit set of characters, e.g. `[abc]`.
    OneOf(Vec<char>),

    /// The union of several classes, merged into one bracket expression.
    Union(Vec<CharClass>),

    /// The complement of a class.
    ///
    /// Prefer [`CharClass::complement`] over building this variant directly:
    /// `complement` substitutes the paired preset token where one exists
    /// (e.g. digit to non-digit) and unwraps a double negation.
    Negated(Box<CharClass>),
}

/// Predefined character classes and their fixed tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetCharSet {
    /// `\d`
    Digit,
    /// `\D`
    NotDigit,
    /// `\w`
    Word,
    /// `\W`
    NotWord,
    /// `\s`
    Space,
    /// `\S`
    NotSpace,
    /// `\v`
    VerticalSpace,
    /// `\V`
    NotVerticalSpace,
    /// `\h`
    HorizontalSpace,
    /// `\H`
    NotHorizontalSpace,
    /// `.`
    Any,
}

impl PresetCharSet {
    pub(crate) fn token(&self) -> &'static str {
        match self {
            PresetCharSet::Digit => "\\d",
            PresetCharSet::NotDigit => "\\D",
            PresetCharSet::Word => "\\w",
            PresetCharSet::NotWord => "\\W",
            PresetCharSet::Space => "\\s",
            PresetCharSet::NotSpace => "\\S",
            PresetCharSet::VerticalSpace => "\\v",
            PresetCharSet::NotVerticalSpace => "\\V",
            PresetCharSet::HorizontalSpace => "\\h",
            PresetCharSet::NotHorizontalSpace => "\\H",
            PresetCharSet::Any => ".",
        }
    }

    // The paired preset, e.g. digit and non-digit.
    // `Any` has no preset complement.
    fn paired_complement(&self) -> Option<PresetCharSet> {
        let paired = match self {
            PresetCharSet::Digit => PresetCharSet::NotDigit,
            PresetCharSet::NotDigit => PresetCharSet::Digit,
            PresetCharSet::Word => PresetCharSet::NotWord,
            PresetCharSet::NotWord => PresetCharSet::Word,
            PresetCharSet::Space => PresetCharSet::NotSpace,
            PresetCharSet::NotSpace => PresetCharSet::Space,
            PresetCharSet::VerticalSpace => PresetCharSet::NotVerticalSpace,
            PresetCharSet::NotVerticalSpace => PresetCharSet::VerticalSpace,
            PresetCharSet::HorizontalSpace => PresetCharSet::NotHorizontalSpace,
            PresetCharSet::NotHorizontalSpace => PresetCharSet::HorizontalSpace,
            PresetCharSet::Any => return None,
        };
        Some(paired)
    }
}

impl CharClass {
    /// `\d`, the digits 0-9.
    pub fn digit() -> Self {
        CharClass::Preset(PresetCharSet::Digit)
    }

    /// `\D`, any character that is not a digit.
    pub fn non_digit() -> Self {
        CharClass::Preset(PresetCharSet::NotDigit)
    }

    /// `\w`, a word character (letter, digit or underscore).
    pub fn word_char() -> Self {
        CharClass::Preset(PresetCharSet::Word)
    }

    /// `\W`, any character that is not a word character.
    pub fn non_word_char() -> Self {
        CharClass::Preset(PresetCharSet::NotWord)
    }

    /// `\s`, a whitespace character.
    pub fn whitespace_char() -> Self {
        CharClass::Preset(PresetCharSet::Space)
    }

    /// `\S`, any character that is not whitespace.
    pub fn non_whitespace_char() -> Self {
        CharClass::Preset(PresetCharSet::NotSpace)
    }

    /// `\v`, a vertical whitespace character.
    pub fn vertical_whitespace() -> Self {
        CharClass::Preset(PresetCharSet::VerticalSpace)
    }

    /// `\V`, any character that is not vertical whitespace.
    pub fn non_vertical_whitespace() -> Self {
        CharClass::Preset(PresetCharSet::NotVerticalSpace)
    }

    /// `\h`, a horizontal whitespace character.
    pub fn horizontal_whitespace() -> Self {
        CharClass::Preset(PresetCharSet::HorizontalSpace)
    }

    /// `\H`, any character that is not horizontal whitespace.
    pub fn non_horizontal_whitespace() -> Self {
        CharClass::Preset(PresetCharSet::NotHorizontalSpace)
    }

    /// `.`, any character.
    pub fn any_char() -> Self {
        CharClass::Preset(PresetCharSet::Any)
    }

    /// An inclusive character range.
    ///
    /// The range is validated at compile time: `start` must not be greater
    /// than `end_included` by code point order.
    pub fn range(start: char, end_included: char) -> Self {
        CharClass::Range {
            start,
            end_included,
        }
    }

    /// A class matching exactly the characters of `chars`.
    pub fn one_of(chars: &str) -> Self {
        CharClass::OneOf(chars.chars().collect())
    }

    /// The union of the given classes, compiled into one bracket expression.
    pub fn union(classes: Vec<CharClass>) -> Self {
        CharClass::Union(classes)
    }

    /// The complement of this class.
    ///
    /// Presets are swapped for their paired token (digit to non-digit and
    /// so on), a double complement unwraps to the equivalent inner class,
    /// and everything else is marked negated and compiles to `[^...]`.
    pub fn complement(&self) -> CharClass {
        match self {
            CharClass::Preset(preset) => match preset.paired_complement() {
                Some(paired) => CharClass::Preset(paired),
                // The complement of the any-character class matches nothing;
                // compiling it is an error.
                None => CharClass::Negated(Box::new(self.clone())),
            },
            CharClass::Negated(inner) => (**inner).clone(),
            _ => CharClass::Negated(Box::new(self.clone())),
        }
    }

    /// Compile this class to its standalone pattern fragment: a shorthand
    /// token such as `\d`, or a bracket expression such as `[a-z0-9]`.
    pub(crate) fn compile(&self) -> Result<String, ForgeError> {
        match self {
            CharClass::Preset(preset) => Ok(preset.token().to_owned()),
            CharClass::Range { .. } | CharClass::OneOf(_) => {
                let mut interior = String::new();
                self.compile_interior(&mut interior)?;
                Ok(format!("[{}]", interior))
            }
            CharClass::Union(members) => {
                if members.is_empty() {
                    return Err(ForgeError::InvalidArgument(
                        "empty character class union".to_owned(),
                    ));
                }

                // A union containing the any-character class matches
                // any character, and `.` can not appear inside brackets.
                if members.iter().any(|m| m.matches_everything()) {
                    return Ok(PresetCharSet::Any.token().to_owned());
                }

                let mut interior = String::new();
                self.compile_interior(&mut interior)?;
                Ok(format!("[{}]", interior))
            }
            CharClass::Negated(inner) => Self::compile_negated(inner),
        }
    }

    fn compile_negated(inner: &CharClass) -> Result<String, ForgeError> {
        match inner {
            // Substitute the paired token: the complement of `\d` is `\D`.
            CharClass::Preset(preset) => match preset.paired_complement() {
                Some(paired) => Ok(paired.token().to_owned()),
                // The complement of the any-character class matches nothing.
                None => Err(ForgeError::InvalidArgument(
                    "the complement of the any-character class matches nothing".to_owned(),
                )),
            },
            // Double negation.
            CharClass::Negated(inner_inner) => inner_inner.compile(),
            _ => {
                if inner.matches_everything() {
                    return Err(ForgeError::InvalidArgument(
                        "the complement of the any-character class matches nothing".to_owned(),
                    ));
                }
                let mut interior = String::new();
                inner.compile_interior(&mut interior)?;
                Ok(format!("[^{}]", interior))
            }
        }
    }

    // Append the bracket-interior tokens of this class to `out`.
    fn compile_interior(&self, out: &mut String) -> Result<(), ForgeError> {
        match self {
            CharClass::Preset(PresetCharSet::Any) => {
                // `.` inside brackets is a literal dot. Reaching this point
                // means an any-character class was placed inside a bracket
                // expression without being absorbed by a union.
                Err(ForgeError::InvalidArgument(
                    "the any-character class cannot be a member of a bracket expression".to_owned(),
                ))
            }
            CharClass::Preset(preset) => {
                out.push_str(preset.token());
                Ok(())
            }
            CharClass::Range {
                start,
                end_included,
            } => {
                if start > end_included {
                    return Err(ForgeError::InvalidRange {
                        start: *start,
                        end: *end_included,
                    });
                }
                push_escaped_in_brackets(out, *start);
                out.push('-');
                push_escaped_in_brackets(out, *end_included);
                Ok(())
            }
            CharClass::OneOf(chars) => {
                if chars.is_empty() {
                    return Err(ForgeError::InvalidArgument(
                        "empty character set".to_owned(),
                    ));
                }
                for c in chars {
                    push_escaped_in_brackets(out, *c);
                }
                Ok(())
            }
            CharClass::Union(members) => {
                if members.is_empty() {
                    return Err(ForgeError::InvalidArgument(
                        "empty character class union".to_owned(),
                    ));
                }
                for member in members {
                    member.compile_interior(out)?;
                }
                Ok(())
            }
            CharClass::Negated(_) => {
                // `[a[^b]]` does not exist; a negated member has no
                // bracket-interior form.
                Err(ForgeError::InvalidArgument(
                    "a negated class cannot be a member of a bracket expression".to_owned(),
                ))
            }
        }
    }

    // Whether this class matches every character, i.e. whether its
    // complement matches nothing.
    fn matches_everything(&self) -> bool {
        match self {
            CharClass::Preset(PresetCharSet::Any) => true,
            CharClass::Union(members) => members.iter().any(|m| m.matches_everything()),
            _ => false,
        }
    }
}

// `]`, `\`, `^` and `-` carry meaning inside a bracket expression and are
// always escaped, which keeps the emitted text independent of the position
// of the character within the brackets.
fn push_escaped_in_brackets(out: &mut String, c: char) {
    if matches!(c, ']' | '\\' | '^' | '-') {
        out.push('\\');
    }
    out.push(c);
}
