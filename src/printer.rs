// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::Display;

use crate::ast::{
    CaptureGroup, Expression, Greediness, Lookaround, LookaroundKind, Repetition, RepetitionKind,
};
use crate::charclass::{CharClass, PresetCharSet};

impl Display for PresetCharSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PresetCharSet::Digit => "digit",
            PresetCharSet::NotDigit => "non_digit",
            PresetCharSet::Word => "word_char",
            PresetCharSet::NotWord => "non_word_char",
            PresetCharSet::Space => "whitespace_char",
            PresetCharSet::NotSpace => "non_whitespace_char",
            PresetCharSet::VerticalSpace => "vertical_whitespace",
            PresetCharSet::NotVerticalSpace => "non_vertical_whitespace",
            PresetCharSet::HorizontalSpace => "horizontal_whitespace",
            PresetCharSet::NotHorizontalSpace => "non_horizontal_whitespace",
            PresetCharSet::Any => "any_char",
        };
        f.write_str(name)
    }
}

impl Display for CharClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CharClass::Preset(preset) => write!(f, "{}", preset),
            CharClass::Range {
                start,
                end_included,
            } => {
                write!(f, "'{}'..'{}'", start, end_included)
            }
            CharClass::OneOf(chars) => {
                let items: Vec<String> = chars.iter().map(|c| format!("'{}'", c)).collect();
                write!(f, "[{}]", items.join(", "))
            }
            CharClass::Union(members) => {
                let items: Vec<String> = members.iter().map(|m| m.to_string()).collect();
                write!(f, "[{}]", items.join(", "))
            }
            CharClass::Negated(inner) => write!(f, "!{}", inner),
        }
    }
}

fn mode_suffix(mode: Greediness) -> &'static str {
    match mode {
        Greediness::Greedy => "",
        Greediness::Lazy => "_lazy",
        Greediness::Possessive => "_possessive",
    }
}

impl Display for Repetition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let suffix = mode_suffix(self.mode);
        match self.kind {
            RepetitionKind::Optional => write!(f, "optional{}({})", suffix, self.child),
            RepetitionKind::ZeroOrMore => write!(f, "zero_or_more{}({})", suffix, self.child),
            RepetitionKind::OneOrMore => write!(f, "one_or_more{}({})", suffix, self.child),
            RepetitionKind::Exactly(n) => write!(f, "repeat{}({}, {})", suffix, self.child, n),
            RepetitionKind::Between(min, max) => {
                write!(f, "repeat_range{}({}, {}, {})", suffix, self.child, min, max)
            }
            RepetitionKind::AtLeast(n) => write!(f, "at_least{}({}, {})", suffix, self.child, n),
        }
    }
}

impl Display for Lookaround {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self.kind {
            LookaroundKind::PositiveLookahead => "positive_lookahead",
            LookaroundKind::NegativeLookahead => "negative_lookahead",
            LookaroundKind::PositiveLookbehind => "positive_lookbehind",
            LookaroundKind::NegativeLookbehind => "negative_lookbehind",
        };
        write!(f, "{}({})", name, self.child)
    }
}

impl Display for CaptureGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name() {
            Some(name) => write!(f, "capture_named({:?}, {})", name, self.child()),
            None => write!(f, "capture({})", self.child()),
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Literal(text) => write!(f, "{:?}", text),
            Expression::AnyChar => f.write_str("any_character"),
            Expression::BeginLine => f.write_str("begin_line"),
            Expression::EndLine => f.write_str("end_line"),
            Expression::CharClass(class) => write!(f, "{}", class),
            Expression::Repetition(repetition) => write!(f, "{}", repetition),
            Expression::Atomic(child) => write!(f, "atomic({})", child),
            Expression::Lookaround(lookaround) => write!(f, "{}", lookaround),
            Expression::Capture(group) => write!(f, "{}", group),
            Expression::BackReference(back_reference) => match back_reference.name() {
                Some(name) => write!(f, "back_reference({:?})", name),
                None => write!(f, "back_reference(#{})", back_reference.id().value()),
            },
            Expression::Sequence(children) => {
                let items: Vec<String> = children.iter().map(|c| c.to_string()).collect();
                write!(f, "({})", items.join(", "))
            }
            Expression::Choice(children) => {
                let items: Vec<String> = children
                    .iter()
                    .map(|c| {
                        if matches!(c, Expression::Choice(_)) {
                            format!("({})", c)
                        } else {
                            c.to_string()
                        }
                    })
                    .collect();
                write!(f, "{}", items.join(" || "))
            }
        }
    }
}
