// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use crate::ast::{CaptureGroup, GroupId};
use crate::compiler::CaptureRegistry;
use crate::error::ForgeError;

/// A replacement template: an ordered sequence of literal text runs and
/// capture-group references.
///
/// A replacement is compiled against the capture numbering of the pattern
/// it belongs to, see [`crate::Pattern::replacement_text`], so that group
/// references resolve to the same numbers the pattern assigned.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Replacement {
    parts: Vec<ReplacementPart>,
}

impl Replacement {
    pub fn new(parts: Vec<ReplacementPart>) -> Self {
        Replacement { parts }
    }

    pub fn parts(&self) -> &[ReplacementPart] {
        &self.parts
    }
}

/// One part of a replacement template.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplacementPart {
    /// Literal text. `$` and `\` are escaped on compilation since both
    /// carry meaning in replacement syntax.
    Text(String),

    /// The text matched by a capture group, emitted as `$N`, or `${name}`
    /// for a named group.
    Group { id: GroupId, name: Option<String> },
}

impl From<&str> for ReplacementPart {
    fn from(text: &str) -> Self {
        ReplacementPart::Text(text.to_owned())
    }
}

impl From<String> for ReplacementPart {
    fn from(text: String) -> Self {
        ReplacementPart::Text(text)
    }
}

impl From<char> for ReplacementPart {
    fn from(c: char) -> Self {
        ReplacementPart::Text(c.to_string())
    }
}

impl From<&CaptureGroup> for ReplacementPart {
    fn from(group: &CaptureGroup) -> Self {
        ReplacementPart::Group {
            id: group.id(),
            name: group.name().map(str::to_owned),
        }
    }
}

impl From<CaptureGroup> for ReplacementPart {
    fn from(group: CaptureGroup) -> Self {
        ReplacementPart::from(&group)
    }
}

/// Compile a replacement template against the given capture numbering.
///
/// The registry must come from compiling the pattern the replacement is
/// used with; a part referencing a group the registry does not know fails
/// with [`ForgeError::UnboundGroup`].
pub(crate) fn compile(
    replacement: &Replacement,
    registry: &CaptureRegistry,
) -> Result<String, ForgeError> {
    let mut out = String::new();

    for part in replacement.parts() {
        match part {
            ReplacementPart::Text(text) => {
                for c in text.chars() {
                    if matches!(c, '$' | '\\') {
                        out.push('\\');
                    }
                    out.push(c);
                }
            }
            ReplacementPart::Group { id, name } => {
                let number = registry.group_number(*id).ok_or_else(|| {
                    ForgeError::UnboundGroup { name: name.clone() }
                })?;

                match name {
                    Some(name) => {
                        out.push_str("${");
                        out.push_str(name);
                        out.push('}');
                    }
                    None => {
                        out.push('$');
                        out.push_str(&number.to_string());
                    }
                }
            }
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use pretty_assertions::assert_str_eq;

    use crate::builder::{capture, capture_named, replacement, sequence, string};
    use crate::compiler::compile;
    use crate::error::ForgeError;
    use crate::replacement::ReplacementPart;

    #[test]
    fn test_compile_replacement_text() {
        let pattern = compile(&string("a")).unwrap();

        let r = replacement(vec![ReplacementPart::from("plain text")]);
        assert_str_eq!(pattern.replacement_text(&r).unwrap(), "plain text");

        // `$` and `\` are escaped
        let r = replacement(vec![ReplacementPart::from("cost: $5 \\ day")]);
        assert_str_eq!(
            pattern.replacement_text(&r).unwrap(),
            "cost: \\$5 \\\\ day"
        );
    }

    #[test]
    fn test_compile_replacement_groups() {
        let day = capture(string("dd"));
        let month = capture(string("mm"));
        let year = capture_named("year", string("yyyy"));
        let tree = sequence(vec![
            day.clone().into(),
            string("/"),
            month.clone().into(),
            string("/"),
            year.clone().into(),
        ]);
        let pattern = compile(&tree).unwrap();
        assert_str_eq!(pattern.as_str(), "(dd)/(mm)/(?<year>yyyy)");

        // rearrange the date, referencing groups by number and by name
        let r = replacement(vec![
            ReplacementPart::from(&year),
            ReplacementPart::from("-"),
            ReplacementPart::from(&month),
            ReplacementPart::from('-'),
            ReplacementPart::from(&day),
        ]);
        assert_str_eq!(pattern.replacement_text(&r).unwrap(), "${year}-$2-$1");
    }

    #[test]
    fn test_compile_replacement_unbound_group() {
        let group = capture(string("a"));
        let pattern = compile(&string("b")).unwrap();

        let r = replacement(vec![ReplacementPart::from(&group)]);
        assert_eq!(
            pattern.replacement_text(&r),
            Err(ForgeError::UnboundGroup { name: None })
        );
    }

    #[test]
    fn test_replacement_same_numbering_as_pattern() {
        // the replacement resolves through the same registry pass that
        // numbered the pattern's groups
        let a = capture(string("a"));
        let b = capture(string("b"));
        let tree = sequence(vec![a.clone().into(), b.clone().into()]);
        let pattern = compile(&tree).unwrap();

        let r = replacement(vec![
            ReplacementPart::from(&b),
            ReplacementPart::from(&a),
        ]);
        assert_str_eq!(pattern.replacement_text(&r).unwrap(), "$2$1");
        assert_eq!(pattern.group_number(&a), Some(1));
        assert_eq!(pattern.group_number(&b), Some(2));
    }
}
