// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::collections::HashMap;
use std::collections::HashSet;
use std::fmt::Display;

use crate::ast::{
    BackReference, CaptureGroup, Expression, Greediness, GroupId, Lookaround, LookaroundKind,
    Repetition, RepetitionKind,
};
use crate::error::ForgeError;
use crate::replacement::{self, Replacement};

/// Compile an expression tree into a [`Pattern`].
///
/// Compilation is a pure function over the tree: depth-first, left to
/// right, deterministic. Compiling the same tree twice yields byte-identical
/// text.
///
/// The work happens in two passes. The numbering pass walks the whole tree
/// and assigns every capture group its 1-based position number; the emission
/// pass then writes the pattern text. The passes cannot be fused: a back
/// reference token needs the number of its target group, and the target's
/// number depends only on the position of the target itself, which is not
/// known until the whole tree has been walked.
pub fn compile(expression: &Expression) -> Result<Pattern, ForgeError> {
    let registry = CaptureRegistry::number(expression)?;

    let mut text = String::new();
    let compiler = Compiler::new(&registry);
    compiler.emit_expression(expression, &mut text)?;

    Ok(Pattern { text, registry })
}

/// The result of compiling an expression tree: the pattern text plus the
/// capture-group numbering that produced it.
///
/// The pattern text is handed verbatim to a PCRE-compatible engine. The
/// numbering is kept so that replacement templates built against the same
/// tree resolve to the same group numbers, see
/// [`Pattern::replacement_text`].
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    text: String,
    registry: CaptureRegistry,
}

impl Pattern {
    /// The compiled pattern text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The number of capture groups in the compiled tree.
    pub fn group_count(&self) -> usize {
        self.registry.group_count()
    }

    /// The 1-based number assigned to `group`, or `None` if the group is
    /// not part of the compiled tree.
    pub fn group_number(&self, group: &CaptureGroup) -> Option<usize> {
        self.registry.group_number(group.id())
    }

    /// Compile `replacement` against this pattern's capture numbering.
    pub fn replacement_text(&self, replacement: &Replacement) -> Result<String, ForgeError> {
        replacement::compile(replacement, &self.registry)
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// The per-compile mapping from capture-group identity to the group's
/// assigned number and name.
///
/// Numbers are positional: groups receive sequential 1-based indices in the
/// order their opening parenthesis appears in the compiled text. The
/// registry is computed once per tree and shared by the pattern emission
/// and the replacement compiler.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureRegistry {
    // group number (1-based) = position in this list + 1
    groups: Vec<GroupId>,
    numbers: HashMap<GroupId, usize>,
}

impl CaptureRegistry {
    /// The numbering pass: walk the tree depth-first, left to right, and
    /// assign each capture group the next number when its opening
    /// parenthesis would be emitted.
    fn number(expression: &Expression) -> Result<CaptureRegistry, ForgeError> {
        let mut registry = CaptureRegistry {
            groups: vec![],
            numbers: HashMap::new(),
        };
        let mut names_seen = HashSet::new();
        registry.collect(expression, &mut names_seen)?;
        Ok(registry)
    }

    fn collect(
        &mut self,
        expression: &Expression,
        names_seen: &mut HashSet<String>,
    ) -> Result<(), ForgeError> {
        match expression {
            Expression::Capture(group) => {
                self.register(group, names_seen)?;
                self.collect(group.child(), names_seen)
            }
            Expression::Repetition(Repetition { child, .. })
            | Expression::Atomic(child)
            | Expression::Lookaround(Lookaround { child, .. }) => {
                self.collect(child, names_seen)
            }
            Expression::Sequence(children) | Expression::Choice(children) => {
                for child in children {
                    self.collect(child, names_seen)?;
                }
                Ok(())
            }
            Expression::Literal(_)
            | Expression::AnyChar
            | Expression::BeginLine
            | Expression::EndLine
            | Expression::CharClass(_)
            | Expression::BackReference(_) => Ok(()),
        }
    }

    fn register(
        &mut self,
        group: &CaptureGroup,
        names_seen: &mut HashSet<String>,
    ) -> Result<(), ForgeError> {
        if self.numbers.contains_key(&group.id()) {
            // Positional numbering cannot survive the same group node being
            // emitted twice: the engine would assign the second occurrence
            // a fresh number while back references keep pointing at the
            // first.
            return Err(ForgeError::InvalidArgument(
                "the same capture group node appears more than once in the expression".to_owned(),
            ));
        }

        if let Some(name) = group.name() {
            validate_group_name(name)?;
            if !names_seen.insert(name.to_owned()) {
                return Err(ForgeError::InvalidName(name.to_owned()));
            }
        }

        self.groups.push(group.id());
        self.numbers.insert(group.id(), self.groups.len());
        Ok(())
    }

    pub(crate) fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub(crate) fn group_number(&self, id: GroupId) -> Option<usize> {
        self.numbers.get(&id).copied()
    }
}

// A group name is an identifier of letters, digits and underscores that
// does not start with a digit.
fn validate_group_name(name: &str) -> Result<(), ForgeError> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(ForgeError::InvalidName(name.to_owned()))
    }
}

/// The emission pass: every node writes its own fragment, wrapping child
/// fragments in non-capturing groups where operator precedence requires it.
struct Compiler<'a> {
    registry: &'a CaptureRegistry,
}

impl<'a> Compiler<'a> {
    fn new(registry: &'a CaptureRegistry) -> Self {
        Compiler { registry }
    }

    fn emit_expression(&self, expression: &Expression, out: &mut String) -> Result<(), ForgeError> {
        match expression {
            Expression::Literal(text) => {
                emit_literal(text, out);
                Ok(())
            }
            Expression::AnyChar => {
                out.push('.');
                Ok(())
            }
            Expression::BeginLine => {
                out.push('^');
                Ok(())
            }
            Expression::EndLine => {
                out.push('$');
                Ok(())
            }
            Expression::CharClass(class) => {
                out.push_str(&class.compile()?);
                Ok(())
            }
            Expression::Repetition(repetition) => self.emit_repetition(repetition, out),
            Expression::Atomic(child) => {
                out.push_str("(?>");
                self.emit_expression(child, out)?;
                out.push(')');
                Ok(())
            }
            Expression::Lookaround(lookaround) => self.emit_lookaround(lookaround, out),
            Expression::Capture(group) => self.emit_capture(group, out),
            Expression::BackReference(back_reference) => {
                self.emit_back_reference(back_reference, out)
            }
            Expression::Sequence(children) => self.emit_sequence(children, out),
            Expression::Choice(children) => self.emit_choice(children, out),
        }
    }

    fn emit_sequence(&self, children: &[Expression], out: &mut String) -> Result<(), ForgeError> {
        for child in children {
            // Choice binds looser than concatenation, everything else
            // binds at least as tight.
            if matches!(child, Expression::Choice(_)) {
                out.push_str("(?:");
                self.emit_expression(child, out)?;
                out.push(')');
            } else {
                self.emit_expression(child, out)?;
            }
        }
        Ok(())
    }

    fn emit_choice(&self, children: &[Expression], out: &mut String) -> Result<(), ForgeError> {
        // `|` is associative and binds loosest, so neither sequence
        // children nor nested choices need extra grouping.
        for (index, child) in children.iter().enumerate() {
            if index != 0 {
                out.push('|');
            }
            self.emit_expression(child, out)?;
        }
        Ok(())
    }

    fn emit_repetition(&self, repetition: &Repetition, out: &mut String) -> Result<(), ForgeError> {
        if let RepetitionKind::Between(min, max) = repetition.kind {
            if min > max {
                return Err(ForgeError::InvalidArgument(format!(
                    "reversed repetition bounds {{{},{}}}",
                    min, max
                )));
            }
        }

        self.emit_quantified_child(&repetition.child, out)?;

        match repetition.kind {
            RepetitionKind::Optional => out.push('?'),
            RepetitionKind::ZeroOrMore => out.push('*'),
            RepetitionKind::OneOrMore => out.push('+'),
            RepetitionKind::Exactly(n) => out.push_str(&format!("{{{}}}", n)),
            RepetitionKind::Between(min, max) => out.push_str(&format!("{{{},{}}}", min, max)),
            RepetitionKind::AtLeast(n) => out.push_str(&format!("{{{},}}", n)),
        }

        match repetition.mode {
            Greediness::Greedy => {}
            Greediness::Lazy => out.push('?'),
            Greediness::Possessive => out.push('+'),
        }

        Ok(())
    }

    // Emit a child that is about to receive a quantifier suffix, wrapping
    // it in a non-capturing group unless the fragment is a single
    // quantifiable atom.
    fn emit_quantified_child(
        &self,
        child: &Expression,
        out: &mut String,
    ) -> Result<(), ForgeError> {
        if is_quantifiable_atom(child) {
            self.emit_expression(child, out)
        } else {
            out.push_str("(?:");
            self.emit_expression(child, out)?;
            out.push(')');
            Ok(())
        }
    }

    fn emit_lookaround(&self, lookaround: &Lookaround, out: &mut String) -> Result<(), ForgeError> {
        let open = match lookaround.kind {
            LookaroundKind::PositiveLookahead => "(?=",
            LookaroundKind::NegativeLookahead => "(?!",
            LookaroundKind::PositiveLookbehind => "(?<=",
            LookaroundKind::NegativeLookbehind => "(?<!",
        };
        out.push_str(open);
        self.emit_expression(&lookaround.child, out)?;
        out.push(')');
        Ok(())
    }

    fn emit_capture(&self, group: &CaptureGroup, out: &mut String) -> Result<(), ForgeError> {
        match group.name() {
            Some(name) => {
                out.push_str("(?<");
                out.push_str(name);
                out.push('>');
            }
            None => out.push('('),
        }
        self.emit_expression(group.child(), out)?;
        out.push(')');
        Ok(())
    }

    fn emit_back_reference(
        &self,
        back_reference: &BackReference,
        out: &mut String,
    ) -> Result<(), ForgeError> {
        let number = self
            .registry
            .group_number(back_reference.id())
            .ok_or_else(|| ForgeError::UnboundGroup {
                name: back_reference.name().map(str::to_owned),
            })?;

        match back_reference.name() {
            Some(name) => {
                out.push_str("\\k<");
                out.push_str(name);
                out.push('>');
            }
            None => {
                out.push('\\');
                out.push_str(&number.to_string());
            }
        }
        Ok(())
    }
}

fn emit_literal(text: &str, out: &mut String) {
    for c in text.chars() {
        if is_metacharacter(c) {
            out.push('\\');
        }
        out.push(c);
    }
}

fn is_metacharacter(c: char) -> bool {
    matches!(
        c,
        '.' | '*' | '+' | '?' | '(' | ')' | '[' | ']' | '{' | '}' | '^' | '$' | '|' | '\\'
    )
}

// Whether a quantifier suffix may follow the fragment of `expression`
// directly. Multi-character literals, sequences, choices, already
// quantified expressions and the zero-width primitives all need a
// non-capturing group first; parenthesized forms and single tokens do not.
fn is_quantifiable_atom(expression: &Expression) -> bool {
    match expression {
        Expression::Literal(text) => {
            let mut chars = text.chars();
            chars.next().is_some() && chars.next().is_none()
        }
        Expression::AnyChar
        | Expression::CharClass(_)
        | Expression::Capture(_)
        | Expression::Atomic(_)
        | Expression::BackReference(_) => true,
        Expression::BeginLine
        | Expression::EndLine
        | Expression::Repetition(_)
        | Expression::Lookaround(_)
        | Expression::Sequence(_)
        | Expression::Choice(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use pretty_assertions::assert_str_eq;

    use crate::builder::{
        any_character, at_least, atomic, back_reference, begin_line, capture, capture_named,
        char_class, character, choice, end_line, negative_lookahead, negative_lookbehind,
        one_or_more, one_or_more_lazy, one_or_more_possessive, optional, optional_lazy,
        optional_possessive, positive_lookahead, positive_lookbehind, repeat, repeat_range,
        repeat_range_lazy, repeat_range_possessive, sequence, string, zero_or_more,
        zero_or_more_lazy, zero_or_more_possessive,
    };
    use crate::charclass::CharClass;
    use crate::compiler::compile;
    use crate::error::ForgeError;

    fn pattern_of(expression: &crate::ast::Expression) -> String {
        compile(expression).unwrap().as_str().to_owned()
    }

    #[test]
    fn test_compile_literal() {
        assert_str_eq!(pattern_of(&string("abc")), "abc");
        assert_str_eq!(pattern_of(&character('x')), "x");

        // every metacharacter is escaped
        assert_str_eq!(
            pattern_of(&string(".*+?()[]{}^$|\\")),
            "\\.\\*\\+\\?\\(\\)\\[\\]\\{\\}\\^\\$\\|\\\\"
        );

        // mixed text
        assert_str_eq!(pattern_of(&string("a.b(c)")), "a\\.b\\(c\\)");
    }

    #[test]
    fn test_compile_primitives() {
        assert_str_eq!(pattern_of(&any_character()), ".");
        assert_str_eq!(pattern_of(&begin_line()), "^");
        assert_str_eq!(pattern_of(&end_line()), "$");
        assert_str_eq!(pattern_of(&char_class(CharClass::digit())), "\\d");
        assert_str_eq!(
            pattern_of(&char_class(CharClass::range('a', 'f'))),
            "[a-f]"
        );
    }

    #[test]
    fn test_compile_sequence_and_choice() {
        assert_str_eq!(
            pattern_of(&sequence(vec![string("a"), string("b"), string("c")])),
            "abc"
        );

        assert_str_eq!(
            pattern_of(&choice(vec![string("cat"), string("dog")])),
            "cat|dog"
        );

        // a choice inside a sequence is wrapped
        assert_str_eq!(
            pattern_of(&sequence(vec![
                string("a"),
                choice(vec![string("b"), string("c")]),
                string("d"),
            ])),
            "a(?:b|c)d"
        );

        // a sequence inside a choice is not wrapped
        assert_str_eq!(
            pattern_of(&choice(vec![
                sequence(vec![string("a"), string("b")]),
                string("c"),
            ])),
            "ab|c"
        );

        // nested choices flatten by associativity
        assert_str_eq!(
            pattern_of(&choice(vec![
                string("a"),
                choice(vec![string("b"), string("c")]),
            ])),
            "a|b|c"
        );
    }

    #[test]
    fn test_compile_repetition_suffixes() {
        assert_str_eq!(pattern_of(&zero_or_more(string("a"))), "a*");
        assert_str_eq!(pattern_of(&one_or_more(string("a"))), "a+");
        assert_str_eq!(pattern_of(&optional(string("a"))), "a?");
        assert_str_eq!(pattern_of(&repeat(string("a"), 3)), "a{3}");
        assert_str_eq!(pattern_of(&repeat_range(string("a"), 2, 4)), "a{2,4}");
        assert_str_eq!(pattern_of(&at_least(string("a"), 2)), "a{2,}");

        // lazy mode appends `?`
        assert_str_eq!(pattern_of(&zero_or_more_lazy(string("a"))), "a*?");
        assert_str_eq!(pattern_of(&one_or_more_lazy(string("a"))), "a+?");
        assert_str_eq!(pattern_of(&optional_lazy(string("a"))), "a??");
        assert_str_eq!(pattern_of(&repeat_range_lazy(string("a"), 2, 4)), "a{2,4}?");

        // possessive mode appends `+`
        assert_str_eq!(pattern_of(&zero_or_more_possessive(string("a"))), "a*+");
        assert_str_eq!(pattern_of(&one_or_more_possessive(string("a"))), "a++");
        assert_str_eq!(pattern_of(&optional_possessive(string("a"))), "a?+");
        assert_str_eq!(
            pattern_of(&repeat_range_possessive(string("a"), 2, 4)),
            "a{2,4}+"
        );

        assert_str_eq!(
            pattern_of(&repeat(char_class(CharClass::digit()), 4)),
            "\\d{4}"
        );
        assert_str_eq!(
            pattern_of(&repeat_range(char_class(CharClass::digit()), 2, 4)),
            "\\d{2,4}"
        );
    }

    #[test]
    fn test_compile_repetition_grouping() {
        // multi-character literals are grouped before quantification
        assert_str_eq!(pattern_of(&zero_or_more(string("ab"))), "(?:ab)*");

        // sequences and choices are grouped
        assert_str_eq!(
            pattern_of(&one_or_more(sequence(vec![string("a"), string("b")]))),
            "(?:ab)+"
        );
        assert_str_eq!(
            pattern_of(&optional(choice(vec![string("a"), string("b")]))),
            "(?:a|b)?"
        );

        // an already quantified child is grouped again
        assert_str_eq!(
            pattern_of(&zero_or_more(one_or_more(string("a")))),
            "(?:a+)*"
        );

        // escaped single characters still count as one token
        assert_str_eq!(pattern_of(&zero_or_more(string("."))), "\\.*");

        // parenthesized forms are not re-wrapped
        assert_str_eq!(
            pattern_of(&one_or_more(capture(string("ab")))),
            "(ab)+"
        );
        assert_str_eq!(
            pattern_of(&one_or_more(atomic(string("ab")))),
            "(?>ab)+"
        );
    }

    #[test]
    fn test_compile_repetition_reversed_bounds() {
        assert!(matches!(
            compile(&repeat_range(string("a"), 4, 2)),
            Err(ForgeError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_compile_atomic_and_lookaround() {
        assert_str_eq!(
            pattern_of(&atomic(sequence(vec![string("a"), string("b")]))),
            "(?>ab)"
        );
        assert_str_eq!(pattern_of(&positive_lookahead(string("a"))), "(?=a)");
        assert_str_eq!(pattern_of(&negative_lookahead(string("a"))), "(?!a)");
        assert_str_eq!(pattern_of(&positive_lookbehind(string("a"))), "(?<=a)");
        assert_str_eq!(pattern_of(&negative_lookbehind(string("a"))), "(?<!a)");

        // lookarounds around choices need no inner grouping
        assert_str_eq!(
            pattern_of(&sequence(vec![
                positive_lookahead(choice(vec![string("a"), string("b")])),
                string("c"),
            ])),
            "(?=a|b)c"
        );
    }

    #[test]
    fn test_compile_capture_numbering() {
        // groups number 1, 2, 3 in opening-parenthesis order,
        // regardless of nesting depth
        let inner = capture(string("b"));
        let outer = capture(sequence(vec![string("a"), inner.clone().into()]));
        let third = capture(string("c"));
        let tree = sequence(vec![outer.clone().into(), third.clone().into()]);

        let pattern = compile(&tree).unwrap();
        assert_str_eq!(pattern.as_str(), "(a(b))(c)");
        assert_eq!(pattern.group_count(), 3);
        assert_eq!(pattern.group_number(&outer), Some(1));
        assert_eq!(pattern.group_number(&inner), Some(2));
        assert_eq!(pattern.group_number(&third), Some(3));

        // a group inside a lookaround still receives a number
        let hidden = capture(string("x"));
        let tree = sequence(vec![
            positive_lookahead(hidden.clone()),
            capture(string("y")).into(),
        ]);
        let pattern = compile(&tree).unwrap();
        assert_str_eq!(pattern.as_str(), "(?=(x))(y)");
        assert_eq!(pattern.group_number(&hidden), Some(1));
    }

    #[test]
    fn test_compile_named_capture() {
        let group = capture_named("year", repeat(char_class(CharClass::digit()), 4));
        let pattern = compile(&group.clone().into()).unwrap();
        assert_str_eq!(pattern.as_str(), "(?<year>\\d{4})");
        assert_eq!(pattern.group_number(&group), Some(1));
    }

    #[test]
    fn test_compile_back_reference() {
        let group = capture(string("a"));
        let tree = sequence(vec![group.clone().into(), back_reference(&group)]);
        assert_str_eq!(pattern_of(&tree), "(a)\\1");

        // named groups are referenced by name
        let group = capture_named("n", string("a"));
        let tree = sequence(vec![group.clone().into(), back_reference(&group)]);
        assert_str_eq!(pattern_of(&tree), "(?<n>a)\\k<n>");

        // the reference may precede the group in traversal order
        let group = capture(string("a"));
        let tree = sequence(vec![back_reference(&group), group.clone().into()]);
        assert_str_eq!(pattern_of(&tree), "\\1(a)");
    }

    #[test]
    fn test_compile_unbound_back_reference() {
        let elsewhere = capture(string("a"));
        let tree = sequence(vec![string("b"), back_reference(&elsewhere)]);
        assert_eq!(
            compile(&tree),
            Err(ForgeError::UnboundGroup { name: None })
        );

        let elsewhere = capture_named("missing", string("a"));
        let tree = back_reference(&elsewhere);
        assert_eq!(
            compile(&tree),
            Err(ForgeError::UnboundGroup {
                name: Some("missing".to_owned())
            })
        );
    }

    #[test]
    fn test_compile_duplicate_group_node() {
        let group = capture(string("a"));
        let tree = sequence(vec![group.clone().into(), group.into()]);
        assert!(matches!(
            compile(&tree),
            Err(ForgeError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_compile_group_names() {
        // valid names
        for name in ["a", "A1", "_x", "snake_case_9"] {
            let group = capture_named(name, string("a"));
            assert!(compile(&group.into()).is_ok());
        }

        // invalid names
        for name in ["", "1a", "a-b", "a b", "a.b"] {
            let group = capture_named(name, string("a"));
            assert_eq!(
                compile(&group.into()),
                Err(ForgeError::InvalidName(name.to_owned()))
            );
        }

        // duplicate names across distinct groups
        let tree = sequence(vec![
            capture_named("n", string("a")).into(),
            capture_named("n", string("b")).into(),
        ]);
        assert_eq!(
            compile(&tree),
            Err(ForgeError::InvalidName("n".to_owned()))
        );
    }

    #[test]
    fn test_compile_is_deterministic() {
        let group = capture_named("word", one_or_more(char_class(CharClass::word_char())));
        let tree = sequence(vec![
            begin_line(),
            group.clone().into(),
            choice(vec![string(":"), string("=")]),
            back_reference(&group),
            end_line(),
        ]);

        let first = compile(&tree).unwrap();
        let second = compile(&tree).unwrap();
        assert_str_eq!(first.as_str(), second.as_str());
        assert_eq!(first, second);
    }

    // The following tests hand compiled patterns to a real engine and
    // check match behavior rather than pattern text. regex-automata has
    // no possessive quantifiers, atomic groups, lookaround or back
    // references, so only the shared constructs appear here.

    #[test]
    fn test_engine_literal_roundtrip() {
        use regex_automata::meta::Regex;

        for text in ["abc", "a.b(c)", "1+1=2", "x[y]{z}^$|\\", "*?."] {
            let pattern = pattern_of(&string(text));
            let re = Regex::new(&format!("^(?:{})$", pattern)).unwrap();
            assert!(re.is_match(text), "pattern {} must match {:?}", pattern, text);
        }

        // the escaped pattern matches only the literal text
        let pattern = pattern_of(&string("a.c"));
        let re = Regex::new(&format!("^(?:{})$", pattern)).unwrap();
        assert!(re.is_match("a.c"));
        assert!(!re.is_match("abc"));
    }

    #[test]
    fn test_engine_negated_union_complement() {
        use regex_automata::meta::Regex;

        let class = CharClass::union(vec![
            CharClass::range('a', 'z'),
            CharClass::range('0', '9'),
        ]);
        let positive = Regex::new(&format!("^{}$", class.compile().unwrap())).unwrap();
        let negative =
            Regex::new(&format!("^{}$", class.complement().compile().unwrap())).unwrap();

        // over a sample alphabet, the negated class matches exactly the
        // complement set
        for c in "abclmnxyz0459ABZ _-+.,!\t".chars() {
            let s = c.to_string();
            assert_ne!(
                positive.is_match(&s),
                negative.is_match(&s),
                "exactly one of the class and its complement must match {:?}",
                c
            );
        }
    }

    #[test]
    fn test_engine_grouping_preserves_semantics() {
        use regex_automata::meta::Regex;

        // choice under sequence under repetition: the inserted
        // non-capturing groups must preserve the tree's match semantics
        let tree = sequence(vec![
            string("a"),
            one_or_more(sequence(vec![
                choice(vec![string("b"), string("cd")]),
                string("e"),
            ])),
        ]);
        let re = Regex::new(&format!("^(?:{})$", pattern_of(&tree))).unwrap();

        for matching in ["abe", "acde", "abecde", "abebebe"] {
            assert!(re.is_match(matching), "{:?} must match", matching);
        }
        for not_matching in ["a", "ab", "abc", "abed", "becde"] {
            assert!(!re.is_match(not_matching), "{:?} must not match", not_matching);
        }
    }
}
