use antlr::{Alternative, Atom, Body, Element, Grammar, Rule, Suffix};

use crate::error::{Error, Result};
use crate::{DocumentEntry, Expression, GrammarDocument, RuleKind};

/// Where lexer rule entries land in the output document.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum LexicalPlacement {
    /// All lexer entries trail the structural entries as one block.
    Trailing,
    /// Entries keep the interleaving of the source grammar.
    SourceOrder,
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct Options {
    pub lexical_placement: LexicalPlacement,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            lexical_placement: LexicalPlacement::Trailing,
        }
    }
}

/// Parse and translate grammar text in one step. Fails fast on syntax
/// errors without assembling any part of the document.
pub fn translate_source(source: &str) -> Result<GrammarDocument> {
    translate_source_with(source, Options::default())
}

pub fn translate_source_with(source: &str, options: Options) -> Result<GrammarDocument> {
    let grammar: Grammar = source.parse()?;
    translate_with(&grammar, options)
}

/// Translate a parsed grammar into a rule table.
pub fn translate(grammar: &Grammar) -> Result<GrammarDocument> {
    translate_with(grammar, Options::default())
}

pub fn translate_with(grammar: &Grammar, options: Options) -> Result<GrammarDocument> {
    let mut entries = Vec::with_capacity(grammar.rules.len());
    let mut lexical = Vec::new();
    for rule in &grammar.rules {
        match &rule.body {
            Body::Alternatives(alternatives) => {
                entries.push(structural_entry(rule, alternatives)?)
            }
            Body::Token(_) => match options.lexical_placement {
                LexicalPlacement::Trailing => lexical.push(lexical_entry(rule)),
                LexicalPlacement::SourceOrder => entries.push(lexical_entry(rule)),
            },
        }
    }
    entries.append(&mut lexical);
    Ok(GrammarDocument { entries })
}

fn structural_entry(rule: &Rule, alternatives: &[Alternative]) -> Result<DocumentEntry> {
    let expression = translate_alternatives(rule.name.as_str(), alternatives)?;
    Ok(DocumentEntry {
        name: rule.name.to_string(),
        expression,
        kind: RuleKind::Structural,
    })
}

/// Lexer rule patterns are not translated. Only the rule's existence and
/// name carry over, marked for manual completion.
fn lexical_entry(rule: &Rule) -> DocumentEntry {
    DocumentEntry {
        name: rule.name.to_string(),
        expression: Expression::Placeholder,
        kind: RuleKind::Lexical,
    }
}

/// Combine the alternatives of a rule body or a parenthesized group. Applied
/// identically at every nesting level.
fn translate_alternatives(rule_name: &str, alternatives: &[Alternative]) -> Result<Expression> {
    let mut children = Vec::with_capacity(alternatives.len());
    for alternative in alternatives {
        if let Some(label) = &alternative.label {
            return Err(Error::UnsupportedConstruct {
                rule: rule_name.to_owned(),
                label: label.to_string(),
            });
        }
        children.push(translate_alternative(rule_name, alternative)?);
    }
    Ok(collapse(children, Expression::Choice))
}

fn translate_alternative(rule_name: &str, alternative: &Alternative) -> Result<Expression> {
    let mut children = Vec::with_capacity(alternative.elements.len());
    for element in &alternative.elements {
        children.push(translate_element(rule_name, element)?);
    }
    Ok(collapse(children, Expression::Sequence))
}

fn translate_element(rule_name: &str, element: &Element) -> Result<Expression> {
    match element {
        Element::Atom { atom, suffix } => {
            let expr = translate_atom(rule_name, atom, RuleKind::Structural)?;
            Ok(apply_suffix(expr, *suffix))
        }
        Element::Group {
            alternatives,
            suffix,
        } => {
            let expr = translate_alternatives(rule_name, alternatives)?;
            Ok(apply_suffix(expr, *suffix))
        }
    }
}

/// Translate a single atom. The calling rule's kind selects the output
/// shape: structural rules reference every alphabetic atom uniformly, since
/// the target combinator model has no lexer/parser distinction; lexical
/// rules turn literals into regex patterns and keep token references as
/// references.
pub fn translate_atom(rule_name: &str, atom: &Atom, kind: RuleKind) -> Result<Expression> {
    match kind {
        RuleKind::Structural => Ok(match atom {
            Atom::Literal(text) => Expression::Literal(text.clone()),
            Atom::TokenRef(name) | Atom::RuleRef(name) => {
                Expression::RuleRef(name.to_string())
            }
        }),
        RuleKind::Lexical => match atom {
            Atom::Literal(text) => Ok(Expression::Pattern(text.clone())),
            Atom::TokenRef(name) => Ok(Expression::RuleRef(name.to_string())),
            Atom::RuleRef(name) => Err(Error::UnknownAtomShape {
                rule: rule_name.to_owned(),
                atom: name.to_string(),
            }),
        },
    }
}

fn apply_suffix(expr: Expression, suffix: Option<Suffix>) -> Expression {
    match suffix {
        None => expr,
        Some(Suffix::Optional) => Expression::Optional(Box::new(expr)),
        Some(Suffix::ZeroOrMore) => Expression::Repeat(Box::new(expr)),
        Some(Suffix::OneOrMore) => Expression::Repeat1(Box::new(expr)),
    }
}

/// Singleton lists collapse to the bare child, everything longer wraps.
fn collapse(mut children: Vec<Expression>, wrap: fn(Vec<Expression>) -> Expression) -> Expression {
    if children.len() == 1 {
        children.remove(0)
    } else {
        wrap(children)
    }
}
