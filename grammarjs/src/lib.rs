//! Translation of ANTLR grammars into tree-sitter rule tables.
//!
//! The translation rebuilds a parsed grammar as a tree of combinator
//! expressions, then serializes the whole document in a separate pass. Lexer
//! rules are emitted as placeholder patterns to be completed by hand; their
//! pattern bodies are not translated.

use std::fmt::{self, Display};

mod error;
pub use error::{Error, Result};
mod translate;
pub use translate::{
    translate, translate_atom, translate_source, translate_source_with, translate_with,
    LexicalPlacement, Options,
};

/// Whether a rule describes syntactic structure or a token. Decides both
/// the dispatch in document assembly and the atom disambiguation.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum RuleKind {
    Structural,
    Lexical,
}

/// A combinator expression in the output grammar.
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum Expression {
    /// `seq(...)`, always 2 or more children.
    Sequence(Vec<Expression>),
    /// `choice(...)`, always 2 or more children.
    Choice(Vec<Expression>),
    Optional(Box<Expression>),
    Repeat(Box<Expression>),
    Repeat1(Box<Expression>),
    /// `$.name`, a reference to another rule in the table.
    RuleRef(String),
    /// A double-quoted literal match.
    Literal(String),
    /// A `/regex/` pattern match.
    Pattern(String),
    /// Stands in for an untranslated lexer rule pattern.
    Placeholder,
}

impl Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Sequence(children) => write_call(f, "seq", children),
            Expression::Choice(children) => write_call(f, "choice", children),
            Expression::Optional(inner) => write!(f, "optional({})", inner),
            Expression::Repeat(inner) => write!(f, "repeat({})", inner),
            Expression::Repeat1(inner) => write!(f, "repeat1({})", inner),
            Expression::RuleRef(name) => write!(f, "$.{}", name),
            Expression::Literal(text) => write!(f, "\"{}\"", text),
            Expression::Pattern(regex) => write!(f, "/{}/", regex),
            Expression::Placeholder => write!(f, "\"a\""),
        }
    }
}

fn write_call(f: &mut fmt::Formatter, name: &str, children: &[Expression]) -> fmt::Result {
    write!(f, "{}(", name)?;
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", child)?;
    }
    write!(f, ")")
}

/// One named entry of the output rule table.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct DocumentEntry {
    pub name: String,
    pub expression: Expression,
    pub kind: RuleKind,
}

/// The translated grammar: an ordered rule table. Entry order is the order
/// the serialized document emits them in.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct GrammarDocument {
    pub entries: Vec<DocumentEntry>,
}

impl GrammarDocument {
    pub fn get(&self, name: &str) -> Option<&Expression> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.expression)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }
}

impl Display for GrammarDocument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "var rules = {{")?;
        for entry in &self.entries {
            write!(f, "  {}: $ => {},", entry.name, entry.expression)?;
            if entry.kind == RuleKind::Lexical {
                write!(f, " // needs completion")?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_nested_expression() {
        let expr = Expression::Sequence(vec![
            Expression::RuleRef("INT".to_owned()),
            Expression::Repeat(Box::new(Expression::Sequence(vec![
                Expression::Literal("+".to_owned()),
                Expression::RuleRef("INT".to_owned()),
            ]))),
        ]);

        assert_eq!(expr.to_string(), "seq($.INT, repeat(seq(\"+\", $.INT)))");
    }

    #[test]
    fn render_leaf_expressions() {
        let tests = vec![
            (Expression::RuleRef("expr".to_owned()), "$.expr"),
            (Expression::Literal("if".to_owned()), "\"if\""),
            (Expression::Pattern("[0-9]".to_owned()), "/[0-9]/"),
            (Expression::Placeholder, "\"a\""),
            (
                Expression::Optional(Box::new(Expression::Literal(";".to_owned()))),
                "optional(\";\")",
            ),
            (
                Expression::Choice(vec![
                    Expression::Literal("a".to_owned()),
                    Expression::Repeat1(Box::new(Expression::Literal("b".to_owned()))),
                ]),
                "choice(\"a\", repeat1(\"b\"))",
            ),
        ];

        for (expr, expected) in tests {
            assert_eq!(expr.to_string(), expected);
        }
    }

    #[test]
    fn render_document() {
        let doc = GrammarDocument {
            entries: vec![
                DocumentEntry {
                    name: "expr".to_owned(),
                    expression: Expression::RuleRef("INT".to_owned()),
                    kind: RuleKind::Structural,
                },
                DocumentEntry {
                    name: "INT".to_owned(),
                    expression: Expression::Placeholder,
                    kind: RuleKind::Lexical,
                },
            ],
        };

        assert_eq!(
            doc.to_string(),
            "var rules = {\n  expr: $ => $.INT,\n  INT: $ => \"a\", // needs completion\n}"
        );
    }
}
