//! A front-end for a pragmatic subset of ANTLR4 grammar notation.
//!
//! Parses grammar text into a typed syntax tree. Parser (structural) rules
//! are parsed down to atoms and suffixes; lexer (token) rules keep their
//! pattern text unparsed, since consumers of this crate only need their
//! names.

use std::fmt::{self, Display};
use std::str::FromStr;

mod error;
pub use error::Error;
mod parser;

/// A rule or token name.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Identifier(pub String);

impl Identifier {
    /// True when this names a token rule. ANTLR distinguishes rule kinds by
    /// the case of the first character.
    pub fn is_token(&self) -> bool {
        self.0.chars().next().map_or(false, char::is_uppercase)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Identifier {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// A quantifier attached to an element.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Suffix {
    Optional,
    ZeroOrMore,
    OneOrMore,
}

impl Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Suffix::Optional => write!(f, "?"),
            Suffix::ZeroOrMore => write!(f, "*"),
            Suffix::OneOrMore => write!(f, "+"),
        }
    }
}

/// The leaf of an alternative.
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum Atom {
    /// A single-quoted literal, stored without the quotes.
    Literal(String),
    /// A reference to a token rule (uppercase initial).
    TokenRef(Identifier),
    /// A reference to a parser rule (lowercase initial).
    RuleRef(Identifier),
}

impl Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Atom::Literal(text) => write!(f, "'{}'", text),
            Atom::TokenRef(name) => write!(f, "{}", name),
            Atom::RuleRef(name) => write!(f, "{}", name),
        }
    }
}

/// One step of an alternative: a suffixed atom or a parenthesized group.
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum Element {
    Atom {
        atom: Atom,
        suffix: Option<Suffix>,
    },
    Group {
        alternatives: Vec<Alternative>,
        suffix: Option<Suffix>,
    },
}

impl Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Element::Atom { atom, suffix } => {
                write!(f, "{}", atom)?;
                match suffix {
                    Some(s) => write!(f, "{}", s),
                    None => Ok(()),
                }
            }
            Element::Group {
                alternatives,
                suffix,
            } => {
                write!(f, "( ")?;
                write_alternatives(f, alternatives)?;
                write!(f, " )")?;
                match suffix {
                    Some(s) => write!(f, "{}", s),
                    None => Ok(()),
                }
            }
        }
    }
}

/// One alternative of a rule body: an ordered element sequence, optionally
/// carrying a `# Label` disambiguation label.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Alternative {
    pub elements: Vec<Element>,
    pub label: Option<Identifier>,
}

impl Display for Alternative {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", element)?;
        }
        if let Some(label) = &self.label {
            write!(f, " # {}", label)?;
        }
        Ok(())
    }
}

fn write_alternatives(f: &mut fmt::Formatter, alternatives: &[Alternative]) -> fmt::Result {
    for (i, alternative) in alternatives.iter().enumerate() {
        if i > 0 {
            write!(f, " | ")?;
        }
        write!(f, "{}", alternative)?;
    }
    Ok(())
}

/// The body of a rule. Token rule patterns are kept as raw text.
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum Body {
    Alternatives(Vec<Alternative>),
    Token(String),
}

/// A single rule declaration.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Rule {
    pub name: Identifier,
    pub body: Body,
}

impl Rule {
    pub fn is_lexical(&self) -> bool {
        matches!(self.body, Body::Token(_))
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.body {
            Body::Alternatives(alternatives) => {
                write!(f, "{} : ", self.name)?;
                write_alternatives(f, alternatives)?;
                write!(f, " ;")
            }
            Body::Token(raw) => write!(f, "{} : {} ;", self.name, raw),
        }
    }
}

impl FromStr for Rule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (_, rule) = parser::rule(s)?;
        Ok(rule)
    }
}

/// A full grammar: an optional `grammar Name ;` header and the rule
/// declarations in source order.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Grammar {
    pub name: Option<Identifier>,
    pub rules: Vec<Rule>,
}

impl Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(name) = &self.name {
            writeln!(f, "grammar {} ;", name)?;
        }
        for rule in &self.rules {
            writeln!(f, "{}", rule)?;
        }
        Ok(())
    }
}

impl FromStr for Grammar {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (rem, grammar) = parser::grammar(s)?;
        if !rem.trim().is_empty() {
            let near = rem.trim_start().lines().next().unwrap_or("");
            return Err(Error::Syntax(format!("unexpected input near `{}`", near)));
        }
        Ok(grammar)
    }
}
