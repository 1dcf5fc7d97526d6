use std::error;
use std::fmt::{self, Display};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// The front-end reported syntax errors in the source grammar. No
    /// document is produced.
    MalformedInput(antlr::Error),
    /// A construct the translation does not support, currently only labeled
    /// alternatives.
    UnsupportedConstruct { rule: String, label: String },
    /// An atom inside a lexical rule matching none of the disambiguation
    /// cases.
    UnknownAtomShape { rule: String, atom: String },
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::MalformedInput(err) => write!(f, "malformed grammar: {}", err),
            Error::UnsupportedConstruct { rule, label } => write!(
                f,
                "rule `{}`: labeled alternative `# {}` is not supported",
                rule, label
            ),
            Error::UnknownAtomShape { rule, atom } => write!(
                f,
                "rule `{}`: atom `{}` has no lexical translation",
                rule, atom
            ),
        }
    }
}

impl error::Error for Error {}

impl From<antlr::Error> for Error {
    fn from(err: antlr::Error) -> Error {
        Error::MalformedInput(err)
    }
}
