use std::fmt::Display;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixity {
    Binary,
    Prefix,
    Suffix,
    Access,
}

impl Display for Fixity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Fixity::Binary => write!(f, "binary"),
            Fixity::Prefix => write!(f, "prefix"),
            Fixity::Suffix => write!(f, "suffix"),
            Fixity::Access => write!(f, "access"),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unknown {fixity} operator '{token}'")]
    UnknownOperator { token: String, fixity: Fixity },
    #[error("invalid member name '{0}'")]
    InvalidIdentifier(String),
    #[error("invalid element type '{0}'")]
    InvalidTypeName(String),
}

impl Error {
    pub fn message(&self) -> String {
        self.to_string()
    }
}
