use std::fmt::Display;
use std::str::FromStr;

use phf::phf_map;

use crate::errors::{Error, Fixity};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum BinaryOperator {
    // Arithmetic
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    // Comparison
    Equal,
    NotEqual,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
    // Boolean arithmetic
    And,
    Or,
    // Bitwise
    BitAnd,
    BitOr,
    BitXor,
    ShiftLeft,
    ShiftRight,
    // Compound assignment
    AddAssign,
    SubtractAssign,
    MultiplyAssign,
    DivideAssign,
    ModuloAssign,
    BitAndAssign,
    BitOrAssign,
    BitXorAssign,
    ShiftLeftAssign,
    ShiftRightAssign,
}

impl BinaryOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulo => "%",
            BinaryOperator::Equal => "==",
            BinaryOperator::NotEqual => "!=",
            BinaryOperator::Less => "<",
            BinaryOperator::LessOrEqual => "<=",
            BinaryOperator::Greater => ">",
            BinaryOperator::GreaterOrEqual => ">=",
            BinaryOperator::And => "&&",
            BinaryOperator::Or => "||",
            BinaryOperator::BitAnd => "&",
            BinaryOperator::BitOr => "|",
            BinaryOperator::BitXor => "^",
            BinaryOperator::ShiftLeft => "<<",
            BinaryOperator::ShiftRight => ">>",
            BinaryOperator::AddAssign => "+=",
            BinaryOperator::SubtractAssign => "-=",
            BinaryOperator::MultiplyAssign => "*=",
            BinaryOperator::DivideAssign => "/=",
            BinaryOperator::ModuloAssign => "%=",
            BinaryOperator::BitAndAssign => "&=",
            BinaryOperator::BitOrAssign => "|=",
            BinaryOperator::BitXorAssign => "^=",
            BinaryOperator::ShiftLeftAssign => "<<=",
            BinaryOperator::ShiftRightAssign => ">>=",
        }
    }

    /// Binding strength, C++ ordering. Higher binds tighter.
    pub fn precedence(&self) -> u8 {
        match self {
            BinaryOperator::Multiply | BinaryOperator::Divide | BinaryOperator::Modulo => 12,
            BinaryOperator::Add | BinaryOperator::Subtract => 11,
            BinaryOperator::ShiftLeft | BinaryOperator::ShiftRight => 10,
            BinaryOperator::Less
            | BinaryOperator::LessOrEqual
            | BinaryOperator::Greater
            | BinaryOperator::GreaterOrEqual => 9,
            BinaryOperator::Equal | BinaryOperator::NotEqual => 8,
            BinaryOperator::BitAnd => 7,
            BinaryOperator::BitXor => 6,
            BinaryOperator::BitOr => 5,
            BinaryOperator::And => 4,
            BinaryOperator::Or => 3,
            _ => 1,
        }
    }

    pub fn is_right_associative(&self) -> bool {
        self.precedence() == 1
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum PrefixOperator {
    Negate,
    Plus,
    Not,
    BitNot,
    Increment,
    Decrement,
    Dereference,
    AddressOf,
}

impl PrefixOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrefixOperator::Negate => "-",
            PrefixOperator::Plus => "+",
            PrefixOperator::Not => "!",
            PrefixOperator::BitNot => "~",
            PrefixOperator::Increment => "++",
            PrefixOperator::Decrement => "--",
            PrefixOperator::Dereference => "*",
            PrefixOperator::AddressOf => "&",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum SuffixOperator {
    Increment,
    Decrement,
}

impl SuffixOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuffixOperator::Increment => "++",
            SuffixOperator::Decrement => "--",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum AccessOperator {
    Value,
    Pointer,
    Scope,
}

impl AccessOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessOperator::Value => ".",
            AccessOperator::Pointer => "->",
            AccessOperator::Scope => "::",
        }
    }
}

macro_rules! operator_token {
    ($name:ident, $table:ident, $fixity:expr) => {
        impl FromStr for $name {
            type Err = Error;

            fn from_str(token: &str) -> Result<Self, Self::Err> {
                $table.get(token).copied().ok_or_else(|| Error::UnknownOperator {
                    token: token.to_string(),
                    fixity: $fixity,
                })
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }
    };
}

operator_token!(BinaryOperator, BINARY_OPERATORS, Fixity::Binary);
operator_token!(PrefixOperator, PREFIX_OPERATORS, Fixity::Prefix);
operator_token!(SuffixOperator, SUFFIX_OPERATORS, Fixity::Suffix);
operator_token!(AccessOperator, ACCESS_OPERATORS, Fixity::Access);

static BINARY_OPERATORS: phf::Map<&'static str, BinaryOperator> = phf_map! {
    "+"    => BinaryOperator::Add,
    "-"    => BinaryOperator::Subtract,
    "*"    => BinaryOperator::Multiply,
    "/"    => BinaryOperator::Divide,
    "%"    => BinaryOperator::Modulo,
    "=="   => BinaryOperator::Equal,
    "is"   => BinaryOperator::Equal,
    "!="   => BinaryOperator::NotEqual,
    "isnt" => BinaryOperator::NotEqual,
    "<"    => BinaryOperator::Less,
    "<="   => BinaryOperator::LessOrEqual,
    ">"    => BinaryOperator::Greater,
    ">="   => BinaryOperator::GreaterOrEqual,
    "&&"   => BinaryOperator::And,
    "and"  => BinaryOperator::And,
    "||"   => BinaryOperator::Or,
    "or"   => BinaryOperator::Or,
    "&"    => BinaryOperator::BitAnd,
    "|"    => BinaryOperator::BitOr,
    "^"    => BinaryOperator::BitXor,
    "<<"   => BinaryOperator::ShiftLeft,
    ">>"   => BinaryOperator::ShiftRight,
    "+="   => BinaryOperator::AddAssign,
    "-="   => BinaryOperator::SubtractAssign,
    "*="   => BinaryOperator::MultiplyAssign,
    "/="   => BinaryOperator::DivideAssign,
    "%="   => BinaryOperator::ModuloAssign,
    "&="   => BinaryOperator::BitAndAssign,
    "|="   => BinaryOperator::BitOrAssign,
    "^="   => BinaryOperator::BitXorAssign,
    "<<="  => BinaryOperator::ShiftLeftAssign,
    ">>="  => BinaryOperator::ShiftRightAssign,
};

static PREFIX_OPERATORS: phf::Map<&'static str, PrefixOperator> = phf_map! {
    "-"   => PrefixOperator::Negate,
    "+"   => PrefixOperator::Plus,
    "!"   => PrefixOperator::Not,
    "not" => PrefixOperator::Not,
    "~"   => PrefixOperator::BitNot,
    "++"  => PrefixOperator::Increment,
    "--"  => PrefixOperator::Decrement,
    "*"   => PrefixOperator::Dereference,
    "&"   => PrefixOperator::AddressOf,
};

static SUFFIX_OPERATORS: phf::Map<&'static str, SuffixOperator> = phf_map! {
    "++" => SuffixOperator::Increment,
    "--" => SuffixOperator::Decrement,
};

static ACCESS_OPERATORS: phf::Map<&'static str, AccessOperator> = phf_map! {
    "."  => AccessOperator::Value,
    "->" => AccessOperator::Pointer,
    "::" => AccessOperator::Scope,
};
