use std::fmt::{Debug, Display};
use std::sync::OnceLock;

use regex::Regex;

use crate::errors::{Error, Result};
use crate::tokens::{AccessOperator, BinaryOperator, PrefixOperator, SuffixOperator};

type BExpression = Box<Expression>;

/// Member name of an access expression. Always a non-empty identifier.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(name: &str) -> Result<Self> {
        if identifier_pattern().is_match(name) {
            Ok(Identifier(name.to_string()))
        } else {
            Err(Error::InvalidIdentifier(name.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Debug for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Element type of an allocation, spelled the way the target language spells it
/// (`int`, `std::vector<int>`, `char*`).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TypeName(String);

impl TypeName {
    pub fn new(name: &str) -> Result<Self> {
        if name.trim() == name && type_name_pattern().is_match(name) && brackets_balanced(name) {
            Ok(TypeName(name.to_string()))
        } else {
            Err(Error::InvalidTypeName(name.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Debug for TypeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for TypeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn identifier_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern"))
}

fn type_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_:<>,*& \[\]]*$").expect("type name pattern")
    })
}

/// `<>` and `[]` pairs must nest properly.
fn brackets_balanced(name: &str) -> bool {
    let mut open: Vec<char> = vec![];
    for c in name.chars() {
        match c {
            '<' | '[' => open.push(c),
            '>' => {
                if open.pop() != Some('<') {
                    return false;
                }
            }
            ']' => {
                if open.pop() != Some('[') {
                    return false;
                }
            }
            _ => {}
        }
    }
    open.is_empty()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assign {
    pub left: BExpression,
    pub right: BExpression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Binary {
    pub operator: BinaryOperator,
    pub left: BExpression,
    pub right: BExpression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Prefix {
    pub operator: PrefixOperator,
    pub operand: BExpression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Suffix {
    pub operator: SuffixOperator,
    pub operand: BExpression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Index {
    pub base: BExpression,
    pub index: BExpression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub callee: BExpression,
    pub arguments: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Lambda {
    pub body: BExpression,
    pub parameters: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Access {
    pub base: BExpression,
    pub operator: AccessOperator,
    pub member: Identifier,
}

#[derive(Debug, Clone, PartialEq)]
pub struct New {
    pub element_type: TypeName,
    pub dimensions: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Conditional {
    pub condition: BExpression,
    pub then_branch: BExpression,
    pub else_branch: BExpression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tuple(pub Vec<Expression>);

#[derive(Debug, Clone, PartialEq)]
pub struct Return(pub Option<BExpression>);

#[derive(Debug, Clone, PartialEq)]
pub struct Block(pub Vec<Statement>);

#[derive(Debug, Clone, PartialEq)]
pub struct Literal(pub String);

impl Assign {
    pub fn new(left: Expression, right: Expression) -> Self {
        Assign {
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

impl Binary {
    pub fn new(operator: &str, left: Expression, right: Expression) -> Result<Self> {
        Ok(Binary {
            operator: operator.parse()?,
            left: Box::new(left),
            right: Box::new(right),
        })
    }
}

impl Prefix {
    pub fn new(operator: &str, operand: Expression) -> Result<Self> {
        Ok(Prefix {
            operator: operator.parse()?,
            operand: Box::new(operand),
        })
    }
}

impl Suffix {
    pub fn new(operator: &str, operand: Expression) -> Result<Self> {
        Ok(Suffix {
            operator: operator.parse()?,
            operand: Box::new(operand),
        })
    }
}

impl Index {
    pub fn new(base: Expression, index: Expression) -> Self {
        Index {
            base: Box::new(base),
            index: Box::new(index),
        }
    }
}

impl Call {
    pub fn new(callee: Expression, arguments: Vec<Expression>) -> Self {
        Call {
            callee: Box::new(callee),
            arguments,
        }
    }
}

impl Lambda {
    /// A missing parameter list is stored as an empty one.
    pub fn new(body: Expression, parameters: Option<Vec<Statement>>) -> Self {
        Lambda {
            body: Box::new(body),
            parameters: parameters.unwrap_or_default(),
        }
    }
}

impl Access {
    pub fn new(base: Expression, operator: &str, member: &str) -> Result<Self> {
        Ok(Access {
            base: Box::new(base),
            operator: operator.parse()?,
            member: Identifier::new(member)?,
        })
    }
}

impl New {
    pub fn new(element_type: &str, dimensions: Vec<Expression>) -> Result<Self> {
        Ok(New {
            element_type: TypeName::new(element_type)?,
            dimensions,
        })
    }
}

impl Conditional {
    pub fn new(condition: Expression, then_branch: Expression, else_branch: Expression) -> Self {
        Conditional {
            condition: Box::new(condition),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Assign(Assign),
    Binary(Binary),
    Prefix(Prefix),
    Suffix(Suffix),
    Index(Index),
    Call(Call),
    Lambda(Lambda),
    Access(Access),
    New(New),
    Conditional(Conditional),
    Tuple(Tuple),
    Return(Return),
    Block(Block),
    Literal(Literal),
}

impl Expression {
    pub fn assign(left: Expression, right: Expression) -> Self {
        Expression::Assign(Assign::new(left, right))
    }

    pub fn binary(operator: &str, left: Expression, right: Expression) -> Result<Self> {
        Ok(Expression::Binary(Binary::new(operator, left, right)?))
    }

    pub fn prefix(operator: &str, operand: Expression) -> Result<Self> {
        Ok(Expression::Prefix(Prefix::new(operator, operand)?))
    }

    pub fn suffix(operator: &str, operand: Expression) -> Result<Self> {
        Ok(Expression::Suffix(Suffix::new(operator, operand)?))
    }

    pub fn index(base: Expression, index: Expression) -> Self {
        Expression::Index(Index::new(base, index))
    }

    pub fn call(callee: Expression, arguments: Vec<Expression>) -> Self {
        Expression::Call(Call::new(callee, arguments))
    }

    pub fn lambda(body: Expression, parameters: Option<Vec<Statement>>) -> Self {
        Expression::Lambda(Lambda::new(body, parameters))
    }

    pub fn access(base: Expression, operator: &str, member: &str) -> Result<Self> {
        Ok(Expression::Access(Access::new(base, operator, member)?))
    }

    pub fn new_array(element_type: &str, dimensions: Vec<Expression>) -> Result<Self> {
        Ok(Expression::New(New::new(element_type, dimensions)?))
    }

    pub fn conditional(
        condition: Expression,
        then_branch: Expression,
        else_branch: Expression,
    ) -> Self {
        Expression::Conditional(Conditional::new(condition, then_branch, else_branch))
    }

    pub fn tuple(elements: Vec<Expression>) -> Self {
        Expression::Tuple(Tuple(elements))
    }

    pub fn ret(value: Option<Expression>) -> Self {
        Expression::Return(Return(value.map(Box::new)))
    }

    pub fn block(statements: Vec<Statement>) -> Self {
        Expression::Block(Block(statements))
    }

    pub fn literal(text: &str) -> Self {
        Expression::Literal(Literal(text.to_string()))
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Expression::Assign(_) => NodeKind::Assign,
            Expression::Binary(_) => NodeKind::Binary,
            Expression::Prefix(_) => NodeKind::Prefix,
            Expression::Suffix(_) => NodeKind::Suffix,
            Expression::Index(_) => NodeKind::Index,
            Expression::Call(_) => NodeKind::Call,
            Expression::Lambda(_) => NodeKind::Lambda,
            Expression::Access(_) => NodeKind::Access,
            Expression::New(_) => NodeKind::New,
            Expression::Conditional(_) => NodeKind::Conditional,
            Expression::Tuple(_) => NodeKind::Tuple,
            Expression::Return(_) => NodeKind::Return,
            Expression::Block(_) => NodeKind::Block,
            Expression::Literal(_) => NodeKind::Literal,
        }
    }
}

/// Anything that can stand in a statement sequence. Every expression is also a
/// statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Expression(Expression),
}

impl Statement {
    pub fn kind(&self) -> NodeKind {
        match self {
            Statement::Expression(expression) => expression.kind(),
        }
    }
}

impl From<Expression> for Statement {
    fn from(expression: Expression) -> Self {
        Statement::Expression(expression)
    }
}

/// One compilation unit. Statements are emitted in the order they are stored.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Root {
    pub statements: Vec<Statement>,
}

impl Root {
    pub fn new(statements: Vec<Statement>) -> Self {
        Root { statements }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Root,
    Assign,
    Binary,
    Prefix,
    Suffix,
    Index,
    Call,
    Lambda,
    Access,
    New,
    Conditional,
    Tuple,
    Return,
    Block,
    Literal,
}

impl NodeKind {
    pub const ALL: [NodeKind; 15] = [
        NodeKind::Root,
        NodeKind::Assign,
        NodeKind::Binary,
        NodeKind::Prefix,
        NodeKind::Suffix,
        NodeKind::Index,
        NodeKind::Call,
        NodeKind::Lambda,
        NodeKind::Access,
        NodeKind::New,
        NodeKind::Conditional,
        NodeKind::Tuple,
        NodeKind::Return,
        NodeKind::Block,
        NodeKind::Literal,
    ];
}
