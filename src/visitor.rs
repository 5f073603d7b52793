use crate::ast::{
    Access, Assign, Binary, Block, Call, Conditional, Expression, Index, Lambda, Literal, New,
    Prefix, Return, Root, Statement, Suffix, Tuple,
};

/// A backend over the tree. There is one required handler per concrete node, so a
/// backend that misses a node does not compile. `R` is whatever the backend produces.
pub trait Visitor<R> {
    fn visit_root(&mut self, root: &Root) -> R;
    fn visit_assign(&mut self, assign: &Assign) -> R;
    fn visit_binary(&mut self, binary: &Binary) -> R;
    fn visit_prefix(&mut self, prefix: &Prefix) -> R;
    fn visit_suffix(&mut self, suffix: &Suffix) -> R;
    fn visit_index(&mut self, index: &Index) -> R;
    fn visit_call(&mut self, call: &Call) -> R;
    fn visit_lambda(&mut self, lambda: &Lambda) -> R;
    fn visit_access(&mut self, access: &Access) -> R;
    fn visit_new(&mut self, new: &New) -> R;
    fn visit_conditional(&mut self, conditional: &Conditional) -> R;
    fn visit_tuple(&mut self, tuple: &Tuple) -> R;
    fn visit_return(&mut self, ret: &Return) -> R;
    fn visit_block(&mut self, block: &Block) -> R;
    fn visit_literal(&mut self, literal: &Literal) -> R;
}

pub trait AstNode {
    /// Routes to the handler of the concrete node. Never touches the node itself.
    fn accept<R, V: Visitor<R> + ?Sized>(&self, visitor: &mut V) -> R;
}

impl AstNode for Root {
    fn accept<R, V: Visitor<R> + ?Sized>(&self, visitor: &mut V) -> R {
        visitor.visit_root(self)
    }
}

impl AstNode for Statement {
    fn accept<R, V: Visitor<R> + ?Sized>(&self, visitor: &mut V) -> R {
        match self {
            Statement::Expression(expression) => expression.accept(visitor),
        }
    }
}

impl AstNode for Expression {
    fn accept<R, V: Visitor<R> + ?Sized>(&self, visitor: &mut V) -> R {
        match self {
            Expression::Assign(node) => node.accept(visitor),
            Expression::Binary(node) => node.accept(visitor),
            Expression::Prefix(node) => node.accept(visitor),
            Expression::Suffix(node) => node.accept(visitor),
            Expression::Index(node) => node.accept(visitor),
            Expression::Call(node) => node.accept(visitor),
            Expression::Lambda(node) => node.accept(visitor),
            Expression::Access(node) => node.accept(visitor),
            Expression::New(node) => node.accept(visitor),
            Expression::Conditional(node) => node.accept(visitor),
            Expression::Tuple(node) => node.accept(visitor),
            Expression::Return(node) => node.accept(visitor),
            Expression::Block(node) => node.accept(visitor),
            Expression::Literal(node) => node.accept(visitor),
        }
    }
}

macro_rules! accept_via {
    ($($node:ident => $handler:ident),* $(,)?) => {
        $(
            impl AstNode for $node {
                fn accept<R, V: Visitor<R> + ?Sized>(&self, visitor: &mut V) -> R {
                    visitor.$handler(self)
                }
            }
        )*
    };
}

accept_via! {
    Assign => visit_assign,
    Binary => visit_binary,
    Prefix => visit_prefix,
    Suffix => visit_suffix,
    Index => visit_index,
    Call => visit_call,
    Lambda => visit_lambda,
    Access => visit_access,
    New => visit_new,
    Conditional => visit_conditional,
    Tuple => visit_tuple,
    Return => visit_return,
    Block => visit_block,
    Literal => visit_literal,
}
