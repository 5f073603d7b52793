use crate::{
    ast::{
        Access, Assign, Binary, Block, Call, Conditional, Index, Lambda, Literal, New, NodeKind,
        Prefix, Return, Root, Suffix, Tuple,
    },
    visitor::{AstNode, Visitor},
};

/// Records every reachable node, pre-order, children in field declaration order.
#[derive(Debug, Default)]
pub struct KindCollector {
    pub kinds: Vec<NodeKind>,
}

impl KindCollector {
    pub fn new() -> Self {
        KindCollector { kinds: vec![] }
    }

    pub fn collect<N: AstNode>(node: &N) -> Vec<NodeKind> {
        let mut collector = KindCollector::new();
        collector.walk(node);
        collector.kinds
    }

    /// Kinds from `NodeKind::ALL` that were never reached.
    pub fn missing(&self) -> Vec<NodeKind> {
        NodeKind::ALL
            .into_iter()
            .filter(|kind| !self.kinds.contains(kind))
            .collect()
    }

    pub fn walk<N: AstNode>(&mut self, node: &N) {
        node.accept(self)
    }

    fn visit_all<N: AstNode>(&mut self, nodes: &[N]) {
        for node in nodes {
            self.walk(node);
        }
    }
}

impl Visitor<()> for KindCollector {
    fn visit_root(&mut self, root: &Root) {
        self.kinds.push(NodeKind::Root);
        self.visit_all(&root.statements);
    }

    fn visit_assign(&mut self, assign: &Assign) {
        self.kinds.push(NodeKind::Assign);
        self.walk(&*assign.left);
        self.walk(&*assign.right);
    }

    fn visit_binary(&mut self, binary: &Binary) {
        self.kinds.push(NodeKind::Binary);
        self.walk(&*binary.left);
        self.walk(&*binary.right);
    }

    fn visit_prefix(&mut self, prefix: &Prefix) {
        self.kinds.push(NodeKind::Prefix);
        self.walk(&*prefix.operand);
    }

    fn visit_suffix(&mut self, suffix: &Suffix) {
        self.kinds.push(NodeKind::Suffix);
        self.walk(&*suffix.operand);
    }

    fn visit_index(&mut self, index: &Index) {
        self.kinds.push(NodeKind::Index);
        self.walk(&*index.base);
        self.walk(&*index.index);
    }

    fn visit_call(&mut self, call: &Call) {
        self.kinds.push(NodeKind::Call);
        self.walk(&*call.callee);
        self.visit_all(&call.arguments);
    }

    fn visit_lambda(&mut self, lambda: &Lambda) {
        self.kinds.push(NodeKind::Lambda);
        self.walk(&*lambda.body);
        self.visit_all(&lambda.parameters);
    }

    fn visit_access(&mut self, access: &Access) {
        self.kinds.push(NodeKind::Access);
        self.walk(&*access.base);
    }

    fn visit_new(&mut self, new: &New) {
        self.kinds.push(NodeKind::New);
        self.visit_all(&new.dimensions);
    }

    fn visit_conditional(&mut self, conditional: &Conditional) {
        self.kinds.push(NodeKind::Conditional);
        self.walk(&*conditional.condition);
        self.walk(&*conditional.then_branch);
        self.walk(&*conditional.else_branch);
    }

    fn visit_tuple(&mut self, tuple: &Tuple) {
        self.kinds.push(NodeKind::Tuple);
        self.visit_all(&tuple.0);
    }

    fn visit_return(&mut self, ret: &Return) {
        self.kinds.push(NodeKind::Return);
        if let Some(value) = &ret.0 {
            self.walk(&**value);
        }
    }

    fn visit_block(&mut self, block: &Block) {
        self.kinds.push(NodeKind::Block);
        self.visit_all(&block.0);
    }

    fn visit_literal(&mut self, _literal: &Literal) {
        self.kinds.push(NodeKind::Literal);
    }
}
