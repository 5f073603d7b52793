#[cfg(test)]
mod tests {
    use std::thread;

    use crate::{
        ast::{
            Access, Assign, Binary, Block, Call, Conditional, Expression, Index, Lambda, Literal,
            New, NodeKind, Prefix, Return, Root, Suffix, Tuple,
        },
        cpp_renderer::CppRenderer,
        kind_collector::KindCollector,
        visitor::{AstNode, Visitor},
    };

    /// Answers which handler was reached, without descending.
    #[derive(Default)]
    struct HandlerLog {
        calls: Vec<&'static str>,
    }

    impl HandlerLog {
        fn route<N: AstNode>(&mut self, node: &N) -> &'static str {
            node.accept(self)
        }

        fn record(&mut self, handler: &'static str) -> &'static str {
            self.calls.push(handler);
            handler
        }
    }

    impl Visitor<&'static str> for HandlerLog {
        fn visit_root(&mut self, _root: &Root) -> &'static str {
            self.record("root")
        }
        fn visit_assign(&mut self, _assign: &Assign) -> &'static str {
            self.record("assign")
        }
        fn visit_binary(&mut self, _binary: &Binary) -> &'static str {
            self.record("binary")
        }
        fn visit_prefix(&mut self, _prefix: &Prefix) -> &'static str {
            self.record("prefix")
        }
        fn visit_suffix(&mut self, _suffix: &Suffix) -> &'static str {
            self.record("suffix")
        }
        fn visit_index(&mut self, _index: &Index) -> &'static str {
            self.record("index")
        }
        fn visit_call(&mut self, _call: &Call) -> &'static str {
            self.record("call")
        }
        fn visit_lambda(&mut self, _lambda: &Lambda) -> &'static str {
            self.record("lambda")
        }
        fn visit_access(&mut self, _access: &Access) -> &'static str {
            self.record("access")
        }
        fn visit_new(&mut self, _new: &New) -> &'static str {
            self.record("new")
        }
        fn visit_conditional(&mut self, _conditional: &Conditional) -> &'static str {
            self.record("conditional")
        }
        fn visit_tuple(&mut self, _tuple: &Tuple) -> &'static str {
            self.record("tuple")
        }
        fn visit_return(&mut self, _ret: &Return) -> &'static str {
            self.record("return")
        }
        fn visit_block(&mut self, _block: &Block) -> &'static str {
            self.record("block")
        }
        fn visit_literal(&mut self, _literal: &Literal) -> &'static str {
            self.record("literal")
        }
    }

    fn lit(text: &str) -> Expression {
        Expression::literal(text)
    }

    fn one_of_each() -> Vec<(Expression, &'static str)> {
        vec![
            (Expression::assign(lit("a"), lit("b")), "assign"),
            (Expression::binary("*", lit("a"), lit("b")).unwrap(), "binary"),
            (Expression::prefix("-", lit("a")).unwrap(), "prefix"),
            (Expression::suffix("++", lit("a")).unwrap(), "suffix"),
            (Expression::index(lit("a"), lit("0")), "index"),
            (Expression::call(lit("f"), vec![]), "call"),
            (Expression::lambda(lit("1"), None), "lambda"),
            (Expression::access(lit("a"), ".", "b").unwrap(), "access"),
            (Expression::new_array("int", vec![lit("4")]).unwrap(), "new"),
            (Expression::conditional(lit("c"), lit("a"), lit("b")), "conditional"),
            (Expression::tuple(vec![]), "tuple"),
            (Expression::ret(None), "return"),
            (Expression::block(vec![]), "block"),
            (lit("42"), "literal"),
        ]
    }

    /// Uses every variant at least once.
    fn full_tree() -> Root {
        let condition = Expression::binary("<", lit("i"), lit("n")).unwrap();
        let element = Expression::index(lit("xs"), Expression::suffix("++", lit("i")).unwrap());
        let body = Expression::block(vec![
            Expression::assign(
                lit("y"),
                Expression::conditional(condition, element, Expression::prefix("-", lit("1")).unwrap()),
            )
            .into(),
            Expression::ret(Some(Expression::tuple(vec![lit("y"), lit("i")]))).into(),
        ]);
        let lambda = Expression::lambda(body, Some(vec![lit("int i").into()]));
        let size = Expression::call(
            Expression::access(lit("xs"), ".", "size").unwrap(),
            vec![],
        );
        Root::new(vec![
            Expression::assign(lit("auto f"), lambda).into(),
            Expression::new_array("int", vec![size]).unwrap().into(),
        ])
    }

    #[test]
    fn each_variant_routes_to_its_handler() {
        let mut log = HandlerLog::default();
        for (expression, handler) in one_of_each() {
            assert_eq!(log.route(&expression), handler);
        }
        assert_eq!(log.route(&Root::default()), "root");
        // One handler per accept, never zero, never two.
        assert_eq!(log.calls.len(), one_of_each().len() + 1);
    }

    #[test]
    fn statement_routes_like_its_expression() {
        let mut log = HandlerLog::default();
        let statement: crate::ast::Statement = Expression::ret(None).into();
        assert_eq!(log.route(&statement), "return");
        assert_eq!(log.calls, vec!["return"]);
    }

    #[test]
    fn preorder_in_field_order() {
        let tree = Expression::call(
            lit("f"),
            vec![
                Expression::binary("+", lit("1"), lit("2")).unwrap(),
                Expression::prefix("!", lit("ok")).unwrap(),
            ],
        );
        assert_eq!(
            KindCollector::collect(&tree),
            vec![
                NodeKind::Call,
                NodeKind::Literal,
                NodeKind::Binary,
                NodeKind::Literal,
                NodeKind::Literal,
                NodeKind::Prefix,
                NodeKind::Literal,
            ]
        );
    }

    #[test]
    fn lambda_visits_body_before_parameters() {
        let lambda = Expression::lambda(lit("a"), Some(vec![Expression::tuple(vec![]).into()]));
        assert_eq!(
            KindCollector::collect(&lambda),
            vec![NodeKind::Lambda, NodeKind::Literal, NodeKind::Tuple]
        );
    }

    #[test]
    fn traversal_covers_every_node_once() {
        let tree = full_tree();
        let mut collector = KindCollector::new();
        collector.walk(&tree);

        assert!(collector.missing().is_empty(), "{:?}", collector.missing());
        assert_eq!(collector.kinds.len(), 26);
        assert_eq!(
            collector.kinds.iter().filter(|kind| **kind == NodeKind::Root).count(),
            1
        );
        assert_eq!(
            collector
                .kinds
                .iter()
                .filter(|kind| **kind == NodeKind::Literal)
                .count(),
            11
        );
    }

    #[test]
    fn empty_containers_visit_only_themselves() {
        assert_eq!(KindCollector::collect(&Root::default()), vec![NodeKind::Root]);
        assert_eq!(
            KindCollector::collect(&Expression::block(vec![])),
            vec![NodeKind::Block]
        );
        assert_eq!(
            KindCollector::collect(&Expression::tuple(vec![])),
            vec![NodeKind::Tuple]
        );
        assert_eq!(
            KindCollector::collect(&Expression::call(lit("f"), vec![])),
            vec![NodeKind::Call, NodeKind::Literal]
        );
        assert_eq!(
            KindCollector::collect(&Expression::ret(None)),
            vec![NodeKind::Return]
        );
    }

    #[test]
    fn accept_leaves_tree_untouched() {
        let tree = full_tree();
        let copy = tree.clone();
        let first = KindCollector::collect(&tree);
        let second = KindCollector::collect(&tree);
        assert_eq!(first, second);
        assert_eq!(tree, copy);
    }

    #[test]
    fn concurrent_visitors() {
        let owned = full_tree();
        let tree = &owned;
        let expected = CppRenderer::default().render(tree);

        thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(move || CppRenderer::default().render(tree)))
                .collect();
            let kinds = scope.spawn(move || KindCollector::collect(tree));

            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
            assert!(kinds.join().unwrap().contains(&NodeKind::Lambda));
        });
    }
}
