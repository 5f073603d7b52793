use crate::{
    ast::{
        Access, Assign, Binary, Block, Call, Conditional, Expression, Index, Lambda, Literal, New,
        Prefix, Return, Root, Statement, Suffix, Tuple,
    },
    visitor::{AstNode, Visitor},
};

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub indent_width: usize,
    pub lambda_capture: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            indent_width: 4,
            lambda_capture: String::from("&"),
        }
    }
}

// Binding strengths of non-binary expressions, on the scale of
// `BinaryOperator::precedence`.
const ASSIGNMENT: u8 = 1;
const CONDITIONAL: u8 = 2;
const UNARY: u8 = 13;
const POSTFIX: u8 = 14;

/// Renders a tree as C++ source text.
pub struct CppRenderer {
    options: RenderOptions,
    depth: usize,
}

impl Default for CppRenderer {
    fn default() -> Self {
        CppRenderer::new(RenderOptions::default())
    }
}

impl CppRenderer {
    pub fn new(options: RenderOptions) -> Self {
        CppRenderer { options, depth: 0 }
    }

    pub fn render<N: AstNode>(&mut self, node: &N) -> String {
        node.accept(self)
    }

    fn indentation(&self) -> String {
        " ".repeat(self.options.indent_width * self.depth)
    }

    fn binding(expression: &Expression) -> u8 {
        match expression {
            Expression::Binary(binary) => binary.operator.precedence(),
            Expression::Assign(_) => ASSIGNMENT,
            Expression::Conditional(_) => CONDITIONAL,
            Expression::Prefix(_) | Expression::New(_) => UNARY,
            // `return` only belongs in statement position; it is emitted bare
            // wherever the tree puts it.
            _ => POSTFIX,
        }
    }

    /// Renders `expression`, parenthesized when it binds looser than `min`.
    fn operand(&mut self, expression: &Expression, min: u8) -> String {
        let text = self.render(expression);
        if Self::binding(expression) < min {
            format!("({})", text)
        } else {
            text
        }
    }

    fn list<N: AstNode>(&mut self, nodes: &[N]) -> String {
        nodes
            .iter()
            .map(|node| self.render(node))
            .collect::<Vec<String>>()
            .join(", ")
    }

    fn terminator(statement: &Statement) -> &'static str {
        match statement {
            Statement::Expression(Expression::Block(_)) => "",
            _ => ";",
        }
    }
}

impl Visitor<String> for CppRenderer {
    fn visit_root(&mut self, root: &Root) -> String {
        let mut unit = String::new();
        for statement in &root.statements {
            unit.push_str(&self.render(statement));
            unit.push_str(Self::terminator(statement));
            unit.push('\n');
        }
        unit
    }

    fn visit_assign(&mut self, assign: &Assign) -> String {
        let left = self.operand(&assign.left, CONDITIONAL + 1);
        let right = self.operand(&assign.right, ASSIGNMENT);
        format!("{} = {}", left, right)
    }

    fn visit_binary(&mut self, binary: &Binary) -> String {
        let precedence = binary.operator.precedence();
        let (left_min, right_min) = if binary.operator.is_right_associative() {
            (CONDITIONAL + 1, precedence)
        } else {
            (precedence, precedence + 1)
        };
        let left = self.operand(&binary.left, left_min);
        let right = self.operand(&binary.right, right_min);
        format!("{} {} {}", left, binary.operator, right)
    }

    fn visit_prefix(&mut self, prefix: &Prefix) -> String {
        let operand = self.operand(&prefix.operand, UNARY);
        let operator = prefix.operator.as_str();
        // `- -x` must not lex as `--x`.
        if operator.chars().last() == operand.chars().next() {
            format!("{} {}", operator, operand)
        } else {
            format!("{}{}", operator, operand)
        }
    }

    fn visit_suffix(&mut self, suffix: &Suffix) -> String {
        let operand = self.operand(&suffix.operand, POSTFIX);
        format!("{}{}", operand, suffix.operator)
    }

    fn visit_index(&mut self, index: &Index) -> String {
        let base = self.operand(&index.base, POSTFIX);
        let position = self.render(&*index.index);
        format!("{}[{}]", base, position)
    }

    fn visit_call(&mut self, call: &Call) -> String {
        let callee = self.operand(&call.callee, POSTFIX);
        let arguments = self.list(&call.arguments);
        format!("{}({})", callee, arguments)
    }

    fn visit_lambda(&mut self, lambda: &Lambda) -> String {
        let parameters = self.list(&lambda.parameters);
        let head = format!("[{}]({})", self.options.lambda_capture, parameters);
        match &*lambda.body {
            Expression::Block(block) => format!("{} {}", head, self.visit_block(block)),
            Expression::Return(ret) => format!("{} {{ {}; }}", head, self.visit_return(ret)),
            body => format!("{} {{ return {}; }}", head, self.render(body)),
        }
    }

    fn visit_access(&mut self, access: &Access) -> String {
        let base = self.operand(&access.base, POSTFIX);
        format!("{}{}{}", base, access.operator, access.member)
    }

    fn visit_new(&mut self, new: &New) -> String {
        if new.dimensions.is_empty() {
            return format!("new {}()", new.element_type);
        }
        let mut text = format!("new {}", new.element_type);
        for dimension in &new.dimensions {
            text.push_str(&format!("[{}]", self.render(dimension)));
        }
        text
    }

    fn visit_conditional(&mut self, conditional: &Conditional) -> String {
        let condition = self.operand(&conditional.condition, CONDITIONAL + 1);
        let then_branch = self.operand(&conditional.then_branch, CONDITIONAL);
        let else_branch = self.operand(&conditional.else_branch, CONDITIONAL);
        format!("{} ? {} : {}", condition, then_branch, else_branch)
    }

    fn visit_tuple(&mut self, tuple: &Tuple) -> String {
        format!("std::make_tuple({})", self.list(&tuple.0))
    }

    fn visit_return(&mut self, ret: &Return) -> String {
        match &ret.0 {
            Some(value) => format!("return {}", self.render(&**value)),
            None => String::from("return"),
        }
    }

    fn visit_block(&mut self, block: &Block) -> String {
        if block.0.is_empty() {
            return String::from("{}");
        }
        self.depth += 1;
        let mut lines = vec![];
        for statement in &block.0 {
            let text = self.render(statement);
            lines.push(format!(
                "{}{}{}",
                self.indentation(),
                text,
                Self::terminator(statement)
            ));
        }
        self.depth -= 1;
        format!("{{\n{}\n{}}}", lines.join("\n"), self.indentation())
    }

    fn visit_literal(&mut self, literal: &Literal) -> String {
        literal.0.clone()
    }
}
