//! Resolver-usage traversal: is a named callback invoked with an argument
//! anywhere reachable in a subtree.
//!
//! Deliberately over-approximates. A call targeting the resolver with at
//! least one argument slot counts, and so does the bare resolver identifier
//! appearing in any call's argument position (the callee may invoke it
//! indirectly). The traversal prefers false positives over false negatives;
//! kinds without a rule yield false.
//!
//! The one subtree cut: a function whose first parameter re-binds the
//! resolver name shadows it, so nothing inside that function can reach the
//! outer resolver.

use retpath_ast::node::Node;
use tracing::trace;

/// Check whether `resolver_name` is possibly invoked with at least one
/// argument anywhere reachable in `node`.
pub fn resolver_invoked_non_empty(node: Option<&Node>, resolver_name: &str) -> bool {
    let Some(node) = node else {
        return false;
    };

    match node {
        Node::CallExpression(call) => {
            if call.expression.as_identifier_text() == Some(resolver_name)
                && !call.arguments.is_empty()
            {
                return true;
            }
            // The resolver handed to another call is assumed to be invoked
            // by the callee.
            call.arguments
                .iter()
                .any(|argument| argument.as_identifier_text() == Some(resolver_name))
                || call
                    .arguments
                    .iter()
                    .any(|argument| resolver_invoked_non_empty(Some(argument), resolver_name))
                || resolver_invoked_non_empty(Some(&call.expression), resolver_name)
        }

        Node::FunctionDeclaration(func)
        | Node::FunctionExpression(func)
        | Node::ArrowFunction(func) => {
            if func
                .parameters
                .first()
                .and_then(|parameter| parameter.identifier_name())
                == Some(resolver_name)
            {
                trace!(
                    resolver = resolver_name,
                    "first parameter shadows the resolver, skipping subtree"
                );
                return false;
            }
            func.body
                .as_ref()
                .is_some_and(|body| resolver_invoked_non_empty(Some(body.node()), resolver_name))
        }

        Node::ExpressionStatement(stmt) => {
            resolver_invoked_non_empty(Some(&stmt.expression), resolver_name)
        }
        Node::Decorator(decorator) => {
            resolver_invoked_non_empty(Some(&decorator.expression), resolver_name)
        }

        Node::Block(block) => block
            .statements
            .iter()
            .any(|statement| resolver_invoked_non_empty(Some(statement), resolver_name)),

        Node::ClassDeclaration(class) | Node::ClassExpression(class) => class
            .members
            .iter()
            .any(|member| resolver_invoked_non_empty(Some(member), resolver_name)),

        Node::MethodDefinition(method) => {
            method
                .decorators
                .iter()
                .any(|decorator| resolver_invoked_non_empty(Some(decorator), resolver_name))
                || (method.computed
                    && resolver_invoked_non_empty(Some(&method.name), resolver_name))
                || resolver_invoked_non_empty(Some(&method.value), resolver_name)
        }
        Node::PropertyDefinition(property) => {
            property
                .decorators
                .iter()
                .any(|decorator| resolver_invoked_non_empty(Some(decorator), resolver_name))
                || (property.computed
                    && resolver_invoked_non_empty(Some(&property.name), resolver_name))
                || resolver_invoked_non_empty(property.initializer.as_deref(), resolver_name)
        }
        Node::PropertyAssignment(property) => {
            (property.computed
                && resolver_invoked_non_empty(Some(&property.name), resolver_name))
                || resolver_invoked_non_empty(Some(&property.initializer), resolver_name)
        }

        Node::LabeledStatement(labeled) => {
            resolver_invoked_non_empty(Some(&labeled.statement), resolver_name)
        }
        Node::WhileStatement(loop_data) => {
            resolver_invoked_non_empty(Some(&loop_data.statement), resolver_name)
        }
        Node::DoStatement(loop_data) => {
            resolver_invoked_non_empty(Some(&loop_data.statement), resolver_name)
        }
        Node::ForStatement(loop_data) => {
            resolver_invoked_non_empty(Some(&loop_data.statement), resolver_name)
        }
        Node::ForInStatement(loop_data) | Node::ForOfStatement(loop_data) => {
            resolver_invoked_non_empty(Some(&loop_data.statement), resolver_name)
        }
        Node::WithStatement(with) => {
            resolver_invoked_non_empty(Some(&with.statement), resolver_name)
        }

        Node::IfStatement(if_stmt) => {
            resolver_invoked_non_empty(Some(&if_stmt.expression), resolver_name)
                || resolver_invoked_non_empty(Some(&if_stmt.then_statement), resolver_name)
                || resolver_invoked_non_empty(if_stmt.else_statement.as_deref(), resolver_name)
        }
        Node::ConditionalExpression(conditional) => {
            resolver_invoked_non_empty(Some(&conditional.condition), resolver_name)
                || resolver_invoked_non_empty(Some(&conditional.when_true), resolver_name)
                || resolver_invoked_non_empty(Some(&conditional.when_false), resolver_name)
        }

        Node::TryStatement(try_stmt) => {
            resolver_invoked_non_empty(Some(&try_stmt.try_block), resolver_name)
                || resolver_invoked_non_empty(
                    try_stmt.catch_clause.as_ref().map(|clause| clause.block.as_ref()),
                    resolver_name,
                )
                || resolver_invoked_non_empty(try_stmt.finally_block.as_deref(), resolver_name)
        }

        Node::SwitchStatement(switch) => switch.clauses.iter().any(|clause| {
            clause
                .statements
                .iter()
                .any(|statement| resolver_invoked_non_empty(Some(statement), resolver_name))
        }),

        Node::ArrayLiteral(array) => array
            .elements
            .iter()
            .any(|element| resolver_invoked_non_empty(Some(element), resolver_name)),
        Node::ObjectLiteral(object) => object
            .properties
            .iter()
            .any(|property| resolver_invoked_non_empty(Some(property), resolver_name)),
        Node::ArrayBindingPattern(pattern) | Node::ObjectBindingPattern(pattern) => pattern
            .elements
            .iter()
            .any(|element| resolver_invoked_non_empty(Some(element), resolver_name)),
        Node::BindingElement(element) => {
            resolver_invoked_non_empty(Some(&element.name), resolver_name)
                || resolver_invoked_non_empty(element.initializer.as_deref(), resolver_name)
        }

        Node::BinaryExpression(binary) => {
            resolver_invoked_non_empty(Some(&binary.left), resolver_name)
                || resolver_invoked_non_empty(Some(&binary.right), resolver_name)
        }

        Node::CommaListExpression(list) => list
            .elements
            .iter()
            .any(|element| resolver_invoked_non_empty(Some(element), resolver_name)),
        Node::TemplateExpression(template) => template
            .spans
            .iter()
            .any(|span| resolver_invoked_non_empty(Some(span), resolver_name)),
        Node::TaggedTemplateExpression(tagged) => {
            resolver_invoked_non_empty(Some(&tagged.template), resolver_name)
        }

        Node::ImportCall(import) => {
            resolver_invoked_non_empty(Some(&import.specifier), resolver_name)
        }
        Node::SpreadElement(spread) => {
            resolver_invoked_non_empty(Some(&spread.expression), resolver_name)
        }
        Node::PrefixUnaryExpression(unary) => {
            resolver_invoked_non_empty(Some(&unary.operand), resolver_name)
        }
        Node::AwaitExpression(await_expr) => {
            resolver_invoked_non_empty(Some(&await_expr.expression), resolver_name)
        }
        Node::YieldExpression(yield_expr) => {
            resolver_invoked_non_empty(yield_expr.expression.as_deref(), resolver_name)
        }

        Node::PropertyAccessExpression(access) => {
            resolver_invoked_non_empty(Some(&access.expression), resolver_name)
        }
        Node::ElementAccessExpression(access) => {
            resolver_invoked_non_empty(Some(&access.expression), resolver_name)
                || resolver_invoked_non_empty(Some(&access.argument_expression), resolver_name)
        }

        Node::VariableStatement(stmt) => stmt
            .declarations
            .iter()
            .any(|declaration| resolver_invoked_non_empty(Some(declaration), resolver_name)),
        Node::VariableDeclaration(declaration) => {
            resolver_invoked_non_empty(Some(&declaration.name), resolver_name)
                || resolver_invoked_non_empty(declaration.initializer.as_deref(), resolver_name)
        }

        Node::ReturnStatement(ret) => {
            resolver_invoked_non_empty(ret.expression.as_deref(), resolver_name)
        }

        _ => false,
    }
}
