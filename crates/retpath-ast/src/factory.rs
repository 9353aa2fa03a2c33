//! Node construction helpers.
//!
//! One constructor per commonly built node shape. Production trees come from
//! an upstream parser; this module is the construction surface for tests and
//! for hosts that synthesize nodes. Constructors default the flags a parser
//! would set from syntax (`question_dot`, `computed`) to `false`; callers
//! needing them build the payload struct directly.

use crate::node::*;
use crate::types::TypeAnnotation;

// =============================================================================
// Identifiers and literals
// =============================================================================

pub fn identifier(text: impl Into<String>) -> Node {
    Node::Identifier(IdentifierData {
        escaped_text: text.into(),
    })
}

pub fn string_literal(text: impl Into<String>) -> Node {
    Node::StringLiteral(LiteralData { text: text.into() })
}

pub fn numeric_literal(text: impl Into<String>) -> Node {
    Node::NumericLiteral(LiteralData { text: text.into() })
}

pub fn true_keyword() -> Node {
    Node::TrueKeyword
}

pub fn false_keyword() -> Node {
    Node::FalseKeyword
}

pub fn null_keyword() -> Node {
    Node::NullKeyword
}

// =============================================================================
// Statements
// =============================================================================

pub fn block(statements: Vec<Node>) -> Node {
    Node::Block(BlockData { statements })
}

pub fn expression_statement(expression: Node) -> Node {
    Node::ExpressionStatement(ExpressionStatementData {
        expression: Box::new(expression),
    })
}

pub fn if_statement(expression: Node, then_statement: Node, else_statement: Option<Node>) -> Node {
    Node::IfStatement(IfStatementData {
        expression: Box::new(expression),
        then_statement: Box::new(then_statement),
        else_statement: else_statement.map(Box::new),
    })
}

pub fn while_statement(expression: Node, statement: Node) -> Node {
    Node::WhileStatement(WhileData {
        expression: Box::new(expression),
        statement: Box::new(statement),
    })
}

pub fn do_statement(statement: Node, expression: Node) -> Node {
    Node::DoStatement(DoData {
        statement: Box::new(statement),
        expression: Box::new(expression),
    })
}

pub fn for_statement(
    initializer: Option<Node>,
    condition: Option<Node>,
    incrementor: Option<Node>,
    statement: Node,
) -> Node {
    Node::ForStatement(ForData {
        initializer: initializer.map(Box::new),
        condition: condition.map(Box::new),
        incrementor: incrementor.map(Box::new),
        statement: Box::new(statement),
    })
}

pub fn for_in_statement(initializer: Node, expression: Node, statement: Node) -> Node {
    Node::ForInStatement(for_in_of(initializer, expression, statement))
}

pub fn for_of_statement(initializer: Node, expression: Node, statement: Node) -> Node {
    Node::ForOfStatement(for_in_of(initializer, expression, statement))
}

fn for_in_of(initializer: Node, expression: Node, statement: Node) -> ForInOfData {
    ForInOfData {
        initializer: Box::new(initializer),
        expression: Box::new(expression),
        statement: Box::new(statement),
    }
}

pub fn labeled_statement(label: impl Into<String>, statement: Node) -> Node {
    Node::LabeledStatement(LabeledData {
        label: label.into(),
        statement: Box::new(statement),
    })
}

pub fn with_statement(expression: Node, statement: Node) -> Node {
    Node::WithStatement(WithData {
        expression: Box::new(expression),
        statement: Box::new(statement),
    })
}

pub fn return_statement(expression: Option<Node>) -> Node {
    Node::ReturnStatement(ReturnData {
        expression: expression.map(Box::new),
    })
}

pub fn throw_statement(expression: Node) -> Node {
    Node::ThrowStatement(ThrowData {
        expression: Box::new(expression),
    })
}

pub fn break_statement() -> Node {
    Node::BreakStatement(JumpData { label: None })
}

pub fn continue_statement() -> Node {
    Node::ContinueStatement(JumpData { label: None })
}

pub fn try_statement(
    try_block: Node,
    catch_clause: Option<CatchClauseData>,
    finally_block: Option<Node>,
) -> Node {
    Node::TryStatement(TryData {
        try_block: Box::new(try_block),
        catch_clause,
        finally_block: finally_block.map(Box::new),
    })
}

pub fn catch_clause(variable: Option<Node>, block: Node) -> CatchClauseData {
    CatchClauseData {
        variable: variable.map(Box::new),
        block: Box::new(block),
    }
}

pub fn switch_statement(expression: Node, clauses: Vec<CaseClauseData>) -> Node {
    Node::SwitchStatement(SwitchData {
        expression: Box::new(expression),
        clauses,
    })
}

pub fn case_clause(expression: Node, statements: Vec<Node>) -> CaseClauseData {
    CaseClauseData {
        expression: Some(Box::new(expression)),
        statements,
    }
}

pub fn default_clause(statements: Vec<Node>) -> CaseClauseData {
    CaseClauseData {
        expression: None,
        statements,
    }
}

pub fn variable_statement(declarations: Vec<Node>) -> Node {
    Node::VariableStatement(VariableStatementData { declarations })
}

pub fn variable_declaration(name: Node, initializer: Option<Node>) -> Node {
    Node::VariableDeclaration(VariableDeclarationData {
        name: Box::new(name),
        type_annotation: None,
        initializer: initializer.map(Box::new),
    })
}

// =============================================================================
// Functions and classes
// =============================================================================

pub fn parameter(name: impl Into<String>) -> ParameterData {
    ParameterData {
        name: Box::new(identifier(name)),
        type_annotation: None,
        initializer: None,
    }
}

pub fn function_declaration(
    name: impl Into<String>,
    parameters: Vec<ParameterData>,
    body: Node,
) -> Node {
    Node::FunctionDeclaration(FunctionData {
        name: Some(name.into()),
        parameters,
        return_type: None,
        body: Some(FunctionBody::Block(Box::new(body))),
    })
}

pub fn function_expression(parameters: Vec<ParameterData>, body: Node) -> Node {
    Node::FunctionExpression(FunctionData {
        name: None,
        parameters,
        return_type: None,
        body: Some(FunctionBody::Block(Box::new(body))),
    })
}

pub fn arrow_function(parameters: Vec<ParameterData>, body: Node) -> Node {
    Node::ArrowFunction(FunctionData {
        name: None,
        parameters,
        return_type: None,
        body: Some(FunctionBody::Block(Box::new(body))),
    })
}

/// An arrow function whose body is a bare expression, `(x) => expr`.
pub fn concise_arrow_function(parameters: Vec<ParameterData>, expression: Node) -> Node {
    Node::ArrowFunction(FunctionData {
        name: None,
        parameters,
        return_type: None,
        body: Some(FunctionBody::Expression(Box::new(expression))),
    })
}

pub fn declare_function(
    name: impl Into<String>,
    parameters: Vec<ParameterData>,
    return_type: Option<TypeAnnotation>,
) -> Node {
    Node::DeclareFunction(SignatureData {
        name: Some(name.into()),
        parameters,
        return_type,
    })
}

pub fn function_type(parameters: Vec<ParameterData>, return_type: Option<TypeAnnotation>) -> Node {
    Node::FunctionType(SignatureData {
        name: None,
        parameters,
        return_type,
    })
}

pub fn method_signature(
    name: impl Into<String>,
    parameters: Vec<ParameterData>,
    return_type: Option<TypeAnnotation>,
) -> Node {
    Node::MethodSignature(SignatureData {
        name: Some(name.into()),
        parameters,
        return_type,
    })
}

pub fn method_definition(name: Node, value: Node) -> Node {
    Node::MethodDefinition(MethodDefinitionData {
        name: Box::new(name),
        computed: false,
        decorators: Vec::new(),
        value: Box::new(value),
    })
}

pub fn property_definition(name: Node, initializer: Option<Node>) -> Node {
    Node::PropertyDefinition(PropertyDefinitionData {
        name: Box::new(name),
        computed: false,
        decorators: Vec::new(),
        initializer: initializer.map(Box::new),
    })
}

pub fn class_declaration(name: impl Into<String>, members: Vec<Node>) -> Node {
    Node::ClassDeclaration(ClassData {
        name: Some(name.into()),
        members,
    })
}

pub fn class_expression(members: Vec<Node>) -> Node {
    Node::ClassExpression(ClassData {
        name: None,
        members,
    })
}

pub fn decorator(expression: Node) -> Node {
    Node::Decorator(DecoratorData {
        expression: Box::new(expression),
    })
}

// =============================================================================
// Expressions
// =============================================================================

pub fn call(expression: Node, arguments: Vec<Node>) -> Node {
    Node::CallExpression(CallExprData {
        expression: Box::new(expression),
        question_dot: false,
        arguments,
    })
}

pub fn new_expression(
    expression: Node,
    type_arguments: Vec<TypeAnnotation>,
    arguments: Vec<Node>,
) -> Node {
    Node::NewExpression(NewExprData {
        expression: Box::new(expression),
        type_arguments,
        arguments,
    })
}

pub fn property_access(expression: Node, name: impl Into<String>) -> Node {
    Node::PropertyAccessExpression(PropertyAccessData {
        expression: Box::new(expression),
        question_dot: false,
        name: name.into(),
    })
}

pub fn element_access(expression: Node, argument_expression: Node) -> Node {
    Node::ElementAccessExpression(ElementAccessData {
        expression: Box::new(expression),
        question_dot: false,
        argument_expression: Box::new(argument_expression),
    })
}

pub fn binary(left: Node, operator: BinaryOperator, right: Node) -> Node {
    Node::BinaryExpression(BinaryExprData {
        left: Box::new(left),
        operator,
        right: Box::new(right),
    })
}

pub fn assignment(left: Node, right: Node) -> Node {
    binary(left, BinaryOperator::Assignment, right)
}

pub fn conditional(condition: Node, when_true: Node, when_false: Node) -> Node {
    Node::ConditionalExpression(ConditionalExprData {
        condition: Box::new(condition),
        when_true: Box::new(when_true),
        when_false: Box::new(when_false),
    })
}

pub fn prefix_unary(operator: UnaryOperator, operand: Node) -> Node {
    Node::PrefixUnaryExpression(UnaryExprData {
        operator,
        operand: Box::new(operand),
    })
}

pub fn await_expression(expression: Node) -> Node {
    Node::AwaitExpression(AwaitData {
        expression: Box::new(expression),
    })
}

pub fn yield_expression(expression: Option<Node>) -> Node {
    Node::YieldExpression(YieldData {
        expression: expression.map(Box::new),
    })
}

pub fn spread(expression: Node) -> Node {
    Node::SpreadElement(SpreadData {
        expression: Box::new(expression),
    })
}

pub fn comma_list(elements: Vec<Node>) -> Node {
    Node::CommaListExpression(CommaListData { elements })
}

pub fn template_expression(spans: Vec<Node>) -> Node {
    Node::TemplateExpression(TemplateData { spans })
}

pub fn tagged_template(tag: Node, template: Node) -> Node {
    Node::TaggedTemplateExpression(TaggedTemplateData {
        tag: Box::new(tag),
        template: Box::new(template),
    })
}

pub fn import_call(specifier: Node) -> Node {
    Node::ImportCall(ImportCallData {
        specifier: Box::new(specifier),
    })
}

pub fn array_literal(elements: Vec<Node>) -> Node {
    Node::ArrayLiteral(ArrayLiteralData { elements })
}

pub fn object_literal(properties: Vec<Node>) -> Node {
    Node::ObjectLiteral(ObjectLiteralData { properties })
}

pub fn property_assignment(name: Node, initializer: Node) -> Node {
    Node::PropertyAssignment(PropertyAssignmentData {
        name: Box::new(name),
        computed: false,
        initializer: Box::new(initializer),
    })
}

pub fn array_binding_pattern(elements: Vec<Node>) -> Node {
    Node::ArrayBindingPattern(BindingPatternData { elements })
}

pub fn object_binding_pattern(elements: Vec<Node>) -> Node {
    Node::ObjectBindingPattern(BindingPatternData { elements })
}

pub fn binding_element(name: Node, initializer: Option<Node>) -> Node {
    Node::BindingElement(BindingElementData {
        name: Box::new(name),
        initializer: initializer.map(Box::new),
    })
}
