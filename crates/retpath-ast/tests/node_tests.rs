use retpath_ast::factory;
use retpath_ast::node::{Node, ParameterData};

#[test]
fn test_factory_builds_expected_kinds() {
    assert_eq!(factory::identifier("x").kind_name(), "Identifier");
    assert_eq!(factory::block(vec![]).kind_name(), "Block");
    assert_eq!(
        factory::return_statement(None).kind_name(),
        "ReturnStatement"
    );
    assert_eq!(factory::true_keyword().kind_name(), "TrueKeyword");
    assert_eq!(
        factory::throw_statement(factory::identifier("e")).kind_name(),
        "ThrowStatement"
    );
}

#[test]
fn test_parameter_name_resolves_plain_identifiers_only() {
    let parameter = factory::parameter("resolve");
    assert_eq!(parameter.identifier_name(), Some("resolve"));

    let pattern_parameter = ParameterData {
        name: Box::new(factory::object_binding_pattern(vec![])),
        type_annotation: None,
        initializer: None,
    };
    assert_eq!(
        pattern_parameter.identifier_name(),
        None,
        "a destructuring parameter has no identifier name"
    );
}

#[test]
fn test_concise_arrow_body_is_expression() {
    let arrow = factory::concise_arrow_function(vec![], factory::numeric_literal("1"));
    let Node::ArrowFunction(func) = &arrow else {
        panic!("expected an arrow function");
    };
    assert!(func.body.as_ref().is_some_and(|body| body.is_expression()));

    let block_arrow = factory::arrow_function(vec![], factory::block(vec![]));
    let Node::ArrowFunction(func) = &block_arrow else {
        panic!("expected an arrow function");
    };
    assert!(!func.body.as_ref().is_some_and(|body| body.is_expression()));
}

#[test]
fn test_nodes_serialize_with_kind_tags() {
    let node = factory::return_statement(Some(factory::numeric_literal("1")));
    let json = serde_json::to_value(&node).expect("node should serialize");
    assert!(
        json.get("ReturnStatement").is_some(),
        "expected an externally tagged ReturnStatement, got {json}"
    );
}

#[test]
fn test_default_clause_has_no_test_expression() {
    let clause = factory::default_clause(vec![factory::break_statement()]);
    assert!(clause.expression.is_none());
    let clause = factory::case_clause(factory::numeric_literal("1"), vec![]);
    assert!(clause.expression.is_some());
}
