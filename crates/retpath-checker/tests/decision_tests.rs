//! Composite decision: existence or exhaustiveness with executor inspection.

use retpath_ast::factory;
use retpath_ast::node::Node;
use retpath_ast::types::TypeAnnotation;
use retpath_checker::returns_or_resolves_value;

/// `new Promise(<executor>)`
fn promise_with_executor(executor: Node) -> Node {
    factory::new_expression(factory::identifier("Promise"), vec![], vec![executor])
}

/// `function () { return <expression>; }`
fn function_returning(expression: Node) -> Node {
    factory::function_expression(
        vec![],
        factory::block(vec![factory::return_statement(Some(expression))]),
    )
}

#[test]
fn test_absent_node_decides_false() {
    assert!(!returns_or_resolves_value(None, false, false));
    assert!(!returns_or_resolves_value(None, true, true));
}

#[test]
fn test_resolving_executor_counts_as_a_valued_return() {
    // function () { return new Promise((resolve) => { resolve(5); }); }
    let func = function_returning(promise_with_executor(factory::arrow_function(
        vec![factory::parameter("resolve")],
        factory::block(vec![factory::expression_statement(factory::call(
            factory::identifier("resolve"),
            vec![factory::numeric_literal("5")],
        ))]),
    )));
    assert!(returns_or_resolves_value(Some(&func), false, false));
}

#[test]
fn test_never_resolving_executor_does_not_count() {
    // function () { return new Promise((resolve) => { resolve(); }); }
    let func = function_returning(promise_with_executor(factory::arrow_function(
        vec![factory::parameter("resolve")],
        factory::block(vec![factory::expression_statement(factory::call(
            factory::identifier("resolve"),
            vec![],
        ))]),
    )));
    assert!(!returns_or_resolves_value(Some(&func), false, false));
}

#[test]
fn test_resolver_escaping_into_another_call_counts() {
    // new Promise((resolve) => { doWork(resolve); })
    let func = function_returning(promise_with_executor(factory::arrow_function(
        vec![factory::parameter("resolve")],
        factory::block(vec![factory::expression_statement(factory::call(
            factory::identifier("doWork"),
            vec![factory::identifier("resolve")],
        ))]),
    )));
    assert!(returns_or_resolves_value(Some(&func), false, false));
}

#[test]
fn test_shadowed_resolver_does_not_count() {
    // new Promise((resolve) => { function inner(resolve) { resolve(1); } })
    let func = function_returning(promise_with_executor(factory::arrow_function(
        vec![factory::parameter("resolve")],
        factory::block(vec![factory::function_declaration(
            "inner",
            vec![factory::parameter("resolve")],
            factory::block(vec![factory::expression_statement(factory::call(
                factory::identifier("resolve"),
                vec![factory::numeric_literal("1")],
            ))]),
        )]),
    )));
    assert!(!returns_or_resolves_value(Some(&func), false, false));
}

#[test]
fn test_void_typed_promise_never_counts() {
    // new Promise<void>((resolve) => { resolve(5); }) - the annotation wins
    // over the resolving executor.
    let construction = factory::new_expression(
        factory::identifier("Promise"),
        vec![TypeAnnotation::VoidKeyword],
        vec![factory::arrow_function(
            vec![factory::parameter("resolve")],
            factory::block(vec![factory::expression_statement(factory::call(
                factory::identifier("resolve"),
                vec![factory::numeric_literal("5")],
            ))]),
        )],
    );
    let func = function_returning(construction);
    assert!(!returns_or_resolves_value(Some(&func), false, false));
}

#[test]
fn test_any_promise_as_return_bypasses_executor_inspection() {
    let func = function_returning(promise_with_executor(factory::arrow_function(
        vec![factory::parameter("resolve")],
        factory::block(vec![]),
    )));
    assert!(!returns_or_resolves_value(Some(&func), false, false));
    assert!(returns_or_resolves_value(Some(&func), true, false));
}

#[test]
fn test_executor_without_parameters_does_not_count() {
    let func = function_returning(promise_with_executor(factory::arrow_function(
        vec![],
        factory::block(vec![factory::expression_statement(factory::call(
            factory::identifier("resolve"),
            vec![factory::numeric_literal("5")],
        ))]),
    )));
    assert!(!returns_or_resolves_value(Some(&func), false, false));
}

#[test]
fn test_non_function_executor_does_not_count() {
    let func = function_returning(promise_with_executor(factory::identifier("executor")));
    assert!(!returns_or_resolves_value(Some(&func), false, false));

    let no_executor = function_returning(factory::new_expression(
        factory::identifier("Promise"),
        vec![],
        vec![],
    ));
    assert!(!returns_or_resolves_value(Some(&no_executor), false, false));
}

#[test]
fn test_all_branches_rejects_a_reachable_bare_return() {
    // { if (x) { return; } return 1; } - existence holds, but the bare
    // return disqualifies the all-branches mode.
    let func = factory::function_expression(
        vec![],
        factory::block(vec![
            factory::if_statement(
                factory::identifier("x"),
                factory::block(vec![factory::return_statement(None)]),
                None,
            ),
            factory::return_statement(Some(factory::numeric_literal("1"))),
        ]),
    );
    assert!(returns_or_resolves_value(Some(&func), false, false));
    assert!(!returns_or_resolves_value(Some(&func), false, true));
}

#[test]
fn test_all_branches_requires_exhaustiveness_on_top_of_existence() {
    // { if (x) { return 1; } } - one valued path, but not all of them.
    let func = factory::function_expression(
        vec![],
        factory::block(vec![factory::if_statement(
            factory::identifier("x"),
            factory::block(vec![factory::return_statement(Some(
                factory::numeric_literal("1"),
            ))]),
            None,
        )]),
    );
    assert!(returns_or_resolves_value(Some(&func), false, false));
    assert!(!returns_or_resolves_value(Some(&func), false, true));

    // { if (x) { return 1; } else { return 2; } } - both hold.
    let exhaustive = factory::function_expression(
        vec![],
        factory::block(vec![factory::if_statement(
            factory::identifier("x"),
            factory::block(vec![factory::return_statement(Some(
                factory::numeric_literal("1"),
            ))]),
            Some(factory::block(vec![factory::return_statement(Some(
                factory::numeric_literal("2"),
            ))])),
        )]),
    );
    assert!(returns_or_resolves_value(Some(&exhaustive), false, true));
}

#[test]
fn test_all_branches_rejects_a_throw_only_body() {
    // { throw new Error(); } - exhaustiveness alone would accept the throw;
    // the existence precheck requires an actual valued return somewhere.
    let func = factory::function_expression(
        vec![],
        factory::block(vec![factory::throw_statement(factory::new_expression(
            factory::identifier("Error"),
            vec![],
            vec![],
        ))]),
    );
    assert!(!returns_or_resolves_value(Some(&func), false, true));
}

#[test]
fn test_repeated_calls_are_idempotent() {
    let func = function_returning(promise_with_executor(factory::arrow_function(
        vec![factory::parameter("resolve")],
        factory::block(vec![factory::expression_statement(factory::call(
            factory::identifier("resolve"),
            vec![factory::numeric_literal("5")],
        ))]),
    )));
    for _ in 0..2 {
        assert!(returns_or_resolves_value(Some(&func), false, false));
        assert!(returns_or_resolves_value(Some(&func), false, true));
        assert!(returns_or_resolves_value(Some(&func), true, true));
    }
}
