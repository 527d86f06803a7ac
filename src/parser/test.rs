use super::*;
use crate::ast::{
    AssignOp, Case, Condition, ControlStatement, IncDecOp, InlineStatement, Program, RelOp,
    Statement, SuperStatement,
};
use crate::lexer::tokenize;

fn parse_ok(input: &str) -> Program {
    parse(tokenize(input), Some(input)).expect("expected a successful parse")
}

fn parse_err(input: &str) -> SyntaxError {
    parse(tokenize(input), Some(input)).expect_err("expected a syntax error")
}

/// Parses a single member statement inside a wrapper class.
fn member(input: &str) -> SuperStatement {
    let mut program = parse_ok(&format!("class A {{ {input} }}"));
    program.classes.remove(0).statements.remove(0)
}

/// Parses a single statement inside a wrapper function body.
fn body_statement(input: &str) -> Statement {
    let mut program = parse_ok(&format!("class A {{ void Main() {{ {input} }} }}"));
    let SuperStatement::Function { mut body, .. } = program.classes.remove(0).statements.remove(0)
    else {
        panic!("expected a function");
    };
    body.remove(0)
}

#[test]
fn parses_imports_in_order() {
    let program = parse_ok("using System;\nusing System.Text;");
    assert_eq!(program.imports.len(), 2);
    assert_eq!(program.imports[0].packages, vec!["System"]);
    assert_eq!(program.imports[1].packages, vec!["System", "Text"]);
    assert!(program.classes.is_empty());
}

#[test]
fn parses_class_with_name() {
    let program = parse_ok("class TestProgram { }");
    assert_eq!(program.classes[0].name, "TestProgram");
    assert!(program.classes[0].statements.is_empty());
}

#[test]
fn declare_without_initializer() {
    let SuperStatement::Inline(InlineStatement::Declare {
        data_type,
        variable,
    }) = member("bool flag;")
    else {
        panic!("expected a declare");
    };
    assert_eq!(data_type, "bool");
    assert_eq!(variable, "flag");
}

#[test]
fn declare_with_initializer_wins_over_declare() {
    let SuperStatement::Inline(InlineStatement::DeclareAssign {
        data_type,
        variable,
        expression,
    }) = member("bool flag = true;")
    else {
        panic!("expected a declare-assign");
    };
    assert_eq!(data_type, "bool");
    assert_eq!(variable, "flag");
    assert_eq!(expression, "true");
}

#[test]
fn bare_name_with_paren_is_a_call_not_an_assign() {
    let SuperStatement::Inline(InlineStatement::Call { path, arguments }) = member("name();")
    else {
        panic!("expected a call");
    };
    assert_eq!(path, vec!["name"]);
    assert!(arguments.is_empty());
}

#[test]
fn dotted_call_with_string_argument() {
    let SuperStatement::Inline(InlineStatement::Call { path, arguments }) =
        member("Console.WriteLine(\"For Loop Started\");")
    else {
        panic!("expected a call");
    };
    assert_eq!(path, vec!["Console", "WriteLine"]);
    assert_eq!(arguments, vec!["\"For Loop Started\""]);
}

#[test]
fn increment_wins_over_assign() {
    let SuperStatement::Inline(InlineStatement::IncDec { variable, operator }) = member("i++;")
    else {
        panic!("expected an inc/dec");
    };
    assert_eq!(variable, "i");
    assert_eq!(operator, IncDecOp::Increment);
}

#[test]
fn compound_assign() {
    let SuperStatement::Inline(InlineStatement::Assign {
        variable,
        operator,
        expression,
    }) = member("x += 5;")
    else {
        panic!("expected an assign");
    };
    assert_eq!(variable, "x");
    assert_eq!(operator, AssignOp::AddAssign);
    assert_eq!(expression, "5");
}

#[test]
fn parenthesized_expressions_unwrap_to_their_core() {
    let SuperStatement::Inline(InlineStatement::DeclareAssign { expression, .. }) =
        member("int x = ((5));")
    else {
        panic!("expected a declare-assign");
    };
    assert_eq!(expression, "5");
}

#[test]
fn comment_member() {
    // own line: a line comment would swallow a brace that follows it
    let mut program = parse_ok("class A {\n// Global Comment\n}");
    let SuperStatement::Comment { text } = program.classes.remove(0).statements.remove(0) else {
        panic!("expected a comment");
    };
    assert_eq!(text, " Global Comment");
}

#[test]
fn function_with_parameters() {
    let SuperStatement::Function {
        return_type,
        name,
        parameters,
        body,
    } = member("void Main(string[] args, int count) { }")
    else {
        panic!("expected a function");
    };
    assert_eq!(return_type, "void");
    assert_eq!(name, "Main");
    assert_eq!(parameters.len(), 2);
    assert_eq!(parameters[0].data_type, "string[]");
    assert_eq!(parameters[0].variable, "args");
    assert_eq!(parameters[1].data_type, "int");
    assert_eq!(parameters[1].variable, "count");
    assert!(body.is_empty());
}

#[test]
fn if_with_compare_condition_and_else() {
    let Statement::Control(ControlStatement::If {
        condition,
        body,
        else_body,
    }) = body_statement("if (x != y) { } else { }")
    else {
        panic!("expected an if");
    };
    assert!(matches!(
        condition,
        Condition::Compare {
            operator: RelOp::NotEq,
            ..
        }
    ));
    assert!(matches!(
        *body,
        Statement::Control(ControlStatement::Block { .. })
    ));
    assert!(else_body.is_some());
}

#[test]
fn else_if_chains_nest_in_the_else_branch() {
    let Statement::Control(ControlStatement::If {
        condition,
        else_body,
        ..
    }) = body_statement("if (false) { } else if (true) { } else { }")
    else {
        panic!("expected an if");
    };
    assert!(matches!(condition, Condition::Literal { value: false }));

    let Some(else_body) = else_body else {
        panic!("expected an else branch");
    };
    let Statement::Control(ControlStatement::If {
        condition,
        else_body,
        ..
    }) = *else_body
    else {
        panic!("expected a nested if");
    };
    assert!(matches!(condition, Condition::Literal { value: true }));
    assert!(else_body.is_some());
}

#[test]
fn do_while_statement() {
    let Statement::Control(ControlStatement::DoWhile { condition, .. }) =
        body_statement("do { } while (false);")
    else {
        panic!("expected a do-while");
    };
    assert!(matches!(condition, Condition::Literal { value: false }));
}

#[test]
fn for_statement_carries_prefix_condition_and_repeat() {
    let Statement::Control(ControlStatement::For {
        prefix,
        condition,
        repeat,
        body,
    }) = body_statement("for (i = 0; i < 10; i += 1) { print(); }")
    else {
        panic!("expected a for");
    };
    assert!(matches!(
        prefix,
        InlineStatement::Assign {
            operator: AssignOp::Assign,
            ..
        }
    ));
    assert!(matches!(
        condition,
        Condition::Compare {
            operator: RelOp::Less,
            ..
        }
    ));
    assert!(matches!(
        repeat,
        InlineStatement::Assign {
            operator: AssignOp::AddAssign,
            ..
        }
    ));
    let Statement::Control(ControlStatement::Block { statements }) = *body else {
        panic!("expected a block body");
    };
    assert!(matches!(
        statements[0],
        Statement::Super(SuperStatement::Inline(InlineStatement::Call { .. }))
    ));
}

#[test]
fn switch_preserves_case_order() {
    let Statement::Control(ControlStatement::Switch { cases }) =
        body_statement("switch { case 1: x = 0; break; default: x = 1; break; }")
    else {
        panic!("expected a switch");
    };
    assert_eq!(cases.len(), 2);
    let Case::Case { value, .. } = &cases[0] else {
        panic!("expected a case label first");
    };
    assert_eq!(value, "1");
    assert!(matches!(cases[1], Case::Default { .. }));
}

#[test]
fn return_with_and_without_value() {
    let Statement::Control(ControlStatement::Return { value }) = body_statement("return 3.14;")
    else {
        panic!("expected a return");
    };
    assert_eq!(value.as_deref(), Some("3.14"));

    let Statement::Control(ControlStatement::Return { value }) = body_statement("return;") else {
        panic!("expected a return");
    };
    assert!(value.is_none());
}

#[test]
fn missing_closing_brace_fails_instead_of_truncating() {
    let error = parse_err("class A {");
    assert_eq!(error.expected, "close_curly_bracket");
    assert_eq!(error.found, "end of input");
}

#[test]
fn error_carries_one_based_position_when_source_is_given() {
    let error = parse_err("class A { break }");
    assert_eq!(error.found, "break");
    assert_eq!(error.position, Some((1, 11)));
}

#[test]
fn error_position_is_omitted_without_the_source_buffer() {
    let error =
        parse(tokenize("class A {"), None).expect_err("expected a syntax error");
    assert!(error.position.is_none());
}

#[test]
fn trailing_tokens_after_the_last_class_fail() {
    let error = parse_err("class A { } extra");
    assert_eq!(error.expected, "end of input");
    assert_eq!(error.found, "extra");
}

#[test]
fn speculative_lookahead_never_moves_the_cursor() {
    let parser = Parser::new(tokenize("int x = 5"), None);
    assert!(parser.lookahead_for(&[
        TokenKind::DataType,
        TokenKind::Identifier,
        TokenKind::Equal,
    ]));
    assert!(!parser.lookahead_for(&[TokenKind::Identifier]));
    // a check running past the end is simply false
    assert!(!parser.lookahead_for(&[
        TokenKind::DataType,
        TokenKind::Identifier,
        TokenKind::Equal,
        TokenKind::Number,
        TokenKind::Semicolon,
    ]));
    assert_eq!(parser.cursor, 0);
}

#[test]
fn parsing_twice_yields_the_same_tree() {
    let source = "using System;\nclass A { int x = 5; void M() { x++; } }";
    let first = serde_json::to_string(&parse_ok(source)).expect("tree serializes");
    let second = serde_json::to_string(&parse_ok(source)).expect("tree serializes");
    assert_eq!(first, second);
}

#[test]
fn tree_serializes_with_snake_case_type_tags() {
    let program = parse_ok("class A { bool flag = true; // note\n }");
    let json = serde_json::to_value(&program).expect("tree serializes");
    assert_eq!(json["classes"][0]["statements"][0]["type"], "declare_assign");
    assert_eq!(json["classes"][0]["statements"][1]["type"], "comment");
    // empty import list is omitted entirely
    assert!(json.get("imports").is_none());
}
