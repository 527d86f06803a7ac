//! Tree-walk generator for the keyword-block target grammar.
//!
//! One translation function per node variant, each an exhaustive match over
//! its closed enum, so a new variant fails compilation instead of silently
//! emitting nothing. Pure over the tree: the same AST always yields
//! byte-identical text. Statement translations carry no trailing newline;
//! the enclosing walk appends exactly one per statement.

use crate::ast::{
    Case, Class, Condition, ControlStatement, InlineStatement, Parameter, Program, RelOp,
    Statement, SuperStatement,
};


pub fn translate(program: &Program) -> String {
    let mut out = String::new();
    for import in &program.imports {
        out.push_str("Imports ");
        out.push_str(&import.packages.join("."));
        out.push('\n');
    }
    for class in &program.classes {
        out.push_str(&translate_class(class));
        out.push('\n');
    }
    out
}

fn translate_class(class: &Class) -> String {
    let mut text = format!("Class {}\n", class.name);
    for statement in &class.statements {
        text.push_str(&translate_super_statement(statement));
        text.push('\n');
    }
    text.push_str("End Class");
    text
}

fn translate_super_statement(statement: &SuperStatement) -> String {
    match statement {
        SuperStatement::Comment { text } => translate_comment(text),
        SuperStatement::Function {
            return_type,
            name,
            parameters,
            body,
        } => translate_function(return_type, name, parameters, body),
        SuperStatement::Inline(inline) => translate_inline(inline),
    }
}

// Each comment line gets the target's comment marker after the line endings
// are normalized to '\n'.
fn translate_comment(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    format!("'{}", normalized.replace('\n', "\n'"))
}

// A function whose mapped return type is the void analog becomes a Sub;
// everything else a Function with an `As <Type>` suffix.
fn translate_function(
    return_type: &str,
    name: &str,
    parameters: &[Parameter],
    body: &[Statement],
) -> String {
    let parameters = parameters
        .iter()
        .map(|parameter| {
            format!(
                "{} As {}",
                parameter.variable,
                translate_type(&parameter.data_type)
            )
        })
        .collect::<Vec<_>>()
        .join(", ");

    let mapped = translate_type(return_type);
    let is_sub = mapped == "Sub";

    let mut text = if is_sub {
        format!("Sub {name}({parameters})\n")
    } else {
        format!("Function {name}({parameters}) As {mapped}\n")
    };
    for statement in body {
        text.push_str(&translate_statement(statement));
        text.push('\n');
    }
    text.push_str(if is_sub { "End Sub" } else { "End Function" });
    text
}

pub(crate) fn translate_inline(statement: &InlineStatement) -> String {
    match statement {
        InlineStatement::Declare {
            data_type,
            variable,
        } => format!("Dim {variable} As {}", translate_type(data_type)),
        InlineStatement::DeclareAssign {
            data_type,
            variable,
            expression,
        } => format!(
            "Dim {variable} As {} = {}",
            translate_type(data_type),
            translate_expression(expression)
        ),
        // The target has no ++/--; synthesize compound assignment by one.
        InlineStatement::IncDec { variable, operator } => match operator {
            crate::ast::IncDecOp::Increment => format!("{variable} += 1"),
            crate::ast::IncDecOp::Decrement => format!("{variable} -= 1"),
        },
        InlineStatement::Assign {
            variable,
            operator,
            expression,
        } => format!(
            "{variable} {} {}",
            operator.as_str(),
            translate_expression(expression)
        ),
        InlineStatement::Call { path, arguments } => {
            format!("{}({})", path.join("."), arguments.join(", "))
        }
    }
}

fn translate_statement(statement: &Statement) -> String {
    match statement {
        Statement::Super(statement) => translate_super_statement(statement),
        Statement::Control(statement) => translate_control(statement),
    }
}

fn translate_control(statement: &ControlStatement) -> String {
    match statement {
        ControlStatement::If {
            condition,
            body,
            else_body,
        } => {
            let mut text = format!("If {} Then\n", translate_condition(condition));
            text.push_str(&translate_statement(body));
            text.push('\n');
            if let Some(else_body) = else_body {
                text.push_str("Else\n");
                text.push_str(&translate_statement(else_body));
                text.push('\n');
            }
            text.push_str("End If");
            text
        }
        ControlStatement::While { condition, body } => format!(
            "While {}\n{}\nEnd While",
            translate_condition(condition),
            translate_statement(body)
        ),
        ControlStatement::DoWhile { body, condition } => format!(
            "Do While {}\n{}\nLoop",
            translate_condition(condition),
            translate_statement(body)
        ),
        // The target has no C-style for loop: prefix runs once, then a
        // While wraps body plus repeat.
        ControlStatement::For {
            prefix,
            condition,
            repeat,
            body,
        } => format!(
            "{}\nWhile {}\n{}\n{}\nEnd While",
            translate_inline(prefix),
            translate_condition(condition),
            translate_statement(body),
            translate_inline(repeat)
        ),
        ControlStatement::Block { statements } => statements
            .iter()
            .map(translate_statement)
            .collect::<Vec<_>>()
            .join("\n"),
        ControlStatement::Return { value } => match value {
            Some(value) => format!("Return {value}"),
            None => "Return".to_string(),
        },
        ControlStatement::Switch { cases } => {
            let mut text = String::from("Select Case\n");
            for case in cases {
                text.push_str(&translate_case(case));
                text.push('\n');
            }
            text.push_str("End Select");
            text
        }
    }
}

fn translate_case(case: &Case) -> String {
    match case {
        Case::Case { value, body } => {
            format!("Case {}\n{}", value, translate_statement(body))
        }
        Case::Default { body } => format!("Case Else\n{}", translate_statement(body)),
    }
}

fn translate_condition(condition: &Condition) -> String {
    match condition {
        Condition::Literal { value } => if *value { "True" } else { "False" }.to_string(),
        Condition::Compare {
            left,
            operator,
            right,
        } => format!("{} {} {}", left, translate_rel_operator(*operator), right),
    }
}

// Only not-equal is respelled; the rest pass through.
fn translate_rel_operator(operator: RelOp) -> &'static str {
    match operator {
        RelOp::NotEq => "<>",
        other => other.as_str(),
    }
}

fn translate_expression(expression: &str) -> String {
    match expression {
        "null" => "Nothing",
        "true" => "True",
        "false" => "False",
        other => other,
    }
    .to_string()
}

/// Maps a source type spelling to the target's. The array suffix `[]`
/// becomes `()`; the nullable marker is dropped for string only; unknown
/// spellings (including `var`) fall back to `Object`.
pub(crate) fn translate_type(data_type: &str) -> String {
    let trimmed = data_type.trim_matches(|c| c == '?' || c == '[' || c == ']');
    let mapped = match trimmed {
        "bool" => "Boolean",
        "char" => "Char",
        "short" => "Short",
        "int" => "Integer",
        "long" => "Long",
        "float" => "Single",
        "double" => "Double",
        "decimal" => "Decimal",
        "string" | "String" => "String",
        "void" => "Sub",
        _ => "Object",
    };
    data_type
        .replace(trimmed, mapped)
        .replace("String?", "String")
        .replace("[]", "()")
}
