use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Parsed program: imports first, then classes, both in source order.
///
/// Every node is owned by its parent; the tree is built once by the parser
/// and read-only afterwards. Serialization tags each node with a snake_case
/// `"type"` name and omits optional or empty fields, so the JSON dump stays
/// a faithful, inspectable mirror of the tree.
#[derive(Debug, Serialize)]
pub struct Program {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub imports: Vec<Import>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<Class>,
}

/// `using a.b.c;`
#[derive(Debug, Serialize)]
pub struct Import {
    pub packages: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct Class {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub statements: Vec<SuperStatement>,
}

/// Statement legal directly inside a class body (and anywhere a statement
/// is): a comment, a function definition, or a semicolon-terminated inline
/// statement.
#[derive(Debug)]
pub enum SuperStatement {
    Comment {
        text: String,
    },
    Function {
        return_type: String,
        name: String,
        parameters: Vec<Parameter>,
        body: Vec<Statement>,
    },
    Inline(InlineStatement),
}

// Inline members serialize transparently; a derived internally-tagged enum
// would emit a second conflicting "type" key around the inner node.
impl Serialize for SuperStatement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SuperStatement::Comment { text } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "comment")?;
                map.serialize_entry("text", text)?;
                map.end()
            }
            SuperStatement::Function {
                return_type,
                name,
                parameters,
                body,
            } => {
                let mut map = serializer.serialize_map(None)?;
                map.serialize_entry("type", "function")?;
                map.serialize_entry("return_type", return_type)?;
                map.serialize_entry("name", name)?;
                if !parameters.is_empty() {
                    map.serialize_entry("parameters", parameters)?;
                }
                if !body.is_empty() {
                    map.serialize_entry("body", body)?;
                }
                map.end()
            }
            SuperStatement::Inline(inline) => inline.serialize(serializer),
        }
    }
}

/// `(type, name)` pair of a function parameter.
#[derive(Debug, Serialize)]
pub struct Parameter {
    pub data_type: String,
    pub variable: String,
}

/// Single-line statement without structured control flow. Expressions are
/// opaque text: the source grammar composes no arithmetic.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InlineStatement {
    Declare {
        data_type: String,
        variable: String,
    },
    DeclareAssign {
        data_type: String,
        variable: String,
        expression: String,
    },
    IncDec {
        variable: String,
        operator: IncDecOp,
    },
    Assign {
        variable: String,
        operator: AssignOp,
        expression: String,
    },
    Call {
        path: Vec<String>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        arguments: Vec<String>,
    },
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Statement {
    Super(SuperStatement),
    Control(ControlStatement),
}

/// Statement with a nested body.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ControlStatement {
    If {
        condition: Condition,
        body: Box<Statement>,
        #[serde(skip_serializing_if = "Option::is_none")]
        else_body: Option<Box<Statement>>,
    },
    While {
        condition: Condition,
        body: Box<Statement>,
    },
    DoWhile {
        body: Box<Statement>,
        condition: Condition,
    },
    For {
        prefix: InlineStatement,
        condition: Condition,
        repeat: InlineStatement,
        body: Box<Statement>,
    },
    Block {
        #[serde(skip_serializing_if = "Vec::is_empty")]
        statements: Vec<Statement>,
    },
    Return {
        #[serde(skip_serializing_if = "Option::is_none")]
        value: Option<String>,
    },
    Switch {
        #[serde(skip_serializing_if = "Vec::is_empty")]
        cases: Vec<Case>,
    },
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Case {
    Case {
        value: String,
        body: Box<Statement>,
    },
    Default {
        body: Box<Statement>,
    },
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Condition {
    Literal {
        value: bool,
    },
    Compare {
        left: String,
        operator: RelOp,
        right: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignOp {
    Assign,
    AddAssign,
    SubAssign,
}

impl AssignOp {
    pub fn as_str(self) -> &'static str {
        match self {
            AssignOp::Assign => "=",
            AssignOp::AddAssign => "+=",
            AssignOp::SubAssign => "-=",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IncDecOp {
    Increment,
    Decrement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RelOp {
    Eq,
    NotEq,
    Less,
    Greater,
    LessEq,
    GreaterEq,
}

impl RelOp {
    pub fn as_str(self) -> &'static str {
        match self {
            RelOp::Eq => "==",
            RelOp::NotEq => "!=",
            RelOp::Less => "<",
            RelOp::Greater => ">",
            RelOp::LessEq => "<=",
            RelOp::GreaterEq => ">=",
        }
    }
}
