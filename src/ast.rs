use serde::{Deserialize, Serialize};

/// An abstract syntax tree (AST) node.
///
/// `Node` covers every construct of the language: literals, name references,
/// binary operations and the statements that drive evaluation. The tree is
/// built once by the parser and only read by the evaluator backends.
///
/// The serialized form is a record tagged by a `"type"` field, so a tree can
/// be handed to another backend without re-parsing:
///
/// ```
/// use novolang::ast::Node;
///
/// let json = r#"{"type": "PRINT", "expr": {"type": "NUMBER", "value": 1.0}}"#;
/// let node: Node = serde_json::from_str(json).unwrap();
///
/// assert!(matches!(node, Node::Print { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Node {
    /// A numeric literal.
    #[serde(rename = "NUMBER")]
    NumberLit {
        /// The constant value.
        value: f64,
        /// Line number in the source code.
        #[serde(default)]
        line:  usize,
    },
    /// A string literal, quotes already stripped.
    #[serde(rename = "STRING")]
    StringLit {
        /// The constant value.
        value: String,
        /// Line number in the source code.
        #[serde(default)]
        line:  usize,
    },
    /// A boolean literal.
    #[serde(rename = "BOOL")]
    BoolLit {
        /// The constant value.
        value: bool,
        /// Line number in the source code.
        #[serde(default)]
        line:  usize,
    },
    /// The null literal.
    #[serde(rename = "NULL")]
    NullLit {
        /// Line number in the source code.
        #[serde(default)]
        line: usize,
    },
    /// Reference to a variable by name.
    Identifier {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        #[serde(default)]
        line: usize,
    },
    /// A binary operation (arithmetic or comparison).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        #[serde(default)]
        line:  usize,
    },
    /// `name = value`: updates the nearest existing binding, or creates one in
    /// the current scope when none exists.
    Assignment {
        /// The name being assigned.
        target: String,
        /// The value expression.
        value:  Box<Self>,
        /// Line number in the source code.
        #[serde(default)]
        line:   usize,
    },
    /// `var name = value`: always binds in the current scope.
    Declaration {
        /// The name being declared.
        target: String,
        /// The initial value expression.
        value:  Box<Self>,
        /// Line number in the source code.
        #[serde(default)]
        line:   usize,
    },
    /// Conditional statement.
    If {
        /// The condition expression.
        condition: Box<Self>,
        /// Statements run when the condition holds.
        body:      Vec<Self>,
        /// Statements run otherwise, if an `else` branch was given.
        #[serde(default)]
        else_body: Option<Vec<Self>>,
        /// Line number in the source code.
        #[serde(default)]
        line:      usize,
    },
    /// Loop that re-checks its condition before every iteration.
    Loop {
        /// The condition expression.
        condition: Box<Self>,
        /// Statements run on each iteration.
        body:      Vec<Self>,
        /// Line number in the source code.
        #[serde(default)]
        line:      usize,
    },
    /// Prints the value of an expression as one output line.
    Print {
        /// The expression to print.
        expr: Box<Self>,
        /// Line number in the source code.
        #[serde(default)]
        line: usize,
    },
    /// Invocation of a host automation capability by localized name.
    AutoCall {
        /// The localized function name.
        function: String,
        /// Positional argument expressions.
        args:     Vec<Self>,
        /// Line number in the source code.
        #[serde(default)]
        line:     usize,
    },
    /// A sequence of statements with its own scope.
    Block {
        /// Statements inside the block.
        statements: Vec<Self>,
        /// Line number in the source code.
        #[serde(default)]
        line:       usize,
    },
}

impl Node {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use novolang::ast::Node;
    ///
    /// let node = Node::Identifier { name: "x".to_string(),
    ///                               line: 5, };
    ///
    /// assert_eq!(node.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::NumberLit { line, .. }
            | Self::StringLit { line, .. }
            | Self::BoolLit { line, .. }
            | Self::NullLit { line }
            | Self::Identifier { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::Assignment { line, .. }
            | Self::Declaration { line, .. }
            | Self::If { line, .. }
            | Self::Loop { line, .. }
            | Self::Print { line, .. }
            | Self::AutoCall { line, .. }
            | Self::Block { line, .. } => *line,
        }
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic and comparisons. `<>` is accepted as a
/// spelling of [`BinaryOperator::NotEqual`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOperator {
    /// Addition or string concatenation (`+`)
    #[serde(rename = "+")]
    Add,
    /// Subtraction (`-`)
    #[serde(rename = "-")]
    Sub,
    /// Multiplication (`*`)
    #[serde(rename = "*")]
    Mul,
    /// Division (`/`)
    #[serde(rename = "/")]
    Div,
    /// Less than (`<`)
    #[serde(rename = "<")]
    Less,
    /// Greater than (`>`)
    #[serde(rename = ">")]
    Greater,
    /// Less than or equal (`<=`)
    #[serde(rename = "<=")]
    LessEqual,
    /// Greater than or equal (`>=`)
    #[serde(rename = ">=")]
    GreaterEqual,
    /// Equal to (`==`)
    #[serde(rename = "==")]
    Equal,
    /// Not equal to (`!=` or `<>`)
    #[serde(rename = "!=", alias = "<>")]
    NotEqual,
}

impl BinaryOperator {
    /// Maps an operator spelling to its operator.
    ///
    /// Returns `None` for `=` and anything that is not a binary operator.
    ///
    /// ```
    /// use novolang::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_symbol("<>"), Some(BinaryOperator::NotEqual));
    /// assert_eq!(BinaryOperator::from_symbol("="), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Some(match symbol {
            "+" => Self::Add,
            "-" => Self::Sub,
            "*" => Self::Mul,
            "/" => Self::Div,
            "<" => Self::Less,
            ">" => Self::Greater,
            "<=" => Self::LessEqual,
            ">=" => Self::GreaterEqual,
            "==" => Self::Equal,
            "!=" | "<>" => Self::NotEqual,
            _ => return None,
        })
    }

    /// Returns `true` for the comparison operators.
    #[must_use]
    pub const fn is_comparison(self) -> bool {
        matches!(self,
                 Self::Less
                 | Self::Greater
                 | Self::LessEqual
                 | Self::GreaterEqual
                 | Self::Equal
                 | Self::NotEqual)
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}
