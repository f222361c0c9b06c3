/// Represents a literal value in an expression.
///
/// `LiteralValue` covers the raw constants that can appear directly in the
/// source text: integer and floating point numbers, and booleans.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Real(f64),
    /// A boolean literal value: `True` or `False`.
    Bool(bool),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// An abstract syntax tree node of the calculator language.
///
/// The set of variants is closed: anything the parser cannot express as one
/// of these nodes is a syntax error, and the evaluator matches on them
/// exhaustively. Every node owns its children.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal number or boolean.
    Literal(LiteralValue),
    /// Reference to a name in the environment, e.g. `pi` or `x`.
    Identifier(String),
    /// A prefix operation (`+x`, `-x`, `not x`).
    UnaryOp {
        /// The operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
    },
    /// An arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// A chain of `and` or a chain of `or` with at least two operands.
    BoolOp {
        /// The connective shared by the whole chain.
        op:       BoolOperator,
        /// The operands, in source order.
        operands: Vec<Self>,
    },
    /// A possibly chained comparison such as `a < b <= c`.
    Compare {
        /// The leftmost operand.
        first: Box<Self>,
        /// Each following operator with its right-hand operand.
        rest:  Vec<(CompareOperator, Self)>,
    },
    /// A call of a named function, e.g. `sin(x)`.
    Call {
        /// Name of the function being called, as written.
        name:      String,
        /// Positional arguments.
        arguments: Vec<Self>,
    },
    /// A list literal, `[a, b, c]`.
    ListLit(Vec<Self>),
    /// A tuple literal, `(a, b)` or `(a,)`.
    TupleLit(Vec<Self>),
}

/// A prefix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `+x`
    Plus,
    /// `-x`
    Negate,
    /// `not x`
    Not,
}

/// An arithmetic infix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, true division.
    Div,
    /// `//`, floor division.
    FloorDiv,
    /// `%`, modulo with the sign of the divisor.
    Mod,
    /// `**` or `^`, right-associative power.
    Pow,
}

/// A boolean connective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolOperator {
    /// `and`
    And,
    /// `or`
    Or,
}

/// A comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOperator {
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Plus => "+",
            Self::Negate => "-",
            Self::Not => "not",
        };
        write!(f, "{s}")
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::FloorDiv => "//",
            Self::Mod => "%",
            Self::Pow => "**",
        };
        write!(f, "{s}")
    }
}

impl std::fmt::Display for BoolOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::And => write!(f, "and"),
            Self::Or => write!(f, "or"),
        }
    }
}

impl std::fmt::Display for CompareOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
        };
        write!(f, "{s}")
    }
}
