// Expression tree for the arithmetic evaluator

use std::fmt;

/// Source location information for error reporting
///
/// Expressions are single-line, so only the column is tracked. Columns are
/// 1-based, matching what a user counts when reading the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub column: usize,
}

impl SourceLocation {
    pub fn new(column: usize) -> Self {
        Self { column }
    }

    /// Location of the character at the given 0-based offset
    pub fn from_offset(offset: usize) -> Self {
        Self { column: offset + 1 }
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinOp {
    pub fn symbol(self) -> char {
        match self {
            BinOp::Add => '+',
            BinOp::Sub => '-',
            BinOp::Mul => '*',
            BinOp::Div => '/',
            BinOp::Pow => '^',
        }
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    Plus, // +x
    Neg,  // -x
}

impl UnOp {
    pub fn symbol(self) -> char {
        match self {
            UnOp::Plus => '+',
            UnOp::Neg => '-',
        }
    }
}

/// Named single-argument functions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Sqrt,
    Sin, // degrees
    Cos, // degrees
    Tan, // degrees
}

impl Function {
    /// Look up a function by identifier. Anything else is a variable.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sqrt" => Some(Function::Sqrt),
            "sin" => Some(Function::Sin),
            "cos" => Some(Function::Cos),
            "tan" => Some(Function::Tan),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Function::Sqrt => "sqrt",
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
        }
    }
}

/// Expression node
///
/// Parenthesized groups do not get a node of their own: the tree shape
/// already records the grouping.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64, SourceLocation),

    Variable(String, SourceLocation),

    Unary {
        op: UnOp,
        operand: Box<Expr>,
        location: SourceLocation,
    },

    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
        location: SourceLocation,
    },

    Call {
        function: Function,
        argument: Box<Expr>,
        location: SourceLocation,
    },
}

impl Expr {
    /// Returns the source location where this expression starts
    /// (for binary nodes, the operator).
    pub fn location(&self) -> SourceLocation {
        match self {
            Expr::Number(_, loc) | Expr::Variable(_, loc) => *loc,
            Expr::Unary { location, .. }
            | Expr::Binary { location, .. }
            | Expr::Call { location, .. } => *location,
        }
    }
}

/// Fully parenthesized rendering, e.g. `(1 + (2 * 3))`
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(n, _) => write!(f, "{}", n),
            Expr::Variable(name, _) => write!(f, "{}", name),
            Expr::Unary { op, operand, .. } => write!(f, "({}{})", op.symbol(), operand),
            Expr::Binary {
                op, left, right, ..
            } => write!(f, "({} {} {})", left, op.symbol(), right),
            Expr::Call {
                function, argument, ..
            } => write!(f, "{}({})", function.name(), argument),
        }
    }
}
