/// Represents a binary operator.
///
/// The operator set is closed: postfix expressions are built from these five
/// arithmetic operators and nothing else. Each operator consumes the top two
/// stack values and produces one result.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use Operator::{Add, Div, Mul, Pow, Sub};

        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Pow => "^",
        };
        write!(f, "{operator}")
    }
}
