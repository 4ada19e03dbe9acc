use std::fmt::Display;

use super::ast::Expression;

/// Identifier
/// A bare name. Binding targets are always identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Identifier { name: name.into() }
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Identifier(name: '{}')", self.name)
    }
}

// Renders `Kind(field: value, ...)`, recursing into children.
impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::IntLiteral(value) => write!(f, "IntLiteral(value: {})", value),
            Expression::FloatLiteral(value) => write!(f, "FloatLiteral(value: {:?})", value),
            Expression::StringLiteral(value) => write!(f, "StringLiteral(value: '{}')", value),
            Expression::Identifier(identifier) => write!(f, "{}", identifier),
            Expression::Binary {
                left,
                operator,
                right,
            } => write!(
                f,
                "Binary(left: {}, operator: {}, right: {})",
                left, operator, right
            ),
            Expression::Let { target, value } => {
                write!(f, "Let(target: {}, value: {})", target, value)
            }
            Expression::Const { target, value } => {
                write!(f, "Const(target: {}, value: {})", target, value)
            }
        }
    }
}
