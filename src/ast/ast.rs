use super::expressions::Identifier;

/// Expression Types
///
/// Tag for each kind of expression in the tree.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ExprType {
    IntLiteral,
    FloatLiteral,
    StringLiteral,
    Identifier,
    Binary,
    Let,
    Const,
}

/// Expression
///
/// A parsed tree. Every node exclusively owns its children.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    IntLiteral(i64),
    FloatLiteral(f64),
    StringLiteral(String),
    Identifier(Identifier),
    /// `operator` is always a key of the operator table.
    Binary {
        left: Box<Expression>,
        operator: String,
        right: Box<Expression>,
    },
    /// A mutable binding: `let target = value;`
    Let {
        target: Identifier,
        value: Box<Expression>,
    },
    /// An immutable binding: `const target = value;`
    Const {
        target: Identifier,
        value: Box<Expression>,
    },
}

impl Expression {
    pub fn binary(left: Expression, operator: impl Into<String>, right: Expression) -> Self {
        Expression::Binary {
            left: Box::new(left),
            operator: operator.into(),
            right: Box::new(right),
        }
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Expression::Identifier(Identifier::new(name))
    }

    /// Returns the type of the expression.
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expression::IntLiteral(_) => ExprType::IntLiteral,
            Expression::FloatLiteral(_) => ExprType::FloatLiteral,
            Expression::StringLiteral(_) => ExprType::StringLiteral,
            Expression::Identifier(_) => ExprType::Identifier,
            Expression::Binary { .. } => ExprType::Binary,
            Expression::Let { .. } => ExprType::Let,
            Expression::Const { .. } => ExprType::Const,
        }
    }

    pub fn is_binding(&self) -> bool {
        matches!(self.get_expr_type(), ExprType::Let | ExprType::Const)
    }
}
