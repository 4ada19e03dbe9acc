use std::{
    fmt::Display,
    num::{ParseFloatError, ParseIntError},
};

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{position}: {internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::IntParseError { .. } => "IntParseError",
            ErrorImpl::FloatParseError { .. } => "FloatParseError",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedSemicolon { .. } => "ExpectedSemicolon",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::IntParseError { .. } => ErrorTip::None,
            ErrorImpl::FloatParseError { token, .. } => ErrorTip::Suggestion(format!(
                "Invalid float: `{}`, does it contain more than one `.`?",
                token
            )),
            ErrorImpl::UnexpectedToken { token } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`", token))
            }
            ErrorImpl::ExpectedSemicolon { token, after } => ErrorTip::Suggestion(format!(
                "Found `{}` after `{}`, bindings must end with `;`",
                token, after
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("{source}")]
    IntParseError {
        token: String,
        source: ParseIntError,
    },
    #[error("{source}")]
    FloatParseError {
        token: String,
        source: ParseFloatError,
    },
    #[error("unexpected token '{token}'")]
    UnexpectedToken { token: String },
    #[error("expected semicolon, found '{token}'")]
    ExpectedSemicolon { token: String, after: String },
}
