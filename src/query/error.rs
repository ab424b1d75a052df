use thiserror::Error;

/// Errors raised when a query vocabulary token can't be recognized
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error(
        "Unknown operator: '{0}'. Valid operators are: lessthanorequal, greaterthanorequal, lessthan, greaterthan, isdefined, not, in"
    )]
    UnknownOperator(String),

    #[error(
        "Unknown field type: '{0}'. Valid types are: attribute, boolean, string, number, date, any"
    )]
    UnknownFieldType(String),
}
