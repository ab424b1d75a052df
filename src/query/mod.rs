//! hAPI filter query parsing and serialization
//!
//! A filter is a URL query string whose keys name a field and, optionally,
//! an operator. The query builder edits it as a list of rules; segments on
//! the same field that appear next to each other are an OR-group.
//!
//! # Syntax
//!
//! ```text
//! path=value                  implicit equality (or from..to on numbers/dates)
//! path:operator=value         explicit operator
//! path[name]=value            attribute lookup by name
//! path[name:operator]=value   attribute lookup with operator
//! a=1&a=2                     same field, contiguous: a=1 OR a=2
//! a=1&b=2                     different fields: a=1 AND b=2
//! ```
//!
//! Keys and values are percent-encoded, so a list looks like
//! `name%3Ain=a%2Cb%2Cc` on the wire.
//!
//! # Operators
//!
//! `lessthanorequal`, `greaterthanorequal`, `lessthan`, `greaterthan`,
//! `isdefined`, `not`, `in`

pub mod check;
pub mod edit;
pub mod encoding;
pub mod error;
pub mod operators;
pub mod parser;
pub mod shape;
pub mod stringify;
pub mod types;

pub use check::{Diagnostic, DiagnosticKind, Severity, check};
pub use error::QueryError;
pub use operators::{
    applicable_operators, effective_type, is_applicable, is_toggle_enabled, next_operator,
    operator_cycle,
};
pub use parser::parse;
pub use shape::{ValueShape, join_list, join_range, split_list, split_range};
pub use stringify::{OperatorPlacement, StringifyOptions, stringify, stringify_with};
pub use types::{
    FieldOption, FieldType, ListItem, Operator, ParsedValue, Rule, RuleList, find_option,
    resolve_type,
};
