use super::operators::{effective_type, is_applicable};
use super::shape::ValueShape;
use super::types::{FieldOption, FieldType, Operator, ParsedValue, Rule, find_option};
use chrono::{DateTime, NaiveDate};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticKind {
    UnknownField,
    InapplicableOperator {
        operator: Operator,
        field_type: FieldType,
    },
    MissingAttributeName,
    InvalidNumber {
        value: String,
    },
    InvalidDate {
        value: String,
    },
    InvalidBoolean {
        value: String,
    },
    NotInList {
        value: String,
    },
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::UnknownField => write!(f, "field is not declared in the options"),
            DiagnosticKind::InapplicableOperator {
                operator,
                field_type,
            } => write!(
                f,
                "operator '{}' does not apply to {} fields",
                operator, field_type
            ),
            DiagnosticKind::MissingAttributeName => {
                write!(f, "attribute field has no [name]")
            }
            DiagnosticKind::InvalidNumber { value } => write!(f, "'{}' is not a number", value),
            DiagnosticKind::InvalidDate { value } => write!(f, "'{}' is not a date", value),
            DiagnosticKind::InvalidBoolean { value } => {
                write!(f, "'{}' is not true or false", value)
            }
            DiagnosticKind::NotInList { value } => {
                write!(f, "'{}' is not one of the predefined values", value)
            }
        }
    }
}

/// A problem found in an otherwise parseable rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub path: String,
    pub severity: Severity,
    #[serde(flatten)]
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    fn new(path: &str, severity: Severity, kind: DiagnosticKind) -> Self {
        Self {
            path: path.to_string(),
            severity,
            kind,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.kind)
    }
}

/// Report type, operator and value mismatches against the field options.
///
/// Empty values are treated as still being edited and are not reported.
pub fn check(rules: &[Rule], options: &[FieldOption]) -> Vec<Diagnostic> {
    rules
        .iter()
        .flat_map(Rule::members)
        .filter(|value| !value.is_placeholder())
        .flat_map(|value| check_value(value, options))
        .collect()
}

fn check_value(value: &ParsedValue, options: &[FieldOption]) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let option = find_option(options, &value.path);
    let field_type = effective_type(value, options);
    let path = value.path.as_str();

    if option.is_none() && !options.is_empty() {
        diagnostics.push(Diagnostic::new(
            path,
            Severity::Info,
            DiagnosticKind::UnknownField,
        ));
    }

    if let Some(operator) = value.operator
        && !is_applicable(field_type, value.operator)
    {
        diagnostics.push(Diagnostic::new(
            path,
            Severity::Warning,
            DiagnosticKind::InapplicableOperator {
                operator,
                field_type,
            },
        ));
    }

    if field_type == FieldType::Attribute && value.name.is_none() {
        diagnostics.push(Diagnostic::new(
            path,
            Severity::Warning,
            DiagnosticKind::MissingAttributeName,
        ));
    }

    let mut warn = |kind| diagnostics.push(Diagnostic::new(path, Severity::Warning, kind));

    let candidates: Vec<&str> = match value.shape(field_type) {
        ValueShape::Scalar { value } => vec![value],
        ValueShape::List { items } => items,
        ValueShape::Range { from, to } => vec![from, to],
        ValueShape::Boolean { value } | ValueShape::Defined { value } => {
            if !value.is_empty() && !is_boolean(value) {
                warn(DiagnosticKind::InvalidBoolean {
                    value: value.to_string(),
                });
            }
            Vec::new()
        }
    };

    for candidate in candidates.iter().filter(|c| !c.is_empty()) {
        match field_type {
            FieldType::Number if candidate.parse::<f64>().is_err() => {
                warn(DiagnosticKind::InvalidNumber {
                    value: candidate.to_string(),
                });
            }
            FieldType::Date if !is_date(candidate) => {
                warn(DiagnosticKind::InvalidDate {
                    value: candidate.to_string(),
                });
            }
            _ => {}
        }
    }

    if let Some(list) = option.and_then(|option| option.list.as_ref())
        && value.operator != Some(Operator::IsDefined)
    {
        let listed = |candidate: &str| list.iter().any(|item| item.value == candidate);
        for candidate in candidates.iter().filter(|c| !c.is_empty()) {
            if !listed(*candidate) {
                warn(DiagnosticKind::NotInList {
                    value: candidate.to_string(),
                });
            }
        }
        if field_type == FieldType::Boolean
            && !value.value.is_empty()
            && !listed(value.value.as_str())
        {
            warn(DiagnosticKind::NotInList {
                value: value.value.clone(),
            });
        }
    }

    diagnostics
}

fn is_boolean(value: &str) -> bool {
    matches!(value, "true" | "false")
}

fn is_date(value: &str) -> bool {
    DateTime::parse_from_rfc3339(value).is_ok()
        || NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}
