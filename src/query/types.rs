use super::error::QueryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// hAPI filter operators. Implicit equality (and ranges) is `None` wherever an
/// `Option<Operator>` appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    LessThanOrEqual,
    GreaterThanOrEqual,
    LessThan,
    GreaterThan,
    IsDefined,
    Not,
    In,
}

impl Operator {
    pub const ALL: [Operator; 7] = [
        Operator::LessThanOrEqual,
        Operator::GreaterThanOrEqual,
        Operator::LessThan,
        Operator::GreaterThan,
        Operator::IsDefined,
        Operator::Not,
        Operator::In,
    ];

    /// Name used in the `key:operator` suffix
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::LessThanOrEqual => "lessthanorequal",
            Operator::GreaterThanOrEqual => "greaterthanorequal",
            Operator::LessThan => "lessthan",
            Operator::GreaterThan => "greaterthan",
            Operator::IsDefined => "isdefined",
            Operator::Not => "not",
            Operator::In => "in",
        }
    }

    /// Case-sensitive lookup of a suffix name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_str() == name)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::from_name(s).ok_or_else(|| QueryError::UnknownOperator(s.to_string()))
    }
}

/// Field types a host can declare in its option list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Attribute,
    Boolean,
    String,
    Number,
    Date,
    #[default]
    Any,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Attribute => "attribute",
            FieldType::Boolean => "boolean",
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::Date => "date",
            FieldType::Any => "any",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "attribute" => Ok(FieldType::Attribute),
            "boolean" | "bool" => Ok(FieldType::Boolean),
            "string" => Ok(FieldType::String),
            "number" => Ok(FieldType::Number),
            "date" => Ok(FieldType::Date),
            "any" => Ok(FieldType::Any),
            _ => Err(QueryError::UnknownFieldType(s.to_string())),
        }
    }
}

/// A predefined value choice for a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub value: String,
    pub label: String,
}

/// Field metadata supplied by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    pub path: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<Vec<ListItem>>,
}

impl FieldOption {
    pub fn new(path: impl Into<String>, field_type: FieldType, label: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            field_type,
            label: label.into(),
            list: None,
        }
    }

    pub fn with_list(mut self, list: Vec<ListItem>) -> Self {
        self.list = Some(list);
        self
    }
}

/// Finds the metadata entry for a path, if the host declared one
pub fn find_option<'a>(options: &'a [FieldOption], path: &str) -> Option<&'a FieldOption> {
    options.iter().find(|option| option.path == path)
}

/// Field type for a path; unknown paths are `Any`
pub fn resolve_type(options: &[FieldOption], path: &str) -> FieldType {
    find_option(options, path)
        .map(|option| option.field_type)
        .unwrap_or_default()
}

/// One logical rule: `path[name]:operator=value`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParsedValue {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub operator: Option<Operator>,
    #[serde(default)]
    pub value: String,
}

impl ParsedValue {
    pub fn new(path: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: None,
            operator: None,
            value: value.into(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_operator(mut self, operator: Operator) -> Self {
        self.operator = Some(operator);
        self
    }

    /// Rows with no path are in-progress placeholders and never serialized
    pub fn is_placeholder(&self) -> bool {
        self.path.is_empty()
    }
}

/// An entry of the implicit AND list: a single rule or an OR-group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rule {
    Single(ParsedValue),
    Group(Vec<ParsedValue>),
}

impl Rule {
    /// The rules this entry contains, in order
    pub fn members(&self) -> &[ParsedValue] {
        match self {
            Rule::Single(value) => std::slice::from_ref(value),
            Rule::Group(values) => values,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Rule::Group(_))
    }
}

impl From<ParsedValue> for Rule {
    fn from(value: ParsedValue) -> Self {
        Rule::Single(value)
    }
}

impl From<Vec<ParsedValue>> for Rule {
    fn from(values: Vec<ParsedValue>) -> Self {
        Rule::Group(values)
    }
}

pub type RuleList = Vec<Rule>;
