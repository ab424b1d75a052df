use super::types::{FieldType, Operator, ParsedValue};
use serde::Serialize;

const LIST_SEPARATOR: char = ',';
const RANGE_SEPARATOR: &str = "..";

/// How a stored value string is meant to be read
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ValueShape<'a> {
    Scalar { value: &'a str },
    List { items: Vec<&'a str> },
    Range { from: &'a str, to: &'a str },
    Boolean { value: &'a str },
    Defined { value: &'a str },
}

impl ParsedValue {
    /// Interpret the value for a field of the given type.
    ///
    /// `in` lists and `isdefined` win over the field type; ranges only exist
    /// under implicit equality on number and date fields.
    pub fn shape(&self, field_type: FieldType) -> ValueShape<'_> {
        let value = self.value.as_str();

        match self.operator {
            Some(Operator::In) => ValueShape::List {
                items: split_list(value),
            },
            Some(Operator::IsDefined) => ValueShape::Defined { value },
            _ if field_type == FieldType::Boolean => ValueShape::Boolean { value },
            None if matches!(field_type, FieldType::Number | FieldType::Date) => {
                match split_range(value) {
                    Some((from, to)) => ValueShape::Range { from, to },
                    None => ValueShape::Scalar { value },
                }
            }
            _ => ValueShape::Scalar { value },
        }
    }
}

/// Items of a comma-joined list; an empty value is an empty list
pub fn split_list(value: &str) -> Vec<&str> {
    if value.is_empty() {
        Vec::new()
    } else {
        value.split(LIST_SEPARATOR).collect()
    }
}

pub fn join_list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| item.as_ref())
        .collect::<Vec<&str>>()
        .join(",")
}

/// `from..to` bounds, if the value is a range
pub fn split_range(value: &str) -> Option<(&str, &str)> {
    value.split_once(RANGE_SEPARATOR)
}

pub fn join_range(from: &str, to: &str) -> String {
    format!("{from}{RANGE_SEPARATOR}{to}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_shape_ignores_field_type() {
        let value = ParsedValue::new("foo", "a,b,c").with_operator(Operator::In);
        assert_eq!(
            value.shape(FieldType::Boolean),
            ValueShape::List {
                items: vec!["a", "b", "c"]
            }
        );
    }

    #[test]
    fn test_range_only_for_number_and_date() {
        let value = ParsedValue::new("foo", "10..20");
        assert_eq!(
            value.shape(FieldType::Number),
            ValueShape::Range {
                from: "10",
                to: "20"
            }
        );
        assert_eq!(
            value.shape(FieldType::String),
            ValueShape::Scalar { value: "10..20" }
        );

        let negated = value.clone().with_operator(Operator::Not);
        assert_eq!(
            negated.shape(FieldType::Number),
            ValueShape::Scalar { value: "10..20" }
        );
    }

    #[test]
    fn test_decimal_ranges() {
        assert_eq!(split_range("1.5..2.25"), Some(("1.5", "2.25")));
        assert_eq!(split_range("..5"), Some(("", "5")));
        assert_eq!(split_range("1.5"), None);
    }

    #[test]
    fn test_boolean_and_defined_shapes() {
        let flag = ParsedValue::new("is_active", "true");
        assert_eq!(
            flag.shape(FieldType::Boolean),
            ValueShape::Boolean { value: "true" }
        );

        let defined = ParsedValue::new("attributes", "false")
            .with_name("color")
            .with_operator(Operator::IsDefined);
        assert_eq!(
            defined.shape(FieldType::Attribute),
            ValueShape::Defined { value: "false" }
        );
    }

    #[test]
    fn test_list_helpers() {
        assert!(split_list("").is_empty());
        assert_eq!(split_list("a,,b"), vec!["a", "", "b"]);
        assert_eq!(join_list(&["a", "b"]), "a,b");
        assert_eq!(join_range("1", ""), "1..");
    }
}
