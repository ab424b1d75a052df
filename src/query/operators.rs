//! Which operators make sense for which field type, and the order the
//! operator toggle steps through them.

use super::types::{FieldOption, FieldType, Operator, ParsedValue, find_option};

const ANY_OPERATORS: &[Operator] = &[
    Operator::LessThanOrEqual,
    Operator::LessThan,
    Operator::GreaterThanOrEqual,
    Operator::GreaterThan,
    Operator::Not,
    Operator::In,
];

const ATTRIBUTE_OPERATORS: &[Operator] = &[
    Operator::LessThanOrEqual,
    Operator::LessThan,
    Operator::GreaterThanOrEqual,
    Operator::GreaterThan,
    Operator::IsDefined,
    Operator::Not,
    Operator::In,
];

const STRING_OPERATORS: &[Operator] = &[Operator::In, Operator::Not];

const NUMBER_OPERATORS: &[Operator] = &[
    Operator::In,
    Operator::Not,
    Operator::GreaterThan,
    Operator::LessThan,
    Operator::GreaterThanOrEqual,
    Operator::LessThanOrEqual,
];

const DATE_OPERATORS: &[Operator] = &[Operator::In, Operator::Not];

/// Operators applicable to a field type, in toggle order (implicit equality excluded)
pub fn applicable_operators(field_type: FieldType) -> &'static [Operator] {
    match field_type {
        FieldType::Any => ANY_OPERATORS,
        FieldType::Attribute => ATTRIBUTE_OPERATORS,
        FieldType::String => STRING_OPERATORS,
        FieldType::Number => NUMBER_OPERATORS,
        FieldType::Date => DATE_OPERATORS,
        FieldType::Boolean => &[],
    }
}

/// Whether the operator toggle is usable at all
pub fn is_toggle_enabled(field_type: FieldType) -> bool {
    !applicable_operators(field_type).is_empty()
}

/// Whether `operator` is meaningful for the field type; equality always is
pub fn is_applicable(field_type: FieldType, operator: Option<Operator>) -> bool {
    match operator {
        None => true,
        Some(operator) => applicable_operators(field_type).contains(&operator),
    }
}

/// The operator after `current` in the toggle cycle.
///
/// The cycle is equality followed by the applicable operators, wrapping
/// around. An operator outside the cycle steps back to equality.
pub fn next_operator(field_type: FieldType, current: Option<Operator>) -> Option<Operator> {
    let operators = applicable_operators(field_type);

    match current {
        None => operators.first().copied(),
        Some(current) => operators
            .iter()
            .position(|op| *op == current)
            .and_then(|index| operators.get(index + 1))
            .copied(),
    }
}

/// Every state the toggle visits starting from equality, ending back at equality.
/// Empty when the toggle is disabled.
pub fn operator_cycle(field_type: FieldType) -> Vec<Option<Operator>> {
    if !is_toggle_enabled(field_type) {
        return Vec::new();
    }

    applicable_operators(field_type)
        .iter()
        .copied()
        .map(Some)
        .chain(std::iter::once(None))
        .collect()
}

/// Field type that governs a rule's operator toggle.
///
/// Bracket-named rules on paths the host didn't declare behave as attributes.
pub fn effective_type(value: &ParsedValue, options: &[FieldOption]) -> FieldType {
    match find_option(options, &value.path) {
        Some(option) => option.field_type,
        None if value.name.is_some() => FieldType::Attribute,
        None => FieldType::Any,
    }
}
