use hapi_query::query::{
    FieldOption, FieldType, Operator, ParsedValue, Rule, effective_type, is_toggle_enabled,
    next_operator, operator_cycle, parse, stringify,
};

/// Press the toggle on a single-rule filter and return each resulting filter string
fn click_through(input: &str, options: &[FieldOption]) -> Vec<String> {
    let mut value = match parse(input, options).remove(0) {
        Rule::Single(value) => value,
        Rule::Group(_) => panic!("expected a single rule"),
    };
    let field_type = effective_type(&value, options);

    operator_cycle(field_type)
        .into_iter()
        .map(|_| {
            value.operator = next_operator(field_type, value.operator);
            stringify(&[Rule::Single(value.clone())])
        })
        .collect()
}

#[test]
fn test_unknown_field_cycle() {
    assert_eq!(
        click_through("foo=", &[]),
        vec![
            "foo%3Alessthanorequal=",
            "foo%3Alessthan=",
            "foo%3Agreaterthanorequal=",
            "foo%3Agreaterthan=",
            "foo%3Anot=",
            "foo%3Ain=",
            "foo=",
        ]
    );
}

#[test]
fn test_bracketed_unknown_field_cycles_as_attribute() {
    assert_eq!(
        click_through("foo[bar]=", &[]),
        vec![
            "foo%5Bbar%3Alessthanorequal%5D=",
            "foo%5Bbar%3Alessthan%5D=",
            "foo%5Bbar%3Agreaterthanorequal%5D=",
            "foo%5Bbar%3Agreaterthan%5D=",
            "foo%5Bbar%3Aisdefined%5D=",
            "foo%5Bbar%3Anot%5D=",
            "foo%5Bbar%3Ain%5D=",
            "foo%5Bbar%5D=",
        ]
    );
}

#[test]
fn test_string_field_cycle() {
    let options = vec![FieldOption::new("foo", FieldType::String, "Foo")];
    assert_eq!(
        click_through("foo=", &options),
        vec!["foo%3Ain=", "foo%3Anot=", "foo="]
    );
}

#[test]
fn test_number_field_cycle() {
    let options = vec![FieldOption::new("foo", FieldType::Number, "Foo")];
    assert_eq!(
        click_through("foo=", &options),
        vec![
            "foo%3Ain=",
            "foo%3Anot=",
            "foo%3Agreaterthan=",
            "foo%3Alessthan=",
            "foo%3Agreaterthanorequal=",
            "foo%3Alessthanorequal=",
            "foo=",
        ]
    );
}

#[test]
fn test_date_field_cycle() {
    let options = vec![FieldOption::new("foo", FieldType::Date, "Foo")];
    assert_eq!(
        click_through("foo=", &options),
        vec!["foo%3Ain=", "foo%3Anot=", "foo="]
    );
}

#[test]
fn test_boolean_field_disables_toggle() {
    let options = vec![FieldOption::new("foo", FieldType::Boolean, "Foo")];
    let value = ParsedValue::new("foo", "true");

    assert_eq!(effective_type(&value, &options), FieldType::Boolean);
    assert!(!is_toggle_enabled(FieldType::Boolean));
    assert!(click_through("foo=true", &options).is_empty());
}

#[test]
fn test_next_operator_wraps_from_any_state() {
    assert_eq!(
        next_operator(FieldType::Number, Some(Operator::LessThanOrEqual)),
        None
    );
    assert_eq!(
        next_operator(FieldType::Number, Some(Operator::Not)),
        Some(Operator::GreaterThan)
    );
    assert_eq!(next_operator(FieldType::Date, None), Some(Operator::In));
}
