use hapi_query::query::edit::{
    append_rule, convert_to_group, remove_rule, replace_group, replace_rule,
};
use hapi_query::query::{Operator, ParsedValue, Rule, parse, stringify};

#[test]
fn test_convert_to_group_serializes_blank_alternative() {
    let rules = convert_to_group(&parse("foo=a", &[]), 0);
    assert_eq!(stringify(&rules), "foo=a&foo=");
    assert_eq!(parse(&stringify(&rules), &[]), rules);
}

#[test]
fn test_typing_into_placeholder_adds_rule() {
    let rules = parse("foo=a", &[]);
    let rules = append_rule(&rules, ParsedValue::new("bar", ""));
    assert_eq!(stringify(&rules), "foo=a&bar=");
}

#[test]
fn test_edit_then_reserialize() {
    let rules = parse("foo=a&bar=x&baz=1", &[]);

    let rules = replace_rule(
        &rules,
        1,
        ParsedValue::new("bar", "x,y").with_operator(Operator::In),
    );
    assert_eq!(stringify(&rules), "foo=a&bar%3Ain=x%2Cy&baz=1");

    let rules = remove_rule(&rules, 0);
    assert_eq!(stringify(&rules), "bar%3Ain=x%2Cy&baz=1");
}

#[test]
fn test_deleting_group_member_collapses_group() {
    let rules = parse("foo=a&foo=b&bar=x", &[]);
    let members: Vec<ParsedValue> = rules[0]
        .members()
        .iter()
        .filter(|value| value.value != "b")
        .cloned()
        .collect();

    let rules = replace_group(&rules, 0, members);
    assert_eq!(rules[0], Rule::Single(ParsedValue::new("foo", "a")));
    assert_eq!(stringify(&rules), "foo=a&bar=x");
}
