//! Rule-list edits a query builder performs on behalf of the user.
//!
//! Every function takes the current list and returns the edited copy; an
//! index that doesn't exist leaves the list as it was.

use super::types::{ParsedValue, Rule, RuleList};

/// Commit the trailing placeholder row once it has a path
pub fn append_rule(rules: &[Rule], value: ParsedValue) -> RuleList {
    let mut next = rules.to_vec();
    if !value.is_placeholder() {
        next.push(Rule::Single(value));
    }
    next
}

pub fn replace_rule(rules: &[Rule], index: usize, value: ParsedValue) -> RuleList {
    let mut next = rules.to_vec();
    if let Some(slot) = next.get_mut(index) {
        *slot = Rule::Single(value);
    }
    next
}

pub fn remove_rule(rules: &[Rule], index: usize) -> RuleList {
    rules
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, rule)| rule.clone())
        .collect()
}

/// Turn a single rule into an OR-group with a blank alternative on the same field
pub fn convert_to_group(rules: &[Rule], index: usize) -> RuleList {
    let mut next = rules.to_vec();
    if let Some(Rule::Single(value)) = next.get(index) {
        let value = value.clone();
        let alternative = ParsedValue {
            operator: None,
            value: String::new(),
            ..value.clone()
        };
        next[index] = Rule::Group(vec![value, alternative]);
    }
    next
}

/// Replace an OR-group's members; one member collapses to a single rule,
/// none removes the entry.
pub fn replace_group(rules: &[Rule], index: usize, members: Vec<ParsedValue>) -> RuleList {
    if index >= rules.len() {
        return rules.to_vec();
    }

    let mut members = members;
    match members.len() {
        0 => remove_rule(rules, index),
        1 => replace_rule(rules, index, members.remove(0)),
        _ => {
            let mut next = rules.to_vec();
            next[index] = Rule::Group(members);
            next
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::types::Operator;

    fn sample() -> RuleList {
        vec![
            Rule::Single(ParsedValue::new("foo", "a").with_operator(Operator::Not)),
            Rule::Single(ParsedValue::new("bar", "x")),
        ]
    }

    #[test]
    fn test_append_ignores_placeholders() {
        let rules = sample();
        assert_eq!(append_rule(&rules, ParsedValue::default()), rules);
        assert_eq!(append_rule(&rules, ParsedValue::new("baz", "")).len(), 3);
    }

    #[test]
    fn test_convert_to_group_adds_blank_alternative() {
        let rules = convert_to_group(&sample(), 0);
        assert_eq!(
            rules[0],
            Rule::Group(vec![
                ParsedValue::new("foo", "a").with_operator(Operator::Not),
                ParsedValue::new("foo", ""),
            ])
        );
        assert_eq!(rules[1], sample()[1]);
    }

    #[test]
    fn test_convert_leaves_groups_alone() {
        let once = convert_to_group(&sample(), 0);
        assert_eq!(convert_to_group(&once, 0), once);
    }

    #[test]
    fn test_group_collapses_and_removes() {
        let grouped = convert_to_group(&sample(), 1);
        let collapsed = replace_group(&grouped, 1, vec![ParsedValue::new("bar", "y")]);
        assert_eq!(collapsed[1], Rule::Single(ParsedValue::new("bar", "y")));

        let removed = replace_group(&grouped, 1, Vec::new());
        assert_eq!(removed.len(), 1);
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let rules = sample();
        assert_eq!(remove_rule(&rules, 9), rules);
        assert_eq!(replace_rule(&rules, 9, ParsedValue::new("x", "")), rules);
        assert_eq!(replace_group(&rules, 9, Vec::new()), rules);
        assert_eq!(convert_to_group(&rules, 9), rules);
    }
}
