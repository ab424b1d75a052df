use super::encoding::encode_component;
use super::parser::split_operator;
use super::types::{ParsedValue, Rule};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Where the operator goes for rules that carry a bracket name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OperatorPlacement {
    /// `path[name:operator]`
    #[default]
    InsideBrackets,
    /// `path[name]:operator`, as hAPI itself spells it
    AfterBrackets,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StringifyOptions {
    pub operator_placement: OperatorPlacement,
}

/// Serialize a rule list back into a filter string
pub fn stringify(rules: &[Rule]) -> String {
    stringify_with(rules, &StringifyOptions::default())
}

/// Serialize with explicit key layout options.
///
/// Entries are emitted in order; an OR-group becomes one segment per member.
/// Placeholder rows (empty path) are skipped.
pub fn stringify_with(rules: &[Rule], options: &StringifyOptions) -> String {
    let segments: Vec<String> = rules
        .iter()
        .flat_map(Rule::members)
        .filter(|value| {
            if value.is_placeholder() {
                trace!("skipping placeholder rule");
                false
            } else {
                true
            }
        })
        .map(|value| encode_segment(value, options))
        .collect();

    segments.join("&")
}

/// Encode a single rule as `key=value`
pub fn encode_segment(value: &ParsedValue, options: &StringifyOptions) -> String {
    format!(
        "{}={}",
        encode_component(&encode_key(value, options.operator_placement)),
        encode_component(&value.value)
    )
}

/// Unescaped key text for a rule
fn encode_key(value: &ParsedValue, placement: OperatorPlacement) -> String {
    let mut key = value.path.clone();

    match (&value.name, value.operator) {
        (None, None) => {}
        (None, Some(operator)) => {
            key.push(':');
            key.push_str(operator.as_str());
        }
        (Some(name), None) => {
            key.push('[');
            key.push_str(name);
            key.push(']');
        }
        (Some(name), Some(operator)) => match placement {
            // a name already ending in `:operator` only reads back inside the brackets
            OperatorPlacement::AfterBrackets if split_operator(name).1.is_none() => {
                key.push_str(&format!("[{}]:{}", name, operator));
            }
            _ => {
                key.push_str(&format!("[{}:{}]", name, operator));
            }
        },
    }

    key
}
