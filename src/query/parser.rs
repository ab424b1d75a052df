use super::encoding::decode_component;
use super::types::{FieldOption, Operator, ParsedValue, Rule, RuleList, resolve_type};
use tracing::trace;

/// Decoded `path[name]:operator` key
#[derive(Debug, Clone, PartialEq, Eq)]
struct KeyParts<'a> {
    path: &'a str,
    name: Option<&'a str>,
    operator: Option<Operator>,
}

/// Parse a filter string into its rule list.
///
/// Parsing is lenient: segments without `=` or without a path are dropped,
/// and operator suffixes that aren't recognized stay part of the path.
/// Contiguous segments on the same path form one OR-group. The option list
/// is only consulted to resolve field types; stored values are never
/// reshaped by it.
pub fn parse(input: &str, options: &[FieldOption]) -> RuleList {
    let mut rules = RuleList::new();
    let mut run: Vec<ParsedValue> = Vec::new();

    for segment in input.split('&') {
        if segment.is_empty() {
            continue;
        }

        let Some(value) = parse_segment(segment) else {
            trace!(segment, "skipping malformed filter segment");
            continue;
        };

        trace!(
            path = %value.path,
            shape = ?value.shape(resolve_type(options, &value.path)),
            "decoded filter segment"
        );

        if run.first().is_some_and(|first| first.path != value.path) {
            rules.push(close_run(std::mem::take(&mut run)));
        }
        run.push(value);
    }

    if !run.is_empty() {
        rules.push(close_run(run));
    }

    rules
}

/// Decode one `key=value` segment
pub fn parse_segment(segment: &str) -> Option<ParsedValue> {
    let (raw_key, raw_value) = segment.split_once('=')?;
    let key = decode_component(raw_key);
    let parts = decode_key(&key)?;

    Some(ParsedValue {
        path: parts.path.to_string(),
        name: parts.name.map(str::to_string),
        operator: parts.operator,
        value: decode_component(raw_value),
    })
}

fn close_run(mut run: Vec<ParsedValue>) -> Rule {
    match run.len() {
        1 => Rule::Single(run.remove(0)),
        _ => Rule::Group(run),
    }
}

fn decode_key(key: &str) -> Option<KeyParts<'_>> {
    let parts = decode_bracket_key(key).unwrap_or_else(|| {
        let (path, operator) = split_operator(key);
        KeyParts {
            path,
            name: None,
            operator,
        }
    });

    if parts.path.is_empty() {
        None
    } else {
        Some(parts)
    }
}

/// `path[name]`, `path[name:op]` or `path[name]:op`; anything else after the
/// closing bracket means the key isn't in bracket form at all.
fn decode_bracket_key(key: &str) -> Option<KeyParts<'_>> {
    let open = key.find('[')?;
    let close = key.rfind(']')?;
    if close < open {
        return None;
    }

    let path = &key[..open];
    let (name, inner_operator) = split_operator(&key[open + 1..close]);
    let rest = &key[close + 1..];

    let operator = match (inner_operator, rest) {
        (operator, "") => operator,
        (None, rest) => Some(rest.strip_prefix(':').and_then(Operator::from_name)?),
        (Some(_), _) => return None,
    };

    Some(KeyParts {
        path,
        name: Some(name),
        operator,
    })
}

/// Split a trailing `:operator` off when it names a known operator
pub(crate) fn split_operator(input: &str) -> (&str, Option<Operator>) {
    match input.rsplit_once(':') {
        Some((head, suffix)) => match Operator::from_name(suffix) {
            Some(operator) => (head, Some(operator)),
            None => (input, None),
        },
        None => (input, None),
    }
}
