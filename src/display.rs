use crate::query::{
    Diagnostic, FieldOption, FieldType, ParsedValue, Rule, Severity, ValueShape, effective_type,
    operator_cycle,
};
use colored::Colorize;
use comfy_table::{Cell, Table};
use similar::{ChangeTag, TextDiff};
use std::fmt::Write as _;

/// Render a rule list as a table, one row per rule
pub fn format_rules_text(rules: &[Rule], options: &[FieldOption]) -> String {
    if rules.is_empty() {
        return "No rules.\n".to_string();
    }

    let mut table = Table::new();
    table.set_header(vec!["#", "Path", "Name", "Operator", "Value", "Type", "Shape"]);

    for (index, rule) in rules.iter().enumerate() {
        for (member_index, value) in rule.members().iter().enumerate() {
            let position = match rule {
                Rule::Single(_) => format!("{}", index + 1),
                Rule::Group(_) if member_index == 0 => format!("{}", index + 1),
                Rule::Group(_) => "  OR".to_string(),
            };
            let field_type = effective_type(value, options);
            table.add_row(vec![
                Cell::new(position),
                Cell::new(&value.path),
                Cell::new(value.name.as_deref().unwrap_or("")),
                Cell::new(
                    value
                        .operator
                        .map(|op| op.as_str())
                        .unwrap_or("equal"),
                ),
                Cell::new(&value.value),
                Cell::new(field_type.as_str()),
                Cell::new(describe_shape(value, field_type)),
            ]);
        }
    }

    format!("{table}\n")
}

pub fn format_rules_json(rules: &[Rule]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(rules)
}

fn describe_shape(value: &ParsedValue, field_type: FieldType) -> String {
    match value.shape(field_type) {
        ValueShape::Scalar { .. } => "scalar".to_string(),
        ValueShape::List { items } => format!("list of {}", items.len()),
        ValueShape::Range { from, to } => format!("range {} to {}", or_open(from), or_open(to)),
        ValueShape::Boolean { .. } => "boolean".to_string(),
        ValueShape::Defined { .. } => "defined".to_string(),
    }
}

fn or_open(bound: &str) -> &str {
    if bound.is_empty() { "open" } else { bound }
}

/// The operator toggle cycle, one state per line
pub fn format_cycle_text(field_type: FieldType) -> String {
    let cycle = operator_cycle(field_type);
    if cycle.is_empty() {
        return format!("Operator toggle is disabled for {} fields.\n", field_type);
    }

    let mut out = String::new();
    let _ = writeln!(out, "{} (equal)", field_type.as_str().bold());
    for state in cycle {
        let label = state.map(|op| op.as_str()).unwrap_or("equal");
        let _ = writeln!(out, "  -> {}", label);
    }
    out
}

pub fn format_diagnostics_text(diagnostics: &[Diagnostic]) -> String {
    if diagnostics.is_empty() {
        return format!("{}\n", "No problems found.".green());
    }

    let mut out = String::new();
    for diagnostic in diagnostics {
        let label = match diagnostic.severity {
            Severity::Warning => "warning".yellow().bold(),
            Severity::Info => "info".bright_blue(),
        };
        let _ = writeln!(out, "{}: {}", label, diagnostic);
    }
    out
}

/// Segment-by-segment diff between an input filter and its canonical form
pub fn format_segment_diff(original: &str, normalized: &str) -> String {
    let before = segment_lines(original);
    let after = segment_lines(normalized);
    let diff = TextDiff::from_lines(&before, &after);
    let mut out = String::new();

    for change in diff.iter_all_changes() {
        let line = change.to_string();
        match change.tag() {
            ChangeTag::Delete => {
                let _ = write!(out, "{}", format!("- {line}").red());
            }
            ChangeTag::Insert => {
                let _ = write!(out, "{}", format!("+ {line}").green());
            }
            ChangeTag::Equal => {
                let _ = write!(out, "  {line}");
            }
        }
    }

    out
}

fn segment_lines(filter: &str) -> String {
    filter
        .split('&')
        .filter(|segment| !segment.is_empty())
        .map(|segment| format!("{segment}\n"))
        .collect()
}
