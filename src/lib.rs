pub mod cli;
pub mod config;
pub mod display;
pub mod query;

use crate::config::{QueryConfig, load_config, load_field_options};
use crate::query::{RuleList, Severity};
use anyhow::{Context, bail};
pub use cli::{ColorMode, Commands, OutputFormat, cli_parse};
pub use query::{
    FieldOption, FieldType, Operator, ParsedValue, Rule, applicable_operators, next_operator,
    parse, stringify, stringify_with,
};
use std::io::Read;
use tracing::debug;

fn init_logging(verbose: u8) {
    use tracing_subscriber::{EnvFilter, fmt};

    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

fn build_config(cli: &cli::Cli) -> anyhow::Result<QueryConfig> {
    let mut config = load_config(cli.config.as_deref()).context("Failed to load config")?;

    if let Some(path) = &cli.options {
        let fields = load_field_options(path)?;
        debug!(count = fields.len(), "loaded field options");
        config.extend_fields(fields);
    }

    Ok(config)
}

fn read_rule_list(path: Option<&std::path::Path>) -> anyhow::Result<RuleList> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read rule list '{}'", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read rule list from stdin")?;
            buffer
        }
    };

    serde_json::from_str(&raw).context("Rule list is not valid JSON")
}

pub fn run() -> anyhow::Result<()> {
    let cli = cli_parse();
    init_logging(cli.verbose);

    match cli.color {
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
        ColorMode::Auto => {}
    }

    let config = build_config(&cli)?;
    let format = cli.effective_format(config.output.format);
    let fields = config.fields.as_slice();
    debug!(profile = %config.profile_name, fields = fields.len(), ?format, "starting");

    match &cli.command {
        Commands::Parse { filter } => {
            let rules = parse(filter, fields);
            match format {
                OutputFormat::Text => print!("{}", display::format_rules_text(&rules, fields)),
                OutputFormat::Json => println!("{}", display::format_rules_json(&rules)?),
            }
        }
        Commands::Stringify { file } => {
            let rules = read_rule_list(file.as_deref())?;
            println!("{}", stringify_with(&rules, &config.serializer));
        }
        Commands::Normalize { filter, diff } => {
            let normalized = stringify_with(&parse(filter, fields), &config.serializer);
            match format {
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::json!({
                        "input": filter,
                        "normalized": normalized,
                        "changed": *filter != normalized,
                    })
                ),
                OutputFormat::Text => {
                    println!("{normalized}");
                    if *diff && !cli.quiet && *filter != normalized {
                        eprint!("{}", display::format_segment_diff(filter, &normalized));
                    }
                }
            }
        }
        Commands::Operators {
            field_type,
            current,
        } => {
            let field_type = *field_type;
            match current {
                Some(raw) => {
                    let current = cli::parse_current_operator(raw)?;
                    let next = next_operator(field_type, current);
                    let label = next.map(|op| op.as_str()).unwrap_or("equal");
                    match format {
                        OutputFormat::Text => println!("{label}"),
                        OutputFormat::Json => println!("{}", serde_json::json!(next)),
                    }
                }
                None => match format {
                    OutputFormat::Text => print!("{}", display::format_cycle_text(field_type)),
                    OutputFormat::Json => println!(
                        "{}",
                        serde_json::json!({
                            "type": field_type,
                            "enabled": query::is_toggle_enabled(field_type),
                            "operators": applicable_operators(field_type),
                        })
                    ),
                },
            }
        }
        Commands::Check { filter } => {
            let diagnostics = query::check(&parse(filter, fields), fields);
            match format {
                OutputFormat::Text => {
                    print!("{}", display::format_diagnostics_text(&diagnostics));
                }
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&diagnostics)?),
            }

            let warnings = diagnostics
                .iter()
                .filter(|d| d.severity == Severity::Warning)
                .count();
            if warnings > 0 {
                bail!("{} warning(s) in filter", warnings);
            }
        }
    }

    Ok(())
}
