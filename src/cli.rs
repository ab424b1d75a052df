use crate::query::{FieldType, Operator};
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Parse, normalize and check hAPI filter query strings
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// TOML config file with field options and serializer settings
    #[arg(long, global = true, env = "HAPI_QUERY_CONFIG")]
    pub config: Option<PathBuf>,

    /// JSON or JSON5 file containing a field option list
    #[arg(long, global = true)]
    pub options: Option<PathBuf>,

    /// Output format
    #[arg(short = 'F', long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// When to use colors
    #[arg(long, global = true, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Skip supplementary output such as the normalize diff
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the rule list a filter string decodes to
    Parse {
        /// Filter string, e.g. "total%3Agreaterthan=10&status=approved"
        filter: String,
    },
    /// Serialize a JSON rule list back into a filter string
    Stringify {
        /// JSON file with the rule list; reads stdin when omitted
        file: Option<PathBuf>,
    },
    /// Print the canonical form of a filter string
    Normalize {
        filter: String,

        /// Show which segments changed
        #[arg(long)]
        diff: bool,
    },
    /// Show the operator toggle cycle for a field type
    Operators {
        /// Field type
        #[arg(short = 't', long = "type", default_value = "any")]
        field_type: FieldType,

        /// Print only the operator that follows this one ("equal" for none)
        #[arg(long)]
        current: Option<String>,
    },
    /// Report operator and value mismatches against the field options
    Check { filter: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl Cli {
    /// Command line wins over config; text otherwise
    pub fn effective_format(&self, configured: Option<OutputFormat>) -> OutputFormat {
        self.format.or(configured).unwrap_or(OutputFormat::Text)
    }
}

/// Parse the `--current` argument; "equal" (or empty) is implicit equality
pub fn parse_current_operator(raw: &str) -> Result<Option<Operator>, crate::query::QueryError> {
    match raw {
        "" | "equal" => Ok(None),
        other => other.parse().map(Some),
    }
}

pub fn cli_parse() -> Cli {
    Cli::parse()
}
