use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "crashlens")]
#[command(about = "Filter and aggregate browser crash telemetry exports", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print grouped error counts (browser/version tree, platforms, games, hourly)
    Report {
        #[command(flatten)]
        facets: FacetArgs,

        #[arg(long, default_value = "plain")]
        format: OutputFormat,
    },

    /// Print the error logs matching the facet selection
    List {
        #[command(flatten)]
        facets: FacetArgs,

        #[arg(long, default_value = "plain")]
        format: OutputFormat,

        /// Print at most this many records
        #[arg(long)]
        limit: Option<usize>,
    },
}

/// Input location plus one flag per facet dimension.
#[derive(Args)]
pub struct FacetArgs {
    /// Log export to read: a JSON array or JSON-lines file, `-` for stdin
    #[arg(long, default_value = "-")]
    pub input: String,

    /// Window start, RFC 3339 (default: earliest record in the export)
    #[arg(long)]
    pub from: Option<DateTime<Utc>>,

    /// Window end, RFC 3339 (default: latest record in the export)
    #[arg(long)]
    pub to: Option<DateTime<Utc>>,

    /// Keep only these games (repeatable)
    #[arg(long = "game")]
    pub games: Vec<String>,

    /// Keep only these browser brands (repeatable)
    #[arg(long = "browser")]
    pub browsers: Vec<String>,

    /// Keep only these platforms (repeatable)
    #[arg(long = "platform")]
    pub platforms: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}
