use clap::Parser;
use nuget_graph::application::dto::OutputFormat;
use std::path::PathBuf;

/// Build the dependency graph of a NuGet project.assets.json lock file
#[derive(Parser, Debug)]
#[command(name = "nuget-graph")]
#[command(version)]
#[command(
    about = "Build the dependency graph of a NuGet project.assets.json lock file",
    long_about = None
)]
pub struct Args {
    /// Project directory or path to project.assets.json (defaults to current directory)
    pub path: Option<PathBuf>,

    /// Output format: json or markdown [default: json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Target framework to build the graph for (defaults to the first one without a runtime identifier)
    #[arg(short = 't', long = "framework", value_name = "FRAMEWORK")]
    pub target_framework: Option<String>,

    /// Trace why a package is included: "<name>/<version>" or "<name>"
    /// Can be specified multiple times: -w Serilog -w Polly/7.2.4
    #[arg(short = 'w', long = "why", value_name = "PACKAGE_KEY")]
    pub why: Vec<String>,

    /// Version shown for packages that are referenced but never resolved [default: 0.0.0]
    #[arg(long, value_name = "LABEL")]
    pub unresolved_label: Option<String>,

    /// Path to a config file (defaults to nuget-graph.config.yml in the project directory)
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}
