use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::application::dto::ReportFormat;
use crate::logging::LogLevel;

/// Inspect CycloneDX SBOMs and evaluate component licenses against policy
#[derive(Parser, Debug)]
#[command(name = "sbom-inspect")]
#[command(version)]
#[command(about = "Inspect CycloneDX SBOMs and evaluate component licenses against allow/deny policies", long_about = None)]
pub struct Args {
    /// Suppress progress messages and warnings
    #[arg(short, long, global = true, conflicts_with_all = ["debug", "trace"])]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Enable trace logging (parser and index internals)
    #[arg(short, long, global = true)]
    pub trace: bool,

    /// Path to a config file (defaults to ./sbom-inspect.config.yml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// License inspection commands
    License {
        #[command(subcommand)]
        command: LicenseCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum LicenseCommand {
    /// List the licenses declared by SBOM components
    List(LicenseListArgs),
    /// Show the configured license usage policies
    Policy(LicensePolicyArgs),
}

#[derive(ClapArgs, Debug)]
pub struct LicenseListArgs {
    /// CycloneDX JSON document to read
    #[arg(short, long = "input-file", value_name = "SBOM")]
    pub input_file: PathBuf,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long = "output-file", value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Resolve each license to a policy instead of listing raw license choices
    #[arg(long)]
    pub summary: bool,

    /// Output format for --summary: txt, csv or json
    #[arg(short, long)]
    pub format: Option<ReportFormat>,

    /// License policy file (defaults to ./license.json)
    #[arg(long, value_name = "FILE")]
    pub policy_file: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct LicensePolicyArgs {
    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long = "output-file", value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Output format: txt, csv or json
    #[arg(short, long)]
    pub format: Option<ReportFormat>,

    /// License policy file (defaults to ./license.json)
    #[arg(long, value_name = "FILE")]
    pub policy_file: Option<PathBuf>,
}

impl Args {
    pub fn log_level(&self) -> LogLevel {
        LogLevel::from_flags(self.quiet, self.debug, self.trace)
    }
}
