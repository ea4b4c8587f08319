use sbom_inspect::adapters::outbound::console::StderrProgressReporter;
use sbom_inspect::adapters::outbound::filesystem::FileSystemReader;
use sbom_inspect::adapters::outbound::formatters::JsonFormatter;
use sbom_inspect::application::dto::{
    LicenseListRequest, LicenseListing, PolicySet, ReportFormat,
};
use sbom_inspect::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use sbom_inspect::application::use_cases::{
    ListLicensesUseCase, ListPoliciesUseCase, LoadPoliciesUseCase,
};
use sbom_inspect::cli::{Args, Command, LicenseCommand, LicenseListArgs, LicensePolicyArgs};
use sbom_inspect::config::{self, ConfigFile};
use sbom_inspect::license_compliance::services::PolicyIndex;
use sbom_inspect::logging;
use sbom_inspect::ports::outbound::ProgressReporter;
use sbom_inspect::shared::error::ExitCode;
use sbom_inspect::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version are reported through clap errors too
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    logging::init_logging(args.log_level());

    let reporter = if args.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };

    let config = match args.config.as_deref() {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(Path::new("."))?,
    };

    match args.command {
        Command::License { command } => match command {
            LicenseCommand::List(list_args) => {
                run_license_list(list_args, config.as_ref(), &reporter)
            }
            LicenseCommand::Policy(policy_args) => {
                run_license_policy(policy_args, config.as_ref(), &reporter)
            }
        },
    }
}

fn run_license_list(
    args: LicenseListArgs,
    config: Option<&ConfigFile>,
    reporter: &StderrProgressReporter,
) -> Result<()> {
    let summary = args.summary || config.and_then(|c| c.summary).unwrap_or(false);

    // Policies only matter when resolving verdicts
    let index = if summary {
        load_policies(args.policy_file.as_deref(), config, reporter)?.index
    } else {
        PolicyIndex::default()
    };

    let use_case = ListLicensesUseCase::new(FileSystemReader::new(), reporter);
    let request = LicenseListRequest::new(args.input_file, summary);
    let response = use_case.execute(&request, &index)?;

    let output = match &response.listing {
        LicenseListing::Summary(rows) => {
            let format = report_format(args.format, config)?;
            reporter.report(FormatterFactory::progress_message(format));
            FormatterFactory::create(format).format_license_summary(rows)?
        }
        LicenseListing::Choices(choices) => {
            if args.format.is_some() {
                log::warn!("--format only applies with --summary; writing JSON");
            }
            JsonFormatter::new().format_license_choices(choices)?
        }
    };

    present(output, args.output_file, reporter)
}

fn run_license_policy(
    args: LicensePolicyArgs,
    config: Option<&ConfigFile>,
    reporter: &StderrProgressReporter,
) -> Result<()> {
    let policies = load_policies(args.policy_file.as_deref(), config, reporter)?;
    let rows = ListPoliciesUseCase::new(reporter).execute(&policies)?;

    let format = report_format(args.format, config)?;
    reporter.report(FormatterFactory::progress_message(format));
    let output = FormatterFactory::create(format).format_policies(&rows)?;

    present(output, args.output_file, reporter)
}

fn load_policies(
    cli_path: Option<&Path>,
    config: Option<&ConfigFile>,
    reporter: &StderrProgressReporter,
) -> Result<PolicySet> {
    let policy_path = config::resolve_policy_file(cli_path, config);
    LoadPoliciesUseCase::new(FileSystemReader::new(), reporter).execute(&policy_path)
}

/// CLI flag, then config file, then txt
fn report_format(cli: Option<ReportFormat>, config: Option<&ConfigFile>) -> Result<ReportFormat> {
    if let Some(format) = cli {
        return Ok(format);
    }
    let configured = match config {
        Some(config) => config.report_format()?,
        None => None,
    };
    Ok(configured.unwrap_or_default())
}

fn present(
    output: String,
    output_file: Option<PathBuf>,
    reporter: &StderrProgressReporter,
) -> Result<()> {
    let presenter_type = PresenterType::from(output_file);
    let destination = match &presenter_type {
        PresenterType::File(path) => Some(path.clone()),
        PresenterType::Stdout => None,
    };

    PresenterFactory::create(presenter_type).present(&output)?;

    if let Some(path) = destination {
        reporter.report_completion(&format!("✅ Output complete: {}", path.display()));
    }
    Ok(())
}
