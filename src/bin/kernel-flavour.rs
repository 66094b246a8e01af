//! kernel-flavour - clone the generic flavour of an Ubuntu kernel tree
//!
//! Usage: kernel-flavour [-f <name>] [-l <suffix>]
//!
//! Run from the top directory of the kernel git tree. Everything that is not
//! committed is discarded during the run, after confirmation.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;

use prepkit::application::FlavourReport;
use prepkit::config::Config;
use prepkit::domain::ports::Operator;
use prepkit::infrastructure::{ConsoleOperator, LineOperator, LocalFs, SystemRunner};
use prepkit::ui::views::next_steps::render_next_steps;
use prepkit::ui::{error::print_error, interrupt, logging, output::ConsoleFlavourSink};
use prepkit::{FlavourRequest, FlavourWorkflow, LocalVersion, WorkflowOutcome};

/// Create a new kernel flavour from the generic one
#[derive(Parser, Debug)]
#[command(name = "kernel-flavour")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Flavour name to use [default: login name]
    #[arg(short, long)]
    flavour: Option<String>,

    /// Local version suffix added to the changelog (asked for when omitted)
    #[arg(short, long)]
    local: Option<String>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    logging::init_tracing(cli.verbose);
    interrupt::exit_quietly_on_interrupt();

    let result = if std::io::stdin().is_terminal() {
        run(&cli, ConsoleOperator::new())
    } else {
        run(&cli, LineOperator::stdin())
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run<OP: Operator>(cli: &Cli, operator: OP) -> Result<()> {
    let root = std::env::current_dir().context("reading current directory")?;
    let config = Config::load_or_default(Some(root.as_path()))?;

    let request = FlavourRequest {
        root,
        flavour: match &cli.flavour {
            Some(name) => name.clone(),
            None => login_name()?,
        },
        local: match &cli.local {
            Some(suffix) => LocalVersion::Given(suffix.clone()),
            None => LocalVersion::Ask,
        },
    };

    let outcome = FlavourWorkflow::new(
        &config.kernel,
        LocalFs::new(),
        SystemRunner::new(),
        operator,
        ConsoleFlavourSink,
    )
    .run(&request)?;

    match outcome {
        WorkflowOutcome::Cancelled => println!("build cancelled."),
        WorkflowOutcome::Completed(report) => print_report(&report, &request.root),
    }
    Ok(())
}

fn print_report(report: &FlavourReport, root: &Path) {
    if !report.probe.known_codename {
        println!(
            "note: distribution '{}' is untested, check the result carefully",
            report.probe.codename
        );
    }
    tracing::info!(
        root = %root.display(),
        abi = %report.patch.abi_version,
        files = report.patch.registered.len(),
        "flavour registered"
    );
    print!("{}", render_next_steps(&report.flavour.name));
}

/// Lowercased login name of the current user, from the passwd database
fn login_name() -> Result<String> {
    let name = whoami::fallible::username()
        .context("could not determine the login name, pass --flavour")?;
    Ok(name.trim().to_lowercase())
}
