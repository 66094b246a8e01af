//! prepscript - set up autotools projects sharing one install prefix
//!
//! Usage: prepscript [OPTIONS] <PROJECT>...
//!
//! For each project `P` the source checkout `git_P` is bootstrapped if it has
//! no `configure` script yet, then configured in `build_P` with
//! `--prefix=<cwd>/prefix` and the arguments listed in `P.conf`.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use prepkit::config::Config;
use prepkit::infrastructure::{LocalFs, SystemRunner};
use prepkit::ui::{error::print_error, interrupt, logging, output::ConsolePrepareSink};
use prepkit::{DirectoryLayout, RepoPreparer};

/// Try to autosetup projects which use the same prefix
#[derive(Parser, Debug)]
#[command(name = "prepscript")]
#[command(version, about, long_about = None)]
#[command(after_help = "\
The source directory of project P must be ./git_P. Configure runs in ./build_P \
and installs into ./prefix. If ./P.conf exists, each of its lines that is not \
blank or a '#' comment is passed to configure as one argument.

Example: 'prepscript vlc' bootstraps ./git_vlc if needed, then runs configure \
in ./build_vlc with prefix ./prefix.")]
struct Cli {
    /// Projects to set up, in order
    #[arg(required = true, value_name = "PROJECT")]
    projects: Vec<String>,

    /// Configure in the source tree, for projects without out-of-tree build support
    #[arg(short = 's', long = "sourcetreebuild")]
    source_tree_build: bool,

    /// Do not set LD_LIBRARY_PATH and PKG_CONFIG_PATH for configure
    #[arg(long = "no-configureenvs")]
    no_configure_envs: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // help and version go to stdout and are not failures
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    logging::init_tracing(cli.verbose);
    interrupt::exit_quietly_on_interrupt();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let root = std::env::current_dir().context("reading current directory")?;
    let config = Config::load_or_default(Some(root.as_path()))?;

    let layout = DirectoryLayout::new(root, config.prepare)
        .with_build_in_tree(cli.source_tree_build)
        .with_configure_env(!cli.no_configure_envs);

    let preparer = RepoPreparer::new(
        &layout,
        LocalFs::new(),
        SystemRunner::new(),
        ConsolePrepareSink,
    );
    let reports = preparer.prepare_all(&cli.projects)?;
    tracing::info!(projects = reports.len(), "all projects prepared");
    Ok(())
}
