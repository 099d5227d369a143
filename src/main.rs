use anyhow::Result;
use clap::{ArgGroup, Parser};
use std::path::PathBuf;
use tracing::{debug, error};

use version_manager::cli::{self, Operation, RunArgs};
use version_manager::{config, logging, ui};

#[derive(clap::Parser)]
#[command(
    name = "version-manager",
    about = "Read and update the semantic version stored in a version file"
)]
#[command(group(
    ArgGroup::new("operation")
        .args(["init", "increment", "pre_release", "set", "build"])
        .multiple(false)
))]
struct Args {
    #[arg(short, long, help = "Version file location (default: ./version.json)")]
    path: Option<PathBuf>,

    #[arg(short, long, help = "Create the version file with v0.0.1")]
    init: bool,

    #[arg(
        short = 'u',
        long,
        value_name = "LEVEL",
        help = "Increment a component: major | minor | patch"
    )]
    increment: Option<String>,

    #[arg(
        short = 'r',
        long,
        value_name = "VALUE",
        help = "Set the pre-release (empty value clears it)"
    )]
    pre_release: Option<String>,

    #[arg(short, long, value_name = "VERSION", help = "Set the whole version")]
    set: Option<String>,

    #[arg(
        short,
        long,
        value_name = "VALUE",
        help = "Set the build metadata (empty value clears it)"
    )]
    build: Option<String>,

    #[arg(
        short,
        long,
        help = "Force the command (reinitialise, or allow a lower version)"
    )]
    force: bool,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Enable debug logging")]
    verbose: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

impl Args {
    fn operation(&self) -> Operation {
        if self.init {
            Operation::Init
        } else if let Some(level) = &self.increment {
            Operation::Increment(level.clone())
        } else if let Some(value) = &self.pre_release {
            Operation::PreRelease(value.clone())
        } else if let Some(text) = &self.set {
            Operation::Set(text.clone())
        } else if let Some(value) = &self.build {
            Operation::Build(value.clone())
        } else {
            Operation::Show
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("version-manager {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if let Err(e) = logging::init_logging(args.verbose) {
        eprintln!("Warning: {}", e);
    }

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(error = %e, "Failed to load configuration");
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };
    if !config.output.color {
        ui::set_colors(false);
    }

    let store = config.store(args.path.as_deref());
    let run_args = RunArgs {
        operation: args.operation(),
        force: args.force,
    };
    debug!(path = %store.path().display(), operation = ?run_args.operation, "Running");

    match cli::run(&store, &run_args) {
        Ok(output) if run_args.operation == Operation::Init => ui::display_success(&output),
        Ok(output) => ui::display_result(&output),
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }

    Ok(())
}
