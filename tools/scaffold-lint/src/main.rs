use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use scaffold_lint::config::LinterConfig;
use scaffold_lint::error::LayoutError;
use scaffold_lint::layout::ProjectLayout;
use scaffold_lint::reporter::{self, Format};

const EXIT_CONFIG_ERROR: i32 = 2;

#[derive(Parser, Debug)]
#[command(name = "scaffold-lint", version)]
#[command(about = "Pre-flight check of a Flutter project's file layout, imports and dependencies")]
#[command(long_about = "Checks that the expected project files exist, that local imports are \
    relative, and that the manifest names every required dependency, then prints code statistics.\n\n\
    Exit codes:\n  \
    0 - All checks passed (or --report-only)\n  \
    1 - At least one check failed\n  \
    2 - Layout, working-directory or report output error")]
struct Cli {
    /// Project root (defaults to the current directory)
    #[arg(long)]
    root_dir: Option<PathBuf>,

    /// JSON layout manifest to use instead of the built-in Flutter layout
    #[arg(long)]
    layout: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value = "text")]
    format: Format,

    /// Always exit 0 once the checks have run
    #[arg(long)]
    report_only: bool,

    /// Print the active layout as JSON and exit
    #[arg(long)]
    print_layout: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let config = match load_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(EXIT_CONFIG_ERROR);
        }
    };

    if cli.print_layout {
        let mut stdout = io::stdout().lock();
        let printed = serde_json::to_writer_pretty(&mut stdout, &config.layout)
            .map_err(io::Error::from)
            .and_then(|()| writeln!(stdout));
        if let Err(e) = printed {
            eprintln!("Error: {e}");
            process::exit(EXIT_CONFIG_ERROR);
        }
        return;
    }

    tracing::debug!(root = %config.root_dir.display(), "running checks");
    let report = scaffold_lint::run_all_checks(&config);

    let mut stdout = io::stdout().lock();
    let written = reporter::render(&report, cli.format, &mut stdout).and_then(|()| stdout.flush());
    if let Err(e) = written {
        eprintln!("Error: failed to write report: {e}");
        process::exit(EXIT_CONFIG_ERROR);
    }

    let code = if cli.report_only { 0 } else { report.outcome().exit_code() };
    process::exit(code);
}

fn load_config(cli: &Cli) -> Result<LinterConfig, LayoutError> {
    let config = match &cli.root_dir {
        Some(dir) => LinterConfig::from_root(dir),
        None => LinterConfig::current()?,
    };
    match &cli.layout {
        Some(path) => LinterConfig::with_layout(&config.root_dir, ProjectLayout::from_json_file(path)?),
        None => Ok(config),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
