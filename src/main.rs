use clap::Parser;
use log::LevelFilter;

use pge_build::shell::{self, Status};
use pge_build::{ansi, Recipe};

/// Compiles the game together with the vendored Lua sources
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Print the compiler invocation without running it
    #[arg(long)]
    dry_run: bool,
    /// Fail if the compiler exits unsuccessfully
    #[arg(long)]
    strict: bool,
    /// More log output on stderr (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, thiserror::Error)]
enum BuildErr {
    #[error(transparent)]
    Build(#[from] pge_build::Error),
    #[error("compiler failed with {0}")]
    CompilerFailed(Status),
}

type BuildResult<T> = Result<T, BuildErr>;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> BuildResult<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let recipe = Recipe::default();
    let sources = recipe.collect_sources()?;
    let command = recipe.command(&sources);

    if ansi::stdout_is_terminal() {
        println!("{}", ansi::bold(&command));
    } else {
        println!("{}", command);
    }

    if args.dry_run {
        return Ok(());
    }

    log::info!("running {} with {} source files", recipe.compiler, sources.len());
    let status = shell::system(&command)?;
    if !status.success() {
        if args.strict {
            return Err(BuildErr::CompilerFailed(status));
        }
        log::info!("ignoring compiler failure ({})", status);
    }
    Ok(())
}
