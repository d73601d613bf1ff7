use clap::Parser;
use log::error;
use std::path::PathBuf;
use tagsmith::args::Cli;
use tagsmith::config::{Config, METADATA_SUBDIR};
use tagsmith::error::Result;
use tagsmith::fetch::{Fetcher, GitFetcher, LocalFetcher};
use tagsmith::pipeline;

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    if let Err(e) = run(cli) {
        error!("tags build not completed: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config {
        work_dir: cli.work_dir,
        out_dir: cli.out_dir,
        ..Config::default()
    };

    let fetcher: Box<dyn Fetcher> = match cli.source_dir {
        Some(source) => Box::new(LocalFetcher { source }),
        None => Box::new(GitFetcher {
            url: cli.repo_url,
            metadata_subdir: PathBuf::from(METADATA_SUBDIR),
        }),
    };

    let target = pipeline::run(&config, fetcher.as_ref())?;
    println!("{}", target.display());
    Ok(())
}

fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_target(cli.verbose)
        .init();
}
