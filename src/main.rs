//! `inifile` command-line entry point.
use anyhow::Result;
use clap::Parser;

use inifile::{cli, commands, logging};

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = cli::Cli::parse();
    logging::init_subscriber(args.verbose);
    let log = logging::Logger::new();
    let mut out = std::io::stdout().lock();

    match args.command {
        cli::Command::Sections(opts) => {
            commands::sections::run(&args.global, &opts, &mut out, &log)
        }
        cli::Command::Get(opts) => commands::get::run(&args.global, &opts, &mut out, &log),
        cli::Command::Set(opts) => commands::set::run(&args.global, &opts, &log),
        cli::Command::Fmt(opts) => commands::fmt::run(&args.global, &opts, &log),
        cli::Command::Version => commands::version::run(&mut out),
    }
}
