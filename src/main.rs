mod app;
mod cli;
mod command;
mod config;
mod consts;
mod game;
mod util;
use crate::cli::{CliCommand, RunOptions, USAGE};
use crate::config::Config;
use crate::game::Rules;
use anyhow::Context;
use log::info;
use simplelog::{ConfigBuilder, WriteLogger};
use std::io::ErrorKind;
use std::process::ExitCode;

fn main() -> ExitCode {
    let parser = lexopt::Parser::from_env();
    let r = match CliCommand::from_parser(parser) {
        Ok(CliCommand::Run(opts)) => run(&opts),
        Ok(CliCommand::Help) => {
            print!("{USAGE}");
            Ok(())
        }
        Ok(CliCommand::Version) => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Err(e) => {
            eprintln!("wrapsnake: {e}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("wrapsnake: {e:?}");
            ExitCode::from(2)
        }
    }
}

fn run(opts: &RunOptions) -> anyhow::Result<()> {
    let mut config = load_config(opts)?;
    opts.apply(&mut config);
    init_logging(&config)?;
    info!(
        "Starting {} {} with {:?}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        config
    );
    let rules = Rules::from(&config);
    let terminal = ratatui::init();
    let r = app::run(rules, terminal);
    ratatui::restore();
    r.context("terminal I/O failed")
}

fn load_config(opts: &RunOptions) -> anyhow::Result<Config> {
    if let Some(ref path) = opts.config {
        Config::load(path, false)
            .with_context(|| format!("failed to load configuration from {}", path.display()))
    } else {
        let path = Config::default_path()?;
        Config::load(&path, true)
            .with_context(|| format!("failed to load configuration from {}", path.display()))
    }
}

fn init_logging(config: &Config) -> anyhow::Result<()> {
    let Some(ref path) = config.log_file else {
        return Ok(());
    };
    let file = fs_err::File::create(path).context("failed to open log file")?;
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    WriteLogger::init(config.log_level, log_config, file).context("failed to initialize logging")
}

fn is_broken_pipe(e: &anyhow::Error) -> bool {
    e.chain()
        .filter_map(|cause| cause.downcast_ref::<std::io::Error>())
        .any(|ioerr| ioerr.kind() == ErrorKind::BrokenPipe)
}
