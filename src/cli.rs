use crate::config::{validate_grid_size, Config};
use lexopt::{Arg, Parser, ValueExt};
use std::path::PathBuf;

pub(crate) static USAGE: &str = "\
Usage: wrapsnake [options]

Play snake on a grid whose edges wrap around.

Options:
  -c, --config <PATH>     Read configuration from the given file
  -s, --size <N>          Number of cells along each side of the grid
      --log-file <PATH>   Write log messages to the given file
  -h, --help              Show this help message and exit
  -V, --version           Show the program version and exit
";

/// What the program was asked to do on the command line
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum CliCommand {
    Run(RunOptions),
    Help,
    Version,
}

impl CliCommand {
    pub(crate) fn from_parser(mut parser: Parser) -> Result<CliCommand, lexopt::Error> {
        let mut opts = RunOptions::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(CliCommand::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(CliCommand::Version),
                Arg::Short('c') | Arg::Long("config") => {
                    opts.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('s') | Arg::Long("size") => {
                    let size = parser.value()?.parse_with(|s| {
                        s.parse::<u16>()
                            .map_err(|e| e.to_string())
                            .and_then(|n| validate_grid_size(n).map_err(|e| e.to_string()))
                    })?;
                    opts.grid_size = Some(size);
                }
                Arg::Long("log-file") => {
                    opts.log_file = Some(PathBuf::from(parser.value()?));
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(CliCommand::Run(opts))
    }
}

/// Options for playing the game
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct RunOptions {
    /// Explicit configuration file.  When set, the file must exist.
    pub(crate) config: Option<PathBuf>,

    pub(crate) grid_size: Option<u16>,

    pub(crate) log_file: Option<PathBuf>,
}

impl RunOptions {
    /// Override settings in `config` with those given on the command line
    pub(crate) fn apply(&self, config: &mut Config) {
        if let Some(size) = self.grid_size {
            config.grid_size = size;
        }
        if let Some(ref path) = self.log_file {
            config.log_file = Some(path.clone());
        }
    }
}
