use std::io;
use std::process::ExitCode;

use block_crc::cli::{execute, exit_status, Cli, EXIT_FAILURE};
use block_crc::config::LogConfig;
use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log = LogConfig::resolve(cli.log_level.clone(), cli.log_format);
    if let Err(e) = log.init() {
        eprintln!("{e}");
        return ExitCode::from(EXIT_FAILURE);
    }

    let result = execute(cli.command(), io::stdin().lock(), io::stdout().lock());
    ExitCode::from(exit_status(&result, io::stderr().lock()))
}
