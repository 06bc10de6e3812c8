//! command line for the `block-crc` binary. everything here writes through
//! the given reader/writer, so a closed stdout is a [`SessionError::Io`](crate::error::SessionError::Io) and
//! exit code 1, not a panic.

use std::io::{BufRead, Write};

use clap::{Parser, Subcommand};
use tracing::debug;

use crate::block::BlockHeader;
use crate::config::{LogFormat, LOG_ENV};
use crate::crc::calculate_crc;
use crate::error::Result;
use crate::input::{parse_hex_word, parse_words, Selection};
use crate::session::{Report, Session};

#[derive(Parser, Debug)]
#[command(author, version, about = "CRC-32 over Block ID/Length or raw 32-bit data words")]
pub struct Cli {
    /// tracing filter, e.g. `debug` or `block_crc=trace`
    #[arg(long, env = LOG_ENV)]
    pub log_level: Option<String>,
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
    #[command(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// CRC of a Block ID and Block Length pair
    Block {
        /// Block ID, hex
        #[arg(long)]
        id: String,
        /// Block Length, hex
        #[arg(long)]
        length: String,
    },
    /// CRC of data words, hex, in the order given
    Data { words: Vec<String> },
    /// ask for everything on stdin (the default)
    Interactive,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.cmd.clone().unwrap_or(Command::Interactive)
    }
}

/// run one command. the result line (or the interactive prompts) go to
/// `writer`; `reader` is only read by `interactive`.
pub fn execute<R: BufRead, W: Write>(cmd: Command, reader: R, mut writer: W) -> Result<Report> {
    let report = match cmd {
        Command::Block { id, length } => {
            let header = BlockHeader::new(
                parse_hex_word("Block ID", &id)?,
                parse_hex_word("Block Length", &length)?,
            );
            Report {
                selection: Selection::BlockIdLength,
                words: header.words().to_vec(),
                crc: header.crc(),
            }
        }
        Command::Data { words } => {
            let words = parse_words(&words)?;
            Report {
                selection: Selection::DataBlocks,
                crc: calculate_crc(&words),
                words,
            }
        }
        Command::Interactive => return Session::new(reader, writer).run(),
    };

    writeln!(writer, "{}", report.line())?;
    writer.flush()?;
    Ok(report)
}

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// [`EXIT_SUCCESS`] when a CRC came out, [`EXIT_FAILURE`] for anything else.
/// the error message goes to `stderr`.
pub fn exit_status<E: Write>(result: &Result<Report>, mut stderr: E) -> u8 {
    match result {
        Ok(report) => {
            debug!(crc = report.crc, "done");
            EXIT_SUCCESS
        }
        Err(e) => {
            debug!(error = ?e, "crc not computed");
            // nothing left to report to if stderr is gone too
            let _ = writeln!(stderr, "{e}");
            EXIT_FAILURE
        }
    }
}
