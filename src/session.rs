//! the interactive menu: prompts on the writer, answers off the reader as
//! whitespace-separated tokens, so `1 10` on one line answers two prompts
//! just like `scanf` would. the CRC math itself lives in [`crate::crc`], this only
//! gathers words and prints the result as 8 uppercase hex digits.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use tracing::debug;

use crate::block::BlockHeader;
use crate::crc::calculate_crc;
use crate::error::{InputError, Result, SessionError};
use crate::input::{parse_choice, parse_count, parse_hex_word, Selection};

/// what a finished run computed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub selection: Selection,
    pub words: Vec<u32>,
    pub crc: u32,
}

impl Report {
    pub fn label(&self) -> &'static str {
        match self.selection {
            Selection::BlockIdLength => "CRC for Block ID and Block Length",
            Selection::DataBlocks => "CRC for Data Blocks",
        }
    }

    /// the line printed after a successful run, without the newline
    pub fn line(&self) -> String {
        format!("{}: {:08X}", self.label(), self.crc)
    }
}

pub struct Session<R, W> {
    reader: R,
    writer: W,
    line: String,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            line: String::new(),
            pending: VecDeque::new(),
        }
    }

    /// show the menu, read a choice, run it
    pub fn run(&mut self) -> Result<Report> {
        writeln!(self.writer, "Select an option:")?;
        writeln!(self.writer, "1. Calculate CRC for Block ID and Block Length")?;
        writeln!(self.writer, "2. Calculate CRC for Data Blocks")?;
        let answer = self.ask("Enter your choice (1 or 2): ", "choice")?;
        let selection = parse_choice(&answer).map_err(rejected)?;

        match selection {
            Selection::BlockIdLength => self.run_block_id_length(),
            Selection::DataBlocks => self.run_data_blocks(),
        }
    }

    pub fn run_block_id_length(&mut self) -> Result<Report> {
        let id = self.ask_hex("Enter Block ID in hex format: ", "Block ID")?;
        let length = self.ask_hex("Enter Block Length in hex format: ", "Block Length")?;

        let header = BlockHeader::new(id, length);
        let report = Report {
            selection: Selection::BlockIdLength,
            words: header.words().to_vec(),
            crc: header.crc(),
        };
        self.finish(report)
    }

    pub fn run_data_blocks(&mut self) -> Result<Report> {
        let answer = self.ask("Enter number of data blocks: ", "number of data blocks")?;
        let count = parse_count(&answer).map_err(rejected)?;

        let mut words = Vec::with_capacity(count);
        for n in 1..=count {
            let prompt = format!("Enter data block {n} in hex format: ");
            let field = format!("data block {n}");
            words.push(self.ask_hex(&prompt, &field)?);
        }

        let crc = calculate_crc(&words);
        let report = Report {
            selection: Selection::DataBlocks,
            words,
            crc,
        };
        self.finish(report)
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    fn finish(&mut self, report: Report) -> Result<Report> {
        debug!(
            selection = ?report.selection,
            words = report.words.len(),
            crc = report.crc,
            "crc computed"
        );
        writeln!(self.writer, "{}", report.line())?;
        self.writer.flush()?;
        Ok(report)
    }

    fn ask_hex(&mut self, prompt: &str, field: &str) -> Result<u32> {
        let answer = self.ask(prompt, field)?;
        parse_hex_word(field, &answer).map_err(rejected)
    }

    fn ask(&mut self, prompt: &str, what: &str) -> Result<String> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                debug!(what, "input ended early");
                return Err(SessionError::UnexpectedEof {
                    prompt: what.to_string(),
                });
            }
            self.pending
                .extend(self.line.split_whitespace().map(str::to_string));
        }
    }
}

fn rejected(err: InputError) -> SessionError {
    debug!(error = %err, "input rejected");
    SessionError::Input(err)
}
