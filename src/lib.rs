mod block;
mod crc;
mod reflect;

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod session;

#[cfg(test)]
mod proptests;

pub use block::BlockHeader;
pub use crc::{calculate_crc, calculate_crc_prefix, INIT, POLYNOMIAL, XOR_OUT};
pub use error::{InputError, SessionError};
pub use input::Selection;
pub use reflect::reflect;
pub use session::{Report, Session};
