//! text -> values for the menu, about as forgiving as `scanf("%x")` /
//! `scanf("%d")`: surrounding whitespace is fine, a `0x` prefix is fine,
//! anything that doesn't fit in 32 bits is not.

use crate::error::InputError;

/// upper bound on the data-blocks count, so a typo can't ask for gigabytes
pub const MAX_DATA_BLOCKS: usize = 1 << 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// menu option 1
    BlockIdLength,
    /// menu option 2
    DataBlocks,
}

pub fn parse_hex_word(field: &str, text: &str) -> Result<u32, InputError> {
    let trimmed = text.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    let invalid = || InputError::InvalidHex {
        field: field.to_string(),
        input: trimmed.to_string(),
    };

    // from_str_radix would take a leading '+'
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    // leading zeros don't count against the width
    let significant = digits.trim_start_matches('0');
    if significant.len() > 8 {
        return Err(invalid());
    }
    if significant.is_empty() {
        return Ok(0);
    }
    u32::from_str_radix(significant, 16).map_err(|_| invalid())
}

/// one word per string, named `data block N` in errors (1-based). stops at
/// the first bad one.
pub fn parse_words<S: AsRef<str>>(inputs: &[S]) -> Result<Vec<u32>, InputError> {
    inputs
        .iter()
        .enumerate()
        .map(|(i, s)| parse_hex_word(&format!("data block {}", i + 1), s.as_ref()))
        .collect()
}

pub fn parse_count(text: &str) -> Result<usize, InputError> {
    let trimmed = text.trim();
    let count: usize = trimmed
        .parse()
        .map_err(|_| InputError::InvalidCount(trimmed.to_string()))?;
    if count > MAX_DATA_BLOCKS {
        return Err(InputError::TooManyBlocks {
            count,
            max: MAX_DATA_BLOCKS,
        });
    }
    Ok(count)
}

pub fn parse_choice(text: &str) -> Result<Selection, InputError> {
    let trimmed = text.trim();
    let choice: i64 = trimmed
        .parse()
        .map_err(|_| InputError::InvalidChoiceInput(trimmed.to_string()))?;
    match choice {
        1 => Ok(Selection::BlockIdLength),
        2 => Ok(Selection::DataBlocks),
        other => Err(InputError::InvalidChoice(other)),
    }
}
