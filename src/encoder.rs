//! Text encoding through a code table

use crate::codes::CodeTable;
use crate::error::{HuffmanError, Result};

/// Replace every symbol of `text` with its code, joining the codes with
/// `delimiter`. Empty text encodes to the empty string.
pub fn encode(text: &str, codes: &CodeTable, delimiter: &str) -> Result<String> {
    let mut output = String::new();
    for (i, c) in text.chars().enumerate() {
        let code = codes.get(c).ok_or(HuffmanError::MissingCodeEntry(c))?;
        if i > 0 {
            output.push_str(delimiter);
        }
        output.push_str(code);
    }
    Ok(output)
}

/// Total number of code bits needed for `text`.
pub fn encoded_bit_length(text: &str, codes: &CodeTable) -> Result<u64> {
    text.chars().try_fold(0u64, |bits, c| {
        let code = codes.get(c).ok_or(HuffmanError::MissingCodeEntry(c))?;
        Ok(bits + code.len() as u64)
    })
}
