use crate::constants::SELECTION_PROMPT;
use crate::error::DofError;
use anyhow::Result;
use std::io::{BufRead, Write};

/// Ask for a table index and block until one line is read.
///
/// End of input, an empty line or anything that is not an integer is
/// [`DofError::InvalidInput`]. Range checking is left to the table.
pub fn prompt_camera_index<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<i64> {
    write!(output, "{SELECTION_PROMPT}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(DofError::InvalidInput("no camera selection entered".into()).into());
    }
    let answer = line.trim();
    answer
        .parse::<i64>()
        .map_err(|_| DofError::InvalidInput(format!("not a camera id: {answer:?}")).into())
}
