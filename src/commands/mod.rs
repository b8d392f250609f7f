use std::io::{self, Write};

use crate::error::Result;

pub mod create;
pub mod fetch;
pub mod setup;

/// Print a prompt, read one line from stdin, and return it trimmed.
pub fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}
