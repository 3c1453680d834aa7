use crate::utils::error::{HelloError, Result};
use std::io::{ErrorKind, Write};

pub const GREETING: &str = "Hello!\n";

/// Writes the greeting with a single `write_all`, then flushes.
pub fn emit_greeting<W: Write>(out: &mut W) -> Result<usize> {
    let bytes = GREETING.as_bytes();

    match out.write_all(bytes) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::WriteZero => {
            return Err(HelloError::OutputError {
                message: format!("output stream accepted fewer than {} bytes", bytes.len()),
            });
        }
        Err(e) => return Err(e.into()),
    }
    out.flush()?;

    Ok(bytes.len())
}
