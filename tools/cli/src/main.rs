//! # oxsum: SHA-256 of one line of standard input
//!
//! Reads a single line of text from stdin, strips the line terminator,
//! and prints the lowercase hex SHA-256 digest of the remaining bytes.
//!
//! The hashing itself lives in `oxsum_digest`; this binary is only the
//! read → hash → print wiring.

use std::io::{self, BufRead};
use std::process::ExitCode;

use oxsum_digest::Sha256;

/// Removes a trailing `\n` or `\r\n` (and any stray `\r`) in place.
fn trim_line_ending(line: &mut String) {
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
}

fn read_input_line() -> io::Result<String> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    trim_line_ending(&mut line);
    Ok(line)
}

fn main() -> ExitCode {
    let line = match read_input_line() {
        Ok(line) => line,
        Err(err) => {
            log::error!("stdin read failed: {err}");
            eprintln!("oxsum: failed to read standard input: {err}");
            return ExitCode::FAILURE;
        }
    };

    log::debug!("hashing {} input bytes", line.len());
    let digest = Sha256::hash_bytes(line.as_bytes());
    println!("{}", digest.to_hex());
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_unix_line_ending() {
        let mut line = String::from("abc\n");
        trim_line_ending(&mut line);
        assert_eq!(line, "abc");
    }

    #[test]
    fn trims_crlf_line_ending() {
        let mut line = String::from("abc\r\n");
        trim_line_ending(&mut line);
        assert_eq!(line, "abc");
    }

    #[test]
    fn leaves_unterminated_input_alone() {
        let mut line = String::from("abc");
        trim_line_ending(&mut line);
        assert_eq!(line, "abc");

        let mut empty = String::new();
        trim_line_ending(&mut empty);
        assert_eq!(empty, "");
    }
}
