use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Print `label`, then read one line. Returns `None` at end of input.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD.
pub(crate) fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> Result<Option<String>> {
    write!(out, "{label}")?;
    out.flush()?;
    let mut buf = Vec::new();
    let n = input
        .read_until(b'\n', &mut buf)
        .context("Failed to read input")?;
    if n == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_trims_line() {
        let mut input = Cursor::new("  view  \nnext\n");
        let mut out = Vec::new();
        let line = prompt(&mut input, &mut out, "> ").unwrap();
        assert_eq!(line.as_deref(), Some("view"));
        assert_eq!(String::from_utf8(out).unwrap(), "> ");
    }

    #[test]
    fn test_prompt_last_line_without_newline() {
        let mut input = Cursor::new("quit");
        let mut out = Vec::new();
        assert_eq!(
            prompt(&mut input, &mut out, "> ").unwrap().as_deref(),
            Some("quit")
        );
    }

    #[test]
    fn test_prompt_end_of_input() {
        let mut input = Cursor::new("");
        let mut out = Vec::new();
        assert!(prompt(&mut input, &mut out, "> ").unwrap().is_none());
    }

    #[test]
    fn test_prompt_replaces_invalid_utf8() {
        let mut input = Cursor::new(b"Caf\xe9\nnext\n".to_vec());
        let mut out = Vec::new();
        assert_eq!(
            prompt(&mut input, &mut out, "> ").unwrap().as_deref(),
            Some("Caf\u{FFFD}")
        );
        assert_eq!(
            prompt(&mut input, &mut out, "> ").unwrap().as_deref(),
            Some("next")
        );
    }

    #[test]
    fn test_prompt_blank_line_is_not_end_of_input() {
        let mut input = Cursor::new("\n");
        let mut out = Vec::new();
        assert_eq!(prompt(&mut input, &mut out, "> ").unwrap().as_deref(), Some(""));
    }
}
