//! Interactive terminal prompts

use anyhow::Result;
use std::io::{self, BufRead, Write};

/// Prompt for a value on stdin
pub fn prompt(label: &str) -> Result<String> {
    ask(&mut io::stdin().lock(), label, None)
}

/// Prompt for a value, returning the default when the answer is empty
pub fn prompt_with_default(label: &str, default: &str) -> Result<String> {
    ask(&mut io::stdin().lock(), label, Some(default))
}

fn ask<R: BufRead>(input: &mut R, label: &str, default: Option<&str>) -> Result<String> {
    match default {
        Some(d) => print!("{} [{}]: ", label, d),
        None => print!("{}: ", label),
    }
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let answer = line.trim();

    if answer.is_empty() {
        Ok(default.unwrap_or("").to_string())
    } else {
        Ok(answer.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ask_trims_answer() {
        let mut input = Cursor::new("  My Title  \n");
        let got = ask(&mut input, "Title", None).unwrap();
        assert_eq!(got, "My Title");
    }

    #[test]
    fn test_ask_empty_uses_default() {
        let mut input = Cursor::new("\n");
        let got = ask(&mut input, "Slug", Some("my-title")).unwrap();
        assert_eq!(got, "my-title");
    }

    #[test]
    fn test_ask_answer_overrides_default() {
        let mut input = Cursor::new("other-slug\n");
        let got = ask(&mut input, "Slug", Some("my-title")).unwrap();
        assert_eq!(got, "other-slug");
    }

    #[test]
    fn test_ask_empty_without_default() {
        let mut input = Cursor::new("\n");
        let got = ask(&mut input, "Title", None).unwrap();
        assert_eq!(got, "");
    }
}
