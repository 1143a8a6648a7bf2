//! Whitespace separated token reading for the demo prompts.

use std::collections::VecDeque;
use std::io::BufRead;
use std::str::FromStr;

use anyhow::{bail, Context};
use tracing::warn;

/// Reads whitespace separated tokens from a buffered reader, one line at a
/// time, so several values may share a line.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` at end of input.
    pub fn next_token(&mut self) -> anyhow::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            let read = self
                .reader
                .read_line(&mut line)
                .context("failed to read from input")?;
            if read == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    /// Parse the next token as `V`. End of input and unparsable tokens are errors.
    pub fn next_value<V>(&mut self) -> anyhow::Result<V>
    where
        V: FromStr,
        V::Err: std::error::Error + Send + Sync + 'static,
    {
        let Some(token) = self.next_token()? else {
            bail!("unexpected end of input");
        };
        token
            .parse()
            .with_context(|| format!("invalid input '{token}'"))
    }

    /// Read integers until one is strictly positive.
    pub fn next_positive(&mut self) -> anyhow::Result<usize> {
        loop {
            let value: i64 = self.next_value()?;
            if value > 0 {
                return usize::try_from(value).context("value does not fit in usize");
            }
            warn!(value, "expected a positive integer, reading again");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_tokens_across_lines() {
        let mut reader = TokenReader::new(Cursor::new("1.5  2\n\n  3\n"));
        assert_eq!(reader.next_value::<f64>().unwrap(), 1.5);
        assert_eq!(reader.next_value::<i32>().unwrap(), 2);
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("3"));
        assert_eq!(reader.next_token().unwrap(), None);
    }

    #[test]
    fn test_next_positive_skips_non_positive() {
        let mut reader = TokenReader::new(Cursor::new("0 -4 -1\n7"));
        assert_eq!(reader.next_positive().unwrap(), 7);
    }

    #[test]
    fn test_errors() {
        let mut reader = TokenReader::new(Cursor::new("abc"));
        assert!(reader.next_value::<i32>().is_err());

        let mut reader = TokenReader::new(Cursor::new("0 0"));
        let err = reader.next_positive().unwrap_err();
        assert!(err.to_string().contains("end of input"));
    }
}
