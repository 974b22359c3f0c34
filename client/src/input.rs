use std::collections::VecDeque;
use std::fmt;
use std::io::{self, BufRead};

use common::games::tictactoe::MoveError;

#[derive(Debug)]
pub enum ConsoleError {
    /// Input ended while a token was expected.
    Eof,
    /// A token that should have been an integer.
    Malformed(String),
    Io(io::Error),
    Move(MoveError),
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsoleError::Eof => write!(f, "Input ended unexpectedly"),
            ConsoleError::Malformed(token) => write!(f, "Expected a number, got '{}'", token),
            ConsoleError::Io(err) => write!(f, "Console I/O failed: {}", err),
            ConsoleError::Move(err) => write!(f, "Move rejected: {}", err),
        }
    }
}

impl std::error::Error for ConsoleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConsoleError::Io(err) => Some(err),
            ConsoleError::Move(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ConsoleError {
    fn from(err: io::Error) -> Self {
        ConsoleError::Io(err)
    }
}

impl From<MoveError> for ConsoleError {
    fn from(err: MoveError) -> Self {
        ConsoleError::Move(err)
    }
}

/// Whitespace-separated tokens over a line reader. Tokens may span lines.
pub struct TokenReader<R: BufRead> {
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

    pub fn next_token(&mut self) -> Result<String, ConsoleError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(ConsoleError::Eof);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    pub fn next_i64(&mut self) -> Result<i64, ConsoleError> {
        let token = self.next_token()?;
        token.parse().map_err(|_| ConsoleError::Malformed(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_tokens_span_lines_and_blank_lines() {
        let mut reader = TokenReader::new(Cursor::new("yes\n\n  2\n 3 1\n"));
        assert_eq!(reader.next_token().unwrap(), "yes");
        assert_eq!(reader.next_i64().unwrap(), 2);
        assert_eq!(reader.next_i64().unwrap(), 3);
        assert_eq!(reader.next_i64().unwrap(), 1);
        assert!(matches!(reader.next_token(), Err(ConsoleError::Eof)));
    }

    #[test]
    fn test_negative_numbers_parse() {
        let mut reader = TokenReader::new(Cursor::new("-4 0"));
        assert_eq!(reader.next_i64().unwrap(), -4);
        assert_eq!(reader.next_i64().unwrap(), 0);
    }

    #[test]
    fn test_malformed_number_keeps_token() {
        let mut reader = TokenReader::new(Cursor::new("two 2"));
        match reader.next_i64() {
            Err(ConsoleError::Malformed(token)) => assert_eq!(token, "two"),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(reader.next_i64().unwrap(), 2);
    }
}
