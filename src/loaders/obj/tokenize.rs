//! Line tokenizer shared by the OBJ and MTL parsers.
//!
//! Every directive line is read as `<directive> <tail>`: the first
//! whitespace-delimited token names the directive and the trimmed remainder
//! carries its arguments.

use std::io::{self, BufRead};

/// Lines of `reader` with `\n` or `\r\n` stripped. Bytes that are not valid
/// UTF-8 become U+FFFD instead of failing the read.
pub struct LossyLines<R> {
    reader: R,
    buf: Vec<u8>,
}

pub fn lossy_lines<R: BufRead>(reader: R) -> LossyLines<R> {
    LossyLines {
        reader,
        buf: Vec::new(),
    }
}

impl<R: BufRead> Iterator for LossyLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                let mut line: &[u8] = &self.buf;
                line = line.strip_suffix(b"\n").unwrap_or(line);
                line = line.strip_suffix(b"\r").unwrap_or(line);
                Some(Ok(String::from_utf8_lossy(line).into_owned()))
            }
            Err(error) => Some(Err(error)),
        }
    }
}

/// First whitespace-delimited token of `line`, or `""` for a blank line.
pub fn first_token(line: &str) -> &str {
    line.split_whitespace().next().unwrap_or("")
}

/// Everything after the first token, trimmed of surrounding whitespace.
pub fn tail(line: &str) -> &str {
    let line = line.trim_start();
    match line.find(char::is_whitespace) {
        Some(token_end) => line[token_end..].trim(),
        None => "",
    }
}

/// Splits `input` on `delimiter`, keeping empty fields between consecutive
/// delimiters (`1//3` has an empty middle field). A single trailing
/// delimiter does not open a new field.
pub fn split(input: &str, delimiter: char) -> Vec<&str> {
    if input.is_empty() {
        return Vec::new();
    }
    let input = input.strip_suffix(delimiter).unwrap_or(input);
    input.split(delimiter).collect()
}

/// Whitespace-separated arguments of a directive tail.
pub fn fields(tail: &str) -> Vec<&str> {
    tail.split_whitespace().collect()
}
