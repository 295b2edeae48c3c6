//! Word loader — reads newline-separated byte strings from stdin (or any
//! `Read`) into [`Buckets`], stripping CR/LF and silently dropping lines
//! outside the admissible length range.

use std::io::{self, BufRead, BufReader, Read};

use crate::buckets::Buckets;
use crate::config::MAX_WORD_LEN;

/// Reads `reader` to EOF, line by line, appending every line whose trimmed
/// length is in `1..=MAX_WORD_LEN` to the matching bucket. Lines outside that
/// range are dropped without error; no deduplication is performed.
pub fn load_words<R: Read>(reader: R) -> io::Result<Buckets> {
    let mut reader = BufReader::new(reader);
    let mut buckets = Buckets::new();
    let mut line = Vec::new();
    loop {
        line.clear();
        let n = reader.read_until(b'\n', &mut line)?;
        if n == 0 {
            break;
        }
        while matches!(line.last(), Some(b'\n') | Some(b'\r')) {
            line.pop();
        }
        if !line.is_empty() && line.len() <= MAX_WORD_LEN {
            buckets.push(&line);
        }
    }
    Ok(buckets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_simple_wordlist() {
        let buckets = load_words(b"a\nbc\ndef\n".as_slice()).unwrap();
        assert_eq!(buckets.len_at(1), 1);
        assert_eq!(buckets.len_at(2), 1);
        assert_eq!(buckets.len_at(3), 1);
    }

    #[test]
    fn strips_crlf() {
        let buckets = load_words(b"a\r\nbc\r\n".as_slice()).unwrap();
        assert_eq!(buckets.words_at(1), &[b"a".to_vec()]);
        assert_eq!(buckets.words_at(2), &[b"bc".to_vec()]);
    }

    #[test]
    fn drops_out_of_range_lines() {
        let too_long = "x".repeat(17);
        let input = format!("a\n{}\n", too_long);
        let buckets = load_words(input.as_bytes()).unwrap();
        assert!(buckets.is_empty_at(17.min(16)));
        assert_eq!(buckets.total_words(), 1);
    }

    #[test]
    fn drops_empty_lines() {
        let buckets = load_words(b"a\n\nb\n".as_slice()).unwrap();
        assert_eq!(buckets.total_words(), 2);
    }

    #[test]
    fn handles_missing_trailing_newline() {
        let buckets = load_words(b"a\nbc".as_slice()).unwrap();
        assert_eq!(buckets.total_words(), 2);
    }

    #[test]
    fn no_deduplication() {
        let buckets = load_words(b"a\na\na\n".as_slice()).unwrap();
        assert_eq!(buckets.len_at(1), 3);
    }

    #[test]
    fn max_length_word_is_kept() {
        let word = "x".repeat(MAX_WORD_LEN);
        let input = format!("{}\n", word);
        let buckets = load_words(input.as_bytes()).unwrap();
        assert_eq!(buckets.len_at(MAX_WORD_LEN), 1);
    }
}
