use super::errors::MemoryError;
use log::warn;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Characters making up one scanned word, including an optional sign and `0x` prefix
const FIELD_WIDTH: usize = 8;

/// Scanner yielding 32-bit words from hexadecimal text
///
/// Each word is read like a `%08x` scan: leading whitespace is skipped, then
/// up to eight characters are consumed. An optional `+`/`-` sign and `0x`/`0X`
/// prefix count toward the eight; a `-` negates the word modulo 2^32, so
/// `-0000001` reads as `ffffffff`. Scanning ends at the first token that has
/// no hex digit after its sign and prefix.
pub struct HexWords<'a> {
    text: &'a [u8],
    pos: usize,
}

impl<'a> HexWords<'a> {
    pub fn new(text: &'a [u8]) -> Self {
        Self { text, pos: 0 }
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.text.get(self.pos + offset).copied()
    }

    fn hex_at(&self, offset: usize) -> Option<u32> {
        self.peek_at(offset).and_then(|b| (b as char).to_digit(16))
    }
}

impl Iterator for HexWords<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        while self.peek_at(0).is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }

        let mut budget = FIELD_WIDTH;
        let sign = self.peek_at(0);
        let negative = sign == Some(b'-');
        if matches!(sign, Some(b'+') | Some(b'-')) && self.hex_at(1).is_some() {
            self.pos += 1;
            budget -= 1;
        }

        if self.peek_at(0) == Some(b'0')
            && matches!(self.peek_at(1), Some(b'x') | Some(b'X'))
            && self.hex_at(2).is_some()
        {
            self.pos += 2;
            budget -= 2;
        }

        let mut word: u32 = 0;
        let mut digits = 0;
        while digits < budget {
            match self.hex_at(0) {
                Some(d) => {
                    word = (word << 4) | d;
                    digits += 1;
                    self.pos += 1;
                }
                None => break,
            }
        }

        if digits == 0 {
            // Stop for good: a malformed token ends the load
            self.pos = self.text.len();
            None
        } else if negative {
            Some(word.wrapping_neg())
        } else {
            Some(word)
        }
    }
}

/// Fill `words` from hex text read out of `reader`, returning how many were loaded
///
/// Short input is not an error; the tail of `words` is left as it was. A read
/// error part-way through ends the load with whatever arrived before it.
pub fn load_words<R: Read>(mut reader: R, words: &mut [u32]) -> usize {
    let mut text = Vec::new();
    if let Err(e) = reader.read_to_end(&mut text) {
        warn!("Init data read failed after {} bytes: {}", text.len(), e);
    }

    let mut loaded = 0;
    for (slot, word) in words.iter_mut().zip(HexWords::new(&text)) {
        *slot = word;
        loaded += 1;
    }
    loaded
}

/// Open `path` and fill `words` from it
///
/// Failing to open the file is fatal; everything after that follows
/// [`load_words`]. The file is closed before this returns.
pub fn load_file(path: &Path, words: &mut [u32]) -> Result<usize, MemoryError> {
    let file = File::open(path).map_err(|source| MemoryError::InitFileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(load_words(BufReader::new(file), words))
}
