//! Chunked word counting
//!
//! Content is read in [`WORD_CHUNK_SIZE`] byte chunks and each chunk is split on whitespace
//! on its own. A word that straddles a chunk boundary is therefore counted twice, once as
//! the tail of one chunk and once as the head of the next. Existing indexes were built with
//! this rule, so it is kept as-is.

use std::fs::File;
use std::io::{self, ErrorKind, Read};
use std::path::Path;

pub const WORD_CHUNK_SIZE: usize = 1024;

/// Count whitespace-delimited tokens in a file, chunk by chunk
pub fn count_words(path: &Path) -> io::Result<u64> {
    let file = File::open(path)?;
    count_words_in_reader(file)
}

pub fn count_words_in_reader<R: Read>(mut reader: R) -> io::Result<u64> {
    let mut buffer = [0u8; WORD_CHUNK_SIZE];
    let mut total = 0u64;
    loop {
        let filled = read_chunk(&mut reader, &mut buffer)?;
        if filled == 0 {
            break;
        }
        total += String::from_utf8_lossy(&buffer[..filled]).split_whitespace().count() as u64;
    }

    Ok(total)
}

/// Fill `buffer` as far as the reader allows; short only at end of input
fn read_chunk<R: Read>(reader: &mut R, buffer: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buffer.len() {
        match reader.read(&mut buffer[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
