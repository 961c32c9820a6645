use std::fs::File;
use std::io::{self, ErrorKind, Read};
use std::path::Path;

use xxhash_rust::xxh3::Xxh3;

const READ_BUFFER_SIZE: usize = 64 * 1024;

/// Hex-encoded XXH3-64 digest of the file content
///
/// Content identity only; not suitable for anything security-sensitive.
pub fn file_checksum(path: &Path) -> io::Result<String> {
    let file = File::open(path)?;
    reader_checksum(file)
}

pub fn reader_checksum<R: Read>(mut reader: R) -> io::Result<String> {
    let mut hasher = Xxh3::new();
    let mut buffer = vec![0u8; READ_BUFFER_SIZE];
    loop {
        match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => hasher.update(&buffer[..n]),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(format!("{:016x}", hasher.digest()))
}
