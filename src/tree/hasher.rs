//! Content digests for files using BLAKE3

use crate::error::MergeError;
use crate::types::Digest;
use blake3::Hasher;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

/// Compute the content digest of a file
///
/// The file is streamed through the hasher, so its size is not bounded by
/// memory. Only content bytes contribute; metadata is ignored. Open or read
/// failures are returned with the offending path.
pub fn hash_file(path: &Path) -> Result<Digest, MergeError> {
    let file = File::open(path).map_err(|e| MergeError::io(path, e))?;
    hash_reader(BufReader::new(file)).map_err(|e| MergeError::io(path, e))
}

/// Compute the content digest of everything readable from `reader`
pub fn hash_reader<R: io::Read>(mut reader: R) -> io::Result<Digest> {
    let mut hasher = Hasher::new();
    io::copy(&mut reader, &mut hasher)?;
    Ok(Digest::from_bytes(*hasher.finalize().as_bytes()))
}

/// Compute the content digest of an in-memory buffer
pub fn hash_bytes(content: &[u8]) -> Digest {
    let mut hasher = Hasher::new();
    hasher.update(content);
    Digest::from_bytes(*hasher.finalize().as_bytes())
}
