//! Input loading
//!
//! Reads the whole input file into memory and decodes it to text.

use bytesize::ByteSize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::encoding::{decode, Decoded, TextEncoding};
use crate::error::{Result, WordFreqError};

/// Read `path` into a string, decoding it with `encoding`
pub fn load_text(path: &Path, encoding: TextEncoding) -> Result<Decoded> {
    if path.is_dir() {
        return Err(WordFreqError::IsDirectory {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => WordFreqError::NotFound {
            path: path.to_path_buf(),
        },
        _ => WordFreqError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    log::debug!("Read {:?} ({})", path, ByteSize(bytes.len() as u64));

    let decoded = decode(bytes, path, encoding)?;
    log::debug!("Decoded {:?} as {}", path, decoded.encoding);

    Ok(decoded)
}
