// File Operations
// Reading and writing key files and plaintext input

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use crate::error::RsaResult;

/// Read entire file into memory
pub fn read_file(path: &Path) -> RsaResult<Vec<u8>> {
    let mut file = File::open(path)?;
    let mut data = Vec::new();
    file.read_to_end(&mut data)?;
    Ok(data)
}

/// Read a UTF-8 text file
pub fn read_to_string(path: &Path) -> RsaResult<String> {
    Ok(fs::read_to_string(path)?)
}

/// Write data to file, replacing any previous contents
pub fn write_file(path: &Path, data: &[u8]) -> RsaResult<()> {
    let mut file = File::create(path)?;
    file.write_all(data)?;
    Ok(())
}
