use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

/// Read the first line of a file, including the line terminator
///
/// Returns an empty string for an empty file. The file is closed before
/// this function returns.
pub(super) fn read_first_line(path: &Path) -> io::Result<String> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    let len = reader.read_line(&mut line)?;
    log::debug!("Read {} bytes from '{}'", len, path.display());
    Ok(line)
}
