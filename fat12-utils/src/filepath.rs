use std::io;

use fat12::error::{Error, OperationError};
use fat12::{DirEntry, Directory};

/// Resolve `/` separated path from `dir`, returning the directory holding
/// the last component together with its entry, `None` for `dir` itself
pub fn resolve<IO>(
    mut dir: Directory<IO>,
    path: &str,
) -> Result<(Directory<IO>, Option<DirEntry>), Error<io::Error>>
where
    IO: fat12::io::IO<Error = io::Error>,
{
    let path = path.trim().trim_matches('/');
    if path.is_empty() {
        return Ok((dir, None));
    }
    let (parent, name) = match path.rsplit_once('/') {
        Some((parent, name)) => (parent, name),
        None => ("", path),
    };
    for name in parent.split('/').filter(|name| !name.is_empty()) {
        let entry = dir.find(&name.to_ascii_uppercase())?.ok_or(OperationError::NotFound)?;
        dir = dir.open_directory(&entry)?;
    }
    let entry = dir.find(&name.to_ascii_uppercase())?.ok_or(OperationError::NotFound)?;
    Ok((dir, Some(entry)))
}
