use std::io::Write;

use fat12::FAT12;
use fat12::error::OperationError;
use fat12::io::std::FileIO;

use super::filepath::resolve;
use crate::Error;

pub fn cat<W: Write>(out: &mut W, fat12: &mut FAT12<FileIO>, path: &str) -> Result<(), Error> {
    let root = fat12.root_directory()?;
    let mut file = match resolve(root.open(), path)? {
        (mut parent, Some(entry)) => parent.open_file(&entry)?,
        (_, None) => return Err(OperationError::NotFile.into()),
    };
    while let Some(step) = file.next_step()? {
        out.write_all(&step.data)?;
    }
    out.flush()?;
    Ok(())
}
