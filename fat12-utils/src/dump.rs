use std::io::Write;

use fat12::io::std::FileIO;
use fat12::{FAT12, Region};
use pretty_hex::pretty_hex;

use crate::Error;

pub fn dump<W: Write>(out: &mut W, fat12: &FAT12<FileIO>, region: Region) -> Result<(), Error> {
    let bytes = fat12.read_region(region)?;
    debug!("Dump {:?} region of {} bytes", region, bytes.len());
    writeln!(out, "{}", pretty_hex(&bytes))?;
    Ok(())
}
