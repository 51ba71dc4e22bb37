use std::io::Write;

use chrono::NaiveDateTime;
use fat12::io::std::FileIO;
use fat12::{DirEntry, FAT12};

use super::filepath::resolve;
use crate::Error;

fn print_entry<W: Write>(out: &mut W, entry: &DirEntry) -> std::io::Result<()> {
    let attributes = entry.attributes();
    let names: Vec<&str> = attributes.names().collect();
    writeln!(out, "Name: {}", entry.name())?;
    writeln!(out, "Raw name: {:?}", String::from_utf8_lossy(entry.raw_name()))?;
    writeln!(out, "Raw extension: {:?}", String::from_utf8_lossy(entry.raw_extension()))?;
    writeln!(out, "Attribute: {:#04x}: {}", attributes.bits(), names.join(", "))?;
    writeln!(out, "Cluster: {}", entry.first_cluster())?;
    writeln!(out, "Filesize: {} bytes", entry.size())?;
    let created: NaiveDateTime = entry.created().into();
    writeln!(out, "Created: {}", created.format("%Y-%m-%d %H:%M:%S%.3f"))?;
    let accessed = entry.last_accessed();
    writeln!(out, "Accessed: {:04}-{:02}-{:02}", accessed.year(), accessed.month(), accessed.day())?;
    let modified: NaiveDateTime = entry.last_modified().into();
    writeln!(out, "Modified: {}", modified.format("%Y-%m-%d %H:%M:%S"))
}

pub fn stat<W: Write>(out: &mut W, fat12: &mut FAT12<FileIO>, path: &str) -> Result<(), Error> {
    let volume = *fat12.volume();
    let root = fat12.root_directory()?;
    match resolve(root.open(), path)? {
        (_, Some(entry)) => print_entry(out, &entry)?,
        (mut root, None) => {
            let sector = volume.root_directory_sector();
            writeln!(out, "Name: /")?;
            writeln!(out, "Root directory sector: {}", sector)?;
            writeln!(out, "Root directory entries: {}/{}", root.entries()?.len(), volume.root_entries)?;
        }
    }
    Ok(())
}
