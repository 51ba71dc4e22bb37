use std::io::Write;

use chrono::NaiveDateTime;
use fat12::io::std::FileIO;
use fat12::{DirEntry, Directory, FAT12};

use super::filepath::resolve;
use crate::Error;

fn print<W: Write>(out: &mut W, entry: &DirEntry, prefix: &str) -> std::io::Result<()> {
    let attrs = entry.attributes();
    write!(out, "{}", if attrs.directory() { "d" } else { "-" })?;
    write!(out, "{}", if attrs.read_only() { "r" } else { "-" })?;
    write!(out, "{}", if attrs.system() { "s" } else { "-" })?;
    write!(out, "{}", if attrs.hidden() { "h" } else { "-" })?;
    write!(out, "{}", if attrs.archive() { "a" } else { "-" })?;
    write!(out, " {:8} {:4}", entry.size(), entry.first_cluster())?;
    let modified_at: NaiveDateTime = entry.last_modified().into();
    write!(out, " {}", modified_at.format("%Y-%m-%d %H:%M:%S"))?;
    let suffix = if attrs.directory() { "/" } else { "" };
    writeln!(out, " {}{}{}", prefix, entry.name(), suffix)
}

fn walk<W: Write>(
    out: &mut W,
    mut directory: Directory<FileIO>,
    prefix: &str,
    recursive: bool,
) -> Result<(), Error> {
    for entry in directory.entries()? {
        if entry.is_volume_label() {
            continue;
        }
        print(out, &entry, prefix)?;
        if recursive && entry.is_directory() && !entry.is_dot() {
            let subdirectory = directory.open_directory(&entry)?;
            walk(out, subdirectory, &format!("{}{}/", prefix, entry.name()), recursive)?;
        }
    }
    Ok(())
}

pub fn list<W: Write>(
    out: &mut W,
    fat12: &mut FAT12<FileIO>,
    path: &str,
    recursive: bool,
) -> Result<(), Error> {
    let root = fat12.root_directory()?;
    let directory = match resolve(root.open(), path)? {
        (directory, None) => directory,
        (mut parent, Some(entry)) => parent.open_directory(&entry)?,
    };
    walk(out, directory, "", recursive)
}
