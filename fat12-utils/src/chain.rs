use std::io::Write;

use fat12::fat::Entry;
use fat12::io::std::FileIO;
use fat12::types::ClusterID;
use fat12::{DirEntry, Directory, FAT12};

use super::filepath::resolve;
use crate::Error;

fn describe<W: Write>(out: &mut W, next: Option<Entry>) -> std::io::Result<()> {
    match next {
        Some(Entry::Next(cluster_id)) => writeln!(out, "Next cluster: {}", cluster_id),
        Some(Entry::Last) => writeln!(out, "No more entries"),
        Some(Entry::BadCluster) => writeln!(out, "Entry marked as bad"),
        Some(Entry::Free) => writeln!(out, "Broken link to free cluster"),
        Some(Entry::Reserved) => writeln!(out, "Broken link to reserved cluster"),
        None => writeln!(out, "Cluster out of FAT range"),
    }
}

/// Directories have no size to consume, walk their chain through FAT alone
fn directory_chain<W: Write>(
    out: &mut W,
    fat12: &FAT12<FileIO>,
    first: ClusterID,
) -> Result<(), Error> {
    let volume = *fat12.volume();
    let fat = fat12.fat_table()?;
    for cluster_id in fat.chain(first) {
        let cluster_id = cluster_id?;
        let sector_id = volume.cluster_sector(cluster_id);
        let offset = volume.sector_offset(sector_id);
        writeln!(out, "Cluster {} in sector {} (offset {:#06x})", cluster_id, sector_id, offset)?;
        describe(out, fat.next_cluster(cluster_id).ok())?;
    }
    Ok(())
}

fn file_chain<W: Write>(
    out: &mut W,
    parent: &mut Directory<FileIO>,
    entry: &DirEntry,
) -> Result<(), Error> {
    let mut file = parent.open_file(entry)?;
    let mut total = 0;
    loop {
        let step = match file.next_step() {
            Ok(Some(step)) => step,
            Ok(None) => break,
            Err(error) if error.is_bad_cluster() => {
                writeln!(out, "Stopped at bad cluster: {}", error)?;
                break;
            }
            Err(error) => return Err(error.into()),
        };
        let length = step.data.len();
        write!(out, "Cluster {}: ", step.cluster_id)?;
        writeln!(out, "reading {} bytes in sector {} (offset {:#06x})", length, step.sector_id, step.offset)?;
        describe(out, step.next)?;
        total += length;
    }
    writeln!(out, "Read {} of {} bytes", total, entry.size())?;
    Ok(())
}

pub fn chain<W: Write>(out: &mut W, fat12: &mut FAT12<FileIO>, path: &str) -> Result<(), Error> {
    let root = fat12.root_directory()?;
    let (mut parent, entry) = match resolve(root.open(), path)? {
        (parent, Some(entry)) => (parent, entry),
        (_, None) => {
            let sector_id = fat12.volume().root_directory_sector();
            writeln!(out, "Root directory is a fixed region from sector {}", sector_id)?;
            return Ok(());
        }
    };
    writeln!(out, "{}: first cluster {}, {} bytes", entry.name(), entry.first_cluster(), entry.size())?;
    if !entry.first_cluster().valid() {
        writeln!(out, "No cluster allocated")?;
        return Ok(());
    }
    match entry.is_directory() {
        true => directory_chain(out, fat12, entry.first_cluster()),
        false => file_chain(out, &mut parent, &entry),
    }
}
