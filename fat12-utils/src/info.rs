use std::io::Write;

use fat12::FAT12;
use fat12::io::std::FileIO;

use crate::Error;

fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

pub fn info<W: Write>(out: &mut W, fat12: &mut FAT12<FileIO>) -> Result<(), Error> {
    let boot = *fat12.boot_sector();
    let volume = *fat12.volume();
    writeln!(out, "OEM name: {}", text(&boot.oem_name()))?;
    writeln!(out, "Bytes per logical sector: {}", boot.bytes_per_sector())?;
    writeln!(out, "Logical sectors per cluster: {}", boot.sectors_per_cluster())?;
    writeln!(out, "Reserved logical sectors: {}", boot.reserved_sectors())?;
    writeln!(out, "Number of FATs: {}", boot.number_of_fats())?;
    writeln!(out, "Root directory entries: {}", boot.root_entries())?;
    writeln!(out, "Total logical sectors: {}", boot.total_sectors())?;
    writeln!(out, "Media descriptor: {:#04x}", boot.media_descriptor())?;
    writeln!(out, "Logical sectors per FAT: {}", boot.sectors_per_fat())?;
    writeln!(out, "Physical sectors per track: {}", boot.sectors_per_track())?;
    writeln!(out, "Number of heads: {}", boot.heads())?;
    writeln!(out, "Hidden sectors: {}", boot.hidden_sectors())?;
    writeln!(out, "Total logical sectors extended: {}", boot.total_sectors_extended())?;
    writeln!(out, "Drive number: {:#04x}", boot.drive_number())?;
    writeln!(out, "Extended boot signature: {:#04x}", boot.extended_signature())?;
    if boot.has_extended_bpb() {
        writeln!(out, "Volume id: {:08X}", boot.volume_id())?;
        writeln!(out, "Volume label: {}", text(&boot.volume_label()))?;
        writeln!(out, "Filesystem type: {}", text(&boot.filesystem_type()))?;
    }
    writeln!(out, "Boot signature: {}", if boot.has_boot_signature() { "55 AA" } else { "missing" })?;
    writeln!(out)?;

    let root_sector = volume.root_directory_sector();
    writeln!(out, "FAT offset: {:#x}", volume.fat_offset())?;
    writeln!(out, "FAT size: {} bytes", volume.fat_length())?;
    writeln!(out, "Root directory size: {} sectors", volume.root_directory_sectors())?;
    writeln!(out, "Root directory size: {} bytes", volume.root_directory_size())?;
    writeln!(out, "Root directory offset: {} sectors", root_sector)?;
    writeln!(out, "Root directory offset: {:#x}", volume.sector_offset(root_sector))?;
    writeln!(out, "First data sector: {}", volume.first_data_sector())?;
    writeln!(out, "Data clusters: {}", volume.cluster_count(boot.total_sector_count()))?;
    let root = fat12.root_directory()?;
    writeln!(out, "Volume label: {}", root.volume_label().unwrap_or("<none>"))?;
    Ok(())
}
