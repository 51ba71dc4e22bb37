/// Boot sector, BIOS parameter block and its extension
/// first sector of volume
pub(crate) mod boot;

/// FAT region, 12 bits per cluster packed in little endian
/// ([`reserved-sectors`][link] + [`hidden-sectors`][link]) sectors from start of medium
///
/// [link]: boot::BootSector
pub(crate) mod fat;

/// Directory records, both root directory region and subdirectory clusters
pub(crate) mod directory;
