#![doc = include_str!("../README.md")]
#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;

#[macro_use]
extern crate hex_literal;
extern crate heapless;
#[macro_use]
extern crate log;

mod data;
mod endian;
pub mod error;
pub mod fat;
pub mod fs;
pub mod io;
pub mod name;
mod region;
pub(crate) mod sync;
#[cfg(test)]
mod testing;
pub mod types;

use alloc::vec::Vec;
use core::fmt::Debug;

pub use data::directory::{Contents, Directory, FileOrDirectory, Location};
pub use data::entry::{DateTime, DirEntry, decode_entries};
pub use data::file::{File, Step};
pub use data::root::RootDirectory;
use data::meta::Meta;
use error::{DataError, Error};
use fat::FatTable;
use fs::Volume;
use io::Wrap;
pub use region::boot::{BOOT_SECTOR_SIZE, BootSector};
pub use region::directory::{Attributes, Date, Time};
use sync::{Shared, shared};

/// Raw on-disk areas preceding the data region
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Region {
    Boot,
    /// First copy of the FAT
    FAT,
    RootDirectory,
}

pub struct FAT12<IO> {
    io: Shared<IO>,
    boot_sector: BootSector,
    volume: Volume,
}

impl<E: Debug, IO: io::IO<Error = E>> FAT12<IO> {
    pub fn new(mut io: IO) -> Result<Self, Error<E>> {
        let bytes = (&mut io).wrap().read(0, BOOT_SECTOR_SIZE)?;
        let mut sector = [0u8; BOOT_SECTOR_SIZE];
        sector.copy_from_slice(&bytes);
        let boot_sector = BootSector::from(sector);
        if !boot_sector.has_boot_signature() {
            warn!("Boot sector signature missing");
        }
        let volume = Volume::from(&boot_sector);
        debug!("Volume geometry {:?}", volume);
        debug!(
            "FAT offset {:#x} root directory sector {} first data sector {}",
            volume.fat_offset(),
            volume.root_directory_sector(),
            volume.first_data_sector()
        );
        Ok(Self { io: shared(io), boot_sector, volume })
    }

    fn meta(&self) -> Meta<IO> {
        Meta { io: self.io.clone(), volume: self.volume }
    }

    pub fn boot_sector(&self) -> &BootSector {
        &self.boot_sector
    }

    pub fn volume(&self) -> &Volume {
        &self.volume
    }

    /// Reject boot sectors that do not describe a FAT12 volume
    pub fn validate(&self) -> Result<(), Error<E>> {
        self.volume.validate(self.boot_sector.total_sector_count())?;
        if !self.boot_sector.has_extended_bpb() {
            return Err(DataError::Geometry("extended signature").into());
        }
        Ok(())
    }

    /// Decode first FAT
    pub fn fat_table(&self) -> Result<FatTable, Error<E>> {
        self.meta().fat_table()
    }

    pub fn read_region(&self, region: Region) -> Result<Vec<u8>, Error<E>> {
        let meta = self.meta();
        let volume = &self.volume;
        match region {
            Region::Boot => meta.read(0, BOOT_SECTOR_SIZE),
            Region::FAT => meta.read(volume.fat_offset(), volume.fat_length()),
            Region::RootDirectory => {
                meta.read_sectors(volume.root_directory_sector(), volume.root_directory_sectors())
            }
        }
    }

    pub fn root_directory(&mut self) -> Result<RootDirectory<IO>, Error<E>> {
        RootDirectory::new(self.meta(), &self.boot_sector)
    }

    /// Take back block source once every handle has been dropped
    pub fn try_free(self) -> Result<IO, Self> {
        let FAT12 { io, boot_sector, volume } = self;
        let io = match () {
            #[cfg(all(feature = "sync", feature = "std"))]
            () => alloc::sync::Arc::try_unwrap(io)
                .map(|mutex| mutex.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())),
            #[cfg(all(feature = "sync", not(feature = "std")))]
            () => alloc::sync::Arc::try_unwrap(io).map(|mutex| mutex.into_inner()),
            #[cfg(not(feature = "sync"))]
            () => alloc::rc::Rc::try_unwrap(io).map(|cell| cell.into_inner()),
        };
        io.map_err(|io| Self { io, boot_sector, volume })
    }
}
