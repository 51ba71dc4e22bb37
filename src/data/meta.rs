use alloc::vec::Vec;
use core::fmt::Debug;

use crate::error::Error;
use crate::fat::FatTable;
use crate::fs::Volume;
use crate::io::{self, Wrap};
use crate::sync::{Shared, acquire};
use crate::types::{ClusterID, SectorID};

/// State shared by every handle opened from one volume
pub(crate) struct Meta<IO> {
    pub io: Shared<IO>,
    pub volume: Volume,
}

impl<IO> Clone for Meta<IO> {
    fn clone(&self) -> Self {
        Self { io: self.io.clone(), volume: self.volume }
    }
}

impl<E: Debug, IO: io::IO<Error = E>> Meta<IO> {
    pub fn read(&self, offset: u64, length: usize) -> Result<Vec<u8>, Error<E>> {
        acquire!(self.io).wrap().read(offset, length)
    }

    pub fn read_sectors(&self, sector_id: SectorID, count: u64) -> Result<Vec<u8>, Error<E>> {
        let length = count * self.volume.sector_size();
        self.read(self.volume.sector_offset(sector_id), length as usize)
    }

    /// Read up to one cluster, starting from its first sector
    pub fn read_cluster(&self, cluster_id: ClusterID, length: usize) -> Result<Vec<u8>, Error<E>> {
        let length = core::cmp::min(length, self.volume.cluster_size());
        self.read(self.volume.cluster_offset(cluster_id), length)
    }

    /// Decode first FAT afresh, never cached between sessions
    pub fn fat_table(&self) -> Result<FatTable, Error<E>> {
        let (offset, length) = (self.volume.fat_offset(), self.volume.fat_length());
        debug!("Read FAT at offset {:#x} length {}", offset, length);
        let bytes = self.read(offset, length)?;
        Ok(FatTable::decode(&bytes))
    }
}
