use alloc::vec::Vec;
use core::fmt::Debug;

use super::entry::DirEntry;
use super::meta::Meta;
use crate::error::{DataError, Error};
use crate::fat::{Chain, Entry, FatTable};
use crate::types::{ClusterID, SectorID};

/// One cluster worth of a chain walk
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub cluster_id: ClusterID,
    pub sector_id: SectorID,
    /// Byte offset of `sector_id` on medium
    pub offset: u64,
    pub data: Vec<u8>,
    /// FAT entry of `cluster_id`, the link to be followed next
    pub next: Option<Entry>,
}

pub struct File<IO> {
    meta: Meta<IO>,
    entry: DirEntry,
    chain: Option<Chain<FatTable>>,
    remaining: u32,
    started: bool,
}

impl<E: Debug, IO: crate::io::IO<Error = E>> File<IO> {
    pub(crate) fn new(meta: Meta<IO>, entry: DirEntry) -> Result<Self, Error<E>> {
        let fat = meta.fat_table()?;
        let chain = Some(Chain::new(fat, entry.first_cluster()));
        Ok(Self { meta, entry, chain, remaining: entry.size(), started: false })
    }

    pub fn entry(&self) -> &DirEntry {
        &self.entry
    }

    pub fn size(&self) -> u32 {
        self.entry.size()
    }

    /// Bytes not yet returned by `next_step`
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Read next cluster of chain, capped at remaining file size.
    ///
    /// Returns `None` once the chain ends with file size consumed,
    /// a chain ending before that fails with `ChainTooShort`.
    /// A zero-length file with an allocated cluster yields one step
    /// without data, carrying the classification of its first link.
    pub fn next_step(&mut self) -> Result<Option<Step>, Error<E>> {
        let chain = match self.chain.as_mut() {
            Some(chain) => chain,
            None => return Ok(None),
        };
        let cluster_id = match chain.next() {
            Some(Ok(cluster_id)) => cluster_id,
            Some(Err(e)) => {
                self.chain = None;
                return Err(e.into());
            }
            None => {
                self.chain = None;
                return match self.remaining {
                    0 => Ok(None),
                    _ => Err(DataError::ChainTooShort.into()),
                };
            }
        };
        let first = !self.started;
        self.started = true;
        if self.remaining == 0 && !first {
            warn!("Cluster chain of {} continues at {} past file size", self.entry.name(), cluster_id);
            self.chain = None;
            return Ok(None);
        }
        let next = chain.fat().next_cluster(cluster_id).ok();
        let volume = &self.meta.volume;
        let sector_id = volume.cluster_sector(cluster_id);
        let offset = volume.sector_offset(sector_id);
        let data = match self.remaining {
            0 => Vec::new(),
            remaining => self.meta.read_cluster(cluster_id, remaining as usize)?,
        };
        trace!("Read {} bytes in sector {} of cluster {}", data.len(), sector_id, cluster_id);
        self.remaining -= data.len() as u32;
        Ok(Some(Step { cluster_id, sector_id, offset, data, next }))
    }

    /// Drain remaining chain into one buffer
    pub fn read_to_end(&mut self) -> Result<Vec<u8>, Error<E>> {
        let mut bytes = Vec::with_capacity(self.remaining as usize);
        while let Some(step) = self.next_step()? {
            bytes.extend_from_slice(&step.data);
        }
        Ok(bytes)
    }
}
