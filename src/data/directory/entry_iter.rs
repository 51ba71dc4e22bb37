use alloc::vec::Vec;
use core::fmt::Debug;

use super::super::entry::DirEntry;
use super::super::meta::Meta;
use super::Location;
use crate::error::Error;
use crate::fat::{Chain, FatTable};
use crate::region::directory::{ENTRY_SIZE, RawEntry};
use crate::types::SectorID;

enum Source {
    /// Fixed sector range following the FATs, read one sector at a time
    Root { sector_id: SectorID, remaining: u64 },
    /// Whole clusters along the chain
    Chain(Chain<FatTable>),
}

pub(crate) struct EntryIter<'a, IO> {
    meta: &'a Meta<IO>,
    source: Source,
    buffer: Vec<u8>,
    index: usize,
    finished: bool,
}

impl<'a, E: Debug, IO: crate::io::IO<Error = E>> EntryIter<'a, IO> {
    pub(crate) fn new(meta: &'a Meta<IO>, location: Location) -> Result<Self, Error<E>> {
        let source = match location {
            Location::Root => {
                let sector_id = meta.volume.root_directory_sector();
                Source::Root { sector_id, remaining: meta.volume.root_directory_sectors() }
            }
            Location::Chain(cluster_id) => Source::Chain(Chain::new(meta.fat_table()?, cluster_id)),
        };
        Ok(Self { meta, source, buffer: Vec::new(), index: 0, finished: false })
    }

    fn fill(&mut self) -> Result<bool, Error<E>> {
        let buffer = match &mut self.source {
            Source::Root { remaining: 0, .. } => return Ok(false),
            Source::Root { sector_id, remaining } => {
                let buffer = self.meta.read_sectors(*sector_id, 1)?;
                *sector_id += 1u64;
                *remaining -= 1;
                buffer
            }
            Source::Chain(chain) => match chain.next() {
                Some(Ok(cluster_id)) => {
                    let cluster_size = self.meta.volume.cluster_size();
                    self.meta.read_cluster(cluster_id, cluster_size)?
                }
                Some(Err(e)) => return Err(e.into()),
                None => return Ok(false),
            },
        };
        self.buffer = buffer;
        self.index = 0;
        Ok(true)
    }

    /// Next record in use, `None` after end of directory marker
    pub fn next(&mut self) -> Result<Option<DirEntry>, Error<E>> {
        while !self.finished {
            let offset = self.index * ENTRY_SIZE;
            if offset + ENTRY_SIZE > self.buffer.len() {
                self.finished = !self.fill()?;
                continue;
            }
            self.index += 1;
            let mut raw: RawEntry = [0u8; ENTRY_SIZE];
            raw.copy_from_slice(&self.buffer[offset..offset + ENTRY_SIZE]);
            let entry = DirEntry::from(raw);
            if entry.is_end_of_directory() {
                self.finished = true;
            } else if !entry.is_deleted() {
                return Ok(Some(entry));
            }
        }
        Ok(None)
    }
}
