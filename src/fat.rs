use alloc::vec::Vec;
use core::borrow::Borrow;

use crate::error::DataError;
pub use crate::region::fat::Entry;
use crate::types::ClusterID;

/// Split one 3-byte group into its two 12-bit entries, even entry first
#[inline]
pub fn unpack(group: [u8; 3]) -> (u16, u16) {
    let [b1, b2, b3] = group.map(u16::from);
    let even = ((b2 & 0x0F) << 8) | b1;
    let odd = (b3 << 4) | (b2 >> 4);
    (even, odd)
}

/// Inverse of [`unpack`], upper 4 bits of each entry are ignored
#[inline]
pub fn pack(even: u16, odd: u16) -> [u8; 3] {
    let (even, odd) = (even & 0xFFF, odd & 0xFFF);
    [even as u8, ((even >> 8) as u8) | ((odd << 4) as u8), (odd >> 4) as u8]
}

/// Extract entry of cluster directly from raw FAT bytes
pub fn entry_at(bytes: &[u8], cluster: u16) -> Option<u16> {
    let offset = cluster as usize + cluster as usize / 2;
    let low = *bytes.get(offset)?;
    let high = *bytes.get(offset + 1)?;
    let word = u16::from_le_bytes([low, high]);
    match cluster & 1 {
        1 => Some(word >> 4),
        _ => Some(word & 0x0FFF),
    }
}

/// Decoded FAT, one 12-bit value per cluster
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FatTable {
    entries: Vec<u16>,
}

impl FatTable {
    pub fn decode(bytes: &[u8]) -> Self {
        let count = bytes.len() * 8 / 12;
        let mut entries = Vec::with_capacity(count);
        let mut groups = bytes.chunks_exact(3);
        for group in &mut groups {
            let (even, odd) = unpack([group[0], group[1], group[2]]);
            entries.push(even);
            entries.push(odd);
        }
        if entries.len() < count {
            let remainder = groups.remainder();
            let (even, _) = unpack([remainder[0], remainder[1], 0]);
            entries.push(even);
        }
        trace!("Decoded {} FAT entries from {} bytes", entries.len(), bytes.len());
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[u16] {
        &self.entries
    }

    pub fn get(&self, cluster_id: ClusterID) -> Option<u16> {
        self.entries.get(u16::from(cluster_id) as usize).copied()
    }

    /// Low byte of entry 0 mirrors media descriptor
    pub fn media_descriptor(&self) -> Option<u8> {
        self.entries.first().map(|&entry| entry as u8)
    }

    pub fn next_cluster(&self, cluster_id: ClusterID) -> Result<Entry, DataError> {
        let value = self.get(cluster_id).ok_or(DataError::FATChain(cluster_id))?;
        Ok(Entry::from(value))
    }

    pub fn chain(&self, first: ClusterID) -> Chain<&Self> {
        Chain::new(self, first)
    }
}

/// Lazily follows FAT links from a first cluster
///
/// Finite, ends at end-of-chain or after yielding one chain-integrity error.
/// A first cluster below 2 yields nothing.
#[derive(Clone, Debug)]
pub struct Chain<F> {
    fat: F,
    next: Option<Result<ClusterID, DataError>>,
    visited: usize,
}

impl<F: Borrow<FatTable>> Chain<F> {
    pub fn new(fat: F, first: ClusterID) -> Self {
        let next = match () {
            _ if !first.valid() => None,
            _ if fat.borrow().get(first).is_none() => Some(Err(DataError::FATChain(first))),
            _ => Some(Ok(first)),
        };
        Self { fat, next, visited: 0 }
    }

    pub fn fat(&self) -> &FatTable {
        self.fat.borrow()
    }
}

impl<F: Borrow<FatTable>> Iterator for Chain<F> {
    type Item = Result<ClusterID, DataError>;

    fn next(&mut self) -> Option<Self::Item> {
        let cluster_id = match self.next.take()? {
            Ok(cluster_id) => cluster_id,
            Err(e) => return Some(Err(e)),
        };
        let fat = self.fat.borrow();
        self.visited += 1;
        if self.visited > fat.len() {
            warn!("Cluster chain loops at cluster {}", cluster_id);
            return Some(Err(DataError::FATChain(cluster_id)));
        }
        self.next = match fat.next_cluster(cluster_id) {
            Ok(Entry::Next(next)) if fat.get(next).is_none() => {
                Some(Err(DataError::FATChain(cluster_id)))
            }
            Ok(Entry::Next(next)) => Some(Ok(next)),
            Ok(Entry::Last) => None,
            Ok(Entry::BadCluster) => Some(Err(DataError::BadCluster(cluster_id))),
            Ok(Entry::Free | Entry::Reserved) => Some(Err(DataError::FATChain(cluster_id))),
            Err(e) => Some(Err(e)),
        };
        trace!("Cluster {} next {:?}", cluster_id, self.next);
        Some(Ok(cluster_id))
    }
}
