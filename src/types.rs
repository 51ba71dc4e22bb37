use derive_more::{Display, From, Into};

/// Absolute sector number on the medium
#[derive(Copy, Clone, Debug, Default, Display, From, Into, Eq, Hash, Ord, PartialOrd, PartialEq)]
pub struct SectorID(u64);

impl<I: Into<u64>> core::ops::Add<I> for SectorID {
    type Output = Self;

    fn add(self, rhs: I) -> Self {
        Self(self.0 + rhs.into())
    }
}

impl<I: Into<u64>> core::ops::AddAssign<I> for SectorID {
    fn add_assign(&mut self, rhs: I) {
        self.0 += rhs.into()
    }
}

/// Cluster number as stored in FAT entries and directory entries
#[derive(Copy, Clone, Debug, Default, Display, From, Into, Eq, Hash, Ord, PartialOrd, PartialEq)]
pub struct ClusterID(u16);

impl ClusterID {
    pub const FIRST: Self = Self(2);

    /// Cluster 0 and 1 are reserved and never address data
    pub fn valid(&self) -> bool {
        self.0 >= Self::FIRST.0
    }

    pub(crate) fn offset(self) -> u16 {
        self.0.saturating_sub(Self::FIRST.0)
    }
}
