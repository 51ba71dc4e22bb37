use crate::types::ClusterID;

/// Classified 12-bit FAT entry
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Entry {
    Free,
    Reserved,
    Next(ClusterID),
    BadCluster,
    Last,
}

impl From<u16> for Entry {
    fn from(value: u16) -> Self {
        match value & 0xFFF {
            0 => Self::Free,
            1 => Self::Reserved,
            0xFF7 => Self::BadCluster,
            0xFF8..=0xFFF => Self::Last,
            value => Self::Next(value.into()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Entry;

    #[test]
    fn test_classify() {
        for value in 0xFF8..=0xFFF {
            assert_eq!(Entry::from(value), Entry::Last);
        }
        assert_eq!(Entry::from(0xFF7), Entry::BadCluster);
        for value in 2..0xFF7 {
            assert_eq!(Entry::from(value), Entry::Next(value.into()));
        }
        assert_eq!(Entry::from(0), Entry::Free);
        assert_eq!(Entry::from(1), Entry::Reserved);
    }
}
