use core::fmt::{Debug, Display, Formatter, Result};

use displaydoc::Display as DisplayDoc;
use thiserror::Error as ThisError;

use crate::types::ClusterID;

/// Volume content that does not describe a usable FAT12 structure
#[derive(Copy, Clone, Debug, DisplayDoc, ThisError, PartialEq, Eq)]
pub enum DataError {
    /// Not a FAT12 filesystem
    NotFAT12,
    /// Invalid volume geometry: {0}
    Geometry(&'static str),
    /// Bad cluster marked after cluster {0}
    BadCluster(ClusterID),
    /// Broken FAT chain at cluster {0}
    FATChain(ClusterID),
    /// Cluster chain ends before file size is reached
    ChainTooShort,
}

#[derive(Copy, Clone, Debug, DisplayDoc, ThisError, PartialEq, Eq)]
pub enum OperationError {
    /// No such file or directory
    NotFound,
    /// Not a directory
    NotDirectory,
    /// Not a file
    NotFile,
}

#[derive(Copy, Clone, Debug, DisplayDoc, ThisError, PartialEq, Eq)]
pub enum InputError {
    /// Name or extension too long for a short name
    NameTooLong,
    /// Invalid short name
    InvalidName,
}

#[derive(Debug)]
pub enum Error<E> {
    IO(E),
    Data(DataError),
    Operation(OperationError),
    Input(InputError),
}

impl<E: Display> Display for Error<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::IO(e) => write!(f, "IO({})", e),
            Self::Data(e) => write!(f, "{}", e),
            Self::Operation(e) => write!(f, "{}", e),
            Self::Input(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(feature = "std")]
impl<E: Debug + Display> std::error::Error for Error<E> {}

impl<E> From<DataError> for Error<E> {
    fn from(e: DataError) -> Self {
        Self::Data(e)
    }
}

impl<E> From<OperationError> for Error<E> {
    fn from(e: OperationError) -> Self {
        Self::Operation(e)
    }
}

impl<E> From<InputError> for Error<E> {
    fn from(e: InputError) -> Self {
        Self::Input(e)
    }
}

impl<E> Error<E> {
    pub fn is_bad_cluster(&self) -> bool {
        matches!(self, Self::Data(DataError::BadCluster(_)))
    }
}

#[cfg(test)]
mod test {
    use super::{DataError, Error, OperationError};

    #[test]
    fn test_is_bad_cluster() {
        let error: Error<()> = DataError::BadCluster(2.into()).into();
        assert!(error.is_bad_cluster());
        let error: Error<()> = DataError::FATChain(2.into()).into();
        assert!(!error.is_bad_cluster());
        let error: Error<()> = OperationError::NotFound.into();
        assert!(!error.is_bad_cluster());
        assert!(!Error::IO(()).is_bad_cluster());
    }
}
