#[cfg(feature = "std")]
pub mod std;
mod memory;

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::ops::DerefMut;

pub use memory::{Memory, MemoryError};

use crate::error::Error;

/// Byte addressed, read-only medium
pub trait IO {
    type Error: Debug;

    /// Position the medium at absolute byte offset
    fn seek(&mut self, offset: u64) -> Result<(), Self::Error>;
    /// Fill the whole buffer from current position, a short read is an error
    fn read(&mut self, buf: &mut [u8]) -> Result<(), Self::Error>;
}

pub(crate) struct Wrapper<D>(D);

impl<E, T, D> Wrapper<D>
where
    T: IO<Error = E>,
    D: DerefMut<Target = T>,
{
    pub fn read(&mut self, offset: u64, length: usize) -> Result<Vec<u8>, Error<E>> {
        trace!("Read {} bytes at offset {:#x}", length, offset);
        let mut bytes = vec![0u8; length];
        if length == 0 {
            return Ok(bytes);
        }
        self.0.seek(offset).map_err(|e| Error::IO(e))?;
        self.0.read(&mut bytes).map_err(|e| Error::IO(e))?;
        Ok(bytes)
    }
}

pub(crate) trait Wrap {
    type Output;
    fn wrap(self) -> Self::Output;
}

impl<E, T, D> Wrap for D
where
    T: IO<Error = E>,
    D: DerefMut<Target = T>,
{
    type Output = Wrapper<D>;
    fn wrap(self) -> Self::Output {
        Wrapper(self)
    }
}
