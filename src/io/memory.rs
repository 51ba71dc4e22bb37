use displaydoc::Display;
use thiserror::Error;

#[derive(Copy, Clone, Debug, Display, Error, PartialEq, Eq)]
pub enum MemoryError {
    /// Seek to offset {0} beyond end of medium
    Seek(u64),
    /// Read {length} bytes at offset {position} beyond end of medium
    Read { position: usize, length: usize },
}

/// Medium backed by an in-memory image
#[derive(Clone, Debug)]
pub struct Memory<B> {
    bytes: B,
    position: usize,
}

impl<B: AsRef<[u8]>> Memory<B> {
    pub fn new(bytes: B) -> Self {
        Self { bytes, position: 0 }
    }

    pub fn into_inner(self) -> B {
        self.bytes
    }
}

impl<B: AsRef<[u8]>> super::IO for Memory<B> {
    type Error = MemoryError;

    fn seek(&mut self, offset: u64) -> Result<(), Self::Error> {
        let length = self.bytes.as_ref().len();
        match usize::try_from(offset) {
            Ok(position) if position <= length => {
                self.position = position;
                Ok(())
            }
            _ => Err(MemoryError::Seek(offset)),
        }
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<(), Self::Error> {
        let (position, length) = (self.position, buf.len());
        let bytes = self.bytes.as_ref();
        let end = position.checked_add(length).filter(|&end| end <= bytes.len());
        let end = end.ok_or(MemoryError::Read { position, length })?;
        buf.copy_from_slice(&bytes[position..end]);
        self.position = end;
        Ok(())
    }
}
