use std::fs;
use std::io::prelude::*;
use std::io::SeekFrom;
use std::path::Path;

/// Disk image or block device opened read-only
#[derive(Debug)]
pub struct FileIO {
    file: fs::File,
}

impl FileIO {
    pub fn open<P: AsRef<Path>>(filepath: P) -> std::io::Result<Self> {
        let file = fs::File::options().read(true).open(filepath)?;
        Ok(Self { file })
    }
}

impl super::IO for FileIO {
    type Error = std::io::Error;

    fn seek(&mut self, offset: u64) -> Result<(), Self::Error> {
        self.file.seek(SeekFrom::Start(offset)).map(|_| ())
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.file.read_exact(buf)
    }
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use super::FileIO;
    use crate::io::IO;

    #[test]
    fn test_short_read_is_error() {
        let path = std::env::temp_dir().join(format!("fat12-fileio-{}.img", std::process::id()));
        std::fs::File::create(&path).unwrap().write_all(&[1, 2, 3, 4]).unwrap();
        let mut io = FileIO::open(&path).unwrap();
        let mut buf = [0u8; 2];
        io.seek(2).unwrap();
        io.read(&mut buf).unwrap();
        assert_eq!(buf, [3, 4]);
        let mut buf = [0u8; 4];
        io.seek(2).unwrap();
        let error = io.read(&mut buf).unwrap_err();
        assert_eq!(error.kind(), std::io::ErrorKind::UnexpectedEof);
        std::fs::remove_file(&path).unwrap();
    }
}
