mod entry_iter;

use alloc::vec::Vec;
use core::fmt::Debug;

use super::entry::DirEntry;
use super::file::File;
use super::meta::Meta;
use crate::error::{Error, OperationError};
use crate::name::ShortName;
use crate::types::ClusterID;
use entry_iter::EntryIter;

/// Where directory records live
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Location {
    /// Fixed region between FATs and data area
    Root,
    /// Cluster chain in data area
    Chain(ClusterID),
}

pub struct Directory<IO> {
    meta: Meta<IO>,
    location: Location,
}

pub enum FileOrDirectory<IO> {
    File(File<IO>),
    Directory(Directory<IO>),
}

/// Fully read target of a directory entry
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Contents {
    File(Vec<u8>),
    Directory(Vec<DirEntry>),
}

impl<E: Debug, IO: crate::io::IO<Error = E>> Directory<IO> {
    pub(crate) fn new(meta: Meta<IO>, location: Location) -> Self {
        Self { meta, location }
    }

    pub fn location(&self) -> Location {
        self.location
    }

    fn walk_matches<F, H, R>(&mut self, f: F, mut h: H) -> Result<Option<R>, Error<E>>
    where
        F: Fn(&DirEntry) -> bool,
        H: FnMut(&DirEntry) -> Option<R>,
    {
        let mut iter = EntryIter::new(&self.meta, self.location)?;
        while let Some(entry) = iter.next()? {
            if entry.is_long_name() || !f(&entry) {
                continue;
            }
            if let Some(retval) = h(&entry) {
                return Ok(Some(retval));
            }
        }
        Ok(None)
    }

    /// Walk through records in use until `h` returns true
    pub fn walk<H>(&mut self, mut h: H) -> Result<Option<DirEntry>, Error<E>>
    where
        H: FnMut(&DirEntry) -> bool,
    {
        self.walk_matches(|_| true, |entry| if h(entry) { Some(*entry) } else { None })
    }

    /// Every record in use, including volume label and dot entries,
    /// long-name records excluded
    pub fn entries(&mut self) -> Result<Vec<DirEntry>, Error<E>> {
        let mut entries = Vec::new();
        self.walk(|entry| {
            entries.push(*entry);
            false
        })?;
        Ok(entries)
    }

    /// Find a file or directory by short name, `NAME.EXT` or `NAME`
    pub fn find(&mut self, name: &str) -> Result<Option<DirEntry>, Error<E>> {
        let name = ShortName::new(name)?;
        self.find_name(&name)
    }

    pub fn find_name(&mut self, name: &ShortName) -> Result<Option<DirEntry>, Error<E>> {
        self.walk_matches(|entry| !entry.is_volume_label() && entry.matches(name), |entry| Some(*entry))
    }

    /// Open a file or directory
    pub fn open(&mut self, entry: &DirEntry) -> Result<FileOrDirectory<IO>, Error<E>> {
        let cluster_id = entry.first_cluster();
        trace!("Open {} on cluster {}", entry.name(), cluster_id);
        if entry.is_volume_label() || entry.is_long_name() {
            return Err(OperationError::NotFile.into());
        }
        if !entry.is_directory() {
            return Ok(FileOrDirectory::File(File::new(self.meta.clone(), *entry)?));
        }
        if entry.size() > 0 {
            warn!("Directory {} with non-zero size {}", entry.name(), entry.size());
        }
        let location = match cluster_id.valid() {
            false if entry.is_dot() => Location::Root,
            _ => Location::Chain(cluster_id),
        };
        Ok(FileOrDirectory::Directory(Directory::new(self.meta.clone(), location)))
    }

    pub fn open_directory(&mut self, entry: &DirEntry) -> Result<Directory<IO>, Error<E>> {
        match self.open(entry)? {
            FileOrDirectory::Directory(directory) => Ok(directory),
            FileOrDirectory::File(_) => Err(OperationError::NotDirectory.into()),
        }
    }

    pub fn open_file(&mut self, entry: &DirEntry) -> Result<File<IO>, Error<E>> {
        match self.open(entry)? {
            FileOrDirectory::File(file) => Ok(file),
            FileOrDirectory::Directory(_) => Err(OperationError::NotFile.into()),
        }
    }

    /// Read whole target of entry, file bytes or directory records
    pub fn read(&mut self, entry: &DirEntry) -> Result<Contents, Error<E>> {
        match self.open(entry)? {
            FileOrDirectory::File(mut file) => Ok(Contents::File(file.read_to_end()?)),
            FileOrDirectory::Directory(mut directory) => {
                Ok(Contents::Directory(directory.entries()?))
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Contents, Location};
    use crate::FAT12;
    use crate::error::{Error, InputError, OperationError};
    use crate::region::directory::Attributes;
    use crate::testing::{Image, entry};

    fn image() -> Image {
        let mut image = Image::new();
        image.root_entry(0, entry(b"TESTVOL    ", Attributes::VOLUME_LABEL, 0, 0));
        image.root_entry(1, entry(b"HELLO   TXT", 0x20, 2, 6));
        image.root_entry(2, entry(b"OLD     TXT", 0x20, 0, 0));
        image.root_entry(3, entry(b"SUBDIR     ", Attributes::DIRECTORY, 3, 0));
        image.root_entry(5, entry(b"HIDDEN  TXT", 0x20, 0, 0));
        image.set_root_byte(2, 0, 0xE5);
        image.link(&[2]);
        image.write_cluster(2, b"hello\n");
        image.link(&[3, 4]);
        image.cluster_entry(3, 0, entry(b".          ", Attributes::DIRECTORY, 3, 0));
        image.cluster_entry(3, 1, entry(b"..         ", Attributes::DIRECTORY, 0, 0));
        image.cluster_entry(3, 2, entry(b"INNER   BIN", 0x01, 5, 3));
        for index in 3..16 {
            image.cluster_entry(3, index, entry(b"FILLER  DAT", 0x20, 0, 0));
        }
        image.cluster_entry(4, 0, entry(b"LAST    DAT", 0x20, 0, 0));
        image.link(&[5]);
        image.write_cluster(5, b"abc");
        image
    }

    #[test]
    fn test_root_entries() {
        let mut fat12 = FAT12::new(image().finish()).unwrap();
        let mut root = fat12.root_directory().unwrap().open();
        assert_eq!(root.location(), Location::Root);
        let entries = root.entries().unwrap();
        let names: Vec<String> = entries.iter().map(|e| e.name().as_str().to_string()).collect();
        // Deleted record skipped, walk stops at first unused record
        assert_eq!(names, ["TESTVOL", "HELLO.TXT", "SUBDIR"]);
    }

    #[test]
    fn test_find() {
        let mut fat12 = FAT12::new(image().finish()).unwrap();
        let mut root = fat12.root_directory().unwrap().open();
        let entry = root.find("HELLO.TXT").unwrap().unwrap();
        assert_eq!(entry.size(), 6);
        assert!(root.find("HELLO").unwrap().is_some());
        assert!(root.find("HELLO.BIN").unwrap().is_none());
        assert!(root.find("hello.txt").unwrap().is_none());
        assert!(root.find("OLD.TXT").unwrap().is_none());
        assert!(root.find("HIDDEN.TXT").unwrap().is_none());
        assert!(root.find("TESTVOL").unwrap().is_none());
        let result = root.find("NAMETOOLONG.TXT");
        assert!(matches!(result, Err(Error::Input(InputError::NameTooLong))));
    }

    #[test]
    fn test_read_file() {
        let mut fat12 = FAT12::new(image().finish()).unwrap();
        let mut root = fat12.root_directory().unwrap().open();
        let entry = root.find("HELLO.TXT").unwrap().unwrap();
        assert_eq!(root.read(&entry).unwrap(), Contents::File(b"hello\n".to_vec()));
        let result = root.open_directory(&entry);
        assert!(matches!(result, Err(Error::Operation(OperationError::NotDirectory))));
    }

    #[test]
    fn test_read_directory() {
        let mut fat12 = FAT12::new(image().finish()).unwrap();
        let mut root = fat12.root_directory().unwrap().open();
        let entry = root.find("SUBDIR").unwrap().unwrap();
        assert!(entry.is_directory());
        let entries = match root.read(&entry).unwrap() {
            Contents::Directory(entries) => entries,
            Contents::File(_) => panic!("Expect directory"),
        };
        assert_eq!(entries.len(), 17);
        assert_eq!(entries[2].name().as_str(), "INNER.BIN");
        assert_eq!(entries[16].name().as_str(), "LAST.DAT");

        let mut subdir = root.open_directory(&entry).unwrap();
        assert_eq!(subdir.location(), Location::Chain(3.into()));
        let inner = subdir.find("INNER.BIN").unwrap().unwrap();
        assert!(inner.attributes().read_only());
        assert_eq!(subdir.read(&inner).unwrap(), Contents::File(b"abc".to_vec()));
        let result = subdir.open_file(&entry);
        assert!(matches!(result, Err(Error::Operation(OperationError::NotFile))));

        let parent = subdir.find("..").unwrap().unwrap();
        let mut parent = subdir.open_directory(&parent).unwrap();
        assert_eq!(parent.location(), Location::Root);
        assert!(parent.find("HELLO.TXT").unwrap().is_some());
    }
}
