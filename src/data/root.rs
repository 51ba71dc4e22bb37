use core::fmt::Debug;

use super::directory::{Directory, Location};
use super::meta::Meta;
use crate::error::Error;
use crate::name::{self, NameString};
use crate::region::boot::BootSector;

pub struct RootDirectory<IO> {
    meta: Meta<IO>,
    volume_label: Option<NameString>,
}

impl<E: Debug, IO: crate::io::IO<Error = E>> RootDirectory<IO> {
    pub(crate) fn new(meta: Meta<IO>, boot_sector: &BootSector) -> Result<Self, Error<E>> {
        let mut directory = Directory::new(meta.clone(), Location::Root);
        let label = directory.walk(|entry| entry.is_volume_label())?;
        let volume_label = match label {
            Some(entry) => Some(entry.label()),
            None if boot_sector.has_extended_bpb() => Some(name::render_label(&boot_sector.volume_label())),
            None => None,
        };
        let volume_label = volume_label.filter(|label| !label.is_empty());
        debug!("Volume label {:?}", volume_label);
        Ok(Self { meta, volume_label })
    }

    /// Label entry of root directory, falls back to extended boot sector label
    pub fn volume_label(&self) -> Option<&str> {
        self.volume_label.as_ref().map(|label| label.as_str())
    }

    pub fn open(&self) -> Directory<IO> {
        Directory::new(self.meta.clone(), Location::Root)
    }
}

#[cfg(test)]
mod test {
    use crate::FAT12;
    use crate::region::directory::Attributes;
    use crate::testing::{Image, entry};

    #[test]
    fn test_volume_label_entry() {
        let mut image = Image::new();
        image.root_entry(0, entry(b"README  TXT", 0x20, 0, 0));
        image.root_entry(1, entry(b"FLOPPY  01 ", Attributes::VOLUME_LABEL, 0, 0));
        let mut fat12 = FAT12::new(image.finish()).unwrap();
        let root = fat12.root_directory().unwrap();
        assert_eq!(root.volume_label(), Some("FLOPPY  01"));
    }

    #[test]
    fn test_volume_label_fallback() {
        let mut fat12 = FAT12::new(Image::new().finish()).unwrap();
        let root = fat12.root_directory().unwrap();
        assert_eq!(root.volume_label(), Some("TESTVOLUME"));
    }
}
